//! Builder pattern: a hamburger with cheese and onions.
//!
//! Run with: cargo run --example builder

use pattern_demos::console::Console;
use pattern_demos::hamburger;

fn main() {
    hamburger::run(&Console::stdout());
}
