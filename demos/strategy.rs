//! Strategy pattern: characters swapping weapons mid-fight.
//!
//! Run with: cargo run --example strategy

use pattern_demos::console::Console;
use pattern_demos::strategy;

fn main() {
    strategy::run(&Console::stdout());
}
