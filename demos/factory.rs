//! Factory pattern: one dialog per kind, or just the kinds named on the
//! command line.
//!
//! Run with: cargo run --example factory [-- edit delete]

use pattern_demos::console::Console;
use pattern_demos::error::Result;
use pattern_demos::factory::{self, DialogKind, create_dialog};

fn main() -> Result<()> {
    let console = Console::stdout();
    let requested: Vec<String> = std::env::args().skip(1).collect();

    if requested.is_empty() {
        factory::run(&console);
        return Ok(());
    }

    for name in requested {
        let kind: DialogKind = name.parse()?;
        console.println(format_args!("{} -> {:?}", kind, create_dialog(kind)));
    }

    Ok(())
}
