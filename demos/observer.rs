//! Video release scenario for the observer pattern.
//!
//! Three object subscribers and one inline subscriber are registered, then a
//! single video is released. Settings can be layered from an optional file
//! argument and `PATTERNS_*` environment variables.
//!
//! Run with: cargo run --example observer [-- settings.yaml]

use pattern_demos::observer::demo;
use pattern_demos::prelude::*;

fn main() -> Result<()> {
    let mut builder = SettingsBuilder::new();
    if let Some(path) = std::env::args().nth(1) {
        builder = builder.with_file(path);
    }
    let settings = builder.with_env_overrides("PATTERNS", "__").build()?;

    let report = demo::run(&Console::stdout(), &settings)?;
    for failure in &report.failures {
        eprintln!("warning: {}", failure);
    }

    Ok(())
}
