use std::str::FromStr;
use tracing::level_filters::LevelFilter;

mod grammar;
pub use grammar::*;

mod molecule;
pub use molecule::*;

mod parse;
pub use parse::*;

mod naming;
pub use naming::*;

mod layout;
pub use layout::*;

mod visualize;
pub use visualize::*;

mod report;
pub use report::*;

/// Install a global `tracing` subscriber that prints events at `level` and above.
///
/// Unknown levels fall back to `info`. Calling this again after a subscriber
/// has been installed does nothing, so tests can call it freely.
pub fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or(LevelFilter::INFO);
    let _ = tracing_subscriber::fmt()
        .with_max_level(filter)
        .with_target(false)
        .try_init();
}
