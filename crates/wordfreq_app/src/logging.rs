//! Terminal logging initialization for the word counter.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Initialize the global logger, writing to the terminal.
///
/// Safe to call more than once; later calls are ignored.
pub fn initialize(level: LevelFilter) {
    let _ = TermLogger::init(level, build_config(), TerminalMode::Mixed, ColorChoice::Auto);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}
