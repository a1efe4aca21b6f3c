use simplelog::{Color, ColorChoice, ConfigBuilder, Level, LevelFilter, TermLogger, TerminalMode};

/// Sends log records of this crate at level `l` and above to the
/// terminal. Fails if a logger is already set.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> {
    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_time_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .add_filter_allow_str("yui_alg")
        .build();

    TermLogger::init(l, config, TerminalMode::Stderr, ColorChoice::Auto)
}
