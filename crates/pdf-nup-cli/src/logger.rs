use log::LevelFilter;

/// Map `-v` occurrences to a level filter
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger; `RUST_LOG` overrides the `-v` level
pub fn init(verbose: u8) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for_verbosity(verbose))
        .parse_env(env_logger::Env::default())
        .target(env_logger::Target::Stderr)
        .format_timestamp_secs()
        .try_init()
}
