use log::{Level, LevelFilter};
use wave_wasm::LogConfig;

#[test]
fn quiet_config_turns_logging_off() {
    assert_eq!(LogConfig::quiet().max_level(), LevelFilter::Off);
    assert_eq!(LogConfig::default().max_level(), LevelFilter::Info);

    let verbose = LogConfig {
        level: Level::Trace,
        ..LogConfig::default()
    };
    assert_eq!(verbose.max_level(), LevelFilter::Trace);
}

#[test]
fn install_applies_max_level() {
    LogConfig::quiet().install();
    assert_eq!(log::max_level(), LevelFilter::Off);
    LogConfig::default().install();
    assert_eq!(log::max_level(), LevelFilter::Info);
}
