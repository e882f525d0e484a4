use env_logger::Builder;
use log::Level;
use std::io::Write;

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "31", // Red
        Level::Warn => "33",  // Yellow
        Level::Info => "32",  // Green
        Level::Debug => "36", // Cyan
        Level::Trace => "35", // Magenta
    }
}

// Verbosity comes from the repeated -v flag; CODE_PACKAGER_LOG_LEVEL wins
// when set.
pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let default_level = match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    };

    let env = env_logger::Env::default().filter_or("CODE_PACKAGER_LOG_LEVEL", default_level);

    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color(record.level()),
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .init();
    Ok(())
}
