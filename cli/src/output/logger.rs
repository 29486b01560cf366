use chrono::Local;
use log::Level;
use owo_colors::OwoColorize;
use std::io::Write;

/// Wire up env_logger with the console line format: dim HH:MM timestamp,
/// bold four letter level tag, then the message. `RUST_LOG` still
/// overrides the default level.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} {} {}",
                timestamp(),
                level_tag(record.level()),
                record.args()
            )
        })
        .init();
}

/// Fatal diagnostics bypass the logger so they cannot be filtered out.
/// Same line shape with a CRIT tag, written to stderr.
pub fn critical(message: &str) {
    eprintln!("{} {} {}", timestamp(), "CRIT".bold().on_red(), message);
}

fn timestamp() -> String {
    clock().bright_black().to_string()
}

fn clock() -> String {
    Local::now().format("%H:%M").to_string()
}

fn level_tag(level: Level) -> String {
    match level {
        Level::Error => "ERRR".bold().red().to_string(),
        Level::Warn => "WARN".bold().yellow().to_string(),
        Level::Info => "INFO".bold().green().to_string(),
        Level::Debug => "DEBG".bold().cyan().to_string(),
        Level::Trace => "TRCE".bold().magenta().to_string(),
    }
}
