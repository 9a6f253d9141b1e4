//! Configures logging for the command line.
//!
//! The level comes from the number of `-v` flags. Directives in `RUST_LOG`
//! are applied after the level so they can narrow or widen logging for a
//! single crate, for example `RUST_LOG=ladderst_il2st=trace`.
use env_logger::{Builder, Target};
use log::{trace, Level, LevelFilter};
use std::fmt::Arguments;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

const MAX_VERBOSITY: u8 = 4;

/// Configures the log with the specified verbosity, optionally writing
/// records to the log file rather than standard error.
pub fn configure(verbosity: u8, log_file: Option<PathBuf>) -> Result<(), String> {
    let log_level = level(verbosity)?;

    let mut builder = Builder::new();
    builder.filter_level(log_level).parse_default_env();

    if let Some(log_location) = log_file {
        let file = File::create(&log_location).map_err(|e| {
            format!(
                "Unable to create log file {}. {}",
                log_location.display(),
                e
            )
        })?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder
        .format(|buf, record| {
            writeln!(
                buf,
                "{}",
                format_line(
                    OffsetDateTime::now_utc(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            )
        })
        .try_init()
        .map_err(|e| format!("Unable to start logging. {}", e))?;

    trace!("Logging at {log_level}");

    Ok(())
}

/// Maps the count of `-v` flags to the most detailed level that is logged.
fn level(verbosity: u8) -> Result<LevelFilter, String> {
    match verbosity {
        0 => Ok(LevelFilter::Error),
        1 => Ok(LevelFilter::Warn),
        2 => Ok(LevelFilter::Info),
        3 => Ok(LevelFilter::Debug),
        4 => Ok(LevelFilter::Trace),
        _ => Err(format!(
            "Verbosity is at most {} (-vvvv) but was given {} times",
            MAX_VERBOSITY, verbosity
        )),
    }
}

/// Formats one record as `<timestamp> <LEVEL> <module>: <message>`.
fn format_line(at: OffsetDateTime, level: Level, target: &str, args: &Arguments) -> String {
    let timestamp = at.format(&Rfc3339).unwrap_or_else(|_| at.to_string());
    format!("{} {:<5} {}: {}", timestamp, level, target, args)
}
