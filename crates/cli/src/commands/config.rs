use shopfront_core::config::{AppConfig, LogFormat};

use super::CommandResult;

/// Echoes the effective configuration after defaults, file and env
/// overrides have been applied.
pub fn run(config: &AppConfig) -> CommandResult {
    let format = match config.logging.format {
        LogFormat::Compact => "compact",
        LogFormat::Pretty => "pretty",
        LogFormat::Json => "json",
    };
    CommandResult::success(format!(
        "data.dir = {}\nnotify.toast_secs = {}\nlogging.level = {}\nlogging.format = {}",
        config.data.dir.display(),
        config.notify.toast_secs,
        config.logging.level,
        format,
    ))
}
