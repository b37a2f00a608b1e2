use crate::{
    config::{Config, ConfigError},
    log::sync_log::Output,
};
use std::{
    fs::{self, OpenOptions},
    io,
    path::{Path, PathBuf},
};

/// Config section read by [`open`].
pub const LOGGING_SECTION: &str = "Logging";

/// Opens the output named by `[Logging] output`.
///
/// `stdout` (the default) and `stderr` select the standard streams; any
/// other value is a file path. Files are appended to unless
/// `[Logging] append` is false, and missing parent directories are created.
pub(crate) fn open(config: &Config) -> Result<Output, ConfigError> {
    let target = config.get_non_empty_or_default(LOGGING_SECTION, "output", "stdout");
    match target {
        "stdout" => {
            tracing::debug!("logging to stdout");
            Ok(Box::new(io::stdout()))
        }
        "stderr" => {
            tracing::debug!("logging to stderr");
            Ok(Box::new(io::stderr()))
        }
        path => {
            let append = config.get_bool(LOGGING_SECTION, "append")?.unwrap_or(true);
            let path = expand_path(path);
            open_file(&path, append).map_err(|source| {
                tracing::warn!(path = %path.display(), error = %source, "cannot open log file");
                ConfigError::Open { path, source }
            })
        }
    }
}

fn open_file(path: &Path, append: bool) -> io::Result<Output> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    tracing::debug!(path = %path.display(), append, "logging to file");
    Ok(Box::new(file))
}

/// Expands tilde (`~`) in file paths to the user's home directory.
fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);
        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}
