use std::{collections::HashMap, fs, io, path::PathBuf};

/// Errors raised while reading configuration or opening the configured output.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("error reading file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("invalid value {value:?} for [{section}] {key}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
    },
    #[error("cannot open log output {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// INI-style configuration: top-level `key = value` pairs plus `[section]`
/// tables. Lines starting with `#` are comments and surrounding quotes are
/// stripped from values.
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Read`] if the file cannot be read.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                let name = &line[1..line.len() - 1];
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    /// Looks up `key` in `section`, then among the globals, skipping empty
    /// values, and falls back to `default`.
    #[must_use]
    pub fn get_non_empty_or_default<'a>(
        &'a self,
        section: &str,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
            .unwrap_or(default)
    }

    /// Parses a boolean value (`true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`).
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for anything else.
    pub fn get_bool(&self, section: &str, key: &str) -> Result<Option<bool>, ConfigError> {
        let Some(raw) = self.get_non_empty(section, key) else {
            return Ok(None);
        };
        match raw.to_ascii_lowercase().as_str() {
            "true" | "yes" | "on" | "1" => Ok(Some(true)),
            "false" | "no" | "off" | "0" => Ok(Some(false)),
            _ => Err(ConfigError::InvalidValue {
                section: section.to_string(),
                key: key.to_string(),
                value: raw.to_string(),
            }),
        }
    }
}
