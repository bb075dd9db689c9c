//! XML configuration support.
//! - Loads optional settings from config.xml (quick_xml + serde).
//! - A missing file means "use defaults"; a malformed file or unknown field is an error.
//!
//! ```xml
//! <config>
//!   <log_level>normal</log_level>
//!   <log_file>/var/log/media_sort.log</log_file>
//!   <exiftool>/usr/local/bin/exiftool</exiftool>
//!   <threads>4</threads>
//!   <missing_date>undated</missing_date>
//! </config>
//! ```
//!
//! Directories to organize are never read from the file; they come from the command line.

use anyhow::{Context, Result, anyhow};
use quick_xml::de::from_str as from_xml_str;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::paths::default_config_path;
use super::types::{Config, LogLevel, MissingDatePolicy};

/// Struct mirroring the XML config for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename = "config")]
#[serde(deny_unknown_fields)]
struct XmlConfig {
    #[serde(rename = "log_level")]
    log_level: Option<String>,
    #[serde(rename = "log_file")]
    log_file: Option<String>,
    #[serde(rename = "exiftool")]
    exiftool: Option<String>,
    #[serde(rename = "threads", default, deserialize_with = "de_usize_trimmed_opt")]
    threads: Option<usize>,
    #[serde(rename = "missing_date")]
    missing_date: Option<String>,
}

// Custom deserializer that trims surrounding whitespace for optional usize
fn de_usize_trimmed_opt<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<usize>().map(Some).map_err(serde::de::Error::custom),
    }
}

/// Settings read from the file. Every field is optional; unset fields keep
/// whatever the Config already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileSettings {
    pub log_level: Option<LogLevel>,
    pub log_file: Option<PathBuf>,
    pub exiftool: Option<PathBuf>,
    pub threads: Option<usize>,
    pub missing_date: Option<MissingDatePolicy>,
}

impl FileSettings {
    pub fn apply_to(&self, cfg: &mut Config) {
        if let Some(level) = &self.log_level {
            cfg.log_level = level.clone();
        }
        if let Some(lf) = &self.log_file {
            cfg.log_file = Some(lf.clone());
        }
        if let Some(tool) = &self.exiftool {
            cfg.exiftool = tool.clone();
        }
        if let Some(n) = self.threads {
            cfg.threads = n;
        }
        if let Some(policy) = self.missing_date {
            cfg.missing_date = Some(policy);
        }
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|t| !t.is_empty())
}

fn xml_to_settings(parsed: XmlConfig) -> Result<FileSettings> {
    let log_level = non_empty(parsed.log_level.as_deref())
        .map(|s| s.parse::<LogLevel>().map_err(|e| anyhow!(e)))
        .transpose()?;
    let missing_date = non_empty(parsed.missing_date.as_deref())
        .map(|s| s.parse::<MissingDatePolicy>().map_err(|e| anyhow!(e)))
        .transpose()?;

    Ok(FileSettings {
        log_level,
        log_file: non_empty(parsed.log_file.as_deref()).map(PathBuf::from),
        exiftool: non_empty(parsed.exiftool.as_deref()).map(PathBuf::from),
        threads: parsed.threads,
        missing_date,
    })
}

/// Load settings from a specific XML file path.
pub fn load_config_from_xml_path(path: &Path) -> Result<FileSettings> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read config xml '{}'", path.display()))?;
    let parsed: XmlConfig = from_xml_str(&contents)
        .with_context(|| format!("parse config xml '{}'", path.display()))?;
    xml_to_settings(parsed).with_context(|| format!("invalid value in config xml '{}'", path.display()))
}

/// Load settings from the default location. `Ok(None)` when there is no file.
pub fn load_config_from_xml() -> Result<Option<(PathBuf, FileSettings)>> {
    let Some(path) = default_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        debug!(path = %path.display(), "no config file; using defaults");
        return Ok(None);
    }
    let settings = load_config_from_xml_path(&path)?;
    Ok(Some((path, settings)))
}
