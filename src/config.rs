use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::PrintError;

/// Printer service configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    /// Transport selection: "mock", "usb" or "mqtt". Defaults to mock so a
    /// fresh checkout never writes to hardware by accident.
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Printers reachable over MQTT.
    #[serde(default)]
    pub printers: Vec<PrinterEntry>,
    /// Where to append the print-job log. Disabled when unset.
    #[serde(default)]
    pub job_log: Option<String>,
}

/// One MQTT-routed printer: topic id plus a display name for the UI.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PrinterEntry {
    pub id: String,
    pub name: String,
}

impl PrinterEntry {
    /// Parses the compact roster format "id:Name,id:Name". Malformed entries
    /// are skipped.
    pub fn parse_list(raw: &str) -> Vec<PrinterEntry> {
        raw.split(',')
            .filter_map(|entry| {
                let (id, name) = entry.trim().split_once(':')?;
                if id.is_empty() || name.is_empty() {
                    return None;
                }
                Some(PrinterEntry {
                    id: id.to_string(),
                    name: name.to_string(),
                })
            })
            .collect()
    }
}

fn default_mode() -> String {
    "mock".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mode: default_mode(),
            printers: Vec::new(),
            job_log: None,
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables.
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with RECEIPT__ prefix
    ///    (e.g. RECEIPT__MODE=mqtt, RECEIPT__JOB_LOG=/var/log/jobs.log)
    /// 2. config.toml in the current directory
    /// 3. Default values
    ///
    /// When the file lists no printers, a compact roster in the
    /// RECEIPT_PRINTERS variable ("id:Name,id:Name") fills the gap.
    pub fn load() -> Result<Self, PrintError> {
        let settings = Config::builder()
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECEIPT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let mut settings: Settings = settings.try_deserialize()?;
        if settings.printers.is_empty() {
            if let Ok(raw) = std::env::var("RECEIPT_PRINTERS") {
                settings.printers = PrinterEntry::parse_list(&raw);
            }
        }
        Ok(settings)
    }
}
