//! Configuration management.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). Each module is optional: a missing module, or a
//! missing configuration file, falls back to defaults, so the tool works
//! without any setup against forms using the standard field names.
//!
//! ## Modules
//!
//! - **fields**: names of the departure, arrival and duration form fields
//! - **audit**: timetable CSV reading options
//! - **status**: prefix of the advisory message set next to the duration field
//!
//! ## Usage
//!
//! ```rust,no_run
//! use duree::libs::config::Config;
//!
//! let config = Config::read()?;
//! let fields = config.field_names();
//! println!("duration field: {}", fields.duration);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::binding::FieldNames;
use super::data_storage::DataStorage;
use super::deriver::{DurationDeriver, DEFAULT_STATUS_PREFIX};
use crate::libs::messages::Message;
use crate::{msg_error_anyhow, msg_print};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module offered by the interactive setup.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Timetable audit settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AuditConfig {
    /// Single-byte CSV field delimiter.
    pub delimiter: char,
}

impl Default for AuditConfig {
    fn default() -> Self {
        AuditConfig { delimiter: ',' }
    }
}

impl AuditConfig {
    /// Delimiter as the byte the CSV reader expects.
    pub fn delimiter_byte(&self) -> Result<u8> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or_else(|| msg_error_anyhow!(Message::InvalidCsvDelimiter))
    }

    pub fn init(config: &Option<AuditConfig>) -> Result<AuditConfig> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleAudit, true);

        let delimiter: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptCsvDelimiter.to_string())
            .default(config.delimiter.to_string())
            .validate_with(|input: &String| -> Result<(), String> {
                let mut chars = input.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii() => Ok(()),
                    _ => Err(Message::InvalidCsvDelimiter.to_string()),
                }
            })
            .interact_text()?;

        Ok(AuditConfig {
            delimiter: delimiter.chars().next().unwrap_or(','),
        })
    }
}

/// Status message settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatusConfig {
    pub prefix: String,
}

impl Default for StatusConfig {
    fn default() -> Self {
        StatusConfig {
            prefix: DEFAULT_STATUS_PREFIX.to_string(),
        }
    }
}

impl StatusConfig {
    pub fn init(config: &Option<StatusConfig>) -> Result<StatusConfig> {
        let config = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleStatus, true);

        let prefix = prompt_field(Message::PromptStatusPrefix, &config.prefix)?;
        Ok(StatusConfig { prefix })
    }
}

/// Interactive setup of the form field names.
pub fn init_fields(config: &Option<FieldNames>) -> Result<FieldNames> {
    let config = config.clone().unwrap_or_default();
    msg_print!(Message::ConfigModuleFields, true);

    let departure = prompt_field(Message::PromptDepartureField, &config.departure)?;
    let arrival = prompt_field(Message::PromptArrivalField, &config.arrival)?;
    let duration = prompt_field(Message::PromptDurationField, &config.duration)?;

    Ok(FieldNames {
        departure,
        arrival,
        duration,
    })
}

fn prompt_field(prompt: Message, default: &str) -> Result<String> {
    let value = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt.to_string())
        .default(default.to_string())
        .interact_text()?;
    Ok(value)
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<FieldNames>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str).map_err(|_| msg_error_anyhow!(Message::ConfigParseError))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self).map_err(|_| msg_error_anyhow!(Message::ConfigSaveError))?;
        Ok(())
    }

    pub fn modules() -> Vec<ConfigModule> {
        vec![
            ConfigModule {
                key: "fields".to_string(),
                name: Message::ConfigModuleFields.to_string(),
            },
            ConfigModule {
                key: "audit".to_string(),
                name: Message::ConfigModuleAudit.to_string(),
            },
            ConfigModule {
                key: "status".to_string(),
                name: Message::ConfigModuleStatus.to_string(),
            },
        ]
    }

    /// Interactive setup: lets the user pick modules, then prompts for each.
    pub fn init() -> Result<Self> {
        let mut config = Config::read()?;
        let modules = Config::modules();
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&names)
            .interact()?;

        for index in selected {
            match modules[index].key.as_str() {
                "fields" => config.fields = Some(init_fields(&config.fields)?),
                "audit" => config.audit = Some(AuditConfig::init(&config.audit)?),
                "status" => config.status = Some(StatusConfig::init(&config.status)?),
                _ => {}
            }
        }

        Ok(config)
    }

    pub fn field_names(&self) -> FieldNames {
        self.fields.clone().unwrap_or_default()
    }

    pub fn audit(&self) -> AuditConfig {
        self.audit.clone().unwrap_or_default()
    }

    pub fn status(&self) -> StatusConfig {
        self.status.clone().unwrap_or_default()
    }

    /// A deriver using the configured field names and status prefix.
    pub fn deriver(&self) -> DurationDeriver {
        DurationDeriver::new(self.field_names()).with_status_prefix(self.status().prefix)
    }
}
