//! Setting model.
//!
//! A setting's value is a tagged variant; the `type` key on the wire selects
//! the variant and the variant carries its own constraints (select options,
//! range bounds).

use serde::{Deserialize, Serialize};

use super::{enums::SettingStatus, Record};
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SettingValue {
    Toggle { value: bool },
    Select { value: String, options: Vec<String> },
    Input { value: String },
    Range { value: i64, min: i64, max: i64 },
}

/// A change requested through one of the setting controls
#[derive(Debug, Clone, PartialEq)]
pub enum SettingInput {
    Toggle(bool),
    Select(String),
    Text(String),
    Range(i64),
}

impl SettingValue {
    pub fn kind(&self) -> &'static str {
        match self {
            SettingValue::Toggle { .. } => "toggle",
            SettingValue::Select { .. } => "select",
            SettingValue::Input { .. } => "input",
            SettingValue::Range { .. } => "range",
        }
    }

    /// Apply a control input, enforcing the variant's constraints
    pub fn apply(&mut self, input: SettingInput) -> AppResult<()> {
        match (self, input) {
            (SettingValue::Toggle { value }, SettingInput::Toggle(on)) => {
                *value = on;
            }
            (SettingValue::Select { value, options }, SettingInput::Select(choice)) => {
                if !options.contains(&choice) {
                    return Err(AppError::InvalidValue(format!(
                        "'{}' is not one of {:?}",
                        choice, options
                    )));
                }
                *value = choice;
            }
            (SettingValue::Input { value }, SettingInput::Text(text)) => {
                *value = text;
            }
            (SettingValue::Range { value, min, max }, SettingInput::Range(n)) => {
                if n < *min || n > *max {
                    return Err(AppError::InvalidValue(format!(
                        "{} is outside [{}, {}]",
                        n, min, max
                    )));
                }
                *value = n;
            }
            (current, input) => {
                return Err(AppError::InvalidValue(format!(
                    "{:?} cannot be applied to a {} setting",
                    input,
                    current.kind()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingItem {
    #[serde(
        default,
        deserialize_with = "super::deserialize_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,
    pub category: String,
    pub name: String,
    pub description: String,
    pub status: SettingStatus,
    #[serde(flatten)]
    pub value: SettingValue,
}

impl Record for SettingItem {
    const RESOURCE: &'static str = "settings";
    const LABEL: &'static str = "Setting";

    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn set_id(&mut self, id: String) {
        self.id = Some(id);
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str()]
    }

    fn category(&self) -> Option<&str> {
        Some(&self.category)
    }

    fn status(&self) -> Option<&str> {
        Some(self.status.as_str())
    }
}
