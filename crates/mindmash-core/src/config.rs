//! Chat timing configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{MindmashError, Result};
use crate::persona::{SYSTEM_ID, responding_personas};

/// A persona that answers user messages, and when.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponderConfig {
    pub persona: String,
    /// Offset from submission, in milliseconds
    pub delay_ms: u64,
}

/// Session configuration, usually read from `config.toml`.
///
/// ```toml
/// system_delay_ms = 4500
/// seed = 42
///
/// [[responder]]
/// persona = "grok"
/// delay_ms = 1500
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ChatConfig {
    #[serde(rename = "responder")]
    pub responders: Vec<ResponderConfig>,
    /// Offset of the system summary, in milliseconds
    pub system_delay_ms: u64,
    /// Fixed RNG seed for reproducible response picks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        let responders = responding_personas()
            .iter()
            .zip([1500, 2500, 3500])
            .map(|(persona, delay_ms)| ResponderConfig {
                persona: persona.id.to_string(),
                delay_ms,
            })
            .collect();

        Self {
            responders,
            system_delay_ms: 4500,
            seed: None,
        }
    }
}

impl ChatConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ChatConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that offsets are strictly increasing and end with the system
    /// summary, so responses of one cycle can never reorder.
    pub fn validate(&self) -> Result<()> {
        let mut previous: Option<u64> = None;
        for responder in &self.responders {
            if responder.persona.trim().is_empty() {
                return Err(MindmashError::config("responder persona must not be empty"));
            }
            if responder.persona == SYSTEM_ID {
                return Err(MindmashError::config(
                    "`system` always answers last and cannot be a responder",
                ));
            }
            if previous.is_some_and(|p| responder.delay_ms <= p) {
                return Err(MindmashError::config(format!(
                    "responder delays must be strictly increasing (`{}` at {}ms)",
                    responder.persona, responder.delay_ms
                )));
            }
            previous = Some(responder.delay_ms);
        }

        if previous.is_some_and(|p| self.system_delay_ms <= p) {
            return Err(MindmashError::config(format!(
                "system_delay_ms ({}) must exceed the last responder delay",
                self.system_delay_ms
            )));
        }

        Ok(())
    }

    /// Responder ids in send order.
    pub fn responder_ids(&self) -> Vec<String> {
        self.responders.iter().map(|r| r.persona.clone()).collect()
    }

    /// The full send schedule: responders, then the system summary.
    pub fn schedule(&self) -> Vec<(String, Duration)> {
        self.responders
            .iter()
            .map(|r| (r.persona.clone(), Duration::from_millis(r.delay_ms)))
            .chain(std::iter::once((
                SYSTEM_ID.to_string(),
                Duration::from_millis(self.system_delay_ms),
            )))
            .collect()
    }
}
