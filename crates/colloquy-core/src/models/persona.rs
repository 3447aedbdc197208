use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A configured chat personality, owned by the persona registry.
///
/// Read-only from Colloquy's point of view: it is looked up by id and
/// handed to the chat surface, never created or mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PersonaRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Model the chat backend should use for this persona.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Opening line shown before the first message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl PersonaRecord {
    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }
}
