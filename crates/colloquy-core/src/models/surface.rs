//! Props handed from the router to the page surfaces.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::conversation::ConversationId;
use super::persona::PersonaRecord;
use crate::route_paths;

/// Everything the chat surface needs to render one conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChatSurface {
    pub persona: PersonaRecord,
    pub conversation_id: ConversationId,
}

/// Instruction for the client to mint a conversation id and navigate to
/// it. Only the persona id crosses from server-side resolution to the
/// client phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ClientRedirect {
    pub persona_id: String,
}

impl ClientRedirect {
    /// Client phase: mint a fresh conversation id and return it with the
    /// route path to navigate to (relative to the base path).
    pub fn mint(&self) -> (ConversationId, String) {
        let id = ConversationId::mint();
        let path = route_paths::conversation(&self.persona_id, &id);
        (id, path)
    }
}
