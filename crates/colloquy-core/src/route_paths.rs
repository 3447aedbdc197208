//! Route path conventions.
//!
//! Pure string functions. These paths are relative to the deployment base
//! path; run them through [`crate::base_path::with_base_path_for`] when
//! building a URL for the browser.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::conversation::ConversationId;

pub const CHAT_PREFIX: &str = "/chat";

pub const HEALTH: &str = "/health";

pub const PERSONAS_API: &str = "/api/personas";

pub const CHART_VALIDATE_API: &str = "/api/charts/validate";

pub const NETWORK_VALIDATE_API: &str = "/api/networks/validate";

pub const STATIC_PREFIX: &str = "/static";

/// Characters left alone by the browser's `encodeURIComponent`; the
/// client-side redirect builds the same paths with it.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode one path segment.
pub fn encode_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

pub fn persona_chat(persona_id: &str) -> String {
    format!("{CHAT_PREFIX}/{}", encode_segment(persona_id))
}

pub fn conversation(persona_id: &str, conversation_id: &ConversationId) -> String {
    format!(
        "{CHAT_PREFIX}/{}/{}",
        encode_segment(persona_id),
        encode_segment(conversation_id.as_str())
    )
}
