//! Conversation page routing.
//!
//! Both chat routes resolve a persona id against the registry before doing
//! anything else. A persona that does not exist and a persona that exists
//! but is disabled produce the same [`RouteOutcome::NotFound`]; callers
//! cannot tell them apart.

use colloquy_core::models::conversation::ConversationId;
use colloquy_core::models::persona::PersonaRecord;
use colloquy_core::models::surface::{ChatSurface, ClientRedirect};
use colloquy_personas::PersonaRegistry;

/// Path parameters of `/chat/{personaId}/{conversationId}`.
#[derive(Debug, Clone)]
pub struct ChatParams {
    pub persona_id: String,
    pub conversation_id: ConversationId,
}

/// Path parameters of `/chat/{personaId}`.
#[derive(Debug, Clone)]
pub struct PersonaParams {
    pub persona_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    NotFound,
    Render(ChatSurface),
    Redirect(ClientRedirect),
}

/// Resolve a request for an explicit conversation.
pub fn resolve_with_conversation(registry: &dyn PersonaRegistry, params: ChatParams) -> RouteOutcome {
    match open_persona(registry, &params.persona_id) {
        Some(persona) => RouteOutcome::Render(ChatSurface {
            persona: persona.clone(),
            conversation_id: params.conversation_id,
        }),
        None => RouteOutcome::NotFound,
    }
}

/// Resolve a request that names a persona but no conversation. The client
/// mints the conversation id, so success is a redirect instruction rather
/// than a page.
pub fn resolve_without_conversation(
    registry: &dyn PersonaRegistry,
    params: PersonaParams,
) -> RouteOutcome {
    match open_persona(registry, &params.persona_id) {
        Some(_) => RouteOutcome::Redirect(ClientRedirect {
            persona_id: params.persona_id,
        }),
        None => RouteOutcome::NotFound,
    }
}

fn open_persona<'a>(registry: &'a dyn PersonaRegistry, persona_id: &str) -> Option<&'a PersonaRecord> {
    let persona = registry
        .get_persona_by_id(persona_id)
        .filter(|p| p.is_enabled());
    if persona.is_none() {
        tracing::debug!(persona_id, "persona unavailable");
    }
    persona
}
