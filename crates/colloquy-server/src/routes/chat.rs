use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use colloquy_core::models::conversation::ConversationId;

use crate::error::ApiError;
use crate::resolve::{self, ChatParams, PersonaParams, RouteOutcome};
use crate::state::AppState;

/// `GET /`, the persona picker.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let personas = state.personas.enabled_personas();
    Ok(Html(state.pages.render_index(&personas)?))
}

/// `GET /chat/{persona_id}`
pub async fn new_conversation(
    State(state): State<AppState>,
    Path(persona_id): Path<String>,
) -> Result<Response, ApiError> {
    let outcome =
        resolve::resolve_without_conversation(state.personas.as_ref(), PersonaParams { persona_id });
    respond(&state, outcome)
}

/// `GET /chat/{persona_id}/{conversation_id}`
pub async fn conversation(
    State(state): State<AppState>,
    Path((persona_id, conversation_id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let params = ChatParams {
        persona_id,
        conversation_id: ConversationId::from(conversation_id),
    };
    let outcome = resolve::resolve_with_conversation(state.personas.as_ref(), params);
    respond(&state, outcome)
}

/// Fallback for every unmatched path.
pub async fn not_found(State(state): State<AppState>) -> Result<Response, ApiError> {
    not_found_page(&state)
}

fn respond(state: &AppState, outcome: RouteOutcome) -> Result<Response, ApiError> {
    match outcome {
        RouteOutcome::NotFound => not_found_page(state),
        RouteOutcome::Render(surface) => Ok(Html(state.pages.render_chat(&surface)?).into_response()),
        RouteOutcome::Redirect(redirect) => {
            Ok(Html(state.pages.render_redirect(&redirect)?).into_response())
        }
    }
}

fn not_found_page(state: &AppState) -> Result<Response, ApiError> {
    let page = state.pages.render_not_found()?;
    Ok((StatusCode::NOT_FOUND, Html(page)).into_response())
}
