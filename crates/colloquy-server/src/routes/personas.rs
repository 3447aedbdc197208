use axum::extract::State;
use axum::Json;

use colloquy_core::models::persona::PersonaRecord;

use crate::state::AppState;

/// Personas a user may open. Disabled personas are not listed.
pub async fn list_personas(State(state): State<AppState>) -> Json<Vec<PersonaRecord>> {
    Json(
        state
            .personas
            .enabled_personas()
            .into_iter()
            .cloned()
            .collect(),
    )
}
