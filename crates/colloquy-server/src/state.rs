use std::sync::Arc;

use colloquy_core::base_path::ExecutionMode;
use colloquy_personas::PersonaRegistry;
use colloquy_render::render::PageRenderer;

/// Shared application state, injected into all route handlers via Axum state.
///
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub personas: Arc<dyn PersonaRegistry>,
    pub pages: Arc<PageRenderer>,
}

impl AppState {
    pub fn new(personas: Arc<dyn PersonaRegistry>, pages: PageRenderer) -> Self {
        Self {
            personas,
            pages: Arc::new(pages),
        }
    }

    pub fn mode(&self) -> ExecutionMode {
        self.pages.mode()
    }
}
