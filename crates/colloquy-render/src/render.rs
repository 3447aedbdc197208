use serde::Serialize;
use tera::{Context, Tera};

use colloquy_core::base_path::{base_path_for, with_base_path_for, ExecutionMode};
use colloquy_core::models::persona::PersonaRecord;
use colloquy_core::models::surface::{ChatSurface, ClientRedirect};
use colloquy_core::route_paths;

use crate::error::RenderError;

const BASE: &str = "base.html";
const INDEX: &str = "index.html";
const CHAT: &str = "chat.html";
const REDIRECT: &str = "redirect.html";
const NOT_FOUND: &str = "not_found.html";

/// Renders the chat route pages.
///
/// Templates are compiled once at construction. Every URL a page emits is
/// prefixed with the base path of the renderer's execution mode.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    tera: Tera,
    mode: ExecutionMode,
}

impl PageRenderer {
    pub fn new(mode: ExecutionMode) -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (BASE, include_str!("../templates/base.html")),
            (INDEX, include_str!("../templates/index.html")),
            (CHAT, include_str!("../templates/chat.html")),
            (REDIRECT, include_str!("../templates/redirect.html")),
            (NOT_FOUND, include_str!("../templates/not_found.html")),
        ])
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;
        tracing::debug!(%mode, "page templates compiled");
        Ok(Self { tera, mode })
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Landing page linking to each persona's chat route.
    pub fn render_index(&self, personas: &[&PersonaRecord]) -> Result<String, RenderError> {
        let entries: Vec<PersonaLink<'_>> = personas
            .iter()
            .map(|persona| PersonaLink {
                name: &persona.name,
                description: &persona.description,
                href: with_base_path_for(self.mode, &route_paths::persona_chat(&persona.id)),
            })
            .collect();
        let mut context = self.context("Choose a persona")?;
        context.insert("personas", &entries);
        Ok(self.tera.render(INDEX, &context)?)
    }

    /// The chat surface shell. The surface props are embedded as JSON for
    /// the client bundle to hydrate from.
    pub fn render_chat(&self, surface: &ChatSurface) -> Result<String, RenderError> {
        let mut context = self.context(&surface.persona.name)?;
        context.insert("persona", &surface.persona);
        context.insert("props_json", &script_json(surface)?);
        Ok(self.tera.render(CHAT, &context)?)
    }

    /// A page that mints a conversation id in the browser and replaces the
    /// current location with the conversation route.
    pub fn render_redirect(&self, redirect: &ClientRedirect) -> Result<String, RenderError> {
        let mut context = self.context("Starting conversation")?;
        context.insert("props_json", &script_json(redirect)?);
        Ok(self.tera.render(REDIRECT, &context)?)
    }

    pub fn render_not_found(&self) -> Result<String, RenderError> {
        let context = self.context("Page not found")?;
        Ok(self.tera.render(NOT_FOUND, &context)?)
    }

    fn context(&self, title: &str) -> Result<Context, RenderError> {
        let base_path = base_path_for(self.mode);
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("base_path", base_path);
        context.insert("home_path", if base_path.is_empty() { "/" } else { base_path });
        context.insert("base_path_json", &serde_json::to_string(base_path)?);
        Ok(context)
    }
}

#[derive(Serialize)]
struct PersonaLink<'a> {
    name: &'a str,
    description: &'a str,
    href: String,
}

/// Serialize `value` for inlining in a `<script>` element.
fn script_json<T: Serialize>(value: &T) -> Result<String, RenderError> {
    let json = serde_json::to_string(value)?;
    Ok(json.replace("</", "<\\/"))
}
