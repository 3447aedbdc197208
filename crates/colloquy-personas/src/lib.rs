//! colloquy-personas
//!
//! The persona registry. Pure data — personas are defined in JSON (either
//! the built-in set or a file named at startup) and are read-only once
//! loaded. Routing only ever asks one question: which record, if any, has
//! this id.

pub mod error;

use std::collections::HashSet;
use std::path::Path;

use colloquy_core::models::persona::PersonaRecord;

use error::PersonaError;

const BUILTIN_PERSONAS: &str = include_str!("../personas.json");

/// Read-only lookup of persona records by id.
pub trait PersonaRegistry: Send + Sync {
    /// Every persona the registry knows about, disabled ones included.
    fn personas(&self) -> &[PersonaRecord];

    /// Look up a persona by id, whether or not it is enabled.
    fn get_persona_by_id(&self, id: &str) -> Option<&PersonaRecord> {
        self.personas().iter().find(|p| p.id == id)
    }

    /// Personas that may be opened, in definition order.
    fn enabled_personas(&self) -> Vec<&PersonaRecord> {
        self.personas().iter().filter(|p| p.is_enabled()).collect()
    }
}

/// A registry backed by a fixed, in-memory list.
#[derive(Debug, Clone)]
pub struct StaticRegistry {
    personas: Vec<PersonaRecord>,
}

impl StaticRegistry {
    /// Build a registry, rejecting empty or duplicate ids.
    pub fn new(personas: Vec<PersonaRecord>) -> Result<Self, PersonaError> {
        let mut seen = HashSet::with_capacity(personas.len());
        for (position, persona) in personas.iter().enumerate() {
            if persona.id.trim().is_empty() {
                return Err(PersonaError::EmptyId(position));
            }
            if !seen.insert(persona.id.as_str()) {
                return Err(PersonaError::DuplicateId(persona.id.clone()));
            }
        }
        Ok(Self { personas })
    }

    /// Parse a JSON array of persona records.
    pub fn from_json(json: &str) -> Result<Self, PersonaError> {
        let personas: Vec<PersonaRecord> = serde_json::from_str(json)?;
        Self::new(personas)
    }

    /// Load persona definitions from a JSON file.
    pub fn load(path: &Path) -> Result<Self, PersonaError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PersonaError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = Self::from_json(&contents)?;
        tracing::info!(
            path = %path.display(),
            count = registry.personas.len(),
            "loaded persona definitions"
        );
        Ok(registry)
    }

    /// The persona set compiled into the binary.
    pub fn builtin() -> Result<Self, PersonaError> {
        Self::from_json(BUILTIN_PERSONAS)
    }
}

impl PersonaRegistry for StaticRegistry {
    fn personas(&self) -> &[PersonaRecord] {
        &self.personas
    }
}
