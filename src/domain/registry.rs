use super::entity::Entity;
use crate::error::{ComplianceError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Outcome of an authorization lookup against the registry.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Authorization {
    Authorized,
    NotFound,
    NotAuthorized,
    ScopeForbidden,
}

/// Immutable table of entities, keyed by id.
///
/// Built once through one of the loaders and shared read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct EntityRegistry {
    entities: HashMap<String, Entity>,
}

impl EntityRegistry {
    /// Builds a registry snapshot. Fails if two entities share an id.
    pub fn load(entities: Vec<Entity>) -> Result<Self> {
        let mut map = HashMap::with_capacity(entities.len());
        for entity in entities {
            if map.contains_key(&entity.id) {
                return Err(ComplianceError::Registry(format!(
                    "duplicate entity id '{}'",
                    entity.id
                )));
            }
            map.insert(entity.id.clone(), entity);
        }
        Ok(Self { entities: map })
    }

    /// Loads a registry from a JSON array of entities.
    pub fn from_reader<R: Read>(source: R) -> Result<Self> {
        let entities: Vec<Entity> = serde_json::from_reader(source)?;
        Self::load(entities)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// The entity table the service ships with.
    pub fn reference() -> Self {
        let entities = [
            Entity::new("entity_001", "cooperative", true).with_scopes([
                "health",
                "accidents",
                "agricultural",
            ]),
            Entity::new("entity_002", "stock-company", true),
            Entity::new("entity_003", "association", false),
        ];
        Self {
            entities: entities
                .into_iter()
                .map(|entity| (entity.id.clone(), entity))
                .collect(),
        }
    }

    pub fn lookup(&self, entity_id: &str) -> Option<&Entity> {
        self.entities.get(entity_id)
    }

    /// Checks existence, then the authorized flag, then the scope restriction.
    pub fn authorization_for(&self, entity_id: &str, scope: &str) -> Authorization {
        let Some(entity) = self.lookup(entity_id) else {
            return Authorization::NotFound;
        };
        if !entity.authorized {
            return Authorization::NotAuthorized;
        }
        if !entity.permits_scope(scope) {
            return Authorization::ScopeForbidden;
        }
        Authorization::Authorized
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}
