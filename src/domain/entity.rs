use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A registered participant whose authorization to transact is evaluated.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    /// Unique identifier within a registry.
    pub id: String,
    /// Category tag such as "cooperative" or "association". Informational only.
    pub kind: String,
    /// Whether the entity may transact at all.
    pub authorized: bool,
    /// Operating lines the entity is restricted to. `None` means unrestricted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permitted_scopes: Option<BTreeSet<String>>,
}

impl Entity {
    pub fn new(id: impl Into<String>, kind: impl Into<String>, authorized: bool) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            authorized,
            permitted_scopes: None,
        }
    }

    /// Restricts the entity to the given operating lines.
    pub fn with_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permitted_scopes = Some(scopes.into_iter().map(Into::into).collect());
        self
    }

    /// Returns `true` if the entity has no scope restriction or lists `scope`.
    pub fn permits_scope(&self, scope: &str) -> bool {
        match &self.permitted_scopes {
            Some(scopes) => scopes.contains(scope),
            None => true,
        }
    }
}
