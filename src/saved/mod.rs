// src/saved/mod.rs
//
// Saved searches and collections. Both are plain in-memory records; storing
// them is left to the caller.

use crate::domain::GridRow;
use crate::query::{QueryParams, SearchEngine};
use chrono::NaiveDateTime;
use log::debug;
use serde::{Deserialize, Serialize};

/// A named query the user can re-run later.
///
/// The query is kept in its encoded form so it survives changes to the
/// in-memory `QueryParams` shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedSearch {
    pub id: String,
    pub name: String,
    pub query: String,
    pub created_at: NaiveDateTime,
    #[serde(default)]
    pub alerts: bool,
}

impl SavedSearch {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        params: &QueryParams,
        created_at: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            query: params.to_query_string(),
            created_at,
            alerts: false,
        }
    }

    pub fn params(&self) -> QueryParams {
        QueryParams::from_query_string(&self.query)
    }
}

/// A user-curated list of units, kept in the order they were added.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub unit_ids: Vec<String>,
}

impl Collection {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_ids: Vec::new(),
        }
    }

    /// Returns `false` if the unit was already in the collection.
    pub fn add(&mut self, unit_id: impl Into<String>) -> bool {
        let unit_id = unit_id.into();
        if self.contains(&unit_id) {
            return false;
        }
        self.unit_ids.push(unit_id);
        true
    }

    /// Returns `false` if the unit was not in the collection.
    pub fn remove(&mut self, unit_id: &str) -> bool {
        let before = self.unit_ids.len();
        self.unit_ids.retain(|id| id != unit_id);
        self.unit_ids.len() != before
    }

    pub fn contains(&self, unit_id: &str) -> bool {
        self.unit_ids.iter().any(|id| id == unit_id)
    }

    /// Cards for every unit that still exists and still has a project.
    pub fn resolve(&self, engine: &SearchEngine<'_>) -> Vec<GridRow> {
        self.unit_ids
            .iter()
            .filter_map(|id| {
                let view = engine.unit_view(id);
                if view.is_none() {
                    debug!("collection {}: skipping missing unit {}", self.id, id);
                }
                view
            })
            .map(|v| GridRow::from_unit(v.unit, v.project))
            .collect()
    }
}
