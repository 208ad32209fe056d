// src/dataset/mod.rs

use crate::domain::{Project, Unit};
use crate::errors::AppResult;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Projects keyed by id, borrowed from a `Dataset`.
pub type ProjectIndex<'a> = HashMap<&'a str, &'a Project>;

/// The static reference data every query runs over.
///
/// Loaded once at startup and never mutated; the engine only borrows it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub projects: Vec<Project>,
    pub units: Vec<Unit>,
}

impl Dataset {
    pub fn new(projects: Vec<Project>, units: Vec<Unit>) -> Self {
        Self { projects, units }
    }

    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let dataset: Dataset = serde_json::from_str(json)?;
        dataset.report_integrity();
        Ok(dataset)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let dataset = Self::from_json_str(&content)?;
        info!(
            "Loaded dataset from {}: {} projects, {} units",
            path.as_ref().display(),
            dataset.projects.len(),
            dataset.units.len()
        );
        Ok(dataset)
    }

    pub fn project_index(&self) -> ProjectIndex<'_> {
        self.projects.iter().map(|p| (p.id.as_str(), p)).collect()
    }

    /// Units whose `project_id` points at no known project.
    ///
    /// These are dropped from every project-dependent view, never treated as errors.
    pub fn dangling_units(&self) -> Vec<&Unit> {
        let index = self.project_index();
        self.units
            .iter()
            .filter(|u| !index.contains_key(u.project_id.as_str()))
            .collect()
    }

    fn report_integrity(&self) {
        for unit in self.dangling_units() {
            warn!(
                "Unit {} references unknown project '{}'; it will be left out of building, grid and table views",
                unit.id, unit.project_id
            );
        }
    }
}
