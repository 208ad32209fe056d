// src/query/engine.rs

use super::aggregate::aggregate_units_to_building;
use super::facets::apply_facets;
use super::lifecycle::{filter_by_transaction_type, select_units_by_lifecycle, Lifecycle};
use super::params::QueryParams;
use super::sort::sort_records;
use super::tabs::{partition_by_agency_tab, TabCounts};
use crate::dataset::{Dataset, ProjectIndex};
use crate::domain::{BuildingSummary, GridRow, Project, TableRow, Unit};
use chrono::{NaiveDate, Utc};
use log::debug;
use serde::Serialize;
use std::collections::HashMap;

/// A unit joined with its project.
#[derive(Debug, Clone, Copy)]
pub struct UnitView<'a> {
    pub unit: &'a Unit,
    pub project: &'a Project,
}

/// One view's records plus the per-tab totals shown above them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults<T> {
    pub records: Vec<T>,
    pub tab_counts: TabCounts,
}

/// Runs queries over a borrowed `Dataset`.
///
/// Every call is a fresh pass over the data: lifecycle, transaction type,
/// facets, then (for buildings) grouping, then agency tab, then sort.
/// Nothing is cached and nothing is mutated, so an engine can be shared
/// freely between threads.
pub struct SearchEngine<'a> {
    dataset: &'a Dataset,
    projects: ProjectIndex<'a>,
    today: NaiveDate,
}

impl<'a> SearchEngine<'a> {
    pub fn new(dataset: &'a Dataset) -> Self {
        Self {
            dataset,
            projects: dataset.project_index(),
            today: Utc::now().date_naive(),
        }
    }

    /// Pins "today" for date-range presets.
    pub fn with_reference_date(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn reference_date(&self) -> NaiveDate {
        self.today
    }

    pub fn project(&self, id: &str) -> Option<&'a Project> {
        self.projects.get(id).copied()
    }

    /// Looks a unit up by id and joins its project.
    pub fn unit_view(&self, unit_id: &str) -> Option<UnitView<'a>> {
        let dataset: &'a Dataset = self.dataset;
        let unit = dataset.units.iter().find(|u| u.id == unit_id)?;
        let project = self.project(&unit.project_id)?;
        Some(UnitView { unit, project })
    }

    /// Stages (a) to (c): lifecycle, transaction type and facets.
    ///
    /// Units pointing at a missing project stay in unless a facet needs the project.
    pub fn units(&self, params: &QueryParams) -> Vec<&'a Unit> {
        let dataset: &'a Dataset = self.dataset;
        let lifecycle = params.effective_lifecycle();
        let selected = select_units_by_lifecycle(&dataset.units, lifecycle);
        let selected_count = selected.len();

        let typed = filter_by_transaction_type(selected, params.transaction_type);
        let typed_count = typed.len();

        let filtered = apply_facets(typed, &self.projects, &params.facets, self.today);
        debug!(
            "query {:?}/{:?}: {} selected, {} after type filter, {} after facets",
            lifecycle,
            params.transaction_type,
            selected_count,
            typed_count,
            filtered.len()
        );
        filtered
    }

    fn join(&self, units: Vec<&'a Unit>) -> Vec<UnitView<'a>> {
        units
            .into_iter()
            .filter_map(|unit| {
                self.project(&unit.project_id)
                    .map(|project| UnitView { unit, project })
            })
            .collect()
    }

    /// Joined, tab-partitioned and sorted unit views, plus tab counts.
    fn unit_views(&self, params: &QueryParams) -> SearchResults<UnitView<'a>> {
        let views = self.join(self.units(params));
        let tab_counts = TabCounts::tally(&views);
        let views = partition_by_agency_tab(views, params.tab);
        SearchResults {
            records: sort_records(views, params.sort),
            tab_counts,
        }
    }

    pub fn grid(&self, params: &QueryParams) -> SearchResults<GridRow> {
        let views = self.unit_views(params);
        SearchResults {
            records: views
                .records
                .iter()
                .map(|v| GridRow::from_unit(v.unit, v.project))
                .collect(),
            tab_counts: views.tab_counts,
        }
    }

    pub fn table(&self, params: &QueryParams) -> SearchResults<TableRow> {
        let views = self.unit_views(params);
        SearchResults {
            records: views
                .records
                .iter()
                .map(|v| TableRow::from_unit(v.unit, v.project))
                .collect(),
            tab_counts: views.tab_counts,
        }
    }

    /// One summary per project with at least one visible unit, in dataset order.
    pub fn buildings(&self, params: &QueryParams) -> SearchResults<BuildingSummary> {
        let dataset: &'a Dataset = self.dataset;
        let mut visible: HashMap<&str, Vec<&Unit>> = HashMap::new();
        for unit in self.units(params) {
            visible.entry(unit.project_id.as_str()).or_default().push(unit);
        }

        let mut past: HashMap<&str, Vec<&Unit>> = HashMap::new();
        let transactions = filter_by_transaction_type(
            select_units_by_lifecycle(&dataset.units, Lifecycle::Transactions),
            params.transaction_type,
        );
        for unit in transactions {
            past.entry(unit.project_id.as_str()).or_default().push(unit);
        }

        let buildings: Vec<BuildingSummary> = dataset
            .projects
            .iter()
            .filter_map(|project| {
                let active = visible.get(project.id.as_str())?;
                let sold = past
                    .get(project.id.as_str())
                    .map(Vec::as_slice)
                    .unwrap_or(&[]);
                Some(aggregate_units_to_building(project, active, sold))
            })
            .collect();

        debug!(
            "building view: {} of {} projects have visible units",
            buildings.len(),
            self.dataset.projects.len()
        );

        let tab_counts = TabCounts::tally(&buildings);
        let buildings = partition_by_agency_tab(buildings, params.tab);
        SearchResults {
            records: sort_records(buildings, params.sort),
            tab_counts,
        }
    }
}
