// src/query/params.rs

use super::facets::Facets;
use super::lifecycle::{Lifecycle, TransactionSelector};
use super::sort::SortKey;
use super::tabs::AgencyTab;

/// Everything one query asks for. Built once per request and never mutated
/// by the engine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    pub transaction_type: TransactionSelector,
    /// `None` picks the selector's default (see `effective_lifecycle`).
    pub lifecycle: Option<Lifecycle>,
    pub facets: Facets,
    pub tab: AgencyTab,
    pub sort: Option<SortKey>,
}

impl QueryParams {
    pub fn new(transaction_type: TransactionSelector) -> Self {
        Self {
            transaction_type,
            ..Self::default()
        }
    }

    pub fn effective_lifecycle(&self) -> Lifecycle {
        self.lifecycle
            .unwrap_or_else(|| self.transaction_type.default_lifecycle())
    }

    pub fn with_lifecycle(mut self, lifecycle: Lifecycle) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    pub fn with_facets(mut self, facets: Facets) -> Self {
        self.facets = facets;
        self
    }

    pub fn with_tab(mut self, tab: AgencyTab) -> Self {
        self.tab = tab;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = Some(sort);
        self
    }
}
