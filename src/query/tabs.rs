// src/query/tabs.rs

use crate::domain::{BuildingSummary, GridRow, TableRow, Unit};
use serde::Serialize;

use super::engine::UnitView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AgencyTab {
    #[default]
    All,
    Plb,
    Others,
}

impl AgencyTab {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "all" => Some(AgencyTab::All),
            "plb" => Some(AgencyTab::Plb),
            "others" | "other" => Some(AgencyTab::Others),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgencyTab::All => "all",
            AgencyTab::Plb => "plb",
            AgencyTab::Others => "others",
        }
    }
}

/// Anything that can be split into the PLB / other-agency tabs.
///
/// Single units are exactly one of the two; a building can be both.
pub trait AgencyTagged {
    fn has_plb(&self) -> bool;
    fn has_other(&self) -> bool;
}

impl<T: AgencyTagged + ?Sized> AgencyTagged for &T {
    fn has_plb(&self) -> bool {
        (**self).has_plb()
    }
    fn has_other(&self) -> bool {
        (**self).has_other()
    }
}

impl AgencyTagged for Unit {
    fn has_plb(&self) -> bool {
        self.is_plb()
    }
    fn has_other(&self) -> bool {
        !self.is_plb()
    }
}

impl AgencyTagged for UnitView<'_> {
    fn has_plb(&self) -> bool {
        self.unit.is_plb()
    }
    fn has_other(&self) -> bool {
        !self.unit.is_plb()
    }
}

impl AgencyTagged for GridRow {
    fn has_plb(&self) -> bool {
        is_plb_agency(&self.agency)
    }
    fn has_other(&self) -> bool {
        !is_plb_agency(&self.agency)
    }
}

impl AgencyTagged for TableRow {
    fn has_plb(&self) -> bool {
        is_plb_agency(&self.agency)
    }
    fn has_other(&self) -> bool {
        !is_plb_agency(&self.agency)
    }
}

impl AgencyTagged for BuildingSummary {
    fn has_plb(&self) -> bool {
        self.has_plb_units
    }
    fn has_other(&self) -> bool {
        self.has_other_units
    }
}

fn is_plb_agency(agency: &str) -> bool {
    agency.trim().eq_ignore_ascii_case(crate::domain::unit::PLB_AGENCY)
}

pub fn partition_by_agency_tab<T: AgencyTagged>(records: Vec<T>, tab: AgencyTab) -> Vec<T> {
    match tab {
        AgencyTab::All => records,
        AgencyTab::Plb => records.into_iter().filter(|r| r.has_plb()).collect(),
        AgencyTab::Others => records.into_iter().filter(|r| r.has_other()).collect(),
    }
}

/// Record counts per tab, taken before the active tab is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub plb: usize,
    pub others: usize,
}

impl TabCounts {
    pub fn tally<T: AgencyTagged>(records: &[T]) -> Self {
        TabCounts {
            all: records.len(),
            plb: records.iter().filter(|r| r.has_plb()).count(),
            others: records.iter().filter(|r| r.has_other()).count(),
        }
    }
}
