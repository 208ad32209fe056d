// src/query/facets.rs

use crate::dataset::ProjectIndex;
use crate::domain::{parse_amount, Project, Unit};
use chrono::{Months, NaiveDate};
use log::debug;
use std::collections::BTreeSet;

/// Inclusive numeric bounds; `None` on either side means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NumericRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }
}

/// Main property type buckets, matched against the project's type text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PropertyCategory {
    #[default]
    All,
    Hdb,
    Condo,
    Landed,
}

impl PropertyCategory {
    pub fn matches(self, property_type: &str) -> bool {
        let kind = property_type.to_lowercase();
        match self {
            PropertyCategory::All => true,
            PropertyCategory::Hdb => kind.contains("hdb"),
            PropertyCategory::Condo => kind.contains("condo") || kind.contains("apartment"),
            PropertyCategory::Landed => kind.contains("landed") || kind.contains("house"),
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "all" => Some(PropertyCategory::All),
            "hdb" => Some(PropertyCategory::Hdb),
            "condo" => Some(PropertyCategory::Condo),
            "landed" => Some(PropertyCategory::Landed),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PropertyCategory::All => "all",
            PropertyCategory::Hdb => "hdb",
            PropertyCategory::Condo => "condo",
            PropertyCategory::Landed => "landed",
        }
    }
}

/// Transaction date windows offered on the transactions page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePreset {
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
    EighteenMonths,
    All,
}

impl DatePreset {
    fn months(self) -> Option<u32> {
        match self {
            DatePreset::OneMonth => Some(1),
            DatePreset::ThreeMonths => Some(3),
            DatePreset::SixMonths => Some(6),
            DatePreset::TwelveMonths => Some(12),
            DatePreset::EighteenMonths => Some(18),
            DatePreset::All => None,
        }
    }

    /// First day of the `[start, today]` window, or `None` for `All`.
    pub fn window_start(self, today: NaiveDate) -> Option<NaiveDate> {
        self.months()
            .and_then(|m| today.checked_sub_months(Months::new(m)))
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "1month" => Some(DatePreset::OneMonth),
            "3months" => Some(DatePreset::ThreeMonths),
            "6months" => Some(DatePreset::SixMonths),
            "12months" => Some(DatePreset::TwelveMonths),
            "18months" => Some(DatePreset::EighteenMonths),
            "all" => Some(DatePreset::All),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatePreset::OneMonth => "1month",
            DatePreset::ThreeMonths => "3months",
            DatePreset::SixMonths => "6months",
            DatePreset::TwelveMonths => "12months",
            DatePreset::EighteenMonths => "18months",
            DatePreset::All => "all",
        }
    }
}

/// Every facet a query can constrain. The default value constrains nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Facets {
    pub price: NumericRange,
    pub psf: NumericRange,
    pub area: NumericRange,
    pub year: NumericRange,

    pub bedrooms: BTreeSet<String>,
    pub bathrooms: BTreeSet<String>,

    pub category: PropertyCategory,
    pub subtypes: BTreeSet<String>,
    pub districts: BTreeSet<String>,
    pub tenures: BTreeSet<String>,

    pub keyword: Option<String>,
    pub agent: Option<String>,
    pub date_range: Option<DatePreset>,
}

/// One active constraint, borrowed from `Facets`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Facet<'f> {
    Price(NumericRange),
    Psf(NumericRange),
    Area(NumericRange),
    Year(NumericRange),
    Bedrooms(&'f BTreeSet<String>),
    Bathrooms(&'f BTreeSet<String>),
    Category(PropertyCategory),
    Subtypes(&'f BTreeSet<String>),
    Districts(&'f BTreeSet<String>),
    Tenures(&'f BTreeSet<String>),
    Keyword(&'f str),
    Agent(&'f str),
    DateRange(DatePreset),
}

impl Facets {
    /// The facets that actually constrain something, in a fixed order.
    pub fn constraints(&self) -> Vec<Facet<'_>> {
        let mut out = Vec::new();

        if !self.price.is_unbounded() {
            out.push(Facet::Price(self.price));
        }
        if !self.psf.is_unbounded() {
            out.push(Facet::Psf(self.psf));
        }
        if !self.area.is_unbounded() {
            out.push(Facet::Area(self.area));
        }
        if !self.year.is_unbounded() {
            out.push(Facet::Year(self.year));
        }
        if !self.bedrooms.is_empty() {
            out.push(Facet::Bedrooms(&self.bedrooms));
        }
        if !self.bathrooms.is_empty() {
            out.push(Facet::Bathrooms(&self.bathrooms));
        }
        if self.category != PropertyCategory::All {
            out.push(Facet::Category(self.category));
        }
        if !self.subtypes.is_empty() {
            out.push(Facet::Subtypes(&self.subtypes));
        }
        if !self.districts.is_empty() {
            out.push(Facet::Districts(&self.districts));
        }
        if !self.tenures.is_empty() {
            out.push(Facet::Tenures(&self.tenures));
        }
        if let Some(keyword) = non_blank(&self.keyword) {
            out.push(Facet::Keyword(keyword));
        }
        if let Some(agent) = non_blank(&self.agent) {
            out.push(Facet::Agent(agent));
        }
        match self.date_range {
            None | Some(DatePreset::All) => {}
            Some(preset) => out.push(Facet::DateRange(preset)),
        }

        out
    }

    pub fn is_empty(&self) -> bool {
        self.constraints().is_empty()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Facet<'_> {
    /// Facets that look at the owning project. Units whose project is
    /// missing fail these.
    pub fn needs_project(&self) -> bool {
        matches!(
            self,
            Facet::Year(_)
                | Facet::Category(_)
                | Facet::Subtypes(_)
                | Facet::Districts(_)
                | Facet::Tenures(_)
                | Facet::Keyword(_)
        )
    }

    pub fn matches(&self, unit: &Unit, project: Option<&Project>, today: NaiveDate) -> bool {
        if self.needs_project() && project.is_none() {
            return false;
        }

        match *self {
            Facet::Price(range) => range.contains(unit.price_amount()),
            Facet::Psf(range) => range.contains(unit.psf_amount()),
            Facet::Area(range) => range.contains(unit.size_amount()),
            Facet::Bedrooms(set) => set.contains(&unit.bedrooms.to_string()),
            Facet::Bathrooms(set) => set.contains(&unit.bathrooms.to_string()),
            Facet::Agent(name) => unit
                .agent
                .as_ref()
                .is_some_and(|a| contains_ignore_case(&a.name, name)),
            Facet::DateRange(preset) => {
                // Listings have no transaction date; the window only narrows past deals.
                if !unit.status.is_transaction() {
                    return true;
                }
                let Some(start) = preset.window_start(today) else {
                    return true;
                };
                unit.transaction_date
                    .is_some_and(|date| date >= start && date <= today)
            }
            _ => match project {
                Some(project) => self.matches_project(unit, project),
                None => false,
            },
        }
    }

    fn matches_project(&self, unit: &Unit, project: &Project) -> bool {
        match *self {
            Facet::Year(range) => range.contains(parse_amount(&project.completion_year)),
            Facet::Category(category) => category.matches(&project.property_type),
            Facet::Subtypes(set) => set
                .iter()
                .any(|s| contains_ignore_case(&project.property_type, s)),
            Facet::Districts(set) => set
                .iter()
                .any(|d| d.trim().eq_ignore_ascii_case(project.district.trim())),
            Facet::Tenures(set) => set.iter().any(|t| contains_ignore_case(&project.tenure, t)),
            Facet::Keyword(keyword) => {
                contains_ignore_case(&project.name, keyword)
                    || project
                        .addresses
                        .iter()
                        .any(|a| contains_ignore_case(a, keyword))
                    || contains_ignore_case(&project.district, keyword)
                    || contains_ignore_case(&unit.unit_number, keyword)
            }
            _ => true,
        }
    }
}

/// Applies one facet to a unit set.
pub fn apply_facet<'a>(
    units: Vec<&'a Unit>,
    projects: &ProjectIndex<'_>,
    facet: &Facet<'_>,
    today: NaiveDate,
) -> Vec<&'a Unit> {
    units
        .into_iter()
        .filter(|u| {
            let project = projects.get(u.project_id.as_str()).copied();
            facet.matches(u, project, today)
        })
        .collect()
}

/// Intersects `units` with every active facet (logical AND).
pub fn apply_facets<'a>(
    units: Vec<&'a Unit>,
    projects: &ProjectIndex<'_>,
    facets: &Facets,
    today: NaiveDate,
) -> Vec<&'a Unit> {
    let mut remaining = units;
    for facet in facets.constraints() {
        let before = remaining.len();
        remaining = apply_facet(remaining, projects, &facet, today);
        debug!("facet {:?}: {} -> {} units", facet, before, remaining.len());
    }
    remaining
}
