// src/query/sort.rs

use crate::domain::{parse_amount, BuildingSummary, GridRow, TableRow};
use std::cmp::Ordering;

use super::engine::UnitView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildingSort {
    NameAsc,
    NameDesc,
    ActiveListingsLow,
    ActiveListingsHigh,
    TotalUnitsLow,
    TotalUnitsHigh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnitSort {
    Newest,
    LowestPrice,
    HighestPrice,
    PsfLow,
    PsfHigh,
    SizeLow,
    SizeHigh,
}

/// The fixed sort vocabulary. Building keys only order building summaries,
/// unit keys only order grid and table records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Building(BuildingSort),
    Unit(UnitSort),
}

impl SortKey {
    pub const ALL: [SortKey; 13] = [
        SortKey::Building(BuildingSort::NameAsc),
        SortKey::Building(BuildingSort::NameDesc),
        SortKey::Building(BuildingSort::ActiveListingsLow),
        SortKey::Building(BuildingSort::ActiveListingsHigh),
        SortKey::Building(BuildingSort::TotalUnitsLow),
        SortKey::Building(BuildingSort::TotalUnitsHigh),
        SortKey::Unit(UnitSort::Newest),
        SortKey::Unit(UnitSort::LowestPrice),
        SortKey::Unit(UnitSort::HighestPrice),
        SortKey::Unit(UnitSort::PsfLow),
        SortKey::Unit(UnitSort::PsfHigh),
        SortKey::Unit(UnitSort::SizeLow),
        SortKey::Unit(UnitSort::SizeHigh),
    ];

    /// Unknown tokens yield `None`, which sorts as identity.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL.into_iter().find(|k| k.as_str() == token)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Building(BuildingSort::NameAsc) => "name-asc",
            SortKey::Building(BuildingSort::NameDesc) => "name-desc",
            SortKey::Building(BuildingSort::ActiveListingsLow) => "active-listings-low",
            SortKey::Building(BuildingSort::ActiveListingsHigh) => "active-listings-high",
            SortKey::Building(BuildingSort::TotalUnitsLow) => "total-units-low",
            SortKey::Building(BuildingSort::TotalUnitsHigh) => "total-units-high",
            SortKey::Unit(UnitSort::Newest) => "newest",
            SortKey::Unit(UnitSort::LowestPrice) => "lowest-price",
            SortKey::Unit(UnitSort::HighestPrice) => "highest-price",
            SortKey::Unit(UnitSort::PsfLow) => "psf-low",
            SortKey::Unit(UnitSort::PsfHigh) => "psf-high",
            SortKey::Unit(UnitSort::SizeLow) => "size-low",
            SortKey::Unit(UnitSort::SizeHigh) => "size-high",
        }
    }
}

/// A record type that knows which sort keys apply to it.
pub trait Sortable {
    fn supports(key: SortKey) -> bool;
    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering;
}

/// Stable sort by `key`. Missing keys, and keys outside the record's
/// vocabulary, leave the input order untouched.
pub fn sort_records<T: Sortable>(mut records: Vec<T>, key: Option<SortKey>) -> Vec<T> {
    if let Some(key) = key {
        if T::supports(key) {
            records.sort_by(|a, b| a.compare_by(b, key));
        }
    }
    records
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Numeric views over a unit-shaped record.
trait UnitMetrics {
    fn price(&self) -> f64;
    fn size(&self) -> f64;
    fn year(&self) -> f64;
    fn psf(&self) -> f64;
}

fn compare_unit_metrics<T: UnitMetrics>(a: &T, b: &T, sort: UnitSort) -> Ordering {
    match sort {
        UnitSort::Newest => cmp_f64(b.year(), a.year()),
        UnitSort::LowestPrice => cmp_f64(a.price(), b.price()),
        UnitSort::HighestPrice => cmp_f64(b.price(), a.price()),
        UnitSort::PsfLow => cmp_f64(a.psf(), b.psf()),
        UnitSort::PsfHigh => cmp_f64(b.psf(), a.psf()),
        UnitSort::SizeLow => cmp_f64(a.size(), b.size()),
        UnitSort::SizeHigh => cmp_f64(b.size(), a.size()),
    }
}

impl UnitMetrics for UnitView<'_> {
    fn price(&self) -> f64 {
        self.unit.price_amount()
    }
    fn size(&self) -> f64 {
        self.unit.size_amount()
    }
    fn year(&self) -> f64 {
        parse_amount(&self.project.completion_year)
    }
    fn psf(&self) -> f64 {
        self.unit.psf_amount()
    }
}

// Rows order by the same numeric price the engine uses; size, year and PSF
// come from the display text, which is what the unit itself holds.
impl UnitMetrics for TableRow {
    fn price(&self) -> f64 {
        self.price_value
    }
    fn size(&self) -> f64 {
        parse_amount(&self.size)
    }
    fn year(&self) -> f64 {
        parse_amount(&self.year)
    }
    fn psf(&self) -> f64 {
        parse_amount(&self.psf)
    }
}

impl UnitMetrics for GridRow {
    fn price(&self) -> f64 {
        self.price_value
    }
    fn size(&self) -> f64 {
        parse_amount(&self.size)
    }
    fn year(&self) -> f64 {
        parse_amount(&self.year)
    }
    // Cards carry no PSF; every card ties.
    fn psf(&self) -> f64 {
        0.0
    }
}

macro_rules! impl_unit_sortable {
    ($($ty:ty),*) => {
        $(
            impl Sortable for $ty {
                fn supports(key: SortKey) -> bool {
                    matches!(key, SortKey::Unit(_))
                }

                fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
                    match key {
                        SortKey::Unit(sort) => compare_unit_metrics(self, other, sort),
                        SortKey::Building(_) => Ordering::Equal,
                    }
                }
            }
        )*
    };
}

impl_unit_sortable!(UnitView<'_>, GridRow, TableRow);

impl Sortable for BuildingSummary {
    fn supports(key: SortKey) -> bool {
        matches!(key, SortKey::Building(_))
    }

    fn compare_by(&self, other: &Self, key: SortKey) -> Ordering {
        let sort = match key {
            SortKey::Building(sort) => sort,
            SortKey::Unit(_) => return Ordering::Equal,
        };
        let total = |b: &BuildingSummary| b.total_units.unwrap_or(0);
        match sort {
            BuildingSort::NameAsc => compare_names(&self.name, &other.name),
            BuildingSort::NameDesc => compare_names(&other.name, &self.name),
            BuildingSort::ActiveListingsLow => self.active_listings.cmp(&other.active_listings),
            BuildingSort::ActiveListingsHigh => other.active_listings.cmp(&self.active_listings),
            BuildingSort::TotalUnitsLow => total(self).cmp(&total(other)),
            BuildingSort::TotalUnitsHigh => total(other).cmp(&total(self)),
        }
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
