pub mod aggregate;
pub mod engine;
pub mod facets;
pub mod lifecycle;
pub mod params;
pub mod sort;
pub mod tabs;
pub mod url_params;

pub use aggregate::aggregate_units_to_building;
pub use engine::{SearchEngine, SearchResults, UnitView};
pub use facets::{apply_facet, apply_facets, DatePreset, Facet, Facets, NumericRange, PropertyCategory};
pub use lifecycle::{filter_by_transaction_type, select_units_by_lifecycle, Lifecycle, TransactionSelector};
pub use params::QueryParams;
pub use sort::{sort_records, BuildingSort, SortKey, Sortable, UnitSort};
pub use tabs::{partition_by_agency_tab, AgencyTab, AgencyTagged, TabCounts};
