// src/tests/building_tests.rs

use super::utils::{engine, project, rental, sample_dataset, unit, with_agency};
use crate::dataset::Dataset;
use crate::domain::BuildingSummary;
use crate::query::{
    aggregate_units_to_building, AgencyTab, BuildingSort, QueryParams, SortKey, TabCounts,
    TransactionSelector, UnitSort,
};

fn names(buildings: &[BuildingSummary]) -> Vec<&str> {
    buildings.iter().map(|b| b.name.as_str()).collect()
}

#[test]
fn building_view_summarises_visible_units() {
    let dataset = sample_dataset();
    let engine = engine(&dataset);

    let results = engine.buildings(&QueryParams::default());
    assert_eq!(
        names(&results.records),
        vec![
            "Amber Park",
            "Leedon Green",
            "Tampines GreenRidges",
            "Sentosa Cove Villa"
        ]
    );

    let amber = &results.records[0];
    assert_eq!(amber.active_listings, 2);
    // The sold sale counts; the rented rental does not.
    assert_eq!(amber.past_transactions, 1);
    assert_eq!(amber.price_range, "$2.0M - $3.0M");
    assert_eq!(amber.size_range, "1,000 sqft");
    assert!(amber.has_plb_units);
    assert!(amber.has_other_units);
    assert_eq!(amber.total_units, Some(592));

    let tampines = &results.records[2];
    assert_eq!(tampines.price_range, "$0.7M");
    assert!(tampines.has_plb_units);
    assert!(!tampines.has_other_units);
}

#[test]
fn only_matching_transaction_type_counts_toward_a_building() {
    let dataset = Dataset::new(
        vec![project("p1", "Amber Park", "Condominium", "D15")],
        vec![
            unit("u1", "p1", "$2,000,000"),
            rental("u2", "p1", "$5,000/month"),
        ],
    );
    let engine = engine(&dataset);

    let sale = engine.buildings(&QueryParams::new(TransactionSelector::ForSale));
    assert_eq!(sale.records.len(), 1);
    assert_eq!(sale.records[0].active_listings, 1);

    let rent = engine.buildings(&QueryParams::new(TransactionSelector::ForRent));
    assert_eq!(rent.records[0].active_listings, 1);
}

#[test]
fn buildings_without_visible_units_are_dropped() {
    let dataset = Dataset::new(
        vec![
            project("p1", "Amber Park", "Condominium", "D15"),
            project("p2", "Empty Tower", "Condominium", "D15"),
        ],
        vec![unit("u1", "p1", "$2,000,000")],
    );
    let engine = engine(&dataset);

    let sale = engine.buildings(&QueryParams::new(TransactionSelector::ForSale));
    assert_eq!(names(&sale.records), vec!["Amber Park"]);

    let rent = engine.buildings(&QueryParams::new(TransactionSelector::ForRent));
    assert!(rent.records.is_empty());
    assert_eq!(rent.tab_counts, TabCounts::default());
}

#[test]
fn single_unit_price_range_has_no_dash() {
    let dataset = Dataset::new(
        vec![project("p1", "Solo", "Condominium", "D01")],
        vec![unit("u1", "p1", "$2,800,000")],
    );
    let engine = engine(&dataset);

    let results = engine.buildings(&QueryParams::default());
    assert_eq!(results.records[0].price_range, "$2.8M");
}

#[test]
fn building_tabs_use_derived_agency_flags() {
    let dataset = sample_dataset();
    let engine = engine(&dataset);

    let plb = engine.buildings(&QueryParams::default().with_tab(AgencyTab::Plb));
    assert_eq!(names(&plb.records), vec!["Amber Park", "Tampines GreenRidges"]);

    let others = engine.buildings(&QueryParams::default().with_tab(AgencyTab::Others));
    assert_eq!(
        names(&others.records),
        vec!["Amber Park", "Leedon Green", "Sentosa Cove Villa"]
    );

    let expected = TabCounts {
        all: 4,
        plb: 2,
        others: 3,
    };
    assert_eq!(plb.tab_counts, expected);
    assert_eq!(others.tab_counts, expected);
}

#[test]
fn building_sorts() {
    let dataset = sample_dataset();
    let engine = engine(&dataset);
    let sorted = |key: SortKey| -> Vec<String> {
        let results = engine.buildings(&QueryParams::default().with_sort(key));
        results.records.into_iter().map(|b| b.name).collect()
    };

    assert_eq!(
        sorted(SortKey::Building(BuildingSort::NameDesc)),
        vec![
            "Tampines GreenRidges",
            "Sentosa Cove Villa",
            "Leedon Green",
            "Amber Park"
        ]
    );
    // Missing totals count as zero and keep their original order.
    assert_eq!(
        sorted(SortKey::Building(BuildingSort::TotalUnitsHigh)),
        vec![
            "Tampines GreenRidges",
            "Amber Park",
            "Leedon Green",
            "Sentosa Cove Villa"
        ]
    );
    assert_eq!(
        sorted(SortKey::Building(BuildingSort::ActiveListingsHigh)),
        vec![
            "Amber Park",
            "Leedon Green",
            "Tampines GreenRidges",
            "Sentosa Cove Villa"
        ]
    );
    // Unit keys do not apply to buildings.
    let unsorted = engine.buildings(&QueryParams::default()).records;
    assert_eq!(
        sorted(SortKey::Unit(UnitSort::HighestPrice)),
        names(&unsorted)
    );
}

#[test]
fn transactions_page_groups_past_deals() {
    let dataset = sample_dataset();
    let engine = engine(&dataset);

    let results = engine.buildings(&QueryParams::new(TransactionSelector::Transactions));
    assert_eq!(names(&results.records), vec!["Amber Park", "Leedon Green"]);
    assert_eq!(results.records[0].active_listings, 2);
    assert_eq!(results.records[0].past_transactions, 2);
}

#[test]
fn aggregate_without_units_reports_no_ranges() {
    let p = project("p1", "Solo", "Condominium", "D01");
    let summary = aggregate_units_to_building(&p, &[], &[]);
    assert_eq!(summary.active_listings, 0);
    assert_eq!(summary.price_range, "N/A");
    assert_eq!(summary.size_range, "N/A");
    assert!(!summary.has_plb_units && !summary.has_other_units);
}

#[test]
fn aggregate_counts_and_ranges() {
    let p = project("p1", "Amber Park", "Condominium", "D15");
    let mut big = with_agency(unit("u2", "p1", "$3,000,000"), "ERA");
    big.size = "1,500 sqft".to_string();
    let small = unit("u1", "p1", "$2,000,000");
    let sold = unit("u3", "p1", "$2,500,000");

    let summary = aggregate_units_to_building(&p, &[&small, &big], &[&sold]);
    assert_eq!(summary.active_listings, 2);
    assert_eq!(summary.past_transactions, 1);
    assert_eq!(summary.price_range, "$2.0M - $3.0M");
    assert_eq!(summary.size_range, "1,000 - 1,500 sqft");
}
