// Shared fixtures for the scenario tests.

use crate::dataset::Dataset;
use crate::domain::{AgentContact, Coordinates, Project, TransactionType, Unit, UnitStatus};
use crate::query::SearchEngine;
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

pub fn engine(dataset: &Dataset) -> SearchEngine<'_> {
    SearchEngine::new(dataset).with_reference_date(today())
}

pub fn project(id: &str, name: &str, property_type: &str, district: &str) -> Project {
    Project {
        id: id.to_string(),
        name: name.to_string(),
        addresses: vec![format!("1 {name} Road")],
        district: district.to_string(),
        tenure: "Freehold".to_string(),
        completion_year: "2020".to_string(),
        property_type: property_type.to_string(),
        coordinates: Coordinates {
            lat: 1.30,
            lng: 103.85,
        },
        description: String::new(),
        amenities: vec![],
        schools: vec![],
        transport: vec![],
        total_units: None,
        image: None,
    }
}

/// An ACTIVE PLB sale listing; tweak the returned value for anything else.
pub fn unit(id: &str, project_id: &str, price: &str) -> Unit {
    Unit {
        id: id.to_string(),
        project_id: project_id.to_string(),
        unit_number: format!("#{id}"),
        price: price.to_string(),
        price_value: None,
        size: "1,000 sqft".to_string(),
        psf: "$1,500".to_string(),
        bedrooms: 2,
        bathrooms: 2,
        status: UnitStatus::Active,
        agency: "PLB".to_string(),
        transaction_type: Some(TransactionType::Sale),
        transaction_date: None,
        images: vec![],
        features: vec![],
        floor_plan: None,
        virtual_tour: None,
        agent: Some(AgentContact {
            name: "Jane Tan".to_string(),
            phone: String::new(),
            email: String::new(),
        }),
    }
}

pub fn rental(id: &str, project_id: &str, price: &str) -> Unit {
    Unit {
        transaction_type: Some(TransactionType::Rental),
        ..unit(id, project_id, price)
    }
}

pub fn with_status(mut u: Unit, status: UnitStatus, date: Option<NaiveDate>) -> Unit {
    u.status = status;
    u.transaction_date = date;
    u
}

pub fn with_agency(mut u: Unit, agency: &str) -> Unit {
    u.agency = agency.to_string();
    u
}

pub fn ids<'a>(units: impl IntoIterator<Item = &'a Unit>) -> Vec<&'a str> {
    units.into_iter().map(|u| u.id.as_str()).collect()
}

/// A small mixed catalogue covering every lifecycle, both transaction types,
/// both agency tabs and one dangling unit.
pub fn sample_dataset() -> Dataset {
    let mut amber = project("p-amber", "Amber Park", "Condominium", "D15");
    amber.total_units = Some(592);
    amber.completion_year = "2023".to_string();

    let mut leedon = project("p-leedon", "Leedon Green", "Condominium", "D10");
    leedon.tenure = "Freehold".to_string();
    leedon.completion_year = "2022".to_string();

    let mut tampines = project("p-tampines", "Tampines GreenRidges", "HDB 4-Room", "D18");
    tampines.tenure = "99-year Leasehold".to_string();
    tampines.completion_year = "2016".to_string();
    tampines.total_units = Some(1200);

    let mut sentosa = project("p-sentosa", "Sentosa Cove Villa", "Landed House", "D04");
    sentosa.tenure = "99-year Leasehold".to_string();
    sentosa.completion_year = "2012".to_string();

    let mut a3 = rental("a3", "p-amber", "$6,500/month");
    a3.agency = "ERA".to_string();
    a3.bedrooms = 3;

    let mut l1 = with_agency(unit("l1", "p-leedon", "$3,200,000"), "Huttons");
    l1.size = "1,400 sqft".to_string();
    l1.psf = "$2,286".to_string();
    l1.bedrooms = 3;

    let mut t1 = unit("t1", "p-tampines", "$680,000");
    t1.size = "1,001 sqft".to_string();
    t1.psf = "$679".to_string();
    t1.bedrooms = 3;

    let mut s1 = with_agency(unit("s1", "p-sentosa", "$12,000,000"), "ERA");
    s1.size = "6,000 sqft".to_string();
    s1.psf = "$2,000".to_string();
    s1.bedrooms = 5;
    s1.agent = None;

    Dataset::new(
        vec![amber, leedon, tampines, sentosa],
        vec![
            unit("a1", "p-amber", "$2,000,000"),
            with_agency(unit("a2", "p-amber", "$3,000,000"), "ERA"),
            a3,
            with_status(
                unit("a4", "p-amber", "$2,500,000"),
                UnitStatus::Sold,
                NaiveDate::from_ymd_opt(2024, 5, 20),
            ),
            with_status(
                rental("a5", "p-amber", "$5,800/month"),
                UnitStatus::Rented,
                NaiveDate::from_ymd_opt(2023, 1, 10),
            ),
            l1,
            with_status(
                unit("l2", "p-leedon", "$2,900,000"),
                UnitStatus::Sold,
                NaiveDate::from_ymd_opt(2024, 2, 1),
            ),
            t1,
            s1,
            // Points at a project that is not in the catalogue.
            unit("x1", "p-missing", "$1,500,000"),
        ],
    )
}
