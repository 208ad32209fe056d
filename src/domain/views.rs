// src/domain/views.rs

use super::logic::classify_transaction_type;
use super::project::{Coordinates, Project};
use super::unit::{TransactionType, Unit, UnitStatus};
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the building view: a project and what its visible units add up to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingSummary {
    // === Project Context ===
    pub project_id: String,
    pub name: String,
    pub address: String,
    pub district: String,
    pub tenure: String,
    pub property_type: String,
    pub completion_year: String,
    pub coordinates: Coordinates,
    pub image: Option<String>,
    pub total_units: Option<u32>,

    // === Aggregates ===
    pub active_listings: usize,
    pub past_transactions: usize,
    pub price_range: String,
    pub size_range: String,

    // === Agency Flags ===
    pub has_plb_units: bool,
    pub has_other_units: bool,
}

/// A unit as shown on a listing card.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridRow {
    pub unit_id: String,
    pub project_id: String,
    pub unit_number: String,
    pub price: String,
    /// Numeric price used for ordering; not part of the wire shape.
    #[serde(skip)]
    pub price_value: f64,
    /// The project name.
    pub title: String,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size: String,
    pub property_type: String,
    pub tenure: String,
    pub year: String,
    pub image: Option<String>,
    pub status: UnitStatus,
    pub agency: String,
    pub transaction_type: TransactionType,
    pub coordinates: Coordinates,
}

/// A unit as shown in the tabular view; the grid fields plus PSF and dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub unit_id: String,
    pub project_id: String,
    pub unit_number: String,
    pub price: String,
    #[serde(skip)]
    pub price_value: f64,
    pub title: String,
    pub address: String,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub size: String,
    pub psf: String,
    pub property_type: String,
    pub tenure: String,
    pub district: String,
    pub year: String,
    pub image: Option<String>,
    pub status: UnitStatus,
    pub agency: String,
    pub transaction_type: TransactionType,
    pub transaction_date: Option<NaiveDate>,
}

impl GridRow {
    pub fn from_unit(unit: &Unit, project: &Project) -> Self {
        GridRow {
            unit_id: unit.id.clone(),
            project_id: project.id.clone(),
            unit_number: unit.unit_number.clone(),
            price: unit.price.clone(),
            price_value: unit.price_amount(),
            title: project.name.clone(),
            address: project.primary_address().to_string(),
            bedrooms: unit.bedrooms,
            bathrooms: unit.bathrooms,
            size: unit.size.clone(),
            property_type: project.property_type.clone(),
            tenure: project.tenure.clone(),
            year: project.completion_year.clone(),
            // Unit photos first, the project's cover image otherwise.
            image: unit.images.first().cloned().or_else(|| project.image.clone()),
            status: unit.status,
            agency: unit.agency.clone(),
            transaction_type: classify_transaction_type(unit),
            coordinates: project.coordinates,
        }
    }
}

impl TableRow {
    pub fn from_unit(unit: &Unit, project: &Project) -> Self {
        TableRow {
            unit_id: unit.id.clone(),
            project_id: project.id.clone(),
            unit_number: unit.unit_number.clone(),
            price: unit.price.clone(),
            price_value: unit.price_amount(),
            title: project.name.clone(),
            address: project.primary_address().to_string(),
            bedrooms: unit.bedrooms,
            bathrooms: unit.bathrooms,
            size: unit.size.clone(),
            psf: unit.psf.clone(),
            property_type: project.property_type.clone(),
            tenure: project.tenure.clone(),
            district: project.district.clone(),
            year: project.completion_year.clone(),
            image: unit.images.first().cloned().or_else(|| project.image.clone()),
            status: unit.status,
            agency: unit.agency.clone(),
            transaction_type: classify_transaction_type(unit),
            transaction_date: unit.transaction_date,
        }
    }
}
