// src/query/aggregate.rs

use crate::domain::logic::{format_price_range, format_size_range};
use crate::domain::{BuildingSummary, Project, Unit};

const NO_RANGE: &str = "N/A";

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Rolls a project's visible units up into one building row.
///
/// `active_units` are the units the current query shows for this project;
/// price/size ranges and agency flags come from them. `sold_units` only
/// feed the past-transaction count.
pub fn aggregate_units_to_building(
    project: &Project,
    active_units: &[&Unit],
    sold_units: &[&Unit],
) -> BuildingSummary {
    let price_range = min_max(active_units.iter().map(|u| u.price_amount()))
        .map(|(lo, hi)| format_price_range(lo, hi))
        .unwrap_or_else(|| NO_RANGE.to_string());

    let size_range = min_max(active_units.iter().map(|u| u.size_amount()))
        .map(|(lo, hi)| format_size_range(lo, hi))
        .unwrap_or_else(|| NO_RANGE.to_string());

    BuildingSummary {
        project_id: project.id.clone(),
        name: project.name.clone(),
        address: project.primary_address().to_string(),
        district: project.district.clone(),
        tenure: project.tenure.clone(),
        property_type: project.property_type.clone(),
        completion_year: project.completion_year.clone(),
        coordinates: project.coordinates,
        image: project.image.clone(),
        total_units: project.total_units,

        active_listings: active_units.len(),
        past_transactions: sold_units.len(),
        price_range,
        size_range,

        has_plb_units: active_units.iter().any(|u| u.is_plb()),
        has_other_units: active_units.iter().any(|u| !u.is_plb()),
    }
}
