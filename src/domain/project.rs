// src/domain/project.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A building or development. Static reference data shared by its units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    /// A development can front several streets; the first one is the display address.
    #[serde(default)]
    pub addresses: Vec<String>,
    pub district: String,
    pub tenure: String,
    /// Kept as text since the source data mixes "2019" and "TOP 2026" styles.
    #[serde(default)]
    pub completion_year: String,
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub coordinates: Coordinates,
    #[serde(default)]
    pub description: String,

    // Descriptive lists
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub schools: Vec<String>,
    #[serde(default)]
    pub transport: Vec<String>,

    pub total_units: Option<u32>,
    pub image: Option<String>,
}

impl Project {
    pub fn primary_address(&self) -> &str {
        self.addresses.first().map(String::as_str).unwrap_or("")
    }
}
