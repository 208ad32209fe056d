// src/domain/unit.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The agency whose listings get their own tab.
pub const PLB_AGENCY: &str = "PLB";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum UnitStatus {
    Active,
    Sold,
    Rented,
}

impl UnitStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UnitStatus::Active => "ACTIVE",
            UnitStatus::Sold => "SOLD",
            UnitStatus::Rented => "RENTED",
        }
    }

    /// SOLD and RENTED units are past transactions rather than listings.
    pub fn is_transaction(self) -> bool {
        matches!(self, UnitStatus::Sold | UnitStatus::Rented)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Sale,
    Rental,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Sale => "sale",
            TransactionType::Rental => "rental",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentContact {
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// A single listing or past transaction inside a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Unit {
    pub id: String,
    pub project_id: String,
    #[serde(default)]
    pub unit_number: String,

    // Pricing. `price` is display text ("$1,000,000" or "$4,500/month").
    pub price: String,
    /// Pre-parsed price; falls back to parsing `price` when absent.
    pub price_value: Option<f64>,
    #[serde(default)]
    pub size: String,
    #[serde(default)]
    pub psf: String,

    #[serde(default)]
    pub bedrooms: u32,
    #[serde(default)]
    pub bathrooms: u32,

    pub status: UnitStatus,
    #[serde(default)]
    pub agency: String,
    /// Missing on legacy records; see `classify_transaction_type`.
    pub transaction_type: Option<TransactionType>,
    pub transaction_date: Option<NaiveDate>,

    // Media and descriptive fields
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    pub floor_plan: Option<String>,
    pub virtual_tour: Option<String>,
    pub agent: Option<AgentContact>,
}

impl Unit {
    pub fn is_plb(&self) -> bool {
        self.agency.trim().eq_ignore_ascii_case(PLB_AGENCY)
    }

    pub fn price_amount(&self) -> f64 {
        self.price_value
            .unwrap_or_else(|| super::logic::parse_amount(&self.price))
    }

    pub fn size_amount(&self) -> f64 {
        super::logic::parse_amount(&self.size)
    }

    pub fn psf_amount(&self) -> f64 {
        super::logic::parse_amount(&self.psf)
    }
}
