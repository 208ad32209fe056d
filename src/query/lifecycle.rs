// src/query/lifecycle.rs

use crate::domain::{classify_transaction_type, TransactionType, Unit, UnitStatus};

/// Which lifecycle states a query looks at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    Active,
    Sold,
    Rented,
    /// SOLD and RENTED together.
    Transactions,
}

impl Lifecycle {
    pub fn admits(self, status: UnitStatus) -> bool {
        match self {
            Lifecycle::Active => status == UnitStatus::Active,
            Lifecycle::Sold => status == UnitStatus::Sold,
            Lifecycle::Rented => status == UnitStatus::Rented,
            Lifecycle::Transactions => status.is_transaction(),
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "active" => Some(Lifecycle::Active),
            "sold" => Some(Lifecycle::Sold),
            "rented" => Some(Lifecycle::Rented),
            "transactions" => Some(Lifecycle::Transactions),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Lifecycle::Active => "active",
            Lifecycle::Sold => "sold",
            Lifecycle::Rented => "rented",
            Lifecycle::Transactions => "transactions",
        }
    }
}

/// The sale/rent switch of the search page.
///
/// `Transactions` is the combined transactions page: it shows sales and
/// rentals together and never applies the sale/rental split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransactionSelector {
    #[default]
    ForSale,
    ForRent,
    Transactions,
}

impl TransactionSelector {
    pub fn admits(self, kind: TransactionType) -> bool {
        match self {
            TransactionSelector::ForSale => kind == TransactionType::Sale,
            TransactionSelector::ForRent => kind == TransactionType::Rental,
            TransactionSelector::Transactions => true,
        }
    }

    /// Lifecycle used when a query does not name one.
    pub fn default_lifecycle(self) -> Lifecycle {
        match self {
            TransactionSelector::Transactions => Lifecycle::Transactions,
            _ => Lifecycle::Active,
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "for sale" | "for-sale" | "sale" => Some(TransactionSelector::ForSale),
            "for rent" | "for-rent" | "rent" | "rental" => Some(TransactionSelector::ForRent),
            "transactions" | "both" => Some(TransactionSelector::Transactions),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionSelector::ForSale => "For Sale",
            TransactionSelector::ForRent => "For Rent",
            TransactionSelector::Transactions => "transactions",
        }
    }
}

pub fn select_units_by_lifecycle<'a, I>(units: I, lifecycle: Lifecycle) -> Vec<&'a Unit>
where
    I: IntoIterator<Item = &'a Unit>,
{
    units
        .into_iter()
        .filter(|u| lifecycle.admits(u.status))
        .collect()
}

pub fn filter_by_transaction_type<'a>(
    units: Vec<&'a Unit>,
    selector: TransactionSelector,
) -> Vec<&'a Unit> {
    if selector == TransactionSelector::Transactions {
        return units;
    }
    units
        .into_iter()
        .filter(|u| selector.admits(classify_transaction_type(u)))
        .collect()
}
