pub mod logic;
pub mod project;
pub mod unit;
pub mod views;

pub use logic::{classify_transaction_type, parse_amount};
pub use project::{Coordinates, Project};
pub use unit::{AgentContact, TransactionType, Unit, UnitStatus};
pub use views::{BuildingSummary, GridRow, TableRow};
