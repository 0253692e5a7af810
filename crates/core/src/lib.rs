pub mod errors;
pub mod ledger;
pub mod models;
pub mod money;

pub use errors::CoreError;
pub use ledger::PortfolioLedger;
pub use models::property::Property;
