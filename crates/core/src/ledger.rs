use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::property::Property;
use crate::money;

/// In-memory ledger of real-estate properties.
///
/// Owns the property collection (insertion order = display order) and
/// the id counter. All mutation goes through the validated operations
/// below; validation failures leave the ledger unchanged. Mutators that
/// target a property by id return a found-flag — `Ok(false)` for an
/// unknown id, never an error.
#[must_use]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioLedger {
    /// Tracked properties, in insertion order.
    properties: Vec<Property>,

    /// Next id to assign. Ids are never reused.
    next_id: u32,
}

impl Default for PortfolioLedger {
    fn default() -> Self {
        Self {
            properties: Vec::new(),
            next_id: 1,
        }
    }
}

impl PortfolioLedger {
    /// Create an empty ledger. Ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Add a property and return its newly assigned id.
    ///
    /// Fails with `InvalidArgument` when `address` or `city` is empty.
    /// Duplicate addresses are not detected. Monetary inputs are
    /// normalized to 2-decimal fixed point; their sign is not checked
    /// here. `status` defaults to `"Active"` when `None` or empty.
    pub fn add_property(
        &mut self,
        address: impl Into<String>,
        city: impl Into<String>,
        purchase: Decimal,
        rehab: Decimal,
        initial_value: Decimal,
        rent_monthly: Decimal,
        status: Option<&str>,
    ) -> Result<u32, CoreError> {
        let address = address.into();
        let city = city.into();
        if address.is_empty() {
            return Err(CoreError::InvalidArgument("address must not be empty".into()));
        }
        if city.is_empty() {
            return Err(CoreError::InvalidArgument("city must not be empty".into()));
        }

        let id = self.next_id;
        self.next_id += 1;
        let property = Property::new(
            id,
            address,
            city,
            purchase,
            rehab,
            initial_value,
            rent_monthly,
            status,
        );
        debug!("added property #{id} ({}, {})", property.address, property.city);
        self.properties.push(property);
        Ok(id)
    }

    /// Replace the monthly rent of the property with the given id.
    /// Year-to-date accumulators are unaffected.
    ///
    /// Fails with `InvalidArgument` when the new rent is negative.
    /// Returns `Ok(false)` when the id is unknown.
    pub fn update_rent(&mut self, id: u32, new_rent: Decimal) -> Result<bool, CoreError> {
        if new_rent < Decimal::ZERO {
            return Err(CoreError::InvalidArgument("rent must not be negative".into()));
        }
        match self.find_mut(id) {
            Some(property) => {
                property.rent_monthly = money::to_money(new_rent);
                debug!("property #{id}: rent/mo set to {}", property.rent_monthly);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Replace the current market value of the property with the given
    /// id. Same validation and found-flag semantics as `update_rent`.
    pub fn update_current_value(&mut self, id: u32, new_value: Decimal) -> Result<bool, CoreError> {
        if new_value < Decimal::ZERO {
            return Err(CoreError::InvalidArgument("value must not be negative".into()));
        }
        match self.find_mut(id) {
            Some(property) => {
                property.current_value = money::to_money(new_value);
                debug!("property #{id}: value set to {}", property.current_value);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Record an income event against a property, accumulating into its
    /// year-to-date income.
    ///
    /// `date` and `note` are accepted for the operation's shape but not
    /// stored — the running totals are the only history kept.
    ///
    /// Fails with `InvalidArgument` when the amount is negative.
    /// Returns `Ok(false)` when the id is unknown.
    pub fn record_income(
        &mut self,
        id: u32,
        _date: NaiveDate,
        _note: &str,
        amount: Decimal,
    ) -> Result<bool, CoreError> {
        if amount < Decimal::ZERO {
            return Err(CoreError::InvalidArgument("amount must not be negative".into()));
        }
        match self.find_mut(id) {
            Some(property) => {
                property.ytd_income = money::to_money(property.ytd_income + amount);
                debug!("property #{id}: ytd income now {}", property.ytd_income);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Record an expense event against a property, accumulating into
    /// its year-to-date expenses. Symmetric to `record_income`.
    pub fn record_expense(
        &mut self,
        id: u32,
        _date: NaiveDate,
        _note: &str,
        amount: Decimal,
    ) -> Result<bool, CoreError> {
        if amount < Decimal::ZERO {
            return Err(CoreError::InvalidArgument("amount must not be negative".into()));
        }
        match self.find_mut(id) {
            Some(property) => {
                property.ytd_expense = money::to_money(property.ytd_expense + amount);
                debug!("property #{id}: ytd expense now {}", property.ytd_expense);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    // ── Queries ─────────────────────────────────────────────────────

    /// Get a single property by id.
    #[must_use]
    pub fn get_property(&self, id: u32) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// All properties, in insertion order.
    #[must_use]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Number of tracked properties.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Sum of annual NOI over all properties. 0.00 for an empty ledger.
    #[must_use]
    pub fn portfolio_noi_annual(&self) -> Decimal {
        money::to_money(self.properties.iter().map(Property::annual_noi).sum())
    }

    /// Sum of equity over all properties. 0.00 for an empty ledger.
    #[must_use]
    pub fn portfolio_equity(&self) -> Decimal {
        money::to_money(self.properties.iter().map(Property::equity).sum())
    }

    // ── Reporting ───────────────────────────────────────────────────

    /// Render the flat textual summary: property count, one line per
    /// property in insertion order, then the two portfolio totals.
    #[must_use]
    pub fn render_summary(&self) -> String {
        let mut out = format!("Properties: {}\n", self.properties.len());
        for property in &self.properties {
            out.push_str(&format!("{property}\n"));
        }
        out.push_str(&format!("Portfolio NOI/yr=${}\n", self.portfolio_noi_annual()));
        out.push_str(&format!("Portfolio equity=${}\n", self.portfolio_equity()));
        out
    }

    /// Print the summary to stdout.
    pub fn print_summary(&self) {
        print!("{}", self.render_summary());
    }

    // ── Internal ────────────────────────────────────────────────────

    fn find_mut(&mut self, id: u32) -> Option<&mut Property> {
        self.properties.iter_mut().find(|p| p.id == id)
    }
}
