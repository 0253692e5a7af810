use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money;

/// Status assigned when none is supplied (or an empty one is).
pub const DEFAULT_STATUS: &str = "Active";

/// A single tracked real-estate asset and its financial state.
///
/// All monetary fields are stored at exactly two fractional digits,
/// rounded half-up on assignment. Derived metrics are recomputed from
/// the current field values on every call — nothing is cached.
///
/// `status` is an opaque free-text label (e.g. "Active", "Sold",
/// "Under Contract"); no value set is enforced and no operation keys
/// off it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier, assigned by the owning ledger.
    pub id: u32,

    /// Street address.
    pub address: String,

    /// City the property is located in.
    pub city: String,

    /// Purchase price.
    pub purchase: Decimal,

    /// Rehabilitation cost.
    pub rehab: Decimal,

    /// Current market value.
    pub current_value: Decimal,

    /// Monthly rent.
    pub rent_monthly: Decimal,

    /// Year-to-date recorded income. Only ever increased.
    pub ytd_income: Decimal,

    /// Year-to-date recorded expenses. Only ever increased.
    pub ytd_expense: Decimal,

    /// Free-text status label.
    pub status: String,
}

impl Property {
    /// Build a property, normalizing every monetary input to 2-decimal
    /// fixed point and starting both year-to-date accumulators at 0.00.
    ///
    /// No sign or upper-bound check is made on the monetary inputs;
    /// negative purchase/rehab/value are representable.
    pub fn new(
        id: u32,
        address: impl Into<String>,
        city: impl Into<String>,
        purchase: Decimal,
        rehab: Decimal,
        current_value: Decimal,
        rent_monthly: Decimal,
        status: Option<&str>,
    ) -> Self {
        let status = match status {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => DEFAULT_STATUS.to_string(),
        };
        Self {
            id,
            address: address.into(),
            city: city.into(),
            purchase: money::to_money(purchase),
            rehab: money::to_money(rehab),
            current_value: money::to_money(current_value),
            rent_monthly: money::to_money(rent_monthly),
            ytd_income: money::zero(),
            ytd_expense: money::zero(),
            status,
        }
    }

    /// Annual net operating income: twelve months of rent plus recorded
    /// income minus recorded expenses.
    #[must_use]
    pub fn annual_noi(&self) -> Decimal {
        let annual_rent = self.rent_monthly * Decimal::from(12);
        money::to_money(annual_rent + self.ytd_income - self.ytd_expense)
    }

    /// Cap rate: annual NOI as a percentage of the purchase price.
    /// Returns 0.00 when the purchase price is zero. The division is
    /// carried at six decimals before the final two-decimal rounding.
    #[must_use]
    pub fn cap_rate_percent(&self) -> Decimal {
        if self.purchase.is_zero() {
            return money::zero();
        }
        let ratio = money::round_ratio(self.annual_noi() / self.purchase);
        money::to_money(ratio * Decimal::ONE_HUNDRED)
    }

    /// Equity: current market value minus total cost basis
    /// (purchase + rehab). May be negative.
    #[must_use]
    pub fn equity(&self) -> Decimal {
        money::to_money(self.current_value - (self.purchase + self.rehab))
    }
}

/// One-line summary rendering. Stored fields carry exactly two
/// fractional digits, so plain `Decimal` display gives the 2-decimal
/// output.
impl std::fmt::Display for Property {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "#{} {}, {} [{}] price=${} value=${} rent/mo=${} NOI/yr=${} cap={}%",
            self.id,
            self.address,
            self.city,
            self.status,
            self.purchase,
            self.current_value,
            self.rent_monthly,
            self.annual_noi(),
            self.cap_rate_percent(),
        )
    }
}
