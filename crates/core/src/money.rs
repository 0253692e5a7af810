use rust_decimal::{Decimal, RoundingStrategy};

/// Scale (fractional digits) of every stored monetary value.
pub const MONEY_SCALE: u32 = 2;

/// Intermediate scale for the cap-rate division, applied before the
/// percentage multiply.
pub const RATIO_SCALE: u32 = 6;

/// Round half-up (midpoint away from zero) to money scale and pin the
/// result so it always carries exactly two fractional digits.
///
/// Applied on every assignment and every derived arithmetic result, so
/// stored and displayed values never drift from the 2-decimal contract.
#[must_use]
pub fn to_money(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(MONEY_SCALE);
    rounded
}

/// Zero at money scale (renders as `0.00`).
#[must_use]
pub fn zero() -> Decimal {
    to_money(Decimal::ZERO)
}

/// Round a ratio (e.g. NOI / purchase) half-up to six decimals.
#[must_use]
pub fn round_ratio(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
