// ============================================================================
// Formatter Interface
// Seam for rendering money values outside the arithmetic core
// ============================================================================

use crate::domain::Money;

/// Renders a `Money` value for display.
///
/// Implementations consume only `Money::converted_amount` and the currency
/// code; locale-aware formatting belongs in an implementation outside this
/// crate.
pub trait MoneyFormatter: Send + Sync {
    fn format(&self, money: &Money) -> String;
}

/// Locale-neutral rendering: `"12.34 EUR"`, always with the currency's
/// default number of fraction digits.
///
/// Registration rejects currencies whose widest amount could not carry
/// that many digits, so the rescale never truncates.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl MoneyFormatter for PlainFormatter {
    fn format(&self, money: &Money) -> String {
        let digits = u32::from(money.currency().default_fraction_digits());
        let mut converted = money.converted_amount();
        converted.rescale(digits);
        format!("{} {}", converted, money.currency().code())
    }
}
