// ============================================================================
// Money Library
// Exact monetary arithmetic over integer minor units with fair allocation
// ============================================================================

//! # Money
//!
//! Immutable monetary values stored as whole numbers of a currency's
//! smallest unit, with checked arithmetic and allocation that never loses a
//! cent.
//!
//! ## Features
//!
//! - **Integer minor units**: amounts are `i64`, every overflow is an error
//! - **Explicit rounding** with four midpoint modes (half up, down, even, odd)
//! - **Fair allocation**: even and ratio splits whose shares sum exactly
//! - **Thread-safe currency registry** seeded with ISO 4217, extensible at runtime
//! - **Currency pairs** for fixed-quote conversion
//!
//! ## Example
//!
//! ```rust
//! use money::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let eur = Currency::new("eur").unwrap();
//! let total = Money::from_decimal_str("100.00", eur.clone()).unwrap();
//! assert_eq!(total.amount(), 10000);
//!
//! // Split a bill three ways; the first share takes the extra cent
//! let shares = total.allocate_to_targets(3).unwrap();
//! let amounts: Vec<i64> = shares.iter().map(Money::amount).collect();
//! assert_eq!(amounts, vec![3334, 3333, 3333]);
//!
//! // Gross price including 21% VAT
//! let vat = Money::new(10000, eur)
//!     .extract_percentage(Decimal::from(21), RoundingMode::HalfUp)
//!     .unwrap();
//! assert_eq!(vat.percentage.amount(), 1736);
//! assert_eq!(vat.subtotal.amount(), 8264);
//!
//! let pair: CurrencyPair = "EUR/USD 1.25".parse().unwrap();
//! let usd = pair.convert_to_counter(&Money::from_code(1000, "EUR").unwrap()).unwrap();
//! assert_eq!(usd.to_string(), "12.50 USD");
//! ```

pub mod allocation;
pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod registry;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::allocation::{EvenSplit, RatioSplit};
    pub use crate::domain::{
        Currency, CurrencyMetadata, CurrencyPair, Money, MoneySnapshot, PercentageExtraction,
        RegistryConfig, SeedData,
    };
    pub use crate::interfaces::{AllocationStrategy, MoneyFormatter, PlainFormatter};
    pub use crate::numeric::{MoneyError, MoneyResult, RoundingMode};
    pub use crate::registry::{create_from_config, CurrencyRegistry, CurrencyRegistryBuilder};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use rust_decimal_macros::dec;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_end_to_end_invoice_split() {
        let eur = Currency::new("EUR").unwrap();

        // Net line items, then 21% VAT on top
        let net = Money::from_decimal_str("49.99", eur.clone())
            .unwrap()
            .add(&Money::from_decimal_str("50.01", eur.clone()).unwrap())
            .unwrap();
        assert_eq!(net.amount(), 10000);

        let gross = net.multiply(dec!(1.21), RoundingMode::HalfUp).unwrap();
        assert_eq!(gross.amount(), 12100);

        let vat = gross
            .extract_percentage(dec!(21), RoundingMode::HalfUp)
            .unwrap();
        assert_eq!(vat.subtotal, net);

        // Three partners split 50/30/20
        let shares = gross
            .allocate_by_ratios(&[dec!(50), dec!(30), dec!(20)])
            .unwrap();
        let amounts: Vec<i64> = shares.iter().map(Money::amount).collect();
        assert_eq!(amounts, vec![6050, 3630, 2420]);

        let total = shares
            .iter()
            .try_fold(Money::zero(eur), |acc, share| acc.add(share))
            .unwrap();
        assert_eq!(total, gross);
    }

    #[test]
    fn test_custom_registry_with_conversion() {
        let registry = CurrencyRegistryBuilder::new()
            .with_currency("BTC", "Bitcoin", 999, 8, 100_000_000)
            .build()
            .unwrap();

        let pair = CurrencyPair::parse_with("BTC/EUR 50000", &registry).unwrap();
        let btc = Money::new(1_000_000, registry.currency("btc").unwrap());
        let eur = pair.convert_to_counter(&btc).unwrap();

        assert_eq!(eur.amount(), 50_000_000_000);
        assert_eq!(pair.convert_to_base(&eur).unwrap(), btc);
        assert_eq!(btc.to_string(), "0.01000000 BTC");
    }

    #[test]
    fn test_registry_is_shared_across_threads() {
        let registry = Arc::new(CurrencyRegistry::with_iso4217());

        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                thread::spawn(move || {
                    let code = format!("XQ{}", (b'A' + i as u8) as char);
                    registry
                        .register(CurrencyMetadata::new(&code, "Thread Local", 0, 2, 100))
                        .unwrap();
                    Money::new(100, registry.currency(&code).unwrap())
                        .allocate_to_targets(3)
                        .unwrap()
                })
            })
            .collect();

        for handle in handles {
            let shares = handle.join().unwrap();
            assert_eq!(shares.len(), 3);
        }
        assert!(registry.contains("XQA"));
        assert!(registry.contains("XQD"));
    }

    #[test]
    fn test_errors_do_not_mix_currencies() {
        let eur = Money::from_code(100, "EUR").unwrap();
        let usd = Money::from_code(100, "USD").unwrap();

        assert!(matches!(
            eur.add(&usd),
            Err(MoneyError::CurrencyMismatch { .. })
        ));
        assert_eq!(eur.partial_cmp(&usd), None);
    }
}
