// ============================================================================
// Basic Usage Example
// ============================================================================

use money::prelude::*;
use rust_decimal::Decimal;

fn main() -> MoneyResult<()> {
    #[cfg(feature = "logging")]
    money::utils::init_logging(tracing::Level::DEBUG)?;

    println!("=== Money Example ===\n");

    let eur = Currency::new("EUR")?;
    println!(
        "Currency: {} ({}), numeric {}, {} fraction digits",
        eur.code(),
        eur.display_name(),
        eur.numeric_code(),
        eur.default_fraction_digits()
    );

    // Parse and add
    let price = Money::from_decimal_str("19.99", eur.clone())?;
    let shipping = Money::from_decimal_str("4.995", eur.clone())?;
    let total = price.add(&shipping)?;
    println!("\n{} + {} = {}", price, shipping, total);

    // Discount with each rounding mode
    println!("\nApplying a 15% discount:");
    for mode in RoundingMode::ALL {
        let discounted = total.multiply(Decimal::new(85, 2), mode)?;
        println!("  {:<10} {}", mode, discounted);
    }

    // VAT contained in a gross price
    let gross = Money::new(12100, eur.clone());
    let vat = gross.extract_percentage(Decimal::from(21), RoundingMode::HalfUp)?;
    println!(
        "\nGross {} contains {} VAT on a {} subtotal",
        gross, vat.percentage, vat.subtotal
    );

    // Fair splits
    println!("\nSplitting {} four ways:", total);
    for share in total.allocate_to_targets(4)? {
        println!("  {}", share);
    }

    println!("\nSplitting {} 70/20/10:", total);
    let ratios = [Decimal::from(70), Decimal::from(20), Decimal::from(10)];
    for share in total.allocate_by_ratios(&ratios)? {
        println!("  {}", share);
    }

    // Conversion
    let pair: CurrencyPair = "EUR/USD 1.0850".parse()?;
    let usd = pair.convert_to_counter(&total)?;
    println!("\n{} at {} is {}", total, pair, usd);
    println!("and back: {}", pair.convert_to_base(&usd)?);

    // Errors are values, never panics
    match total.add(&usd) {
        Err(e) => println!("\nMixing currencies fails: {}", e),
        Ok(sum) => println!("\nUnexpected sum: {}", sum),
    }

    // Custom currencies
    let registry = CurrencyRegistryBuilder::new()
        .with_currency("XPT", "Loyalty Points", 0, 0, 1)
        .build()?;
    let points = Money::new(1500, registry.currency("XPT")?);
    println!("\nCustom currency: {}", points);

    println!("\n=== Example Complete ===");
    Ok(())
}
