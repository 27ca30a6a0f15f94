//! Pricer CLI
//!
//! Non-interactive walkthrough of the pricing desk: resolves a live rate
//! (falling back to 2% when the lookup fails) and prices a demo scenario.

use tracing_subscriber::EnvFilter;

use vanilla_pricer::models::black_scholes;
use vanilla_pricer::prelude::*;

fn main() -> PricerResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let provider = RateProvider::new(&config)?;

    println!("Vanilla Pricer");
    println!("==============\n");

    // Demo scenario
    let spot = 11.82;
    let strike = 11.50;
    let days = 18.0;
    let vol = 0.30;

    println!("Fetching {} yield from FRED...", config.series_id);
    let quote = provider.resolve(false, "");

    match quote.source {
        RateSource::RemoteLookup => match quote.as_of {
            Some(date) => println!("Rate: {:.2}% (as of {})", quote.rate * 100.0, date),
            None => println!("Rate: {:.2}%", quote.rate * 100.0),
        },
        _ => {
            if let Some(condition) = &quote.condition {
                println!("{}", condition);
            }
        }
    }

    println!("\nScenario:");
    println!("  Spot: ${:.2}", spot);
    println!("  Strike: ${:.2}", strike);
    println!("  Time: {:.0} days", days);
    println!("  Rate: {:.2}%", quote.rate * 100.0);
    println!("  Vol: {:.1}%\n", vol * 100.0);

    let call = PricingInputs::new(OptionKind::Call, spot, strike, days, vol, quote.rate);
    let put = PricingInputs::new(OptionKind::Put, spot, strike, days, vol, quote.rate);

    let call_price = black_scholes::price(&call)?;
    let put_price = black_scholes::price(&put)?;

    println!("Option Prices:");
    println!("  Call: ${:.2}", call_price);
    println!("  Put: ${:.2}", put_price);

    let greeks = black_scholes::greeks(&call)?;
    println!("\nCall Greeks:");
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.6}", greeks.gamma);
    println!("  Theta: {:.4}", greeks.theta);
    println!("  Vega: {:.4}", greeks.vega);
    println!("  Rho: {:.4}", greeks.rho);

    Ok(())
}
