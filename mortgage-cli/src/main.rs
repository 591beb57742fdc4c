mod format;
mod logging;

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;

use mortgage_core::{PaymentFrequency, Quote, QuoteEngine};

use crate::format::{format_currency, format_percent, parse_decimal};

/// Compute a mortgage affordability quote.
///
/// Starts from the stock scenario (price 200000, minimum down payment,
/// rate 4.64%, 25 years, monthly payments) and applies any flags you pass
/// as edits before printing the derived figures. An insufficient down
/// payment is reported as a warning next to the figures, not rejected.
#[derive(Parser, Debug)]
#[command(name = "mortgage-quote")]
#[command(version, about, long_about = None)]
struct Args {
    /// Purchase price in dollars
    #[arg(short, long, value_parser = parse_decimal)]
    price: Option<Decimal>,

    /// Down payment in dollars (defaults to the legal minimum for the price)
    #[arg(short, long, value_parser = parse_decimal, conflicts_with = "down_payment_percent")]
    down_payment: Option<Decimal>,

    /// Down payment as a percentage of the price
    #[arg(short = 'P', long, value_parser = parse_decimal)]
    down_payment_percent: Option<Decimal>,

    /// Annual mortgage rate in percent
    #[arg(short, long, value_parser = parse_decimal)]
    rate: Option<Decimal>,

    /// Amortization period in years
    #[arg(short, long)]
    years: Option<u32>,

    /// Payment frequency: Weekly, Bi-weekly, Monthly, Semi-monthly,
    /// Quarterly or Annually
    #[arg(short, long)]
    frequency: Option<PaymentFrequency>,
}

fn main() -> Result<()> {
    logging::init()?;
    let args = Args::parse();

    let mut engine = QuoteEngine::new(args.price);

    if let Some(amount) = args.down_payment {
        engine.set_down_payment_amount(amount);
    }
    if let Some(percent) = args.down_payment_percent {
        engine.set_down_payment_percent(percent);
    }
    if let Some(rate) = args.rate {
        engine.set_rate(rate);
    }
    if let Some(years) = args.years {
        engine.set_amortization_years(years);
    }
    if let Some(frequency) = args.frequency {
        engine.set_payment_frequency(frequency);
    }

    print_quote(engine.quote());

    Ok(())
}

fn print_quote(quote: &Quote) {
    println!("{:<20}{}", "Price:", format_currency(quote.price));
    println!(
        "{:<20}{} ({}%)",
        "Down payment:",
        format_currency(quote.down_payment_amount),
        format_percent(quote.down_payment_percent)
    );
    println!(
        "{:<20}{}",
        "CMHC insurance:",
        format_currency(quote.insurance_premium)
    );
    println!(
        "{:<20}{}",
        "Total mortgage:",
        format_currency(quote.total_mortgage)
    );
    println!("{:<20}{}%", "Mortgage rate:", quote.rate);
    println!("{:<20}{} years", "Amortization:", quote.amortization_years);
    println!("{:<20}{}", "Payment frequency:", quote.payment_frequency);
    println!();
    println!(
        "Expected {} payment: {}",
        quote.payment_frequency,
        format_currency(quote.periodic_payment)
    );

    if let Some(error) = &quote.down_payment_error {
        println!();
        println!("Warning: {error}");
    }

    println!();
    println!(
        "The mortgage calculator is not accurate and is for illustrative and \
         general information purposes only. It is not intended to provide \
         specific financial or other advice, and should not be relied upon \
         in that regard."
    );
}
