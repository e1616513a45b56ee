//! Command line front end: quotes a single shipment and prints the result.

use anyhow::Context;
use clap::{Parser, ValueEnum};
use freightquote::domain::entities::{Destination, Origin, QuoteRequest, Shipment, Stop};
use freightquote::domain::validation::{Assignable, Attributes, FieldValue};
use freightquote::domain::value_objects::BillTo;
use freightquote::{FreightQuote, Quote, Settings};
use serde_json::json;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "freightquote", version, about = "Freightquote rate quote CLI")]
struct Cli {
    #[arg(long, help = "Settings file (defaults to ./freightquote.toml when present)")]
    config: Option<PathBuf>,
    #[arg(long, help = "Use the published test account")]
    test: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,

    #[arg(long, help = "Pickup zip code")]
    origin: String,
    #[arg(long = "stop", help = "Intermediate stop zip code (repeatable)")]
    stops: Vec<String>,
    #[arg(long, help = "Delivery zip code")]
    destination: String,
    #[arg(long, value_enum)]
    bill_to: Option<BillToArg>,

    #[arg(long, help = "Deliver to a loading dock")]
    loading_dock: bool,
    #[arg(long, help = "Deliver to a residence")]
    residence: bool,
    #[arg(long, help = "Deliver to a construction site")]
    construction_site: bool,
    #[arg(long, help = "Deliver inside")]
    inside: bool,
    #[arg(long, help = "Lift gate required at delivery")]
    lift_gate: bool,

    #[arg(long, help = "Weight in pounds")]
    weight: i64,
    #[arg(long = "class", help = "Freight class")]
    weight_class: f64,
    #[arg(long, default_value = "PALLETS")]
    package_type: String,
    #[arg(long, help = "Product description")]
    description: String,
    #[arg(long, default_value_t = 1)]
    pieces: i64,
    #[arg(long)]
    length: Option<i64>,
    #[arg(long)]
    width: Option<i64>,
    #[arg(long)]
    height: Option<i64>,
    #[arg(long)]
    nmfc: Option<String>,
    #[arg(long)]
    hazardous: bool,
    #[arg(long)]
    stackable: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum BillToArg {
    Shipper,
    Receiver,
    Site,
}

impl From<BillToArg> for BillTo {
    fn from(value: BillToArg) -> Self {
        match value {
            BillToArg::Shipper => Self::Shipper,
            BillToArg::Receiver => Self::Receiver,
            BillToArg::Site => Self::Site,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut settings =
        Settings::load_from(cli.config.as_deref()).context("failed to load settings")?;
    settings.test |= cli.test;
    tracing::info!(api_url = %settings.api_url, test = settings.test, "settings loaded");

    let request = build_request(&cli)?;
    let mut client = FreightQuote::from_settings(&settings)?;
    let quote = client.quote(request).context("quote request failed")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary(quote))?);
    } else {
        print_quote(quote);
    }
    Ok(())
}

fn build_request(cli: &Cli) -> anyhow::Result<QuoteRequest> {
    let shipment = Shipment::from_attributes(
        Attributes::new()
            .with("weight", cli.weight)
            .with("weight_class", class_value(cli.weight_class))
            .with("length", cli.length)
            .with("width", cli.width)
            .with("height", cli.height)
            .with("nmfc", cli.nmfc.clone())
            .with("product_description", cli.description.as_str())
            .with("hazardous", cli.hazardous)
            .with("package_type", cli.package_type.as_str())
            .with("pieces", cli.pieces)
            .with("stackable", cli.stackable),
    )?;

    let destination = Destination::new(cli.destination.as_str()).with_flags(
        cli.loading_dock,
        cli.residence,
        cli.construction_site,
        cli.inside,
        cli.lift_gate,
    );

    let mut request = QuoteRequest::new()
        .with_origin(Origin::new(cli.origin.as_str()))
        .with_destination(destination)
        .with_shipment(shipment)
        .with_service_blind(false)
        .with_service_packaged(false);
    for zip in &cli.stops {
        request = request.with_stop(Stop::new(zip.as_str()));
    }
    if let Some(bill_to) = cli.bill_to {
        request = request.with_bill_to(bill_to.into());
    }
    Ok(request)
}

/// Whole-number classes go out as integers (`50`, not `50.0`).
fn class_value(class: f64) -> FieldValue {
    if class.is_finite() && class.fract() == 0.0 {
        FieldValue::Integer(class as i64)
    } else {
        FieldValue::Float(class)
    }
}

fn summary(quote: &Quote) -> serde_json::Value {
    let errors: serde_json::Map<String, serde_json::Value> = quote
        .errors()
        .iter()
        .map(|(field, messages)| (field.to_string(), json!(messages)))
        .collect();
    json!({
        "success": quote.is_success(),
        "quote_id": quote.quote_id(),
        "errors": errors,
        "carriers": quote.carriers(),
        "cheapest": quote.cheapest_carrier().map(|carrier| carrier.option_id()),
    })
}

fn print_quote(quote: &Quote) {
    if !quote.is_success() {
        for message in quote.errors().full_messages() {
            println!("error: {message}");
        }
        return;
    }

    println!("quote {}", quote.quote_id().unwrap_or("-"));
    let cheapest = quote.cheapest_carrier().map(|carrier| carrier.option_id());
    for carrier in quote.carriers() {
        let marker = if Some(carrier.option_id()) == cheapest { "*" } else { " " };
        println!(
            "{marker} {:>3} {:<40} {:<5} {:>10} {:>3}d",
            carrier.option_id(),
            carrier.name(),
            carrier.scac(),
            carrier.rate(),
            carrier.transit()
        );
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use freightquote::infrastructure::xml::render_request;

    fn cli(class: &str) -> Cli {
        Cli::try_parse_from([
            "freightquote",
            "--origin",
            "46202",
            "--destination",
            "95014",
            "--residence",
            "--weight",
            "150",
            "--class",
            class,
            "--description",
            "hardwood flooring",
        ])
        .unwrap()
    }

    #[test]
    fn whole_class_is_sent_as_integer() {
        let request = build_request(&cli("50")).unwrap();
        let shipment = &request.shipments()[0];
        assert_eq!(shipment.weight_class(), &FieldValue::Integer(50));

        let xml = render_request(&request).unwrap();
        assert!(xml.contains("<class>50</class>"));
        assert!(!xml.contains("50.0"));
    }

    #[test]
    fn fractional_class_is_kept() {
        let request = build_request(&cli("77.5")).unwrap();
        assert_eq!(
            request.shipments()[0].weight_class(),
            &FieldValue::Float(77.5)
        );
    }
}
