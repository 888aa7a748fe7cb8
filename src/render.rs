use owo_colors::OwoColorize;

use crate::enrich::report::{FieldStatus, Report};

const LABEL_WIDTH: usize = 24;

pub fn print_banner() {
    println!(
        "{}",
        "Phone Number Global Inspector".bold().blue()
    );
}

/// Renders the report as a two-column table. Missing sections stay
/// visible: every unavailable field is printed dimmed with its reason
/// instead of being dropped.
pub fn print_report(report: &Report) {
    println!();
    println!("{}", "Phone Number Analysis Results".bold().cyan());

    row("E.164 Format", &report.number.e164);
    row("International Format", &report.number.international);
    row("National Format", non_empty(&report.number.national));

    match (&report.carrier, &report.status.carrier) {
        (Some(carrier), _) => {
            row("Number Type", carrier.number_type.label());
            row("Mobile Carrier", carrier.name.as_deref().unwrap_or("N/A"));
        }
        (None, status) => missing("Number Type", status),
    }

    match (&report.world, &report.status.world) {
        (Some(world), _) => {
            let country = match &report.number.region {
                Some(region) => format!("{} ({})", world.country, region),
                None => world.country.clone(),
            };
            row("Country", &country);
            row("Capital City", &world.capital);
            row("Currency", &world.currency);
            row("Continent / Region", &world.region_label);
            let borders = if world.borders.is_empty() {
                "None".to_string()
            } else {
                world.borders.join(", ")
            };
            row("Bordering Countries", &borders);
        }
        (None, status) => missing("Country", status),
    }

    match (&report.time, &report.status.time) {
        (Some(time), _) => {
            row("Timezone", &time.zone);
            row("Current Local Time", &time.formatted());
        }
        (None, status) => missing("Current Local Time", status),
    }

    match (&report.geo, &report.status.geo) {
        (Some(geo), _) => {
            row("Area Location", &geo.query);
            row("Latitude", &format!("{:.4}", geo.latitude));
            row("Longitude", &format!("{:.4}", geo.longitude));
            row("Google Maps Link", &geo.maps_link());
        }
        (None, status) => missing("Estimated Location", status),
    }

    row("WhatsApp Link", &report.whatsapp_link());
}

pub fn print_disclaimer() {
    println!(
        "{}",
        "Disclaimer: the map shows the geographical center of the area code, not a real-time location."
            .dimmed()
            .italic()
    );
}

fn row(label: &str, value: &str) {
    println!("  {} {}", format!("{:<1$}", label, LABEL_WIDTH).dimmed(), value);
}

fn missing(label: &str, status: &FieldStatus) {
    let reason = status.reason().unwrap_or("unavailable");
    println!(
        "  {} {}",
        format!("{:<1$}", label, LABEL_WIDTH).dimmed(),
        format!("unavailable ({})", reason).dimmed()
    );
}

fn non_empty(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}
