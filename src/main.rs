//! rollcost - CLI tool to reprice fabrication work orders.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use rollcost_core::generator::{format_currency, format_fixed, trim_number};
use rollcost_core::parser::parse_number;
use rollcost_core::pricing::order_totals;
use rollcost_core::transform::{prepare_for_save, recompute_order};
use rollcost_core::{
    load_settings_or_empty, load_work_order, validate_order, Derived, NoPitch, OrderTotals, Part,
    ShopSettings, ValidationResult,
};

/// Recompute roll geometry, seam lengths and prices for a work order.
#[derive(Parser, Debug)]
#[command(name = "rollcost")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Work order JSON (an order object or a bare array of parts)
    #[arg(short, long)]
    input: PathBuf,

    /// Shop settings JSON with weld rates and material grades
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Write the repriced work order to this file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only report this part number
    #[arg(short, long)]
    part: Option<i64>,

    /// Override the order's sales-tax rate (e.g. 0.0825)
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Override the order's trucking charge
    #[arg(long)]
    trucking: Option<f64>,

    /// Validate only, don't reprice
    #[arg(long)]
    validate: bool,

    /// Output debug information as JSON
    #[arg(long)]
    debug: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Everything `--debug` prints.
#[derive(Serialize)]
struct Report<'a> {
    parts: Vec<PartReport<'a>>,
    totals: OrderTotals,
    validation: &'a ValidationResult,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PartReport<'a> {
    part_number: Option<i64>,
    part_type: &'static str,
    part_total: &'a str,
    derived: &'a Derived,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Processing: {}", args.input.display());

    let mut order = load_work_order(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!("Loaded {} part(s)", order.parts.len());

    if let Some(rate) = args.tax_rate {
        if !(0.0..1.0).contains(&rate) {
            warn!("Tax rate {} looks like a percentage; expected a fraction", rate);
        }
        order.tax_rate = trim_number(rate);
    }
    if let Some(trucking) = args.trucking {
        order.trucking_cost = format_fixed(trucking, 2);
    }

    let settings = match &args.settings {
        Some(path) => load_settings_or_empty(path),
        None => ShopSettings::empty(),
    };

    // Validate
    let validation = validate_order(&order);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    // Validate-only mode
    if args.validate {
        if !validation.passed {
            anyhow::bail!("Validation failed");
        }
        info!("Validation passed");
        return Ok(());
    }

    let derived = recompute_order(&mut order, &settings, &NoPitch);
    for part in &mut order.parts {
        prepare_for_save(part);
    }
    let totals = order_totals(&order);

    let selected: Vec<(&Part, &Derived)> = order
        .parts
        .iter()
        .zip(&derived)
        .filter(|(p, _)| args.part.is_none() || p.part_number == args.part)
        .collect();
    if let Some(number) = args.part {
        if selected.is_empty() {
            anyhow::bail!("Part #{} not found in {}", number, args.input.display());
        }
    }

    // Debug output
    if args.debug {
        let report = Report {
            parts: selected
                .iter()
                .map(|&(p, d)| PartReport {
                    part_number: p.part_number,
                    part_type: p.part_type.key(),
                    part_total: &p.part_total,
                    derived: d,
                })
                .collect(),
            totals,
            validation: &validation,
        };
        let json = serde_json::to_string_pretty(&report)?;
        println!("{}", json);
        return Ok(());
    }

    print_summary(&selected, &totals);

    // Write output
    if let Some(output_path) = &args.output {
        if !validation.passed {
            anyhow::bail!("Validation failed; not writing {}", output_path.display());
        }
        let json = serde_json::to_string_pretty(&order)?;
        std::fs::write(output_path, json)
            .with_context(|| format!("Failed to write {}", output_path.display()))?;
        info!("Wrote: {}", output_path.display());
    }

    Ok(())
}

fn print_summary(parts: &[(&Part, &Derived)], totals: &OrderTotals) {
    for (part, derived) in parts {
        println!(
            "{:<9} {:<13} {:>12}  {}",
            part.number_label(),
            part.part_type.key(),
            format_currency(parse_number(&part.part_total)),
            part.material_description
        );
        if let Derived::Part(pricing) = derived {
            if let Some(geometry) = &pricing.geometry {
                println!(
                    "{:<9} developed length {}\" (centerline Ø{}\")",
                    "",
                    format_fixed(geometry.total_length, 2),
                    format_fixed(geometry.effective_diameter, 3)
                );
            }
        }
    }

    println!();
    println!("{:<24} {:>12}", "Parts subtotal", format_currency(totals.parts_subtotal));
    println!("{:<24} {:>12}", "Trucking", format_currency(totals.trucking));
    println!("{:<24} {:>12}", "Subtotal", format_currency(totals.subtotal));
    println!(
        "{:<24} {:>12}",
        format!("Tax ({}%)", format_fixed(totals.tax_rate * 100.0, 2)),
        format_currency(totals.tax_amount)
    );
    println!("{:<24} {:>12}", "Grand total", format_currency(totals.grand_total));
}
