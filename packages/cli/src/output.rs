//! Human-readable report formatting.

use hazard_map_hazard_models::{Coordinate, Hazard};
use hazard_map_reference::{FaultCatalogue, RegionTable};
use hazard_map_risk::{Assessment, NearestFault};

/// Prints a full assessment report.
pub fn print_assessment(coordinate: Coordinate, assessment: &Assessment<'_>) {
    let risk = &assessment.risk;

    println!(
        "Location: {}, {}",
        coordinate.latitude, coordinate.longitude
    );
    match &risk.region {
        Some(region) => println!("Region:   {region} County"),
        None => println!("Region:   outside coverage area"),
    }
    println!();

    println!("{:<12} {:>5}  {:<7} SOURCE", "HAZARD", "SCORE", "LEVEL");
    println!("{}", "-".repeat(60));
    for hazard in Hazard::all() {
        let score = risk.score(*hazard);
        println!(
            "{:<12} {:>5.1}  {:<7} {}",
            hazard.to_string(),
            score.score(),
            score.level().to_string(),
            score.source()
        );
        for factor in score.factors() {
            println!("{:<12} - {factor}", "");
        }
    }
    println!();

    let loss = risk.loss_estimate;
    println!("10-year loss estimate (average home)");
    println!("  Unprotected:     ${}", loss.unprotected);
    println!("  With protection: ${}", loss.with_protection);
    println!("  Savings:         ${}", loss.savings());
    println!();

    if let Some(nearest) = &assessment.nearest_fault {
        print_nearest_fault(nearest);
        println!();
    }

    println!("Mitigation plan ({} actions)", assessment.plan.len());
    for (label, actions) in [
        ("Do today", &assessment.plan.immediate),
        ("This week", &assessment.plan.week),
        ("This month", &assessment.plan.month),
        ("This quarter", &assessment.plan.quarter),
    ] {
        if actions.is_empty() {
            continue;
        }
        println!("  {label}");
        for action in actions {
            println!(
                "    [{}] {} ({}, {} impact)",
                action.id,
                action.title,
                action.cost.label(),
                action.impact
            );
            if let Some(tip) = action.insurance_tip {
                println!("         Tip: {tip}");
            }
        }
    }
    println!();

    println!("Coverage gaps to review");
    for gap in &assessment.coverage_gaps {
        println!("  - {gap}");
    }
}

/// Prints the nearest fault summary.
pub fn print_nearest_fault(nearest: &NearestFault<'_>) {
    let fault = nearest.fault;
    println!(
        "Nearest fault: {} ({} miles, {})",
        fault.name(),
        nearest.distance_miles,
        fault.significance()
    );
    println!("  Slip rate:   {}", fault.slip_rate());
    println!("  Probability: {}", fault.probability());
    if let Some(last) = &fault.definition().last_major {
        println!("  Last major:  {last}");
    }
}

/// Prints the fault catalogue.
pub fn print_faults(faults: &FaultCatalogue) {
    println!(
        "{:<36} {:<9} {:<16} PROBABILITY",
        "NAME", "TIER", "SLIP RATE"
    );
    println!("{}", "-".repeat(90));
    for fault in faults.iter() {
        println!(
            "{:<36} {:<9} {:<16} {}",
            fault.name(),
            fault.significance().to_string(),
            fault.slip_rate(),
            fault.probability()
        );
    }
}

/// Prints the region statistics table.
pub fn print_regions(regions: &RegionTable) {
    println!(
        "{:<20} {:>8} {:>6} {:>10} {:>9}",
        "REGION", "WILDFIRE", "FLOOD", "EARTHQUAKE", "HURRICANE"
    );
    println!("{}", "-".repeat(57));
    for region in regions.iter() {
        println!(
            "{:<20} {:>8} {:>6} {:>10} {:>9}",
            region.name, region.wildfire, region.flood, region.earthquake, region.hurricane
        );
    }
}
