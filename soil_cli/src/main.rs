//! # Groundwork CLI Application
//!
//! Terminal front end for the topsoil estimating engine. It collects the
//! same raw strings the GUI form collects and hands them to the engine
//! unmodified, so empty or garbage input produces the same validation
//! errors on both surfaces.

use std::io::{self, BufRead, Write};

use soil_core::calculations::topsoil::{calculate, TopsoilInput};
use soil_core::units::{AreaUnit, DepthUnit};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_string()
}

/// Pick an area unit by list number; empty or unrecognized input keeps the default
fn prompt_area_unit() -> AreaUnit {
    println!("Area unit:");
    for (i, unit) in AreaUnit::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, unit);
    }

    let choice = prompt_line("Select [1]: ");
    match choice.parse::<usize>() {
        Ok(n) if (1..=AreaUnit::ALL.len()).contains(&n) => AreaUnit::ALL[n - 1],
        _ => AreaUnit::default(),
    }
}

/// Pick a depth unit by list number; empty or unrecognized input keeps the default
fn prompt_depth_unit() -> DepthUnit {
    println!("Depth unit:");
    for (i, unit) in DepthUnit::ALL.iter().enumerate() {
        println!("  {}. {}", i + 1, unit);
    }

    let choice = prompt_line("Select [1]: ");
    match choice.parse::<usize>() {
        Ok(n) if (1..=DepthUnit::ALL.len()).contains(&n) => DepthUnit::ALL[n - 1],
        _ => DepthUnit::default(),
    }
}

fn main() {
    println!("Groundwork CLI - Topsoil Calculator");
    println!("===================================");
    println!();

    let length = prompt_line("Length: ");
    let width = prompt_line("Width: ");
    let area_unit = prompt_area_unit();
    let depth = prompt_line("Depth: ");
    let depth_unit = prompt_depth_unit();

    let input = TopsoilInput {
        length,
        width,
        depth,
        area_unit,
        depth_unit,
    };

    println!();
    match calculate(&input) {
        Ok(result) => {
            println!("═══════════════════════════════════════");
            println!("  TOPSOIL ESTIMATE");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!(
                "  Footprint: {} x {} ({})",
                input.length, input.width, input.area_unit
            );
            println!("  Depth:     {} ({})", input.depth, input.depth_unit);
            println!();
            println!("Estimate:");
            println!("  Volume: {:.2} cubic yards", result.volume_cubic_yards);
            println!("  Bags:   {} (0.5 cu ft each)", result.bag_count);
            println!("  Weight: {:.2} tons", result.weight_tons);
            println!();
            println!("Note: actual amounts vary with moisture and composition.");

            println!();
            println!("JSON Output (for machine use):");
            if let Ok(json) = serde_json::to_string_pretty(&result) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            std::process::exit(1);
        }
    }
}
