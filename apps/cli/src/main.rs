// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Indoor-Nav CLI: route queries over a campus map file.
//!
//! Usage:
//!   indoor-nav <campus.json | floors-dir> <origin> <target> [--elevator] [--json] [--no-refine]
//!
//! `origin` and `target` are room ids or text containing a room code
//! such as `"Lab 1.14"`.

mod config;
mod types;

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use indoor_nav_core::{Campus, RoomKey};
use indoor_nav_geometry::{polyline_length, ArrowCap};
use indoor_nav_routing::{
    refine_route, BuildingPathfinder, RefineOptions, RefinedLeg, TransitionMode,
};

use config::Config;
use types::RouteResponse;

struct Args {
    campus_path: String,
    origin: String,
    target: String,
    elevator: bool,
    json: bool,
    refine: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 4 || args[1] == "--help" || args[1] == "-h" {
        print_usage();
        return ExitCode::FAILURE;
    }

    match parse_args(&args).and_then(run) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(2),
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: &[String]) -> Result<Args> {
    let mut parsed = Args {
        campus_path: args[1].clone(),
        origin: args[2].clone(),
        target: args[3].clone(),
        elevator: false,
        json: false,
        refine: true,
    };
    for arg in &args[4..] {
        match arg.as_str() {
            "--elevator" => parsed.elevator = true,
            "--json" => parsed.json = true,
            "--no-refine" => parsed.refine = false,
            other => bail!("unknown option: {other}"),
        }
    }
    Ok(parsed)
}

/// Run one query; `Ok(false)` means no route exists.
fn run(args: Args) -> Result<bool> {
    let config = Config::from_env();

    let campus = load_campus(Path::new(&args.campus_path))
        .with_context(|| format!("failed to load campus from {}", args.campus_path))?;

    let issues = campus.validate();
    for issue in &issues {
        tracing::warn!(%issue, "Map reference problem");
    }
    tracing::info!(
        floors = campus.floor_count(),
        rooms = campus.room_count(),
        issues = issues.len(),
        "Campus loaded"
    );

    let origin = resolve_room(&campus, &args.origin)?;
    let target = resolve_room(&campus, &args.target)?;
    let mode = TransitionMode::from(args.elevator);

    let finder = BuildingPathfinder::with_config(&campus, config.building_search());
    let route = match finder.try_find_route(origin, target, mode) {
        Ok(route) => route,
        Err(err) => {
            tracing::info!(error = %err, "Search finished without a route");
            println!("No route found.");
            return Ok(false);
        }
    };

    let legs: Vec<RefinedLeg> = if args.refine {
        let options = RefineOptions {
            search: config.room_search(),
            arrow: Some(ArrowCap::default()),
        };
        refine_route(&campus, &route, &options)
    } else {
        Vec::new()
    };

    if args.json {
        let response = RouteResponse::new(&campus, &route, args.elevator, &legs);
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", route.summary(&campus));
        for (i, step) in route.steps().iter().enumerate() {
            println!();
            print!("{}", step.instruction);
            if let Some(path) = legs.iter().find(|leg| leg.step == i).map(|leg| &leg.path) {
                match path {
                    Some(points) => println!(
                        "   walk {:.2}m along {} points",
                        polyline_length(points),
                        points.len()
                    ),
                    None => println!("   no walking line for this room"),
                }
            }
        }
    }
    Ok(true)
}

/// A campus file, or a directory holding one JSON file per floor.
///
/// Floor files are read in file-name order.
fn load_campus(path: &Path) -> Result<Campus> {
    if !path.is_dir() {
        let json =
            fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
        return Ok(Campus::from_json(&json)?);
    }

    let mut files = fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<std::io::Result<Vec<PathBuf>>>()?;
    files.retain(|p| p.extension().is_some_and(|ext| ext == "json"));
    files.sort();
    if files.is_empty() {
        bail!("no floor files in {}", path.display());
    }

    let documents = files
        .iter()
        .map(|file| {
            fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
        })
        .collect::<Result<Vec<String>>>()?;
    Ok(Campus::from_floor_documents(documents.iter().map(String::as_str))?)
}

/// Look up a room by id, then by a room code contained in `text`.
fn resolve_room(campus: &Campus, text: &str) -> Result<RoomKey> {
    match campus
        .room_key(text)
        .or_else(|| campus.find_room_by_partial_code(text))
    {
        Some(key) => Ok(key),
        None => bail!("no room matches \"{text}\""),
    }
}

fn print_usage() {
    eprintln!("Usage: indoor-nav <campus.json> <origin> <target> [options]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  <campus.json>       Campus file, or a directory with one JSON file per floor");
    eprintln!("  <origin>, <target>  Room id, or text containing a room code (e.g. \"Lab 1.14\")");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --elevator   Change floors by elevator only (default: stairs only)");
    eprintln!("  --json       Print the route as JSON");
    eprintln!("  --no-refine  Skip the per-room walking lines");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  INDOOR_NAV_CELL_SIZE            Room grid cell size in meters (0.8)");
    eprintln!("  INDOOR_NAV_MAX_CLEARANCE        Wall distance without penalty in meters (2.0)");
    eprintln!("  INDOOR_NAV_PENALTY_FACTOR       Clearance penalty scale (1.0)");
    eprintln!("  INDOOR_NAV_MAX_EXPANSIONS       Building search expansion cap (2000000)");
    eprintln!("  INDOOR_NAV_ROOM_MAX_EXPANSIONS  Room search expansion cap (200000)");
    eprintln!("  RUST_LOG                        Log filter (info)");
}
