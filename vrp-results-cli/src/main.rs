//! A command line interface to the VRPTW benchmark results organizer.

mod commands;

use crate::commands::analyze::{get_analyze_app, run_analyze};
use crate::commands::create_write_buffer;
use crate::commands::missing::{get_missing_app, run_missing};
use crate::commands::organize::{get_organize_app, run_organize_command};
use crate::commands::sets::{
    get_compare_app, get_intersection_app, get_progress_app, get_union_app, run_compare,
    run_intersection, run_progress, run_union,
};
use clap::Command;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let mut app = Command::new("VRPTW Benchmark Results")
        .version("0.1")
        .about("Organizes, classifies and compares VRPTW benchmark solver results")
        .subcommand(get_compare_app())
        .subcommand(get_union_app())
        .subcommand(get_intersection_app())
        .subcommand(get_progress_app())
        .subcommand(get_missing_app())
        .subcommand(get_organize_app())
        .subcommand(get_analyze_app());

    let matches = app.clone().get_matches();

    let result = match matches.subcommand() {
        Some(("compare", matches)) => run_compare(matches, create_write_buffer),
        Some(("union", matches)) => run_union(matches, create_write_buffer),
        Some(("intersection", matches)) => run_intersection(matches, create_write_buffer),
        Some(("progress", matches)) => run_progress(matches, create_write_buffer),
        Some(("missing", matches)) => run_missing(matches, create_write_buffer),
        Some(("organize", matches)) => run_organize_command(matches, create_write_buffer),
        Some(("analyze", matches)) => run_analyze(matches, create_write_buffer),
        _ => {
            let _ = app.print_help();
            process::exit(1);
        }
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
