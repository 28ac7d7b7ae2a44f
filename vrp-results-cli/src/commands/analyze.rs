#[cfg(test)]
#[path = "../../tests/unit/commands/analyze_test.rs"]
mod analyze_test;

use super::*;
use serde::Serialize;
use std::path::PathBuf;
use vrp_results_cli::extensions::analyze::{
    run_distance_quality, run_excess_routes, run_route_quality,
};
use vrp_results_core::benchmark::{default_dataset_dir, load_best_known};

const DIRS_ARG_NAME: &str = "DIRS";
const DIR_ARG_NAME: &str = "DIR";
const BESTKNOWN_ARG_NAME: &str = "bestknown";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_analyze_app() -> Command {
    Command::new("analyze")
        .about("Analyzes scanned results against the best known reference dataset")
        .arg(
            Arg::new(BESTKNOWN_ARG_NAME)
                .help("Specifies the directory with best known summary files")
                .short('b')
                .long(BESTKNOWN_ARG_NAME)
                .global(true),
        )
        .subcommand(
            Command::new("excess-routes")
                .about("Histogram of excess routes over the best known counts")
                .arg(
                    Arg::new(DIRS_ARG_NAME)
                        .help("Directories to scan")
                        .num_args(1..)
                        .default_value(".")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("route-quality")
                .about("Groups instances by the route count quality of their best result")
                .arg(Arg::new(DIR_ARG_NAME).help("Directory to scan").default_value(".").index(1))
                .arg(out_result_arg()),
        )
        .subcommand(
            Command::new("distance-quality")
                .about("Groups instances by the distance quality of their best result")
                .arg(Arg::new(DIR_ARG_NAME).help("Directory to scan").default_value(".").index(1))
                .arg(out_result_arg()),
        )
}

pub fn run_analyze(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let dataset_dir = matches
        .get_one::<String>(BESTKNOWN_ARG_NAME)
        .map(PathBuf::from)
        .unwrap_or_else(default_dataset_dir);
    let best = load_best_known(&dataset_dir)?;
    let mut writer = out_writer_func(None);

    match matches.subcommand() {
        Some(("excess-routes", sub_matches)) => {
            let dirs: Vec<PathBuf> =
                get_string_values(sub_matches, DIRS_ARG_NAME).into_iter().map(PathBuf::from).collect();
            run_excess_routes(&dirs, &best, &mut writer)
        }
        Some(("route-quality", sub_matches)) => {
            let qualities = run_route_quality(&get_dir(sub_matches), &best, &mut writer)?;
            write_out_result(sub_matches, &qualities)
        }
        Some(("distance-quality", sub_matches)) => {
            let qualities = run_distance_quality(&get_dir(sub_matches), &best, &mut writer)?;
            write_out_result(sub_matches, &qualities)
        }
        _ => Err("no analysis was specified. Use -h to print help information".into()),
    }
}

fn out_result_arg() -> Arg {
    Arg::new(OUT_RESULT_ARG_NAME)
        .help("Specifies path to the file for the analysis result")
        .short('o')
        .long(OUT_RESULT_ARG_NAME)
}

fn get_dir(matches: &ArgMatches) -> PathBuf {
    matches.get_one::<String>(DIR_ARG_NAME).map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}

fn write_out_result<T: Serialize>(matches: &ArgMatches, result: &T) -> GenericResult<()> {
    if let Some(path) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        let file = create_file(path, "out result");
        serde_json::to_writer_pretty(BufWriter::new(file), result)
            .map_err(|err| format!("cannot write analysis result: {err}"))?;
    }

    Ok(())
}
