#[cfg(test)]
#[path = "../../tests/unit/commands/missing_test.rs"]
mod missing_test;

use super::*;
use vrp_results_core::benchmark::{homberger_names, solomon_names};
use vrp_results_core::classify::missing_against;
use vrp_results_core::reporting::format_grouped;
use vrp_results_core::sets::union_all;

const FILES_ARG_NAME: &str = "FILES";

pub fn get_missing_app() -> Command {
    Command::new("missing")
        .about("Lists benchmark instances missing from all the given result lists")
        .arg(
            Arg::new(FILES_ARG_NAME)
                .help("Files with one instance name per line")
                .num_args(1..)
                .required(true)
                .index(1),
        )
}

pub fn run_missing(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let sets = read_line_sets(&get_string_values(matches, FILES_ARG_NAME))?;
    let observed = union_all(&sets);
    let (missing_homberger, missing_solomon) = missing_against(&observed);

    let mut writer = out_writer_func(None);
    write_missing(&mut writer, "Missing Homberger tests:", &missing_homberger, homberger_names().len())?;
    write_missing(&mut writer, "Missing Solomon tests:", &missing_solomon, solomon_names().len())?;

    Ok(())
}

fn write_missing(
    writer: &mut dyn Write,
    title: &str,
    missing: &BTreeSet<String>,
    universe_size: usize,
) -> GenericResult<()> {
    writeln!(writer, "{title}")?;
    if missing.len() == universe_size {
        writeln!(writer, "(ALL {universe_size})")?;
    } else {
        writeln!(writer, "{}", format_grouped(missing))?;
    }

    Ok(())
}
