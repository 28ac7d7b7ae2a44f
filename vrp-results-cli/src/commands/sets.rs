#[cfg(test)]
#[path = "../../tests/unit/commands/sets_test.rs"]
mod sets_test;

use super::*;
use vrp_results_core::reporting::write_benchmark_report;
use vrp_results_core::sets::{compare, intersect_all, progress, union_all};

const FILES_ARG_NAME: &str = "FILES";
const RAW_ARG_NAME: &str = "raw";

pub fn get_compare_app() -> Command {
    Command::new("compare").about("Compares two result list files").arg(
        Arg::new(FILES_ARG_NAME)
            .help("Two files with one result name per line")
            .num_args(2)
            .required(true)
            .index(1),
    )
}

pub fn run_compare(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let files = get_string_values(matches, FILES_ARG_NAME);
    let [first_path, second_path] = files.as_slice() else {
        return Err("compare takes exactly two files".into());
    };

    let first = read_as_set(Path::new(first_path))?;
    let second = read_as_set(Path::new(second_path))?;
    let report = compare(&first, &second);

    let mut writer = out_writer_func(None);
    writeln!(writer, "Only in {first_path}:")?;
    write_benchmark_report(&mut writer, &report.only_in_first)?;
    writeln!(writer, "Only in {second_path}:")?;
    write_benchmark_report(&mut writer, &report.only_in_second)?;
    writeln!(writer, "In both:")?;
    write_benchmark_report(&mut writer, &report.in_both)?;

    Ok(())
}

pub fn get_union_app() -> Command {
    Command::new("union")
        .about("Displays the union of result list files, grouped by benchmark family")
        .arg(
            Arg::new(FILES_ARG_NAME)
                .help("Files with one result name per line")
                .num_args(1..)
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(RAW_ARG_NAME)
                .help("Prints plain sorted lines instead of the grouped report")
                .long(RAW_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_union(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let sets = read_line_sets(&get_string_values(matches, FILES_ARG_NAME))?;
    let combined = union_all(&sets);

    let mut writer = out_writer_func(None);
    if matches.get_flag(RAW_ARG_NAME) {
        for name in &combined {
            writeln!(writer, "{name}")?;
        }
    } else {
        write_benchmark_report(&mut writer, &combined)?;
    }

    Ok(())
}

pub fn get_intersection_app() -> Command {
    Command::new("intersection")
        .about("Displays the intersection of result list files, grouped by benchmark family")
        .arg(
            Arg::new(FILES_ARG_NAME)
                .help("Files with one result name per line")
                .num_args(1..)
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new(RAW_ARG_NAME)
                .help("Prints plain sorted lines instead of the grouped report")
                .long(RAW_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_intersection(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let sets = read_line_sets(&get_string_values(matches, FILES_ARG_NAME))?;
    let repeating = intersect_all(&sets);

    let mut writer = out_writer_func(None);
    if matches.get_flag(RAW_ARG_NAME) {
        for name in &repeating {
            writeln!(writer, "{name}")?;
        }
    } else {
        writeln!(writer, "The elements repeating all over again are:")?;
        write_benchmark_report(&mut writer, &repeating)?;
    }

    Ok(())
}

pub fn get_progress_app() -> Command {
    Command::new("progress")
        .about("Displays, file by file in argument order, the results not seen in any earlier file")
        .arg(
            Arg::new(FILES_ARG_NAME)
                .help("Files with one result name per line")
                .num_args(1..)
                .required(true)
                .index(1),
        )
}

pub fn run_progress(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let files = get_string_values(matches, FILES_ARG_NAME);
    let sets = read_line_sets(&files)?;
    let sources: Vec<_> = files.into_iter().zip(sets).collect();

    let mut writer = out_writer_func(None);
    for step in progress(&sources) {
        if step.novel.is_empty() {
            writeln!(writer, "\n ... Nothing new in {}.", step.source)?;
        } else {
            writeln!(writer, "\n *** New things found in {}:", step.source)?;
            write_benchmark_report(&mut writer, &step.novel)?;
        }
    }

    Ok(())
}
