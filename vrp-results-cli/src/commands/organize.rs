#[cfg(test)]
#[path = "../../tests/unit/commands/organize_test.rs"]
mod organize_test;

use super::*;
use std::path::PathBuf;
use vrp_results_cli::extensions::organize::run_organize;

const DIR_ARG_NAME: &str = "dir";
const YES_ARG_NAME: &str = "yes";
const OUT_RESULT_ARG_NAME: &str = "out-result";

pub fn get_organize_app() -> Command {
    Command::new("organize")
        .about("Promotes best results, reconciles the manifest and classifies instances")
        .arg(
            Arg::new(DIR_ARG_NAME)
                .help("Working directory with result files")
                .short('d')
                .long(DIR_ARG_NAME)
                .default_value("."),
        )
        .arg(
            Arg::new(YES_ARG_NAME)
                .help("Assumes an affirmative answer for the medium quality deletion prompt")
                .short('y')
                .long(YES_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for the classification result")
                .short('o')
                .long(OUT_RESULT_ARG_NAME),
        )
}

pub fn run_organize_command(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> GenericResult<()> {
    let dir = matches
        .get_one::<String>(DIR_ARG_NAME)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let confirm: Box<dyn FnOnce() -> bool> =
        if matches.get_flag(YES_ARG_NAME) { Box::new(|| true) } else { Box::new(confirm_on_stdin) };

    let mut writer = out_writer_func(None);
    let classification = run_organize(&dir, &mut writer, confirm)?;

    if let Some(path) = matches.get_one::<String>(OUT_RESULT_ARG_NAME) {
        let file = create_file(path, "out result");
        serde_json::to_writer_pretty(BufWriter::new(file), &classification)
            .map_err(|err| format!("cannot write classification result: {err}"))?;
    }

    writer.flush()?;
    Ok(())
}

fn confirm_on_stdin() -> bool {
    print!("Delete medium solutions (y/N)? ");
    let _ = stdout().flush();

    let mut answer = String::new();
    std::io::stdin()
        .read_line(&mut answer)
        .map(|_| answer.trim().eq_ignore_ascii_case("y"))
        .unwrap_or(false)
}
