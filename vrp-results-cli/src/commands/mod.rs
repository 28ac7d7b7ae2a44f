use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod analyze;
pub mod missing;
pub mod organize;
pub mod sets;

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::Path;
use std::process;
use vrp_results_core::sets::read_as_set;
use vrp_results_core::utils::GenericResult;

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn create_file(path: &str, description: &str) -> File {
    File::create(path).unwrap_or_else(|err| {
        eprintln!("cannot create {description} file '{path}': '{err}'");
        process::exit(1);
    })
}

fn get_string_values(matches: &ArgMatches, name: &str) -> Vec<String> {
    matches.get_many::<String>(name).map(|values| values.cloned().collect()).unwrap_or_default()
}

fn read_line_sets(files: &[String]) -> GenericResult<Vec<BTreeSet<String>>> {
    files.iter().map(|file| read_as_set(Path::new(file))).collect()
}
