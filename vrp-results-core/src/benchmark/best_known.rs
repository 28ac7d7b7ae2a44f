#[cfg(test)]
#[path = "../../tests/unit/benchmark/best_known_test.rs"]
mod best_known_test;

use crate::naming::InstanceName;
use crate::utils::{Float, GenericResult};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Best known `(route count, total distance)` per instance.
pub type BestKnown = BTreeMap<InstanceName, (usize, Float)>;

/// Returns the directory with the bundled best known reference dataset.
pub fn default_dataset_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("bestknown")
}

/// Loads best known results from every `sum*` file under the given directory. Entries from
/// later files override earlier ones. A malformed summary line aborts the whole load.
pub fn load_best_known(dir: &Path) -> GenericResult<BestKnown> {
    let pattern = dir.join("sum*");
    let pattern =
        pattern.to_str().ok_or_else(|| format!("non utf-8 dataset path: '{}'", dir.display()))?;

    let mut data = BestKnown::default();
    for entry in glob::glob(pattern)? {
        read_summary(&entry?, &mut data)?;
    }

    Ok(data)
}

/// Looks up the best known result for the given instance. A missing entry is a fatal failure:
/// there is no reasonable default for an unknown best.
pub fn best_known_of(best: &BestKnown, instance: &str) -> GenericResult<(usize, Float)> {
    best.get(instance)
        .copied()
        .ok_or_else(|| format!("no best known result for instance '{instance}'").into())
}

fn read_summary(path: &Path, data: &mut BestKnown) -> GenericResult<()> {
    let reader = BufReader::new(File::open(path)?);
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let location = || format!("{}:{}", path.display(), index + 1);
        match line.split_whitespace().collect::<Vec<_>>().as_slice() {
            [name, k, dist] => {
                let k = k
                    .parse::<usize>()
                    .map_err(|err| format!("{}: cannot parse route count: {err}", location()))?;
                let dist = dist
                    .parse::<Float>()
                    .map_err(|err| format!("{}: cannot parse distance: {err}", location()))?;
                data.insert(name.to_lowercase(), (k, dist));
            }
            _ => return Err(format!("{}: expected 'name k dist' triple", location()).into()),
        }
    }

    Ok(())
}
