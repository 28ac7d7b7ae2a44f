use super::*;
use std::fs;
use tempfile::TempDir;

fn touch(dir: &TempDir, names: &[&str]) {
    for name in names {
        fs::write(dir.path().join(name), "").expect("cannot create file");
    }
}

fn names(names: &[&str]) -> BTreeSet<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn can_run_maintenance_routine_end_to_end() {
    let dir = TempDir::new().expect("cannot create temp dir");
    touch(
        &dir,
        &[
            "rc208-100.0-1180.50-10-1195.00-run1.p",
            "rc208-100.0-1180.50-10-1195.00-run1.vrp",
            "c101-90.0-828.94-11-850.00-run2.p",
        ],
    );

    let mut buffer = Vec::new();
    let classification =
        run_organize(dir.path(), &mut buffer, || false).expect("cannot run routine");

    let best_dir = dir.path().join(BEST_RESULTS_DIR);
    assert!(best_dir.join("rc208-100.0-1180.50-10-1195.00-run1.p").exists());
    assert!(best_dir.join("rc208-100.0-1180.50-10-1195.00-run1.vrp").exists());
    assert!(dir.path().join("c101-90.0-828.94-11-850.00-run2.p").exists());

    let manifest = fs::read_to_string(dir.path().join(MANIFEST_FILE)).expect("no manifest");
    assert_eq!(manifest, "c101-90.0-828.94-11-850.00-run2.p");

    assert_eq!(classification.bad, names(&["c101"]));
    assert_eq!(classification.good, names(&["rc208"]));
    assert_eq!(classification.always, names(&["rc208"]));
    assert_eq!(classification.never, names(&["c101"]));
    assert!(classification.inconsistent.is_empty());

    assert_eq!(fs::read_to_string(dir.path().join("never.txt")).expect("no file"), "c101");
    assert_eq!(fs::read_to_string(dir.path().join("bad.txt")).expect("no file"), "c101");
    assert_eq!(fs::read_to_string(best_dir.join("good.txt")).expect("no file"), "rc208");
    assert_eq!(fs::read_to_string(best_dir.join("always.txt")).expect("no file"), "rc208");

    let output = String::from_utf8(buffer).expect("invalid utf-8");
    assert!(output.contains("Creating directory 100s (best-k results)"));
    assert!(output.contains("Moving 2 best-k results to 100s:"));
}

#[test]
fn can_rerun_maintenance_routine_idempotently() {
    let dir = TempDir::new().expect("cannot create temp dir");
    touch(
        &dir,
        &["rc208-100.0-1180.50-10-1195.00-run1.p", "c101-90.0-828.94-11-850.00-run2.p"],
    );

    run_organize(dir.path(), &mut Vec::<u8>::new(), || false).expect("cannot run routine");

    let mut buffer = Vec::new();
    run_organize(dir.path(), &mut buffer, || false).expect("cannot run routine");

    let output = String::from_utf8(buffer).expect("invalid utf-8");
    assert!(output.contains("Directory 100s already present"));
    assert!(output.contains("No best-k results found here."));
    assert!(!output.contains("present, but inconsistent"));
}

#[test]
fn can_delete_medium_files_when_confirmed() {
    let dir = TempDir::new().expect("cannot create temp dir");
    let files = [
        "rc208-90.0-1180.50-10-1195.00-a.p",
        "rc208-90.0-1180.50-11-1250.00-b.p",
        "rc208-90.0-1180.50-12-1290.00-c.p",
        "rc208-90.0-1180.50-13-1350.00-d.p",
    ];
    touch(&dir, &files);

    let mut buffer = Vec::new();
    run_organize(dir.path(), &mut buffer, || true).expect("cannot run routine");

    assert!(dir.path().join(files[0]).exists());
    assert!(!dir.path().join(files[1]).exists());
    assert!(!dir.path().join(files[2]).exists());
    assert!(dir.path().join(files[3]).exists());
    let output = String::from_utf8(buffer).expect("invalid utf-8");
    assert!(output.contains("Deleted 2 medium quality files."));
}

#[test]
fn can_keep_medium_files_without_confirmation() {
    let dir = TempDir::new().expect("cannot create temp dir");
    let files = [
        "rc208-90.0-1180.50-10-1195.00-a.p",
        "rc208-90.0-1180.50-11-1250.00-b.p",
        "rc208-90.0-1180.50-12-1290.00-c.p",
        "rc208-90.0-1180.50-13-1350.00-d.p",
    ];
    touch(&dir, &files);

    run_organize(dir.path(), &mut Vec::<u8>::new(), || false).expect("cannot run routine");

    for file in files {
        assert!(dir.path().join(file).exists());
    }
}

#[test]
fn can_report_inconsistent_derived_file_without_overwriting() {
    let dir = TempDir::new().expect("cannot create temp dir");
    touch(&dir, &["c101-90.0-828.94-11-850.00-run2.p"]);
    fs::write(dir.path().join("never.txt"), "r101").expect("cannot create file");

    let mut buffer = Vec::new();
    run_organize(dir.path(), &mut buffer, || false).expect("cannot run routine");

    assert_eq!(fs::read_to_string(dir.path().join("never.txt")).expect("no file"), "r101");
    let output = String::from_utf8(buffer).expect("invalid utf-8");
    assert!(output.contains("present, but inconsistent"));
}

#[test]
fn can_skip_nested_best_dir_when_run_inside_one() {
    let dir = TempDir::new().expect("cannot create temp dir");
    let best_dir = dir.path().join(BEST_RESULTS_DIR);
    fs::create_dir_all(&best_dir).expect("cannot create best dir");

    let mut buffer = Vec::new();
    run_organize(&best_dir, &mut buffer, || false).expect("cannot run routine");

    assert!(!best_dir.join(BEST_RESULTS_DIR).exists());
}
