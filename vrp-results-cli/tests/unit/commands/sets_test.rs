use super::*;
use std::fs;
use tempfile::TempDir;

struct DummyWrite {}

impl Write for DummyWrite {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn dummy_write_buffer(_: Option<File>) -> BufWriter<Box<dyn Write>> {
    BufWriter::new(Box::new(DummyWrite {}))
}

fn create_list_files(lists: &[(&str, &[&str])]) -> TempDir {
    let dir = TempDir::new().expect("cannot create temp dir");
    for (name, lines) in lists {
        fs::write(dir.path().join(name), lines.join("\n")).expect("cannot write list");
    }
    dir
}

fn path_of(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_str().expect("non utf-8 path").to_string()
}

#[test]
fn can_require_two_files_for_compare() {
    get_compare_app().try_get_matches_from(vec!["compare"]).unwrap_err();
    get_compare_app().try_get_matches_from(vec!["compare", "one.txt"]).unwrap_err();
    get_compare_app()
        .try_get_matches_from(vec!["compare", "one.txt", "two.txt", "three.txt"])
        .unwrap_err();
}

#[test]
fn can_require_at_least_one_file_for_set_operations() {
    get_union_app().try_get_matches_from(vec!["union"]).unwrap_err();
    get_intersection_app().try_get_matches_from(vec!["intersection"]).unwrap_err();
    get_progress_app().try_get_matches_from(vec!["progress"]).unwrap_err();
}

#[test]
fn can_compare_result_list_files() {
    let dir = create_list_files(&[("a.txt", &["rc208", "c101"]), ("b.txt", &["c101"])]);
    let matches = get_compare_app()
        .try_get_matches_from(vec!["compare".to_string(), path_of(&dir, "a.txt"), path_of(&dir, "b.txt")])
        .expect("invalid args");

    run_compare(&matches, dummy_write_buffer).expect("cannot compare");
}

#[test]
fn can_fail_compare_on_missing_file() {
    let dir = create_list_files(&[("a.txt", &["rc208"])]);
    let matches = get_compare_app()
        .try_get_matches_from(vec!["compare".to_string(), path_of(&dir, "a.txt"), path_of(&dir, "absent.txt")])
        .expect("invalid args");

    assert!(run_compare(&matches, dummy_write_buffer).is_err());
}

#[test]
fn can_union_result_list_files() {
    let dir = create_list_files(&[("a.txt", &["rc208"]), ("b.txt", &["c101"])]);
    let matches = get_union_app()
        .try_get_matches_from(vec![
            "union".to_string(),
            "--raw".to_string(),
            path_of(&dir, "a.txt"),
            path_of(&dir, "b.txt"),
        ])
        .expect("invalid args");

    run_union(&matches, dummy_write_buffer).expect("cannot union");
}

#[test]
fn can_intersect_result_list_files() {
    let dir = create_list_files(&[("a.txt", &["rc208", "c101"]), ("b.txt", &["c101"])]);
    let matches = get_intersection_app()
        .try_get_matches_from(vec![
            "intersection".to_string(),
            path_of(&dir, "a.txt"),
            path_of(&dir, "b.txt"),
        ])
        .expect("invalid args");

    run_intersection(&matches, dummy_write_buffer).expect("cannot intersect");
}

#[test]
fn can_track_progress_over_result_list_files() {
    let dir = create_list_files(&[("a.txt", &["rc208"]), ("b.txt", &["rc208", "c101"])]);
    let matches = get_progress_app()
        .try_get_matches_from(vec![
            "progress".to_string(),
            path_of(&dir, "a.txt"),
            path_of(&dir, "b.txt"),
        ])
        .expect("invalid args");

    run_progress(&matches, dummy_write_buffer).expect("cannot track progress");
}
