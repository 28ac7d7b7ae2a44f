use super::*;
use crate::helpers::{name_set, write_lines};
use tempfile::TempDir;

#[test]
fn can_read_file_as_trimmed_line_set() {
    let dir = TempDir::new().expect("cannot create temp dir");
    let path = dir.path().join("list.txt");
    write_lines(&path, &["  rc208  ", "", "c101", "c101"]);

    assert_eq!(read_as_set(&path).expect("cannot read"), name_set(&["rc208", "c101"]));
}

#[test]
fn can_fail_reading_missing_file() {
    let dir = TempDir::new().expect("cannot create temp dir");

    assert!(read_as_set(&dir.path().join("absent.txt")).is_err());
}

#[test]
fn can_compare_two_sets_into_disjoint_partition() {
    let first = name_set(&["a", "b", "c"]);
    let second = name_set(&["b", "c", "d"]);

    let report = compare(&first, &second);

    assert_eq!(report.only_in_first, name_set(&["a"]));
    assert_eq!(report.only_in_second, name_set(&["d"]));
    assert_eq!(report.in_both, name_set(&["b", "c"]));

    assert!(report.only_in_first.is_disjoint(&report.only_in_second));
    assert!(report.only_in_first.is_disjoint(&report.in_both));
    assert!(report.only_in_second.is_disjoint(&report.in_both));
    assert_eq!(
        union_all(&[report.only_in_first, report.only_in_second, report.in_both]),
        union_all(&[first, second])
    );
}

#[test]
fn can_union_and_intersect_many_sets() {
    let sets = vec![name_set(&["a", "b"]), name_set(&["b", "c"]), name_set(&["b", "d"])];

    assert_eq!(union_all(&sets), name_set(&["a", "b", "c", "d"]));
    assert_eq!(intersect_all(&sets), name_set(&["b"]));
    assert_eq!(intersect_all(&[]), name_set(&[]));
}

#[test]
fn can_track_progress_novelty() {
    let sources = vec![
        ("first".to_string(), name_set(&["a", "b"])),
        ("second".to_string(), name_set(&["b", "c"])),
        ("third".to_string(), name_set(&["a", "c"])),
    ];

    let steps = progress(&sources);

    assert_eq!(steps[0].novel, name_set(&["a", "b"]));
    assert_eq!(steps[1].novel, name_set(&["c"]));
    assert!(steps[2].novel.is_empty());

    let novelties: Vec<_> = steps.iter().map(|step| step.novel.clone()).collect();
    assert!(novelties[0].is_disjoint(&novelties[1]));
    assert_eq!(
        union_all(&novelties),
        union_all(&sources.into_iter().map(|(_, set)| set).collect::<Vec<_>>())
    );
}
