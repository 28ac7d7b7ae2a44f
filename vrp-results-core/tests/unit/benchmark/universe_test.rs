use super::*;

#[test]
fn can_generate_solomon_universe() {
    let names = solomon_names();

    assert_eq!(names.len(), 56);
    for name in ["c101", "c109", "c208", "r101", "r112", "r211", "rc108", "rc208"] {
        assert!(names.contains(name), "missing {name}");
    }
    assert!(!names.contains("c110"));
    assert!(!names.contains("c100"));
}

#[test]
fn can_generate_homberger_universe() {
    let names = homberger_names();

    assert_eq!(names.len(), 300);
    for name in ["c1_2_1", "c1_210", "c2_4_9", "r210_9", "r21010", "rc2_8_5"] {
        assert!(names.contains(name), "missing {name}");
    }
    assert!(!names.contains("c1_2_0"));
}

#[test]
fn can_keep_universes_disjoint_and_stable() {
    assert!(solomon_names().is_disjoint(&homberger_names()));
    assert_eq!(solomon_names(), solomon_names());
    assert_eq!(homberger_names(), homberger_names());
    assert_eq!(all_names().len(), 356);
}
