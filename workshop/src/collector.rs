use super::lessons;
use super::test_group::TestGroup;

/// Collects the workshop's groups, keeping only the one named `only` when
/// given. Names match case-insensitively.
pub fn collect_test_groups(only: Option<&str>) -> Vec<TestGroup> {
    lessons::all()
        .into_iter()
        .filter(|group| only.map_or(true, |name| group.name().eq_ignore_ascii_case(name)))
        .collect()
}

#[test]
fn test_collect_all_groups() {
    let names: Vec<String> = collect_test_groups(None)
        .iter()
        .map(|group| group.name().to_string())
        .collect();
    assert_eq!(names, vec![
        "Pure Functions",
        "Map",
        "Filter",
        "Map + Filter",
        "Reduce",
        "Map + Reduce",
        "Higher Order Functions",
        "Currying",
        "Compose",
    ]);
}

#[test]
fn test_collect_single_group() {
    let groups = collect_test_groups(Some("currying"));
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].name(), "Currying");
    assert_eq!(groups[0].cases().len(), 4);
}

#[test]
fn test_collect_unknown_group() {
    assert!(collect_test_groups(Some("monads")).is_empty());
}
