use super::*;

// =============================================================
// Helpers
// =============================================================

type VecFilter = ProjectFilter<Vec<FilterControl>, Vec<ProjectCard>>;

fn record(id: i64, tags: &[&str]) -> ProjectRecord {
    ProjectRecord::new(
        id,
        format!("Project {id}"),
        "",
        "",
        tags.iter().map(|t| (*t).to_owned()).collect(),
        "#",
    )
    .unwrap()
}

fn sample() -> Catalog {
    Catalog::new(vec![
        record(1, &["HTML", "CSS"]),
        record(2, &["React", "Node.js"]),
        record(3, &["HTML", "API"]),
    ])
}

fn wired() -> VecFilter {
    ProjectFilter::initialize(sample(), Some(Vec::new()), Some(Vec::new()))
}

fn shown_keys(filter: &VecFilter) -> Vec<String> {
    filter
        .render_target()
        .unwrap()
        .iter()
        .map(|c| c.key.clone())
        .collect()
}

fn active_labels(filter: &VecFilter) -> Vec<String> {
    filter
        .control_host()
        .unwrap()
        .iter()
        .filter(|c| c.active)
        .map(|c| c.label.clone())
        .collect()
}

// =============================================================
// FilterState
// =============================================================

#[test]
fn filter_state_default_is_all() {
    assert_eq!(FilterState::default(), FilterState::All);
}

#[test]
fn filter_state_from_sentinel_label_is_all() {
    assert_eq!(FilterState::from_label("All"), FilterState::All);
    assert_eq!(FilterState::from_label("all"), FilterState::Tag("all".to_owned()));
}

#[test]
fn filter_state_label_round_trips() {
    assert_eq!(FilterState::All.label(), "All");
    assert_eq!(FilterState::Tag("CSS".to_owned()).label(), "CSS");
}

// =============================================================
// Initialize
// =============================================================

#[test]
fn initialize_starts_unfiltered() {
    let filter = wired();
    assert_eq!(filter.state(), &FilterState::All);
}

#[test]
fn initialize_pushes_one_control_per_label() {
    let filter = wired();
    let labels: Vec<&str> = filter
        .control_host()
        .unwrap()
        .iter()
        .map(|c| c.label.as_str())
        .collect();
    assert_eq!(labels, ["All", "HTML", "CSS", "React", "Node.js", "API"]);
    assert_eq!(active_labels(&filter), ["All"]);
}

#[test]
fn initialize_does_not_render() {
    let filter = wired();
    assert!(filter.render_target().unwrap().is_empty());
}

#[test]
fn refresh_renders_current_state() {
    let mut filter = wired();
    filter.refresh();
    assert_eq!(shown_keys(&filter), ["1", "2", "3"]);
}

// =============================================================
// SelectTag
// =============================================================

#[test]
fn select_tag_shows_matching_records_in_order() {
    let mut filter = wired();
    filter.select_tag("HTML");
    assert_eq!(filter.state(), &FilterState::Tag("HTML".to_owned()));
    assert_eq!(shown_keys(&filter), ["1", "3"]);
    assert_eq!(active_labels(&filter), ["HTML"]);
}

#[test]
fn select_tag_renders_full_tag_lists() {
    let mut filter = wired();
    filter.select_tag("API");
    let cards = filter.render_target().unwrap();
    assert_eq!(cards[0].tags, ["HTML", "API"]);
}

#[test]
fn select_sentinel_resets_to_full_catalog() {
    let mut filter = wired();
    filter.select_tag("React");
    filter.select_tag("All");
    assert_eq!(filter.state(), &FilterState::All);
    assert_eq!(shown_keys(&filter), ["1", "2", "3"]);
    assert_eq!(active_labels(&filter), ["All"]);
}

#[test]
fn select_unknown_tag_yields_empty_grid_and_no_active_control() {
    let mut filter = wired();
    filter.select_tag("Rust");
    assert_eq!(filter.state(), &FilterState::Tag("Rust".to_owned()));
    assert!(shown_keys(&filter).is_empty());
    assert!(active_labels(&filter).is_empty());
}

#[test]
fn last_selection_wins() {
    let mut filter = wired();
    filter.select_tag("HTML");
    filter.select_tag("Node.js");
    assert_eq!(filter.state(), &FilterState::Tag("Node.js".to_owned()));
    assert_eq!(shown_keys(&filter), ["2"]);
    assert_eq!(active_labels(&filter), ["Node.js"]);
}

#[test]
fn select_same_tag_twice_is_stable() {
    let mut filter = wired();
    filter.select_tag("CSS");
    let first = filter.render_target().unwrap().clone();
    filter.select_tag("CSS");
    assert_eq!(filter.render_target().unwrap(), &first);
}

// =============================================================
// Absent sinks
// =============================================================

#[test]
fn missing_render_target_is_skipped() {
    let mut filter: VecFilter = ProjectFilter::initialize(sample(), Some(Vec::new()), None);
    filter.select_tag("HTML");
    assert!(filter.render_target().is_none());
    assert_eq!(active_labels(&filter), ["HTML"]);
    assert_eq!(filter.subset().len(), 2);
}

#[test]
fn missing_control_host_is_skipped() {
    let mut filter: VecFilter = ProjectFilter::initialize(sample(), None, Some(Vec::new()));
    filter.select_tag("React");
    assert!(filter.control_host().is_none());
    assert_eq!(shown_keys(&filter), ["2"]);
}

#[test]
fn empty_catalog_only_offers_sentinel() {
    let mut filter: VecFilter =
        ProjectFilter::initialize(Catalog::default(), Some(Vec::new()), Some(Vec::new()));
    filter.refresh();
    assert_eq!(active_labels(&filter), ["All"]);
    assert!(shown_keys(&filter).is_empty());
}
