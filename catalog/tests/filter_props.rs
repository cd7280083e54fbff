//! Property tests for the tag filter over arbitrary catalogs.

use catalog::consts::SENTINEL_TAG;
use catalog::{Catalog, FilterControl, FilterState, ProjectCard, ProjectFilter, ProjectRecord};
use proptest::prelude::*;

type VecFilter = ProjectFilter<Vec<FilterControl>, Vec<ProjectCard>>;

fn arb_tag() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["HTML", "CSS", "css", "React", "Node.js", "API", "Vue", "Rust"])
        .prop_map(str::to_owned)
}

fn arb_catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(prop::collection::vec(arb_tag(), 1..4), 0..8).prop_map(|tag_lists| {
        let records = tag_lists
            .into_iter()
            .zip(0i64..)
            .filter_map(|(tags, id)| {
                ProjectRecord::new(id, format!("Project {id}"), "", "", tags, "#").ok()
            })
            .collect();
        Catalog::new(records)
    })
}

fn expected_keys(catalog: &Catalog, tag: &str) -> Vec<String> {
    catalog
        .records()
        .iter()
        .filter(|r| tag == SENTINEL_TAG || r.tags().iter().any(|t| t == tag))
        .map(|r| r.id().to_string())
        .collect()
}

fn shown_keys(filter: &VecFilter) -> Vec<String> {
    filter
        .render_target()
        .map(|cards| cards.iter().map(|c| c.key.clone()).collect())
        .unwrap_or_default()
}

proptest! {
    #[test]
    fn selecting_an_indexed_tag_shows_exactly_its_records(catalog in arb_catalog(), pick in any::<prop::sample::Index>()) {
        let index = catalog.tag_index();
        let labels: Vec<String> = index.labels().map(str::to_owned).collect();
        let tag = pick.get(&labels).clone();
        let expected = expected_keys(&catalog, &tag);

        let mut filter: VecFilter = ProjectFilter::initialize(catalog, Some(Vec::new()), Some(Vec::new()));
        filter.select_tag(&tag);
        prop_assert_eq!(shown_keys(&filter), expected);
    }

    #[test]
    fn sentinel_always_restores_full_catalog(catalog in arb_catalog(), prior in arb_tag()) {
        let expected: Vec<String> = catalog.records().iter().map(|r| r.id().to_string()).collect();
        let mut filter: VecFilter = ProjectFilter::initialize(catalog, Some(Vec::new()), Some(Vec::new()));
        filter.select_tag(&prior);
        filter.select_tag(SENTINEL_TAG);
        prop_assert_eq!(filter.state(), &FilterState::All);
        prop_assert_eq!(shown_keys(&filter), expected);
    }

    #[test]
    fn tags_outside_the_index_show_nothing(catalog in arb_catalog(), tag in "[a-z]{1,6}-x") {
        let mut filter: VecFilter = ProjectFilter::initialize(catalog, Some(Vec::new()), Some(Vec::new()));
        filter.select_tag(&tag);
        prop_assert!(shown_keys(&filter).is_empty());
        prop_assert!(filter.control_host().is_some_and(|c| c.iter().all(|c| !c.active)));
    }

    #[test]
    fn second_selection_overrides_first(catalog in arb_catalog(), first in arb_tag(), second in arb_tag()) {
        let expected = expected_keys(&catalog, &second);
        let mut filter: VecFilter = ProjectFilter::initialize(catalog, Some(Vec::new()), Some(Vec::new()));
        filter.select_tag(&first);
        filter.select_tag(&second);
        prop_assert_eq!(filter.state(), &FilterState::from_label(&second));
        prop_assert_eq!(shown_keys(&filter), expected);
    }

    #[test]
    fn tag_index_is_order_stable(catalog in arb_catalog()) {
        let again = catalog.clone();
        let index = catalog.tag_index();
        prop_assert_eq!(&index, &again.tag_index());
        prop_assert_eq!(index.labels().next(), Some(SENTINEL_TAG));
    }

    #[test]
    fn exactly_one_control_active_for_indexed_tags(catalog in arb_catalog(), pick in any::<prop::sample::Index>()) {
        let labels: Vec<String> = catalog.tag_index().labels().map(str::to_owned).collect();
        let tag = pick.get(&labels).clone();
        let mut filter: VecFilter = ProjectFilter::initialize(catalog, Some(Vec::new()), Some(Vec::new()));
        filter.select_tag(&tag);
        let active: Vec<String> = filter
            .control_host()
            .map(|c| c.iter().filter(|c| c.active).map(|c| c.label.clone()).collect())
            .unwrap_or_default();
        prop_assert_eq!(active, vec![tag]);
    }
}

#[test]
fn documented_example() {
    let tags = |list: &[&str]| list.iter().map(|t| (*t).to_owned()).collect::<Vec<_>>();
    let catalog = Catalog::new(vec![
        ProjectRecord::new(1, "One", "", "", tags(&["HTML", "CSS"]), "#").unwrap(),
        ProjectRecord::new(2, "Two", "", "", tags(&["React", "Node.js"]), "#").unwrap(),
        ProjectRecord::new(3, "Three", "", "", tags(&["HTML", "API"]), "#").unwrap(),
    ]);
    assert_eq!(
        catalog.tag_index().labels().collect::<Vec<_>>(),
        ["All", "HTML", "CSS", "React", "Node.js", "API"]
    );

    let mut filter: VecFilter = ProjectFilter::initialize(catalog, Some(Vec::new()), Some(Vec::new()));
    filter.select_tag("HTML");
    assert_eq!(shown_keys(&filter), ["1", "3"]);
    filter.select_tag("All");
    assert_eq!(shown_keys(&filter), ["1", "2", "3"]);
}
