mod common;

use common::load_catalog;
use pgmastery::catalog::Level;
use pgmastery::selector::{
    categories, filter_courses, filter_posts, syllabus_for_level, CategoryFilter, LevelFilter,
    SortOrder,
};

#[test]
fn catalog_has_the_published_price_ladder() {
    let catalog = load_catalog();
    let prices: Vec<u32> = filter_courses(&catalog.courses, &LevelFilter::All, SortOrder::Asc)
        .iter()
        .map(|c| c.price)
        .collect();
    assert_eq!(prices, vec![12000, 15000, 20000, 30000]);
}

#[test]
fn toggling_through_every_level_comes_back_to_all() {
    let mut filter = LevelFilter::All;
    for level in Level::ALL {
        filter = filter.toggled(level);
    }
    for level in Level::ALL {
        filter = filter.toggled(level);
    }
    assert_eq!(filter, LevelFilter::All);
}

#[test]
fn level_filter_round_trips_through_the_query_string() {
    let filter = LevelFilter::All.toggled(Level::L2).toggled(Level::L4);
    let parsed = LevelFilter::parse(&filter.to_query());
    assert_eq!(parsed, filter);
    assert_eq!(LevelFilter::parse(&LevelFilter::All.to_query()), LevelFilter::All);
}

#[test]
fn blog_search_is_case_insensitive() {
    let catalog = load_catalog();
    let lower = filter_posts(&catalog.posts, &CategoryFilter::All, "vacuum", SortOrder::Desc);
    let upper = filter_posts(&catalog.posts, &CategoryFilter::All, "VACUUM", SortOrder::Desc);
    assert!(!lower.is_empty());
    let lower_ids: Vec<u32> = lower.iter().map(|p| p.id).collect();
    let upper_ids: Vec<u32> = upper.iter().map(|p| p.id).collect();
    assert_eq!(lower_ids, upper_ids);
}

#[test]
fn every_category_filter_partitions_the_posts() {
    let catalog = load_catalog();
    let total: usize = categories(&catalog.posts)
        .into_iter()
        .map(|cat| {
            filter_posts(
                &catalog.posts,
                &CategoryFilter::Category(cat.to_string()),
                "",
                SortOrder::Asc,
            )
            .len()
        })
        .sum();
    assert_eq!(total, catalog.posts.len());
}

#[test]
fn post_lookup_matches_list_ids() {
    let catalog = load_catalog();
    let listed = filter_posts(&catalog.posts, &CategoryFilter::All, "", SortOrder::Desc);
    let first = listed.first().unwrap();
    let fetched = catalog.post(first.id).unwrap();
    assert_eq!(fetched.title, first.title);
    assert!(catalog.post(0).is_none());
    assert!(catalog.post(10_000).is_none());
}

#[test]
fn syllabus_tiers_nest_strictly() {
    let catalog = load_catalog();
    let mut previous = 0;
    for level in Level::ALL {
        let topics = syllabus_for_level(&catalog.syllabus, level);
        assert!(topics.len() > previous, "each level must add topics");
        previous = topics.len();
    }
}
