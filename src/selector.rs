//! Pure filter/sort derivations over the content catalog.
//!
//! Every function here is a total function of its arguments: no hidden
//! state, no mutation of the source collections, identical inputs give
//! identical ordered output. Sorting is stable, so ties keep catalog order.

use std::collections::BTreeSet;

use crate::catalog::{BlogPost, Course, Level, SyllabusTopic};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn parse(s: &str) -> Option<SortOrder> {
        match s {
            "ASC" => Some(SortOrder::Asc),
            "DESC" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

/// A non-empty level selection. The `All` sentinel stands in for "no
/// filtering"; a concrete selection always holds at least one level, so a
/// filter can never silently produce an empty page through toggling alone.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum LevelFilter {
    All,
    Levels(BTreeSet<Level>),
}

impl LevelFilter {
    /// Parses a comma-separated selection such as `"L1,L3"` or `"ALL"`.
    /// Unknown tags are dropped; an effectively empty selection normalizes
    /// to `All`.
    pub fn parse(s: &str) -> LevelFilter {
        if s == "ALL" {
            return LevelFilter::All;
        }
        let levels: BTreeSet<Level> = s.split(',').filter_map(Level::parse).collect();
        if levels.is_empty() {
            LevelFilter::All
        } else {
            LevelFilter::Levels(levels)
        }
    }

    pub fn to_query(&self) -> String {
        match self {
            LevelFilter::All => "ALL".to_string(),
            LevelFilter::Levels(levels) => levels
                .iter()
                .map(|l| l.as_str())
                .collect::<Vec<_>>()
                .join(","),
        }
    }

    pub fn matches(&self, level: Level) -> bool {
        match self {
            LevelFilter::All => true,
            LevelFilter::Levels(levels) => levels.contains(&level),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, LevelFilter::All)
    }

    pub fn contains(&self, level: Level) -> bool {
        matches!(self, LevelFilter::Levels(levels) if levels.contains(&level))
    }

    /// Toggles a concrete level in the selection. Selecting a level drops
    /// the `All` sentinel first; deselecting the last remaining level
    /// collapses back to `All`. The result is never an empty set.
    pub fn toggled(&self, level: Level) -> LevelFilter {
        let mut levels = match self {
            LevelFilter::All => BTreeSet::new(),
            LevelFilter::Levels(levels) => levels.clone(),
        };
        if !levels.remove(&level) {
            levels.insert(level);
        }
        if levels.is_empty() {
            LevelFilter::All
        } else {
            LevelFilter::Levels(levels)
        }
    }
}

/// Category selection for the blog list. An unknown category is a valid
/// filter that matches nothing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CategoryFilter {
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn parse(s: &str) -> CategoryFilter {
        if s.is_empty() || s == "ALL" {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(s.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => "ALL",
            CategoryFilter::Category(c) => c,
        }
    }

    fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(c) => c == category,
        }
    }
}

/// Retains courses whose level is selected, then stable-sorts by price.
pub fn filter_courses<'a>(
    courses: &'a [Course],
    filter: &LevelFilter,
    order: SortOrder,
) -> Vec<&'a Course> {
    let mut result: Vec<&Course> = courses
        .iter()
        .filter(|c| filter.matches(c.level))
        .collect();
    match order {
        SortOrder::Asc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortOrder::Desc => result.sort_by(|a, b| b.price.cmp(&a.price)),
    }
    result
}

/// Retains posts matching the category AND a case-insensitive substring of
/// the title, then stable-sorts by publish date (newest first for `Desc`).
pub fn filter_posts<'a>(
    posts: &'a [BlogPost],
    category: &CategoryFilter,
    query: &str,
    order: SortOrder,
) -> Vec<&'a BlogPost> {
    let needle = query.to_lowercase();
    let mut result: Vec<&BlogPost> = posts
        .iter()
        .filter(|p| category.matches(&p.category) && p.title.to_lowercase().contains(&needle))
        .collect();
    match order {
        SortOrder::Asc => result.sort_by(|a, b| a.published.cmp(&b.published)),
        SortOrder::Desc => result.sort_by(|a, b| b.published.cmp(&a.published)),
    }
    result
}

/// Distinct post categories in first-appearance order.
pub fn categories(posts: &[BlogPost]) -> Vec<&str> {
    let mut cats: Vec<&str> = Vec::new();
    for post in posts {
        if !cats.contains(&post.category.as_str()) {
            cats.push(&post.category);
        }
    }
    cats
}

/// Cumulative syllabus selection: course level L covers every topic at or
/// below its mapped tier, in catalog order.
pub fn syllabus_for_level<'a>(topics: &'a [SyllabusTopic], level: Level) -> Vec<&'a SyllabusTopic> {
    topics.iter().filter(|t| t.tier <= level.tier()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn courses() -> Vec<Course> {
        Catalog::load().unwrap().courses
    }

    #[test]
    fn all_asc_orders_by_price() {
        let courses = courses();
        let out = filter_courses(&courses, &LevelFilter::All, SortOrder::Asc);
        let levels: Vec<Level> = out.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![Level::L1, Level::L2, Level::L3, Level::L4]);
    }

    #[test]
    fn all_desc_reverses() {
        let courses = courses();
        let out = filter_courses(&courses, &LevelFilter::All, SortOrder::Desc);
        let levels: Vec<Level> = out.iter().map(|c| c.level).collect();
        assert_eq!(levels, vec![Level::L4, Level::L3, Level::L2, Level::L1]);
    }

    #[test]
    fn subset_filter_retains_members_only() {
        let courses = courses();
        let filter = LevelFilter::parse("L2,L4");
        let out = filter_courses(&courses, &filter, SortOrder::Asc);
        let prices: Vec<u32> = out.iter().map(|c| c.price).collect();
        assert_eq!(prices, vec![15000, 30000]);
        assert!(out.iter().all(|c| filter.matches(c.level)));
    }

    #[test]
    fn filtering_is_idempotent() {
        let courses = courses();
        let filter = LevelFilter::parse("L1,L3");
        let a = filter_courses(&courses, &filter, SortOrder::Desc);
        let b = filter_courses(&courses, &filter, SortOrder::Desc);
        let ids_a: Vec<&str> = a.iter().map(|c| c.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn adjacent_pairs_satisfy_sort_law() {
        let courses = courses();
        let asc = filter_courses(&courses, &LevelFilter::All, SortOrder::Asc);
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
        let desc = filter_courses(&courses, &LevelFilter::All, SortOrder::Desc);
        assert!(desc.windows(2).all(|w| w[0].price >= w[1].price));
    }

    #[test]
    fn toggle_never_leaves_an_empty_selection() {
        let filter = LevelFilter::All;
        let filter = filter.toggled(Level::L2);
        assert!(filter.contains(Level::L2));
        let filter = filter.toggled(Level::L2);
        assert_eq!(filter, LevelFilter::All);
    }

    #[test]
    fn toggle_accumulates_and_drops() {
        let filter = LevelFilter::All.toggled(Level::L1).toggled(Level::L3);
        assert!(filter.contains(Level::L1) && filter.contains(Level::L3));
        let filter = filter.toggled(Level::L1);
        assert!(!filter.contains(Level::L1) && filter.contains(Level::L3));
    }

    #[test]
    fn empty_or_garbage_selection_normalizes_to_all() {
        assert_eq!(LevelFilter::parse(""), LevelFilter::All);
        assert_eq!(LevelFilter::parse("L9,bogus"), LevelFilter::All);
        assert_eq!(LevelFilter::parse("ALL"), LevelFilter::All);
    }

    #[test]
    fn blog_filters_and_together() {
        let catalog = Catalog::load().unwrap();
        let out = filter_posts(
            &catalog.posts,
            &CategoryFilter::parse("Security"),
            "pg_hba",
            SortOrder::Desc,
        );
        assert!(!out.is_empty());
        assert!(out
            .iter()
            .all(|p| p.category == "Security" && p.title.to_lowercase().contains("pg_hba")));
    }

    #[test]
    fn unknown_category_matches_nothing() {
        let catalog = Catalog::load().unwrap();
        let out = filter_posts(
            &catalog.posts,
            &CategoryFilter::parse("Astrology"),
            "",
            SortOrder::Desc,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn blog_desc_is_newest_first() {
        let catalog = Catalog::load().unwrap();
        let out = filter_posts(&catalog.posts, &CategoryFilter::All, "", SortOrder::Desc);
        assert_eq!(out.len(), catalog.posts.len());
        assert!(out.windows(2).all(|w| w[0].published >= w[1].published));
    }

    #[test]
    fn syllabus_inclusion_is_cumulative() {
        let catalog = Catalog::load().unwrap();
        let l1 = syllabus_for_level(&catalog.syllabus, Level::L1);
        let l3 = syllabus_for_level(&catalog.syllabus, Level::L3);
        let l4 = syllabus_for_level(&catalog.syllabus, Level::L4);
        assert!(l1.len() < l3.len() && l3.len() < l4.len());
        assert_eq!(l4.len(), catalog.syllabus.len());
        let l3_ids: Vec<u32> = l3.iter().map(|t| t.id).collect();
        assert!(l1.iter().all(|t| l3_ids.contains(&t.id)));
    }
}
