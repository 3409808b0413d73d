//! Fuzzy search over the icon catalog.
//!
//! Ranking is two-stage: direct substring hits on name or category score
//! highest, everything else is ranked by Jaro-Winkler similarity and kept
//! only above [`SIMILARITY_THRESHOLD`].

use crate::icon::{IconCatalog, IconDef};

/// Minimum Jaro-Winkler similarity for an approximate match.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

const EXACT_SCORE: f64 = 1.0;
const PREFIX_SCORE: f64 = 0.95;
const SUBSTRING_SCORE: f64 = 0.9;

/// A catalog entry with its relevance score (higher is better).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub icon: &'a IconDef,
    pub score: f64,
}

/// Relevance-ordered lookup over a catalog.
#[derive(Debug, Clone, Copy)]
pub struct IconSearch<'a> {
    catalog: &'a IconCatalog,
}

impl IconSearch<'static> {
    /// Searches the built-in catalog.
    pub fn global() -> Self {
        Self::new(IconCatalog::global())
    }
}

impl<'a> IconSearch<'a> {
    pub fn new(catalog: &'a IconCatalog) -> Self {
        Self { catalog }
    }

    /// Returns matches for `query`, best first.
    ///
    /// A blank query returns the whole catalog in catalog order. Ties keep
    /// catalog order.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'a>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self
                .catalog
                .iter()
                .map(|icon| SearchHit { icon, score: EXACT_SCORE })
                .collect();
        }

        let mut hits: Vec<SearchHit<'a>> = self
            .catalog
            .iter()
            .filter_map(|icon| {
                let score = score(&query, icon);
                (score >= SIMILARITY_THRESHOLD).then_some(SearchHit { icon, score })
            })
            .collect();

        // stable sort keeps catalog order among equal scores
        hits.sort_by(|a, b| b.score.total_cmp(&a.score));
        hits
    }

    /// Convenience wrapper returning only the icon names.
    pub fn names(&self, query: &str) -> Vec<&'static str> {
        self.search(query).into_iter().map(|hit| hit.icon.name).collect()
    }
}

/// Scores a lowercase query against one icon's name and category.
fn score(query: &str, icon: &IconDef) -> f64 {
    let name = icon.name.to_lowercase();
    let category = icon.category.as_str().to_lowercase();

    if name == query {
        EXACT_SCORE
    } else if name.starts_with(query) {
        PREFIX_SCORE
    } else if name.contains(query) || category.contains(query) {
        SUBSTRING_SCORE
    } else {
        strsim::jaro_winkler(query, &name).max(strsim::jaro_winkler(query, &category))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_query_returns_full_catalog_in_order() {
        let search = IconSearch::global();
        let all: Vec<_> = IconCatalog::global().iter().map(|d| d.name).collect();
        assert_eq!(search.names(""), all);
        assert_eq!(search.names("   "), all);
    }

    #[test]
    fn exact_match_ranks_first() {
        let names = IconSearch::global().names("star");
        assert_eq!(names.first(), Some(&"Star"));
    }

    #[test]
    fn category_matches_are_included() {
        let names = IconSearch::global().names("arrows");
        for arrow in ["ArrowDown", "ArrowLeft", "ArrowRight", "ArrowUp"] {
            assert!(names.contains(&arrow), "{arrow} missing from {names:?}");
        }
    }

    #[test]
    fn prefix_beats_substring() {
        let hits = IconSearch::global().search("user");
        assert_eq!(hits[0].icon.name, "User");
        assert_eq!(hits[0].score, EXACT_SCORE);

        let plus = hits.iter().find(|h| h.icon.name == "UserPlus").unwrap();
        assert_eq!(plus.score, PREFIX_SCORE);
    }

    #[test]
    fn typo_still_matches() {
        let names = IconSearch::global().names("hart");
        assert!(names.contains(&"Heart"), "{names:?}");
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        assert!(IconSearch::global().names("qqqqqqqqxz").is_empty());
    }
}
