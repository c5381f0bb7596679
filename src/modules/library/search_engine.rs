use crate::core::models::Story;
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

/// Result of a fuzzy search operation
#[derive(Debug, Clone)]
pub struct SearchResult<'a> {
    /// Original index in the story list
    pub index: usize,
    pub story: &'a Story,
    /// Match score (higher is better)
    pub score: i64,
}

/// Fuzzy title/id lookup over the story list
pub struct SearchEngine {
    matcher: SkimMatcherV2,
}

impl SearchEngine {
    pub fn new() -> Self {
        Self {
            matcher: SkimMatcherV2::default(),
        }
    }

    /// Returns matches sorted by relevance (best first); an empty query matches nothing
    pub fn search<'a>(&self, stories: &'a [Story], query: &str) -> Vec<SearchResult<'a>> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }

        let mut results: Vec<SearchResult> = stories
            .iter()
            .enumerate()
            .filter_map(|(index, story)| {
                self.score_story(story, &query)
                    .map(|score| SearchResult { index, story, score })
            })
            .collect();

        // Stable, so equal scores keep story order
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }

    fn score_story(&self, story: &Story, query: &str) -> Option<i64> {
        let title = self.matcher.fuzzy_match(&story.title.to_lowercase(), query);
        let id = self.matcher.fuzzy_match(&story.id.to_lowercase(), query);

        [title, id].into_iter().flatten().max()
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Helpers ───────────────────────────────────────────────────────────────

    fn make_story(id: &str, title: &str) -> Story {
        Story {
            id: id.to_owned(),
            title: title.to_owned(),
            ..Story::default()
        }
    }

    fn stories() -> Vec<Story> {
        vec![
            make_story("brand-refresh", "Brand Refresh 2024"),
            make_story("mobile-app", "Mobile Banking App"),
            make_story("conf-talk", "Conference Talk Highlights"),
            make_story("packaging", "Packaging Design"),
        ]
    }

    // ── Basic behaviour ───────────────────────────────────────────────────────

    #[test]
    fn empty_query_returns_nothing() {
        let engine = SearchEngine::new();
        assert!(engine.search(&stories(), "   ").is_empty());
    }

    #[test]
    fn no_match_returns_nothing() {
        let engine = SearchEngine::new();
        assert!(engine.search(&stories(), "zxqv_nothing").is_empty());
    }

    #[test]
    fn exact_title_ranks_first() {
        let engine = SearchEngine::new();
        let list = stories();
        let results = engine.search(&list, "Packaging Design");
        assert_eq!(results[0].story.id, "packaging");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let engine = SearchEngine::new();
        let list = stories();
        let results = engine.search(&list, "MOBILE");
        assert_eq!(results[0].story.id, "mobile-app");
    }

    #[test]
    fn id_also_matches() {
        let engine = SearchEngine::new();
        let list = stories();
        let results = engine.search(&list, "conf-talk");
        assert_eq!(results[0].story.id, "conf-talk");
    }

    #[test]
    fn fuzzy_abbreviation_matches() {
        let engine = SearchEngine::new();
        let list = stories();
        assert!(!engine.search(&list, "brndrf").is_empty());
    }

    // ── Ordering ──────────────────────────────────────────────────────────────

    #[test]
    fn results_are_sorted_best_score_first() {
        let engine = SearchEngine::new();
        let list = stories();
        let results = engine.search(&list, "a");
        for window in results.windows(2) {
            assert!(window[0].score >= window[1].score);
        }
    }

    #[test]
    fn result_index_points_at_story() {
        let engine = SearchEngine::new();
        let list = stories();
        for result in engine.search(&list, "design") {
            assert_eq!(list[result.index].id, result.story.id);
        }
    }
}
