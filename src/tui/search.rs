//! Fuzzy plant search with multi-term support using nucleo
//!
//! Backs the plant finder:
//! - Multi-term search (whitespace splits terms, ALL must match)
//! - Weighted field scoring (name beats city)
//! - Smart case handling

use crate::data::Plant;
use nucleo::{
    pattern::{CaseMatching, Normalization, Pattern},
    Config, Matcher, Utf32Str,
};

/// Result of a search match with score and the field that won
pub struct SearchResult {
    pub index: usize,
    pub score: u32,
    pub matched_field: &'static str,
}

/// Fuzzy searcher with multi-term support
pub struct FuzzySearch {
    matcher: Matcher,
}

impl Default for FuzzySearch {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzySearch {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(Config::DEFAULT),
        }
    }

    /// Match a single term against text, return score if matched
    fn match_term(&mut self, term: &str, haystack: &str) -> Option<u32> {
        if term.is_empty() || haystack.is_empty() {
            return if term.is_empty() { Some(0) } else { None };
        }

        let pattern = Pattern::parse(term, CaseMatching::Ignore, Normalization::Smart);
        let mut haystack_buf = Vec::new();
        let haystack_utf32 = Utf32Str::new(haystack, &mut haystack_buf);

        pattern.score(haystack_utf32, &mut self.matcher)
    }

    /// Multi-term search: split query on whitespace, ALL terms must match (AND semantics)
    /// Returns total score if all terms match, None otherwise
    pub fn multi_term_match(&mut self, query: &str, haystack: &str) -> Option<u32> {
        let terms: Vec<&str> = query.split_whitespace().collect();

        if terms.is_empty() {
            return Some(0);
        }

        let mut total_score = 0u32;

        for term in terms {
            match self.match_term(term, haystack) {
                Some(score) => total_score = total_score.saturating_add(score),
                None => return None, // Any term not matching = no match
            }
        }

        Some(total_score)
    }

    /// Score one plant against the query.
    pub fn search_plant(&mut self, index: usize, plant: &Plant, query: &str) -> Option<SearchResult> {
        let combined = format!("{} {}", plant.name, plant.city);

        // (text, weight, field) - higher weight wins on equal raw score
        let fields: [(&str, u32, &'static str); 3] = [
            (&plant.name, 10, "name"),
            (&plant.city, 6, "city"),
            (&combined, 4, "name+city"),
        ];

        let mut best: Option<SearchResult> = None;
        for (text, weight, field) in fields {
            if let Some(score) = self.multi_term_match(query, text) {
                let weighted = score.saturating_mul(weight);
                if best.as_ref().map_or(true, |r| weighted > r.score) {
                    best = Some(SearchResult {
                        index,
                        score: weighted,
                        matched_field: field,
                    });
                }
            }
        }
        best
    }

    /// Indices of matching plants, best match first.
    ///
    /// An empty query returns every plant in source order.
    pub fn search_plants(&mut self, plants: &[Plant], query: &str) -> Vec<usize> {
        if query.trim().is_empty() {
            return (0..plants.len()).collect();
        }

        let mut results: Vec<SearchResult> = plants
            .iter()
            .enumerate()
            .filter_map(|(i, plant)| self.search_plant(i, plant, query))
            .collect();

        // Stable sort keeps source order between equal scores
        results.sort_by(|a, b| b.score.cmp(&a.score));
        results.into_iter().map(|r| r.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_term_match() {
        let mut search = FuzzySearch::new();
        assert!(search.multi_term_match("kiln", "rotary kiln").is_some());
        assert!(search.multi_term_match("xyz", "rotary kiln").is_none());
    }

    #[test]
    fn test_multi_term_match() {
        let mut search = FuzzySearch::new();
        // All terms must match
        assert!(search
            .multi_term_match("rotary kiln", "rotary kiln line 3")
            .is_some());
        assert!(search
            .multi_term_match("rotary xyz", "rotary kiln line 3")
            .is_none());
    }

    #[test]
    fn test_case_insensitive() {
        let mut search = FuzzySearch::new();
        assert!(search.multi_term_match("KILN", "rotary kiln").is_some());
        assert!(search.multi_term_match("Kiln", "ROTARY KILN").is_some());
    }
}
