//! Result filtering over the word catalog.
//!
//! Linear scan, case-insensitive substring match on the word only.

use crate::model::{FilterOption, WordBlock};

/// Compute the visible results as indices into `blocks`.
///
/// 1. A specific part-of-speech filter keeps only blocks of that part.
/// 2. A non-blank query keeps blocks whose word contains it
///    (case-insensitive, the query itself is not trimmed).
/// 3. When no specific filter is selected and the query matched nothing,
///    every block is shown instead of an empty grid.
pub fn filter_blocks(
    blocks: &[WordBlock],
    query: &str,
    filter: Option<FilterOption>,
) -> Vec<usize> {
    let part = filter.and_then(FilterOption::part_of_speech);

    let by_part: Vec<usize> = blocks
        .iter()
        .enumerate()
        .filter(|(_, block)| part.is_none_or(|p| block.part_of_speech == p))
        .map(|(i, _)| i)
        .collect();

    if query.trim().is_empty() {
        return by_part;
    }

    let query_lower = query.to_lowercase();
    let matches: Vec<usize> = by_part
        .into_iter()
        .filter(|&i| blocks[i].word.to_lowercase().contains(&query_lower))
        .collect();

    if matches.is_empty() && part.is_none() {
        (0..blocks.len()).collect()
    } else {
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog;

    fn words(indices: &[usize]) -> Vec<&'static str> {
        indices.iter().map(|&i| catalog()[i].word).collect()
    }

    #[test]
    fn no_query_no_filter_shows_everything() {
        assert_eq!(filter_blocks(catalog(), "", None).len(), 12);
    }

    #[test]
    fn query_matches_substring_of_word() {
        let result = filter_blocks(catalog(), "end", None);
        assert_eq!(words(&result), vec!["friend", "end", "send"]);
    }

    #[test]
    fn query_is_case_insensitive() {
        let result = filter_blocks(catalog(), "LEAN", None);
        assert_eq!(words(&result), vec!["lean"]);
    }

    #[test]
    fn query_does_not_search_lyrics() {
        // "pride" only appears in lyrics
        let result = filter_blocks(catalog(), "pride", Some(FilterOption::Verb));
        assert!(result.is_empty());
    }

    #[test]
    fn filter_keeps_only_part_of_speech() {
        let result = filter_blocks(catalog(), "", Some(FilterOption::Adjective));
        assert_eq!(words(&result), vec!["strong", "proud"]);
    }

    #[test]
    fn filter_and_query_combine() {
        let result = filter_blocks(catalog(), "end", Some(FilterOption::Noun));
        assert_eq!(words(&result), vec!["friend", "end"]);
    }

    #[test]
    fn unmatched_query_without_filter_falls_back_to_all() {
        assert_eq!(filter_blocks(catalog(), "zzz", None).len(), 12);
    }

    #[test]
    fn unmatched_query_with_all_filter_falls_back_to_all() {
        assert_eq!(
            filter_blocks(catalog(), "zzz", Some(FilterOption::All)).len(),
            12
        );
    }

    #[test]
    fn unmatched_query_with_specific_filter_is_empty() {
        assert!(filter_blocks(catalog(), "zzz", Some(FilterOption::Noun)).is_empty());
    }

    #[test]
    fn whitespace_query_is_ignored() {
        let result = filter_blocks(catalog(), "   ", Some(FilterOption::Noun));
        assert_eq!(words(&result), vec!["friend", "end", "brother"]);
    }

    #[test]
    fn query_with_inner_whitespace_is_not_trimmed() {
        // " end" matches nothing, so the unfiltered fallback applies
        assert_eq!(filter_blocks(catalog(), " end", None).len(), 12);
    }
}
