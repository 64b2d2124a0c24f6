//! Word entries and the part-of-speech filter.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Grammatical category of a word entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// A naming word.
    Noun,
    /// An action word.
    Verb,
    /// A describing word.
    Adjective,
    /// A word modifying a verb or adjective.
    Adverb,
}

impl PartOfSpeech {
    /// Lowercase name as shown on the result cards.
    pub fn as_str(self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "noun",
            PartOfSpeech::Verb => "verb",
            PartOfSpeech::Adjective => "adjective",
            PartOfSpeech::Adverb => "adverb",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A word taken from a song lyric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordBlock {
    /// The word itself.
    pub word: &'static str,
    /// Song title.
    pub song: &'static str,
    /// Performing artist.
    pub artist: &'static str,
    /// Lyric line the word belongs to.
    pub lyric: &'static str,
    /// Grammatical category.
    pub part_of_speech: PartOfSpeech,
}

/// Entry of the filter dropdown.
///
/// The menu offers only these four options; adverbs can be displayed but not
/// filtered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterOption {
    /// Every part of speech.
    All,
    /// Nouns only.
    Noun,
    /// Verbs only.
    Verb,
    /// Adjectives only.
    Adjective,
}

impl FilterOption {
    /// Menu order.
    pub const MENU: [FilterOption; 4] = [
        FilterOption::All,
        FilterOption::Noun,
        FilterOption::Verb,
        FilterOption::Adjective,
    ];

    /// Label shown in the menu and on the filter button.
    pub fn label(self) -> &'static str {
        match self {
            FilterOption::All => "All",
            FilterOption::Noun => "Noun",
            FilterOption::Verb => "Verb",
            FilterOption::Adjective => "Adjective",
        }
    }

    /// Config/CLI spelling.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOption::All => "all",
            FilterOption::Noun => "noun",
            FilterOption::Verb => "verb",
            FilterOption::Adjective => "adjective",
        }
    }

    /// Part of speech this option restricts to, `None` for [`FilterOption::All`].
    pub fn part_of_speech(self) -> Option<PartOfSpeech> {
        match self {
            FilterOption::All => None,
            FilterOption::Noun => Some(PartOfSpeech::Noun),
            FilterOption::Verb => Some(PartOfSpeech::Verb),
            FilterOption::Adjective => Some(PartOfSpeech::Adjective),
        }
    }

    /// Position in [`FilterOption::MENU`].
    pub fn menu_index(self) -> usize {
        match self {
            FilterOption::All => 0,
            FilterOption::Noun => 1,
            FilterOption::Verb => 2,
            FilterOption::Adjective => 3,
        }
    }
}

/// Unrecognised filter name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown filter '{0}' (expected one of: all, noun, verb, adjective)")]
pub struct InvalidFilter(pub String);

impl FromStr for FilterOption {
    type Err = InvalidFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterOption::All),
            "noun" => Ok(FilterOption::Noun),
            "verb" => Ok(FilterOption::Verb),
            "adjective" => Ok(FilterOption::Adjective),
            _ => Err(InvalidFilter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_case_insensitively() {
        assert_eq!("Verb".parse(), Ok(FilterOption::Verb));
        assert_eq!(" all ".parse(), Ok(FilterOption::All));
    }

    #[test]
    fn adverb_is_not_a_filter() {
        assert_eq!(
            "adverb".parse::<FilterOption>(),
            Err(InvalidFilter("adverb".to_string()))
        );
    }

    #[test]
    fn menu_index_matches_menu_order() {
        for (i, option) in FilterOption::MENU.iter().enumerate() {
            assert_eq!(option.menu_index(), i);
        }
    }

    #[test]
    fn all_has_no_part_of_speech() {
        assert_eq!(FilterOption::All.part_of_speech(), None);
        assert_eq!(
            FilterOption::Adjective.part_of_speech(),
            Some(PartOfSpeech::Adjective)
        );
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for option in FilterOption::MENU {
            assert_eq!(option.as_str().parse(), Ok(option));
        }
    }
}
