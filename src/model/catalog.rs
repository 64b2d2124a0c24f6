//! The built-in word catalog.

use super::word_block::{PartOfSpeech, WordBlock};

const SONG: &str = "Lean on Me";
const ARTIST: &str = "Bill Withers";

const fn block(word: &'static str, lyric: &'static str, part_of_speech: PartOfSpeech) -> WordBlock {
    WordBlock {
        word,
        song: SONG,
        artist: ARTIST,
        lyric,
        part_of_speech,
    }
}

static CATALOG: [WordBlock; 12] = [
    block(
        "friend",
        "You just call on me brother, when you need a friend",
        PartOfSpeech::Noun,
    ),
    block(
        "end",
        "I'll help you carry on, for it won't be long 'til I'm gonna need somebody to lean on",
        PartOfSpeech::Noun,
    ),
    block(
        "send",
        "Please swallow your pride if I have things you need to borrow, for no one can fill those of your needs that you won't let show",
        PartOfSpeech::Verb,
    ),
    block(
        "lean",
        "Lean on me when you're not strong, and I'll be your friend",
        PartOfSpeech::Verb,
    ),
    block(
        "strong",
        "Lean on me when you're not strong, and I'll be your friend",
        PartOfSpeech::Adjective,
    ),
    block(
        "proud",
        "If there is a load you have to bear that you can't carry, I'm right up the road, I'll share your load",
        PartOfSpeech::Adjective,
    ),
    block(
        "carry",
        "So just call on me brother, when you need a hand, we all need somebody to lean on",
        PartOfSpeech::Verb,
    ),
    block(
        "swallow",
        "Please swallow your pride if I have things you need to borrow, for no one can fill those of your needs that you won't let show",
        PartOfSpeech::Verb,
    ),
    block(
        "need",
        "Lean on me when you're not strong, and I'll be your friend, I'll help you carry on",
        PartOfSpeech::Verb,
    ),
    block(
        "help",
        "I'll help you carry on, for it won't be long 'til I'm gonna need somebody to lean on",
        PartOfSpeech::Verb,
    ),
    block(
        "call",
        "You just call on me brother, when you need a friend",
        PartOfSpeech::Verb,
    ),
    block(
        "brother",
        "You just call on me brother, when you need a friend",
        PartOfSpeech::Noun,
    ),
];

/// Every word entry, in display order.
pub fn catalog() -> &'static [WordBlock] {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_twelve_entries() {
        assert_eq!(catalog().len(), 12);
    }

    #[test]
    fn words_are_unique() {
        let mut words: Vec<_> = catalog().iter().map(|b| b.word).collect();
        words.sort_unstable();
        words.dedup();
        assert_eq!(words.len(), catalog().len());
    }

    #[test]
    fn first_entry_is_friend() {
        assert_eq!(catalog()[0].word, "friend");
        assert_eq!(catalog()[0].part_of_speech, PartOfSpeech::Noun);
    }
}
