//! Splitting a lyric into highlighted and plain runs.

use regex::RegexBuilder;

/// A run of lyric text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LyricSegment<'a> {
    /// The text of this run.
    pub text: &'a str,
    /// Whether the run is an occurrence of the highlighted word.
    pub is_match: bool,
}

/// Split `lyric` around every case-insensitive occurrence of `word`.
///
/// Matches keep the lyric's own casing. The word is matched literally. An
/// empty word yields the whole lyric as one plain run.
pub fn highlight_segments<'a>(lyric: &'a str, word: &str) -> Vec<LyricSegment<'a>> {
    let plain = |text| LyricSegment {
        text,
        is_match: false,
    };

    if word.is_empty() {
        return vec![plain(lyric)];
    }

    let Ok(pattern) = RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
    else {
        return vec![plain(lyric)];
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for found in pattern.find_iter(lyric) {
        if found.start() > last {
            segments.push(plain(&lyric[last..found.start()]));
        }
        segments.push(LyricSegment {
            text: found.as_str(),
            is_match: true,
        });
        last = found.end();
    }
    if last < lyric.len() || segments.is_empty() {
        segments.push(plain(&lyric[last..]));
    }
    segments
}
