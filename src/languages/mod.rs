//! Per-language word lists and analysis settings.
//!
//! Lists are embedded at compile time, one word or phrase per line, with
//! `#` comment lines and blank lines ignored. A [`LanguageConfig`] is
//! handed to the [`Researcher`](crate::Researcher) and reaches every
//! research function through it; nothing here is global mutable state.

use std::collections::HashSet;

use crate::error::ScoringError;

/// Code of the fallback configuration used for unsupported locales.
pub const DEFAULT_LANGUAGE: &str = "default";

struct LanguageData {
    function_words: &'static str,
    transition_words: &'static str,
    first_word_exceptions: &'static str,
    passive_voice: Option<PassiveVoiceData>,
    word_complexity: Option<WordComplexityData>,
    sentence_length_limit: usize,
    whitespace_delimited: bool,
}

struct PassiveVoiceData {
    auxiliaries: &'static str,
    irregular_participles: &'static str,
    non_participles: &'static str,
    regular_suffix: &'static str,
}

struct WordComplexityData {
    frequent_words: &'static str,
    word_length: usize,
}

/// All embedded languages: (language_code, data).
const LANGUAGES: &[(&str, LanguageData)] = &[
    (
        "de",
        LanguageData {
            function_words: include_str!("de/function_words.txt"),
            transition_words: include_str!("de/transition_words.txt"),
            first_word_exceptions: include_str!("de/first_word_exceptions.txt"),
            passive_voice: None,
            word_complexity: None,
            sentence_length_limit: 20,
            whitespace_delimited: true,
        },
    ),
    (
        "en",
        LanguageData {
            function_words: include_str!("en/function_words.txt"),
            transition_words: include_str!("en/transition_words.txt"),
            first_word_exceptions: include_str!("en/first_word_exceptions.txt"),
            passive_voice: Some(PassiveVoiceData {
                auxiliaries: include_str!("en/passive_auxiliaries.txt"),
                irregular_participles: include_str!("en/irregular_participles.txt"),
                non_participles: include_str!("en/non_participles.txt"),
                regular_suffix: "ed",
            }),
            word_complexity: Some(WordComplexityData {
                frequent_words: include_str!("en/frequent_words.txt"),
                word_length: 7,
            }),
            sentence_length_limit: 20,
            whitespace_delimited: true,
        },
    ),
    (
        "ja",
        LanguageData {
            function_words: "",
            transition_words: include_str!("ja/transition_words.txt"),
            first_word_exceptions: "",
            passive_voice: None,
            word_complexity: None,
            sentence_length_limit: 40,
            whitespace_delimited: false,
        },
    ),
    (
        "nl",
        LanguageData {
            function_words: include_str!("nl/function_words.txt"),
            transition_words: include_str!("nl/transition_words.txt"),
            first_word_exceptions: include_str!("nl/first_word_exceptions.txt"),
            passive_voice: None,
            word_complexity: None,
            sentence_length_limit: 20,
            whitespace_delimited: true,
        },
    ),
];

/// Passive voice detection data: an auxiliary followed by a participle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PassiveVoiceConfig {
    pub auxiliaries: HashSet<String>,
    pub irregular_participles: HashSet<String>,
    /// Words that carry the regular participle suffix without being participles.
    pub non_participles: HashSet<String>,
    pub regular_suffix: String,
}

impl PassiveVoiceConfig {
    /// Returns true if the lowercased `word` reads as a past participle.
    pub fn is_participle(&self, word: &str) -> bool {
        if self.irregular_participles.contains(word) {
            return true;
        }
        !self.regular_suffix.is_empty()
            && word.ends_with(&self.regular_suffix)
            && word.chars().count() > self.regular_suffix.chars().count() + 1
            && !self.non_participles.contains(word)
    }
}

/// Word complexity data: long words that are not in the frequency list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordComplexityConfig {
    pub frequent_words: HashSet<String>,
    /// Words with more characters than this are candidates for complexity.
    pub word_length: usize,
}

/// Language-specific analysis settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct LanguageConfig {
    /// Two-letter language code, or [`DEFAULT_LANGUAGE`].
    pub code: String,
    pub function_words: HashSet<String>,
    /// Single words and multi-word phrases, lowercased.
    pub transition_words: Vec<String>,
    /// Words skipped when determining the first word of a sentence.
    pub first_word_exceptions: HashSet<String>,
    pub passive_voice: Option<PassiveVoiceConfig>,
    pub word_complexity: Option<WordComplexityConfig>,
    /// Maximum length of a sentence before it counts as long: words, or
    /// characters where words are not whitespace-delimited.
    pub sentence_length_limit: usize,
    /// False for scripts that do not separate words with whitespace (Japanese).
    pub whitespace_delimited: bool,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            code: DEFAULT_LANGUAGE.to_string(),
            function_words: HashSet::new(),
            transition_words: Vec::new(),
            first_word_exceptions: HashSet::new(),
            passive_voice: None,
            word_complexity: None,
            sentence_length_limit: 20,
            whitespace_delimited: true,
        }
    }
}

impl LanguageConfig {
    pub fn with_function_words(mut self, words: impl IntoIterator<Item = String>) -> Self {
        self.function_words = words.into_iter().map(|w| w.to_lowercase()).collect();
        self
    }
    pub fn with_sentence_length_limit(mut self, limit: usize) -> Self {
        self.sentence_length_limit = limit;
        self
    }
    pub fn with_whitespace_delimited(mut self, value: bool) -> Self {
        self.whitespace_delimited = value;
        self
    }

    pub fn has_function_words(&self) -> bool {
        !self.function_words.is_empty()
    }
    pub fn has_transition_words(&self) -> bool {
        !self.transition_words.is_empty()
    }
    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_words.contains(&word.to_lowercase())
    }
}

/// Returns the list of embedded language codes, sorted.
pub fn available_languages() -> Vec<&'static str> {
    LANGUAGES.iter().map(|(code, _)| *code).collect()
}

/// Load the configuration for a language code such as `en` or `nl`.
///
/// Codes are matched case-insensitively; a full locale (`en_US`) is
/// reduced to its language part first.
///
/// # Errors
///
/// Returns [`ScoringError::UnknownLocale`] if no data is embedded for the
/// language.
pub fn get_language(code: &str) -> Result<LanguageConfig, ScoringError> {
    let normalized = code
        .split(['_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    let (code, data) = LANGUAGES
        .iter()
        .find(|(c, _)| *c == normalized)
        .ok_or_else(|| ScoringError::UnknownLocale(code.to_string()))?;
    Ok(build_config(code, data))
}

/// Like [`get_language`], but falls back to the default configuration:
/// no function words, no transition words, whitespace word boundaries.
pub fn get_language_or_default(code: &str) -> LanguageConfig {
    get_language(code).unwrap_or_else(|_err| {
        #[cfg(feature = "tracing")]
        tracing::debug!(locale = code, "no language data, using defaults");
        LanguageConfig::default()
    })
}

fn build_config(code: &str, data: &LanguageData) -> LanguageConfig {
    LanguageConfig {
        code: code.to_string(),
        function_words: parse_word_list(data.function_words).collect(),
        transition_words: parse_word_list(data.transition_words).collect(),
        first_word_exceptions: parse_word_list(data.first_word_exceptions).collect(),
        passive_voice: data.passive_voice.as_ref().map(|p| PassiveVoiceConfig {
            auxiliaries: parse_word_list(p.auxiliaries).collect(),
            irregular_participles: parse_word_list(p.irregular_participles).collect(),
            non_participles: parse_word_list(p.non_participles).collect(),
            regular_suffix: p.regular_suffix.to_string(),
        }),
        word_complexity: data.word_complexity.as_ref().map(|w| WordComplexityConfig {
            frequent_words: parse_word_list(w.frequent_words).collect(),
            word_length: w.word_length,
        }),
        sentence_length_limit: data.sentence_length_limit,
        whitespace_delimited: data.whitespace_delimited,
    }
}

/// Parse list contents: lowercase, trim, skip blank and `#` lines.
fn parse_word_list(contents: &str) -> impl Iterator<Item = String> + '_ {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
}
