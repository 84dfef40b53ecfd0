//! Matching topic words against text.
//!
//! A [`WordMatcher`] finds the occurrences of one word form in a text.
//! Whitespace-delimited languages use [`BoundaryMatcher`]; Japanese and
//! other scripts without word separators use [`SubstringMatcher`].

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::morphology::TopicForms;
use crate::sanitize::normalize_quote;

/// Characters that separate words, besides whitespace.
const WORD_BOUNDARIES: &[char] = &[
    '.', ',', '(', ')', '[', ']', '{', '}', '"', '“', '”', '〝', '〞', '〟', '‟', '„', '+', '-',
    '–', '—', ';', '!', '¡', '?', '¿', ':', '/', '\\', '»', '«', '‹', '›', '<', '>', '…', '*',
    '|', '&', '\u{060C}', '\u{061B}', '\u{061F}', '\u{06D4}', '\u{200B}', '\u{200E}', '\u{200F}',
];

/// Finds occurrences of a word form in a text.
///
/// Implementations compare case-insensitively and report each occurrence
/// with its character offset and the matched text, lowercased.
pub trait WordMatcher: fmt::Debug + Send + Sync {
    fn find_word(&self, text: &str, word: &str) -> Vec<(usize, String)>;

    fn match_word(&self, text: &str, word: &str) -> Vec<String> {
        self.find_word(text, word).into_iter().map(|(_, m)| m).collect()
    }
}

/// Matches whole words: an occurrence counts only when it is bounded by
/// whitespace, punctuation or the edges of the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundaryMatcher;

/// Matches any occurrence, with no boundary requirement.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringMatcher;

pub(crate) static BOUNDARY_MATCHER: BoundaryMatcher = BoundaryMatcher;
pub(crate) static SUBSTRING_MATCHER: SubstringMatcher = SubstringMatcher;

/// Lowercase, ASCII quotes, and every whitespace character as a plain space.
///
/// Also returns, for every byte of the normalised text, the index of the
/// source character it came from: lowercasing can turn one character into
/// several.
fn normalize_for_match(text: &str) -> (String, Vec<usize>) {
    let mut normalized = String::with_capacity(text.len());
    let mut source = Vec::with_capacity(text.len());
    for (index, c) in text.chars().enumerate() {
        for lower in c.to_lowercase() {
            let lower = if lower.is_whitespace() { ' ' } else { normalize_quote(lower) };
            normalized.push(lower);
            source.resize(normalized.len(), index);
        }
    }
    (normalized, source)
}

pub(crate) fn is_word_boundary(c: char) -> bool {
    c.is_whitespace() || WORD_BOUNDARIES.contains(&c)
}

fn find_occurrences(text: &str, word: &str, bounded: bool) -> Vec<(usize, String)> {
    let (haystack, source) = normalize_for_match(text);
    let (needle, _) = normalize_for_match(word.trim());
    if needle.is_empty() {
        return Vec::new();
    }
    haystack
        .match_indices(&needle)
        .filter(|&(pos, m)| {
            if !bounded {
                return true;
            }
            let before = haystack[..pos].chars().next_back();
            let after = haystack[pos + m.len()..].chars().next();
            before.map_or(true, is_word_boundary) && after.map_or(true, is_word_boundary)
        })
        .map(|(pos, m)| (source[pos], m.to_string()))
        .collect()
}

impl WordMatcher for BoundaryMatcher {
    fn find_word(&self, text: &str, word: &str) -> Vec<(usize, String)> {
        find_occurrences(text, word, true)
    }
}

impl WordMatcher for SubstringMatcher {
    fn find_word(&self, text: &str, word: &str) -> Vec<(usize, String)> {
        find_occurrences(text, word, false)
    }
}

/// Character offset of the first occurrence of `phrase` in `text`.
pub fn phrase_position(text: &str, phrase: &str, matcher: &dyn WordMatcher) -> Option<usize> {
    matcher.find_word(text, phrase).first().map(|&(pos, _)| pos)
}

/// Total occurrences of a set of forms in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    pub count: usize,
    pub matches: Vec<String>,
}

/// Count the occurrences of a single word or phrase.
pub fn match_text_with_word(text: &str, word: &str, matcher: &dyn WordMatcher) -> MatchResult {
    let matches = matcher.match_word(text, word);
    MatchResult {
        count: matches.len(),
        matches,
    }
}

/// Count every occurrence of every distinct form in `forms`.
pub fn match_text_with_array(
    text: &str,
    forms: &[String],
    matcher: &dyn WordMatcher,
) -> MatchResult {
    let mut seen = HashSet::new();
    let mut result = MatchResult::default();
    for form in forms {
        if !seen.insert(form.to_lowercase()) {
            continue;
        }
        let found = matcher.match_word(text, form);
        result.count += found.len();
        result.matches.extend(found);
    }
    result
}

/// Which topic a match was made with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicKind {
    Keyphrase,
    Synonym,
}

/// How many words of a phrase were found in a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordFormsMatch {
    /// Number of phrase words with at least one matching form.
    pub count_word_matches: usize,
    /// `count_word_matches` as a rounded percentage of the phrase's words.
    pub percent_word_matches: u32,
    pub matches: Vec<String>,
}

/// Check each word of a phrase (given as its list of forms) against `text`.
pub fn find_word_forms_in_string(
    word_forms: &[Vec<String>],
    text: &str,
    matcher: &dyn WordMatcher,
) -> WordFormsMatch {
    let mut result = WordFormsMatch::default();
    for forms in word_forms {
        let found = match_text_with_array(text, forms, matcher);
        if found.count > 0 {
            result.count_word_matches += 1;
            result.matches.extend(found.matches);
        }
    }
    result.percent_word_matches = percentage(result.count_word_matches, word_forms.len());
    result
}

/// Keyphrase or synonym match of a text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicMatch {
    pub count_word_matches: usize,
    pub percent_word_matches: u32,
    /// `None` when nothing was found.
    pub keyphrase_or_synonym: Option<TopicKind>,
    pub matches: Vec<String>,
}

/// Match the keyphrase against `text`, then, if it is not fully found and
/// `use_synonyms` is set, each synonym. A synonym wins only if it matches a
/// strictly higher share of its words; among synonyms the first best wins.
pub fn find_topic_forms_in_string(
    topic_forms: &TopicForms,
    text: &str,
    use_synonyms: bool,
    matcher: &dyn WordMatcher,
) -> TopicMatch {
    let keyphrase = find_word_forms_in_string(&topic_forms.keyphrase_forms, text, matcher);
    let mut best = (keyphrase, TopicKind::Keyphrase);

    if best.0.percent_word_matches < 100 && use_synonyms {
        let mut best_synonym: Option<WordFormsMatch> = None;
        for synonym in &topic_forms.synonyms_forms {
            let found = find_word_forms_in_string(synonym, text, matcher);
            let better = best_synonym
                .as_ref()
                .map_or(true, |b| found.percent_word_matches > b.percent_word_matches);
            if better {
                best_synonym = Some(found);
            }
        }
        if let Some(synonym) = best_synonym {
            if synonym.percent_word_matches > best.0.percent_word_matches {
                best = (synonym, TopicKind::Synonym);
            }
        }
    }

    let (found, kind) = best;
    TopicMatch {
        keyphrase_or_synonym: (found.count_word_matches > 0).then_some(kind),
        count_word_matches: found.count_word_matches,
        percent_word_matches: found.percent_word_matches,
        matches: found.matches,
    }
}

/// `part / total` as a rounded percentage; 0 when `total` is 0.
pub(crate) fn percentage(part: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((part as f64 / total as f64) * 100.0).round() as u32
}
