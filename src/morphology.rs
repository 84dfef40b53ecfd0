//! Topic forms: the keyphrase and synonyms broken into words, each with
//! every inflected form that should count as a match.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ScoringError;
use crate::languages::LanguageConfig;
use crate::sanitize::normalize_quotes;
use crate::tokenizer::get_words;

/// Quote pairs that request an exact match when they wrap a whole phrase.
const EXACT_MATCH_QUOTES: &[(char, char)] = &[
    ('"', '"'),
    ('“', '”'),
    ('„', '“'),
    ('„', '”'),
    ('‟', '”'),
    ('〝', '〞'),
    ('〝', '〟'),
    ('「', '」'),
    ('『', '』'),
];

/// Separators between synonym phrases.
const SYNONYM_SEPARATORS: &[char] = &[',', ';', '、', '，'];

/// Inflection paradigms for one language.
///
/// Every paradigm is a list of forms of one word (`walk`, `walks`,
/// `walking`, `walked`). Looking up any member yields the whole list.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(from = "RawLanguageMorphology")]
pub struct LanguageMorphology {
    paradigms: Vec<Vec<String>>,
    index: HashMap<String, usize>,
}

#[derive(Deserialize)]
struct RawLanguageMorphology {
    #[serde(default)]
    paradigms: Vec<Vec<String>>,
}

impl From<RawLanguageMorphology> for LanguageMorphology {
    fn from(raw: RawLanguageMorphology) -> Self {
        Self::new(raw.paradigms)
    }
}

impl LanguageMorphology {
    pub fn new(paradigms: Vec<Vec<String>>) -> Self {
        let paradigms: Vec<Vec<String>> = paradigms
            .into_iter()
            .map(|forms| forms.iter().map(|f| f.to_lowercase()).collect())
            .collect();
        let mut index = HashMap::new();
        for (i, forms) in paradigms.iter().enumerate() {
            for form in forms {
                index.entry(form.clone()).or_insert(i);
            }
        }
        Self { paradigms, index }
    }

    /// All forms of the paradigm `word` belongs to.
    pub fn forms_of(&self, word: &str) -> Option<&[String]> {
        self.index
            .get(&word.to_lowercase())
            .map(|&i| self.paradigms[i].as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.paradigms.is_empty()
    }
}

/// Morphology data keyed by language code, as loaded from JSON:
/// `{"en": {"paradigms": [["walk", "walks", "walking"]]}}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MorphologyData {
    #[serde(flatten)]
    languages: HashMap<String, LanguageMorphology>,
}

impl MorphologyData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse morphology data from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(json).map_err(|source| ScoringError::InvalidConfig {
            name: "morphology".to_string(),
            source,
        })
    }

    pub fn with_language(mut self, code: impl Into<String>, data: LanguageMorphology) -> Self {
        self.languages.insert(code.into(), data);
        self
    }

    pub fn for_language(&self, code: &str) -> Option<&LanguageMorphology> {
        self.languages.get(code).filter(|m| !m.is_empty())
    }
}

/// Result of checking a phrase for exact-match quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExactMatchRequest {
    pub exact_match_requested: bool,
    /// The phrase without its wrapping quotes, trimmed.
    pub keyphrase: String,
}

/// Detect whether `phrase` is wrapped in a matching pair of double quotes
/// (including typographic and Japanese corner brackets).
pub fn process_exact_match_request(phrase: &str) -> ExactMatchRequest {
    let trimmed = phrase.trim();
    let mut chars = trimmed.chars();
    let first = chars.next();
    let last = chars.next_back();
    if let (Some(open), Some(close)) = (first, last) {
        if EXACT_MATCH_QUOTES.contains(&(open, close)) {
            let inner = trimmed[open.len_utf8()..trimmed.len() - close.len_utf8()].trim();
            let nested = inner
                .contains(|c: char| EXACT_MATCH_QUOTES.iter().any(|&(o, e)| c == o || c == e));
            if !inner.is_empty() && !nested {
                return ExactMatchRequest {
                    exact_match_requested: true,
                    keyphrase: inner.to_string(),
                };
            }
        }
    }
    ExactMatchRequest {
        exact_match_requested: false,
        keyphrase: trimmed.to_string(),
    }
}

/// Split a raw synonyms string into trimmed, non-empty phrases.
pub fn parse_synonyms(raw: &str) -> Vec<String> {
    raw.split(SYNONYM_SEPARATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Drop function words from `words`, unless that would leave nothing.
pub fn filter_function_words(words: Vec<String>, function_words: &HashSet<String>) -> Vec<String> {
    let filtered: Vec<String> = words
        .iter()
        .filter(|w| !function_words.contains(&w.to_lowercase()))
        .cloned()
        .collect();
    if filtered.is_empty() {
        words
    } else {
        filtered
    }
}

/// Forms of the keyphrase and of each synonym.
///
/// `keyphrase_forms[i]` holds every accepted form of the keyphrase's i-th
/// content word; `synonyms_forms[j]` is the same structure for synonym j.
/// An exact-match phrase yields a single "word" holding the whole phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicForms {
    pub keyphrase_forms: Vec<Vec<String>>,
    pub synonyms_forms: Vec<Vec<Vec<String>>>,
    pub has_morphology: bool,
    pub keyphrase_exact_match: bool,
    pub synonyms_exact_match: Vec<bool>,
}

impl TopicForms {
    pub fn is_empty(&self) -> bool {
        self.keyphrase_forms.is_empty()
    }
}

/// Build the topic forms for a keyphrase and its synonyms.
///
/// An empty keyphrase yields empty forms, synonyms included: nothing can
/// match without a keyphrase.
pub fn build_topic_forms(
    keyphrase: &str,
    synonyms: &str,
    language: &LanguageConfig,
    morphology: Option<&LanguageMorphology>,
) -> TopicForms {
    if keyphrase.trim().is_empty() {
        return TopicForms::default();
    }
    let (keyphrase_forms, keyphrase_exact_match) = phrase_forms(keyphrase, language, morphology);
    let mut synonyms_forms = Vec::new();
    let mut synonyms_exact_match = Vec::new();
    for synonym in parse_synonyms(synonyms) {
        let (forms, exact) = phrase_forms(&synonym, language, morphology);
        if !forms.is_empty() {
            synonyms_forms.push(forms);
            synonyms_exact_match.push(exact);
        }
    }
    TopicForms {
        keyphrase_forms,
        synonyms_forms,
        has_morphology: morphology.is_some(),
        keyphrase_exact_match,
        synonyms_exact_match,
    }
}

fn phrase_forms(
    phrase: &str,
    language: &LanguageConfig,
    morphology: Option<&LanguageMorphology>,
) -> (Vec<Vec<String>>, bool) {
    let request = process_exact_match_request(phrase);
    if request.exact_match_requested {
        return (vec![vec![normalize_quotes(&request.keyphrase)]], true);
    }

    let mut seen = HashSet::new();
    let words: Vec<String> = get_words(&normalize_quotes(&request.keyphrase))
        .into_iter()
        .map(|w| w.to_lowercase())
        .filter(|w| seen.insert(w.clone()))
        .collect();
    let words = filter_function_words(words, &language.function_words);

    let forms = words
        .into_iter()
        .map(|word| {
            let mut forms = vec![word.clone()];
            if let Some(paradigm) = morphology.and_then(|m| m.forms_of(&word)) {
                forms.extend(paradigm.iter().filter(|f| **f != word).cloned());
            }
            forms
        })
        .collect();
    (forms, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::get_language;
    use pretty_assertions::assert_eq;

    fn english_morphology() -> LanguageMorphology {
        LanguageMorphology::new(vec![
            vec!["walk".into(), "walks".into(), "walking".into(), "walked".into()],
            vec!["benefit".into(), "benefits".into()],
        ])
    }

    #[test]
    fn test_exact_match_quotes() {
        for phrase in [
            "\"cats and dogs\"",
            "“cats and dogs”",
            "„cats and dogs“",
            "〝cats and dogs〞",
            "「cats and dogs」",
        ] {
            let request = process_exact_match_request(phrase);
            assert!(request.exact_match_requested, "{phrase}");
            assert_eq!(request.keyphrase, "cats and dogs");
        }
    }

    #[test]
    fn test_partial_quotes_are_not_exact() {
        for phrase in ["\"cats and dogs", "cats \"and\" dogs", "\"\"", "\"a\" and \"b\""] {
            assert!(!process_exact_match_request(phrase).exact_match_requested, "{phrase}");
        }
    }

    #[test]
    fn test_parse_synonyms() {
        assert_eq!(parse_synonyms("cats, dogs;birds , "), vec!["cats", "dogs", "birds"]);
        assert_eq!(parse_synonyms("猫、犬"), vec!["猫", "犬"]);
        assert!(parse_synonyms("").is_empty());
    }

    #[test]
    fn test_filter_function_words_keeps_all_function_words() {
        let en = get_language("en").unwrap();
        let words = vec!["the".to_string(), "and".to_string()];
        assert_eq!(filter_function_words(words.clone(), &en.function_words), words);
        let words = vec!["walking".to_string(), "in".to_string(), "nature".to_string()];
        assert_eq!(
            filter_function_words(words, &en.function_words),
            vec!["walking", "nature"]
        );
    }

    #[test]
    fn test_topic_forms_with_morphology() {
        let en = get_language("en").unwrap();
        let morphology = english_morphology();
        let forms = build_topic_forms(
            "walking in nature benefits",
            "activity in the nature",
            &en,
            Some(&morphology),
        );
        assert!(forms.has_morphology);
        assert_eq!(
            forms.keyphrase_forms,
            vec![
                vec!["walking", "walk", "walks", "walked"],
                vec!["nature"],
                vec!["benefits", "benefit"],
            ]
        );
        assert_eq!(forms.synonyms_forms, vec![vec![vec!["activity"], vec!["nature"]]]);
        assert_eq!(forms.synonyms_exact_match, vec![false]);
    }

    #[test]
    fn test_topic_forms_exact_match() {
        let en = get_language("en").unwrap();
        let forms = build_topic_forms("\"ASP.NET\"", "", &en, None);
        assert!(forms.keyphrase_exact_match);
        assert_eq!(forms.keyphrase_forms, vec![vec!["ASP.NET"]]);
    }

    #[test]
    fn test_empty_keyphrase_has_no_forms() {
        let en = get_language("en").unwrap();
        let forms = build_topic_forms("  ", "cats", &en, None);
        assert!(forms.is_empty());
        assert!(forms.synonyms_forms.is_empty());
    }

    #[test]
    fn test_morphology_from_json() {
        let data = MorphologyData::from_json(
            r#"{"en": {"paradigms": [["Walk", "walks"]]}, "nl": {"paradigms": []}}"#,
        )
        .unwrap();
        let en = data.for_language("en").unwrap();
        assert_eq!(en.forms_of("WALKS").unwrap(), ["walk", "walks"]);
        assert!(data.for_language("nl").is_none());
        assert!(data.for_language("de").is_none());
    }

    #[test]
    fn test_morphology_from_invalid_json() {
        let err = MorphologyData::from_json("{not json").unwrap_err();
        assert!(matches!(err, ScoringError::InvalidConfig { .. }));
    }
}
