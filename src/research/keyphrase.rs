use serde::Serialize;

use crate::matching::match_text_with_array;
use crate::morphology::process_exact_match_request;
use crate::paper::Paper;
use crate::research::structure::word_count_in_text;
use crate::researcher::Researcher;
use crate::tokenizer::get_words;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyphraseLength {
    /// Number of content words; for an exact match, all words of the phrase.
    pub keyphrase_length: usize,
    /// Whether the language has a function word list to filter with.
    pub function_words_available: bool,
}

pub fn keyphrase_length(paper: &Paper, researcher: &Researcher) -> KeyphraseLength {
    let topic_forms = researcher.topic_forms(paper);
    let keyphrase_length = if topic_forms.keyphrase_exact_match {
        get_words(&process_exact_match_request(&paper.keyword).keyphrase).len()
    } else {
        topic_forms.keyphrase_forms.len()
    };
    KeyphraseLength {
        keyphrase_length,
        function_words_available: researcher.language().has_function_words(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyphraseCount {
    /// Full keyphrase occurrences summed over sentences.
    pub count: usize,
    /// Matched word forms, for highlighting.
    pub matches: Vec<String>,
    /// Number of content words in the keyphrase.
    pub keyphrase_length: usize,
}

/// Count keyphrase occurrences.
///
/// A sentence contains the keyphrase as many times as its least frequent
/// content word occurs, and not at all if any content word is missing.
pub fn keyphrase_count(paper: &Paper, researcher: &Researcher) -> KeyphraseCount {
    let topic_forms = researcher.topic_forms(paper);
    let mut result = KeyphraseCount {
        keyphrase_length: topic_forms.keyphrase_forms.len(),
        ..Default::default()
    };
    if topic_forms.is_empty() {
        return result;
    }
    let tree = researcher.tree(paper);
    let matcher = researcher.matcher();
    for sentence in tree.sentences() {
        let found: Vec<_> = topic_forms
            .keyphrase_forms
            .iter()
            .map(|forms| match_text_with_array(&sentence.text, forms, matcher))
            .collect();
        let occurrences = found.iter().map(|f| f.count).min().unwrap_or(0);
        if occurrences > 0 {
            result.count += occurrences;
            result
                .matches
                .extend(found.into_iter().flat_map(|f| f.matches));
        }
    }
    result
}

/// Keyphrase occurrences per hundred words; 0 for an empty text.
pub fn keyphrase_density(paper: &Paper, researcher: &Researcher) -> f64 {
    let words = word_count_in_text(paper, researcher);
    if words == 0 {
        return 0.0;
    }
    keyphrase_count(paper, researcher).count as f64 / words as f64 * 100.0
}

/// True when the keyphrase consists of function words only.
///
/// Always false for exact-match keyphrases and for languages without a
/// function word list.
pub fn function_words_in_keyphrase(paper: &Paper, researcher: &Researcher) -> bool {
    let language = researcher.language();
    if !language.has_function_words() {
        return false;
    }
    let request = process_exact_match_request(&paper.keyword);
    if request.exact_match_requested {
        return false;
    }
    let words = get_words(&request.keyphrase);
    !words.is_empty() && words.iter().all(|w| language.is_function_word(w))
}
