use std::collections::HashSet;

use serde::Serialize;

use crate::matching::{find_topic_forms_in_string, match_text_with_array};
use crate::morphology::{filter_function_words, parse_synonyms, process_exact_match_request};
use crate::paper::Paper;
use crate::research::links::is_linking_to_self;
use crate::researcher::Researcher;
use crate::tokenizer::get_words;

/// An anchor found in the text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub href: Option<String>,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorsWithKeyphrase {
    pub anchors_with_keyphrase: Vec<Anchor>,
    pub anchors_with_keyphrase_count: usize,
}

/// Find anchors whose text is about the keyphrase or a synonym.
///
/// An anchor qualifies when it does not link to the page itself, its text
/// contains every content word of the keyphrase or of a synonym, and every
/// content word of its text belongs to that keyphrase or synonym. For an
/// exact-match topic the anchor words must all occur in the quoted phrase.
pub fn get_anchors_with_keyphrase(paper: &Paper, researcher: &Researcher) -> AnchorsWithKeyphrase {
    if !paper.has_text() || paper.keyword.trim().is_empty() {
        return AnchorsWithKeyphrase::default();
    }
    let tree = researcher.tree(paper);
    let topic_forms = researcher.topic_forms(paper);
    let matcher = researcher.matcher();
    let function_words = &researcher.language().function_words;

    let mut exact_requests: Vec<_> = parse_synonyms(&paper.synonyms)
        .iter()
        .map(|s| process_exact_match_request(s))
        .collect();
    exact_requests.push(process_exact_match_request(&paper.keyword));

    let topics: Vec<Vec<String>> = std::iter::once(&topic_forms.keyphrase_forms)
        .chain(topic_forms.synonyms_forms.iter())
        .map(|forms| forms.iter().flatten().cloned().collect())
        .collect();

    let anchors: Vec<Anchor> = tree
        .find_all(|n| n.name() == "a")
        .into_iter()
        .filter(|a| {
            a.attribute("href")
                .map_or(true, |href| !is_linking_to_self(href, &paper.permalink))
        })
        .map(|a| Anchor {
            href: a.attribute("href").map(str::to_string),
            text: a.inner_text(),
        })
        .filter(|a| {
            find_topic_forms_in_string(&topic_forms, &a.text, true, matcher).percent_word_matches
                == 100
        })
        .filter(|a| {
            let mut seen = HashSet::new();
            let words: Vec<String> = get_words(&a.text)
                .into_iter()
                .map(|w| w.to_lowercase())
                .filter(|w| seen.insert(w.clone()))
                .collect();
            let words = filter_function_words(words, function_words);

            let within_exact = exact_requests.iter().any(|request| {
                let phrase = request.keyphrase.to_lowercase();
                request.exact_match_requested && words.iter().all(|w| phrase.contains(w.as_str()))
            });
            within_exact
                || topics.iter().any(|forms| {
                    words
                        .iter()
                        .all(|w| match_text_with_array(w, forms, matcher).count > 0)
                })
        })
        .collect();

    AnchorsWithKeyphrase {
        anchors_with_keyphrase_count: anchors.len(),
        anchors_with_keyphrase: anchors,
    }
}
