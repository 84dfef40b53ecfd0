use serde::Serialize;

use crate::matching::{find_topic_forms_in_string, find_word_forms_in_string, phrase_position};
use crate::morphology::process_exact_match_request;
use crate::paper::Paper;
use crate::researcher::Researcher;
use crate::tokenizer::{get_words, split_into_sentences};

/// Number of meta description sentences that contain the whole keyphrase
/// or a synonym; `-1` when there is no description.
pub fn meta_description_keyword(paper: &Paper, researcher: &Researcher) -> i64 {
    if !paper.has_description() {
        return -1;
    }
    let topic_forms = researcher.topic_forms(paper);
    if topic_forms.is_empty() {
        return 0;
    }
    let matcher = researcher.matcher();
    let found = split_into_sentences(&paper.description)
        .iter()
        .filter(|s| {
            find_topic_forms_in_string(&topic_forms, &s.text, true, matcher).percent_word_matches
                == 100
        })
        .count();
    i64::try_from(found).unwrap_or(i64::MAX)
}

/// Character count of the meta description.
pub fn meta_description_length(paper: &Paper, _researcher: &Researcher) -> usize {
    paper.description.chars().count()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoTitleResult {
    /// The keyphrase occurs in the title as typed (word order included).
    pub exact_match_found: bool,
    /// Every content word of the keyphrase occurs somewhere in the title.
    pub all_words_found: bool,
    /// Character position of the exact match; 0 when only function words precede it.
    pub position: Option<usize>,
    /// The keyphrase was quoted.
    pub exact_match_keyphrase: bool,
}

/// Look for the keyphrase in the SEO title.
pub fn find_keyphrase_in_seo_title(paper: &Paper, researcher: &Researcher) -> SeoTitleResult {
    let mut result = SeoTitleResult::default();
    let request = process_exact_match_request(&paper.keyword);
    if request.keyphrase.is_empty() || !paper.has_title() {
        return result;
    }
    result.exact_match_keyphrase = request.exact_match_requested;
    let language = researcher.language();

    if let Some(position) =
        phrase_position(&paper.title, &request.keyphrase, researcher.matcher())
    {
        result.exact_match_found = true;
        result.all_words_found = true;
        let preceding: String = paper.title.chars().take(position).collect();
        let only_function_words = get_words(&preceding)
            .iter()
            .all(|w| language.is_function_word(w));
        result.position = Some(if only_function_words { 0 } else { position });
        return result;
    }
    if request.exact_match_requested {
        return result;
    }

    let topic_forms = researcher.topic_forms(paper);
    result.all_words_found =
        find_topic_forms_in_string(&topic_forms, &paper.title, false, researcher.matcher())
            .percent_word_matches
            == 100;
    result
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlugResult {
    pub keyphrase_length: usize,
    pub percent_word_matches: u32,
}

/// Share of keyphrase words found in the slug, with `-` and `_` read as spaces.
pub fn keyword_count_in_slug(paper: &Paper, researcher: &Researcher) -> SlugResult {
    let topic_forms = researcher.topic_forms(paper);
    if topic_forms.is_empty() || !paper.has_slug() {
        return SlugResult {
            keyphrase_length: topic_forms.keyphrase_forms.len(),
            percent_word_matches: 0,
        };
    }
    let slug = paper.slug.replace(['-', '_'], " ");
    let found =
        find_word_forms_in_string(&topic_forms.keyphrase_forms, &slug, researcher.matcher());
    SlugResult {
        keyphrase_length: topic_forms.keyphrase_forms.len(),
        percent_word_matches: found.percent_word_matches,
    }
}
