use serde::Serialize;

use crate::matching::find_topic_forms_in_string;
use crate::paper::Paper;
use crate::researcher::Researcher;

/// Images by alt text.
///
/// Without a keyphrase every image with alt text counts as `with_alt`;
/// with one, it counts as `with_alt_keyword` or `with_alt_non_keyword`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AltTagCount {
    pub no_alt: usize,
    pub with_alt: usize,
    pub with_alt_keyword: usize,
    pub with_alt_non_keyword: usize,
}

pub fn image_count(paper: &Paper, researcher: &Researcher) -> usize {
    researcher.tree(paper).find_all(|n| n.name() == "img").len()
}

/// Count image alt texts, and whether they contain the keyphrase.
///
/// For keyphrases of three or more content words, half of the words (or a
/// synonym's words) are enough; shorter keyphrases need all words.
pub fn alt_tag_count(paper: &Paper, researcher: &Researcher) -> AltTagCount {
    let tree = researcher.tree(paper);
    let topic_forms = researcher.topic_forms(paper);
    let matcher = researcher.matcher();
    let required = if topic_forms.keyphrase_forms.len() >= 3 { 50 } else { 100 };

    let mut count = AltTagCount::default();
    for image in tree.find_all(|n| n.name() == "img") {
        let alt = image.attribute("alt").map(str::trim).unwrap_or_default();
        if alt.is_empty() {
            count.no_alt += 1;
        } else if topic_forms.is_empty() {
            count.with_alt += 1;
        } else if find_topic_forms_in_string(&topic_forms, alt, true, matcher).percent_word_matches
            >= required
        {
            count.with_alt_keyword += 1;
        } else {
            count.with_alt_non_keyword += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_count_ignores_filtered_blocks() {
        let paper =
            Paper::new("<p><img src='a'></p><noscript><img src='b'></noscript><img src='c'>");
        assert_eq!(image_count(&paper, &Researcher::for_paper(&paper)), 2);
    }

    #[test]
    fn test_alt_tags_without_keyword() {
        let paper = Paper::new("<img src='a' alt='a cat'><img src='b' alt=''><img src='c'>");
        let count = alt_tag_count(&paper, &Researcher::for_paper(&paper));
        assert_eq!(count.with_alt, 1);
        assert_eq!(count.no_alt, 2);
    }

    #[test]
    fn test_alt_tags_with_keyword() {
        let paper = Paper::new("<img src='a' alt='a black cat'><img src='b' alt='a dog'>")
            .with_keyword("black cat");
        let count = alt_tag_count(&paper, &Researcher::for_paper(&paper));
        assert_eq!(count.with_alt_keyword, 1);
        assert_eq!(count.with_alt_non_keyword, 1);
    }

    #[test]
    fn test_alt_tags_long_keyphrase_half_match() {
        let paper = Paper::new("<img src='a' alt='black cat'>").with_keyword("black cat food bowl");
        let count = alt_tag_count(&paper, &Researcher::for_paper(&paper));
        assert_eq!(count.with_alt_keyword, 1);
    }
}
