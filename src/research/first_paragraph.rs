use serde::Serialize;

use crate::matching::{find_topic_forms_in_string, TopicKind};
use crate::paper::Paper;
use crate::researcher::Researcher;
use crate::tree::Node;

/// Whether the keyphrase or a synonym appears in the first paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstParagraphResult {
    pub found_in_one_sentence: bool,
    pub found_in_paragraph: bool,
    pub keyphrase_or_synonym: Option<TopicKind>,
}

/// A paragraph counts as the introduction if it has sentences and is not
/// made of links only. Whitespace between the links does not count.
fn is_introduction_candidate(paragraph: &Node<'_>) -> bool {
    if paragraph.sentences().is_empty() {
        return false;
    }
    let mut children = paragraph
        .children()
        .filter(|c| !(c.is_text() && c.value().text.trim().is_empty()))
        .peekable();
    children.peek().is_none() || !children.all(|c| c.name() == "a")
}

/// Check whether all content words of the keyphrase or a synonym occur in
/// one sentence of the first paragraph, or else anywhere in it.
///
/// Empty paragraphs and link-only paragraphs are skipped, as are blocks
/// the tree builder filters out (such as the reading time block).
pub fn find_keyword_in_first_paragraph(
    paper: &Paper,
    researcher: &Researcher,
) -> FirstParagraphResult {
    let topic_forms = researcher.topic_forms(paper);
    if topic_forms.is_empty() {
        return FirstParagraphResult::default();
    }
    let tree = researcher.tree(paper);
    let paragraphs = tree.paragraphs();
    let Some(first) = paragraphs.iter().find(|p| is_introduction_candidate(p)) else {
        return FirstParagraphResult::default();
    };
    let matcher = researcher.matcher();

    let in_sentence = first
        .sentences()
        .iter()
        .map(|s| find_topic_forms_in_string(&topic_forms, &s.text, true, matcher))
        .find(|m| m.percent_word_matches == 100);
    if let Some(found) = in_sentence {
        return FirstParagraphResult {
            found_in_one_sentence: true,
            found_in_paragraph: true,
            keyphrase_or_synonym: found.keyphrase_or_synonym,
        };
    }

    let in_paragraph = find_topic_forms_in_string(&topic_forms, &first.inner_text(), true, matcher);
    if in_paragraph.percent_word_matches == 100 {
        return FirstParagraphResult {
            found_in_one_sentence: false,
            found_in_paragraph: true,
            keyphrase_or_synonym: in_paragraph.keyphrase_or_synonym,
        };
    }
    FirstParagraphResult::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, keyword: &str) -> FirstParagraphResult {
        let paper = Paper::new(text).with_keyword(keyword);
        find_keyword_in_first_paragraph(&paper, &Researcher::for_paper(&paper))
    }

    #[test]
    fn test_found_in_one_sentence() {
        let result = run("<p>A sentence with a keyword. Another one.</p>", "keyword");
        assert!(result.found_in_one_sentence);
        assert!(result.found_in_paragraph);
        assert_eq!(result.keyphrase_or_synonym, Some(TopicKind::Keyphrase));
    }

    #[test]
    fn test_only_first_paragraph_counts() {
        let result = run("<p>Nothing here.</p><p>A keyword here.</p>", "keyword");
        assert_eq!(result, FirstParagraphResult::default());
    }

    #[test]
    fn test_link_only_paragraph_skipped() {
        let result = run(
            "<p><a href='https://example.com'>a link</a> <a href='https://example.org'>another</a></p>\
             <p>The keyword is here.</p>",
            "keyword",
        );
        assert!(result.found_in_one_sentence);
    }

    #[test]
    fn test_empty_keyword() {
        assert_eq!(run("<p>keyword</p>", ""), FirstParagraphResult::default());
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(run("", "keyword"), FirstParagraphResult::default());
    }
}
