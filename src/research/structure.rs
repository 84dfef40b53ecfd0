use serde::Serialize;

use crate::languages::LanguageConfig;
use crate::matching::find_topic_forms_in_string;
use crate::paper::Paper;
use crate::researcher::Researcher;
use crate::tokenizer::{count_words, is_word_char};
use crate::tree::Node;

/// Length of a stretch of text: words, or word characters for languages
/// written without spaces between words.
pub(crate) fn text_length(text: &str, language: &LanguageConfig) -> usize {
    if language.whitespace_delimited {
        count_words(text)
    } else {
        text.chars().filter(|&c| is_word_char(c)).count()
    }
}

fn is_subheading(node: &Node<'_>) -> bool {
    node.heading_level().is_some_and(|level| level >= 2)
}

pub fn word_count_in_text(paper: &Paper, researcher: &Researcher) -> usize {
    let language = researcher.language();
    researcher
        .tree(paper)
        .sentences()
        .iter()
        .map(|s| text_length(&s.text, language))
        .sum()
}

/// An `h1` and its position among the document's blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    pub text: String,
    pub position: usize,
}

/// All `h1` elements with their block position; 0 is the first block.
pub fn h1s(paper: &Paper, researcher: &Researcher) -> Vec<Heading> {
    let tree = researcher.tree(paper);
    tree.find_all(|n| n.is_block() || n.heading_level().is_some())
        .into_iter()
        .enumerate()
        .filter(|(_, n)| n.heading_level() == Some(1))
        .map(|(position, n)| Heading {
            text: n.inner_text().trim().to_string(),
            position,
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubheadingsKeyword {
    /// Number of `h2` and `h3` subheadings.
    pub count: usize,
    /// Subheadings that reflect the topic.
    pub matches: usize,
    pub percent_reflecting_topic: f64,
}

/// Count the `h2`/`h3` subheadings containing more than half of the
/// keyphrase's (or a synonym's) content words.
pub fn match_keyword_in_subheadings(paper: &Paper, researcher: &Researcher) -> SubheadingsKeyword {
    let topic_forms = researcher.topic_forms(paper);
    let tree = researcher.tree(paper);
    let subheadings = tree.find_all(|n| matches!(n.heading_level(), Some(2 | 3)));
    let mut result = SubheadingsKeyword {
        count: subheadings.len(),
        ..Default::default()
    };
    if topic_forms.is_empty() || subheadings.is_empty() {
        return result;
    }
    let matcher = researcher.matcher();
    result.matches = subheadings
        .iter()
        .filter(|h| {
            find_topic_forms_in_string(&topic_forms, &h.inner_text(), true, matcher)
                .percent_word_matches
                > 50
        })
        .count();
    result.percent_reflecting_topic = result.matches as f64 / result.count as f64 * 100.0;
    result
}

/// The text following a subheading, up to the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubheadingText {
    /// `None` for the text before the first subheading.
    pub subheading: Option<String>,
    pub text: String,
    pub count_length: usize,
}

/// Split the text into sections at `h2`..`h6` and measure each section.
pub fn get_subheading_text_lengths(paper: &Paper, researcher: &Researcher) -> Vec<SubheadingText> {
    let language = researcher.language();
    let tree = researcher.tree(paper);
    let mut sections: Vec<SubheadingText> = Vec::new();

    for node in tree.root().descendants() {
        if is_subheading(&node) {
            sections.push(SubheadingText {
                subheading: Some(node.inner_text().trim().to_string()),
                text: String::new(),
                count_length: 0,
            });
            continue;
        }
        if node.sentences().is_empty() || node.heading_level().is_some() {
            continue;
        }
        if sections.is_empty() {
            sections.push(SubheadingText {
                subheading: None,
                text: String::new(),
                count_length: 0,
            });
        }
        if let Some(section) = sections.last_mut() {
            for sentence in node.sentences() {
                let sentence = sentence.text.trim();
                if !section.text.is_empty() {
                    section.text.push(' ');
                }
                section.text.push_str(sentence);
                section.count_length += text_length(sentence, language);
            }
        }
    }
    sections
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphLength {
    pub text: String,
    pub count_length: usize,
}

/// Length of every non-empty paragraph, explicit or implicit.
pub fn get_paragraph_length(paper: &Paper, researcher: &Researcher) -> Vec<ParagraphLength> {
    let language = researcher.language();
    researcher
        .tree(paper)
        .paragraphs()
        .into_iter()
        .map(|p| {
            let text = p.inner_text().trim().to_string();
            ParagraphLength {
                count_length: text_length(&text, language),
                text,
            }
        })
        .filter(|p| p.count_length > 0)
        .collect()
}

/// True when the text contains an ordered or unordered list.
pub fn find_list(paper: &Paper, researcher: &Researcher) -> bool {
    !researcher
        .tree(paper)
        .find_all(|n| matches!(n.name(), "ul" | "ol"))
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn researcher(paper: &Paper) -> Researcher {
        Researcher::for_paper(paper)
    }

    #[test]
    fn test_word_count_in_text() {
        let paper = Paper::new("<h1>A title</h1><p>One two, three. Four!</p>Five");
        assert_eq!(word_count_in_text(&paper, &researcher(&paper)), 7);
        let empty = Paper::new("");
        assert_eq!(word_count_in_text(&empty, &researcher(&empty)), 0);
    }

    #[test]
    fn test_word_count_japanese_counts_characters() {
        let paper = Paper::new("<p>猫が好きです。</p>").with_locale("ja");
        assert_eq!(word_count_in_text(&paper, &researcher(&paper)), 6);
    }

    #[test]
    fn test_h1s_positions() {
        let paper = Paper::new("<h1>First</h1><p>Text.</p><h1>Second</h1>");
        let headings = h1s(&paper, &researcher(&paper));
        assert_eq!(
            headings,
            vec![
                Heading { text: "First".into(), position: 0 },
                Heading { text: "Second".into(), position: 2 },
            ]
        );
    }

    #[test]
    fn test_subheadings_keyword() {
        let paper = Paper::new(
            "<h2>All about cat food</h2><p>x</p><h3>Cat toys</h3><h2>Dogs</h2><h4>cat food</h4>",
        )
        .with_keyword("cat food");
        let result = match_keyword_in_subheadings(&paper, &researcher(&paper));
        assert_eq!(result.count, 3);
        assert_eq!(result.matches, 1);
        assert!((result.percent_reflecting_topic - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_subheadings_keyword_without_keyphrase() {
        let paper = Paper::new("<h2>Cats</h2>");
        let result = match_keyword_in_subheadings(&paper, &researcher(&paper));
        assert_eq!(result.count, 1);
        assert_eq!(result.matches, 0);
    }

    #[test]
    fn test_subheading_text_lengths() {
        let paper = Paper::new(
            "<p>Intro text here.</p><h2>Part one</h2><p>One two.</p><p>Three.</p><h3>Part two</h3>",
        );
        let sections = get_subheading_text_lengths(&paper, &researcher(&paper));
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].subheading, None);
        assert_eq!(sections[0].count_length, 3);
        assert_eq!(sections[1].subheading.as_deref(), Some("Part one"));
        assert_eq!(sections[1].text, "One two. Three.");
        assert_eq!(sections[1].count_length, 3);
        assert_eq!(sections[2].count_length, 0);
    }

    #[test]
    fn test_paragraph_lengths() {
        let paper = Paper::new("<p>One two three.</p><p> </p><div>Four five</div>");
        let paragraphs = get_paragraph_length(&paper, &researcher(&paper));
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].count_length, 3);
        assert_eq!(paragraphs[1].text, "Four five");
    }

    #[test]
    fn test_find_list() {
        let paper = Paper::new("<p>Text</p><ol><li>One</li></ol>");
        assert!(find_list(&paper, &researcher(&paper)));
        let paper = Paper::new("<p>Text</p>");
        assert!(!find_list(&paper, &researcher(&paper)));
    }
}
