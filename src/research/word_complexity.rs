use serde::Serialize;

use crate::languages::WordComplexityConfig;
use crate::paper::Paper;
use crate::researcher::Researcher;
use crate::sanitize::{remove_html_blocks, strip_html_tags};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplexWordsInSentence {
    pub complex_words: Vec<String>,
    pub sentence: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordComplexityResult {
    pub complex_words: Vec<ComplexWordsInSentence>,
    /// Complex words as a share of all words, rounded to two decimals.
    pub percentage: f64,
}

/// A long word that is neither capitalized nor frequent. A trailing `s`
/// is dropped before the frequency lookup so plurals of frequent words
/// do not count.
fn is_complex(word: &str, config: &WordComplexityConfig) -> bool {
    if word.chars().count() <= config.word_length {
        return false;
    }
    if word.chars().next().is_some_and(char::is_uppercase) {
        return false;
    }
    let lower = word.to_lowercase();
    if config.frequent_words.contains(&lower) {
        return false;
    }
    !lower
        .strip_suffix('s')
        .is_some_and(|singular| config.frequent_words.contains(singular))
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Find the complex content words of every sentence. Sentences without
/// complex words are left out.
///
/// Function words are never complex. Languages without complexity data
/// yield an empty result.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(locale = %paper.locale)))]
pub fn word_complexity(paper: &Paper, researcher: &Researcher) -> WordComplexityResult {
    let language = researcher.language();
    let Some(config) = &language.word_complexity else {
        return WordComplexityResult::default();
    };
    let text = strip_html_tags(&remove_html_blocks(&paper.text));
    let sentences = researcher.sentences(&text);

    let mut total_words = 0;
    let mut total_complex = 0;
    let mut complex_words = Vec::with_capacity(sentences.len());
    for sentence in sentences.iter() {
        let words: Vec<&str> = sentence.words().collect();
        total_words += words.len();
        let complex: Vec<String> = words
            .into_iter()
            .filter(|w| !language.is_function_word(w))
            .filter(|w| is_complex(w, config))
            .map(str::to_string)
            .collect();
        if complex.is_empty() {
            continue;
        }
        total_complex += complex.len();
        complex_words.push(ComplexWordsInSentence {
            complex_words: complex,
            sentence: sentence.text.trim().to_string(),
        });
    }

    let percentage = if total_words == 0 {
        0.0
    } else {
        round_to_hundredths(total_complex as f64 / total_words as f64 * 100.0)
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(total_words, total_complex, percentage, "word complexity");

    WordComplexityResult {
        complex_words,
        percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> WordComplexityConfig {
        WordComplexityConfig {
            frequent_words: ["interesting", "question"].iter().map(|s| s.to_string()).collect(),
            word_length: 7,
        }
    }

    #[test]
    fn test_is_complex() {
        let config = config();
        assert!(is_complex("ubiquitous", &config));
        assert!(!is_complex("simple", &config));
        assert!(!is_complex("Ubiquitous", &config));
        assert!(!is_complex("interesting", &config));
        assert!(!is_complex("questions", &config));
    }

    #[test]
    fn test_percentage_and_sentences() {
        let paper = Paper::new(
            "<p>The ubiquitous cat. An interesting dog.</p><script>ubiquitous</script>",
        );
        let result = word_complexity(&paper, &Researcher::for_paper(&paper));
        assert_eq!(result.complex_words.len(), 1);
        assert_eq!(result.complex_words[0].complex_words, vec!["ubiquitous"]);
        assert_eq!(result.complex_words[0].sentence, "The ubiquitous cat.");
        assert!((result.percentage - 16.67).abs() < 1e-9);
    }

    #[test]
    fn test_sentences_without_complex_words_are_dropped() {
        let paper = Paper::new("<p>The cat sat. A ubiquitous phenomenon.</p>");
        let result = word_complexity(&paper, &Researcher::for_paper(&paper));
        assert_eq!(
            result.complex_words,
            vec![ComplexWordsInSentence {
                complex_words: vec!["ubiquitous".to_string(), "phenomenon".to_string()],
                sentence: "A ubiquitous phenomenon.".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_text() {
        let paper = Paper::new("");
        assert_eq!(
            word_complexity(&paper, &Researcher::for_paper(&paper)),
            WordComplexityResult::default()
        );
    }

    #[test]
    fn test_language_without_data() {
        let paper = Paper::new("<p>Ubiquitously ubiquitous.</p>").with_locale("nl_NL");
        let result = word_complexity(&paper, &Researcher::for_paper(&paper));
        assert!(result.complex_words.is_empty());
        assert_eq!(result.percentage, 0.0);
    }

    #[test]
    fn test_rounding() {
        assert_eq!(round_to_hundredths(100.0 / 3.0), 33.33);
        assert_eq!(round_to_hundredths(200.0 / 3.0), 66.67);
    }
}
