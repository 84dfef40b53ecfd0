//! The per-language registry research functions run against.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::error::ScoringError;
use crate::languages::{get_language_or_default, LanguageConfig};
use crate::matching::{WordMatcher, BOUNDARY_MATCHER, SUBSTRING_MATCHER};
use crate::morphology::{build_topic_forms, LanguageMorphology, MorphologyData, TopicForms};
use crate::paper::Paper;
use crate::research::{self, Finding, ResearchKind};
use crate::tokenizer::{split_into_sentences, Sentence};
use crate::tree::Tree;
use crate::tree_builder::build_tree;

/// Runs research on papers for one language.
///
/// A researcher owns the language configuration, optional morphology data,
/// an optional custom matcher, and memo caches for parsed trees, topic
/// forms and sentence splits. Caches belong to the instance: use one
/// researcher per thread, or one per paper.
pub struct Researcher {
    language: LanguageConfig,
    morphology: Option<Arc<MorphologyData>>,
    matcher: Option<Arc<dyn WordMatcher>>,
    trees: RefCell<HashMap<String, Rc<Tree>>>,
    topic_forms: RefCell<HashMap<(String, String), Rc<TopicForms>>>,
    sentences: RefCell<HashMap<String, Rc<[Sentence]>>>,
}

impl fmt::Debug for Researcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Researcher")
            .field("language", &self.language.code)
            .field("has_morphology", &self.morphology.is_some())
            .field("matcher", &self.matcher)
            .finish_non_exhaustive()
    }
}

impl Researcher {
    pub fn new(language: LanguageConfig) -> Self {
        Self {
            language,
            morphology: None,
            matcher: None,
            trees: RefCell::default(),
            topic_forms: RefCell::default(),
            sentences: RefCell::default(),
        }
    }

    /// Researcher for a locale such as `en_US`, falling back to the
    /// default language configuration for unsupported locales.
    pub fn for_locale(locale: &str) -> Self {
        Self::new(get_language_or_default(locale))
    }

    /// Researcher for the paper's locale.
    pub fn for_paper(paper: &Paper) -> Self {
        Self::for_locale(&paper.locale)
    }

    pub fn with_morphology(mut self, morphology: impl Into<Arc<MorphologyData>>) -> Self {
        self.morphology = Some(morphology.into());
        self.topic_forms.get_mut().clear();
        self
    }

    /// Replace the language's default matcher.
    pub fn with_matcher(mut self, matcher: impl WordMatcher + 'static) -> Self {
        self.matcher = Some(Arc::new(matcher));
        self
    }

    pub fn language(&self) -> &LanguageConfig {
        &self.language
    }

    /// Morphology for this researcher's language, if any was supplied.
    pub fn morphology(&self) -> Option<&LanguageMorphology> {
        self.morphology
            .as_deref()
            .and_then(|m| m.for_language(&self.language.code))
    }

    /// The custom matcher if one was set, otherwise substring matching for
    /// languages without word separators and whole-word matching for the rest.
    pub fn matcher(&self) -> &dyn WordMatcher {
        match &self.matcher {
            Some(matcher) => matcher.as_ref(),
            None if !self.language.whitespace_delimited => &SUBSTRING_MATCHER,
            None => &BOUNDARY_MATCHER,
        }
    }

    /// The paper's parsed tree, built once per distinct text.
    pub fn tree(&self, paper: &Paper) -> Rc<Tree> {
        if let Some(tree) = self.trees.borrow().get(&paper.text) {
            return Rc::clone(tree);
        }
        let tree = Rc::new(build_tree(&paper.text));
        self.trees
            .borrow_mut()
            .insert(paper.text.clone(), Rc::clone(&tree));
        tree
    }

    /// Topic forms of the paper's keyphrase and synonyms.
    pub fn topic_forms(&self, paper: &Paper) -> Rc<TopicForms> {
        let key = (paper.keyword.clone(), paper.synonyms.clone());
        if let Some(forms) = self.topic_forms.borrow().get(&key) {
            return Rc::clone(forms);
        }
        let forms = Rc::new(build_topic_forms(
            &paper.keyword,
            &paper.synonyms,
            &self.language,
            self.morphology(),
        ));
        #[cfg(feature = "tracing")]
        tracing::debug!(
            keyphrase = %paper.keyword,
            words = forms.keyphrase_forms.len(),
            synonyms = forms.synonyms_forms.len(),
            has_morphology = forms.has_morphology,
            "built topic forms"
        );
        self.topic_forms.borrow_mut().insert(key, Rc::clone(&forms));
        forms
    }

    /// Sentences of a plain text, split once per distinct text.
    pub fn sentences(&self, text: &str) -> Rc<[Sentence]> {
        if let Some(sentences) = self.sentences.borrow().get(text) {
            return Rc::clone(sentences);
        }
        let sentences: Rc<[Sentence]> = split_into_sentences(text).into();
        self.sentences
            .borrow_mut()
            .insert(text.to_string(), Rc::clone(&sentences));
        sentences
    }

    /// Whether the research exists and the language has the data it needs.
    pub fn has_research(&self, name: &str) -> bool {
        let Ok(kind) = name.parse::<ResearchKind>() else {
            return false;
        };
        match kind {
            ResearchKind::GetPassiveVoiceResult => self.language.passive_voice.is_some(),
            ResearchKind::FindTransitionWords => self.language.has_transition_words(),
            ResearchKind::FunctionWordsInKeyphrase => self.language.has_function_words(),
            ResearchKind::WordComplexity => self.language.word_complexity.is_some(),
            _ => true,
        }
    }

    /// Run a research by name.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::UnknownResearch`] for a name no research has.
    pub fn get_research(&self, name: &str, paper: &Paper) -> Result<Finding, ScoringError> {
        let kind = name.parse::<ResearchKind>()?;
        Ok(self.research(kind, paper))
    }

    pub fn research(&self, kind: ResearchKind, paper: &Paper) -> Finding {
        match kind {
            ResearchKind::Morphology => {
                Finding::TopicForms(TopicForms::clone(&self.topic_forms(paper)))
            }
            ResearchKind::FindKeywordInFirstParagraph => {
                Finding::FirstParagraph(research::find_keyword_in_first_paragraph(paper, self))
            }
            ResearchKind::GetAnchorsWithKeyphrase => {
                Finding::AnchorsWithKeyphrase(research::get_anchors_with_keyphrase(paper, self))
            }
            ResearchKind::WordComplexity => {
                Finding::WordComplexity(research::word_complexity(paper, self))
            }
            ResearchKind::KeyphraseLength => {
                Finding::KeyphraseLength(research::keyphrase_length(paper, self))
            }
            ResearchKind::KeyphraseCount => {
                Finding::KeyphraseCount(research::keyphrase_count(paper, self))
            }
            ResearchKind::GetKeyphraseDensity => {
                Finding::Percentage(research::keyphrase_density(paper, self))
            }
            ResearchKind::MetaDescriptionKeyword => {
                Finding::SignedCount(research::meta_description_keyword(paper, self))
            }
            ResearchKind::FindKeyphraseInSeoTitle => {
                Finding::SeoTitle(research::find_keyphrase_in_seo_title(paper, self))
            }
            ResearchKind::KeywordCountInSlug => {
                Finding::Slug(research::keyword_count_in_slug(paper, self))
            }
            ResearchKind::MetaDescriptionLength => {
                Finding::Count(research::meta_description_length(paper, self))
            }
            ResearchKind::WordCountInText => {
                Finding::Count(research::word_count_in_text(paper, self))
            }
            ResearchKind::FunctionWordsInKeyphrase => {
                Finding::Flag(research::function_words_in_keyphrase(paper, self))
            }
            ResearchKind::H1s => Finding::Headings(research::h1s(paper, self)),
            ResearchKind::GetLinkStatistics => {
                Finding::LinkStatistics(research::get_link_statistics(paper, self))
            }
            ResearchKind::ImageCount => Finding::Count(research::image_count(paper, self)),
            ResearchKind::AltTagCount => Finding::AltTags(research::alt_tag_count(paper, self)),
            ResearchKind::MatchKeywordInSubheadings => {
                Finding::SubheadingsKeyword(research::match_keyword_in_subheadings(paper, self))
            }
            ResearchKind::GetSubheadingTextLengths => {
                Finding::SubheadingTexts(research::get_subheading_text_lengths(paper, self))
            }
            ResearchKind::GetParagraphLength => {
                Finding::Paragraphs(research::get_paragraph_length(paper, self))
            }
            ResearchKind::CountSentencesFromText => {
                Finding::SentenceLengths(research::count_sentences_from_text(paper, self))
            }
            ResearchKind::FindTransitionWords => {
                Finding::TransitionWords(research::find_transition_words(paper, self))
            }
            ResearchKind::GetPassiveVoiceResult => {
                Finding::PassiveVoice(research::get_passive_voice_result(paper, self))
            }
            ResearchKind::GetSentenceBeginnings => {
                Finding::SentenceBeginnings(research::get_sentence_beginnings(paper, self))
            }
            ResearchKind::FindList => Finding::Flag(research::find_list(paper, self)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::SubstringMatcher;

    fn paper() -> Paper {
        Paper::new("<p>Walking in nature is good. I walk daily.</p>")
            .with_keyword("walking")
            .with_synonyms("hiking")
    }

    #[test]
    fn test_tree_is_memoised() {
        let paper = paper();
        let researcher = Researcher::for_paper(&paper);
        let first = researcher.tree(&paper);
        let second = researcher.tree(&paper);
        assert!(Rc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_research_is_idempotent() {
        let paper = paper();
        let researcher = Researcher::for_paper(&paper);
        for kind in ResearchKind::ALL {
            assert_eq!(researcher.research(kind, &paper), researcher.research(kind, &paper));
        }
    }

    #[test]
    fn test_get_research_by_name() {
        let paper = paper();
        let researcher = Researcher::for_paper(&paper);
        assert_eq!(
            researcher.get_research("wordCountInText", &paper).unwrap(),
            Finding::Count(8)
        );
        assert!(matches!(
            researcher.get_research("nope", &paper),
            Err(ScoringError::UnknownResearch(_))
        ));
    }

    #[test]
    fn test_has_research_depends_on_language() {
        let en = Researcher::for_locale("en_US");
        assert!(en.has_research("getPassiveVoiceResult"));
        assert!(en.has_research("wordComplexity"));
        let nl = Researcher::for_locale("nl_NL");
        assert!(!nl.has_research("getPassiveVoiceResult"));
        assert!(nl.has_research("findTransitionWords"));
        let other = Researcher::for_locale("xx_XX");
        assert!(!other.has_research("functionWordsInKeyphrase"));
        assert!(!other.has_research("unknownResearch"));
    }

    #[test]
    fn test_matcher_selection() {
        let ja = Researcher::for_locale("ja");
        assert_eq!(ja.matcher().match_word("猫が好き", "猫").len(), 1);
        let en = Researcher::for_locale("en");
        assert!(en.matcher().match_word("concatenate", "cat").is_empty());
        let custom = Researcher::for_locale("en").with_matcher(SubstringMatcher);
        assert_eq!(custom.matcher().match_word("concatenate", "cat").len(), 1);
    }

    #[test]
    fn test_morphology_for_language() {
        let morphology = MorphologyData::new().with_language(
            "en",
            LanguageMorphology::new(vec![vec!["walk".into(), "walking".into()]]),
        );
        let paper = paper().with_keyword("walk");
        let researcher = Researcher::for_paper(&paper).with_morphology(morphology.clone());
        assert!(researcher.morphology().is_some());
        assert_eq!(
            researcher.topic_forms(&paper).keyphrase_forms,
            vec![vec!["walk".to_string(), "walking".to_string()]]
        );
        let nl = Researcher::for_locale("nl").with_morphology(morphology);
        assert!(nl.morphology().is_none());
    }
}
