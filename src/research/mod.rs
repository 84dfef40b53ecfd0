//! Research functions: pure analyses of a [`Paper`](crate::Paper) that
//! produce the findings assessments score.
//!
//! Every function takes `(paper, researcher)` and returns its documented
//! empty finding for empty text, an empty keyphrase or missing structure.

mod anchors;
mod first_paragraph;
mod images;
mod keyphrase;
mod links;
mod metadata;
mod sentences;
mod structure;
mod word_complexity;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ScoringError;
use crate::morphology::TopicForms;

pub use anchors::{get_anchors_with_keyphrase, Anchor, AnchorsWithKeyphrase};
pub use first_paragraph::{find_keyword_in_first_paragraph, FirstParagraphResult};
pub use images::{alt_tag_count, image_count, AltTagCount};
pub use keyphrase::{
    function_words_in_keyphrase, keyphrase_count, keyphrase_density, keyphrase_length,
    KeyphraseCount, KeyphraseLength,
};
pub use links::{are_equal_urls, get_link_statistics, link_type, LinkStatistics, LinkType};
pub use metadata::{
    find_keyphrase_in_seo_title, keyword_count_in_slug, meta_description_keyword,
    meta_description_length, SeoTitleResult, SlugResult,
};
pub use sentences::{
    count_sentences_from_text, find_transition_words, get_passive_voice_result,
    get_sentence_beginnings, PassiveVoiceResult, SentenceBeginning, SentenceLength,
    TransitionSentence, TransitionWordsResult,
};
pub use structure::{
    find_list, get_paragraph_length, get_subheading_text_lengths, h1s,
    match_keyword_in_subheadings, word_count_in_text, Heading, ParagraphLength,
    SubheadingText, SubheadingsKeyword,
};
pub use word_complexity::{word_complexity, ComplexWordsInSentence, WordComplexityResult};

/// Names of every research a [`Researcher`](crate::Researcher) can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResearchKind {
    Morphology,
    FindKeywordInFirstParagraph,
    GetAnchorsWithKeyphrase,
    WordComplexity,
    KeyphraseLength,
    KeyphraseCount,
    GetKeyphraseDensity,
    MetaDescriptionKeyword,
    FindKeyphraseInSeoTitle,
    KeywordCountInSlug,
    MetaDescriptionLength,
    WordCountInText,
    FunctionWordsInKeyphrase,
    H1s,
    GetLinkStatistics,
    ImageCount,
    AltTagCount,
    MatchKeywordInSubheadings,
    GetSubheadingTextLengths,
    GetParagraphLength,
    CountSentencesFromText,
    FindTransitionWords,
    GetPassiveVoiceResult,
    GetSentenceBeginnings,
    FindList,
}

impl ResearchKind {
    pub const ALL: [ResearchKind; 25] = [
        Self::Morphology,
        Self::FindKeywordInFirstParagraph,
        Self::GetAnchorsWithKeyphrase,
        Self::WordComplexity,
        Self::KeyphraseLength,
        Self::KeyphraseCount,
        Self::GetKeyphraseDensity,
        Self::MetaDescriptionKeyword,
        Self::FindKeyphraseInSeoTitle,
        Self::KeywordCountInSlug,
        Self::MetaDescriptionLength,
        Self::WordCountInText,
        Self::FunctionWordsInKeyphrase,
        Self::H1s,
        Self::GetLinkStatistics,
        Self::ImageCount,
        Self::AltTagCount,
        Self::MatchKeywordInSubheadings,
        Self::GetSubheadingTextLengths,
        Self::GetParagraphLength,
        Self::CountSentencesFromText,
        Self::FindTransitionWords,
        Self::GetPassiveVoiceResult,
        Self::GetSentenceBeginnings,
        Self::FindList,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Morphology => "morphology",
            Self::FindKeywordInFirstParagraph => "findKeywordInFirstParagraph",
            Self::GetAnchorsWithKeyphrase => "getAnchorsWithKeyphrase",
            Self::WordComplexity => "wordComplexity",
            Self::KeyphraseLength => "keyphraseLength",
            Self::KeyphraseCount => "keyphraseCount",
            Self::GetKeyphraseDensity => "getKeyphraseDensity",
            Self::MetaDescriptionKeyword => "metaDescriptionKeyword",
            Self::FindKeyphraseInSeoTitle => "findKeyphraseInSEOTitle",
            Self::KeywordCountInSlug => "keywordCountInSlug",
            Self::MetaDescriptionLength => "metaDescriptionLength",
            Self::WordCountInText => "wordCountInText",
            Self::FunctionWordsInKeyphrase => "functionWordsInKeyphrase",
            Self::H1s => "h1s",
            Self::GetLinkStatistics => "getLinkStatistics",
            Self::ImageCount => "imageCount",
            Self::AltTagCount => "altTagCount",
            Self::MatchKeywordInSubheadings => "matchKeywordInSubheadings",
            Self::GetSubheadingTextLengths => "getSubheadingTextLengths",
            Self::GetParagraphLength => "getParagraphLength",
            Self::CountSentencesFromText => "countSentencesFromText",
            Self::FindTransitionWords => "findTransitionWords",
            Self::GetPassiveVoiceResult => "getPassiveVoiceResult",
            Self::GetSentenceBeginnings => "getSentenceBeginnings",
            Self::FindList => "findList",
        }
    }
}

impl fmt::Display for ResearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResearchKind {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ScoringError::UnknownResearch(s.to_string()))
    }
}

/// The result of one research, as returned by string-keyed lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Finding {
    TopicForms(TopicForms),
    FirstParagraph(FirstParagraphResult),
    AnchorsWithKeyphrase(AnchorsWithKeyphrase),
    WordComplexity(WordComplexityResult),
    KeyphraseLength(KeyphraseLength),
    KeyphraseCount(KeyphraseCount),
    SeoTitle(SeoTitleResult),
    Slug(SlugResult),
    Headings(Vec<Heading>),
    LinkStatistics(LinkStatistics),
    AltTags(AltTagCount),
    SubheadingsKeyword(SubheadingsKeyword),
    SubheadingTexts(Vec<SubheadingText>),
    Paragraphs(Vec<ParagraphLength>),
    SentenceLengths(Vec<SentenceLength>),
    TransitionWords(TransitionWordsResult),
    PassiveVoice(PassiveVoiceResult),
    SentenceBeginnings(Vec<SentenceBeginning>),
    Count(usize),
    SignedCount(i64),
    Percentage(f64),
    Flag(bool),
}
