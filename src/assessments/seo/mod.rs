//! Assessments of how well the text is optimised for its keyphrase.

mod images;
mod keyphrase;
mod links;
mod metadata;
mod structure;

pub use images::{ImageCountAssessment, ImageKeyphraseAssessment};
pub use keyphrase::{
    FunctionWordsInKeyphraseAssessment, KeyphraseLengthAssessment, KeywordDensityAssessment,
};
pub use links::{ExternalLinksAssessment, InternalLinksAssessment, TextCompetingLinksAssessment};
pub use metadata::{
    KeyphraseInSeoTitleAssessment, MetaDescriptionKeywordAssessment,
    MetaDescriptionLengthAssessment, SlugKeywordAssessment, TitleWidthAssessment,
};
pub use structure::{
    IntroductionKeywordAssessment, SingleH1Assessment, SubheadingsKeywordAssessment,
    TextLengthAssessment,
};
