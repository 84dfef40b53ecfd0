//! Assessments of how easy the text is to read.

mod sentences;
mod structure;
mod word_complexity;

pub use sentences::{
    PassiveVoiceAssessment, SentenceBeginningsAssessment, SentenceLengthInTextAssessment,
    TransitionWordsAssessment,
};
pub use structure::{
    ListsPresenceAssessment, ParagraphTooLongAssessment, SubheadingsTooLongAssessment,
    TextPresenceAssessment,
};
pub use word_complexity::WordComplexityAssessment;
