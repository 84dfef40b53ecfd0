//! Keyphrase, SEO and readability scoring for HTML content.
//!
//! `content_scoring` parses HTML into a lightweight tree of paragraphs and
//! sentences, expands the focus keyphrase and its synonyms into their word
//! forms, runs research functions over the result, and grades the findings
//! with configurable assessments bundled into assessors.
//!
//! # Quick start
//!
//! ```rust
//! use content_scoring::{assess, AssessorKind, Paper};
//!
//! let paper = Paper::new("<p>Cat food is what cats eat. Choose cat food with care.</p>")
//!     .with_keyword("cat food")
//!     .with_locale("en_US");
//! let report = assess(&paper, AssessorKind::Seo).unwrap();
//! for result in &report.results {
//!     println!("{} {:?}: {}", result.identifier, result.score, result.text);
//! }
//! println!("overall: {}", report.score);
//! ```
//!
//! A [`Researcher`] memoises trees, topic forms and sentences, so reuse one
//! per paper when running several assessors.

pub mod assessments;
mod assessor;
mod error;
pub mod languages;
pub mod matching;
pub mod morphology;
mod paper;
pub mod research;
mod researcher;
pub mod sanitize;
pub mod tokenizer;
pub mod tree;
mod tree_builder;

pub use assessments::{Assessment, AssessmentConfig, AssessmentResult, Mark, Rating};
pub use assessor::{Assessor, AssessorKind, AssessorReport};
pub use error::ScoringError;
pub use languages::{available_languages, get_language, get_language_or_default, LanguageConfig};
pub use matching::WordMatcher;
pub use morphology::{MorphologyData, TopicForms};
pub use paper::Paper;
pub use research::{Finding, ResearchKind};
pub use researcher::Researcher;
pub use tree::Tree;
pub use tree_builder::build_tree;

/// Run an embedded assessor preset over a paper.
///
/// Equivalent to `Assessor::preset(kind)` followed by `assess()` with a
/// fresh [`Researcher`] for the paper's locale.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidConfig`] if the preset table does not parse.
pub fn assess(paper: &Paper, kind: AssessorKind) -> Result<AssessorReport, ScoringError> {
    let assessor = Assessor::preset(kind)?;
    Ok(assessor.assess(paper, &Researcher::for_paper(paper)))
}
