//! Assessors: ordered bundles of configured assessments for one content
//! type, and the aggregate score over their results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assessments::{Assessment, AssessmentConfig, AssessmentResult};
use crate::error::ScoringError;
use crate::paper::Paper;
use crate::researcher::Researcher;

/// The embedded assessor presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessorKind {
    Seo,
    Content,
    CornerstoneSeo,
    CornerstoneContent,
    RelatedKeyword,
    Taxonomy,
    ProductContent,
    CollectionSeo,
    CollectionRelatedKeyword,
    CollectionCornerstoneRelatedKeyword,
    StorePostsAndPagesSeo,
    StorePostsAndPagesCornerstoneSeo,
    StorePostsAndPagesCornerstoneContent,
    StorePostsAndPagesCornerstoneRelatedKeyword,
    StoreBlogSeo,
    StoreBlogCornerstoneSeo,
}

impl AssessorKind {
    pub const ALL: [AssessorKind; 16] = [
        Self::Seo,
        Self::Content,
        Self::CornerstoneSeo,
        Self::CornerstoneContent,
        Self::RelatedKeyword,
        Self::Taxonomy,
        Self::ProductContent,
        Self::CollectionSeo,
        Self::CollectionRelatedKeyword,
        Self::CollectionCornerstoneRelatedKeyword,
        Self::StorePostsAndPagesSeo,
        Self::StorePostsAndPagesCornerstoneSeo,
        Self::StorePostsAndPagesCornerstoneContent,
        Self::StorePostsAndPagesCornerstoneRelatedKeyword,
        Self::StoreBlogSeo,
        Self::StoreBlogCornerstoneSeo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Seo => "seo",
            Self::Content => "content",
            Self::CornerstoneSeo => "cornerstoneSeo",
            Self::CornerstoneContent => "cornerstoneContent",
            Self::RelatedKeyword => "relatedKeyword",
            Self::Taxonomy => "taxonomy",
            Self::ProductContent => "productContent",
            Self::CollectionSeo => "collectionSeo",
            Self::CollectionRelatedKeyword => "collectionRelatedKeyword",
            Self::CollectionCornerstoneRelatedKeyword => "collectionCornerstoneRelatedKeyword",
            Self::StorePostsAndPagesSeo => "storePostsAndPagesSeo",
            Self::StorePostsAndPagesCornerstoneSeo => "storePostsAndPagesCornerstoneSeo",
            Self::StorePostsAndPagesCornerstoneContent => "storePostsAndPagesCornerstoneContent",
            Self::StorePostsAndPagesCornerstoneRelatedKeyword => {
                "storePostsAndPagesCornerstoneRelatedKeyword"
            }
            Self::StoreBlogSeo => "storeBlogSeo",
            Self::StoreBlogCornerstoneSeo => "storeBlogCornerstoneSeo",
        }
    }

    fn table(self) -> &'static str {
        match self {
            Self::Seo => include_str!("presets/seo.json"),
            Self::Content => include_str!("presets/content.json"),
            Self::CornerstoneSeo => include_str!("presets/cornerstone_seo.json"),
            Self::CornerstoneContent => include_str!("presets/cornerstone_content.json"),
            Self::RelatedKeyword => include_str!("presets/related_keyword.json"),
            Self::Taxonomy => include_str!("presets/taxonomy.json"),
            Self::ProductContent => include_str!("presets/product_content.json"),
            Self::CollectionSeo => include_str!("presets/collection_seo.json"),
            Self::CollectionRelatedKeyword => {
                include_str!("presets/collection_related_keyword.json")
            }
            Self::CollectionCornerstoneRelatedKeyword => {
                include_str!("presets/collection_cornerstone_related_keyword.json")
            }
            Self::StorePostsAndPagesSeo => include_str!("presets/store_posts_and_pages_seo.json"),
            Self::StorePostsAndPagesCornerstoneSeo => {
                include_str!("presets/store_posts_and_pages_cornerstone_seo.json")
            }
            Self::StorePostsAndPagesCornerstoneContent => {
                include_str!("presets/store_posts_and_pages_cornerstone_content.json")
            }
            Self::StorePostsAndPagesCornerstoneRelatedKeyword => {
                include_str!("presets/store_posts_and_pages_cornerstone_related_keyword.json")
            }
            Self::StoreBlogSeo => include_str!("presets/store_blog_seo.json"),
            Self::StoreBlogCornerstoneSeo => {
                include_str!("presets/store_blog_cornerstone_seo.json")
            }
        }
    }
}

impl fmt::Display for AssessorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssessorKind {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ScoringError::UnknownAssessor(s.to_string()))
    }
}

/// An ordered list of configured assessments.
///
/// ```
/// use content_scoring::{Assessor, AssessorKind, Paper, Researcher};
///
/// let assessor = Assessor::preset(AssessorKind::Content).unwrap();
/// let paper = Paper::new("<p>A short text.</p>");
/// let results = assessor.run(&paper, &Researcher::for_paper(&paper));
/// assert!(results.iter().any(|r| r.identifier == "textPresence"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessor {
    name: String,
    assessments: Vec<AssessmentConfig>,
}

/// Everything one assessor run produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessorReport {
    pub assessor: String,
    pub score: i32,
    pub results: Vec<AssessmentResult>,
}

impl Assessor {
    pub fn new(name: impl Into<String>, assessments: Vec<AssessmentConfig>) -> Self {
        Self {
            name: name.into(),
            assessments,
        }
    }

    /// Parse an assessor table: `{"name": ..., "assessments": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] if the JSON does not
    /// describe an assessor.
    pub fn from_json(json: &str) -> Result<Self, ScoringError> {
        serde_json::from_str(json).map_err(|source| ScoringError::InvalidConfig {
            name: "assessor".to_string(),
            source,
        })
    }

    /// Load an embedded preset.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::InvalidConfig`] if the embedded table does
    /// not parse.
    pub fn preset(kind: AssessorKind) -> Result<Self, ScoringError> {
        serde_json::from_str(kind.table()).map_err(|source| ScoringError::InvalidConfig {
            name: kind.name().to_string(),
            source,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn assessments(&self) -> &[AssessmentConfig] {
        &self.assessments
    }

    /// Look up an assessment by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ScoringError::UnknownAssessment`] if this assessor does
    /// not contain it.
    pub fn get_assessment(&self, identifier: &str) -> Result<&dyn Assessment, ScoringError> {
        self.assessments
            .iter()
            .map(AssessmentConfig::assessment)
            .find(|a| a.identifier() == identifier)
            .ok_or_else(|| ScoringError::UnknownAssessment(identifier.to_string()))
    }

    /// Run every applicable assessment, in order.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all, fields(assessor = %self.name)))]
    pub fn run(&self, paper: &Paper, researcher: &Researcher) -> Vec<AssessmentResult> {
        self.assessments
            .iter()
            .map(AssessmentConfig::assessment)
            .filter(|a| a.is_applicable(paper, researcher))
            .map(|a| {
                let result = a.get_result(paper, researcher);
                #[cfg(feature = "tracing")]
                tracing::debug!(identifier = a.identifier(), score = ?result.score, "assessed");
                result
            })
            .collect()
    }

    /// Aggregate score out of 100 over the results that carry a score.
    pub fn overall_score(results: &[AssessmentResult]) -> i32 {
        let scores: Vec<i32> = results.iter().filter_map(|r| r.score).collect();
        if scores.is_empty() {
            return 0;
        }
        let total: i64 = scores.iter().map(|&s| i64::from(s)).sum();
        (total as f64 * 100.0 / (9.0 * scores.len() as f64)).round() as i32
    }

    /// Run and aggregate.
    pub fn assess(&self, paper: &Paper, researcher: &Researcher) -> AssessorReport {
        let results = self.run(paper, researcher);
        let score = Self::overall_score(&results);
        #[cfg(feature = "tracing")]
        tracing::debug!(assessor = %self.name, score, results = results.len(), "overall score");
        AssessorReport {
            assessor: self.name.clone(),
            score,
            results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_parses() {
        for kind in AssessorKind::ALL {
            let assessor = Assessor::preset(kind).unwrap();
            assert_eq!(assessor.name(), kind.name());
            assert!(!assessor.assessments().is_empty());
        }
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in AssessorKind::ALL {
            assert_eq!(kind.name().parse::<AssessorKind>().unwrap(), kind);
        }
        assert!(matches!(
            "blog".parse::<AssessorKind>(),
            Err(ScoringError::UnknownAssessor(_))
        ));
    }

    #[test]
    fn test_overall_score() {
        let results = vec![
            AssessmentResult::new("a", 9, "good"),
            AssessmentResult::new("b", 3, "bad"),
            AssessmentResult::empty("c"),
        ];
        assert_eq!(Assessor::overall_score(&results), 67);
        assert_eq!(Assessor::overall_score(&[]), 0);
    }

    #[test]
    fn test_get_assessment() {
        let assessor = Assessor::preset(AssessorKind::Taxonomy).unwrap();
        assert_eq!(
            assessor.get_assessment("textLength").unwrap().identifier(),
            "textLength"
        );
        assert!(matches!(
            assessor.get_assessment("passiveVoice"),
            Err(ScoringError::UnknownAssessment(_))
        ));
    }

    #[test]
    fn test_run_skips_inapplicable() {
        let assessor = Assessor::preset(AssessorKind::Seo).unwrap();
        let paper = Paper::new("<p>Some text without a keyphrase.</p>");
        let results = assessor.run(&paper, &Researcher::for_paper(&paper));
        assert!(results.iter().all(|r| r.identifier != "keywordDensity"));
        assert!(results.iter().any(|r| r.identifier == "keyphraseLength"));
    }

    #[test]
    fn test_from_json_errors() {
        let err = Assessor::from_json(r#"{"name": "x", "assessments": [{"kind": "nope"}]}"#)
            .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidConfig { .. }));
    }

    #[test]
    fn test_from_json_rejects_misspelled_override() {
        let err = Assessor::from_json(
            r#"{"name": "x", "assessments": [{"kind": "textLength", "recomendedMinimum": 900}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ScoringError::InvalidConfig { ref name, .. } if name == "assessor"));
        assert!(err.to_string().contains("recomendedMinimum"));
    }
}
