// Assessor presets: configured thresholds and end-to-end runs.

use content_scoring::assessments::{
    ImageKeyphraseAssessment, SubheadingsTooLongAssessment, TextLengthAssessment,
    TitleWidthAssessment,
};
use content_scoring::{assess, Assessor, AssessorKind, AssessmentConfig, Paper, Rating, Researcher};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn config<'a>(assessor: &'a Assessor, kind: &str) -> &'a AssessmentConfig {
    assessor
        .assessments()
        .iter()
        .find(|c| c.assessment().identifier() == kind)
        .unwrap_or_else(|| panic!("{} has no {kind}", assessor.name()))
}

fn text_length(kind: AssessorKind) -> TextLengthAssessment {
    let assessor = Assessor::preset(kind).unwrap();
    match config(&assessor, "textLength") {
        AssessmentConfig::TextLength(a) => a.clone(),
        other => panic!("unexpected {other:?}"),
    }
}

// --- Preset tables ---

#[test]
fn test_collection_text_length() {
    let a = text_length(AssessorKind::CollectionSeo);
    assert_eq!(
        (
            a.recommended_minimum,
            a.slightly_below_minimum,
            a.below_minimum,
            a.very_far_below_minimum
        ),
        (80, 50, 20, 10)
    );
    assert_eq!(a.scores.below_minimum, 3);
    assert_eq!(a.scores.far_below_minimum, -10);
    assert!(!a.cornerstone_content);
    assert_eq!(a.custom_content_type.as_deref(), Some("collectionSEOAssessor"));
    assert_eq!(a.url_title.as_deref(), Some("https://yoa.st/shopify58"));
}

#[test]
fn test_taxonomy_text_length() {
    let a = text_length(AssessorKind::Taxonomy);
    assert_eq!(
        (
            a.recommended_minimum,
            a.slightly_below_minimum,
            a.below_minimum,
            a.very_far_below_minimum
        ),
        (250, 200, 100, 50)
    );
    assert_eq!(a.custom_content_type.as_deref(), Some("taxonomyAssessor"));
}

#[test]
fn test_store_cornerstone_text_length() {
    let a = text_length(AssessorKind::StorePostsAndPagesCornerstoneSeo);
    assert_eq!(
        (a.recommended_minimum, a.slightly_below_minimum, a.below_minimum),
        (900, 400, 300)
    );
    assert_eq!(a.scores.below_minimum, -20);
    assert_eq!(a.scores.far_below_minimum, -20);
    assert!(a.cornerstone_content);
}

#[test]
fn test_default_seo_text_length() {
    assert_eq!(text_length(AssessorKind::Seo), TextLengthAssessment::default());
}

#[test]
fn test_store_title_width_allows_short_titles() {
    let assessor = Assessor::preset(AssessorKind::StoreBlogSeo).unwrap();
    let AssessmentConfig::TitleWidth(a) = config(&assessor, "titleWidth") else {
        panic!("expected titleWidth");
    };
    assert!(a.allow_short_title);
    assert_eq!(a.scores.width_too_short, 9);
    assert_eq!(a.scores.width_too_long, TitleWidthAssessment::default().scores.width_too_long);
}

#[test]
fn test_cornerstone_image_keyphrase_scores() {
    let assessor =
        Assessor::preset(AssessorKind::StorePostsAndPagesCornerstoneRelatedKeyword).unwrap();
    let AssessmentConfig::ImageKeyphrase(a) = config(&assessor, "imageKeyphrase") else {
        panic!("expected imageKeyphrase");
    };
    assert_eq!(a.scores.no_alt, 3);
    assert_eq!(a.scores.with_alt_non_keyword, 3);
    assert_eq!(a.lower_boundary, ImageKeyphraseAssessment::default().lower_boundary);
}

#[test]
fn test_cornerstone_content_subheadings() {
    let assessor = Assessor::preset(AssessorKind::StorePostsAndPagesCornerstoneContent).unwrap();
    let AssessmentConfig::SubheadingsTooLong(a) = config(&assessor, "subheadingsTooLong") else {
        panic!("expected subheadingsTooLong");
    };
    assert_eq!(
        (a.recommended_maximum_length, a.slightly_too_many, a.far_too_many),
        (250, 250, 300)
    );
    assert!(a.cornerstone_content);
    assert_eq!(
        a.applicable_if_text_longer_than,
        SubheadingsTooLongAssessment::default().applicable_if_text_longer_than
    );
}

#[test]
fn test_preset_assessment_order() {
    let assessor = Assessor::preset(AssessorKind::CollectionSeo).unwrap();
    let ids: Vec<&str> = assessor
        .assessments()
        .iter()
        .map(|c| c.assessment().identifier())
        .collect();
    assert_eq!(
        ids,
        vec![
            "introductionKeyword",
            "keyphraseLength",
            "keywordDensity",
            "metaDescriptionKeyword",
            "metaDescriptionLength",
            "textLength",
            "keyphraseInSEOTitle",
            "titleWidth",
            "slugKeyword",
            "functionWordsInKeyphrase",
            "singleH1",
        ]
    );
}

#[test]
fn test_custom_assessor_from_json() {
    let assessor = Assessor::from_json(
        r#"{"name": "short", "assessments": [
            {"kind": "textLength", "recommendedMinimum": 5, "slightlyBelowMinimum": 4,
             "belowMinimum": 3, "veryFarBelowMinimum": 2}
        ]}"#,
    )
    .unwrap();
    let paper = Paper::new("<p>One two three four five six.</p>");
    let report = assessor.assess(&paper, &Researcher::for_paper(&paper));
    assert_eq!(report.assessor, "short");
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.results[0].score, Some(9));
    assert_eq!(report.score, 100);
}

// --- End to end ---

const ARTICLE: &str = "<h1>Cat food guide</h1>\
    <p>Choosing cat food is easier than it looks. This guide explains what to look for.</p>\
    <h2>Wet or dry cat food</h2>\
    <p>Wet food adds water. Dry food keeps well. However, most cats like both.</p>\
    <ul><li>Protein first</li><li>No fillers</li></ul>\
    <p><a href='/about'>About us</a> and <a href='https://vets.example.org'>our vets</a>.</p>\
    <img src='bowl.jpg' alt='cat food in a bowl'>";

fn article() -> Paper {
    Paper::new(ARTICLE)
        .with_keyword("cat food")
        .with_title("Cat food guide")
        .with_title_width(480)
        .with_description("A short guide to choosing cat food for your cat.")
        .with_slug("cat-food-guide")
        .with_permalink("https://example.com/cat-food-guide")
}

#[test]
fn test_seo_report() {
    let report = assess(&article(), AssessorKind::Seo).unwrap();
    assert_eq!(report.assessor, "seo");
    let score = |id: &str| {
        report
            .results
            .iter()
            .find(|r| r.identifier == id)
            .and_then(|r| r.score)
    };
    assert_eq!(score("introductionKeyword"), Some(9));
    assert_eq!(score("keyphraseLength"), Some(9));
    assert_eq!(score("keyphraseInSEOTitle"), Some(9));
    assert_eq!(score("slugKeyword"), Some(9));
    assert_eq!(score("images"), Some(9));
    assert_eq!(score("textLength").map(|s| s < 0), Some(true));
    assert!(report.score > 0 && report.score < 100);
}

#[test]
fn test_report_serializes() {
    let report = assess(&article(), AssessorKind::Content).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["assessor"], "content");
    assert!(json["results"].as_array().is_some_and(|r| !r.is_empty()));
}

#[test]
fn test_short_text_rating() {
    let report = assess(&Paper::new("<p>Too short.</p>"), AssessorKind::Content).unwrap();
    let presence = report
        .results
        .iter()
        .find(|r| r.identifier == "textPresence")
        .unwrap();
    assert_eq!(presence.rating(), Rating::Bad);
}

const KEYPHRASE_ASSESSMENTS: [&str; 9] = [
    "introductionKeyword",
    "keywordDensity",
    "metaDescriptionKeyword",
    "keyphraseInSEOTitle",
    "slugKeyword",
    "imageKeyphrase",
    "textCompetingLinks",
    "subheadingsKeyword",
    "functionWordsInKeyphrase",
];

#[test]
fn test_keyphrase_assessments_skipped_without_keyword() {
    let paper = article().with_keyword("").with_synonyms("pet food");
    let researcher = Researcher::for_paper(&paper);
    for kind in AssessorKind::ALL {
        let results = Assessor::preset(kind).unwrap().run(&paper, &researcher);
        assert!(!results.is_empty(), "{kind}");
        for result in &results {
            assert!(
                !KEYPHRASE_ASSESSMENTS.contains(&result.identifier.as_str()),
                "{kind} ran {}",
                result.identifier
            );
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_memoised_runs_match_fresh_runs(
        words in proptest::collection::vec("[a-z]{1,10}", 1..60),
        keyword in "[a-z]{1,8}( [a-z]{1,8})?",
    ) {
        let text = format!("<p>{}.</p><h2>{}</h2><p>{}.</p>", words.join(" "), keyword, words.join(". "));
        let paper = Paper::new(text).with_keyword(keyword);
        let assessor = Assessor::preset(AssessorKind::Seo).unwrap();
        let researcher = Researcher::for_paper(&paper);
        let first = assessor.assess(&paper, &researcher);
        let second = assessor.assess(&paper, &researcher);
        let fresh = assessor.assess(&paper, &Researcher::for_paper(&paper));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &fresh);
    }
}
