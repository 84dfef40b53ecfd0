use serde::{Deserialize, Serialize};

use crate::assessments::{Assessment, AssessmentResult};
use crate::paper::Paper;
use crate::research::{alt_tag_count, image_count};
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ImageCountScores {
    pub no_images: i32,
    pub good: i32,
}

impl Default for ImageCountScores {
    fn default() -> Self {
        Self {
            no_images: 3,
            good: 9,
        }
    }
}

/// Checks that the text has at least one image.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ImageCountAssessment {
    pub scores: ImageCountScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for ImageCountAssessment {
    fn identifier(&self) -> &'static str {
        "images"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let count = image_count(paper, researcher);
        let title = self.title("https://yoa.st/4f4", "Images");
        if count == 0 {
            let add = self.call_to_action(
                "https://yoa.st/4f5",
                "Add some images to make this page more engaging",
            );
            return AssessmentResult::new(
                self.identifier(),
                self.scores.no_images,
                format!("{title}: No images appear on this page. {add}!"),
            );
        }
        AssessmentResult::new(self.identifier(), self.scores.good, format!("{title}: Good job!"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ImageKeyphraseScores {
    pub no_alt: i32,
    pub with_alt_non_keyword: i32,
    pub with_alt: i32,
    pub with_alt_good_number_of_keyword_matches: i32,
    pub with_alt_too_few_keyword_matches: i32,
    pub with_alt_too_many_keyword_matches: i32,
}

impl Default for ImageKeyphraseScores {
    fn default() -> Self {
        Self {
            no_alt: 3,
            with_alt_non_keyword: 3,
            with_alt: 3,
            with_alt_good_number_of_keyword_matches: 9,
            with_alt_too_few_keyword_matches: 6,
            with_alt_too_many_keyword_matches: 6,
        }
    }
}

/// Checks that image alt attributes mention the keyphrase, but not on
/// every image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ImageKeyphraseAssessment {
    /// From this many images on, the share of keyphrase alts is checked.
    pub minimum_images_for_ratio: usize,
    /// Bounds on the share of images with the keyphrase in their alt.
    pub lower_boundary: f64,
    pub upper_boundary: f64,
    pub scores: ImageKeyphraseScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Default for ImageKeyphraseAssessment {
    fn default() -> Self {
        Self {
            minimum_images_for_ratio: 5,
            lower_boundary: 0.3,
            upper_boundary: 0.7,
            scores: ImageKeyphraseScores::default(),
            url_title: None,
            url_call_to_action: None,
        }
    }
}

impl Assessment for ImageKeyphraseAssessment {
    fn identifier(&self) -> &'static str {
        "imageKeyphrase"
    }

    fn is_applicable(&self, paper: &Paper, researcher: &Researcher) -> bool {
        paper.has_keyword() && image_count(paper, researcher) > 0
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let images = image_count(paper, researcher);
        let alts = alt_tag_count(paper, researcher);
        let title = self.title("https://yoa.st/4f7", "Image Keyphrase");
        let cta = |text: &str| self.call_to_action("https://yoa.st/4f6", text);

        let (score, text) = if alts.with_alt_keyword == 0 {
            if alts.with_alt_non_keyword > 0 {
                (
                    self.scores.with_alt_non_keyword,
                    format!(
                        "{title}: Images on this page do not have alt attributes with at least half of the words from your keyphrase. {}!",
                        cta("Fix that")
                    ),
                )
            } else if alts.with_alt > 0 {
                (
                    self.scores.with_alt,
                    format!(
                        "{title}: Images on this page have alt attributes, but you have not set your keyphrase. {}!",
                        cta("Fix that")
                    ),
                )
            } else {
                (
                    self.scores.no_alt,
                    format!(
                        "{title}: Images on this page do not have alt attributes that reflect the topic of your text. {}!",
                        cta("Add your keyphrase or synonyms to the alt tags of relevant images")
                    ),
                )
            }
        } else if images >= self.minimum_images_for_ratio {
            let ratio = alts.with_alt_keyword as f64 / images as f64;
            if ratio < self.lower_boundary {
                (
                    self.scores.with_alt_too_few_keyword_matches,
                    format!(
                        "{title}: Out of {images} images on this page, only {} have an alt attribute that reflects the topic of your text. {}!",
                        alts.with_alt_keyword,
                        cta("Add your keyphrase or synonyms to the alt tags of more relevant images")
                    ),
                )
            } else if ratio > self.upper_boundary {
                (
                    self.scores.with_alt_too_many_keyword_matches,
                    format!(
                        "{title}: Out of {images} images on this page, {} have alt attributes with words from your keyphrase or synonyms. That's a bit much. {}!",
                        alts.with_alt_keyword,
                        cta("Only include the keyphrase or its synonyms when it really fits the image")
                    ),
                )
            } else {
                (
                    self.scores.with_alt_good_number_of_keyword_matches,
                    format!("{title}: Good job!"),
                )
            }
        } else {
            (
                self.scores.with_alt_good_number_of_keyword_matches,
                format!("{title}: Good job!"),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(assessment: &dyn Assessment, paper: &Paper) -> AssessmentResult {
        assessment.get_result(paper, &Researcher::for_paper(paper))
    }

    fn images(alts: &[&str]) -> String {
        alts.iter()
            .map(|alt| format!("<img src='x.png' alt='{alt}'>"))
            .collect()
    }

    #[test]
    fn test_image_count() {
        let assessment = ImageCountAssessment::default();
        assert_eq!(result(&assessment, &Paper::new("<p>Text</p>")).score, Some(3));
        assert_eq!(
            result(&assessment, &Paper::new("<p>Text <img src='a.png'></p>")).score,
            Some(9)
        );
    }

    #[test]
    fn test_image_keyphrase_applicability() {
        let assessment = ImageKeyphraseAssessment::default();
        let paper = Paper::new("<p>No images</p>").with_keyword("cat");
        assert!(!assessment.is_applicable(&paper, &Researcher::for_paper(&paper)));
        let paper = Paper::new(images(&["cat"]));
        assert!(!assessment.is_applicable(&paper, &Researcher::for_paper(&paper)));
    }

    #[test]
    fn test_image_keyphrase_few_images() {
        let assessment = ImageKeyphraseAssessment::default();
        let scored = |alts: &[&str]| {
            result(&assessment, &Paper::new(images(alts)).with_keyword("black cat")).score
        };
        assert_eq!(scored(&["a black cat", "a dog"]), Some(9));
        assert_eq!(scored(&["a dog"]), Some(3));
        assert_eq!(scored(&[""]), Some(3));
    }

    #[test]
    fn test_image_keyphrase_ratio() {
        let assessment = ImageKeyphraseAssessment::default();
        let scored = |alts: &[&str]| {
            result(&assessment, &Paper::new(images(alts)).with_keyword("cat")).score
        };
        assert_eq!(scored(&["cat", "dog", "dog", "dog", "dog"]), Some(6));
        assert_eq!(scored(&["cat", "cat", "dog", "dog", "dog"]), Some(9));
        assert_eq!(scored(&["cat", "cat", "cat", "cat", "dog"]), Some(6));
    }
}
