use serde::{Deserialize, Serialize};

use crate::assessments::{Assessment, AssessmentResult, Mark};
use crate::paper::Paper;
use crate::research::{get_anchors_with_keyphrase, get_link_statistics};
use crate::researcher::Researcher;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ExternalLinksScores {
    pub no_links: i32,
    pub all_nofollowed: i32,
    pub some_nofollowed: i32,
    pub all_followed: i32,
}

impl Default for ExternalLinksScores {
    fn default() -> Self {
        Self {
            no_links: 6,
            all_nofollowed: 7,
            some_nofollowed: 8,
            all_followed: 9,
        }
    }
}

/// Checks that the text links out to other sites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ExternalLinksAssessment {
    pub scores: ExternalLinksScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for ExternalLinksAssessment {
    fn identifier(&self) -> &'static str {
        "externalLinks"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let stats = get_link_statistics(paper, researcher);
        let title = self.title("https://yoa.st/34f", "Outbound links");
        let cta = |text: &str| self.call_to_action("https://yoa.st/34g", text);

        let (score, text) = if stats.external_total == 0 {
            (
                self.scores.no_links,
                format!("{title}: No outbound links appear in this page. {}!", cta("Add some")),
            )
        } else if stats.external_dofollow == 0 {
            (
                self.scores.all_nofollowed,
                format!(
                    "{title}: All outbound links on this page are nofollowed. {}!",
                    cta("Add some normal links")
                ),
            )
        } else if stats.external_nofollow > 0 {
            (
                self.scores.some_nofollowed,
                format!(
                    "{title}: There are both nofollowed and normal outbound links on this page. Good job!"
                ),
            )
        } else {
            (self.scores.all_followed, format!("{title}: Good job!"))
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InternalLinksScores {
    pub all_internal_follow: i32,
    pub some_internal_follow: i32,
    pub none_internal_follow: i32,
    pub no_internal: i32,
}

impl Default for InternalLinksScores {
    fn default() -> Self {
        Self {
            all_internal_follow: 9,
            some_internal_follow: 8,
            none_internal_follow: 7,
            no_internal: 3,
        }
    }
}

/// Checks that the text links to other pages of the same site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct InternalLinksAssessment {
    pub scores: InternalLinksScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for InternalLinksAssessment {
    fn identifier(&self) -> &'static str {
        "internalLinks"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let stats = get_link_statistics(paper, researcher);
        let title = self.title("https://yoa.st/33z", "Internal links");
        let cta = |text: &str| self.call_to_action("https://yoa.st/34a", text);

        let (score, text) = if stats.internal_total == 0 {
            (
                self.scores.no_internal,
                format!(
                    "{title}: No internal links appear in this page, {}!",
                    cta("make sure to add some")
                ),
            )
        } else if stats.internal_dofollow == stats.internal_total {
            (
                self.scores.all_internal_follow,
                format!("{title}: You have enough internal links. Good job!"),
            )
        } else if stats.internal_dofollow == 0 {
            (
                self.scores.none_internal_follow,
                format!(
                    "{title}: The internal links in this page are all nofollowed. {}!",
                    cta("Add some good internal links")
                ),
            )
        } else {
            (
                self.scores.some_internal_follow,
                format!(
                    "{title}: There are both nofollowed and normal internal links on this page. Good job!"
                ),
            )
        };
        AssessmentResult::new(self.identifier(), score, text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TextCompetingLinksScores {
    pub bad: i32,
}

impl Default for TextCompetingLinksScores {
    fn default() -> Self {
        Self { bad: 2 }
    }
}

/// Flags links whose anchor text is the keyphrase: they compete with this page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TextCompetingLinksAssessment {
    /// Number of competing links tolerated.
    pub recommended_maximum: usize,
    pub scores: TextCompetingLinksScores,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_call_to_action: Option<String>,
}

impl Assessment for TextCompetingLinksAssessment {
    fn identifier(&self) -> &'static str {
        "textCompetingLinks"
    }

    fn is_applicable(&self, paper: &Paper, _researcher: &Researcher) -> bool {
        paper.has_text() && paper.has_keyword()
    }

    fn get_result(&self, paper: &Paper, researcher: &Researcher) -> AssessmentResult {
        let found = get_anchors_with_keyphrase(paper, researcher);
        if found.anchors_with_keyphrase_count <= self.recommended_maximum {
            return AssessmentResult::empty(self.identifier());
        }
        let title = self.title("https://yoa.st/34l", "Link keyphrase");
        let cta = self.call_to_action(
            "https://yoa.st/34m",
            "Don't use your keyphrase or synonyms for the anchor text of outgoing links",
        );
        AssessmentResult::new(
            self.identifier(),
            self.scores.bad,
            format!(
                "{title}: You're linking to another page with the words you want this page to rank for. {cta}!"
            ),
        )
        .with_marks(
            found
                .anchors_with_keyphrase
                .into_iter()
                .map(|a| Mark::new(a.text)),
        )
    }
}
