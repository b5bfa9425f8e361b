use serde::{Deserialize, Serialize};

use crate::RequestDescription;

pub const TITLE_MAX_LEN: usize = 255;

/// Query parameters for listing tutorials.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TutorialFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl TutorialFilter {
    /// Filter on a title substring. Empty search text means no filter.
    pub fn by_title(title: &str) -> Self {
        Self {
            title: (!title.is_empty()).then(|| title.to_string()),
        }
    }

    /// The request that lists tutorials matching this filter.
    pub fn request(&self) -> RequestDescription {
        let description = RequestDescription::get("tutorials");
        match &self.title {
            Some(title) => description.with_param("title", title.clone()),
            None => description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTutorial {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub published: bool,
}

/// Partial update; absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTutorial {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
}

/// Validation result for tutorial titles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleValidation {
    Valid,
    Empty,
    TooLong,
}

impl TitleValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    pub fn error_message(&self) -> Option<&'static str> {
        match self {
            Self::Valid => None,
            Self::Empty => Some("Title can not be empty"),
            Self::TooLong => Some("Title must be at most 255 characters"),
        }
    }
}

pub fn validate_title(title: &str) -> TitleValidation {
    if title.trim().is_empty() {
        return TitleValidation::Empty;
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return TitleValidation::TooLong;
    }
    TitleValidation::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_search_text_is_no_filter() {
        assert_eq!(TutorialFilter::by_title(""), TutorialFilter::default());
        let request = TutorialFilter::by_title("").request();
        assert_eq!(request.path, "tutorials");
        assert!(request.params.is_empty());
    }

    #[test]
    fn search_text_becomes_title_param() {
        let request = TutorialFilter::by_title("React").request();
        assert_eq!(
            request.params,
            vec![("title".to_string(), "React".to_string())]
        );
    }

    #[test]
    fn title_validation() {
        assert!(validate_title("Rust Ownership").is_valid());
        assert_eq!(validate_title(" "), TitleValidation::Empty);
        assert_eq!(
            validate_title(&"x".repeat(TITLE_MAX_LEN + 1)),
            TitleValidation::TooLong
        );
        assert_eq!(
            validate_title("").error_message(),
            Some("Title can not be empty")
        );
    }
}
