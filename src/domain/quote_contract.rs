use serde::{Deserialize, Serialize};

use super::QuoteError;

/// The closed set of curated theme tags. The lowercase tag value is what
/// travels over the wire; label and icon name are presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PredefinedTheme {
    Motivation,
    Success,
    Wisdom,
    Love,
    Inspiration,
    Happiness,
    Leadership,
    Perseverance,
}

impl PredefinedTheme {
    pub const ALL: [PredefinedTheme; 8] = [
        PredefinedTheme::Motivation,
        PredefinedTheme::Success,
        PredefinedTheme::Wisdom,
        PredefinedTheme::Love,
        PredefinedTheme::Inspiration,
        PredefinedTheme::Happiness,
        PredefinedTheme::Leadership,
        PredefinedTheme::Perseverance,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            Self::Motivation => "motivation",
            Self::Success => "success",
            Self::Wisdom => "wisdom",
            Self::Love => "love",
            Self::Inspiration => "inspiration",
            Self::Happiness => "happiness",
            Self::Leadership => "leadership",
            Self::Perseverance => "perseverance",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Motivation => "Motivation",
            Self::Success => "Success",
            Self::Wisdom => "Wisdom",
            Self::Love => "Love",
            Self::Inspiration => "Inspiration",
            Self::Happiness => "Happiness",
            Self::Leadership => "Leadership",
            Self::Perseverance => "Perseverance",
        }
    }

    pub fn icon_name(self) -> &'static str {
        match self {
            Self::Motivation => "target",
            Self::Success => "star",
            Self::Wisdom => "brain",
            Self::Love => "heart",
            Self::Inspiration => "lightbulb",
            Self::Happiness => "sun",
            Self::Leadership => "target",
            Self::Perseverance => "sparkles",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|theme| theme.tag() == tag)
    }
}

/// The user's theme intent. Selecting a predefined tag and typing custom text
/// are mutually exclusive by construction; `Custom` holds the text as typed
/// and is only entered when it is non-empty after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ThemeSelection {
    #[default]
    None,
    Predefined(PredefinedTheme),
    Custom(String),
}

impl ThemeSelection {
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn predefined(&self) -> Option<PredefinedTheme> {
        match self {
            Self::Predefined(theme) => Some(*theme),
            _ => None,
        }
    }

    pub fn custom_text(&self) -> Option<&str> {
        match self {
            Self::Custom(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Builds the wire request carrying this selection, or `None` when no
    /// theme has been supplied.
    pub fn to_request(&self) -> Option<GenerationRequest> {
        match self {
            Self::None => None,
            Self::Predefined(theme) => Some(GenerationRequest::predefined(*theme)),
            Self::Custom(text) => {
                let trimmed = text.trim();
                (!trimmed.is_empty()).then(|| GenerationRequest::custom(trimmed))
            }
        }
    }
}

/// Wire body for `POST /api/generate-quote`. Exactly one of `theme` /
/// `custom_theme` carries the user's intent; the unused field is sent as an
/// empty string / `null` so the backend resolves which applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub theme: String,
    pub custom_theme: Option<String>,
}

impl GenerationRequest {
    pub fn predefined(theme: PredefinedTheme) -> Self {
        Self {
            theme: theme.tag().to_string(),
            custom_theme: None,
        }
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Self {
            theme: String::new(),
            custom_theme: Some(text.into()),
        }
    }

    pub fn validate(&self) -> Result<(), QuoteError> {
        let has_tag = !self.theme.trim().is_empty();
        let custom = self.custom_theme.as_deref().map(str::trim);

        match (has_tag, custom) {
            (true, Some(_)) => Err(QuoteError::validation(
                "theme and custom_theme are mutually exclusive",
            )),
            (false, None) => Err(QuoteError::validation(
                "a theme or custom theme is required",
            )),
            (false, Some(text)) if text.is_empty() => Err(QuoteError::validation(
                "custom theme must not be blank",
            )),
            (true, None) => {
                if PredefinedTheme::from_tag(&self.theme).is_none() {
                    return Err(QuoteError::validation(format!(
                        "'{}' is not a recognized theme tag",
                        self.theme
                    )));
                }
                Ok(())
            }
            (false, Some(_)) => Ok(()),
        }
    }
}

/// The success payload of a completed generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteSuccess {
    pub quote: String,
    pub author: String,
    pub resolved_theme: String,
}

impl QuoteSuccess {
    pub fn validate(&self) -> Result<(), QuoteError> {
        if self.quote.trim().is_empty() {
            return Err(QuoteError::invalid_response("quote must not be empty"));
        }
        if self.author.trim().is_empty() {
            return Err(QuoteError::invalid_response("author must not be empty"));
        }
        Ok(())
    }
}

/// Outcome of a completed request. Replaced wholesale by the next request's
/// outcome; never merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationResult {
    Success(QuoteSuccess),
    Failure { message: String },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn success(&self) -> Option<&QuoteSuccess> {
        match self {
            Self::Success(success) => Some(success),
            Self::Failure { .. } => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message.as_str()),
            Self::Success(_) => None,
        }
    }
}
