//! # Status Banner
//!
//! The single success/failure message shown after a submit attempt.

/// Banner severity
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerLevel {
    /// The order was accepted
    Success,
    /// At least one field failed validation
    Failure,
}

impl BannerLevel {
    /// CSS class for the banner element
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
        }
    }
}

/// A banner message
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusBanner {
    /// Severity
    pub level: BannerLevel,
    /// Text shown to the user
    pub message: String,
}

impl StatusBanner {
    /// Success banner
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Success,
            message: message.into(),
        }
    }

    /// Failure banner
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            level: BannerLevel::Failure,
            message: message.into(),
        }
    }

    /// Check if this is a success banner
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.level == BannerLevel::Success
    }
}
