//! Outcome line for the most recent backend exchange.
//!
//! DESIGN
//! ======
//! The screen shows at most one of an error or a success confirmation at a
//! time, so both share a single `Option<Notice>` slot: writing a notice of
//! either kind replaces whatever was shown before, and `None` clears the
//! line entirely.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Display-ready outcome of the most recent operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A failed exchange; the message is already user-facing.
    Error(String),
    /// A confirmation, currently only for an accepted email send.
    Success(String),
}

impl Notice {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Message text for rendering.
    pub fn text(&self) -> &str {
        match self {
            Self::Error(message) | Self::Success(message) => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// CSS class pair for the notice line, switching on the variant.
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Error(_) => "notice-line notice-line--error",
            Self::Success(_) => "notice-line notice-line--success",
        }
    }
}
