//! Severity-leveled failure payloads.
//!
//! [`FailureDetails<T>`] wraps arbitrary failure details together with a
//! [`FailureLevel`] severity, and is the conventional failure-reason type for
//! [`Status`](crate::outcome::Status) and [`Outcome`](crate::outcome::Outcome).
//! [`FailureMessage`] is the plain-text specialization used by the
//! default-failure constructors.

use std::fmt;

/// The severity of a failure, as a closed set.
///
/// Levels order from least to most severe, so `FailureLevel::Warning <
/// FailureLevel::Error` holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FailureLevel {
    /// Diagnostic detail, not an error in itself.
    Debug,
    /// Informational notice.
    Info,
    /// Something suspicious that did not prevent the operation.
    Warning,
    /// The operation failed.
    Error,
    /// The operation failed and the surrounding process is compromised.
    Critical,
}

impl Default for FailureLevel {
    /// Failures default to `Error` severity.
    #[inline]
    fn default() -> Self {
        Self::Error
    }
}

impl fmt::Display for FailureLevel {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Debug => "Debug",
            Self::Info => "Info",
            Self::Warning => "Warning",
            Self::Error => "Error",
            Self::Critical => "Critical",
        };
        formatter.write_str(name)
    }
}

/// A failure reason: arbitrary details plus a severity level.
///
/// # Examples
///
/// ```rust
/// use sumtypes::outcome::{FailureDetails, FailureLevel};
///
/// let failure = FailureDetails::new("disk quota exceeded");
/// assert_eq!(failure.level(), FailureLevel::Error);
/// assert_eq!(failure.to_string(), "[Error] disk quota exceeded");
///
/// let warning = FailureDetails::new("cache miss").with_level(FailureLevel::Warning);
/// assert_eq!(warning.to_string(), "[Warning] cache miss");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FailureDetails<T> {
    details: T,
    level: FailureLevel,
}

impl<T> FailureDetails<T> {
    /// Wraps failure details at the default `Error` severity.
    #[inline]
    pub fn new(details: T) -> Self {
        Self {
            details,
            level: FailureLevel::Error,
        }
    }

    /// Replaces the severity level.
    #[inline]
    #[must_use]
    pub fn with_level(self, level: FailureLevel) -> Self {
        Self { level, ..self }
    }

    /// Returns the severity level.
    #[inline]
    pub const fn level(&self) -> FailureLevel {
        self.level
    }

    /// Returns a reference to the wrapped details.
    #[inline]
    pub const fn details(&self) -> &T {
        &self.details
    }

    /// Consumes the failure, returning the wrapped details.
    #[inline]
    pub fn into_details(self) -> T {
        self.details
    }
}

impl<T: fmt::Display> fmt::Display for FailureDetails<T> {
    /// Renders as `"[Level] Details"`.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[{}] {}", self.level, self.details)
    }
}

/// A plain-text failure reason with a severity level.
///
/// This is the default failure payload produced by
/// [`Status::failed`](crate::outcome::Status::failed) and
/// [`Outcome::failed`](crate::outcome::Outcome::failed).
pub type FailureMessage = FailureDetails<String>;

impl FailureDetails<String> {
    /// The message used when no failure reason is supplied.
    pub const UNSPECIFIED: &'static str = "Unspecified error has occurred.";

    /// Builds the placeholder failure used when no reason is supplied.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sumtypes::outcome::FailureMessage;
    ///
    /// let failure = FailureMessage::unspecified();
    /// assert_eq!(failure.to_string(), "[Error] Unspecified error has occurred.");
    /// ```
    #[inline]
    pub fn unspecified() -> Self {
        Self::new(Self::UNSPECIFIED.to_string())
    }
}

impl From<&str> for FailureDetails<String> {
    #[inline]
    fn from(details: &str) -> Self {
        Self::new(details.to_string())
    }
}

impl From<String> for FailureDetails<String> {
    #[inline]
    fn from(details: String) -> Self {
        Self::new(details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_display_renders_level_and_details() {
        let failure = FailureDetails::new(404).with_level(FailureLevel::Critical);
        assert_eq!(failure.to_string(), "[Critical] 404");
    }

    #[rstest]
    fn test_default_level_is_error() {
        assert_eq!(FailureLevel::default(), FailureLevel::Error);
        assert_eq!(FailureDetails::new("boom").level(), FailureLevel::Error);
    }

    #[rstest]
    fn test_levels_order_by_severity() {
        assert!(FailureLevel::Debug < FailureLevel::Info);
        assert!(FailureLevel::Warning < FailureLevel::Error);
        assert!(FailureLevel::Error < FailureLevel::Critical);
    }
}
