//! Errors and tagged outcomes of the conversion operations.
//!
//! Failures that the caller must handle are [`LocatorError`] values. The two
//! "no result" situations, a locator outside the `file` scheme and a path that
//! cannot be expressed as a locator, are not errors: they are reported through
//! [`PathConversion`] and [`LocatorConversion`] so callers can fall back to
//! another strategy without inspecting error messages.

use crate::Locator;
use std::path::PathBuf;

/// Errors raised by locator parsing, string algebra and path decoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocatorError {
	/// A required input was absent.
	#[error("argument '{argument}' must not be null")]
	NullArgument { argument: &'static str },

	/// A string transform produced text that is not a valid locator, or the
	/// input lacked a separator the operation needs.
	#[error("invalid locator '{locator}': {reason}")]
	InvalidLocator { locator: String, reason: String },

	/// Percent-decoding failed on a malformed escape or a non UTF-8 byte sequence.
	#[error("can not decode locator '{locator}': {cause}")]
	Decode { locator: String, cause: String },
}

impl LocatorError {
	pub(crate) fn invalid(locator: impl Into<String>, reason: impl ToString) -> Self {
		LocatorError::InvalidLocator {
			locator: locator.into(),
			reason: reason.to_string(),
		}
	}

	pub(crate) fn decode(locator: impl Into<String>, cause: impl ToString) -> Self {
		LocatorError::Decode {
			locator: locator.into(),
			cause: cause.to_string(),
		}
	}
}

/// Outcome of [`UrlConverter::to_local_path`](crate::UrlConverter::to_local_path).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathConversion {
	/// The locator was a `file` locator and decoded to this path.
	Converted(PathBuf),
	/// The locator uses another scheme; the caller should try a different strategy.
	NotApplicable { scheme: String },
}

impl PathConversion {
	pub fn is_converted(&self) -> bool {
		matches!(self, PathConversion::Converted(_))
	}

	/// Borrow the decoded path, if any.
	pub fn as_path(&self) -> Option<&std::path::Path> {
		match self {
			PathConversion::Converted(path) => Some(path.as_path()),
			PathConversion::NotApplicable { .. } => None,
		}
	}

	pub fn into_path(self) -> Option<PathBuf> {
		match self {
			PathConversion::Converted(path) => Some(path),
			PathConversion::NotApplicable { .. } => None,
		}
	}
}

/// Outcome of [`UrlConverter::from_local_path`](crate::UrlConverter::from_local_path).
///
/// Encoding is best-effort, so a path that can not be expressed as a locator
/// yields [`LocatorConversion::Failed`] instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocatorConversion {
	Converted(Locator),
	Failed { path: PathBuf, reason: String },
}

impl LocatorConversion {
	pub fn is_converted(&self) -> bool {
		matches!(self, LocatorConversion::Converted(_))
	}

	pub fn as_locator(&self) -> Option<&Locator> {
		match self {
			LocatorConversion::Converted(locator) => Some(locator),
			LocatorConversion::Failed { .. } => None,
		}
	}

	pub fn into_locator(self) -> Option<Locator> {
		match self {
			LocatorConversion::Converted(locator) => Some(locator),
			LocatorConversion::Failed { .. } => None,
		}
	}
}
