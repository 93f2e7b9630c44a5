//! String operations on serialized locators.
//!
//! All three operations work on [`Locator::as_str`] and reparse the result.
//! They never touch the file system.

use crate::{Locator, LocatorError};

/// Replace everything after the last `.` of the serialized locator with `extension`.
///
/// The search covers the whole string, not only the path, so a locator like
/// `http://www.some.org` without a file extension gets its host rewritten.
/// If there is no `.` at all, `.extension` is appended.
///
/// ```
/// # use fileurl_core::{Locator, change_extension};
/// let l = Locator::parse("file:/sds/a.bmp").unwrap();
/// assert_eq!(change_extension(&l, "sld").unwrap().as_str(), "file:/sds/a.sld");
/// ```
pub fn change_extension(locator: &Locator, extension: &str) -> Result<Locator, LocatorError> {
	let text = locator.as_str();
	let stem = match text.rfind('.') {
		Some(pos) => &text[..pos],
		None => text,
	};
	reparse(format!("{stem}.{extension}"))
}

/// Append `segment` to `base`, inserting a `/` unless `base` already ends with one.
///
/// Either input may be absent; an absent input is reported as
/// [`LocatorError::NullArgument`] naming it. No normalization of `..` or
/// repeated slashes happens.
pub fn extend(base: Option<&Locator>, segment: Option<&str>) -> Result<Locator, LocatorError> {
	let base = base.ok_or(LocatorError::NullArgument { argument: "base" })?;
	let segment = segment.ok_or(LocatorError::NullArgument { argument: "segment" })?;

	let mut text = base.as_str().to_string();
	if !text.ends_with('/') {
		text.push('/');
	}
	text.push_str(segment);
	reparse(text)
}

/// Truncate the serialized locator at its last `/`.
///
/// The parent of an archive entry such as `jar:file:/some.zip!/bar.shp` is the
/// archive root `jar:file:/some.zip!/`, not the bare `jar:file:/some.zip!`.
pub fn parent(locator: &Locator) -> Result<Locator, LocatorError> {
	let text = locator.as_str();
	let pos = text
		.rfind('/')
		.ok_or_else(|| LocatorError::invalid(text, "no '/' separator to truncate at"))?;

	let mut parent = text[..pos].to_string();
	if parent.ends_with('!') {
		parent.push('/');
	}
	reparse(parent)
}

fn reparse(text: String) -> Result<Locator, LocatorError> {
	Locator::parse(&text).map_err(|e| match e {
		LocatorError::InvalidLocator { reason, .. } => LocatorError::InvalidLocator { locator: text, reason },
		other => other,
	})
}

impl Locator {
	/// See [`change_extension`].
	pub fn with_extension(&self, extension: &str) -> Result<Locator, LocatorError> {
		change_extension(self, extension)
	}

	/// See [`extend`]; for callers that already hold both values.
	pub fn join_segment(&self, segment: &str) -> Result<Locator, LocatorError> {
		extend(Some(self), Some(segment))
	}

	/// See [`parent`].
	pub fn parent(&self) -> Result<Locator, LocatorError> {
		parent(self)
	}
}
