//! `Locator` is a validated URL that remembers how it was written.
//!
//! Parsing is delegated to the `url` crate, but the serialized form is kept as
//! the caller supplied it (only trimmed, with tabs and newlines removed and the
//! scheme lowercased). The URL parser would rewrite `file:/sds/a.bmp` into
//! `file:///sds/a.bmp`; the string algebra in this crate works on the text the
//! caller wrote, so that rewrite must not happen.

use crate::LocatorError;
use std::{
	fmt::{self, Debug, Display},
	hash::{Hash, Hasher},
	str::FromStr,
};
use url::Url;

/// A well-formed resource locator: scheme, optional authority, path, optional
/// query and fragment.
///
/// # Examples
/// ```
/// use fileurl_core::Locator;
/// let l = Locator::parse("file:/sds/a.bmp").unwrap();
/// assert_eq!(l.as_str(), "file:/sds/a.bmp");
/// assert_eq!(l.scheme(), "file");
/// assert_eq!(l.path(), "/sds/a.bmp");
/// ```
#[derive(Clone)]
pub struct Locator {
	serialized: String,
	url: Url,
}

impl Locator {
	/// Parse and validate `input` against the URL grammar.
	pub fn parse(input: &str) -> Result<Self, LocatorError> {
		let cleaned: String = input
			.trim_matches(|c: char| c <= ' ')
			.chars()
			.filter(|c| !matches!(c, '\t' | '\n' | '\r'))
			.collect();
		let url = Url::parse(&cleaned).map_err(|e| LocatorError::invalid(input, e))?;

		// The scheme is ASCII and leads the cleaned text, so its length is stable.
		let scheme_len = url.scheme().len();
		let serialized = match cleaned.get(scheme_len..) {
			Some(rest) => format!("{}{rest}", url.scheme()),
			None => url.as_str().to_string(),
		};
		Ok(Locator { serialized, url })
	}

	/// The serialized form, exactly as used by the string algebra.
	pub fn as_str(&self) -> &str {
		&self.serialized
	}

	/// The parsed URL, as normalized by the URL parser.
	pub fn as_url(&self) -> &Url {
		&self.url
	}

	/// Lowercased scheme, e.g. `file` or `jar`.
	pub fn scheme(&self) -> &str {
		self.url.scheme()
	}

	/// `userinfo@host:port`, or an empty string if the locator has no authority.
	pub fn authority(&self) -> String {
		let url = &self.url;
		let mut authority = String::new();
		if !url.username().is_empty() || url.password().is_some() {
			authority.push_str(url.username());
			if let Some(password) = url.password() {
				authority.push(':');
				authority.push_str(password);
			}
			authority.push('@');
		}
		if let Some(host) = url.host_str() {
			authority.push_str(host);
		}
		if let Some(port) = url.port() {
			authority.push(':');
			authority.push_str(&port.to_string());
		}
		authority
	}

	pub fn host(&self) -> Option<&str> {
		self.url.host_str()
	}

	/// Percent-encoded path component.
	pub fn path(&self) -> &str {
		self.url.path()
	}

	pub fn query(&self) -> Option<&str> {
		self.url.query()
	}

	pub fn fragment(&self) -> Option<&str> {
		self.url.fragment()
	}

	/// Is this a `file` locator?
	pub fn is_file(&self) -> bool {
		self.scheme() == "file"
	}
}

impl PartialEq for Locator {
	fn eq(&self, other: &Self) -> bool {
		self.serialized == other.serialized
	}
}

impl Eq for Locator {}

impl Hash for Locator {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.serialized.hash(state);
	}
}

impl Display for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.serialized)
	}
}

impl Debug for Locator {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Locator({})", self.serialized)
	}
}

impl AsRef<str> for Locator {
	fn as_ref(&self) -> &str {
		&self.serialized
	}
}

impl FromStr for Locator {
	type Err = LocatorError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Locator::parse(s)
	}
}

impl TryFrom<&str> for Locator {
	type Error = LocatorError;
	fn try_from(s: &str) -> Result<Self, Self::Error> {
		Locator::parse(s)
	}
}

impl TryFrom<String> for Locator {
	type Error = LocatorError;
	fn try_from(s: String) -> Result<Self, Self::Error> {
		Locator::parse(&s)
	}
}

impl From<Url> for Locator {
	fn from(url: Url) -> Self {
		Locator {
			serialized: url.as_str().to_string(),
			url,
		}
	}
}
