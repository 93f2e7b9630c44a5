//! The configured entry point for locator/path conversion.
//!
//! A [`UrlConverter`] bundles the two inputs that make conversion depend on the
//! environment: the [`PlatformFamily`] and the [`PathProbe`]. Both are fixed at
//! construction, so a converter is immutable and can be shared across threads.
//!
//! # Example
//!
//! ```
//! use fileurl_core::{Locator, PlatformFamily, UrlConverter};
//! use std::path::{Path, PathBuf};
//!
//! let converter = UrlConverter::builder()
//!     .platform(PlatformFamily::Windows)
//!     .probe(|p: &Path| p.to_string_lossy().starts_with(r"\\fileserver\maps"))
//!     .build();
//!
//! let url = Locator::parse("file://fileserver/maps/roads.shp").unwrap();
//! let path = converter.to_local_path(&url).unwrap().into_path();
//! assert_eq!(path, Some(PathBuf::from(r"\\fileserver\maps\roads.shp")));
//! ```

use crate::{FsProbe, Locator, LocatorConversion, LocatorError, PathConversion, PathProbe, PlatformFamily, decode, encode};
use std::{
	fmt::{self, Debug},
	path::Path,
	sync::{Arc, LazyLock},
};

static DEFAULT_CONVERTER: LazyLock<UrlConverter> = LazyLock::new(UrlConverter::new);

/// Converts `file` locators to local paths and back.
///
/// Cheap to clone; the probe is shared.
#[derive(Clone)]
pub struct UrlConverter {
	platform: PlatformFamily,
	probe: Arc<dyn PathProbe>,
}

impl UrlConverter {
	/// Converter for the host platform, probing the real file system.
	///
	/// Equivalent to `UrlConverter::builder().build()`
	pub fn new() -> Self {
		Self::builder().build()
	}

	pub fn builder() -> ConverterBuilder {
		ConverterBuilder::default()
	}

	pub fn platform(&self) -> PlatformFamily {
		self.platform
	}

	pub fn probe(&self) -> &dyn PathProbe {
		self.probe.as_ref()
	}

	/// Decode a `file` locator into a local path.
	///
	/// Returns [`PathConversion::NotApplicable`] for any other scheme and
	/// [`LocatorError::Decode`] if the locator holds a malformed escape.
	pub fn to_local_path(&self, locator: &Locator) -> Result<PathConversion, LocatorError> {
		decode::to_local_path(locator, self.platform, self.probe.as_ref())
	}

	/// Encode a local path as a `file` locator. Never fails; see [`LocatorConversion`].
	pub fn from_local_path(&self, path: &Path) -> LocatorConversion {
		encode::from_local_path(path, self.probe.as_ref())
	}
}

impl Default for UrlConverter {
	fn default() -> Self {
		Self::new()
	}
}

impl Debug for UrlConverter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("UrlConverter")
			.field("platform", &self.platform)
			.finish_non_exhaustive()
	}
}

/// Builder for [`UrlConverter`].
///
/// ```
/// use fileurl_core::{FsProbe, PlatformFamily, UrlConverter};
///
/// let converter = UrlConverter::builder()
///     .platform(PlatformFamily::Other)
///     .probe(FsProbe)
///     .build();
/// assert_eq!(converter.platform(), PlatformFamily::Other);
/// ```
#[derive(Default)]
pub struct ConverterBuilder {
	platform: Option<PlatformFamily>,
	probe: Option<Arc<dyn PathProbe>>,
}

impl ConverterBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Decode as if running on `platform` instead of the host.
	pub fn platform(mut self, platform: PlatformFamily) -> Self {
		self.platform = Some(platform);
		self
	}

	/// Replace the file-system probe.
	pub fn probe(mut self, probe: impl PathProbe + 'static) -> Self {
		self.probe = Some(Arc::new(probe));
		self
	}

	/// Build the converter. Unset values fall back to [`PlatformFamily::host`] and [`FsProbe`].
	pub fn build(self) -> UrlConverter {
		UrlConverter {
			platform: self.platform.unwrap_or_else(PlatformFamily::host),
			probe: self.probe.unwrap_or_else(|| Arc::new(FsProbe)),
		}
	}
}

/// Decode `locator` with the process-wide default converter.
pub fn to_local_path(locator: &Locator) -> Result<PathConversion, LocatorError> {
	DEFAULT_CONVERTER.to_local_path(locator)
}

/// Encode `path` with the process-wide default converter.
pub fn from_local_path(path: &Path) -> LocatorConversion {
	DEFAULT_CONVERTER.from_local_path(path)
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use std::path::PathBuf;

	#[test]
	fn builder_defaults_to_the_host() {
		let converter = UrlConverter::new();
		assert_eq!(converter.platform(), PlatformFamily::host());
		assert_eq!(UrlConverter::default().platform(), PlatformFamily::host());
		assert_eq!(ConverterBuilder::new().build().platform(), PlatformFamily::host());
	}

	#[test]
	fn builder_injects_platform_and_probe() {
		let converter = UrlConverter::builder()
			.platform(PlatformFamily::Windows)
			.probe(|_: &Path| true)
			.build();
		assert!(converter.platform().is_windows());
		assert!(converter.probe().exists(Path::new("anything")));
		assert_eq!(format!("{converter:?}"), "UrlConverter { platform: Windows, .. }");
	}

	#[test]
	fn shortcuts_use_the_default_converter() -> Result<()> {
		let url = Locator::parse("http://example.org/a.shp")?;
		assert!(!to_local_path(&url)?.is_converted());

		let dir = tempfile::tempdir()?;
		let path = dir.path().join("a.shp");
		let locator = from_local_path(&path).into_locator().expect("encodable path");
		assert_eq!(to_local_path(&locator)?.into_path(), Some(PathBuf::from(&path)));
		Ok(())
	}
}
