//! fileurl core: trusted conversion between `file:` URLs and local paths.
//!
//! The conversion helpers shipped with most standard libraries disagree across
//! operating systems on escaped spaces, literal `+` signs, Windows UNC shares and
//! percent-encoding in general. This crate is the one place that untangles them,
//! so drivers can accept either a URL or a path and treat both the same way.
//!
//! It provides:
//! - [`UrlConverter`] to turn a [`Locator`] into a path and back,
//! - string helpers on locators: [`change_extension`], [`extend`] and [`parent`],
//! - [`PlatformFamily`] detection and the [`PathProbe`] seam used by the decoder.
//!
//! # Quick start
//! ```rust
//! use fileurl_core::*;
//! use std::path::PathBuf;
//!
//! fn main() -> Result<(), LocatorError> {
//!     let converter = UrlConverter::builder().platform(PlatformFamily::Other).build();
//!
//!     let url = Locator::parse("file:/sds/a.bmp")?;
//!     let path = converter.to_local_path(&url)?.into_path();
//!     assert_eq!(path, Some(PathBuf::from("/sds/a.bmp")));
//!
//!     let style = change_extension(&url, "sld")?;
//!     assert_eq!(style.as_str(), "file:/sds/a.sld");
//!     Ok(())
//! }
//! ```

mod algebra;
/// Re-exports the locator string operations.
pub use algebra::*;

mod converter;
/// Re-exports the converter, its builder and the process-wide shortcuts.
pub use converter::*;

mod decode;
mod encode;

mod error;
/// Re-exports the error type and the tagged conversion outcomes.
pub use error::*;

mod locator;
pub use locator::*;

mod platform;
pub use platform::*;

mod probe;
pub use probe::*;
