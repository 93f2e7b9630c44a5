//! Locator-to-path decoding.
//!
//! Works on the serialized locator rather than on the parsed URL, because the
//! serialized text is where the known defects show up: literal `+` signs that
//! must not turn into spaces, `file://host/share` forms that are UNC paths on
//! Windows, and `file:/x` versus `file:///x` spellings of the same path.

use crate::{Locator, LocatorError, PathConversion, PathProbe, PlatformFamily};
use percent_encoding::percent_decode_str;
use std::path::PathBuf;

const SIMPLE_PREFIX: &str = "file:/";
const STANDARD_PREFIX: &str = "file://";

pub(crate) fn to_local_path(
	locator: &Locator,
	platform: PlatformFamily,
	probe: &dyn PathProbe,
) -> Result<PathConversion, LocatorError> {
	if !locator.is_file() {
		return Ok(PathConversion::NotApplicable {
			scheme: locator.scheme().to_string(),
		});
	}

	let mut text = locator.as_str();
	if locator.query().is_some()
		&& let Some(pos) = text.find('?')
	{
		text = &text[..pos];
	}

	// A literal '+' is a plus sign, never an encoded space.
	let repaired = text.replace('+', "%2B");
	let decoded = decode_escapes(&repaired).map_err(|cause| LocatorError::decode(locator.as_str(), cause))?;

	let raw = if platform.is_windows() && decoded.starts_with(STANDARD_PREFIX) {
		unc_or_drive_path(&decoded, probe)
	} else if let Some(rest) = decoded.strip_prefix(STANDARD_PREFIX) {
		rest.to_string()
	} else if decoded.starts_with(SIMPLE_PREFIX) {
		decoded[SIMPLE_PREFIX.len() - 1..].to_string()
	} else {
		authority_path(locator)
	};

	let path = native_path(&raw, platform);
	log::trace!("decoded {locator} to {path:?}");
	Ok(PathConversion::Converted(path))
}

/// `file://host/share/x` keeps the host as a UNC prefix if that path exists,
/// otherwise it is read as `host/share/x` relative to the current drive.
fn unc_or_drive_path(decoded: &str, probe: &dyn PathProbe) -> String {
	let candidate = &decoded[STANDARD_PREFIX.len() - 2..];
	let after_slashes = &candidate[2..];

	// An empty host is never a share: `file:///C:/x` names `C:\x`.
	if after_slashes.is_empty() || after_slashes.starts_with('/') {
		return after_slashes.to_string();
	}

	if probe.exists(&native_path(candidate, PlatformFamily::Windows)) {
		candidate.to_string()
	} else {
		log::debug!("UNC path {candidate:?} does not exist, reading it relative to the current drive");
		after_slashes.to_string()
	}
}

/// Used when the serialized form has no slash after `file:`; the parsed URL
/// still knows authority and path (e.g. `file:\\host\share` or `file:a.shp`).
fn authority_path(locator: &Locator) -> String {
	let authority = locator.authority();
	let path = locator.path().replace("%20", " ");
	if authority.is_empty() {
		path
	} else {
		format!("//{authority}{path}")
	}
}

/// Shape `raw` the way a native path object of `platform` would.
///
/// On Windows, separators become backslashes and the slash in front of a drive
/// letter (`/C:/x`) is dropped.
pub(crate) fn native_path(raw: &str, platform: PlatformFamily) -> PathBuf {
	match platform {
		PlatformFamily::Other => PathBuf::from(raw),
		PlatformFamily::Windows => {
			let mut path = raw.replace('/', "\\");
			let bytes = path.as_bytes();
			if bytes.len() >= 3 && bytes[0] == b'\\' && bytes[1].is_ascii_alphabetic() && bytes[2] == b':' {
				path.remove(0);
			}
			PathBuf::from(path)
		}
	}
}

/// Percent-decode `text` as UTF-8, rejecting malformed escape sequences.
fn decode_escapes(text: &str) -> Result<String, String> {
	let bytes = text.as_bytes();
	let mut i = 0;
	while i < bytes.len() {
		if bytes[i] == b'%' {
			let valid = bytes.len() > i + 2 && bytes[i + 1].is_ascii_hexdigit() && bytes[i + 2].is_ascii_hexdigit();
			if !valid {
				return Err(format!("malformed escape sequence at byte {i}"));
			}
			i += 3;
		} else {
			i += 1;
		}
	}

	percent_decode_str(text)
		.decode_utf8()
		.map(|s| s.into_owned())
		.map_err(|e| format!("decoded bytes are not UTF-8: {e}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::Result;
	use pretty_assertions::assert_eq;
	use rstest::rstest;
	use std::{
		path::Path,
		sync::{Arc, Mutex},
	};

	fn decode(input: &str, platform: PlatformFamily, probe: &dyn PathProbe) -> Result<PathConversion> {
		Ok(to_local_path(&Locator::parse(input)?, platform, probe)?)
	}

	fn decode_path(input: &str, platform: PlatformFamily, share_exists: bool) -> Result<String> {
		let probe = move |_: &Path| share_exists;
		let path = decode(input, platform, &probe)?.into_path().expect("file locator");
		Ok(path.to_string_lossy().into_owned())
	}

	#[rstest]
	#[case("file:/sds/a.bmp", "/sds/a.bmp")]
	#[case("file:///sds/a.bmp", "/sds/a.bmp")]
	#[case("file:/sds/a.bmp?version=2", "/sds/a.bmp")]
	#[case("file:/sds/a+b.bmp", "/sds/a+b.bmp")]
	#[case("file:/sds/a%2Bb.bmp", "/sds/a+b.bmp")]
	#[case("file:/sds/a%20b.bmp", "/sds/a b.bmp")]
	#[case("file:/sds/caf%C3%A9.shp", "/sds/café.shp")]
	#[case("file:/sds/100%25.shp", "/sds/100%.shp")]
	#[case("file:/sds/a.bmp#frag", "/sds/a.bmp#frag")]
	#[case("file://server/share/a.shp", "server/share/a.shp")]
	#[case("file://", "")]
	fn decodes_posix_locators(#[case] input: &str, #[case] expected: &str) -> Result<()> {
		assert_eq!(decode_path(input, PlatformFamily::Other, true)?, expected);
		Ok(())
	}

	#[rstest]
	#[case(r"file:\\server\share\a.shp", "//server/share/a.shp")]
	#[case(r"file:\\server\share\a%20b.shp", "//server/share/a b.shp")]
	#[case("file:a.shp", "/a.shp")]
	fn decodes_through_authority_and_path(#[case] input: &str, #[case] expected: &str) -> Result<()> {
		assert_eq!(decode_path(input, PlatformFamily::Other, false)?, expected);
		Ok(())
	}

	#[rstest]
	#[case("file://server/share/a.shp", true, r"\\server\share\a.shp")]
	#[case("file://server/share/a.shp", false, r"server\share\a.shp")]
	#[case("file://server/share/a%20b.shp", true, r"\\server\share\a b.shp")]
	#[case("file://server", true, r"\\server")]
	#[case("file://server", false, "server")]
	#[case("file:///C:/data/a.shp", true, r"C:\data\a.shp")]
	#[case("file:///C:/data/a.shp", false, r"C:\data\a.shp")]
	#[case("file:/C:/data/a.shp", false, r"C:\data\a.shp")]
	#[case("file:////server/share/a.shp", false, r"\\server\share\a.shp")]
	#[case("file:///", false, r"\")]
	#[case("file://", false, "")]
	fn decodes_windows_locators(#[case] input: &str, #[case] share_exists: bool, #[case] expected: &str) -> Result<()> {
		assert_eq!(decode_path(input, PlatformFamily::Windows, share_exists)?, expected);
		Ok(())
	}

	#[test]
	fn probe_sees_the_native_unc_candidate() -> Result<()> {
		let seen = Arc::new(Mutex::new(Vec::<PathBuf>::new()));
		let recorded = Arc::clone(&seen);
		let probe = move |p: &Path| {
			recorded.lock().unwrap().push(p.to_path_buf());
			true
		};
		decode("file://server/share/a.shp", PlatformFamily::Windows, &probe)?;
		assert_eq!(*seen.lock().unwrap(), vec![PathBuf::from(r"\\server\share\a.shp")]);
		Ok(())
	}

	#[rstest]
	#[case("file:///C:/a.shp")]
	#[case("file:/C:/a.shp")]
	#[case("file:////server/share/a.shp")]
	fn probe_is_not_consulted_without_a_host(#[case] input: &str) -> Result<()> {
		let probe = |_: &Path| -> bool { panic!("probe must not be consulted") };
		assert!(decode(input, PlatformFamily::Windows, &probe)?.is_converted());
		assert!(decode(input, PlatformFamily::Other, &probe)?.is_converted());
		Ok(())
	}

	#[rstest]
	#[case("http://www.some.org/foo/bar.shp", "http")]
	#[case("jar:file:/some.zip!/bar.shp", "jar")]
	#[case("https://example.org/file%zz", "https")]
	fn other_schemes_are_not_applicable(#[case] input: &str, #[case] scheme: &str) -> Result<()> {
		let conversion = decode(input, PlatformFamily::Other, &|_: &Path| true)?;
		assert_eq!(
			conversion,
			PathConversion::NotApplicable {
				scheme: scheme.to_string()
			}
		);
		Ok(())
	}

	#[rstest]
	#[case("file:/sds/a%zz.bmp", "malformed escape sequence at byte 11")]
	#[case("file:/sds/a%2", "malformed escape sequence at byte 11")]
	#[case("file:/sds/a%", "malformed escape sequence at byte 11")]
	#[case("file:/sds/a%FF.bmp", "decoded bytes are not UTF-8")]
	fn rejects_undecodable_locators(#[case] input: &str, #[case] cause: &str) -> Result<()> {
		let err = to_local_path(&Locator::parse(input)?, PlatformFamily::Other, &|_: &Path| true).unwrap_err();
		match err {
			LocatorError::Decode { locator, cause: c } => {
				assert_eq!(locator, input);
				assert!(c.starts_with(cause), "{c}");
			}
			other => panic!("unexpected error {other:?}"),
		}
		Ok(())
	}

	#[rstest]
	#[case("/C:/x/y", r"C:\x\y")]
	#[case("//host/share/y", r"\\host\share\y")]
	#[case("relative/y", r"relative\y")]
	#[case("/x/y", r"\x\y")]
	#[case("/1:/x", r"\1:\x")]
	fn windows_native_shape(#[case] raw: &str, #[case] expected: &str) {
		assert_eq!(native_path(raw, PlatformFamily::Windows), PathBuf::from(expected));
	}

	#[test]
	fn posix_native_shape_is_untouched() {
		assert_eq!(native_path("/C:/x", PlatformFamily::Other), PathBuf::from("/C:/x"));
	}
}
