//! Path-to-locator encoding.
//!
//! The URL is built by `url::Url::from_file_path` (or `from_directory_path` for
//! existing directories), then the two characters some platform conversions
//! leave unescaped, `+` and space, are escaped before the result is reparsed.

use crate::{Locator, LocatorConversion, PathProbe};
use std::path::{Path, PathBuf};
use url::Url;

pub(crate) fn from_local_path(path: &Path, probe: &dyn PathProbe) -> LocatorConversion {
	let absolute = match absolute_path(path) {
		Ok(absolute) => absolute,
		Err(e) => return failed(path, format!("can not resolve the current directory: {e}")),
	};

	let natural = if probe.is_dir(&absolute) {
		Url::from_directory_path(&absolute)
	} else {
		Url::from_file_path(&absolute)
	};
	let url = match natural {
		Ok(url) => url,
		Err(()) => return failed(path, "path can not be expressed as a file locator"),
	};

	let repaired = escape_leftovers(url.as_str());
	match Locator::parse(&repaired) {
		Ok(locator) => {
			log::trace!("encoded {path:?} as {locator}");
			LocatorConversion::Converted(locator)
		}
		Err(e) => failed(path, e),
	}
}

fn absolute_path(path: &Path) -> std::io::Result<PathBuf> {
	if path.is_absolute() {
		Ok(path.to_path_buf())
	} else {
		Ok(std::env::current_dir()?.join(path))
	}
}

fn escape_leftovers(serialized: &str) -> String {
	serialized.replace('+', "%2B").replace(' ', "%20")
}

fn failed(path: &Path, reason: impl ToString) -> LocatorConversion {
	LocatorConversion::Failed {
		path: path.to_path_buf(),
		reason: reason.to_string(),
	}
}
