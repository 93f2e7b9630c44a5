//! Host operating-system family detection.
//!
//! The family is computed once per process and cached. The environment
//! variable `FILEURL_PLATFORM` (`windows`, `other`, `unix` or `posix`) overrides
//! the detected value, which is handy when reproducing Windows decoding on a
//! Unix build machine. An unrecognised override falls back to detection.

use std::{fmt, sync::LazyLock};

/// Name of the environment variable that overrides platform detection.
pub const PLATFORM_ENV: &str = "FILEURL_PLATFORM";

static HOST_PLATFORM: LazyLock<PlatformFamily> = LazyLock::new(|| {
	let detected = PlatformFamily::from_os_name(std::env::consts::OS);
	match std::env::var(PLATFORM_ENV) {
		Ok(value) => match PlatformFamily::from_override(&value) {
			Some(family) => {
				log::debug!("platform family overridden by {PLATFORM_ENV}={value:?}: {family}");
				family
			}
			None => {
				log::warn!("ignoring unrecognised {PLATFORM_ENV}={value:?}, using detected {detected}");
				detected
			}
		},
		Err(_) => detected,
	}
});

/// Operating-system family, as far as path syntax is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PlatformFamily {
	/// Drive letters, backslashes and UNC shares.
	Windows,
	/// Everything POSIX-like.
	#[default]
	Other,
}

impl PlatformFamily {
	/// The family of the running process, detected once and cached.
	pub fn host() -> Self {
		*HOST_PLATFORM
	}

	/// Classify an OS name such as `std::env::consts::OS` or `"Windows 10"`.
	pub fn from_os_name(name: &str) -> Self {
		if name.to_ascii_uppercase().contains("WINDOWS") {
			PlatformFamily::Windows
		} else {
			PlatformFamily::Other
		}
	}

	fn from_override(value: &str) -> Option<Self> {
		match value.trim().to_ascii_lowercase().as_str() {
			"windows" => Some(PlatformFamily::Windows),
			"other" | "unix" | "posix" => Some(PlatformFamily::Other),
			_ => None,
		}
	}

	pub fn is_windows(self) -> bool {
		self == PlatformFamily::Windows
	}
}

impl fmt::Display for PlatformFamily {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			PlatformFamily::Windows => "windows",
			PlatformFamily::Other => "other",
		})
	}
}

/// Is the host a Windows-family OS?
pub fn is_windows_family() -> bool {
	PlatformFamily::host().is_windows()
}
