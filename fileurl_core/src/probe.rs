//! The file-system seam used by the converter.
//!
//! Decoding is pure string work except for one heuristic: on Windows a
//! `file://host/share/...` locator only keeps its UNC prefix if that path
//! exists. Encoding asks whether a path is a directory to add the trailing
//! slash. Both questions go through [`PathProbe`], so tests can answer them
//! without touching the disk.

use std::path::Path;

/// Answers existence questions about local paths.
///
/// Implementations must not fail: an I/O error counts as "does not exist".
pub trait PathProbe: Send + Sync {
	fn exists(&self, path: &Path) -> bool;

	fn is_dir(&self, path: &Path) -> bool {
		let _ = path;
		false
	}
}

/// Probe backed by the real file system. Each question is a single `stat`.
#[derive(Clone, Copy, Debug, Default)]
pub struct FsProbe;

impl PathProbe for FsProbe {
	fn exists(&self, path: &Path) -> bool {
		std::fs::metadata(path).is_ok()
	}

	fn is_dir(&self, path: &Path) -> bool {
		std::fs::metadata(path).is_ok_and(|m| m.is_dir())
	}
}

/// Any `Fn(&Path) -> bool` closure can answer `exists`.
impl<F> PathProbe for F
where
	F: Fn(&Path) -> bool + Send + Sync,
{
	fn exists(&self, path: &Path) -> bool {
		self(path)
	}
}
