//! Read-only virtual file systems for `asesheet` assets.
//!
//! Sprite sheets are a JSON document plus an image referenced by a path
//! relative to that document. Loaders read both through the [`Vfs`] trait so
//! the same code works for files on disk ([`DirFs`]) and for assets kept in
//! memory ([`MemFs`]), e.g. bytes embedded with `include_bytes!`.
//!
//! Paths are always relative to the file system root and use `/` or the
//! platform separator; `.` components are ignored and `..` pops a component.
//!
//! # Examples
//!
//! ```
//! use asesheet_vfs::{MemFs, Vfs};
//! use std::path::Path;
//!
//! let mut fs = MemFs::new();
//! fs.insert("sprites/hero.json", b"{}".to_vec());
//!
//! assert!(fs.exists(Path::new("sprites/./hero.json")));
//! assert_eq!(fs.read(Path::new("sprites/hero.json")).unwrap(), b"{}");
//! ```

use std::{
	collections::HashMap,
	io,
	path::{Component, Path, PathBuf},
};

/// Read-only file system.
pub trait Vfs {
	/// Reads a whole file.
	fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

	/// Returns true if `path` names a readable file.
	fn exists(&self, path: &Path) -> bool;
}

impl<T: Vfs + ?Sized> Vfs for &T {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		(**self).read(path)
	}

	fn exists(&self, path: &Path) -> bool {
		(**self).exists(path)
	}
}

/// Normalizes a relative path: drops `.` and root components, resolves `..`.
///
/// Returns `None` if `..` would climb above the root.
pub fn normalize(path: &Path) -> Option<PathBuf> {
	let mut normalized = PathBuf::new();
	for component in path.components() {
		match component {
			Component::Normal(part) => normalized.push(part),
			Component::ParentDir => {
				if !normalized.pop() {
					return None;
				}
			}
			Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
		}
	}
	Some(normalized)
}

fn escapes_root(path: &Path) -> io::Error {
	io::Error::new(
		io::ErrorKind::InvalidInput,
		format!("path {} escapes the file system root", path.display()),
	)
}

/// File system rooted at a directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirFs {
	root: PathBuf,
}

impl DirFs {
	/// Creates a file system serving files below `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// The root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn resolve(&self, path: &Path) -> io::Result<PathBuf> {
		normalize(path).map(|relative| self.root.join(relative)).ok_or_else(|| escapes_root(path))
	}
}

impl Vfs for DirFs {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		let full = self.resolve(path)?;
		log::trace!("Reading {}", full.display());
		std::fs::read(full)
	}

	fn exists(&self, path: &Path) -> bool {
		self.resolve(path).is_ok_and(|full| full.is_file())
	}
}

/// In-memory file system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemFs {
	files: HashMap<PathBuf, Vec<u8>>,
}

impl MemFs {
	/// Creates an empty file system.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a file, returning the previous contents.
	///
	/// Paths climbing above the root are stored as given and can never be read.
	pub fn insert(&mut self, path: impl AsRef<Path>, data: Vec<u8>) -> Option<Vec<u8>> {
		let path = path.as_ref();
		let key = normalize(path).unwrap_or_else(|| path.to_path_buf());
		self.files.insert(key, data)
	}

	/// Builder form of [`MemFs::insert`].
	pub fn with_file(mut self, path: impl AsRef<Path>, data: Vec<u8>) -> Self {
		self.insert(path, data);
		self
	}

	/// Number of files.
	pub fn len(&self) -> usize {
		self.files.len()
	}

	/// Returns true if no file has been added.
	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}
}

impl Vfs for MemFs {
	fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
		let key = normalize(path).ok_or_else(|| escapes_root(path))?;
		self.files.get(&key).cloned().ok_or_else(|| {
			io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
		})
	}

	fn exists(&self, path: &Path) -> bool {
		normalize(path).is_some_and(|key| self.files.contains_key(&key))
	}
}
