//! Sequence keys.

/// Key of a frame sequence.
///
/// Every animation has a [`Tag::Default`] sequence which is played until a
/// named tag is selected. Keeping the default as its own variant means no
/// string, not even an empty one, can collide with it.
///
/// # Examples
///
/// ```
/// use asesheet_types::animation::Tag;
///
/// let walk = Tag::from("walk");
/// assert_eq!(walk.name(), Some("walk"));
/// assert_eq!(Tag::Default.name(), None);
/// assert_ne!(Tag::from(""), Tag::Default);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
	/// Every frame of the sheet, in sheet order
	#[default]
	Default,
	/// A tag declared in the sheet metadata
	Named(String),
}

impl Tag {
	/// Creates a named tag.
	pub fn named(name: impl Into<String>) -> Self {
		Self::Named(name.into())
	}

	/// Returns the tag name, or `None` for the default sequence.
	pub fn name(&self) -> Option<&str> {
		match self {
			Self::Default => None,
			Self::Named(name) => Some(name),
		}
	}

	/// Returns true for the default sequence.
	pub fn is_default(&self) -> bool {
		matches!(self, Self::Default)
	}

	/// Human readable label, `<default>` for the default sequence.
	pub fn label(&self) -> &str {
		match self {
			Self::Default => "<default>",
			Self::Named(name) => name,
		}
	}
}

impl From<&str> for Tag {
	fn from(value: &str) -> Self {
		Self::Named(value.to_string())
	}
}

impl From<String> for Tag {
	fn from(value: String) -> Self {
		Self::Named(value)
	}
}

impl From<&Tag> for Tag {
	fn from(value: &Tag) -> Self {
		value.clone()
	}
}

impl std::fmt::Display for Tag {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.label())
	}
}
