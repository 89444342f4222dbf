//! Loader configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{error::SheetError, sheet::constants::SUPPORTED_VERSION_PREFIX};

/// What the default sequence contains when a sheet declares tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefaultSequence {
	/// Every frame of the sheet in sheet order
	#[default]
	AllFrames,
	/// The sequence of the first declared tag
	FirstTag,
}

/// Options controlling how a sprite sheet becomes animation data.
///
/// Every field has a default, so configuration files only need to name what
/// they change:
///
/// ```toml
/// version_prefix = "1.3"
/// default_sequence = "first_tag"
/// allow_duplicate_tags = true
/// ```
///
/// # Examples
///
/// ```
/// use asesheet_types::loader::{DefaultSequence, LoadOptions};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let options = LoadOptions::from_toml_str("default_sequence = \"first_tag\"")?;
/// assert_eq!(options.default_sequence, DefaultSequence::FirstTag);
/// assert_eq!(options.version_prefix, "1.3");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadOptions {
	/// `meta.version` must start with this prefix
	pub version_prefix: String,
	/// Contents of the default sequence for tagged sheets
	pub default_sequence: DefaultSequence,
	/// Let a later tag replace an earlier one with the same name instead of failing
	pub allow_duplicate_tags: bool,
}

impl Default for LoadOptions {
	fn default() -> Self {
		Self {
			version_prefix: SUPPORTED_VERSION_PREFIX.to_string(),
			default_sequence: DefaultSequence::default(),
			allow_duplicate_tags: false,
		}
	}
}

impl LoadOptions {
	/// Reads options from TOML text.
	pub fn from_toml_str(toml: &str) -> Result<Self, SheetError> {
		let settings = config::Config::builder()
			.add_source(config::File::from_str(toml, config::FileFormat::Toml))
			.build()?;
		Ok(settings.try_deserialize()?)
	}

	/// Reads options from a TOML file.
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SheetError> {
		let settings = config::Config::builder()
			.add_source(config::File::from(path.as_ref()).format(config::FileFormat::Toml))
			.build()?;
		Ok(settings.try_deserialize()?)
	}
}
