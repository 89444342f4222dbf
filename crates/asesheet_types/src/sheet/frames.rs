//! Deserialization of the `frames` section, which Aseprite writes either as an
//! array or as an object keyed by file name.

use std::fmt;

use serde::{
	Deserializer,
	de::{MapAccess, SeqAccess, Visitor},
};

use super::SheetFrame;

struct FramesVisitor;

impl<'de> Visitor<'de> for FramesVisitor {
	type Value = Vec<SheetFrame>;

	fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
		formatter.write_str("an array of frames or an object of frames keyed by file name")
	}

	fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
	where
		A: SeqAccess<'de>,
	{
		let mut frames = Vec::with_capacity(seq.size_hint().unwrap_or(0));
		while let Some(frame) = seq.next_element::<SheetFrame>()? {
			frames.push(frame);
		}
		Ok(frames)
	}

	// serde_json hands entries over in document order, so collecting here
	// keeps the exported frame order without an ordered map.
	fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
	where
		A: MapAccess<'de>,
	{
		let mut frames = Vec::with_capacity(map.size_hint().unwrap_or(0));
		while let Some((filename, mut frame)) = map.next_entry::<String, SheetFrame>()? {
			frame.filename = Some(filename);
			frames.push(frame);
		}
		Ok(frames)
	}
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SheetFrame>, D::Error>
where
	D: Deserializer<'de>,
{
	deserializer.deserialize_any(FramesVisitor)
}
