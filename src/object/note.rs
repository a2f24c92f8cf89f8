use crate::Object;

use super::ObjectType;

/// Represents a short written work typically less than a single paragraph in length
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Object")]
pub struct Note {
	#[serde(flatten)]
	pub base: Object,
}

impl Note {
	pub const TYPE : ObjectType = ObjectType::Note;

	pub fn new(mut base: Object) -> Self {
		base.pin_type(Self::TYPE.as_ref());
		Note { base }
	}
}

impl Default for Note {
	fn default() -> Self {
		Note::new(Object::default())
	}
}

impl From<Note> for Object {
	fn from(value: Note) -> Self {
		value.base
	}
}

impl TryFrom<Object> for Note {
	type Error = crate::TypeValueError;

	fn try_from(value: Object) -> Result<Self, Self::Error> {
		if value.types().contains(&Self::TYPE.as_ref()) {
			Ok(Note { base: value })
		} else {
			Err(crate::TypeValueError)
		}
	}
}

crate::macros::entity! { Note => base }
