use crate::{Activity, Base, BaseType, Collection, Image, Link, Note, Object, ObjectType, Place};

/// Any ActivityStreams document, sorted into the kinds this crate knows about
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Entity {
	Link(Link),
	Activity(Activity),
	Collection(Collection),
	Note(Note),
	Place(Place),
	Image(Image),
	Object(Object),
}

impl Entity {
	/// Classify by type tags: Link and activity subtypes go through [crate::is_link] and
	/// [crate::is_activity], then the first recognized object tag decides (so a bare "Activity"
	/// still lands in [Entity::Activity]). Anything else is a plain Object.
	pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
		if crate::is_link(&value) {
			return Ok(Entity::Link(serde_json::from_value(value)?));
		}
		if crate::is_activity(&value) {
			return Ok(Entity::Activity(serde_json::from_value(value)?));
		}
		let kind = value.types()
			.into_iter()
			.find_map(|t| ObjectType::try_from(t).ok());
		Ok(match kind {
			Some(ObjectType::Activity(_)) => Entity::Activity(serde_json::from_value(value)?),
			Some(ObjectType::Collection(_)) => Entity::Collection(serde_json::from_value(value)?),
			Some(ObjectType::Note) => Entity::Note(serde_json::from_value(value)?),
			Some(ObjectType::Place) => Entity::Place(serde_json::from_value(value)?),
			Some(ObjectType::Image) => Entity::Image(serde_json::from_value(value)?),
			_ => Entity::Object(serde_json::from_value(value)?),
		})
	}

	pub fn as_object(&self) -> Option<&Object> {
		match self {
			Entity::Link(_) => None,
			Entity::Activity(x) => Some(&x.base),
			Entity::Collection(x) => Some(&x.base),
			Entity::Note(x) => Some(&x.base),
			Entity::Place(x) => Some(&x.base),
			Entity::Image(x) => Some(&x.base),
			Entity::Object(x) => Some(x),
		}
	}
}

impl<'de> serde::Deserialize<'de> for Entity {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
		Entity::from_json(value).map_err(serde::de::Error::custom)
	}
}

impl Base for Entity {
	fn id(&self) -> Option<&str> {
		match self {
			Entity::Link(x) => x.id(),
			_ => self.as_object().and_then(|x| x.id.as_deref()),
		}
	}

	fn types(&self) -> Vec<&str> {
		match self {
			Entity::Link(x) => x.types(),
			_ => self.as_object().map(|x| x.types()).unwrap_or_default(),
		}
	}

	fn base_type(&self) -> Option<BaseType> {
		match self {
			Entity::Link(_) => Some(BaseType::Link(crate::LinkType::Link)),
			_ => self.types()
				.into_iter()
				.find_map(|t| BaseType::try_from(t).ok()),
		}
	}
}
