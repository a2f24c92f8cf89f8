use crate::{ActivityType, LinkType, ObjectType};

crate::strenum! {
	pub enum BaseType {
		;
		Object(ObjectType),
		Link(LinkType)
	};
}

/// Identity and type tags, shared by every entity and by raw json values.
///
/// ActivityStreams allows `type` to be either one string or an array of strings: every check
/// here looks at each tag in turn, so `["Follow", "Foo"]` counts as a Follow.
pub trait Base {
	fn id(&self) -> Option<&str> { None }
	/// all type tags, in document order
	fn types(&self) -> Vec<&str> { Vec::new() }

	fn has_type(&self, tag: &str) -> bool {
		self.types().contains(&tag)
	}

	/// first type tag this crate recognizes
	fn base_type(&self) -> Option<BaseType> {
		self.types()
			.into_iter()
			.find_map(|t| BaseType::try_from(t).ok())
	}

	fn is_link(&self) -> bool {
		self.has_type(LinkType::Link.as_ref())
	}

	/// true if any type tag is one of the 28 activity subtypes (bare "Activity" is not one)
	fn is_activity(&self) -> bool {
		self.types()
			.into_iter()
			.any(|t| ActivityType::subtype(t).is_some())
	}
}

impl Base for String {
	fn id(&self) -> Option<&str> {
		Some(self)
	}

	fn types(&self) -> Vec<&str> {
		vec!["Link"]
	}
}

impl Base for serde_json::Value {
	fn id(&self) -> Option<&str> {
		if self.is_string() {
			self.as_str()
		} else {
			self.get("id")?.as_str()
		}
	}

	fn types(&self) -> Vec<&str> {
		match self.get("type") {
			Some(serde_json::Value::String(t)) => vec![t.as_str()],
			Some(serde_json::Value::Array(arr)) => arr.iter().filter_map(|x| x.as_str()).collect(),
			_ => Vec::new(),
		}
	}
}

/// Shallow capability check: true for any json map. No field is inspected, so a positive
/// answer says nothing about which ActivityStreams properties are present.
pub fn is_object(value: &serde_json::Value) -> bool {
	value.is_object()
}

/// true for json maps tagged `"Link"`. `href` is not checked, so an object that happens to
/// carry the Link tag is indistinguishable from a real link
pub fn is_link(value: &serde_json::Value) -> bool {
	is_object(value) && value.is_link()
}

/// true for json maps tagged with at least one of the 28 activity subtypes
pub fn is_activity(value: &serde_json::Value) -> bool {
	is_object(value) && value.is_activity()
}
