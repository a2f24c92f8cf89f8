pub mod activity;
pub mod collection;
pub mod image;
pub mod note;
pub mod place;

use std::collections::BTreeMap;

use crate::{Field, FieldErr, Link, Node, OneOrMore, Reference};
use crate::jsonld::Context;

use activity::ActivityType;
use collection::{Collection, CollectionType};
use image::Image;
use place::Place;

crate::strenum! {
	pub enum ObjectType {
		Object,
		Image,
		Note,
		Place;

		Activity(ActivityType),
		Collection(CollectionType)
	};
}

/// Base unit of ActivityStreams content. Every property is optional: a document may carry any
/// subset of them, and nothing here checks which ones are present.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
	#[serde(rename = "@context", default, skip_serializing_if = "Option::is_none")]
	pub context: Option<Context>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub id: Option<String>,
	#[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
	pub kind: Option<OneOrMore<String>>,
	/// Identifies a resource attached or related to an object that potentially requires special handling
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attachment: Option<OneOrMore<Reference>>,
	/// Identifies one or more entities to which this object is attributed
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub attributed_to: Option<Node<Object>>,
	/// Identifies one or more Objects that are part of the private secondary audience of this Object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bcc: Option<OneOrMore<Node<Object>>>,
	/// Identifies an Object that is part of the private primary audience of this Object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub bto: Option<OneOrMore<Node<Object>>>,
	/// Identifies an Object that is part of the public secondary audience of this Object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub cc: Option<OneOrMore<Node<Object>>>,
	/// The content or textual representation of the Object. By default, the value of content is HTML
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub content: Option<String>,
	/// Identifies the entity (e.g. an application) that generated the object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub generator: Option<Node<Object>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image: Option<OneOrMore<Reference<Image>>>,
	/// Indicates one or more entities for which this object is considered a response
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub in_reply_to: Option<Node<Object>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub location: Option<Node<Place>>,
	/// A simple, human-readable, plain-text name for the object. HTML markup MUST NOT be included
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// language tag to name
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name_map: Option<BTreeMap<String, String>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub preview: Option<Reference>,
	/// ISO-8601 timestamp, kept as found. See [Object::published_at]
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub published: Option<String>,
	/// Identifies a Collection containing objects considered to be responses to this object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub replies: Option<Node<Collection<Node<Object>>>>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub summary: Option<String>,
	/// One or more "tags" that have been associated with an objects. A tag can be any kind of Object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tag: Option<OneOrMore<Reference>>,
	/// Identifies an entity considered to be part of the public primary audience of an Object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub to: Option<OneOrMore<Node<Object>>>,
	/// Identifies one or more links to representations of the object
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub url: Option<OneOrMore<Node<Link>>>,
}

impl Object {
	/// every property name an Object understands, as found in json documents
	pub const PROPERTIES : &'static [&'static str] = &[
		"@context", "id", "type", "attachment", "attributedTo", "bcc", "bto", "cc", "content",
		"generator", "image", "inReplyTo", "location", "name", "nameMap", "preview", "published",
		"replies", "summary", "tag", "to", "url",
	];

	pub fn new(kind: ObjectType) -> Self {
		Object {
			kind: Some(OneOrMore::One(kind.as_ref().to_string())),
			..Default::default()
		}
	}

	pub fn types(&self) -> Vec<&str> {
		match &self.kind {
			Some(kind) => kind.iter().map(String::as_str).collect(),
			None => Vec::new(),
		}
	}

	/// replace type tags with a single one
	pub(crate) fn pin_type(&mut self, kind: &str) {
		self.kind = Some(OneOrMore::One(kind.to_string()));
	}

	pub fn published_at(&self) -> Field<chrono::DateTime<chrono::Utc>> {
		let published = self.published.as_deref().ok_or(FieldErr("published"))?;
		match chrono::DateTime::parse_from_rfc3339(published) {
			Ok(x) => Ok(x.with_timezone(&chrono::Utc)),
			Err(e) => {
				tracing::debug!("invalid published timestamp '{published}': {e}");
				Err(FieldErr("published"))
			},
		}
	}
}

impl AsRef<Object> for Object {
	fn as_ref(&self) -> &Object {
		self
	}
}

impl AsMut<Object> for Object {
	fn as_mut(&mut self) -> &mut Object {
		self
	}
}

impl crate::Base for Object {
	fn id(&self) -> Option<&str> {
		self.id.as_deref()
	}

	fn types(&self) -> Vec<&str> {
		Object::types(self)
	}
}

impl crate::LD for Object {
	fn ld_context(mut self) -> Self {
		self.context = Some(crate::jsonld::default_context());
		self
	}
}

/// Chaining setters for anything embedding an [Object]. Passing `None` clears the field.
pub trait ObjectMut : AsMut<Object> + Sized {
	crate::macros::setter! { id -> String }
	crate::macros::setter! { context -> Context }
	crate::macros::setter! { attachment -> OneOrMore<Reference> }
	crate::macros::setter! { attributed_to -> Node<Object> }
	crate::macros::setter! { bcc -> OneOrMore<Node<Object>> }
	crate::macros::setter! { bto -> OneOrMore<Node<Object>> }
	crate::macros::setter! { cc -> OneOrMore<Node<Object>> }
	crate::macros::setter! { content -> String }
	crate::macros::setter! { generator -> Node<Object> }
	crate::macros::setter! { image -> OneOrMore<Reference<Image>> }
	crate::macros::setter! { in_reply_to -> Node<Object> }
	crate::macros::setter! { location -> Node<Place> }
	crate::macros::setter! { name -> String }
	crate::macros::setter! { name_map -> BTreeMap<String, String> }
	crate::macros::setter! { preview -> Reference }
	crate::macros::setter! { published -> String }
	crate::macros::setter! { replies -> Node<Collection<Node<Object>>> }
	crate::macros::setter! { summary -> String }
	crate::macros::setter! { tag -> OneOrMore<Reference> }
	crate::macros::setter! { to -> OneOrMore<Node<Object>> }
	crate::macros::setter! { url -> OneOrMore<Node<Link>> }

	fn set_type(mut self, val: Option<OneOrMore<String>>) -> Self {
		<Self as AsMut<Object>>::as_mut(&mut self).kind = val;
		self
	}

	fn set_published_at(mut self, val: Option<chrono::DateTime<chrono::Utc>>) -> Self {
		<Self as AsMut<Object>>::as_mut(&mut self).published = val.map(|x| x.to_rfc3339());
		self
	}
}

impl<T: AsMut<Object>> ObjectMut for T {}
