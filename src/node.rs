use crate::{Base, Link, Object};

/// ActivityStreams value node: a bare IRI pointing to something, the embedded thing itself, or
/// several of those. Consumers must handle every form, there is no guarantee on which one a
/// document carries
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Node<T> {
	Id(String),
	Array(Vec<Node<T>>),
	Object(Box<T>),
}

impl<T> Node<T> {
	pub fn link(uri: impl Into<String>) -> Self {
		Node::Id(uri.into())
	}

	pub fn links(uris: impl IntoIterator<Item = impl Into<String>>) -> Self {
		Node::Array(uris.into_iter().map(Node::link).collect())
	}

	pub fn object(x: T) -> Self {
		Node::Object(Box::new(x))
	}

	/// return reference to embedded object (or first if many are present)
	pub fn get(&self) -> Option<&T> {
		match self {
			Node::Id(_) => None,
			Node::Object(x) => Some(x),
			Node::Array(v) => v.iter().find_map(|x| x.get()),
		}
	}

	/// consume node, returning embedded object (or first if many are present)
	pub fn extract(self) -> Option<T> {
		match self {
			Node::Id(_) => None,
			Node::Object(x) => Some(*x),
			Node::Array(v) => v.into_iter().find_map(|x| x.extract()),
		}
	}

	/// true only if Node is a bare IRI
	pub fn is_link(&self) -> bool {
		matches!(self, Node::Id(_))
	}

	/// true only if Node carries one embedded object
	pub fn is_object(&self) -> bool {
		matches!(self, Node::Object(_))
	}

	/// true only if Node carries many values
	pub fn is_array(&self) -> bool {
		matches!(self, Node::Array(_))
	}

	/// number of contained values, links count as values
	pub fn len(&self) -> usize {
		match self {
			Node::Id(_) | Node::Object(_) => 1,
			Node::Array(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn flat(self) -> Vec<Node<T>> {
		match self {
			Node::Id(_) | Node::Object(_) => vec![self],
			Node::Array(v) => v,
		}
	}
}

impl<T: Base> Node<T> {
	/// returns id of node: the IRI itself for links, the `id` field for embedded objects, the
	/// first id for arrays
	pub fn id(&self) -> Option<&str> {
		match self {
			Node::Id(uri) => Some(uri),
			Node::Object(x) => x.id(),
			Node::Array(v) => v.first()?.id(),
		}
	}

	pub fn all_ids(&self) -> Vec<&str> {
		match self {
			Node::Id(_) | Node::Object(_) => self.id().into_iter().collect(),
			Node::Array(v) => v.iter().filter_map(|x| x.id()).collect(),
		}
	}
}

impl<T> From<&str> for Node<T> {
	fn from(value: &str) -> Self {
		Node::Id(value.to_string())
	}
}

impl<T: serde::de::DeserializeOwned> Node<T> {
	fn from_value(value: serde_json::Value, nested: bool) -> serde_json::Result<Self> {
		match value {
			serde_json::Value::String(uri) => Ok(Node::Id(uri)),
			serde_json::Value::Array(_) if nested => Err(serde::de::Error::custom("nested arrays are not valid nodes")),
			serde_json::Value::Array(values) => values
				.into_iter()
				.map(|x| Node::from_value(x, true))
				.collect::<serde_json::Result<Vec<_>>>()
				.map(Node::Array),
			serde_json::Value::Object(_) => serde_json::from_value(value).map(Node::object),
			other => Err(serde::de::Error::custom(format!("expected IRI, object or array, found {other}"))),
		}
	}
}

// objects are only ever read from maps: every Object field is optional, so a derived struct
// would happily accept an array positionally
impl<'de, T: serde::de::DeserializeOwned> serde::Deserialize<'de> for Node<T> {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
		Node::from_value(value, false).map_err(serde::de::Error::custom)
	}
}

/// one value or many, as ActivityStreams properties allow either form for most fields
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OneOrMore<T> {
	// arrays are tried first: a struct could otherwise be decoded positionally from a sequence
	Many(Vec<T>),
	One(T),
}

impl<T> OneOrMore<T> {
	pub fn first(&self) -> Option<&T> {
		match self {
			OneOrMore::One(x) => Some(x),
			OneOrMore::Many(x) => x.first(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			OneOrMore::One(_) => 1,
			OneOrMore::Many(x) => x.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn iter(&self) -> std::slice::Iter<'_, T> {
		match self {
			OneOrMore::One(x) => std::slice::from_ref(x).iter(),
			OneOrMore::Many(x) => x.iter(),
		}
	}

	pub fn into_vec(self) -> Vec<T> {
		match self {
			OneOrMore::One(x) => vec![x],
			OneOrMore::Many(x) => x,
		}
	}
}

impl<T> From<T> for OneOrMore<T> {
	fn from(value: T) -> Self {
		OneOrMore::One(value)
	}
}

impl From<&str> for OneOrMore<String> {
	fn from(value: &str) -> Self {
		OneOrMore::One(value.to_string())
	}
}

impl<'a, T> IntoIterator for &'a OneOrMore<T> {
	type Item = &'a T;
	type IntoIter = std::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

/// a value that may be a bare IRI, a Link, an embedded object or several of those
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Reference<T = Object> {
	Id(String),
	Link(Link),
	Array(Vec<Reference<T>>),
	Object(Box<T>),
}

impl<T> Reference<T> {
	/// embedded object (or first if many are present)
	pub fn get(&self) -> Option<&T> {
		match self {
			Reference::Object(x) => Some(x),
			Reference::Array(v) => v.iter().find_map(|x| x.get()),
			Reference::Id(_) | Reference::Link(_) => None,
		}
	}

	pub fn flat(self) -> Vec<Reference<T>> {
		match self {
			Reference::Array(v) => v,
			_ => vec![self],
		}
	}
}

impl<T: Base> Reference<T> {
	/// IRI this value points to: the string itself, a link's href, an object's id or the first
	/// of many
	pub fn id(&self) -> Option<&str> {
		match self {
			Reference::Id(uri) => Some(uri),
			Reference::Link(link) => Some(&link.href),
			Reference::Object(x) => x.id(),
			Reference::Array(v) => v.first()?.id(),
		}
	}

	pub fn all_ids(&self) -> Vec<&str> {
		match self {
			Reference::Array(v) => v.iter().filter_map(|x| x.id()).collect(),
			_ => self.id().into_iter().collect(),
		}
	}
}

impl<T> From<Link> for Reference<T> {
	fn from(value: Link) -> Self {
		Reference::Link(value)
	}
}

impl<T> From<&str> for Reference<T> {
	fn from(value: &str) -> Self {
		Reference::Id(value.to_string())
	}
}

impl<T: serde::de::DeserializeOwned> Reference<T> {
	// links and objects overlap structurally, so the only marker is the "Link" type tag
	fn from_value(value: serde_json::Value, nested: bool) -> serde_json::Result<Self> {
		match value {
			serde_json::Value::String(uri) => Ok(Reference::Id(uri)),
			serde_json::Value::Array(_) if nested => Err(serde::de::Error::custom("nested arrays are not valid references")),
			serde_json::Value::Array(values) => values
				.into_iter()
				.map(|x| Reference::from_value(x, true))
				.collect::<serde_json::Result<Vec<_>>>()
				.map(Reference::Array),
			serde_json::Value::Object(_) if crate::is_link(&value) => serde_json::from_value(value).map(Reference::Link),
			serde_json::Value::Object(_) => serde_json::from_value(value).map(|x| Reference::Object(Box::new(x))),
			other => Err(serde::de::Error::custom(format!("expected IRI, link, object or array, found {other}"))),
		}
	}
}

impl<'de, T: serde::de::DeserializeOwned> serde::Deserialize<'de> for Reference<T> {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
		Reference::from_value(value, false).map_err(serde::de::Error::custom)
	}
}

#[cfg(test)]
mod test {
	use super::{Node, OneOrMore, Reference};
	use crate::{Link, Note, Object};

	#[test]
	fn node_accepts_bare_iri_and_embedded_object() {
		let id : Node<Object> = serde_json::from_value(serde_json::json!("https://example.com/obj/1")).unwrap();
		assert!(id.is_link());
		assert_eq!(id.id(), Some("https://example.com/obj/1"));
		assert!(id.get().is_none());

		let obj : Node<Object> = serde_json::from_value(serde_json::json!({
			"id": "https://example.com/obj/2",
			"name": "embedded",
		})).unwrap();
		assert!(obj.is_object());
		assert_eq!(obj.id(), Some("https://example.com/obj/2"));
		assert_eq!(obj.get().and_then(|x| x.name.as_deref()), Some("embedded"));
	}

	#[test]
	fn node_keeps_every_value_of_an_array() {
		let many : Node<Object> = serde_json::from_value(serde_json::json!([
			"https://example.com/usr/1",
			{ "id": "https://example.com/usr/2", "type": "Person" },
		])).unwrap();
		assert!(many.is_array());
		assert_eq!(many.len(), 2);
		assert_eq!(many.id(), Some("https://example.com/usr/1"));
		assert_eq!(many.all_ids(), vec!["https://example.com/usr/1", "https://example.com/usr/2"]);
		assert_eq!(many.get().and_then(|x| x.id.as_deref()), Some("https://example.com/usr/2"));
		assert_eq!(
			serde_json::to_value(&many).unwrap(),
			serde_json::json!(["https://example.com/usr/1", { "id": "https://example.com/usr/2", "type": "Person" }])
		);

		assert_eq!(Node::<Object>::links(["https://example.com/a", "https://example.com/b"]).flat().len(), 2);
		assert!(serde_json::from_value::<Node<Object>>(serde_json::json!(true)).is_err());
	}

	#[test]
	fn node_serializes_back_to_the_same_shape() {
		let node : Node<Object> = Node::link("https://example.com/usr/root");
		assert_eq!(serde_json::to_value(&node).unwrap(), serde_json::json!("https://example.com/usr/root"));
	}

	#[test]
	fn one_or_more_handles_both_forms() {
		let one : OneOrMore<String> = serde_json::from_value(serde_json::json!("Note")).unwrap();
		assert_eq!(one, OneOrMore::One("Note".to_string()));
		assert_eq!(one.len(), 1);

		let many : OneOrMore<String> = serde_json::from_value(serde_json::json!(["Note", "Article"])).unwrap();
		assert_eq!(many.iter().map(String::as_str).collect::<Vec<_>>(), vec!["Note", "Article"]);
		assert_eq!(many.first().map(String::as_str), Some("Note"));

		let none : OneOrMore<String> = serde_json::from_value(serde_json::json!([])).unwrap();
		assert!(none.is_empty());
		assert!(none.first().is_none());
	}

	#[test]
	fn reference_tells_links_from_objects_by_type_tag() {
		let link : Reference = serde_json::from_value(serde_json::json!({
			"type": "Link",
			"href": "https://example.com/image.png",
			"mediaType": "image/png",
		})).unwrap();
		assert!(matches!(link, Reference::Link(Link { ref href, .. }) if href == "https://example.com/image.png"));
		assert_eq!(link.id(), Some("https://example.com/image.png"));

		let obj : Reference = serde_json::from_value(serde_json::json!({
			"type": "Note",
			"id": "https://example.com/obj/1",
		})).unwrap();
		assert!(matches!(obj, Reference::Object(_)));
		assert_eq!(obj.id(), Some("https://example.com/obj/1"));

		let iri : Reference<Note> = serde_json::from_value(serde_json::json!("https://example.com/obj/3")).unwrap();
		assert_eq!(iri, Reference::Id("https://example.com/obj/3".to_string()));
	}

	#[test]
	fn reference_arrays_mix_every_shape() {
		let refs : Reference = serde_json::from_value(serde_json::json!([
			"https://example.com/usr/1",
			{ "type": "Link", "href": "https://example.com/usr/2" },
			{ "type": "Person", "id": "https://example.com/usr/3" },
		])).unwrap();
		assert_eq!(refs.all_ids(), vec!["https://example.com/usr/1", "https://example.com/usr/2", "https://example.com/usr/3"]);
		assert_eq!(refs.get().and_then(|x| x.id.as_deref()), Some("https://example.com/usr/3"));
		assert_eq!(refs.flat().len(), 3);

		assert!(serde_json::from_value::<Reference>(serde_json::json!([["https://example.com/usr/1"]])).is_err());
	}

	#[test]
	fn reference_rejects_values_that_fit_no_shape() {
		assert!(serde_json::from_value::<Reference>(serde_json::json!(42)).is_err());
		assert!(serde_json::from_value::<Reference>(serde_json::json!({ "type": "Link" })).is_err());
	}
}
