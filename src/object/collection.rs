use crate::Object;

crate::strenum! {
	pub enum CollectionType {
		Collection,
		CollectionPage,
		OrderedCollection,
		OrderedCollectionPage;
	};
}

/// An Object aggregating zero or more items of type `T`.
///
/// `total_items` should reflect the number of items, but is never checked against them: a
/// paginated collection may report a remote total while carrying only a few items.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection<T = Object> {
	#[serde(flatten)]
	pub base: Object,
	/// Identifies the items contained in a collection, in insertion order
	#[serde(skip_serializing_if = "Option::is_none")]
	pub items: Option<Vec<T>>,
	/// same as items, for OrderedCollections
	#[serde(skip_serializing_if = "Option::is_none")]
	pub ordered_items: Option<Vec<T>>,
	/// A non-negative integer specifying the total number of objects contained by the logical view of the collection.
	/// This number might not reflect the actual number of items serialized within the Collection object instance.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub total_items: Option<u64>,
}

impl<T> Default for Collection<T> {
	fn default() -> Self {
		Collection {
			base: Object::new(crate::ObjectType::Collection(CollectionType::Collection)),
			items: None,
			ordered_items: None,
			total_items: None,
		}
	}
}

impl<T> Collection<T> {
	pub fn new(items: Vec<T>) -> Self {
		Collection {
			total_items: Some(items.len() as u64),
			items: Some(items),
			..Default::default()
		}
	}

	pub fn ordered(items: Vec<T>) -> Self {
		let mut base = Object::default();
		base.pin_type(CollectionType::OrderedCollection.as_ref());
		Collection {
			base,
			items: None,
			total_items: Some(items.len() as u64),
			ordered_items: Some(items),
		}
	}

	pub fn with_total_items(mut self, total: u64) -> Self {
		self.total_items = Some(total);
		self
	}

	pub fn collection_type(&self) -> Option<CollectionType> {
		self.base
			.types()
			.into_iter()
			.find_map(|t| CollectionType::try_from(t).ok())
	}

	/// items actually carried by this collection, from `orderedItems` if present
	pub fn members(&self) -> &[T] {
		self.ordered_items
			.as_deref()
			.or(self.items.as_deref())
			.unwrap_or_default()
	}
}

impl<T> AsRef<Object> for Collection<T> {
	fn as_ref(&self) -> &Object {
		&self.base
	}
}

impl<T> AsMut<Object> for Collection<T> {
	fn as_mut(&mut self) -> &mut Object {
		&mut self.base
	}
}

impl<T> crate::Base for Collection<T> {
	fn id(&self) -> Option<&str> {
		self.base.id.as_deref()
	}

	fn types(&self) -> Vec<&str> {
		self.base.types()
	}
}

impl<T> crate::LD for Collection<T> {
	fn ld_context(mut self) -> Self {
		self.base.context = Some(crate::jsonld::default_context());
		self
	}
}
