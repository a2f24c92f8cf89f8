use crate::Object;

use super::ObjectType;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Object")]
pub struct Image {
	#[serde(flatten)]
	pub base: Object,
}

impl Image {
	pub const TYPE : ObjectType = ObjectType::Image;

	pub fn new(mut base: Object) -> Self {
		base.pin_type(Self::TYPE.as_ref());
		Image { base }
	}
}

impl Default for Image {
	fn default() -> Self {
		Image::new(Object::default())
	}
}

impl From<Image> for Object {
	fn from(value: Image) -> Self {
		value.base
	}
}

impl TryFrom<Object> for Image {
	type Error = crate::TypeValueError;

	fn try_from(value: Object) -> Result<Self, Self::Error> {
		if value.types().contains(&Self::TYPE.as_ref()) {
			Ok(Image { base: value })
		} else {
			Err(crate::TypeValueError)
		}
	}
}

crate::macros::entity! { Image => base }

#[cfg(test)]
mod test {
	use super::Image;
	use crate::{Base, Node, Object, ObjectMut, OneOrMore};

	#[test]
	fn image_is_always_tagged_as_image() {
		let image = Image::new(Object::default().set_type(Some("Document".into())));
		assert_eq!(image.types(), vec!["Image"]);
		assert_eq!(Image::default(), image);
	}

	#[test]
	fn image_keeps_its_fields_through_json() {
		let image = Image::default()
			.set_name(Some("avatar".to_string()))
			.set_url(Some(OneOrMore::One(Node::link("https://example.com/avatar.png"))));
		let json = serde_json::to_value(&image).unwrap();
		assert_eq!(json, serde_json::json!({
			"type": "Image",
			"name": "avatar",
			"url": "https://example.com/avatar.png",
		}));
		let back : Image = serde_json::from_value(json).unwrap();
		assert_eq!(back, image);

		assert!(serde_json::from_value::<Image>(serde_json::json!({ "type": "Note" })).is_err());
	}
}
