use crate::{Field, FieldErr, Object, Reference};

pub trait Shortcuts : AsRef<Object> {
	fn replies_count(&self) -> Field<u64> {
		self.as_ref()
			.replies
			.as_ref()
			.and_then(|x| x.get())
			.and_then(|x| x.total_items)
			.ok_or(FieldErr("replies"))
	}

	fn image_url(&self) -> Field<String> {
		let image = self.as_ref()
			.image
			.as_ref()
			.and_then(|x| x.first())
			.ok_or(FieldErr("image"))?;
		let url = match image {
			Reference::Object(img) => img.base
				.url
				.as_ref()
				.and_then(|x| x.first())
				.and_then(|x| match x {
					crate::Node::Object(link) => Some(link.href.as_str()),
					node => node.id(),
				})
				.ok_or(FieldErr("url"))?,
			other => other.id().ok_or(FieldErr("image"))?,
		};
		Ok(url.to_string())
	}
}

impl<T: AsRef<Object>> Shortcuts for T {}
