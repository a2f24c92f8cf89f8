use crate::{Base, OneOrMore};

crate::strenum! {
	pub enum LinkType {
		Link;
	};
}

fn link_type() -> OneOrMore<String> {
	OneOrMore::One(LinkType::Link.as_ref().to_string())
}

/// A typed reference to a resource, as opposed to an embedded object.
/// Links are told apart from objects only by their `"Link"` type tag.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
	#[serde(rename = "type", default = "link_type")]
	pub kind: OneOrMore<String>,
	pub href: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub media_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub rel: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub hreflang: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub height: Option<u64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub width: Option<u64>,
}

// a link built without an href is not rejected, it just carries an empty one
impl Default for Link {
	fn default() -> Self {
		Link {
			kind: link_type(),
			href: String::new(),
			media_type: None,
			rel: None,
			name: None,
			hreflang: None,
			height: None,
			width: None,
		}
	}
}

impl Link {
	pub fn new(href: impl Into<String>) -> Self {
		Link { href: href.into(), ..Default::default() }
	}

	/// copy every field of `partial`, then put `href` back in place
	pub fn from_partial(href: impl Into<String>, partial: Link) -> Self {
		let href = href.into();
		if !partial.href.is_empty() && partial.href != href {
			tracing::debug!("discarding href '{}' from partial link, keeping '{href}'", partial.href);
		}
		Link { href, ..partial }
	}
}

impl Base for Link {
	fn id(&self) -> Option<&str> {
		Some(&self.href)
	}

	fn types(&self) -> Vec<&str> {
		self.kind.iter().map(String::as_str).collect()
	}
}

impl From<&str> for Link {
	fn from(value: &str) -> Self {
		Link::new(value)
	}
}
