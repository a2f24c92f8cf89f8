use std::collections::BTreeMap;

use crate::OneOrMore;

pub const JSONLD_PROFILE : &str = "https://www.w3.org/ns/activitystreams";
pub const JSONLD_PROFILE_CONTENT_TYPE : &str = "application/ld+json; profile=\"https://www.w3.org/ns/activitystreams\"";

/// `@context` value: one or more IRIs and inline term definitions
pub type Context = OneOrMore<ContextEntry>;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum ContextEntry {
	Iri(String),
	/// `@vocab`, `@language` and arbitrary term mappings
	Definition(BTreeMap<String, serde_json::Value>),
}

impl From<&str> for ContextEntry {
	fn from(value: &str) -> Self {
		ContextEntry::Iri(value.to_string())
	}
}

pub(crate) fn default_context() -> Context {
	OneOrMore::One(ContextEntry::Iri(JSONLD_PROFILE.to_string()))
}

pub trait LD {
	fn ld_context(self) -> Self;
}

impl LD for serde_json::Value {
	fn ld_context(mut self) -> Self {
		if let Some(obj) = self.as_object_mut() {
			obj.insert(
				"@context".to_string(),
				serde_json::Value::String(JSONLD_PROFILE.to_string()),
			);
		} else {
			tracing::warn!("cannot add @context to json value different than object");
		}
		self
	}
}
