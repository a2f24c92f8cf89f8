use crate::{Node, Object, OneOrMore};

pub const PUBLIC : &str = "https://www.w3.org/ns/activitystreams#Public";

pub trait Addressed {
	/// every IRI in to, bto, cc and bcc, in this order
	fn addressed(&self) -> Vec<String>;
	/// primary audience only: to and bto
	fn mentioning(&self) -> Vec<String>;

	fn is_public(&self) -> bool {
		self.addressed().iter().any(|x| x == PUBLIC)
	}
}

fn all_ids(field: &Option<OneOrMore<Node<Object>>>) -> Vec<String> {
	let Some(field) = field else { return Vec::new() };
	field
		.iter()
		.flat_map(|x| x.all_ids())
		.map(str::to_string)
		.collect()
}

impl<T: AsRef<Object>> Addressed for T {
	fn addressed(&self) -> Vec<String> {
		let obj = self.as_ref();
		let mut to = all_ids(&obj.to);
		to.append(&mut all_ids(&obj.bto));
		to.append(&mut all_ids(&obj.cc));
		to.append(&mut all_ids(&obj.bcc));
		to
	}

	fn mentioning(&self) -> Vec<String> {
		let obj = self.as_ref();
		let mut to = all_ids(&obj.to);
		to.append(&mut all_ids(&obj.bto));
		to
	}
}

#[cfg(test)]
mod test {
	use super::Addressed;
	use crate::{Create, Note};

	fn note() -> Note {
		serde_json::from_value(serde_json::json!({
			"id": "http://localhost:8080/obj/1",
			"type": "Note",
			"content": "hello world!",
			"published": "2024-06-04T17:09:20+00:00",
			"to": ["http://localhost:8080/usr/root/followers"],
			"bto": ["https://localhost:8080/usr/secret"],
			"cc": [crate::target::PUBLIC],
			"bcc": [],
		})).unwrap()
	}

	#[test]
	fn addressed_trait_finds_all_targets() {
		assert_eq!(
			note().addressed(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
				crate::target::PUBLIC.to_string(),
			]
		);
		assert!(note().is_public());
	}

	#[test]
	fn primary_targets_only_finds_to_and_bto() {
		assert_eq!(
			note().mentioning(),
			vec![
				"http://localhost:8080/usr/root/followers".to_string(),
				"https://localhost:8080/usr/secret".to_string(),
			]
		);
	}

	#[test]
	fn embedded_audience_is_addressed_by_id() {
		let create : Create = serde_json::from_value(serde_json::json!({
			"type": "Create",
			"to": { "id": "http://localhost:8080/usr/root", "type": "Person" },
			"cc": "http://localhost:8080/usr/other",
		})).unwrap();
		assert_eq!(
			create.addressed(),
			vec![
				"http://localhost:8080/usr/root".to_string(),
				"http://localhost:8080/usr/other".to_string(),
			]
		);
		assert!(!create.is_public());
	}
}
