pub mod vocabulary;

use crate::{Node, Object, PropertyError, Reference};

crate::strenum! {
	pub enum ActivityType {
		Activity,
		Accept,
		Add,
		Announce,
		Arrive,
		Block,
		Create,
		Delete,
		Dislike,
		Flag,
		Follow,
		Ignore,
		Invite,
		Join,
		Leave,
		Like,
		Listen,
		Move,
		Offer,
		Question,
		Reject,
		Read,
		Remove,
		TentativeReject,
		TentativeAccept,
		Travel,
		Undo,
		Update,
		View;
	};
}

/// https://www.w3.org/TR/activitystreams-vocabulary/#activity-types
pub const ACTIVITY_SUBTYPES : [ActivityType; 28] = [
	ActivityType::Accept, ActivityType::Add, ActivityType::Announce, ActivityType::Arrive,
	ActivityType::Block, ActivityType::Create, ActivityType::Delete, ActivityType::Dislike,
	ActivityType::Flag, ActivityType::Follow, ActivityType::Ignore, ActivityType::Invite,
	ActivityType::Join, ActivityType::Leave, ActivityType::Like, ActivityType::Listen,
	ActivityType::Move, ActivityType::Offer, ActivityType::Question, ActivityType::Reject,
	ActivityType::Read, ActivityType::Remove, ActivityType::TentativeReject,
	ActivityType::TentativeAccept, ActivityType::Travel, ActivityType::Undo,
	ActivityType::Update, ActivityType::View,
];

impl ActivityType {
	/// parse a type tag, accepting only the 28 concrete subtypes
	pub fn subtype(tag: &str) -> Option<ActivityType> {
		match ActivityType::try_from(tag) {
			Ok(ActivityType::Activity) | Err(_) => None,
			Ok(x) => Some(x),
		}
	}

	pub fn is_subtype(&self) -> bool {
		!matches!(self, ActivityType::Activity)
	}
}

/// An Object recording an action: `actor` did something to `object`, possibly on `target`
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Activity {
	#[serde(flatten)]
	pub base: Object,
	/// Describes one or more entities that either performed or are expected to perform the activity
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub actor: Option<Reference>,
	/// the direct object of the activity
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub object: Option<Node<Object>>,
	/// Describes the indirect object, or target, of the activity
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub target: Option<Reference>,
	/// Describes the result of the activity
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub result: Option<Reference>,
	/// Describes an indirect object of the activity from which the activity is directed
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub origin: Option<Reference>,
	/// Identifies one or more objects used (or to be used) in the completion of an Activity
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub instrument: Option<Reference>,
}

impl Default for Activity {
	fn default() -> Self {
		Activity::new(ActivityType::Activity)
	}
}

impl Activity {
	/// property names an Activity understands on top of [Object::PROPERTIES]
	pub const PROPERTIES : &'static [&'static str] = &[
		"actor", "object", "target", "result", "origin", "instrument",
	];

	pub fn new(kind: ActivityType) -> Self {
		Activity {
			base: Object::new(crate::ObjectType::Activity(kind)),
			actor: None,
			object: None,
			target: None,
			result: None,
			origin: None,
			instrument: None,
		}
	}

	/// keep every field, but tag with `kind` only
	pub fn into_kind(mut self, kind: ActivityType) -> Self {
		self.base.pin_type(kind.as_ref());
		self
	}

	pub fn activity_type(&self) -> Option<ActivityType> {
		self.base
			.types()
			.into_iter()
			.find_map(|t| ActivityType::try_from(t).ok())
	}

	/// Build an activity out of a loose json property bag.
	///
	/// Only names listed in [Object::PROPERTIES] and [Activity::PROPERTIES] are accepted, anything
	/// else is refused rather than silently dropped. A `type` entry is ignored: the result is
	/// always tagged `kind`.
	pub fn from_props(kind: ActivityType, props: serde_json::Value) -> Result<Self, PropertyError> {
		let serde_json::Value::Object(mut map) = props else {
			return Err(PropertyError::NotAnObject);
		};
		map.remove("type");
		for key in map.keys() {
			let key = key.as_str();
			if !Object::PROPERTIES.contains(&key) && !Activity::PROPERTIES.contains(&key) {
				tracing::warn!("refusing unknown property '{key}' for {kind} activity");
				return Err(PropertyError::Unknown(key.to_string()));
			}
		}
		let activity : Activity = serde_json::from_value(serde_json::Value::Object(map))?;
		Ok(activity.into_kind(kind))
	}
}

crate::macros::entity! { Activity => base }

impl AsRef<Activity> for Activity {
	fn as_ref(&self) -> &Activity {
		self
	}
}

impl AsMut<Activity> for Activity {
	fn as_mut(&mut self) -> &mut Activity {
		self
	}
}

/// chaining setters for activity-specific fields, see [crate::ObjectMut] for the rest
pub trait ActivityMut : AsMut<Activity> + Sized {
	crate::macros::activity_setter! { actor -> Reference }
	crate::macros::activity_setter! { object -> Node<Object> }
	crate::macros::activity_setter! { target -> Reference }
	crate::macros::activity_setter! { result -> Reference }
	crate::macros::activity_setter! { origin -> Reference }
	crate::macros::activity_setter! { instrument -> Reference }
}

impl<T: AsMut<Activity>> ActivityMut for T {}

#[cfg(test)]
mod test {
	use super::{Activity, ActivityMut, ActivityType, ACTIVITY_SUBTYPES};
	use crate::{Base, Node, ObjectMut, PropertyError, Reference};

	#[test]
	fn plain_activity_is_not_a_subtype() {
		let activity = Activity::default();
		assert_eq!(activity.types(), vec!["Activity"]);
		assert_eq!(activity.activity_type(), Some(ActivityType::Activity));
		assert!(!activity.is_activity());
		assert!(ActivityType::subtype("Activity").is_none());
		assert!(!ActivityType::Activity.is_subtype());
	}

	#[test]
	fn subtype_table_is_closed_and_complete() {
		assert_eq!(ACTIVITY_SUBTYPES.len(), 28);
		for kind in ACTIVITY_SUBTYPES {
			assert!(kind.is_subtype());
			assert_eq!(ActivityType::subtype(kind.as_ref()), Some(kind));
		}
		assert!(ActivityType::subtype("NotARealType").is_none());
	}

	#[test]
	fn from_props_copies_known_fields_and_pins_type() {
		let follow = Activity::from_props(ActivityType::Follow, serde_json::json!({
			"type": "Like",
			"id": "https://example.com/activities/1",
			"actor": "https://example.com/usr/alice",
			"object": "https://example.org/usr/bob",
			"to": ["https://example.org/usr/bob"],
		})).unwrap();

		assert_eq!(follow.types(), vec!["Follow"]);
		assert_eq!(follow.id(), Some("https://example.com/activities/1"));
		assert_eq!(follow.actor, Some(Reference::Id("https://example.com/usr/alice".to_string())));
		assert_eq!(follow.object, Some(Node::Id("https://example.org/usr/bob".to_string())));
		assert_eq!(follow.base.to.as_ref().map(|x| x.len()), Some(1));
	}

	#[test]
	fn from_props_refuses_unknown_keys() {
		let res = Activity::from_props(ActivityType::Like, serde_json::json!({
			"actor": "https://example.com/usr/alice",
			"likedByMe": true,
		}));
		assert!(matches!(res, Err(PropertyError::Unknown(k)) if k == "likedByMe"));
	}

	#[test]
	fn from_props_ignores_whatever_type_is_given() {
		let like = Activity::from_props(ActivityType::Like, serde_json::json!({
			"type": 42,
			"actor": "https://example.com/usr/alice",
		})).unwrap();
		assert_eq!(like.activity_type(), Some(ActivityType::Like));
	}

	#[test]
	fn array_valued_references_keep_every_value() {
		let activity : Activity = serde_json::from_value(serde_json::json!({
			"type": "Create",
			"actor": ["https://a.example/usr/1", "https://b.example/usr/2"],
			"object": ["https://a.example/obj/1", { "id": "https://a.example/obj/2", "type": "Note" }],
			"target": [],
		})).unwrap();

		let actor = activity.actor.as_ref().unwrap();
		assert_eq!(actor.all_ids(), vec!["https://a.example/usr/1", "https://b.example/usr/2"]);
		assert_eq!(actor.id(), Some("https://a.example/usr/1"));

		let object = activity.object.as_ref().unwrap();
		assert!(object.is_array());
		assert_eq!(object.all_ids(), vec!["https://a.example/obj/1", "https://a.example/obj/2"]);
		assert_eq!(object.get().and_then(|x| x.id.as_deref()), Some("https://a.example/obj/2"));
		assert!(activity.base.context.is_none());
		assert!(activity.base.id.is_none());

		assert_eq!(activity.target, Some(Reference::Array(Vec::new())));
		let json = serde_json::to_value(&activity).unwrap();
		assert_eq!(json["actor"], serde_json::json!(["https://a.example/usr/1", "https://b.example/usr/2"]));
	}

	#[test]
	fn from_props_refuses_non_objects_and_bad_shapes() {
		assert!(matches!(
			Activity::from_props(ActivityType::Like, serde_json::json!("https://example.com")),
			Err(PropertyError::NotAnObject)
		));
		assert!(matches!(
			Activity::from_props(ActivityType::Like, serde_json::json!({ "content": 42 })),
			Err(PropertyError::Malformed(_))
		));
	}

	#[test]
	fn activity_setters_chain_with_object_setters() {
		let activity = Activity::new(ActivityType::Create)
			.set_actor(Some("https://example.com/usr/alice".into()))
			.set_object(Some(Node::object(crate::Note::default().base)))
			.set_id(Some("https://example.com/activities/2".to_string()));

		assert_eq!(activity.id(), Some("https://example.com/activities/2"));
		assert!(activity.object.as_ref().is_some_and(|x| x.is_object()));
		let json = serde_json::to_value(&activity).unwrap();
		assert_eq!(json["type"], serde_json::json!("Create"));
		assert_eq!(json["object"]["type"], serde_json::json!("Note"));
		assert_eq!(json["actor"], serde_json::json!("https://example.com/usr/alice"));
	}
}
