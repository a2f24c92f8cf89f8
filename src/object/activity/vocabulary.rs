//! The 28 concrete activity kinds. Each is a thin wrapper over [Activity] which pins its own
//! name as `type` when built, and derefs to the underlying activity for everything else.

use super::{Activity, ActivityType};

macro_rules! vocabulary {
	( $( $(#[$meta:meta])* $name:ident ),+ $(,)? ) => {
		$(
			$(#[$meta])*
			#[derive(Debug, Clone, PartialEq)]
			pub struct $name(pub Activity);

			impl serde::Serialize for $name {
				fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
					serde::Serialize::serialize(&self.0, serializer)
				}
			}

			impl<'de> serde::Deserialize<'de> for $name {
				fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
					let activity = <Activity as serde::Deserialize>::deserialize(deserializer)?;
					$name::try_from(activity).map_err(serde::de::Error::custom)
				}
			}

			impl $name {
				pub const TYPE : ActivityType = ActivityType::$name;

				/// copy every field of `props`, tagging the result as this kind
				pub fn new(props: Activity) -> Self {
					$name(props.into_kind(Self::TYPE))
				}

				pub fn into_inner(self) -> Activity {
					self.0
				}
			}

			impl Default for $name {
				fn default() -> Self {
					$name::new(Activity::default())
				}
			}

			impl std::ops::Deref for $name {
				type Target = Activity;

				fn deref(&self) -> &Activity {
					&self.0
				}
			}

			impl std::ops::DerefMut for $name {
				fn deref_mut(&mut self) -> &mut Activity {
					&mut self.0
				}
			}

			impl AsRef<Activity> for $name {
				fn as_ref(&self) -> &Activity {
					&self.0
				}
			}

			impl AsMut<Activity> for $name {
				fn as_mut(&mut self) -> &mut Activity {
					&mut self.0
				}
			}

			impl From<$name> for Activity {
				fn from(value: $name) -> Activity {
					value.0
				}
			}

			impl TryFrom<Activity> for $name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value: Activity) -> Result<Self, Self::Error> {
					if value.base.types().contains(&Self::TYPE.as_ref()) {
						Ok($name(value))
					} else {
						Err($crate::macros::TypeValueError)
					}
				}
			}

			$crate::macros::entity! { $name => 0.base }
		)+
	};
}

vocabulary! {
	/// Indicates that the actor accepts the object
	Accept,
	/// Indicates that the actor has added the object to the target
	Add,
	/// Indicates that the actor is calling the target's attention the object
	Announce,
	/// An IntransitiveActivity that indicates that the actor has arrived at the location
	Arrive,
	/// Indicates that the actor is blocking the object
	Block,
	/// Indicates that the actor has created the object
	Create,
	/// Indicates that the actor has deleted the object
	Delete,
	Dislike,
	/// Indicates that the actor is "flagging" the object, as inappropriate for some reason
	Flag,
	/// Indicates that the actor is "following" the object
	Follow,
	/// Indicates that the actor is ignoring the object
	Ignore,
	/// A specialization of Offer in which the actor is extending an invitation for the object to the target
	Invite,
	/// Indicates that the actor has joined the object
	Join,
	/// Indicates that the actor has left the object
	Leave,
	/// Indicates that the actor likes, recommends or endorses the object
	Like,
	Listen,
	/// Indicates that the actor has moved object from origin to target
	Move,
	/// Indicates that the actor is offering the object
	Offer,
	/// Represents a question being asked
	Question,
	/// Indicates that the actor is rejecting the object
	Reject,
	Read,
	/// Indicates that the actor is removing the object
	Remove,
	/// A specialization of Reject in which the rejection is considered tentative
	TentativeReject,
	/// A specialization of Accept indicating that the acceptance is tentative
	TentativeAccept,
	/// Indicates that the actor is traveling to target from origin
	Travel,
	/// Indicates that the actor is undoing the object
	Undo,
	/// Indicates that the actor has updated the object
	Update,
	View,
}
