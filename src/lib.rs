//! Typed data model for the ActivityStreams 2.0 vocabulary.
//!
//! Entities are plain records mirroring the published vocabulary: [Object] is the base, [Link]
//! references a resource, [Activity] records an action and [Collection] groups items. Concrete
//! kinds ([Note], [Place], [Image] and the 28 activity subtypes) embed those and pin their own
//! `type` tag. Nothing here validates documents: [is_object], [is_link] and [is_activity] are
//! the only runtime checks, and they only look at type tags.

pub(crate) mod macros;
pub(crate) use macros::strenum;
pub use macros::TypeValueError;

mod node;
pub use node::{Node, OneOrMore, Reference};

mod field;
pub use field::{Field, FieldErr, PropertyError};

mod base;
pub use base::{Base, BaseType, is_activity, is_link, is_object};

mod link;
pub use link::{Link, LinkType};

pub mod jsonld;
pub use jsonld::{Context, ContextEntry, LD, JSONLD_PROFILE, JSONLD_PROFILE_CONTENT_TYPE};

pub mod target;
pub use target::{Addressed, PUBLIC};

#[cfg(feature = "shortcuts")]
mod shortcuts;
#[cfg(feature = "shortcuts")]
pub use shortcuts::Shortcuts;

mod entity;
pub use entity::Entity;

mod object;
pub use object::{
	Object, ObjectMut, ObjectType,
	activity::{
		Activity, ActivityMut, ActivityType, ACTIVITY_SUBTYPES,
		vocabulary::{
			Accept, Add, Announce, Arrive, Block, Create, Delete, Dislike, Flag, Follow, Ignore,
			Invite, Join, Leave, Like, Listen, Move, Offer, Question, Reject, Read, Remove,
			TentativeReject, TentativeAccept, Travel, Undo, Update, View,
		},
	},
	collection::{Collection, CollectionType},
	image::Image,
	note::Note,
	place::{Place, Units},
};
