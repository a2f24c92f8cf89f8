#[derive(Debug, thiserror::Error)]
#[error("invalid type value")]
pub struct TypeValueError;

macro_rules! strenum {
	( $(pub enum $enum_name:ident { $($flat:ident),* ; $($deep:ident($inner:ident)),* };)+ ) => {
		$(
			#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
			pub enum $enum_name {
				$($flat,)*
				$($deep($inner),)*
			}

			impl AsRef<str> for $enum_name {
				fn as_ref(&self) -> &str {
					match self {
						$(Self::$flat => stringify!($flat),)*
						$(Self::$deep(x) => x.as_ref(),)*
					}
				}
			}

			impl TryFrom<&str> for $enum_name {
				type Error = $crate::macros::TypeValueError;

				fn try_from(value:&str) -> Result<Self, Self::Error> {
					match value {
						$(stringify!($flat) => Ok(Self::$flat),)*
						_ => {
							$(
								if let Ok(x) = $inner::try_from(value) {
									return Ok(Self::$deep(x));
								}
							)*
							Err($crate::macros::TypeValueError)
						},
					}
				}
			}

			impl std::fmt::Display for $enum_name {
				fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
					f.write_str(self.as_ref())
				}
			}

			impl serde::Serialize for $enum_name {
				fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
					serializer.serialize_str(self.as_ref())
				}
			}

			impl<'de> serde::Deserialize<'de> for $enum_name {
				fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
					let value = <std::borrow::Cow<'de, str> as serde::Deserialize>::deserialize(deserializer)?;
					Self::try_from(value.as_ref())
						.map_err(|_| serde::de::Error::custom(format!("unknown {} '{value}'", stringify!($enum_name))))
				}
			}
		)*
	};
}

pub(crate) use strenum;

macro_rules! setter {
	($name:ident::$rename:ident -> $t:ty) => {
		paste::item! {
			fn [< set_ $name >](mut self, val: Option<$t>) -> Self {
				<Self as AsMut<$crate::Object>>::as_mut(&mut self).$rename = val;
				self
			}
		}
	};

	($name:ident -> $t:ty) => {
		$crate::macros::setter! { $name::$name -> $t }
	};
}

pub(crate) use setter;

macro_rules! activity_setter {
	($name:ident -> $t:ty) => {
		paste::item! {
			fn [< set_ $name >](mut self, val: Option<$t>) -> Self {
				<Self as AsMut<$crate::Activity>>::as_mut(&mut self).$name = val;
				self
			}
		}
	};
}

pub(crate) use activity_setter;

// wires an entity type into the shared traits, given the path to its embedded Object
macro_rules! entity {
	($t:ty => $($path:tt).+) => {
		impl AsRef<$crate::Object> for $t {
			fn as_ref(&self) -> &$crate::Object {
				&self.$($path).+
			}
		}

		impl AsMut<$crate::Object> for $t {
			fn as_mut(&mut self) -> &mut $crate::Object {
				&mut self.$($path).+
			}
		}

		impl $crate::Base for $t {
			fn id(&self) -> Option<&str> {
				self.$($path).+.id.as_deref()
			}

			fn types(&self) -> Vec<&str> {
				self.$($path).+.types()
			}
		}

		impl $crate::LD for $t {
			fn ld_context(mut self) -> Self {
				self.$($path).+.context = Some($crate::jsonld::default_context());
				self
			}
		}
	};
}

pub(crate) use entity;

#[cfg(test)]
mod test {
	use crate::{ActivityType, BaseType, CollectionType, LinkType, ObjectType};

	#[test]
	fn assert_flat_types_serialize() {
		let x = ActivityType::TentativeReject;
		assert_eq!("TentativeReject", <ActivityType as AsRef<str>>::as_ref(&x));
	}

	#[test]
	fn assert_deep_types_serialize() {
		let x = BaseType::Object(ObjectType::Collection(CollectionType::OrderedCollection));
		assert_eq!("OrderedCollection", <BaseType as AsRef<str>>::as_ref(&x));
	}

	#[test]
	fn assert_flat_types_deserialize() {
		let x = ObjectType::try_from("Place").expect("could not deserialize");
		assert_eq!(ObjectType::Place, x);
	}

	#[test]
	fn assert_deep_types_deserialize() {
		let x = BaseType::try_from("Invite").expect("could not deserialize");
		assert_eq!(BaseType::Object(ObjectType::Activity(ActivityType::Invite)), x);
		let x = BaseType::try_from("Link").expect("could not deserialize");
		assert_eq!(BaseType::Link(LinkType::Link), x);
	}

	#[test]
	fn unknown_types_are_rejected() {
		assert!(ActivityType::try_from("NotARealType").is_err());
		assert!(BaseType::try_from("follow").is_err());
	}

	#[test]
	fn types_go_through_serde_as_plain_strings() {
		let x = serde_json::to_value(ActivityType::Follow).expect("could not serialize");
		assert_eq!(x, serde_json::json!("Follow"));
		let y : ObjectType = serde_json::from_value(serde_json::json!("Announce")).expect("could not deserialize");
		assert_eq!(y, ObjectType::Activity(ActivityType::Announce));
		assert!(serde_json::from_value::<ObjectType>(serde_json::json!("Nope")).is_err());
	}
}
