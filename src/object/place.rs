use crate::Object;

use super::ObjectType;

/// measurement units for [Place] radius and altitude
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Units {
	Centimeters,
	Feet,
	Inches,
	Kilometers,
	Meters,
	Miles,
	/// any other unit, identified by IRI
	Uri(String),
}

impl AsRef<str> for Units {
	fn as_ref(&self) -> &str {
		match self {
			Units::Centimeters => "cm",
			Units::Feet => "feet",
			Units::Inches => "inches",
			Units::Kilometers => "km",
			Units::Meters => "m",
			Units::Miles => "miles",
			Units::Uri(x) => x,
		}
	}
}

impl From<&str> for Units {
	fn from(value: &str) -> Self {
		match value {
			"cm" => Units::Centimeters,
			"feet" => Units::Feet,
			"inches" => Units::Inches,
			"km" => Units::Kilometers,
			"m" => Units::Meters,
			"miles" => Units::Miles,
			x => Units::Uri(x.to_string()),
		}
	}
}

impl serde::Serialize for Units {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_ref())
	}
}

impl<'de> serde::Deserialize<'de> for Units {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let value = <String as serde::Deserialize>::deserialize(deserializer)?;
		Ok(Units::from(value.as_str()))
	}
}

/// Represents a logical or physical location
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "PlaceFields")]
pub struct Place {
	#[serde(flatten)]
	pub base: Object,
	/// accuracy of position coordinates, as a percentage (100 means fully accurate)
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub accuracy: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub altitude: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub latitude: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub longitude: Option<f64>,
	/// radius from the given latitude and longitude for a circular area, in `units`
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub radius: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub units: Option<Units>,
}

// same layout as Place, read before checking the type tag
#[derive(serde::Deserialize)]
struct PlaceFields {
	#[serde(flatten)]
	base: Object,
	#[serde(default)]
	accuracy: Option<f64>,
	#[serde(default)]
	altitude: Option<f64>,
	#[serde(default)]
	latitude: Option<f64>,
	#[serde(default)]
	longitude: Option<f64>,
	#[serde(default)]
	radius: Option<f64>,
	#[serde(default)]
	units: Option<Units>,
}

impl TryFrom<PlaceFields> for Place {
	type Error = crate::TypeValueError;

	fn try_from(value: PlaceFields) -> Result<Self, Self::Error> {
		if !value.base.types().contains(&Self::TYPE.as_ref()) {
			return Err(crate::TypeValueError);
		}
		Ok(Place {
			base: value.base,
			accuracy: value.accuracy,
			altitude: value.altitude,
			latitude: value.latitude,
			longitude: value.longitude,
			radius: value.radius,
			units: value.units,
		})
	}
}

impl Place {
	pub const TYPE : ObjectType = ObjectType::Place;

	pub fn new(mut base: Object) -> Self {
		base.pin_type(Self::TYPE.as_ref());
		Place {
			base,
			accuracy: None,
			altitude: None,
			latitude: None,
			longitude: None,
			radius: None,
			units: None,
		}
	}

	pub fn at(latitude: f64, longitude: f64) -> Self {
		Place {
			latitude: Some(latitude),
			longitude: Some(longitude),
			..Default::default()
		}
	}
}

impl Default for Place {
	fn default() -> Self {
		Place::new(Object::default())
	}
}

crate::macros::entity! { Place => base }
