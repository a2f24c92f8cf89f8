#[derive(Debug, thiserror::Error)]
#[error("missing field '{0}'")]
pub struct FieldErr(pub &'static str);

pub type Field<T> = Result<T, FieldErr>;

/// raised when building an entity out of a loose property bag
#[derive(Debug, thiserror::Error)]
pub enum PropertyError {
	#[error("property bag must be a json object")]
	NotAnObject,

	#[error("unknown property '{0}'")]
	Unknown(String),

	#[error("malformed property bag: {0}")]
	Malformed(#[from] serde_json::Error),
}
