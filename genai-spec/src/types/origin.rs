use serde_json::Value;

/// The shape of an ergonomic caller input, resolved once at the API boundary.
///
/// Normalizers match on this exhaustively; whatever a normalizer does not accept
/// becomes an unsupported-type error naming [`Origin::shape`].
#[derive(Debug, Clone, PartialEq)]
pub enum Origin<T> {
    /// A bare string.
    Text(String),
    /// An already-typed canonical value.
    Typed(T),
    /// A list of already-typed canonical values.
    List(Vec<T>),
    /// An untyped JSON fragment to be parsed against the canonical schema.
    Json(Value),
    /// A value of some other shape, carried only by its shape name.
    Other(String),
}

impl<T> Origin<T> {
    /// Wrap an input the caller could only describe by its shape name.
    pub fn other(shape: impl Into<String>) -> Self {
        Self::Other(shape.into())
    }

    /// Human-readable name of the input shape, used in error messages.
    pub fn shape(&self) -> String {
        match self {
            Self::Text(_) => "string".to_string(),
            Self::Typed(_) => short_type_name::<T>().to_string(),
            Self::List(_) => format!("list<{}>", short_type_name::<T>()),
            Self::Json(v) => format!("json {}", json_kind(v)),
            Self::Other(shape) => shape.clone(),
        }
    }
}

impl<T> From<&str> for Origin<T> {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T> From<String> for Origin<T> {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl<T> From<Value> for Origin<T> {
    fn from(value: Value) -> Self {
        Self::Json(value)
    }
}

impl<T> From<Vec<T>> for Origin<T> {
    fn from(values: Vec<T>) -> Self {
        Self::List(values)
    }
}

macro_rules! impl_typed_origin {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl From<$ty> for Origin<$ty> {
                fn from(value: $ty) -> Self {
                    Self::Typed(value)
                }
            }
        )+
    };
}

impl_typed_origin!(
    super::Content,
    super::Part,
    super::Blob,
    super::File,
    super::Schema,
    super::Tool,
    super::SpeechConfig,
    super::Model,
);

/// JSON kind name (`null`, `bool`, `number`, `string`, `array`, `object`).
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
