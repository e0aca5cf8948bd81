use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// One reference expression from a template property.
///
/// The template format allows arbitrary JSON here, so conversion from a
/// `Value` is total: anything that is not one of the recognized shapes lands
/// in `Other` and round-trips verbatim.
#[derive(Clone, Debug, PartialEq)]
pub enum Reference {
    /// `{"Fn::Join": [delimiter, [part, ...]]}`
    Join {
        delimiter: String,
        parts: Vec<Reference>,
    },
    /// `{"Fn::GetAtt": [resource, attribute]}`
    GetAtt { resource: String, attribute: String },
    /// `{"Ref": resource}`
    Ref(String),
    /// A bare string (join parts mix literals and expressions).
    Literal(String),
    /// Any shape the rewriter does not recognize, preserved as-is.
    Other(Value),
}

impl Reference {
    pub fn from_value(value: &Value) -> Reference {
        match value {
            Value::String(s) => Reference::Literal(s.clone()),
            // Intrinsic expressions are single-key objects; anything with
            // extra keys is passed through untouched.
            Value::Object(map) if map.len() == 1 => {
                if let Some(args) = map.get("Fn::Join") {
                    if let Some((delimiter, parts)) = join_args(args) {
                        return Reference::Join { delimiter, parts };
                    }
                } else if let Some(args) = map.get("Fn::GetAtt") {
                    if let Some((resource, attribute)) = get_att_args(args) {
                        return Reference::GetAtt {
                            resource,
                            attribute,
                        };
                    }
                } else if let Some(name) = map.get("Ref").and_then(Value::as_str) {
                    return Reference::Ref(name.to_string());
                }
                Reference::Other(value.clone())
            }
            other => Reference::Other(other.clone()),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Reference::Join { delimiter, parts } => {
                let parts: Vec<Value> = parts.iter().map(Reference::to_value).collect();
                json!({ "Fn::Join": [delimiter, parts] })
            }
            Reference::GetAtt {
                resource,
                attribute,
            } => json!({ "Fn::GetAtt": [resource, attribute] }),
            Reference::Ref(name) => json!({ "Ref": name }),
            Reference::Literal(s) => Value::String(s.clone()),
            Reference::Other(value) => value.clone(),
        }
    }
}

fn join_args(args: &Value) -> Option<(String, Vec<Reference>)> {
    match args.as_array()?.as_slice() {
        [delimiter, parts] => {
            let delimiter = delimiter.as_str()?.to_string();
            let parts = parts.as_array()?.iter().map(Reference::from_value).collect();
            Some((delimiter, parts))
        }
        _ => None,
    }
}

fn get_att_args(args: &Value) -> Option<(String, String)> {
    match args.as_array()?.as_slice() {
        [resource, attribute] => Some((
            resource.as_str()?.to_string(),
            attribute.as_str()?.to_string(),
        )),
        _ => None,
    }
}

impl Serialize for Reference {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Reference {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Reference::from_value(&value))
    }
}
