use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An assembled deployment template.
///
/// Only the resource map is inspected; every other top-level section is
/// carried through untouched.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "Resources", default)]
    pub resources: Map<String, Value>,

    #[serde(flatten)]
    pub rest: Map<String, Value>,
}
