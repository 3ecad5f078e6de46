use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One watchlist document.
///
/// Only `_id` and `watched` are interpreted; every other key is carried
/// through untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub watched: bool,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Movie {
    /// Decodes a create request body. Anything that is not a JSON object
    /// yields the zero-valued record. The caller never picks the id or the
    /// initial watched state, whatever their JSON type.
    pub fn from_request_body(body: &[u8]) -> Self {
        let mut fields: Map<String, Value> = serde_json::from_slice(body).unwrap_or_default();
        fields.remove("_id");
        fields.remove("watched");
        Movie { id: None, watched: false, fields }
    }
}
