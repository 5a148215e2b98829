//! Declarative description of one API call.
//!
//! Generated operations build a `RequestDescriptor` and hand it to
//! `RequestExecutor::execute`. Query and form values are `serde_json::Value`
//! so generated code can pass scalars, lists, and nulls without conversion;
//! nulls are dropped when the request is assembled.

use std::collections::BTreeMap;

use serde_json::Value;

use crate::http::HttpMethod;

/// Payload attached to a request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Raw bytes with an optional declared media type.
    Binary {
        data: Vec<u8>,
        content_type: Option<String>,
    },
    /// Plain text, sent as `text/plain`.
    Text(String),
    /// Structured value, serialized to JSON.
    Json(Value),
}

impl RequestBody {
    /// Whether this body takes part in the request at all.
    ///
    /// Empty text and falsy JSON scalars (`null`, `false`, `0`, `""`) count as
    /// no body. Binary payloads are always present.
    pub fn is_present(&self) -> bool {
        match self {
            RequestBody::Binary { .. } => true,
            RequestBody::Text(text) => !text.is_empty(),
            RequestBody::Json(value) => is_truthy(value),
        }
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Everything the executor needs to perform one call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, Value)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
    pub form_data: Option<Vec<(String, Value)>>,
    /// When set, the result body is this response header's value.
    pub response_header: Option<String>,
    /// Per-status messages layered over the default error table.
    pub errors: BTreeMap<u16, String>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
            form_data: None,
            response_header: None,
            errors: BTreeMap::new(),
        }
    }

    pub fn query(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    pub fn json_body(self, value: impl Into<Value>) -> Self {
        self.body(RequestBody::Json(value.into()))
    }

    pub fn form_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.form_data
            .get_or_insert_with(Vec::new)
            .push((key.into(), value.into()));
        self
    }

    pub fn response_header(mut self, name: impl Into<String>) -> Self {
        self.response_header = Some(name.into());
        self
    }

    pub fn error(mut self, status: u16, message: impl Into<String>) -> Self {
        self.errors.insert(status, message.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builder_keeps_query_order() {
        let descriptor = RequestDescriptor::new(HttpMethod::Get, "/pets")
            .query("limit", 10)
            .query("tags", json!(["a", "b"]))
            .query("offset", Value::Null);
        let keys: Vec<&str> = descriptor.query.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["limit", "tags", "offset"]);
    }

    #[test]
    fn form_field_creates_form_data() {
        let descriptor = RequestDescriptor::new(HttpMethod::Post, "/upload").form_field("name", "rex");
        assert_eq!(descriptor.form_data, Some(vec![("name".to_string(), json!("rex"))]));
    }

    #[test]
    fn falsy_bodies_are_absent() {
        assert!(!RequestBody::Text(String::new()).is_present());
        assert!(!RequestBody::Json(Value::Null).is_present());
        assert!(!RequestBody::Json(json!(false)).is_present());
        assert!(!RequestBody::Json(json!(0)).is_present());
        assert!(!RequestBody::Json(json!("")).is_present());
    }

    #[test]
    fn non_empty_bodies_are_present() {
        assert!(RequestBody::Text("hi".to_string()).is_present());
        assert!(RequestBody::Json(json!({})).is_present());
        assert!(RequestBody::Json(json!([])).is_present());
        assert!(RequestBody::Json(json!(1.5)).is_present());
        assert!(RequestBody::Binary { data: Vec::new(), content_type: None }.is_present());
    }
}
