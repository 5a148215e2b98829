//! URL assembly: path normalization plus query-string encoding.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// Characters left unescaped in query keys and values, matching the set a
/// browser's `encodeURIComponent` keeps.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Join `base_url` and `path`, then append the encoded query string.
///
/// Every `:` in `path` becomes `_` so leftover template markers such as
/// `/users/:id` never reach the server as literal colons.
pub fn build_url(base_url: &str, path: &str, query: &[(String, Value)]) -> String {
    let path = path.replace(':', "_");
    let mut url = format!("{base_url}{path}");
    url.push_str(&query_string(query));
    url
}

/// `?k=v&k2=v2` for every non-null parameter, or an empty string.
///
/// Array values emit one pair per element in order; a null element is kept
/// and rendered as `null`. Only a null top-level value is skipped.
pub fn query_string(params: &[(String, Value)]) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    pairs.push(encode_pair(key, item));
                }
            }
            scalar => pairs.push(encode_pair(key, scalar)),
        }
    }

    if pairs.is_empty() {
        String::new()
    } else {
        format!("?{}", pairs.join("&"))
    }
}

fn encode_pair(key: &str, value: &Value) -> String {
    format!("{}={}", encode(key), encode(&scalar_text(value)))
}

pub(crate) fn encode(component: &str) -> String {
    utf8_percent_encode(component, COMPONENT).to_string()
}

/// Text form of a parameter value: strings verbatim, everything else as
/// compact JSON.
///
/// Nested arrays and objects deliberately depart from JavaScript's
/// `String(value)` (`1,2` or `[object Object]`): compact JSON keeps the
/// structure recoverable on the server.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
