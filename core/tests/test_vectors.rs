//! Verify URL assembly and response classification against the JSON test
//! vectors stored in `test-vectors/`.
//!
//! Each case names its inputs and the expected outcome. Bodies are compared
//! as parsed JSON so field ordering never causes false negatives.

use std::collections::BTreeMap;

use apigen_core::{Config, HttpMethod, HttpResponse, RequestDescriptor, RequestExecutor, ResponseBody};
use serde_json::Value;

// ---------------------------------------------------------------------------
// URL
// ---------------------------------------------------------------------------

#[test]
fn url_test_vectors() {
    let raw = include_str!("../../test-vectors/url.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let base_url = vectors["base_url"].as_str().unwrap();
    let exec = RequestExecutor::new(Config::new(base_url));

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let query: Vec<(String, Value)> = serde_json::from_value(case["query"].clone()).unwrap();

        let mut descriptor = RequestDescriptor::new(HttpMethod::Get, case["path"].as_str().unwrap());
        descriptor.query = query;

        let req = exec.build_request(&descriptor).unwrap();
        assert_eq!(req.url, case["expected_url"].as_str().unwrap(), "{name}: url");
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

fn simulated_response(sim: &Value) -> HttpResponse {
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        status_text: String::new(),
        headers: sim["content_type"]
            .as_str()
            .map(|ct| vec![("Content-Type".to_string(), ct.to_string())])
            .unwrap_or_default(),
        body: sim["body"].as_str().unwrap().as_bytes().to_vec(),
    }
}

fn expected_body(expected: &Value) -> ResponseBody {
    if let Some(json) = expected.get("json") {
        ResponseBody::Json(json.clone())
    } else if let Some(text) = expected.get("text") {
        ResponseBody::Text(text.as_str().unwrap().to_string())
    } else {
        assert_eq!(expected, "empty");
        ResponseBody::Empty
    }
}

#[test]
fn response_test_vectors() {
    let raw = include_str!("../../test-vectors/responses.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let exec = RequestExecutor::new(Config::new("http://localhost:3000"));

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let mut descriptor = RequestDescriptor::new(HttpMethod::Get, "/resource");
        if let Some(errors) = case.get("errors").and_then(Value::as_object) {
            descriptor.errors = errors
                .iter()
                .map(|(status, message)| (status.parse().unwrap(), message.as_str().unwrap().to_string()))
                .collect::<BTreeMap<u16, String>>();
        }

        let response = simulated_response(&case["response"]);
        let outcome = exec.parse_response("http://localhost:3000/resource".to_string(), &response, &descriptor);

        let expected = &case["expected"];
        match expected.get("error").and_then(Value::as_str) {
            Some(message) => {
                let err = outcome.unwrap_err();
                assert_eq!(err.to_string(), message, "{name}: error message");
                assert_eq!(err.status(), Some(response.status), "{name}: error status");
            }
            None => {
                let result = outcome.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
                assert_eq!(result.ok, expected["ok"].as_bool().unwrap(), "{name}: ok");
                assert_eq!(result.status, response.status, "{name}: status");
                assert_eq!(result.body, expected_body(&expected["body"]), "{name}: body");
            }
        }
    }
}
