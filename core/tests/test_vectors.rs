//! Verify build/parse methods against JSON test vectors stored in `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated responses,
//! and expected parse results. Comparing parsed JSON (not raw strings) avoids
//! false negatives from field-ordering differences.

use inventory_core::{render_rows, to_new_item, ApiError, FormInput, HttpMethod, HttpResponse, ItemClient};

const BASE_URL: &str = "http://localhost:3000";

fn client() -> ItemClient {
    ItemClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn simulated_response(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Check an error against the variant name used in the vector files.
fn assert_error_kind(name: &str, err: &ApiError, expected: &str) {
    let matched = match expected {
        "NotFound" => matches!(err, ApiError::NotFound),
        "HttpError" => matches!(err, ApiError::HttpError { .. }),
        "Parse" => matches!(err, ApiError::Parse(_)),
        "Schema" => matches!(err, ApiError::Schema),
        other => panic!("{name}: unknown expected_error: {other}"),
    };
    assert!(matched, "{name}: expected {expected}, got {err:?}");
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[test]
fn create_test_vectors() {
    let raw = include_str!("../../test-vectors/create.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = FormInput::new(
            case["input"]["id"].as_str().unwrap(),
            case["input"]["name"].as_str().unwrap(),
            case["input"]["price"].as_str().unwrap(),
        );
        let expected_req = &case["expected_request"];

        // Verify build
        let item = to_new_item(&input).unwrap();
        let req = c.build_create_item(&item).unwrap();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");

        let expected_headers: Vec<(String, String)> = expected_req["headers"]
            .as_array()
            .unwrap()
            .iter()
            .map(|h| {
                let arr = h.as_array().unwrap();
                (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
            })
            .collect();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        let req_body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(req_body, expected_req["body"], "{name}: body");

        // Verify parse
        let result = c.parse_create_item(simulated_response(case));
        match case.get("expected_error") {
            Some(expected) => assert_error_kind(name, &result.unwrap_err(), expected.as_str().unwrap()),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}

// ---------------------------------------------------------------------------
// List
// ---------------------------------------------------------------------------

#[test]
fn list_test_vectors() {
    let raw = include_str!("../../test-vectors/list.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_list_items();
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse and render
        let result = c.parse_list_items(simulated_response(case));
        if let Some(expected) = case.get("expected_error") {
            assert_error_kind(name, &result.unwrap_err(), expected.as_str().unwrap());
            continue;
        }
        let rows = render_rows(&result.unwrap());
        let expected_rows = case["expected_rows"].as_array().unwrap();
        assert_eq!(rows.len(), expected_rows.len(), "{name}: row count");
        for (row, expected) in rows.iter().zip(expected_rows) {
            let expected: Vec<&str> = expected
                .as_array()
                .unwrap()
                .iter()
                .map(|cell| cell.as_str().unwrap())
                .collect();
            assert_eq!(row.cells().to_vec(), expected, "{name}: row cells");
            assert_eq!(row.delete.item_id(), expected[0], "{name}: delete control");
        }
    }
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_test_vectors() {
    let raw = include_str!("../../test-vectors/delete.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let id = case["input_id"].as_str().unwrap();
        let expected_req = &case["expected_request"];

        // Verify build
        let req = c.build_delete_item(id);
        assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()), "{name}: method");
        assert_eq!(req.path, format!("{BASE_URL}{}", expected_req["path"].as_str().unwrap()), "{name}: path");
        assert!(req.body.is_none(), "{name}: body should be None");

        // Verify parse
        let result = c.parse_delete_item(simulated_response(case));
        match case.get("expected_error") {
            Some(expected) => assert_error_kind(name, &result.unwrap_err(), expected.as_str().unwrap()),
            None => assert!(result.is_ok(), "{name}: expected success"),
        }
    }
}
