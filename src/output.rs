//! JSON output to standard output

use serde_json::Value;

use crate::fm::FmResponse;

/// Pretty-print a decoded value
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

/// Dump a result descriptor when no decoded value is available
///
/// Shown before the human-readable failure message so the operator can see
/// the raw status and body the controller returned.
pub fn print_descriptor(resp: &FmResponse) {
    match serde_json::to_string_pretty(resp) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_print_json_does_not_panic() {
        print_json(&json!({"name": "p1"}));
        print_json(&Value::Null);
    }

    #[test]
    fn test_descriptor_serializes_status_and_content() {
        let resp = FmResponse {
            status_code: Some(409),
            content: "conflict".to_string(),
            data: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("409"));
        assert!(json.contains("conflict"));
        // Undecoded data is omitted entirely
        assert!(!json.contains("data"));
    }
}
