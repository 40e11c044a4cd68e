use serde_json::{json, Value};

/// Build the tap document for an add
///
/// The egress action mirrors the OpenFlow output action the controller
/// programs for mirrored traffic.
pub fn build_tap(path_name: &str, output_port: &str) -> Value {
    json!({
        "path-name": path_name,
        "egress": {
            "action": [
                {
                    "order": 3,
                    "output-action": {
                        "output-node-connector": output_port
                    }
                }
            ]
        }
    })
}
