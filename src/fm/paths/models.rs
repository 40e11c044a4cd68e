//! Path payload shaping

use serde_json::{json, Value};

use crate::cli::Provider;

/// Build the path document for an add
///
/// Waypoints keep their command-line order, numbered from zero.
pub fn build_path(
    name: &str,
    source_switch: &str,
    destination_switch: &str,
    waypoints: &[String],
    provider: Provider,
) -> Value {
    let mut path = json!({
        "name": name,
        "endpoint1": { "node": source_switch },
        "endpoint2": { "node": destination_switch },
        "provider": provider.as_str(),
        "constraints": {}
    });

    if !waypoints.is_empty() {
        path["constraints"]["waypoints"] = waypoint_list(waypoints);
    }

    path
}

/// Ordered waypoint constraint list shared with tree-path leaves
pub(crate) fn waypoint_list(waypoints: &[String]) -> Value {
    Value::Array(
        waypoints
            .iter()
            .enumerate()
            .map(|(order, nodeid)| json!({ "order": order, "nodeid": nodeid }))
            .collect(),
    )
}
