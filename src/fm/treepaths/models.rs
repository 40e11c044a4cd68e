//! Tree-path payload shaping

use serde_json::{json, Value};

use crate::cli::Provider;
use crate::fm::paths::waypoint_list;

/// Build the tree-path document for an add
///
/// The initial tree has a single leaf; more are attached afterwards with
/// the leaf subcommands. Waypoint constraints apply to that first leaf.
pub fn build_treepath(
    name: &str,
    root_switch: &str,
    leaf_switch: &str,
    waypoints: &[String],
    provider: Provider,
) -> Value {
    json!({
        "name": name,
        "root": { "node": root_switch },
        "leaves": {
            "leaf": [ leaf_document(leaf_switch, waypoints) ]
        },
        "provider": provider.as_str()
    })
}

/// Build one leaf document for the leaf sub-resource
pub fn build_treepath_leaf(node: &str, waypoints: &[String]) -> Value {
    leaf_document(node, waypoints)
}

fn leaf_document(node: &str, waypoints: &[String]) -> Value {
    let mut leaf = json!({ "node": node, "constraints": {} });
    if !waypoints.is_empty() {
        leaf["constraints"]["waypoints"] = waypoint_list(waypoints);
    }
    leaf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_treepath() {
        let tp = build_treepath("t1", "openflow:1", "openflow:3", &[], Provider::Sr);
        assert_eq!(tp["root"], json!({"node": "openflow:1"}));
        assert_eq!(
            tp["leaves"]["leaf"],
            json!([{"node": "openflow:3", "constraints": {}}])
        );
        assert_eq!(tp["provider"], "sr");
    }

    #[test]
    fn test_build_leaf_with_waypoints() {
        let waypoints = vec!["openflow:2".to_string()];
        let leaf = build_treepath_leaf("openflow:5", &waypoints);
        assert_eq!(
            leaf,
            json!({
                "node": "openflow:5",
                "constraints": {"waypoints": [{"order": 0, "nodeid": "openflow:2"}]}
            })
        );
    }
}
