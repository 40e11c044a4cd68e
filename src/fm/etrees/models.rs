//! E-Tree payload shaping

use serde_json::{json, Value};

use crate::cli::AddEtreeArgs;
use crate::fm::elines::endpoint;

/// Build the E-Tree document for an add
///
/// The initial leaf set carries exactly one leaf; further leaves are
/// attached through the leaf sub-resource.
pub fn build_etree(args: &AddEtreeArgs) -> Value {
    let mut etree = json!({
        "name": args.name,
        "path-name": args.path_name,
        "root": endpoint(&args.root_port, args.root_segmentation_id),
        "leaves": [{ "leaf": endpoint(&args.leaf_port, args.leaf_segmentation_id) }],
        "provider": args.provider.as_str()
    });

    if let Some(ether_type) = &args.ether_type {
        etree["ethernet-type"] = json!(ether_type);
    }

    etree
}

/// Build one E-Tree leaf document
pub fn build_etree_leaf(node: &str, switch_port: &str, segmentation_id: Option<u32>) -> Value {
    let mut leaf = endpoint(switch_port, segmentation_id);
    leaf["node"] = json!(node);
    leaf
}
