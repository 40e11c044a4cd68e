//! E-Line payload shaping

use serde_json::{json, Value};

use crate::cli::{AddElineArgs, Provider};

/// Build the E-Line document for an add
///
/// A segmentation id on either endpoint also marks that endpoint's
/// network-type as vlan.
pub fn build_eline(args: &AddElineArgs) -> Value {
    let mut eline = json!({
        "name": args.name,
        "path-name": args.path_name,
        "endpoint1": endpoint(&args.source_port, args.source_segmentation_id),
        "endpoint2": endpoint(&args.destination_port, args.destination_segmentation_id),
        "provider": args.provider.as_str(),
        "bidirectional": args.bidirectional
    });

    if let Some(ether_type) = &args.ether_type {
        eline["ethernet-type"] = json!(ether_type);
    }

    eline
}

pub(crate) fn endpoint(switch_port: &str, segmentation_id: Option<u32>) -> Value {
    let mut ep = json!({ "switch-port": switch_port });
    if let Some(id) = segmentation_id {
        ep["segmentation-id"] = json!(id);
        ep["network-type"] = json!("vlan");
    }
    ep
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> AddElineArgs {
        AddElineArgs {
            name: "e1".to_string(),
            path_name: "p1".to_string(),
            source_port: "openflow:1:1".to_string(),
            destination_port: "openflow:2:1".to_string(),
            source_segmentation_id: None,
            destination_segmentation_id: None,
            ether_type: None,
            bidirectional: true,
            provider: Provider::Sr,
        }
    }

    #[test]
    fn test_build_eline_minimal() {
        let eline = build_eline(&args());
        assert_eq!(eline["name"], "e1");
        assert_eq!(eline["path-name"], "p1");
        assert_eq!(eline["endpoint1"], json!({"switch-port": "openflow:1:1"}));
        assert_eq!(eline["bidirectional"], json!(true));
        assert_eq!(eline.get("ethernet-type"), None);
    }

    #[test]
    fn test_segmentation_id_implies_vlan() {
        let mut a = args();
        a.source_segmentation_id = Some(100);
        a.ether_type = Some("0x0800".to_string());
        let eline = build_eline(&a);
        assert_eq!(
            eline["endpoint1"],
            json!({
                "switch-port": "openflow:1:1",
                "segmentation-id": 100,
                "network-type": "vlan"
            })
        );
        // Untagged endpoint untouched
        assert_eq!(eline["endpoint2"], json!({"switch-port": "openflow:2:1"}));
        assert_eq!(eline["ethernet-type"], "0x0800");
    }
}
