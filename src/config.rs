/// RESTCONF path constants for the Flow Manager API
pub mod api {
    /// Fixed base path on the controller
    pub const BASE_PATH: &str = "/restconf";

    /// Flow Manager paths collection
    pub const PATHS: &str = "lumina-flowmanager-path:paths";

    /// Flow Manager tree-paths collection
    pub const TREEPATHS: &str = "lumina-flowmanager-tree-path:treepaths";

    /// Flow Manager E-Lines collection
    pub const ELINES: &str = "lumina-flowmanager-eline:elines";

    /// Flow Manager E-Trees collection
    pub const ETREES: &str = "lumina-flowmanager-etree:etrees";

    /// Envelope key taps come back under (PUTs still use a bare "tap" key)
    pub const TAP_ENVELOPE: &str = "lumina-flowmanager-eline-tap:tap";

    /// OpenDaylight inventory subtree (operational only)
    pub const INVENTORY: &str = "opendaylight-inventory:nodes";

    /// Controller system status (operational only)
    pub const SYSTEM_STATUS: &str = "lumina-controller-status:system-status";

    /// E-Line stats RPC
    pub const ELINE_STATS_RPC: &str = "lumina-flowmanager-eline:get-stats";

    /// E-Tree stats RPC
    pub const ETREE_STATS_RPC: &str = "lumina-flowmanager-etree:get-stats";

    /// Node-connector statistics envelope key
    pub const CONNECTOR_STATS: &str =
        "opendaylight-port-statistics:flow-capable-node-connector-statistics";
}

/// Default controller connection values
pub mod defaults {
    /// Controller address
    pub const IP: &str = "127.0.0.1";

    /// RESTCONF port
    pub const PORT: u16 = 8181;

    /// Basic auth user
    pub const USER: &str = "admin";

    /// Basic auth password
    pub const PASSWORD: &str = "admin";

    /// URL scheme
    pub const PROTOCOL: &str = "http";

    /// Per-request timeout in seconds
    pub const TIMEOUT_SECS: u64 = 5;

    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}
