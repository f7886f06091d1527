//! Well-known type identifiers shared by the registry and the rewriter.

/// Container marker for a flow tab.
pub const TAB_TYPE: &str = "tab";

/// Container marker for a subflow definition.
pub const SUBFLOW_TYPE: &str = "subflow";

/// Placeholder that stands in for a node whose type the runtime does not know.
pub const EXISTING_PLACEHOLDER_TYPE: &str = "designer_node_existing";

/// Placeholder used by the designer for nodes that have not been implemented yet.
pub const NEW_PLACEHOLDER_TYPE: &str = "designer_node_new";

/// Type the source runtime assigns when it could not resolve a node's type.
/// Never considered known.
pub const UNRESOLVED_TYPE: &str = "unknown";

/// Types assumed to be installed when no manifest is available.
pub const FALLBACK_KNOWN_TYPES: &[&str] = &[
    // Flow structure
    TAB_TYPE,
    SUBFLOW_TYPE,
    "junction",
    "comment",
    "global-config",
    // Common
    "inject",
    "debug",
    "complete",
    "catch",
    "status",
    "link in",
    "link out",
    "link call",
    // Control and routing
    "function",
    "switch",
    "change",
    "range",
    "template",
    "delay",
    "trigger",
    "exec",
    "rbe",
    // Transform
    "csv",
    "html",
    "json",
    "xml",
    "yaml",
    // Sequence
    "split",
    "join",
    "sort",
    "batch",
    // Storage
    "file",
    "file in",
    "watch",
    // Network
    "tls-config",
    "http proxy",
    "mqtt in",
    "mqtt out",
    "mqtt-broker",
    "http in",
    "http response",
    "http request",
    "websocket in",
    "websocket out",
    "websocket-listener",
    "websocket-client",
    "tcp in",
    "tcp out",
    "tcp request",
    "udp in",
    "udp out",
    // Placeholders
    EXISTING_PLACEHOLDER_TYPE,
    NEW_PLACEHOLDER_TYPE,
];

/// Types unioned into every manifest-derived registry.
pub(crate) const ALWAYS_KNOWN_TYPES: &[&str] = &[
    TAB_TYPE,
    SUBFLOW_TYPE,
    EXISTING_PLACEHOLDER_TYPE,
    NEW_PLACEHOLDER_TYPE,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_excludes_unresolved_sentinel() {
        assert!(!FALLBACK_KNOWN_TYPES.contains(&UNRESOLVED_TYPE));
    }

    #[test]
    fn fallback_covers_always_known() {
        for ty in ALWAYS_KNOWN_TYPES {
            assert!(FALLBACK_KNOWN_TYPES.contains(ty), "missing {ty}");
        }
    }
}
