use thiserror::Error;

/// A chart or citation-network payload that breaks the wire contract.
///
/// Any of these rejects the whole payload; nothing is rendered partially.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("invalid payload json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chart type 'network' requires networkData")]
    MissingNetworkData,

    #[error("chart data entry {index} is not an object")]
    NonObjectDatum { index: usize },

    #[error("duplicate node id: {0}")]
    DuplicateNode(String),

    #[error("edge {index} references unknown node '{node}'")]
    DanglingEdge { index: usize, node: String },

    #[error("center '{0}' does not match any node id")]
    UnknownCenter(String),

    #[error("metadata.totalNodes is {declared} but the network has {actual} nodes")]
    NodeCountMismatch { declared: usize, actual: usize },

    #[error("metadata.totalEdges is {declared} but the network has {actual} edges")]
    EdgeCountMismatch { declared: usize, actual: usize },

    #[error("node '{node}' has level {level}, deeper than metadata.depth {depth}")]
    LevelExceedsDepth { node: String, level: u32, depth: u32 },
}
