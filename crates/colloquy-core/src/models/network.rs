//! Citation networks: scholarly entities and the citation relationships
//! between them, as produced by the visualization service.

use std::collections::{BTreeMap, HashMap, HashSet, VecDeque};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PayloadError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CitationNetwork {
    pub nodes: Vec<NetworkNode>,
    pub edges: Vec<NetworkEdge>,
    /// Id of the node the network was expanded from.
    pub center: String,
    #[ts(
        type = "{ totalNodes: number, totalEdges: number, depth: number, generatedAt: string, [key: string]: unknown }"
    )]
    pub metadata: NetworkMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NetworkNode {
    pub id: String,
    pub title: String,
    pub year: i32,
    pub citations: u32,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Hops from the center node at generation time.
    pub level: u32,
    pub open_access: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum NodeKind {
    Publication,
    Dataset,
    Software,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NetworkEdge {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub kind: EdgeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum EdgeKind {
    Citation,
    Reference,
}

/// Generation metadata. Its TypeScript shape is spelled out on
/// [`CitationNetwork::metadata`] because of the open-ended extension fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkMetadata {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub depth: u32,
    pub generated_at: jiff::Timestamp,
    /// Producer-specific fields, passed through untouched.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl CitationNetwork {
    /// Parse and validate a network payload.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PayloadError> {
        let network: CitationNetwork = serde_json::from_slice(bytes)?;
        network.validate()?;
        Ok(network)
    }

    pub fn node(&self, id: &str) -> Option<&NetworkNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Check every structural invariant of the network.
    ///
    /// Checks run in a fixed order (node ids, center, edges, metadata
    /// totals, depth) so the first violation reported is deterministic.
    pub fn validate(&self) -> Result<(), PayloadError> {
        let mut ids = HashSet::with_capacity(self.nodes.len());
        for node in &self.nodes {
            if !ids.insert(node.id.as_str()) {
                return Err(PayloadError::DuplicateNode(node.id.clone()));
            }
        }

        if !ids.contains(self.center.as_str()) {
            return Err(PayloadError::UnknownCenter(self.center.clone()));
        }

        for (index, edge) in self.edges.iter().enumerate() {
            for end in [&edge.source, &edge.target] {
                if !ids.contains(end.as_str()) {
                    return Err(PayloadError::DanglingEdge {
                        index,
                        node: end.clone(),
                    });
                }
            }
        }

        if self.metadata.total_nodes != self.nodes.len() {
            return Err(PayloadError::NodeCountMismatch {
                declared: self.metadata.total_nodes,
                actual: self.nodes.len(),
            });
        }
        if self.metadata.total_edges != self.edges.len() {
            return Err(PayloadError::EdgeCountMismatch {
                declared: self.metadata.total_edges,
                actual: self.edges.len(),
            });
        }

        let depth = self.metadata.depth;
        let reachable = self.reachable_from_center();
        if let Some(node) = self
            .nodes
            .iter()
            .find(|n| reachable.contains(n.id.as_str()) && n.level > depth)
        {
            return Err(PayloadError::LevelExceedsDepth {
                node: node.id.clone(),
                level: node.level,
                depth,
            });
        }

        Ok(())
    }

    /// Ids of every node connected to `center`, following edges in either
    /// direction. Includes the center itself when it exists.
    pub fn reachable_from_center(&self) -> HashSet<&str> {
        let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
        for edge in &self.edges {
            adjacency
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
            adjacency
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }

        let mut seen = HashSet::new();
        if self.node(&self.center).is_none() {
            return seen;
        }

        let mut queue = VecDeque::from([self.center.as_str()]);
        seen.insert(self.center.as_str());
        while let Some(id) = queue.pop_front() {
            for &next in adjacency.get(id).into_iter().flatten() {
                if seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }
}
