use colloquy_core::error::PayloadError;
use colloquy_core::models::network::{CitationNetwork, EdgeKind, NodeKind};
use serde_json::{json, Value};

fn node(id: &str, level: u32) -> Value {
    json!({
        "id": id,
        "title": format!("Paper {id}"),
        "year": 2021,
        "citations": 12,
        "type": "publication",
        "level": level,
        "openAccess": true,
    })
}

fn network() -> Value {
    json!({
        "nodes": [node("a", 0), node("b", 1), node("c", 2)],
        "edges": [
            { "source": "a", "target": "b", "type": "citation", "weight": 0.5 },
            { "source": "c", "target": "b", "type": "reference" },
        ],
        "center": "a",
        "metadata": {
            "totalNodes": 3,
            "totalEdges": 2,
            "depth": 2,
            "generatedAt": "2025-03-01T12:00:00Z",
            "source": "openaire-graph",
        },
    })
}

fn parse(value: &Value) -> Result<CitationNetwork, PayloadError> {
    CitationNetwork::from_json(value.to_string().as_bytes())
}

#[test]
fn well_formed_network_is_accepted() {
    let net = parse(&network()).expect("network should validate");
    assert_eq!(net.nodes.len(), 3);
    assert_eq!(net.nodes[0].kind, NodeKind::Publication);
    assert!(net.nodes[0].open_access);
    assert_eq!(net.edges[0].kind, EdgeKind::Citation);
    assert_eq!(net.edges[0].weight, Some(0.5));
    assert_eq!(net.edges[1].weight, None);
    assert_eq!(net.metadata.extra.get("source"), Some(&json!("openaire-graph")));
}

#[test]
fn extension_metadata_survives_serialization() {
    let net = parse(&network()).unwrap();
    let out = serde_json::to_value(&net).unwrap();
    assert_eq!(out["metadata"]["source"], "openaire-graph");
    assert_eq!(out["metadata"]["totalNodes"], 3);
    assert_eq!(out["nodes"][0]["openAccess"], true);
    assert_eq!(out["edges"][0]["type"], "citation");
    assert!(out["edges"][1].get("weight").is_none());
}

#[test]
fn unknown_center_is_rejected() {
    let mut value = network();
    value["center"] = json!("zzz");
    assert!(matches!(parse(&value), Err(PayloadError::UnknownCenter(id)) if id == "zzz"));
}

#[test]
fn edge_to_unknown_node_is_rejected() {
    let mut value = network();
    value["edges"][1]["target"] = json!("ghost");
    assert!(matches!(
        parse(&value),
        Err(PayloadError::DanglingEdge { index: 1, node }) if node == "ghost"
    ));
}

#[test]
fn duplicate_node_id_is_rejected() {
    let mut value = network();
    value["nodes"][2]["id"] = json!("b");
    assert!(matches!(parse(&value), Err(PayloadError::DuplicateNode(id)) if id == "b"));
}

#[test]
fn metadata_totals_must_match() {
    let mut value = network();
    value["metadata"]["totalNodes"] = json!(4);
    assert!(matches!(
        parse(&value),
        Err(PayloadError::NodeCountMismatch { declared: 4, actual: 3 })
    ));

    let mut value = network();
    value["metadata"]["totalEdges"] = json!(1);
    assert!(matches!(
        parse(&value),
        Err(PayloadError::EdgeCountMismatch { declared: 1, actual: 2 })
    ));
}

#[test]
fn reachable_node_deeper_than_depth_is_rejected() {
    let mut value = network();
    value["metadata"]["depth"] = json!(1);
    assert!(matches!(
        parse(&value),
        Err(PayloadError::LevelExceedsDepth { node, level: 2, depth: 1 }) if node == "c"
    ));
}

#[test]
fn unreachable_node_does_not_count_against_depth() {
    let mut value = network();
    value["nodes"]
        .as_array_mut()
        .unwrap()
        .push(node("island", 9));
    value["metadata"]["totalNodes"] = json!(4);
    let net = parse(&value).expect("island is outside the reachable set");
    let reachable = net.reachable_from_center();
    assert!(reachable.contains("c"));
    assert!(!reachable.contains("island"));
}

#[test]
fn unknown_enum_values_are_rejected() {
    let mut value = network();
    value["nodes"][0]["type"] = json!("patent");
    assert!(matches!(parse(&value), Err(PayloadError::Json(_))));

    let mut value = network();
    value["edges"][0]["type"] = json!("mentions");
    assert!(matches!(parse(&value), Err(PayloadError::Json(_))));
}
