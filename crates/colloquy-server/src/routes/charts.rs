//! Ingest boundary for visualization payloads.
//!
//! Renderers post what the visualization service produced and get back
//! either the validated payload or a 422 naming the first violation.
//! Invalid payloads are rejected whole.

use axum::body::Bytes;
use axum::Json;

use colloquy_core::models::chart::ChartData;
use colloquy_core::models::network::CitationNetwork;

use crate::error::ApiError;

pub async fn validate_chart(body: Bytes) -> Result<Json<ChartData>, ApiError> {
    let chart = ChartData::from_json(&body)?;
    tracing::debug!(chart_type = ?chart.chart_type, rows = chart.data.len(), "chart accepted");
    Ok(Json(chart))
}

pub async fn validate_network(body: Bytes) -> Result<Json<CitationNetwork>, ApiError> {
    let network = CitationNetwork::from_json(&body)?;
    tracing::debug!(
        center = %network.center,
        nodes = network.nodes.len(),
        edges = network.edges.len(),
        "network accepted"
    );
    Ok(Json(network))
}
