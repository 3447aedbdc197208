//! Chart payloads produced by the visualization service.
//!
//! The producer and the renderers agree on these shapes exactly. Payloads
//! are validated once, at ingest, via [`ChartData::from_json`]; a payload
//! that fails any check is rejected as a whole.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::network::CitationNetwork;
use crate::error::PayloadError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartData {
    pub chart_type: ChartType,
    pub config: ChartConfig,
    /// Rows of arbitrary records; every entry must be a JSON object.
    #[serde(default)]
    #[ts(type = "Array<Record<string, unknown>>")]
    pub data: Vec<serde_json::Value>,
    /// Series key → display settings.
    #[serde(default)]
    pub chart_config: BTreeMap<String, SeriesConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_data: Option<CitationNetwork>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ChartType {
    Network,
    Bar,
    Line,
    Pie,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartConfig {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeriesConfig {
    pub label: String,
    pub color: String,
}

impl ChartData {
    /// Parse and validate a chart payload.
    ///
    /// Unknown `chartType` values fail at parse time.
    pub fn from_json(bytes: &[u8]) -> Result<Self, PayloadError> {
        let chart: ChartData = serde_json::from_slice(bytes)?;
        chart.validate()?;
        Ok(chart)
    }

    pub fn validate(&self) -> Result<(), PayloadError> {
        if let Some(index) = self.data.iter().position(|d| !d.is_object()) {
            return Err(PayloadError::NonObjectDatum { index });
        }

        match (&self.chart_type, &self.network_data) {
            (ChartType::Network, None) => Err(PayloadError::MissingNetworkData),
            (_, Some(network)) => network.validate(),
            (_, None) => Ok(()),
        }
    }
}
