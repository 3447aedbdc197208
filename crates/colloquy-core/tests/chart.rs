use colloquy_core::error::PayloadError;
use colloquy_core::models::chart::{ChartData, ChartType};
use serde_json::{json, Value};

fn bar_chart() -> Value {
    json!({
        "chartType": "bar",
        "config": {
            "title": "Publications per year",
            "xAxisKey": "year",
            "footer": "Source: OpenAIRE Graph",
        },
        "data": [
            { "year": 2022, "publications": 14 },
            { "year": 2023, "publications": 21 },
        ],
        "chartConfig": {
            "publications": { "label": "Publications", "color": "#2563eb" },
        },
    })
}

fn network_chart() -> Value {
    json!({
        "chartType": "network",
        "config": { "title": "Citation network" },
        "data": [],
        "chartConfig": {},
        "networkData": {
            "nodes": [{
                "id": "root",
                "title": "Root paper",
                "year": 2019,
                "citations": 40,
                "type": "publication",
                "level": 0,
                "openAccess": false,
            }],
            "edges": [],
            "center": "root",
            "metadata": {
                "totalNodes": 1,
                "totalEdges": 0,
                "depth": 1,
                "generatedAt": "2025-03-01T12:00:00Z",
            },
        },
    })
}

fn parse(value: &Value) -> Result<ChartData, PayloadError> {
    ChartData::from_json(value.to_string().as_bytes())
}

#[test]
fn bar_chart_is_accepted() {
    let chart = parse(&bar_chart()).expect("bar chart should validate");
    assert_eq!(chart.chart_type, ChartType::Bar);
    assert_eq!(chart.config.x_axis_key.as_deref(), Some("year"));
    assert_eq!(chart.config.description, None);
    assert_eq!(chart.data.len(), 2);
    assert_eq!(chart.chart_config["publications"].color, "#2563eb");
    assert!(chart.network_data.is_none());
}

#[test]
fn network_chart_with_network_data_is_accepted() {
    let chart = parse(&network_chart()).expect("network chart should validate");
    assert_eq!(chart.chart_type, ChartType::Network);
    assert_eq!(chart.network_data.unwrap().center, "root");
}

#[test]
fn network_chart_without_network_data_is_rejected() {
    let mut value = network_chart();
    value.as_object_mut().unwrap().remove("networkData");
    assert!(matches!(parse(&value), Err(PayloadError::MissingNetworkData)));

    let mut value = network_chart();
    value["networkData"] = Value::Null;
    assert!(matches!(parse(&value), Err(PayloadError::MissingNetworkData)));
}

#[test]
fn malformed_nested_network_rejects_the_chart() {
    let mut value = network_chart();
    value["networkData"]["center"] = json!("elsewhere");
    assert!(matches!(parse(&value), Err(PayloadError::UnknownCenter(_))));
}

#[test]
fn unknown_chart_type_is_rejected() {
    let mut value = bar_chart();
    value["chartType"] = json!("scatter");
    assert!(matches!(parse(&value), Err(PayloadError::Json(_))));
}

#[test]
fn non_object_rows_are_rejected() {
    let mut value = bar_chart();
    value["data"] = json!([{ "year": 2022 }, 7]);
    assert!(matches!(
        parse(&value),
        Err(PayloadError::NonObjectDatum { index: 1 })
    ));
}

#[test]
fn serializes_with_wire_field_names() {
    let chart = parse(&bar_chart()).unwrap();
    let out = serde_json::to_value(&chart).unwrap();
    assert_eq!(out["chartType"], "bar");
    assert_eq!(out["config"]["xAxisKey"], "year");
    assert!(out.get("networkData").is_none());
    assert!(out["config"].get("description").is_none());
}
