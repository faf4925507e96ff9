//! End-to-end flow over the toolkit: list measurements, describe what the
//! list returned, query — the call order the tool descriptions suggest to
//! the agent.

use std::sync::Arc;

use rig::tool::Tool;
use serde_json::{json, Value};

use fluxq_agent::tools::{ListMeasurementsArgs, MeasurementInfoArgs, QueryArgs};
use fluxq_agent::{InfluxToolkit, QueryReply, ToolName};
use fluxq_influx::testing::{row, MemoryStore};
use fluxq_influx::Point;

fn telemetry_store() -> Arc<MemoryStore> {
    let mut cpu_row = Point::new();
    cpu_row.insert("time".into(), json!("2024-01-01T00:00:00Z"));
    cpu_row.insert("usage_user".into(), json!(12.5));

    Arc::new(
        MemoryStore::with_database("telemetry")
            .on(
                "SHOW MEASUREMENTS",
                vec![row("name", "cpu"), row("name", "temp")],
            )
            .on(
                "SHOW FIELD KEYS FROM cpu",
                vec![row("fieldKey", "usage_user")],
            )
            .on("SHOW TAG KEYS FROM cpu", vec![row("tagKey", "host")])
            .on("SHOW FIELD KEYS FROM temp", vec![row("fieldKey", "value")])
            .on("SHOW TAG KEYS FROM temp", vec![row("tagKey", "sensor")])
            .on("SELECT usage_user FROM cpu LIMIT 10", vec![cpu_row]),
    )
}

#[tokio::test]
async fn list_describe_query_round_trip() {
    let toolkit = InfluxToolkit::new(telemetry_store());

    // List.
    let listed = toolkit
        .list_measurements_tool()
        .call(ListMeasurementsArgs::default())
        .await
        .unwrap();
    assert_eq!(listed, "cpu, temp");

    // Every listed name must describe without raising.
    let described = toolkit
        .measurement_info_tool()
        .call(MeasurementInfoArgs {
            measurement_names: listed,
        })
        .await
        .unwrap();
    let schema: Value = serde_json::from_str(&described).unwrap();
    assert_eq!(schema["cpu"]["fields"], json!(["usage_user"]));
    assert_eq!(schema["temp"]["tags"], json!(["sensor"]));

    // Query.
    let reply = toolkit
        .query_tool()
        .call(QueryArgs {
            query: "SELECT usage_user FROM cpu LIMIT 10".to_string(),
        })
        .await
        .unwrap();
    match reply {
        QueryReply::Rows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0]["usage_user"], json!(12.5));
        }
        QueryReply::Message(m) => panic!("expected rows, got message: {m}"),
    }
}

#[tokio::test]
async fn descriptions_teach_the_call_order() {
    let toolkit = InfluxToolkit::new(telemetry_store());
    let defs = toolkit.definitions().await;

    assert_eq!(defs.len(), 3);
    assert_eq!(defs[0].name, ToolName::Query.as_str());
    assert_eq!(defs[1].name, ToolName::MeasurementInfo.as_str());
    assert_eq!(defs[2].name, ToolName::ListMeasurements.as_str());

    // query -> info -> list chain, readable from the descriptions alone.
    assert!(defs[0].description.contains(ToolName::MeasurementInfo.as_str()));
    assert!(defs[1].description.contains(ToolName::ListMeasurements.as_str()));

    for def in &defs {
        assert_eq!(def.parameters["type"], "object");
    }
}

#[tokio::test]
async fn mixed_known_and_unknown_names_do_not_raise() {
    let toolkit = InfluxToolkit::new(telemetry_store());

    let described = toolkit
        .measurement_info_tool()
        .call(MeasurementInfoArgs {
            measurement_names: "temp, nonexistent_measurement".to_string(),
        })
        .await
        .unwrap();

    // The unknown name yields empty key lists rather than an error.
    let schema: Value = serde_json::from_str(&described).unwrap();
    assert_eq!(schema["temp"]["fields"], json!(["value"]));
    assert_eq!(schema["nonexistent_measurement"]["fields"], json!([]));
}

#[tokio::test]
async fn batch_failure_is_all_or_nothing() {
    let store = Arc::new(
        MemoryStore::with_database("telemetry")
            .on("SHOW FIELD KEYS FROM temp", vec![row("fieldKey", "value")])
            .on("SHOW TAG KEYS FROM temp", vec![row("tagKey", "sensor")])
            .fail_on("SHOW FIELD KEYS FROM broken", "shard unavailable"),
    );
    let toolkit = InfluxToolkit::new(store);

    let out = toolkit
        .measurement_info_tool()
        .call(MeasurementInfoArgs {
            measurement_names: "temp, broken".to_string(),
        })
        .await
        .unwrap();

    assert!(out.starts_with("Error: "));
    // No partial mapping for the measurement that succeeded.
    assert!(serde_json::from_str::<Value>(&out).is_err());
    assert!(!out.contains("sensor"));
}
