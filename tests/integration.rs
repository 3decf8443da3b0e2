//! End-to-end conversion tests: from flow tree to wire-format documents.
mod common;
use common::{fixed_clock, nested, task, tree, TEST_TIMESTAMP};
use henkan::prelude::*;
use serde_json::Value;

fn convert(flow: FlowTree) -> Vec<ProcessDefinition> {
    Converter::builder(flow, "migration")
        .with_clock(fixed_clock())
        .build()
        .convert()
        .unwrap()
}

fn parse(payload: &str) -> Value {
    serde_json::from_str(payload).unwrap()
}

#[test]
fn test_daily_flow_produces_one_definition() {
    let definitions = convert(common::create_daily_flow());

    assert_eq!(definitions.len(), 1);
    let definition = &definitions[0];
    assert_eq!(definition.project_name, "migration");
    assert_eq!(definition.process_definition_name, "daily");
    assert_eq!(definition.process_definition_description, "");
}

#[test]
fn test_process_data_carries_tasks_and_retry_policy() {
    let definitions = convert(common::create_daily_flow());
    let data = parse(&definitions[0].process_definition_json);

    assert_eq!(data["tenantId"], -1);
    assert_eq!(data["timeout"], 0);

    // Reserved keys are stripped from the global parameters.
    let params = data["globalParams"].as_array().unwrap();
    assert_eq!(params.len(), 1);
    assert_eq!(params[0]["prop"], "owner");
    assert_eq!(params[0]["direct"], "IN");
    assert_eq!(params[0]["type"], "VARCHAR");
    assert_eq!(params[0]["value"], "etl");

    let tasks = data["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 3);
    for task in tasks {
        assert_eq!(task["workerGroupId"], 1);
        assert_eq!(task["runFlag"], "NORMAL");
        assert_eq!(task["type"], "SHELL");
        assert_eq!(task["taskInstancePriority"], "MEDIUM");
        assert_eq!(task["maxRetryTimes"], "2");
        // 300000 ms is five minutes, which lands in the ten-minute bucket.
        assert_eq!(task["retryInterval"], "10");
        assert_eq!(task["id"], task["name"]);
        assert_eq!(task["description"], "");
        assert_eq!(task["dependence"], serde_json::json!({}));
        assert_eq!(task["timeout"]["enable"], false);
        assert_eq!(task["timeout"]["strategy"], "");
        assert_eq!(task["params"]["localParams"], serde_json::json!([]));
    }

    let c = tasks.iter().find(|t| t["name"] == "C").unwrap();
    assert_eq!(c["preTasks"], serde_json::json!(["A", "B"]));
    assert_eq!(c["params"]["rawScript"], "echo C");
}

#[test]
fn test_layout_orders_dependencies_by_descending_level() {
    let definitions = convert(common::create_daily_flow());
    let locations = parse(&definitions[0].process_definition_locations);

    // C depends on A (level 0) and B (level 1); deeper comes first.
    assert_eq!(locations["C"]["targetarr"], "B,A");
    assert_eq!(locations["C"]["name"], "C");
    assert_eq!(locations["C"]["x"], 0);
    assert_eq!(locations["C"]["y"], 0);
    assert_eq!(locations["A"]["targetarr"], "");
}

#[test]
fn test_connects_list_every_declared_edge() {
    let definitions = convert(common::create_daily_flow());
    let connects = parse(&definitions[0].process_definition_connects);

    assert_eq!(
        connects,
        serde_json::json!([
            {"endPointSourceId": "A", "endPointTargetId": "B"},
            {"endPointSourceId": "A", "endPointTargetId": "C"},
            {"endPointSourceId": "B", "endPointTargetId": "C"},
        ])
    );
}

#[test]
fn test_resource_reference_lands_in_task_resource_list() {
    let flow = tree(
        "jars",
        &[("lib.dir", "/opt/lib")],
        vec![task("wc", &[], "hadoop jar ${lib.dir}/wc.jar in out")],
    );
    let definitions = convert(flow);
    let data = parse(&definitions[0].process_definition_json);

    let task = &data["tasks"][0];
    assert_eq!(task["params"]["rawScript"], "hadoop jar /opt/lib/wc.jar in out");
    assert_eq!(
        task["params"]["resourceList"],
        serde_json::json!([{"res": "/opt/lib/wc.jar"}])
    );
}

#[test]
fn test_task_without_resource_gets_empty_reference() {
    let flow = tree("plain", &[], vec![task("hello", &[], "echo hello")]);
    let definitions = convert(flow);
    let data = parse(&definitions[0].process_definition_json);

    assert_eq!(
        data["tasks"][0]["params"]["resourceList"],
        serde_json::json!([{"res": ""}])
    );
}

#[test]
fn test_nested_flow_yields_promoted_and_leftover_documents() {
    let flow = tree(
        "parent",
        &[("x", "1")],
        vec![
            nested("sub1", &[], vec![task("inner", &[], "echo inner")]),
            task("top", &[], "echo top"),
        ],
    );
    let definitions = convert(flow);

    assert_eq!(definitions.len(), 2);

    let promoted = &definitions[0];
    assert_eq!(
        promoted.process_definition_name,
        format!("az-{}-sub1", TEST_TIMESTAMP)
    );
    let promoted_data = parse(&promoted.process_definition_json);
    // The configless subflow adopted the parent scope wholesale.
    let params = promoted_data["globalParams"].as_array().unwrap();
    assert_eq!(params[0]["prop"], "x");
    assert_eq!(params[0]["value"], "1");

    let leftover = &definitions[1];
    assert_eq!(leftover.process_definition_name, "parent");
    let leftover_data = parse(&leftover.process_definition_json);
    assert_eq!(leftover_data["tasks"][0]["name"], "top");
}

#[test]
fn test_conversion_fails_closed_on_bad_input() {
    // An undefined dependency anywhere aborts the whole conversion.
    let broken = tree(
        "broken",
        &[],
        vec![task("a", &[], "true"), task("b", &["ghost"], "true")],
    );
    let result = Converter::builder(broken, "migration")
        .with_clock(fixed_clock())
        .build()
        .convert();
    assert!(matches!(
        result,
        Err(ConvertError::UndefinedDependency { .. })
    ));

    // So does a non-numeric retry backoff.
    let misconfigured = tree(
        "misconfigured",
        &[("retry.backoff", "soon")],
        vec![task("a", &[], "true")],
    );
    let result = Converter::builder(misconfigured, "migration")
        .with_clock(fixed_clock())
        .build()
        .convert();
    assert!(matches!(result, Err(ConvertError::InvalidRetryConfig { .. })));
}

#[test]
fn test_outer_document_encodes_with_camel_case_keys() {
    let definitions = convert(common::create_daily_flow());
    let outer: Value = serde_json::from_str(&definitions[0].to_json().unwrap()).unwrap();

    assert_eq!(outer["projectName"], "migration");
    assert_eq!(outer["processDefinitionName"], "daily");
    assert_eq!(outer["processDefinitionDescription"], "");
    // The three payloads are themselves JSON-encoded strings.
    assert!(outer["processDefinitionJson"].is_string());
    assert!(outer["processDefinitionLocations"].is_string());
    assert!(outer["processDefinitionConnects"].is_string());
}
