//! Target-schema document types and their wire encoding.
//!
//! One [`ProcessDefinition`] is produced per flow. The scheduler's import
//! endpoint expects the three payloads (tasks and parameters, layout,
//! edges) pre-encoded as JSON strings inside the outer document, so the
//! types here mirror that wire format exactly.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One output record of the conversion, importable by the target scheduler.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessDefinition {
    pub project_name: String,
    pub process_definition_name: String,
    /// Always empty; the source format carries no flow description.
    pub process_definition_description: String,
    /// JSON-encoded [`ProcessData`].
    pub process_definition_json: String,
    /// JSON-encoded map of node name to [`LayoutEntry`].
    pub process_definition_locations: String,
    /// JSON-encoded list of [`Connect`].
    pub process_definition_connects: String,
}

impl ProcessDefinition {
    /// Encodes the outer document itself as JSON.
    pub fn to_json(&self) -> Result<String, ConvertError> {
        encode(self)
    }
}

/// The task-and-parameter payload of a process definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessData {
    pub tenant_id: i32,
    pub timeout: u32,
    pub global_params: Vec<GlobalParam>,
    pub tasks: Vec<TaskDescriptor>,
}

/// A flow-scoped configuration entry exposed as a named input parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalParam {
    pub prop: String,
    pub direct: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub value: String,
}

/// One schedulable task of the output graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDescriptor {
    pub worker_group_id: i32,
    pub description: String,
    pub run_flag: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub params: TaskParams,
    pub timeout: TaskTimeout,
    pub max_retry_times: String,
    pub task_instance_priority: String,
    pub name: String,
    pub dependence: serde_json::Map<String, serde_json::Value>,
    pub retry_interval: String,
    pub pre_tasks: Vec<String>,
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskParams {
    pub raw_script: String,
    pub local_params: Vec<GlobalParam>,
    pub resource_list: Vec<ResourceEntry>,
}

/// A resolved resource-file reference attached to a task; `res` is empty when
/// the command names none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub res: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskTimeout {
    pub enable: bool,
    pub strategy: String,
}

/// Visual-layout record for one node. Coordinates are placeholders; actual
/// positioning is a downstream rendering concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub name: String,
    /// Comma-joined dependency names, sorted by descending level.
    pub targetarr: String,
    pub x: i32,
    pub y: i32,
}

/// One dependency edge, drawn from a `depends_on` declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connect {
    pub end_point_source_id: String,
    pub end_point_target_id: String,
}

/// Name-keyed layout map; ordered so repeated conversions encode identically.
pub type LayoutMap = BTreeMap<String, LayoutEntry>;

pub(crate) fn encode<T: Serialize>(payload: &T) -> Result<String, ConvertError> {
    serde_json::to_string(payload).map_err(|e| ConvertError::Serialization(e.to_string()))
}
