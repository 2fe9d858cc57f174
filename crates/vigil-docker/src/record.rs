//! Container listing records and their streaming decode.
//!
//! `docker ps --format '{{json .}}'` emits one self-delimiting JSON object
//! per running container, not a single array. Decoding is greedy: decode
//! one object, append it, repeat until the input is exhausted. End of
//! input is normal termination; a malformed object anywhere before that
//! aborts the whole listing and discards everything decoded so far.

use serde::{Deserialize, Serialize};

use vigil_common::Result;

/// One running container as reported by the listing command.
///
/// Only `id`, `names`, and `image` participate in matching; the remaining
/// fields are informational passthrough. A field absent from the JSON
/// object decodes to an empty string, never an error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerRecord {
    /// Runtime-assigned unique identifier.
    #[serde(rename = "ID")]
    pub id: String,
    /// Container names, comma-joined when there are several.
    #[serde(rename = "Names")]
    pub names: String,
    /// Image reference the container was started from.
    #[serde(rename = "Image")]
    pub image: String,

    #[serde(rename = "Command")]
    pub command: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: String,
    #[serde(rename = "Labels")]
    pub labels: String,
    #[serde(rename = "LocalVolumes")]
    pub local_volumes: String,
    #[serde(rename = "Mounts")]
    pub mounts: String,
    #[serde(rename = "Networks")]
    pub networks: String,
    #[serde(rename = "Ports")]
    pub ports: String,
    #[serde(rename = "RunningFor")]
    pub running_for: String,
    #[serde(rename = "Size")]
    pub size: String,
    #[serde(rename = "Status")]
    pub status: String,
}

/// Decode a captured listing into records, preserving source order.
pub fn decode_records(raw: &[u8]) -> Result<Vec<ContainerRecord>> {
    let mut records = Vec::new();
    for record in serde_json::Deserializer::from_slice(raw).into_iter::<ContainerRecord>() {
        records.push(record?);
    }
    Ok(records)
}
