use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Sync direction of a folder as reported by `/rest/config`.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum FolderType {
    SendOnly,
    ReceiveOnly,
    SendReceive,
    /// Anything the daemon reports that we do not model is treated as
    /// plain bidirectional sync.
    #[serde(other)]
    Other,
}

impl Default for FolderType {
    fn default() -> Self {
        FolderType::SendReceive
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct DaemonConfig {
    #[serde(default)]
    pub folders: Vec<FolderEntry>,
    #[serde(default)]
    pub devices: Vec<DeviceEntry>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct FolderEntry {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub paused: bool,
    #[serde(default, rename = "type")]
    pub folder_type: FolderType,
}

impl FolderEntry {
    /// Human-facing name, falling back to the id for unlabeled folders.
    pub fn display_label(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeviceEntry {
    #[serde(rename = "deviceID")]
    pub device_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub paused: bool,
}

/// `/rest/db/status?folder=` snapshot.
#[derive(Debug, Deserialize, Default)]
pub struct DbStatus {
    #[serde(default, rename = "globalBytes")]
    pub global_bytes: u64,
    #[serde(default, rename = "localBytes")]
    pub local_bytes: u64,
    #[serde(default, rename = "needBytes")]
    pub need_bytes: u64,
    #[serde(default, rename = "needTotalItems")]
    pub need_total_items: u64,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub errors: u64,
    #[serde(default, rename = "receiveOnlyTotalItems")]
    pub receive_only_total_items: u64,
}

/// `/rest/db/completion` for either a folder or a device.
/// A 404 from the daemon means "nothing needed" and decodes to the default.
#[derive(Debug, Deserialize, Default, Clone, Copy)]
pub struct DbCompletion {
    #[serde(default)]
    pub completion: f64,
    #[serde(default, rename = "needBytes")]
    pub need_bytes: u64,
}

#[derive(Debug, Deserialize, Default)]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: HashMap<String, ConnectionState>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConnectionState {
    #[serde(default)]
    pub connected: bool,
    #[serde(default, rename = "inBytesTotal")]
    pub in_bytes_total: u64,
    #[serde(default, rename = "outBytesTotal")]
    pub out_bytes_total: u64,
}

#[derive(Debug, Deserialize)]
pub struct SystemStatus {
    #[serde(rename = "myID")]
    pub my_id: String,
    #[serde(default)]
    pub uptime: i64,
}

#[derive(Debug, Deserialize)]
pub struct SystemVersion {
    pub version: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct SystemErrors {
    #[serde(default)]
    pub errors: Vec<SystemErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SystemErrorEntry {
    pub when: String,
    pub message: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct FolderErrors {
    #[serde(default)]
    pub errors: Vec<FolderErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub struct FolderErrorEntry {
    pub path: String,
    pub error: String,
}

#[derive(Serialize)]
pub struct FolderQuery<'a> {
    pub folder: &'a str,
}

/// Completion is queried for exactly one of a folder or a device.
#[derive(Serialize, Default)]
pub struct CompletionQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<&'a str>,
}

#[derive(Serialize)]
pub struct EventsQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<&'a str>,
    pub since: u64,
    pub limit: u32,
}
