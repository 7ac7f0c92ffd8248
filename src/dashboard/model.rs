use serde::Serialize;

use crate::api::{ConnectionState, DbCompletion, DbStatus, DeviceEntry, FolderEntry};
use crate::status::{classify_device, classify_folder, DeviceStatus, FolderStatus};

/// Marker prepended to the display name of the device this daemon runs on.
pub const SELF_MARKER: &str = "*";

/// Unified view over one daemon snapshot: one summary row for the host
/// itself plus one row per configured folder and device, in the daemon's
/// own listing order.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub host: HostRow,
    pub folders: Vec<FolderRow>,
    pub devices: Vec<DeviceRow>,
}

#[derive(Debug, Serialize)]
pub struct HostRow {
    pub name: String,
    #[serde(rename = "deviceID")]
    pub device_id: String,
    pub version: String,
    pub uptime_seconds: i64,
}

#[derive(Debug, Serialize)]
pub struct FolderRow {
    pub label: String,
    pub status: FolderStatus,
    pub completion: f64,
    pub global_bytes: u64,
    pub local_bytes: u64,
    pub need_bytes: u64,
}

impl FolderRow {
    pub fn from_parts(folder: &FolderEntry, status: &DbStatus, completion: DbCompletion) -> Self {
        let classified = classify_folder(
            folder.paused,
            folder.folder_type,
            &status.state,
            status.errors,
            status.receive_only_total_items,
            status.need_total_items,
        );
        Self {
            label: folder.display_label().to_string(),
            status: classified,
            completion: completion.completion,
            global_bytes: status.global_bytes,
            local_bytes: status.local_bytes,
            need_bytes: status.need_bytes,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeviceRow {
    pub name: String,
    pub status: DeviceStatus,
    pub completion: f64,
    pub download_bytes: u64,
    pub upload_bytes: u64,
    pub need_bytes: u64,
}

impl DeviceRow {
    /// A device with no connection-map entry has never connected; it is
    /// shown as disconnected with zeroed counters.
    pub fn from_parts(
        device: &DeviceEntry,
        connection: Option<&ConnectionState>,
        completion: DbCompletion,
        self_id: &str,
    ) -> Self {
        let connected = connection.map(|c| c.connected).unwrap_or(false);
        let status = classify_device(device.paused, connected, &device.device_id, self_id);
        let name = if status == DeviceStatus::Myself {
            format!("{SELF_MARKER}{}", device.name)
        } else {
            device.name.clone()
        };
        Self {
            name,
            status,
            completion: completion.completion,
            download_bytes: connection.map(|c| c.in_bytes_total).unwrap_or(0),
            upload_bytes: connection.map(|c| c.out_bytes_total).unwrap_or(0),
            need_bytes: completion.need_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FolderType;

    fn folder(label: &str, paused: bool, folder_type: FolderType) -> FolderEntry {
        serde_json::from_value(serde_json::json!({
            "id": format!("{label}-id"),
            "label": label,
            "paused": paused,
            "type": match folder_type {
                FolderType::SendOnly => "sendonly",
                FolderType::ReceiveOnly => "receiveonly",
                _ => "sendreceive",
            },
        }))
        .unwrap()
    }

    fn device(id: &str, name: &str, paused: bool) -> DeviceEntry {
        serde_json::from_value(serde_json::json!({
            "deviceID": id,
            "name": name,
            "paused": paused,
        }))
        .unwrap()
    }

    #[test]
    fn folder_row_carries_classified_status_and_byte_counts() {
        let status = DbStatus {
            state: "idle".to_string(),
            global_bytes: 1000,
            local_bytes: 900,
            need_bytes: 100,
            need_total_items: 2,
            ..DbStatus::default()
        };
        let completion = DbCompletion {
            completion: 90.0,
            need_bytes: 100,
        };
        let row = FolderRow::from_parts(
            &folder("Photos", false, FolderType::SendOnly),
            &status,
            completion,
        );
        assert_eq!(row.label, "Photos");
        assert_eq!(row.status, FolderStatus::OutOfSync);
        assert_eq!(row.completion, 90.0);
        assert_eq!(row.global_bytes, 1000);
        assert_eq!(row.local_bytes, 900);
        assert_eq!(row.need_bytes, 100);
    }

    #[test]
    fn device_without_connection_entry_is_offline_with_zero_counters() {
        let row = DeviceRow::from_parts(
            &device("REMOTE", "laptop", false),
            None,
            DbCompletion::default(),
            "SELF",
        );
        assert_eq!(row.status, DeviceStatus::Offline);
        assert_eq!(row.download_bytes, 0);
        assert_eq!(row.upload_bytes, 0);
    }

    #[test]
    fn self_device_gets_the_name_marker() {
        let connection = ConnectionState {
            connected: false,
            in_bytes_total: 0,
            out_bytes_total: 0,
        };
        let row = DeviceRow::from_parts(
            &device("SELF", "nas", false),
            Some(&connection),
            DbCompletion::default(),
            "SELF",
        );
        assert_eq!(row.status, DeviceStatus::Myself);
        assert_eq!(row.name, "*nas");
    }

    #[test]
    fn connected_device_reports_transfer_totals() {
        let connection = ConnectionState {
            connected: true,
            in_bytes_total: 1234,
            out_bytes_total: 5678,
        };
        let row = DeviceRow::from_parts(
            &device("REMOTE", "laptop", false),
            Some(&connection),
            DbCompletion {
                completion: 99.5,
                need_bytes: 42,
            },
            "SELF",
        );
        assert_eq!(row.status, DeviceStatus::Online);
        assert_eq!(row.download_bytes, 1234);
        assert_eq!(row.upload_bytes, 5678);
        assert_eq!(row.need_bytes, 42);
    }
}
