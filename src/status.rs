use std::fmt;

use serde::Serialize;

use crate::api::FolderType;

/// Display status of a folder. The first matching condition wins, so an
/// operator always sees the most actionable one: an administrative pause
/// beats errors, errors beat direction-specific anomalies, and only a
/// folder with none of those shows the daemon's raw state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FolderStatus {
    Paused,
    Errors,
    OutOfSync,
    LocalAdditions,
    /// Daemon-reported state string, passed through verbatim.
    #[serde(untagged)]
    Reported(String),
}

impl fmt::Display for FolderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FolderStatus::Paused => f.write_str("Paused"),
            FolderStatus::Errors => f.write_str("Errors"),
            FolderStatus::OutOfSync => f.write_str("Out of Sync"),
            FolderStatus::LocalAdditions => f.write_str("Local Additions"),
            FolderStatus::Reported(state) => f.write_str(state),
        }
    }
}

pub fn classify_folder(
    paused: bool,
    folder_type: FolderType,
    state: &str,
    error_count: u64,
    receive_only_changed_items: u64,
    need_total_items: u64,
) -> FolderStatus {
    if paused {
        return FolderStatus::Paused;
    }
    if error_count > 0 {
        return FolderStatus::Errors;
    }
    if folder_type == FolderType::SendOnly && need_total_items > 0 {
        return FolderStatus::OutOfSync;
    }
    if folder_type == FolderType::ReceiveOnly && receive_only_changed_items > 0 {
        return FolderStatus::LocalAdditions;
    }
    FolderStatus::Reported(state.to_string())
}

/// Display status of a device. Identity beats pause beats connectivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceStatus {
    Myself,
    Paused,
    Online,
    Offline,
}

impl fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeviceStatus::Myself => f.write_str("Myself"),
            DeviceStatus::Paused => f.write_str("Paused"),
            DeviceStatus::Online => f.write_str("Online"),
            DeviceStatus::Offline => f.write_str("Offline"),
        }
    }
}

pub fn classify_device(paused: bool, connected: bool, device_id: &str, self_id: &str) -> DeviceStatus {
    if device_id == self_id {
        return DeviceStatus::Myself;
    }
    if paused {
        return DeviceStatus::Paused;
    }
    if connected {
        return DeviceStatus::Online;
    }
    DeviceStatus::Offline
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pause_beats_every_other_folder_condition() {
        let status = classify_folder(true, FolderType::SendOnly, "idle", 5, 2, 10);
        assert_eq!(status, FolderStatus::Paused);
    }

    #[test]
    fn errors_beat_direction_specific_conditions() {
        let status = classify_folder(false, FolderType::SendOnly, "idle", 3, 0, 10);
        assert_eq!(status, FolderStatus::Errors);
    }

    #[test]
    fn send_only_folder_with_pending_items_is_out_of_sync() {
        let status = classify_folder(false, FolderType::SendOnly, "idle", 0, 0, 3);
        assert_eq!(status, FolderStatus::OutOfSync);
    }

    #[test]
    fn receive_only_folder_with_local_changes_shows_local_additions() {
        let status = classify_folder(false, FolderType::ReceiveOnly, "idle", 0, 4, 0);
        assert_eq!(status, FolderStatus::LocalAdditions);
    }

    #[test]
    fn pending_items_do_not_matter_for_bidirectional_folders() {
        let status = classify_folder(false, FolderType::SendReceive, "syncing", 0, 0, 3);
        assert_eq!(status, FolderStatus::Reported("syncing".to_string()));
    }

    #[test]
    fn quiet_folder_passes_daemon_state_through() {
        let status = classify_folder(false, FolderType::ReceiveOnly, "scanning", 0, 0, 0);
        assert_eq!(status, FolderStatus::Reported("scanning".to_string()));
    }

    #[test]
    fn identity_beats_pause_and_connectivity() {
        let status = classify_device(true, true, "X", "X");
        assert_eq!(status, DeviceStatus::Myself);
    }

    #[test]
    fn paused_device_beats_connected() {
        let status = classify_device(true, true, "Y", "X");
        assert_eq!(status, DeviceStatus::Paused);
    }

    #[test]
    fn connected_device_is_online() {
        let status = classify_device(false, true, "Y", "X");
        assert_eq!(status, DeviceStatus::Online);
    }

    #[test]
    fn unknown_device_defaults_to_offline() {
        let status = classify_device(false, false, "Y", "X");
        assert_eq!(status, DeviceStatus::Offline);
    }
}
