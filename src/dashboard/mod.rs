mod model;

pub use model::{Dashboard, DeviceRow, FolderRow, HostRow};

use tracing::debug;

use crate::api::{ApiClient, CompletionQuery};
use crate::error::Error;

/// Join folder list, per-folder status and completion, device list,
/// connection map and self identity into one dashboard snapshot.
///
/// Calls are issued strictly one at a time; the connection map is fetched
/// once rather than per device. Row order follows the daemon's config
/// listing. Any fetch failure aborts the whole build.
pub async fn build(client: &ApiClient) -> Result<Dashboard, Error> {
    let config = client.config().await?;
    let status = client.system_status().await?;
    let version = client.system_version().await?;

    // The daemon always lists itself as a device; a missing entry means the
    // remote is inconsistent and nothing we render would be trustworthy.
    let self_device = config
        .devices
        .iter()
        .find(|device| device.device_id == status.my_id)
        .ok_or_else(|| Error::SelfNotFound(status.my_id.clone()))?;

    let host = HostRow {
        name: self_device.name.clone(),
        device_id: status.my_id.clone(),
        version: version.version,
        uptime_seconds: status.uptime,
    };

    let mut folders = Vec::with_capacity(config.folders.len());
    for folder in &config.folders {
        debug!(folder = %folder.id, "fetching folder snapshot");
        let db_status = client.folder_status(&folder.id).await?;
        let completion = client
            .completion(&CompletionQuery {
                folder: Some(&folder.id),
                ..CompletionQuery::default()
            })
            .await?;
        folders.push(FolderRow::from_parts(folder, &db_status, completion));
    }

    let connections = client.connections().await?;
    let mut devices = Vec::with_capacity(config.devices.len());
    for device in &config.devices {
        debug!(device = %device.device_id, "fetching device completion");
        let completion = client
            .completion(&CompletionQuery {
                device: Some(&device.device_id),
                ..CompletionQuery::default()
            })
            .await?;
        let connection = connections.connections.get(&device.device_id);
        devices.push(DeviceRow::from_parts(
            device,
            connection,
            completion,
            &status.my_id,
        ));
    }

    Ok(Dashboard {
        host,
        folders,
        devices,
    })
}
