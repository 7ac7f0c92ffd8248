use crate::api::{ApiClient, EventsQuery, FolderEntry};
use crate::cli::Command;
use crate::dashboard;
use crate::error::Error;
use crate::render::{self, Table};

const EVENTS_LIMIT: u32 = 200;

/// Map one CLI verb to one remote call or one dashboard build.
pub async fn dispatch(command: Option<Command>, client: &ApiClient) -> Result<(), Error> {
    match command {
        None => {
            let dash = dashboard::build(client).await?;
            print!("{}", render::dashboard(&dash));
        }
        Some(Command::JsonDump) => {
            let dash = dashboard::build(client).await?;
            println!("{}", serde_json::to_string_pretty(&dash)?);
        }
        Some(Command::Log) => {
            print!("{}", client.log_text().await?);
        }
        Some(Command::Restart) => client.restart().await?,
        Some(Command::Shutdown) => client.shutdown().await?,
        Some(Command::ResetDb) => client.reset_db().await?,
        Some(Command::Errors) => {
            let errors = client.system_errors().await?;
            let mut table = Table::new(&["When", "Message"]);
            for entry in &errors.errors {
                table.row(vec![
                    render::timestamp(&entry.when),
                    entry.message.trim_end().to_string(),
                ]);
            }
            print!("{}", table.render());
        }
        Some(Command::ClearErrors) => client.clear_errors().await?,
        Some(Command::PostError { message }) => client.post_error(&message).await?,
        Some(Command::FolderErrors { label }) => {
            let folder_id = folder_id_by_label(client, &label).await?;
            let errors = client.folder_errors(&folder_id).await?;
            let mut table = Table::new(&["Path", "Error"]);
            for entry in &errors.errors {
                table.row(vec![entry.path.clone(), entry.error.clone()]);
            }
            print!("{}", table.render());
        }
        Some(Command::FolderPause { label }) => {
            let folder_id = folder_id_by_label(client, &label).await?;
            client.set_folder_paused(&folder_id, true).await?;
        }
        Some(Command::FolderResume { label }) => {
            let folder_id = folder_id_by_label(client, &label).await?;
            client.set_folder_paused(&folder_id, false).await?;
        }
        Some(Command::Id) => {
            let status = client.system_status().await?;
            println!("{}", status.my_id);
        }
        Some(Command::Rescan { label }) => {
            // "all" goes straight to the all-folders scan; no label lookup.
            if rescan_all(&label) {
                client.rescan(None).await?;
            } else {
                let folder_id = folder_id_by_label(client, &label).await?;
                client.rescan(Some(&folder_id)).await?;
            }
        }
        Some(Command::Override { label }) => {
            let folder_id = folder_id_by_label(client, &label).await?;
            client.override_changes(&folder_id).await?;
        }
        Some(Command::Revert { label }) => {
            let folder_id = folder_id_by_label(client, &label).await?;
            client.revert_changes(&folder_id).await?;
        }
        Some(Command::Events { types }) => {
            let query = EventsQuery {
                events: types.as_deref(),
                since: 0,
                limit: EVENTS_LIMIT,
            };
            println!("{}", client.events(&query).await?);
        }
    }

    Ok(())
}

fn rescan_all(label: &str) -> bool {
    label == "all"
}

async fn folder_id_by_label(client: &ApiClient, label: &str) -> Result<String, Error> {
    let config = client.config().await?;
    resolve_label(&config.folders, label)
}

/// Resolve a human label to the folder id. Labels are not required to be
/// unique by the daemon; when several folders share one, the last match in
/// listing order wins. Unlabeled folders are addressable by their id.
fn resolve_label(folders: &[FolderEntry], label: &str) -> Result<String, Error> {
    folders
        .iter()
        .filter(|folder| folder.display_label() == label)
        .next_back()
        .map(|folder| folder.id.clone())
        .ok_or_else(|| Error::FolderNotFound(label.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, label: &str) -> FolderEntry {
        serde_json::from_value(serde_json::json!({ "id": id, "label": label })).unwrap()
    }

    #[test]
    fn label_resolves_to_folder_id() {
        let folders = vec![folder("f1", "Photos"), folder("f2", "Music")];
        assert_eq!(resolve_label(&folders, "Music").unwrap(), "f2");
    }

    #[test]
    fn duplicate_labels_resolve_to_the_last_match() {
        // Latent daemon-side ambiguity: labels are not unique. The last
        // listed folder wins, matching the behavior operators already rely on.
        let folders = vec![folder("f1", "Photos"), folder("f2", "Photos")];
        assert_eq!(resolve_label(&folders, "Photos").unwrap(), "f2");
    }

    #[test]
    fn unknown_label_names_the_request_in_the_error() {
        let folders = vec![folder("f1", "Photos")];
        let err = resolve_label(&folders, "Movies").unwrap_err();
        assert!(matches!(err, Error::FolderNotFound(ref label) if label == "Movies"));
    }

    #[test]
    fn unlabeled_folders_are_addressable_by_id() {
        let folders = vec![folder("f1", "")];
        assert_eq!(resolve_label(&folders, "f1").unwrap(), "f1");
    }

    #[test]
    fn rescan_all_bypasses_label_resolution() {
        assert!(rescan_all("all"));
        assert!(!rescan_all("Photos"));
    }
}
