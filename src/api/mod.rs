mod client;
mod types;

pub use client::ApiClient;
pub use types::{
    CompletionQuery, ConnectionState, DbCompletion, DbStatus, DeviceEntry, EventsQuery,
    FolderEntry, FolderType,
};
