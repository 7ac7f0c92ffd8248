use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::EffectiveConfig;
use crate::error::Error;

use super::types::{
    CompletionQuery, ConnectionsResponse, DaemonConfig, DbCompletion, DbStatus, EventsQuery,
    FolderErrors, FolderQuery, SystemErrors, SystemStatus, SystemVersion,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(8);

/// One authenticated HTTP session against the daemon's `/rest` API.
/// Credentials are fixed at construction; nothing here is process-global.
pub struct ApiClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &EffectiveConfig, ignore_certs: bool) -> Result<Self, Error> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(ignore_certs)
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.target.trim_end_matches('/').to_string(),
        })
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/rest/{}", self.base_url, path.trim_start_matches('/'));
        debug!(%url, "daemon request");
        self.http
            .request(method, url)
            .header("X-API-Key", &self.api_key)
    }

    fn expect_success(path: &str, response: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(Error::Remote(format!("{path} returned {status}")))
        }
    }

    async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;
        let response = Self::expect_success(path, response)?;
        Ok(response.json::<T>().await?)
    }

    async fn get_text<Q>(&self, path: &str, query: &Q) -> Result<String, Error>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::GET, path).query(query).send().await?;
        let response = Self::expect_success(path, response)?;
        Ok(response.text().await?)
    }

    async fn post<Q>(&self, path: &str, query: &Q) -> Result<(), Error>
    where
        Q: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, path).query(query).send().await?;
        Self::expect_success(path, response)?;
        Ok(())
    }

    // --- read endpoints ---

    pub async fn config(&self) -> Result<DaemonConfig, Error> {
        self.get_json("config", &()).await
    }

    pub async fn folder_status(&self, folder_id: &str) -> Result<DbStatus, Error> {
        self.get_json("db/status", &FolderQuery { folder: folder_id })
            .await
    }

    /// Completion for one folder or one device. The daemon answers 404 when
    /// it has nothing to report for the query; that is a zero-need result,
    /// not a failure.
    pub async fn completion(&self, query: &CompletionQuery<'_>) -> Result<DbCompletion, Error> {
        let path = "db/completion";
        let response = self.request(Method::GET, path).query(query).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(DbCompletion::default());
        }
        let response = Self::expect_success(path, response)?;
        Ok(response.json::<DbCompletion>().await?)
    }

    pub async fn connections(&self) -> Result<ConnectionsResponse, Error> {
        self.get_json("system/connections", &()).await
    }

    pub async fn system_status(&self) -> Result<SystemStatus, Error> {
        self.get_json("system/status", &()).await
    }

    pub async fn system_version(&self) -> Result<SystemVersion, Error> {
        self.get_json("system/version", &()).await
    }

    pub async fn system_errors(&self) -> Result<SystemErrors, Error> {
        self.get_json("system/error", &()).await
    }

    pub async fn folder_errors(&self, folder_id: &str) -> Result<FolderErrors, Error> {
        self.get_json("folder/errors", &FolderQuery { folder: folder_id })
            .await
    }

    pub async fn log_text(&self) -> Result<String, Error> {
        self.get_text("system/log.txt", &()).await
    }

    /// Raw events JSON, passed through untouched for scripting.
    pub async fn events(&self, query: &EventsQuery<'_>) -> Result<String, Error> {
        self.get_text("events", query).await
    }

    // --- control endpoints ---

    pub async fn set_folder_paused(&self, folder_id: &str, paused: bool) -> Result<(), Error> {
        let path = format!("config/folders/{folder_id}");
        let response = self
            .request(Method::PATCH, &path)
            .json(&serde_json::json!({ "paused": paused }))
            .send()
            .await?;
        Self::expect_success(&path, response)?;
        Ok(())
    }

    /// Rescan one folder, or every folder when no id is given.
    pub async fn rescan(&self, folder_id: Option<&str>) -> Result<(), Error> {
        match folder_id {
            Some(id) => self.post("db/scan", &FolderQuery { folder: id }).await,
            None => self.post("db/scan", &()).await,
        }
    }

    pub async fn override_changes(&self, folder_id: &str) -> Result<(), Error> {
        self.post("db/override", &FolderQuery { folder: folder_id })
            .await
    }

    pub async fn revert_changes(&self, folder_id: &str) -> Result<(), Error> {
        self.post("db/revert", &FolderQuery { folder: folder_id })
            .await
    }

    pub async fn restart(&self) -> Result<(), Error> {
        self.post("system/restart", &()).await
    }

    pub async fn shutdown(&self) -> Result<(), Error> {
        self.post("system/shutdown", &()).await
    }

    pub async fn reset_db(&self) -> Result<(), Error> {
        self.post("system/reset", &()).await
    }

    pub async fn clear_errors(&self) -> Result<(), Error> {
        self.post("system/error/clear", &()).await
    }

    pub async fn post_error(&self, message: &str) -> Result<(), Error> {
        let path = "system/error";
        let response = self
            .request(Method::POST, path)
            .body(message.to_string())
            .send()
            .await?;
        Self::expect_success(path, response)?;
        Ok(())
    }
}
