//! HTTP client for the exaroton API.
//!
//! This module provides the [`Exaroton`] struct for making requests against
//! the exaroton REST API and mapping the responses onto the objects in
//! [`crate::types`].
//!
//! Every endpoint method performs exactly one request (log sharing performs
//! two, see [`Requester::share_server_logs`]) and returns a fresh snapshot
//! or an [`Error`]. Nothing is retried, cached or kept in sync; ordering
//! between calls is entirely up to the caller.

use log::{debug, info};
use mockall::automock;
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::envelope::Envelope;
use crate::error::{Error, Result};
use crate::mclogs::Mclogs;
use crate::types::{Account, FileInfo, LogShare, Server};

/// Default exaroton API host.
const DEFAULT_HOST: &str = "https://api.exaroton.com/v1";

/// HTTP client for the exaroton API.
///
/// Holds the bearer token, the API host and a reusable HTTP client. The
/// client itself is stateless across calls: it may be shared freely and
/// reused sequentially or concurrently, and every method returns a value
/// built from a single response.
///
/// # Examples
///
/// ```no_run
/// use exaroton::{Exaroton, Requester};
///
/// # #[tokio::main]
/// # async fn main() {
/// let client = Exaroton::new("your-api-token");
/// let servers = client.get_servers().await.unwrap();
/// for server in &servers {
///     println!("{}", server);
/// }
/// # }
/// ```
pub struct Exaroton {
    /// Bearer token from the exaroton account page
    ///
    /// Attached to every API request, never mutated and never logged.
    token: String,
    /// API host
    host: String,
    /// HTTP client
    client: Client,
    /// Paste service used by log sharing
    mclogs: Mclogs,
}

/// Trait covering the endpoint surface of the exaroton API.
///
/// This trait abstracts the HTTP operations for easier testing with mocks.
#[automock]
pub trait Requester {
    /// Fetches the authenticated account.
    async fn get_account(&self) -> Result<Account>;
    /// Fetches the list of servers on the account.
    async fn get_servers(&self) -> Result<Vec<Server>>;
    /// Fetches a single server by id.
    async fn get_server(&self, id: &str) -> Result<Server>;
    /// Starts the server.
    async fn start(&self, id: &str) -> Result<()>;
    /// Stops the server.
    async fn stop(&self, id: &str) -> Result<()>;
    /// Restarts the server.
    async fn restart(&self, id: &str) -> Result<()>;
    /// Executes a console command on a running server.
    async fn execute_command(&self, id: &str, command: &str) -> Result<()>;
    /// Fetches the current server log as decoded text.
    async fn get_server_logs(&self, id: &str) -> Result<String>;
    /// Fetches the current server log and uploads it to the paste service.
    async fn share_server_logs(&self, id: &str) -> Result<LogShare>;
    /// Fetches the RAM currently assigned to the server, in gigabytes.
    async fn get_server_ram(&self, id: &str) -> Result<u32>;
    /// Assigns a new amount of RAM to the server, in gigabytes.
    async fn set_server_ram(&self, id: &str, ram: u32) -> Result<u32>;
    /// Fetches the names of the available player lists.
    async fn get_player_lists(&self, id: &str) -> Result<Vec<String>>;
    /// Fetches the entries of a player list.
    async fn get_player_list(&self, id: &str, list: &str) -> Result<Vec<String>>;
    /// Adds usernames to a player list, returning the updated entries.
    async fn add_player_to_list(
        &self,
        id: &str,
        list: &str,
        usernames: &[String],
    ) -> Result<Vec<String>>;
    /// Removes usernames from a player list, returning the updated entries.
    async fn remove_player_from_list(
        &self,
        id: &str,
        list: &str,
        usernames: &[String],
    ) -> Result<Vec<String>>;
    /// Fetches metadata of a server file or directory.
    async fn get_file_info(&self, id: &str, path: &str) -> Result<FileInfo>;
    /// Reads the raw content of a server file.
    async fn read_file(&self, id: &str, path: &str) -> Result<String>;
    /// Writes content to a server file, creating it if needed.
    async fn write_file(&self, id: &str, path: &str, content: &str) -> Result<()>;
    /// Deletes a server file.
    async fn delete_file(&self, id: &str, path: &str) -> Result<()>;
}

/// Payload of `servers/{id}/logs`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct LogContent {
    content: String,
}

/// Payload of `servers/{id}/options/ram`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RamData {
    ram: u32,
}

impl Exaroton {
    /// Create a new [Exaroton] client against the public API host.
    ///
    /// # Arguments
    ///
    /// * `token` - The API token from the exaroton account page.
    pub fn new(token: &str) -> Self {
        Self::with_host(token, DEFAULT_HOST)
    }

    /// Create a new [Exaroton] client against a custom host.
    ///
    /// # Arguments
    ///
    /// * `token` - The API token from the exaroton account page.
    /// * `host` - The API host, without a trailing slash.
    pub fn with_host(token: &str, host: &str) -> Self {
        Exaroton {
            token: token.to_string(),
            host: host.to_string(),
            client: Client::new(),
            mclogs: Mclogs::new(),
        }
    }

    /// Replace the paste service used by [`Requester::share_server_logs`].
    pub fn with_paste_service(mut self, mclogs: Mclogs) -> Self {
        self.mclogs = mclogs;
        self
    }

    /// Check a required argument for presence before building a request.
    fn require(endpoint: &str, name: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::validation(
                endpoint,
                format!("{name} must not be empty"),
            ));
        }

        Ok(())
    }

    /// Build a request against `{host}/{path}`.
    fn endpoint_request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", &self.host, path);
        debug!("request {} {}", &method, &url);

        self.client.request(method, url)
    }

    /// Attach the token, send the request and collect status and body.
    async fn send(&self, request: RequestBuilder, path: &str) -> Result<(StatusCode, String)> {
        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| Error::http(path, e))?;
        let status = response.status();
        let payload = response.text().await.map_err(|e| Error::http(path, e))?;

        debug!("response from {} -> HTTP {}", path, status);

        Ok((status, payload))
    }

    /// Decode a response body as an [Envelope].
    ///
    /// A body that does not decode is a transport failure: on a non-2xx
    /// status the status wins the error message, otherwise the JSON error
    /// does. An envelope that does decode is handled by its own unwrap
    /// rules, whatever the status code was.
    fn decode_envelope<T: DeserializeOwned>(
        path: &str,
        status: StatusCode,
        payload: &str,
    ) -> Result<Envelope<T>> {
        match serde_json::from_str(payload) {
            Ok(envelope) => Ok(envelope),
            Err(_) if !status.is_success() => Err(Error::status(path, status)),
            Err(e) => Err(Error::malformed(path, e)),
        }
    }

    /// Perform a request and unwrap the envelope's data payload.
    async fn request_data<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T> {
        let mut request = self.endpoint_request(method, path);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let (status, payload) = self.send(request, path).await?;
        Self::decode_envelope(path, status, &payload)?.into_data(path)
    }

    /// Perform a request and check only the envelope's success flag.
    async fn request_unit(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<()> {
        let mut request = self.endpoint_request(method, path);
        if let Some(body) = body {
            request = request.json(&body);
        }

        let (status, payload) = self.send(request, path).await?;
        Self::decode_envelope::<serde_json::Value>(path, status, &payload)?.into_unit(path)
    }
}

impl Requester for Exaroton {
    /// Request `account` to get the authenticated account.
    ///
    /// The data payload looks like:
    /// ```json
    /// { "name": "Example", "email": "example@example.org", "verified": true, "credits": 420.69 }
    /// ```
    async fn get_account(&self) -> Result<Account> {
        info!("request account info");

        self.request_data(Method::GET, "account", None).await
    }

    /// Request `servers` to get the list of servers on the account.
    ///
    /// The data payload is a JSON array of server objects, each in the same
    /// shape as [`Self::get_server`] returns.
    async fn get_servers(&self) -> Result<Vec<Server>> {
        info!("request server list");

        self.request_data(Method::GET, "servers", None).await
    }

    /// Request `servers/{id}` to get a single server.
    ///
    /// The data payload looks like:
    /// ```json
    /// {
    ///   "id": "abc123",
    ///   "name": "Test",
    ///   "status": 1,
    ///   "address": "test.exaroton.me",
    ///   "players": { "max": 20, "count": 0, "list": [] },
    ///   "software": { "id": "soft1", "name": "Vanilla", "version": "1.21" }
    /// }
    /// ```
    async fn get_server(&self, id: &str) -> Result<Server> {
        Self::require("get_server", "server id", id)?;
        info!("request server {}", id);

        self.request_data(Method::GET, &format!("servers/{id}"), None)
            .await
    }

    /// Request `servers/{id}/start` to start the server.
    async fn start(&self, id: &str) -> Result<()> {
        Self::require("start", "server id", id)?;
        info!("start server {}", id);

        self.request_unit(Method::GET, &format!("servers/{id}/start"), None)
            .await
    }

    /// Request `servers/{id}/stop` to stop the server.
    async fn stop(&self, id: &str) -> Result<()> {
        Self::require("stop", "server id", id)?;
        info!("stop server {}", id);

        self.request_unit(Method::GET, &format!("servers/{id}/stop"), None)
            .await
    }

    /// Request `servers/{id}/restart` to restart the server.
    async fn restart(&self, id: &str) -> Result<()> {
        Self::require("restart", "server id", id)?;
        info!("restart server {}", id);

        self.request_unit(Method::GET, &format!("servers/{id}/restart"), None)
            .await
    }

    /// Request `servers/{id}/command` to execute a console command.
    ///
    /// # Arguments
    ///
    /// * `id` - The id of the server.
    /// * `command` - The command line, without a leading slash (`say Hello`).
    async fn execute_command(&self, id: &str, command: &str) -> Result<()> {
        Self::require("execute_command", "server id", id)?;
        Self::require("execute_command", "command", command)?;
        info!("execute command on server {}", id);

        self.request_unit(
            Method::POST,
            &format!("servers/{id}/command"),
            Some(json!({ "command": command })),
        )
        .await
    }

    /// Request `servers/{id}/logs` to get the current log file as text.
    async fn get_server_logs(&self, id: &str) -> Result<String> {
        Self::require("get_server_logs", "server id", id)?;
        info!("request logs of server {}", id);

        let path = format!("servers/{id}/logs");
        let logs: LogContent = self.request_data(Method::GET, &path, None).await?;

        Ok(logs.content)
    }

    /// Fetch the current server log and upload it to the paste service.
    ///
    /// This is a convenience operation performing two calls: one to
    /// [`Self::get_server_logs`] and one upload to mclo.gs. Either failure
    /// is returned as-is.
    async fn share_server_logs(&self, id: &str) -> Result<LogShare> {
        info!("share logs of server {}", id);

        let logs = self.get_server_logs(id).await?;
        self.mclogs.upload(&logs).await
    }

    /// Request `servers/{id}/options/ram` to get the assigned RAM.
    async fn get_server_ram(&self, id: &str) -> Result<u32> {
        Self::require("get_server_ram", "server id", id)?;
        info!("request ram of server {}", id);

        let path = format!("servers/{id}/options/ram");
        let data: RamData = self.request_data(Method::GET, &path, None).await?;

        Ok(data.ram)
    }

    /// Request `servers/{id}/options/ram` to assign a new amount of RAM.
    ///
    /// # Arguments
    ///
    /// * `id` - The id of the server.
    /// * `ram` - RAM in gigabytes, at least 1.
    async fn set_server_ram(&self, id: &str, ram: u32) -> Result<u32> {
        Self::require("set_server_ram", "server id", id)?;
        if ram == 0 {
            return Err(Error::validation(
                "set_server_ram",
                "ram must be at least 1 gigabyte",
            ));
        }
        info!("set ram of server {} to {} GB", id, ram);

        let path = format!("servers/{id}/options/ram");
        let data: RamData = self
            .request_data(Method::POST, &path, Some(json!({ "ram": ram })))
            .await?;

        Ok(data.ram)
    }

    /// Request `servers/{id}/playerlists` to get the available list names.
    async fn get_player_lists(&self, id: &str) -> Result<Vec<String>> {
        Self::require("get_player_lists", "server id", id)?;
        info!("request player lists of server {}", id);

        self.request_data(Method::GET, &format!("servers/{id}/playerlists"), None)
            .await
    }

    /// Request `servers/{id}/playerlists/{list}` to get the entries of one
    /// player list (`whitelist`, `ops`, ...).
    async fn get_player_list(&self, id: &str, list: &str) -> Result<Vec<String>> {
        Self::require("get_player_list", "server id", id)?;
        Self::require("get_player_list", "player list name", list)?;
        info!("request player list {} of server {}", list, id);

        self.request_data(
            Method::GET,
            &format!("servers/{id}/playerlists/{list}"),
            None,
        )
        .await
    }

    /// Request `servers/{id}/playerlists/{list}` to add usernames.
    ///
    /// Returns the updated entries of the list.
    async fn add_player_to_list(
        &self,
        id: &str,
        list: &str,
        usernames: &[String],
    ) -> Result<Vec<String>> {
        Self::require("add_player_to_list", "server id", id)?;
        Self::require("add_player_to_list", "player list name", list)?;
        if usernames.is_empty() {
            return Err(Error::validation(
                "add_player_to_list",
                "usernames must not be empty",
            ));
        }
        info!("add {} player(s) to list {} of server {}", usernames.len(), list, id);

        self.request_data(
            Method::PUT,
            &format!("servers/{id}/playerlists/{list}"),
            Some(json!({ "entries": usernames })),
        )
        .await
    }

    /// Request `servers/{id}/playerlists/{list}` to remove usernames.
    ///
    /// Returns the updated entries of the list.
    async fn remove_player_from_list(
        &self,
        id: &str,
        list: &str,
        usernames: &[String],
    ) -> Result<Vec<String>> {
        Self::require("remove_player_from_list", "server id", id)?;
        Self::require("remove_player_from_list", "player list name", list)?;
        if usernames.is_empty() {
            return Err(Error::validation(
                "remove_player_from_list",
                "usernames must not be empty",
            ));
        }
        info!(
            "remove {} player(s) from list {} of server {}",
            usernames.len(),
            list,
            id
        );

        self.request_data(
            Method::DELETE,
            &format!("servers/{id}/playerlists/{list}"),
            Some(json!({ "entries": usernames })),
        )
        .await
    }

    /// Request `servers/{id}/files/info/{path}` to get file metadata.
    ///
    /// For directories the returned object carries a `children` listing.
    async fn get_file_info(&self, id: &str, path: &str) -> Result<FileInfo> {
        Self::require("get_file_info", "server id", id)?;
        Self::require("get_file_info", "file path", path)?;
        info!("request file info {} of server {}", path, id);

        self.request_data(Method::GET, &format!("servers/{id}/files/info/{path}"), None)
            .await
    }

    /// Request `servers/{id}/files/data/{path}` to read a file.
    ///
    /// Successful reads answer with the raw file body instead of the JSON
    /// envelope; error responses use the envelope as usual.
    async fn read_file(&self, id: &str, path: &str) -> Result<String> {
        Self::require("read_file", "server id", id)?;
        Self::require("read_file", "file path", path)?;
        info!("read file {} of server {}", path, id);

        let endpoint = format!("servers/{id}/files/data/{path}");
        let request = self.endpoint_request(Method::GET, &endpoint);
        let (status, payload) = self.send(request, &endpoint).await?;

        if status.is_success() {
            return Ok(payload);
        }

        match serde_json::from_str::<Envelope<serde_json::Value>>(&payload) {
            Ok(envelope) => {
                envelope.into_unit(&endpoint)?;
                Err(Error::status(&endpoint, status))
            }
            Err(_) => Err(Error::status(&endpoint, status)),
        }
    }

    /// Request `servers/{id}/files/data/{path}` to write a file.
    ///
    /// The content is sent as the raw request body; the response is a
    /// regular envelope.
    async fn write_file(&self, id: &str, path: &str, content: &str) -> Result<()> {
        Self::require("write_file", "server id", id)?;
        Self::require("write_file", "file path", path)?;
        info!("write file {} of server {}", path, id);

        let endpoint = format!("servers/{id}/files/data/{path}");
        let request = self
            .endpoint_request(Method::PUT, &endpoint)
            .body(content.to_owned());
        let (status, payload) = self.send(request, &endpoint).await?;

        Self::decode_envelope::<serde_json::Value>(&endpoint, status, &payload)?
            .into_unit(&endpoint)
    }

    /// Request `servers/{id}/files/data/{path}` to delete a file.
    async fn delete_file(&self, id: &str, path: &str) -> Result<()> {
        Self::require("delete_file", "server id", id)?;
        Self::require("delete_file", "file path", path)?;
        info!("delete file {} of server {}", path, id);

        self.request_unit(Method::DELETE, &format!("servers/{id}/files/data/{path}"), None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ServerStatus;

    #[tokio::test]
    async fn test_get_account() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "success": true,
            "data": {
                "name": "Example",
                "email": "example@example.org",
                "verified": true,
                "credits": 420.69
            }
        }"#;

        server
            .mock("GET", "/account")
            .match_header("authorization", "Bearer secret-token")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let account = client.get_account().await.unwrap();

        assert_eq!(account.name, "Example");
        assert_eq!(account.email, "example@example.org");
        assert!(account.verified);
        assert_eq!(account.credits, 420.69);
    }

    #[tokio::test]
    async fn test_get_servers() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "success": true,
            "data": [
                {"id": "abc123", "name": "First", "status": 1},
                {"id": "def456", "name": "Second", "status": 0}
            ]
        }"#;

        server
            .mock("GET", "/servers")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let servers = client.get_servers().await.unwrap();

        assert_eq!(servers.len(), 2);
        assert_eq!(servers[0].id, "abc123");
        assert_eq!(servers[0].status, ServerStatus::Online);
        assert_eq!(servers[1].id, "def456");
        assert_eq!(servers[1].status, ServerStatus::Offline);
    }

    #[tokio::test]
    async fn test_get_server() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"success": true, "data": {"id": "abc123", "name": "Test", "status": 1}}"#;

        server
            .mock("GET", "/servers/abc123")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let result = client.get_server("abc123").await.unwrap();

        assert_eq!(result.id, "abc123");
        assert_eq!(result.name, "Test");
        assert_eq!(result.status, ServerStatus::Online);
        assert_eq!(u8::from(result.status), 1);
    }

    #[tokio::test]
    async fn test_get_server_not_found() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"success": false, "error": "NOT_FOUND"}"#;

        server
            .mock("GET", "/servers/unknown")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let error = client.get_server("unknown").await.unwrap_err();

        assert!(matches!(error, Error::Api { message, .. } if message == "NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_malformed_response_is_transport_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/servers/abc123")
            .with_status(200)
            .with_body("<html>definitely not json</html>")
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let error = client.get_server("abc123").await.unwrap_err();

        assert!(matches!(error, Error::Transport { .. }));
    }

    #[tokio::test]
    async fn test_non_2xx_without_envelope_is_transport_error() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/servers/abc123")
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let error = client.get_server("abc123").await.unwrap_err();

        assert!(matches!(error, Error::Transport { .. }));
    }

    #[tokio::test]
    async fn test_start_and_stop_issue_one_request_each() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"success": true, "data": null}"#;

        let start_mock = server
            .mock("GET", "/servers/abc123/start")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await;
        let stop_mock = server
            .mock("GET", "/servers/abc123/stop")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        client.start("abc123").await.unwrap();
        client.stop("abc123").await.unwrap();

        start_mock.assert_async().await;
        stop_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_failed_start_is_not_retried() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/servers/abc123/start")
            .with_status(503)
            .with_body("Service Unavailable")
            .expect(1)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let error = client.start("abc123").await.unwrap_err();

        assert!(matches!(error, Error::Transport { .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_validation_error_makes_no_request() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let error = client.get_server("").await.unwrap_err();

        assert!(matches!(error, Error::Validation { .. }));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_execute_command() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"success": true, "data": null}"#;

        let mock = server
            .mock("POST", "/servers/abc123/command")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"command": "say Hello"}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        client.execute_command("abc123", "say Hello").await.unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_server_logs() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{"success": true, "data": {"content": "[12:00:00] Done"}}"#;

        server
            .mock("GET", "/servers/abc123/logs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let logs = client.get_server_logs("abc123").await.unwrap();

        assert_eq!(logs, "[12:00:00] Done");
    }

    #[tokio::test]
    async fn test_share_server_logs_performs_two_calls() {
        let mut api = mockito::Server::new_async().await;
        let mut paste = mockito::Server::new_async().await;

        let logs_mock = api
            .mock("GET", "/servers/abc123/logs")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": {"content": "[12:00:00] Done"}}"#)
            .expect(1)
            .create_async()
            .await;
        let paste_mock = paste
            .mock("POST", "/1/log")
            .match_body(mockito::Matcher::UrlEncoded(
                "content".to_owned(),
                "[12:00:00] Done".to_owned(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"success": true, "id": "8TB86zl", "url": "https://mclo.gs/8TB86zl", "raw": "https://api.mclo.gs/1/raw/8TB86zl"}"#,
            )
            .expect(1)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &api.url())
            .with_paste_service(Mclogs::with_host(&paste.url()));
        let share = client.share_server_logs("abc123").await.unwrap();

        assert_eq!(share.id, "8TB86zl");
        assert_eq!(share.url, "https://mclo.gs/8TB86zl");
        logs_mock.assert_async().await;
        paste_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_and_set_server_ram() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/servers/abc123/options/ram")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": {"ram": 4}}"#)
            .create_async()
            .await;
        let set_mock = server
            .mock("POST", "/servers/abc123/options/ram")
            .match_body(mockito::Matcher::Json(serde_json::json!({"ram": 8})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": {"ram": 8}}"#)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        assert_eq!(client.get_server_ram("abc123").await.unwrap(), 4);
        assert_eq!(client.set_server_ram("abc123", 8).await.unwrap(), 8);
        set_mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_set_server_ram_rejects_zero() {
        let client = Exaroton::with_host("secret-token", "http://localhost:9");
        let error = client.set_server_ram("abc123", 0).await.unwrap_err();

        assert!(matches!(error, Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_player_lists() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/servers/abc123/playerlists")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": ["whitelist", "ops", "banned-players"]}"#)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let lists = client.get_player_lists("abc123").await.unwrap();

        assert_eq!(lists, vec!["whitelist", "ops", "banned-players"]);
    }

    #[tokio::test]
    async fn test_add_player_to_list() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("PUT", "/servers/abc123/playerlists/whitelist")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"entries": ["Steve", "Alex"]}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": ["Steve", "Alex"]}"#)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let entries = client
            .add_player_to_list(
                "abc123",
                "whitelist",
                &["Steve".to_owned(), "Alex".to_owned()],
            )
            .await
            .unwrap();

        assert_eq!(entries, vec!["Steve", "Alex"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_remove_player_from_list() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("DELETE", "/servers/abc123/playerlists/whitelist")
            .match_body(mockito::Matcher::Json(
                serde_json::json!({"entries": ["Steve"]}),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": ["Alex"]}"#)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let entries = client
            .remove_player_from_list("abc123", "whitelist", &["Steve".to_owned()])
            .await
            .unwrap();

        assert_eq!(entries, vec!["Alex"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_add_player_to_list_rejects_empty_usernames() {
        let client = Exaroton::with_host("secret-token", "http://localhost:9");
        let error = client
            .add_player_to_list("abc123", "whitelist", &[])
            .await
            .unwrap_err();

        assert!(matches!(error, Error::Validation { .. }));
    }

    #[tokio::test]
    async fn test_get_file_info() {
        let mut server = mockito::Server::new_async().await;
        let body = r#"{
            "success": true,
            "data": {
                "path": "server.properties",
                "name": "server.properties",
                "isTextFile": true,
                "isConfigFile": true,
                "isDirectory": false,
                "isLog": false,
                "isReadable": true,
                "isWritable": true,
                "size": 1270
            }
        }"#;

        server
            .mock("GET", "/servers/abc123/files/info/server.properties")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let info = client
            .get_file_info("abc123", "server.properties")
            .await
            .unwrap();

        assert_eq!(info.name, "server.properties");
        assert!(info.is_config_file);
        assert_eq!(info.size, 1270);
    }

    #[tokio::test]
    async fn test_read_file_returns_raw_body() {
        let mut server = mockito::Server::new_async().await;

        // File data responses are not enveloped
        server
            .mock("GET", "/servers/abc123/files/data/server.properties")
            .with_status(200)
            .with_header("content-type", "application/octet-stream")
            .with_body("motd=A Minecraft Server\nmax-players=20\n")
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let content = client
            .read_file("abc123", "server.properties")
            .await
            .unwrap();

        assert_eq!(content, "motd=A Minecraft Server\nmax-players=20\n");
    }

    #[tokio::test]
    async fn test_read_file_error_envelope() {
        let mut server = mockito::Server::new_async().await;

        server
            .mock("GET", "/servers/abc123/files/data/missing.txt")
            .with_status(404)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": false, "error": "FILE_NOT_FOUND"}"#)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        let error = client.read_file("abc123", "missing.txt").await.unwrap_err();

        assert!(matches!(error, Error::Api { message, .. } if message == "FILE_NOT_FOUND"));
    }

    #[tokio::test]
    async fn test_write_file() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("PUT", "/servers/abc123/files/data/motd.txt")
            .match_body("Welcome!")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": null}"#)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        client
            .write_file("abc123", "motd.txt", "Welcome!")
            .await
            .unwrap();

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_delete_file() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("DELETE", "/servers/abc123/files/data/motd.txt")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"success": true, "data": null}"#)
            .expect(1)
            .create_async()
            .await;

        let client = Exaroton::with_host("secret-token", &server.url());
        client.delete_file("abc123", "motd.txt").await.unwrap();

        mock.assert_async().await;
    }
}
