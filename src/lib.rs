//! exaroton - A client for the exaroton Minecraft hosting REST API.
//!
//! This crate is a thin binding for the exaroton API: it authenticates with
//! a bearer token, issues one HTTP request per operation and maps the JSON
//! responses onto plain data objects (accounts, servers, logs, files).
//!
//! # Overview
//!
//! The entire surface is the [`Exaroton`] client. Construct it once with
//! your API token and pass it by reference wherever calls are needed; it
//! holds no state besides the token and the HTTP transport, so it can be
//! reused freely. Every method performs a single request and returns a
//! fresh snapshot; nothing is cached, retried or kept in sync. Sharing
//! logs is the one exception with two requests: it fetches the log text and
//! forwards it to the [mclo.gs](https://mclo.gs) paste service.
//!
//! # Features
//!
//! - **Account**: Query the authenticated account and its credit balance
//! - **Servers**: List servers, fetch one by id, start/stop/restart
//! - **Console**: Execute commands on a running server
//! - **Logs**: Fetch the server log, share it via mclo.gs
//! - **Options**: Read and change the assigned RAM
//! - **Player lists**: Inspect and edit whitelist, ops and friends
//! - **Files**: Read metadata, read/write/delete server files
//!
//! # Usage
//!
//! ```no_run
//! use exaroton::{Exaroton, Requester};
//!
//! # #[tokio::main]
//! # async fn main() -> exaroton::Result<()> {
//! let client = Exaroton::new("your-api-token");
//!
//! let account = client.get_account().await?;
//! println!("logged in as {} ({} credits)", account.name, account.credits);
//!
//! for server in client.get_servers().await? {
//!     println!("{}", server);
//! }
//!
//! client.start("abc123").await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Errors
//!
//! Every operation returns one of three error categories, see [`Error`]:
//! a [`Error::Validation`] raised locally before any request is made, a
//! [`Error::Transport`] for network failures and undecodable responses, or
//! a [`Error::Api`] carrying the provider's error message verbatim.
//!
//! Whether to retry a failed call is up to the caller; the client never
//! retries on its own.
//!
//! # Modules
//!
//! - [`client`] - The API client and the [`Requester`] trait it implements
//! - [`error`] - Error categories shared by all operations
//! - [`mclogs`] - The mclo.gs paste service collaborator
//! - [`types`] - Response objects built from API payloads

mod envelope;

pub mod client;
pub mod error;
pub mod mclogs;
pub mod types;

pub use crate::client::{Exaroton, Requester};
pub use crate::error::{Error, Result};
pub use crate::mclogs::Mclogs;
pub use crate::types::{Account, FileInfo, LogShare, Players, Server, ServerStatus, Software};
