//! Response objects for the exaroton API.
//!
//! This module contains the structures built from the `data` payload of API
//! responses. Every object is a point-in-time snapshot: the client keeps no
//! entity state, so callers re-fetch to observe updated values.
//!
//! Payloads are decoded strictly: unexpected fields are rejected rather than
//! silently dropped, and re-encoding an object reproduces the fields it was
//! built from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The authenticated account, from `account`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Account {
    /// Account name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Whether the email address has been verified.
    pub verified: bool,
    /// Credit balance. The provider reports fractional balances.
    pub credits: f64,
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "name={}, email={}, verified={}, credits={}",
            self.name, self.email, self.verified, self.credits
        )
    }
}

/// A server on the account, from `servers` and `servers/{id}`.
///
/// Fields the provider omits while a server is offline (`host`, `port`,
/// `software`, ...) are optional.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Server {
    /// Unique identifier for the server.
    pub id: String,
    /// Display name of the server.
    pub name: String,
    /// Current status.
    pub status: ServerStatus,
    /// Join address (`name.exaroton.me`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Message of the day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub motd: Option<String>,
    /// Host machine the server runs on. Only present while online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    /// Port the server listens on. Only present while online.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    /// Player counts and the online player list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub players: Option<Players>,
    /// Installed server software.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<Software>,
    /// Whether the server is shared with the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "id={}, name={}, status={}",
            self.id, self.name, self.status
        )
    }
}

/// Status of a server, mapped from the provider's numeric status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ServerStatus {
    /// Code 0, the server is stopped.
    Offline,
    /// Code 1, the server is running and joinable.
    Online,
    /// Code 2.
    Starting,
    /// Code 3.
    Stopping,
    /// Code 4.
    Restarting,
    /// Code 5, the world is being saved.
    Saving,
    /// Code 6, the world is being loaded.
    Loading,
    /// Code 7, the server stopped unexpectedly.
    Crashed,
    /// Code 8, the server is queued for a start.
    Pending,
    /// Code 10, the host is being prepared.
    Preparing,
}

impl TryFrom<u8> for ServerStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(ServerStatus::Offline),
            1 => Ok(ServerStatus::Online),
            2 => Ok(ServerStatus::Starting),
            3 => Ok(ServerStatus::Stopping),
            4 => Ok(ServerStatus::Restarting),
            5 => Ok(ServerStatus::Saving),
            6 => Ok(ServerStatus::Loading),
            7 => Ok(ServerStatus::Crashed),
            8 => Ok(ServerStatus::Pending),
            10 => Ok(ServerStatus::Preparing),
            other => Err(format!("unknown server status code: {other}")),
        }
    }
}

impl From<ServerStatus> for u8 {
    fn from(status: ServerStatus) -> u8 {
        match status {
            ServerStatus::Offline => 0,
            ServerStatus::Online => 1,
            ServerStatus::Starting => 2,
            ServerStatus::Stopping => 3,
            ServerStatus::Restarting => 4,
            ServerStatus::Saving => 5,
            ServerStatus::Loading => 6,
            ServerStatus::Crashed => 7,
            ServerStatus::Pending => 8,
            ServerStatus::Preparing => 10,
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ServerStatus::Offline => "Offline",
            ServerStatus::Online => "Online",
            ServerStatus::Starting => "Starting",
            ServerStatus::Stopping => "Stopping",
            ServerStatus::Restarting => "Restarting",
            ServerStatus::Saving => "Saving",
            ServerStatus::Loading => "Loading",
            ServerStatus::Crashed => "Crashed",
            ServerStatus::Pending => "Pending",
            ServerStatus::Preparing => "Preparing",
        };
        write!(f, "{}", name)
    }
}

/// Player counts and the online player list of a server.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Players {
    /// Maximum player count.
    pub max: u32,
    /// Current player count.
    pub count: u32,
    /// Names of the players currently online.
    pub list: Vec<String>,
}

/// Server software (e.g. Vanilla, Paper) and its version.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Software {
    /// Unique identifier of the software.
    pub id: String,
    /// Software name.
    pub name: String,
    /// Software version.
    pub version: String,
}

/// Identifier and URLs of an uploaded log, returned by the paste service.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LogShare {
    /// Paste identifier.
    pub id: String,
    /// Browser URL of the paste.
    pub url: String,
    /// URL of the raw paste content.
    pub raw: String,
}

impl fmt::Display for LogShare {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "id={}, url={}", self.id, self.url)
    }
}

/// Metadata of a server file or directory, from `servers/{id}/files/info`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FileInfo {
    /// Path of the file, relative to the server root.
    pub path: String,
    /// File name.
    pub name: String,
    pub is_text_file: bool,
    pub is_config_file: bool,
    pub is_directory: bool,
    pub is_log: bool,
    pub is_readable: bool,
    pub is_writable: bool,
    /// Size in bytes. Zero for directories.
    pub size: u64,
    /// Directory listing. Only present for directories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<FileInfo>>,
}
