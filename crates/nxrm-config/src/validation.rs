//! Field checks applied where configurations enter the global list
//!
//! Records themselves accept anything. These checks mirror what the
//! configuration form reports next to each field, and [`Endpoint`] parses
//! the server URL at the point a caller is about to use it.

use std::fmt;

use url::Url;

use crate::config::{NxrmConfiguration, ServerFields};
use crate::error::{Error, Result};

/// Outcome of checking a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCheck {
    Ok,
    Warning(String),
    Error(String),
}

impl FieldCheck {
    pub fn is_ok(&self) -> bool {
        matches!(self, FieldCheck::Ok)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FieldCheck::Error(_))
    }
}

/// Form field a check applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    DisplayName,
    ServerUrl,
    CredentialsId,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Id => write!(f, "id"),
            Field::DisplayName => write!(f, "displayName"),
            Field::ServerUrl => write!(f, "serverUrl"),
            Field::CredentialsId => write!(f, "credentialsId"),
        }
    }
}

/// A non-`Ok` check result for one server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationEntry {
    pub server_id: String,
    pub field: Field,
    pub check: FieldCheck,
}

/// Every warning and error found across a list of servers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    entries: Vec<ValidationEntry>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a check; `Ok` results are dropped.
    pub fn push(&mut self, server_id: &str, field: Field, check: FieldCheck) {
        if check.is_ok() {
            return;
        }
        self.entries.push(ValidationEntry {
            server_id: server_id.to_string(),
            field,
            check,
        });
    }

    pub fn entries(&self) -> &[ValidationEntry] {
        &self.entries
    }

    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|e| e.check.is_error())
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationEntry> {
        self.entries
            .iter()
            .filter(|e| matches!(e.check, FieldCheck::Warning(_)))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            let (level, message) = match &entry.check {
                FieldCheck::Ok => continue,
                FieldCheck::Warning(m) => ("warning", m),
                FieldCheck::Error(m) => ("error", m),
            };
            writeln!(
                f,
                "  {level}: [{}] {}: {message}",
                entry.server_id, entry.field
            )?;
        }
        Ok(())
    }
}

/// Check a server id against the ids of the other configured servers.
pub fn validate_id(id: &str, other_ids: &[&str]) -> FieldCheck {
    if id.trim().is_empty() {
        return FieldCheck::Error("Server ID is required".into());
    }
    if id.chars().any(char::is_whitespace) {
        return FieldCheck::Error("Server ID must not contain whitespace".into());
    }
    if other_ids.contains(&id) {
        return FieldCheck::Error("Server ID must be unique".into());
    }
    FieldCheck::Ok
}

/// Check a display name against the names of the other configured servers.
pub fn validate_display_name(name: &str, other_names: &[&str]) -> FieldCheck {
    if name.trim().is_empty() {
        return FieldCheck::Error("Display Name is required".into());
    }
    if other_names.contains(&name) {
        return FieldCheck::Error("Display Name must be unique".into());
    }
    FieldCheck::Ok
}

pub fn validate_server_url(server_url: &str) -> FieldCheck {
    if server_url.trim().is_empty() {
        return FieldCheck::Error("Server URL is required".into());
    }
    match parse_http_url(server_url) {
        Ok(_) => FieldCheck::Ok,
        Err(message) => FieldCheck::Error(format!("Malformed URL: {message}")),
    }
}

/// Blank credentials are allowed for anonymous access but worth flagging.
pub fn validate_credentials_id(credentials_id: &str) -> FieldCheck {
    if credentials_id.trim().is_empty() {
        FieldCheck::Warning("No credentials selected; anonymous access will be used".into())
    } else {
        FieldCheck::Ok
    }
}

/// Run every field check over a list of servers.
pub fn validate_all(configs: &[NxrmConfiguration]) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (index, config) in configs.iter().enumerate() {
        let others = configs
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index)
            .map(|(_, c)| c);
        let other_ids: Vec<&str> = others.clone().map(|c| c.id()).collect();
        let other_names: Vec<&str> = others.map(|c| c.display_name()).collect();

        let id = config.id();
        report.push(id, Field::Id, validate_id(id, &other_ids));
        report.push(
            id,
            Field::DisplayName,
            validate_display_name(config.display_name(), &other_names),
        );
        report.push(id, Field::ServerUrl, validate_server_url(config.server_url()));
        report.push(
            id,
            Field::CredentialsId,
            validate_credentials_id(config.credentials_id()),
        );
    }

    report
}

fn parse_http_url(raw: &str) -> std::result::Result<Url, String> {
    let url = Url::parse(raw.trim()).map_err(|e| e.to_string())?;
    match url.scheme() {
        "http" | "https" => {}
        other => return Err(format!("unsupported scheme '{other}'")),
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err("missing host".into());
    }
    Ok(url)
}

/// A server URL parsed for use by a client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    id: String,
    base: Url,
}

impl Endpoint {
    /// Parse the server URL of `fields`. The base path always ends in `/`
    /// so that [`Endpoint::join`] appends rather than replaces.
    pub fn parse(fields: &ServerFields) -> Result<Self> {
        let mut base =
            parse_http_url(fields.server_url()).map_err(|message| Error::InvalidServerUrl {
                id: fields.id().to_string(),
                message,
            })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self {
            id: fields.id().to_string(),
            base,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Resolve a path relative to the server base.
    pub fn join(&self, path: &str) -> Result<Url> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| Error::InvalidServerUrl {
                id: self.id.clone(),
                message: e.to_string(),
            })
    }
}
