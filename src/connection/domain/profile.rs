//! Connection profile aggregate.

use super::{ConnectionId, ConnectionType, ExtraOptions};
use std::fmt;

/// Stored, possibly partial bundle of endpoint, credential, and option data.
///
/// Profiles are immutable once loaded; builders consume `self` so a store
/// can assemble one field at a time before handing it out.
#[derive(Clone, PartialEq)]
pub struct ConnectionProfile {
    id: ConnectionId,
    conn_type: ConnectionType,
    host: Option<String>,
    port: Option<u16>,
    login: Option<String>,
    password: Option<String>,
    schema: Option<String>,
    extra: ExtraOptions,
}

impl ConnectionProfile {
    /// Creates a profile with only an identifier and a type tag.
    #[must_use]
    pub fn new(id: ConnectionId, conn_type: ConnectionType) -> Self {
        Self {
            id,
            conn_type,
            host: None,
            port: None,
            login: None,
            password: None,
            schema: None,
            extra: ExtraOptions::new(),
        }
    }

    /// Sets the host. Blank values clear it.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = non_blank(host.into());
        self
    }

    /// Sets the port.
    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Sets the login. Blank values clear it.
    #[must_use]
    pub fn with_login(mut self, login: impl Into<String>) -> Self {
        self.login = non_blank(login.into());
        self
    }

    /// Sets the password. Empty values clear it.
    #[must_use]
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        let value = password.into();
        self.password = if value.is_empty() { None } else { Some(value) };
        self
    }

    /// Sets the schema (database name, path prefix, and so on).
    #[must_use]
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = non_blank(schema.into());
        self
    }

    /// Replaces the extra options.
    #[must_use]
    pub fn with_extra(mut self, extra: ExtraOptions) -> Self {
        self.extra = extra;
        self
    }

    /// Returns the connection identifier.
    #[must_use]
    pub const fn id(&self) -> &ConnectionId {
        &self.id
    }

    /// Returns the connection type tag.
    #[must_use]
    pub const fn conn_type(&self) -> &ConnectionType {
        &self.conn_type
    }

    /// Returns the host, when set.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Returns the port, when set.
    #[must_use]
    pub const fn port(&self) -> Option<u16> {
        self.port
    }

    /// Returns the login, when set.
    #[must_use]
    pub fn login(&self) -> Option<&str> {
        self.login.as_deref()
    }

    /// Returns the password, when set.
    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    /// Returns the schema, when set.
    #[must_use]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    /// Returns the extra options.
    #[must_use]
    pub const fn extra(&self) -> &ExtraOptions {
        &self.extra
    }

    /// Returns `host` or `host:port` when a host is set.
    #[must_use]
    pub fn host_with_port(&self) -> Option<String> {
        let host = self.host()?;
        Some(self.port.map_or_else(
            || host.to_owned(),
            |port| format!("{host}:{port}"),
        ))
    }
}

impl fmt::Debug for ConnectionProfile {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConnectionProfile")
            .field("id", &self.id)
            .field("conn_type", &self.conn_type)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("login", &self.login)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("schema", &self.schema)
            .field("extra", &self.extra)
            .finish()
    }
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}
