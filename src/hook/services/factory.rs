//! Connection client factory.

use crate::connection::{
    domain::{ConnectionId, ConnectionProfile},
    ports::ConnectionStore,
};
use crate::hook::{
    domain::{ClientSlot, ConfigurationError, HookError, HookResult},
    ports::ClientRecipe,
};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Resolves a profile from `store`.
///
/// The identifier is validated before the store is consulted.
///
/// # Errors
///
/// Returns [`ConfigurationError::MissingConnectionId`] for a blank
/// identifier, [`ConfigurationError::ConnectionNotFound`] when the store has
/// no matching profile, and [`ConfigurationError::Store`] when the store
/// fails.
pub fn resolve_profile<S>(store: &S, connection_id: &str) -> Result<ConnectionProfile, ConfigurationError>
where
    S: ConnectionStore + ?Sized,
{
    let id = ConnectionId::new(connection_id).map_err(|_| ConfigurationError::MissingConnectionId)?;
    store
        .find(&id)?
        .ok_or(ConfigurationError::ConnectionNotFound(id))
}

/// A hook instance bound to one connection identifier.
///
/// The client is built on the first [`ConnectionHook::get_client`] call and
/// cached for the lifetime of the instance. Later calls return the cached
/// client without consulting the store again. A failed build leaves nothing
/// cached, so the next call retries from scratch.
pub struct ConnectionHook<S, R>
where
    S: ConnectionStore + ?Sized,
    R: ClientRecipe,
{
    store: Arc<S>,
    connection_id: String,
    recipe: R,
    client: ClientSlot<R::Client>,
}

impl<S, R> ConnectionHook<S, R>
where
    S: ConnectionStore + ?Sized,
    R: ClientRecipe,
{
    /// Creates an unconnected hook.
    #[must_use]
    pub fn new(store: Arc<S>, connection_id: impl Into<String>, recipe: R) -> Self {
        Self {
            store,
            connection_id: connection_id.into(),
            recipe,
            client: ClientSlot::new(),
        }
    }

    /// Returns the connection identifier the hook was built with.
    #[must_use]
    pub fn connection_id(&self) -> &str {
        &self.connection_id
    }

    /// Returns `true` once a client has been built and cached.
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.client.is_set()
    }

    /// Returns the client recipe.
    #[must_use]
    pub const fn recipe(&self) -> &R {
        &self.recipe
    }

    /// Returns the shared connection store.
    #[must_use]
    pub const fn store(&self) -> &Arc<S> {
        &self.store
    }

    /// Resolves this hook's profile without building a client.
    ///
    /// # Errors
    ///
    /// See [`resolve_profile`].
    pub fn profile(&self) -> Result<ConnectionProfile, ConfigurationError> {
        resolve_profile(self.store.as_ref(), &self.connection_id)
    }

    /// Returns the cached client, building it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`HookError::Configuration`] when the profile cannot be
    /// resolved or lacks required data, and [`HookError::Integration`] when
    /// the vendor client cannot be built.
    pub fn get_client(&mut self) -> HookResult<&R::Client> {
        let store = self.store.as_ref();
        let connection_id = self.connection_id.as_str();
        let recipe = &self.recipe;
        self.client
            .get_or_try_init(|| connect(store, connection_id, recipe))
    }
}

impl<S, R> fmt::Debug for ConnectionHook<S, R>
where
    S: ConnectionStore + ?Sized,
    R: ClientRecipe,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConnectionHook")
            .field("service", &self.recipe.service())
            .field("connection_id", &self.connection_id)
            .field("connected", &self.is_connected())
            .finish_non_exhaustive()
    }
}

fn connect<S, R>(store: &S, connection_id: &str, recipe: &R) -> HookResult<R::Client>
where
    S: ConnectionStore + ?Sized,
    R: ClientRecipe,
{
    let service = recipe.service();
    let profile = resolve_profile(store, connection_id)?;
    debug!(connection_id = %profile.id(), service, "creating client");

    let settings = recipe.prepare(&profile)?;
    let endpoint = recipe.endpoint(&settings);
    info!(connection_id = %profile.id(), service, %endpoint, "connecting");

    recipe.construct(settings).map_err(|err| {
        warn!(
            connection_id = %profile.id(),
            service,
            context = err.context(),
            error = err.detail(),
            "client construction failed"
        );
        HookError::from(err)
    })
}
