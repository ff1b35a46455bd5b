//! Port describing how one vendor client is built from a profile.

use crate::connection::domain::ConnectionProfile;
use crate::hook::domain::{ConfigurationError, IntegrationError};

/// Two-step construction of a vendor client.
///
/// [`ClientRecipe::prepare`] turns a profile plus caller overrides into
/// vendor settings and may only fail with configuration errors. It must not
/// perform I/O. [`ClientRecipe::construct`] builds the client from those
/// settings and may only fail with integration errors.
pub trait ClientRecipe {
    /// Validated, vendor-specific construction settings.
    type Settings;

    /// The constructed client handle.
    type Client;

    /// Short service name used in logs and errors.
    fn service(&self) -> &'static str;

    /// Derives vendor settings from a resolved profile.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when a required field or option is
    /// absent or invalid.
    fn prepare(&self, profile: &ConnectionProfile) -> Result<Self::Settings, ConfigurationError>;

    /// Returns the endpoint the settings point at, for logging.
    ///
    /// Must not include credentials.
    fn endpoint(&self, settings: &Self::Settings) -> String;

    /// Builds the vendor client.
    ///
    /// # Errors
    ///
    /// Returns [`IntegrationError`] when the vendor constructor, or any
    /// eager validation it performs, fails.
    fn construct(&self, settings: Self::Settings) -> Result<Self::Client, IntegrationError>;
}
