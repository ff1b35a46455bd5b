//! Required-field checks over connection profiles.

use super::{ConfigurationError, ProfileField};
use crate::connection::domain::ConnectionProfile;

/// Returns the value of `field`, or a configuration error when absent.
///
/// # Errors
///
/// Returns [`ConfigurationError::MissingField`] when the profile does not
/// carry the field.
pub fn require_field(
    profile: &ConnectionProfile,
    field: ProfileField,
) -> Result<&str, ConfigurationError> {
    let value = match field {
        ProfileField::Host => profile.host(),
        ProfileField::Login => profile.login(),
        ProfileField::Password => profile.password(),
        ProfileField::Schema => profile.schema(),
    };
    value.ok_or_else(|| ConfigurationError::MissingField {
        connection_id: profile.id().clone(),
        field,
    })
}
