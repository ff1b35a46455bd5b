//! Two-state holder for a lazily built client.

/// Holds a client once it has been built.
///
/// The slot starts empty and is filled at most once by
/// [`ClientSlot::get_or_try_init`]. A failed initializer leaves it empty.
#[derive(Debug)]
pub struct ClientSlot<C> {
    client: Option<C>,
}

impl<C> ClientSlot<C> {
    /// Creates an empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { client: None }
    }

    /// Returns `true` once a client has been stored.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.client.is_some()
    }

    /// Returns the stored client, when any.
    #[must_use]
    pub const fn get(&self) -> Option<&C> {
        self.client.as_ref()
    }

    /// Returns the stored client, building it with `init` when empty.
    ///
    /// # Errors
    ///
    /// Returns the initializer's error; the slot stays empty.
    pub fn get_or_try_init<E>(&mut self, init: impl FnOnce() -> Result<C, E>) -> Result<&C, E> {
        let client = match self.client.take() {
            Some(client) => client,
            None => init()?,
        };
        Ok(self.client.insert(client))
    }
}

impl<C> Default for ClientSlot<C> {
    fn default() -> Self {
        Self::new()
    }
}
