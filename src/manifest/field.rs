//! Write-once field cell

use crate::error::{Result, SigilError};
use serde::{Serialize, Serializer};

/// A named field that may be assigned exactly once
///
/// Backs the write-once `version` and `image` fields: the first `set`
/// stores the value, any later `set` fails regardless of the value, and
/// `get` fails until the first `set` has happened.
#[derive(Debug, Clone)]
pub struct WriteOnce<T> {
    name: &'static str,
    value: Option<T>,
}

impl<T> WriteOnce<T> {
    /// Create an empty cell for the named field
    pub fn new(name: &'static str) -> Self {
        Self { name, value: None }
    }

    /// Store the value; fails if the field was already set
    pub fn set(&mut self, value: T) -> Result<()> {
        if self.value.is_some() {
            return Err(SigilError::AlreadyInitialized(self.name));
        }
        self.value = Some(value);
        Ok(())
    }

    /// Read the value; fails if the field was never set
    pub fn get(&self) -> Result<&T> {
        self.value
            .as_ref()
            .ok_or(SigilError::UninitializedField(self.name))
    }

    /// Read the value without failing
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }
}

impl<T: Serialize> Serialize for WriteOnce<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}
