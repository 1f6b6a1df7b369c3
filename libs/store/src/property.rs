//! The property store interface.

use propstore_value::{PropertyType, TypeTag, Value};

use crate::StoreError;

/// A typed key-value property store.
///
/// Each key carries the type it was created with. Reads must name that type
/// and updates must keep it; a type change requires a delete first.
pub trait PropertyStore {
    /// Reads the value under `key`, which must be stored as `expected`.
    fn get(&self, key: &str, expected: TypeTag) -> Result<Value, StoreError>;

    /// Returns the type `key` is stored under.
    fn type_of(&self, key: &str) -> Result<TypeTag, StoreError>;

    /// Creates `key`, or overwrites it when `update` is set and the stored
    /// type matches the value's type.
    fn set(&mut self, key: &str, value: &Value, update: bool) -> Result<(), StoreError>;

    /// Deletes `key`. Deleting a missing key succeeds.
    fn delete(&mut self, key: &str) -> Result<(), StoreError>;

    /// Returns true if a property is stored under `key`.
    fn contains(&self, key: &str) -> Result<bool, StoreError> {
        match self.type_of(key) {
            Ok(_) => Ok(true),
            Err(StoreError::NotFound(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Reads `key` as a native Rust type.
    fn get_as<T: PropertyType>(&self, key: &str) -> Result<T, StoreError>
    where
        Self: Sized,
    {
        let value = self.get(key, T::TAG)?;
        T::from_value(value).ok_or_else(|| StoreError::corrupt(key, "decoded to another type"))
    }

    /// Writes a native Rust value under its matching tag.
    fn set_as<T: PropertyType>(
        &mut self,
        key: &str,
        value: T,
        update: bool,
    ) -> Result<(), StoreError>
    where
        Self: Sized,
    {
        self.set(key, &value.into_value(), update)
    }
}
