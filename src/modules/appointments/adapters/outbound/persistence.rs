// Outbound adapter persisting the appointment list as one JSON array under a storage key.
//
// Responsibilities
// - Absent key reads as an empty list.
// - A stored value that is valid JSON but not an array is ignored and reads as empty.
// - Elements of the list that fail to decode are skipped one by one; the rest load.
// - A value that is not JSON at all is reported as Malformed so the store can log it.
// - Writes replace the whole value with the serialized snapshot.

use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::core::ports::{
    AppointmentRepository, PersistenceReadError, PersistenceWriteError,
};
use crate::shared::infrastructure::key_value_storage::KeyValueStorage;
use serde_json::Value;

pub const STORAGE_KEY: &str = "groomer_appointments";

#[derive(Clone)]
pub struct KeyValueAppointmentRepository<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> KeyValueAppointmentRepository<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, STORAGE_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<S: KeyValueStorage> AppointmentRepository for KeyValueAppointmentRepository<S> {
    fn load_all(&self) -> Result<Vec<Appointment>, PersistenceReadError> {
        let Some(raw) = self.storage.get(&self.key)? else {
            return Ok(Vec::new());
        };

        let Value::Array(items) = serde_json::from_str::<Value>(&raw)? else {
            tracing::warn!(key = %self.key, "stored appointments are not a list, ignoring");
            return Ok(Vec::new());
        };

        Ok(items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value::<Appointment>(item) {
                Ok(appointment) => Some(appointment),
                Err(error) => {
                    tracing::warn!(
                        key = %self.key,
                        index,
                        error = %error,
                        "skipping unreadable appointment"
                    );
                    None
                }
            })
            .collect())
    }

    fn save_all(&self, snapshot: &[Appointment]) -> Result<(), PersistenceWriteError> {
        let raw = serde_json::to_string(snapshot)?;
        self.storage.set(&self.key, &raw)?;
        tracing::debug!(key = %self.key, count = snapshot.len(), "saved appointments");
        Ok(())
    }
}
