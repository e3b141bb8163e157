// Ports define what the appointment core needs from the outside world.
//
// Purpose
// - AppointmentRepository: read and write the whole appointment list as one snapshot.
//
// Boundaries
// - No concrete storage here. The key-value adapter lives in adapters/outbound.
//
// Testing guidance
// - Back the repository with the in memory key-value storage, or a hand-written fake.

use crate::modules::appointments::core::appointment::Appointment;
use crate::shared::infrastructure::key_value_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistenceReadError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored appointments could not be decoded: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum PersistenceWriteError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("appointments could not be encoded: {0}")]
    Encode(#[from] serde_json::Error),
}

pub trait AppointmentRepository {
    fn load_all(&self) -> Result<Vec<Appointment>, PersistenceReadError>;
    fn save_all(&self, snapshot: &[Appointment]) -> Result<(), PersistenceWriteError>;
}
