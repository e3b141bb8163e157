use crate::modules::appointments::adapters::outbound::persistence::KeyValueAppointmentRepository;
use crate::modules::appointments::core::store::AppointmentStore;
use crate::modules::appointments::use_cases::interaction::controller::InteractionController;
use crate::shared::infrastructure::clock::{Clock, SystemClock};
use crate::shared::infrastructure::key_value_storage::file_system::FileStorage;
use crate::shell::config::AppConfig;

pub struct AppState<C: Clock = SystemClock> {
    pub config: AppConfig,
    pub controller: InteractionController<C>,
}

impl AppState {
    pub fn bootstrap(config: AppConfig) -> Self {
        Self::bootstrap_with_clock(config, SystemClock)
    }
}

impl<C: Clock> AppState<C> {
    /// Loads the stored list once, then saves the full list after every mutation.
    pub fn bootstrap_with_clock(config: AppConfig, clock: C) -> Self {
        let storage = FileStorage::new(config.data_dir.clone());
        let repository = KeyValueAppointmentRepository::with_key(storage, &config.storage_key);

        let mut store = AppointmentStore::load(&repository);
        store.persist_to(repository);
        tracing::info!(
            data_dir = %config.data_dir.display(),
            key = %config.storage_key,
            records = store.len(),
            "grooming log ready"
        );

        Self {
            config,
            controller: InteractionController::new(store, clock),
        }
    }
}
