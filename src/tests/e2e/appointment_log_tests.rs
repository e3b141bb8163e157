use crate::modules::appointments::adapters::outbound::persistence::{
    KeyValueAppointmentRepository, STORAGE_KEY,
};
use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::core::store::AppointmentStore;
use crate::modules::appointments::core::views::{client_history, client_names};
use crate::modules::appointments::use_cases::interaction::controller::{
    InteractionController, InteractionError,
};
use crate::modules::appointments::use_cases::interaction::intent::Intent;
use crate::modules::appointments::use_cases::interaction::view_mode::ViewMode;
use crate::modules::appointments::use_cases::submit_appointment::decision::ValidationError;
use crate::shared::infrastructure::clock::FixedClock;
use crate::shared::infrastructure::key_value_storage::in_memory::InMemoryStorage;
use chrono::NaiveDate;
use rstest::rstest;
use std::rc::Rc;

fn clock() -> FixedClock {
    FixedClock::new(
        NaiveDate::from_ymd_opt(2024, 12, 20)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap(),
    )
}

fn boot(storage: &Rc<InMemoryStorage>) -> InteractionController<FixedClock> {
    let repository = KeyValueAppointmentRepository::new(Rc::clone(storage));
    let mut store = AppointmentStore::load(&repository);
    store.persist_to(repository);
    InteractionController::new(store, clock())
}

fn submit_new(
    controller: &mut InteractionController<FixedClock>,
    date: &str,
    client_name: &str,
    pet_name: &str,
    price: &str,
) -> Result<(), InteractionError> {
    controller.handle(Intent::OpenNewForm)?;
    controller.handle(Intent::SetDate(date.into()))?;
    controller.handle(Intent::TypeClientName(client_name.into()))?;
    controller.handle(Intent::BlurClientName)?;
    controller.handle(Intent::SetPetName(pet_name.into()))?;
    controller.handle(Intent::SetPrice(price.into()))?;
    controller.handle(Intent::Submit)
}

fn reload(storage: &Rc<InMemoryStorage>) -> Vec<Appointment> {
    boot(storage).snapshot().to_vec()
}

#[rstest]
fn records_a_first_appointment_into_an_empty_log() {
    let storage = Rc::new(InMemoryStorage::new());
    let mut controller = boot(&storage);
    assert_eq!(storage.writes(), 0);

    submit_new(&mut controller, "2025-01-01T10:00", "Anna", "Rex", "1500").unwrap();

    let dashboard = controller.dashboard();
    assert_eq!(dashboard.aggregate.total, 1);
    assert_eq!(dashboard.aggregate.revenue, 1500.0);
    assert_eq!(dashboard.aggregate.future_count, 1);
    assert_eq!(dashboard.nearest.map(|a| a.client_name), Some("Anna".into()));
    assert_eq!(storage.writes(), 1);
    assert_eq!(reload(&storage), controller.snapshot());
}

#[rstest]
fn builds_client_histories_across_visits() {
    let storage = Rc::new(InMemoryStorage::new());
    let mut controller = boot(&storage);

    submit_new(&mut controller, "2024-12-01T10:00", "Anna", "Rex", "1000").unwrap();
    submit_new(&mut controller, "2024-12-10T10:00", "Anna", "Rex", "2000").unwrap();
    submit_new(&mut controller, "2024-12-05T10:00", "Boris", "", "500").unwrap();

    let history = client_history(controller.snapshot(), "Anna");
    assert_eq!(history.total_visits, 2);
    assert_eq!(history.total_spent, 3000.0);
    assert_eq!(client_names(controller.snapshot()), vec!["Anna", "Boris"]);

    let ids: Vec<_> = controller.snapshot().iter().map(|a| a.id.clone()).collect();
    assert_eq!(ids.len(), 3);
    assert!(ids[0] != ids[1] && ids[1] != ids[2] && ids[0] != ids[2]);
    assert_eq!(storage.writes(), 3);
}

#[rstest]
fn keeps_the_form_open_when_the_client_name_is_missing() {
    let storage = Rc::new(InMemoryStorage::new());
    let mut controller = boot(&storage);

    let result = submit_new(&mut controller, "2025-01-01T10:00", "   ", "Rex", "1500");

    assert_eq!(
        result,
        Err(InteractionError::Validation(
            ValidationError::MissingClientName
        ))
    );
    assert!(controller.snapshot().is_empty());
    assert_eq!(controller.mode(), &ViewMode::FormOpen { editing_id: None });
    assert_eq!(controller.draft().map(|d| d.pet_name.as_str()), Some("Rex"));
    assert_eq!(storage.writes(), 0);
}

#[rstest]
fn edits_a_price_and_keeps_everything_else() {
    let storage = Rc::new(InMemoryStorage::new());
    let mut controller = boot(&storage);
    submit_new(&mut controller, "2025-01-01T10:00", "Anna", "Rex", "1500").unwrap();
    let original = controller.snapshot()[0].clone();

    controller
        .handle(Intent::BrowseHistory {
            client: Some("Anna".into()),
        })
        .unwrap();
    controller
        .handle(Intent::Edit {
            id: original.id.clone(),
        })
        .unwrap();
    controller.handle(Intent::SetPrice("1800".into())).unwrap();
    controller.handle(Intent::Submit).unwrap();

    let stored = reload(&storage);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, original.id);
    assert_eq!(stored[0].date, original.date);
    assert_eq!(stored[0].client_name, original.client_name);
    assert_eq!(stored[0].price, 1800.0);
    assert_eq!(
        controller.mode(),
        &ViewMode::HistoryBrowse {
            selected_client: Some("Anna".into())
        }
    );
    assert_eq!(
        controller.selected_history().map(|h| h.total_spent),
        Some(1800.0)
    );
}

#[rstest]
fn starts_empty_over_malformed_storage_and_recovers_on_the_first_write() {
    let storage = Rc::new(InMemoryStorage::with_value(STORAGE_KEY, "[{broken"));
    let mut controller = boot(&storage);

    assert!(controller.snapshot().is_empty());
    assert_eq!(storage.writes(), 0);

    submit_new(&mut controller, "2025-01-01T10:00", "Anna", "Rex", "1500").unwrap();
    assert_eq!(reload(&storage).len(), 1);
}

#[rstest]
fn keeps_working_in_memory_while_storage_is_offline() {
    let storage = Rc::new(InMemoryStorage::new());
    let mut controller = boot(&storage);
    storage.toggle_offline();

    submit_new(&mut controller, "2025-01-01T10:00", "Anna", "Rex", "1500").unwrap();
    assert_eq!(controller.snapshot().len(), 1);

    storage.toggle_offline();
    assert!(reload(&storage).is_empty());
}

#[rstest]
fn deletes_a_record_after_confirmation_and_persists_the_removal() {
    let storage = Rc::new(InMemoryStorage::new());
    let mut controller = boot(&storage);
    submit_new(&mut controller, "2025-01-01T10:00", "Anna", "Rex", "1500").unwrap();
    submit_new(&mut controller, "2025-01-02T10:00", "Boris", "", "500").unwrap();
    let anna = controller.snapshot()[0].id.clone();

    controller.handle(Intent::RequestDelete { id: anna.clone() }).unwrap();
    controller.handle(Intent::DeclineDelete).unwrap();
    assert_eq!(reload(&storage).len(), 2);

    controller.handle(Intent::RequestDelete { id: anna.clone() }).unwrap();
    controller.handle(Intent::ConfirmDelete).unwrap();

    let stored = reload(&storage);
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].client_name, "Boris");
    assert_eq!(storage.writes(), 3);
}

#[rstest]
fn suggests_known_clients_while_typing_a_new_record() {
    let storage = Rc::new(InMemoryStorage::new());
    let mut controller = boot(&storage);
    submit_new(&mut controller, "2025-01-01T10:00", "Anna", "Rex", "1500").unwrap();
    submit_new(&mut controller, "2025-01-02T10:00", "Joanna", "", "500").unwrap();

    controller.handle(Intent::OpenNewForm).unwrap();
    controller.handle(Intent::TypeClientName("ANN".into())).unwrap();
    assert_eq!(controller.visible_suggestions(), vec!["Anna", "Joanna"]);

    controller.handle(Intent::PickSuggestion("Joanna".into())).unwrap();
    controller.handle(Intent::SetPrice("600".into())).unwrap();
    controller.handle(Intent::Submit).unwrap();

    assert_eq!(client_history(controller.snapshot(), "Joanna").total_visits, 2);
}
