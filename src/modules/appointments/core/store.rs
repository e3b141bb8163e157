// AppointmentStore is the single source of truth for the running session.
//
// Responsibilities
// - Own the canonical, insertion-ordered list of appointments.
// - Apply mutations and notify the on-change hook with the full snapshot after every
//   mutation that changed the list.
//
// Boundaries
// - Loading never notifies the hook, so a load is not written back as a mutation.
// - Persistence failures are logged here and never reach the caller.

use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::core::mutation::{Mutation, apply};
use crate::modules::appointments::core::ports::AppointmentRepository;

type ChangeHook = Box<dyn FnMut(&[Appointment])>;

#[derive(Default)]
pub struct AppointmentStore {
    appointments: Vec<Appointment>,
    on_change: Option<ChangeHook>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments,
            on_change: None,
        }
    }

    /// Reads the persisted snapshot. Any failure is logged and yields an empty store.
    pub fn load(repository: &impl AppointmentRepository) -> Self {
        match repository.load_all() {
            Ok(appointments) => {
                tracing::info!(count = appointments.len(), "loaded appointments");
                Self::from_appointments(appointments)
            }
            Err(error) => {
                tracing::error!(error = %error, "failed to load appointments, starting empty");
                Self::new()
            }
        }
    }

    /// Replaces the on-change hook.
    pub fn on_change(&mut self, hook: impl FnMut(&[Appointment]) + 'static) {
        self.on_change = Some(Box::new(hook));
    }

    /// Wires the on-change hook to a repository. Write failures are logged and swallowed.
    pub fn persist_to<R>(&mut self, repository: R)
    where
        R: AppointmentRepository + 'static,
    {
        self.on_change(move |snapshot| {
            if let Err(error) = repository.save_all(snapshot) {
                tracing::error!(error = %error, count = snapshot.len(), "failed to save appointments");
            }
        });
    }

    pub fn add(&mut self, appointment: Appointment) {
        self.apply(Mutation::Add(appointment));
    }

    /// Returns false, without notifying, when no record has this id.
    pub fn update(&mut self, id: &str, appointment: Appointment) -> bool {
        self.apply(Mutation::Update {
            id: id.to_string(),
            appointment,
        })
    }

    /// Returns false, without notifying, when no record has this id.
    pub fn remove(&mut self, id: &str) -> bool {
        self.apply(Mutation::Remove { id: id.to_string() })
    }

    pub fn apply(&mut self, mutation: Mutation) -> bool {
        let changed = apply(&mut self.appointments, mutation);
        if changed {
            if let Some(hook) = self.on_change.as_mut() {
                hook(&self.appointments);
            }
        }
        changed
    }

    pub fn snapshot(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|appointment| appointment.id == id)
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Id for a new record: the timestamp as text, bumped until it is free.
    pub fn allocate_id(&self, timestamp_millis: i64) -> String {
        let mut candidate = timestamp_millis;
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }
}
