// Derived views over a snapshot of the store.
//
// Purpose
// - Compute everything the screens show: the nearest upcoming appointment, client names,
//   per-client history, totals, the most recent records and type-ahead suggestions.
//
// Boundaries
// - Pure functions. No caching, no input or output. Callers recompute after each mutation.
//
// Ordering
// - "Newest first" sorts by parsed date descending; records with an unreadable date go last.
// - Sorts are stable, so equal dates keep insertion order.

use crate::modules::appointments::core::appointment::Appointment;
use chrono::NaiveDateTime;
use std::collections::BTreeSet;

const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct ClientHistory {
    pub client_name: String,
    pub total_visits: usize,
    pub total_spent: f64,
    pub appointments: Vec<Appointment>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aggregate {
    pub total: usize,
    pub future_count: usize,
    pub revenue: f64,
}

/// Everything the list screen needs, computed in one pass from a snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub nearest: Option<Appointment>,
    pub aggregate: Aggregate,
    pub client_names: Vec<String>,
    pub recent: Vec<Appointment>,
}

impl Dashboard {
    pub fn client_count(&self) -> usize {
        self.client_names.len()
    }
}

pub fn nearest_appointment(snapshot: &[Appointment], now: NaiveDateTime) -> Option<&Appointment> {
    snapshot
        .iter()
        .filter_map(|appointment| {
            appointment
                .starts_at()
                .filter(|starts_at| *starts_at >= now)
                .map(|starts_at| (starts_at, appointment))
        })
        .min_by_key(|(starts_at, _)| *starts_at)
        .map(|(_, appointment)| appointment)
}

pub fn client_names(snapshot: &[Appointment]) -> Vec<String> {
    snapshot
        .iter()
        .map(|appointment| appointment.client_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

pub fn client_history(snapshot: &[Appointment], client_name: &str) -> ClientHistory {
    let mut appointments: Vec<Appointment> = snapshot
        .iter()
        .filter(|appointment| appointment.client_name == client_name)
        .cloned()
        .collect();
    sort_newest_first(&mut appointments);

    ClientHistory {
        client_name: client_name.to_string(),
        total_visits: appointments.len(),
        total_spent: appointments.iter().map(|appointment| appointment.price).sum(),
        appointments,
    }
}

pub fn aggregate(snapshot: &[Appointment], now: NaiveDateTime) -> Aggregate {
    Aggregate {
        total: snapshot.len(),
        future_count: snapshot
            .iter()
            .filter(|appointment| appointment.is_upcoming(now))
            .count(),
        revenue: snapshot.iter().map(|appointment| appointment.price).sum(),
    }
}

pub fn recent_five(snapshot: &[Appointment]) -> Vec<Appointment> {
    let mut appointments = snapshot.to_vec();
    sort_newest_first(&mut appointments);
    appointments.truncate(RECENT_LIMIT);
    appointments
}

/// Client names containing the typed text, compared case-insensitively.
pub fn suggestions_for(snapshot: &[Appointment], typed: &str) -> Vec<String> {
    let needle = typed.to_lowercase();
    client_names(snapshot)
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .collect()
}

pub fn recompute(snapshot: &[Appointment], now: NaiveDateTime) -> Dashboard {
    Dashboard {
        nearest: nearest_appointment(snapshot, now).cloned(),
        aggregate: aggregate(snapshot, now),
        client_names: client_names(snapshot),
        recent: recent_five(snapshot),
    }
}

fn sort_newest_first(appointments: &mut [Appointment]) {
    appointments.sort_by(|a, b| b.starts_at().cmp(&a.starts_at()));
}
