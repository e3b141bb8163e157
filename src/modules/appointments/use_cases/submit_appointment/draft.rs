// Draft data type for the appointment form.
//
// Purpose
// - Hold the raw text of every form field while the form is open.
//
// Responsibilities
// - Start blank (date = now) for a new record, or pre-filled from a record being edited.
// - Stay untyped: price is text until the decider validates it.

use crate::modules::appointments::core::appointment::{Appointment, format_wall_clock};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub date: String,
    pub client_name: String,
    pub pet_name: String,
    pub price: String,
    pub comment: String,
}

impl Draft {
    pub fn blank(now: NaiveDateTime) -> Self {
        Self {
            date: format_wall_clock(now),
            ..Self::default()
        }
    }

    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            date: appointment
                .starts_at()
                .map(format_wall_clock)
                .unwrap_or_else(|| appointment.date.clone()),
            client_name: appointment.client_name.clone(),
            pet_name: appointment.pet_name.clone(),
            price: appointment.price.to_string(),
            comment: appointment.comment.clone(),
        }
    }
}
