// Store mutations and the pure function that applies them to a collection.
//
// Rules
// - Add appends to the tail; insertion order is the stored order.
// - Update replaces the record with a matching id and keeps that id.
// - Remove deletes the record with a matching id.
// - Update and Remove on an unknown id leave the collection untouched.
//
// `apply` returns whether the collection changed, so callers only persist real changes.

use crate::modules::appointments::core::appointment::Appointment;

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Add(Appointment),
    Update { id: String, appointment: Appointment },
    Remove { id: String },
}

pub fn apply(appointments: &mut Vec<Appointment>, mutation: Mutation) -> bool {
    match mutation {
        Mutation::Add(appointment) => {
            appointments.push(appointment);
            true
        }
        Mutation::Update {
            id,
            mut appointment,
        } => match appointments.iter_mut().find(|existing| existing.id == id) {
            Some(existing) => {
                appointment.id = id;
                *existing = appointment;
                true
            }
            None => false,
        },
        Mutation::Remove { id } => {
            let before = appointments.len();
            appointments.retain(|existing| existing.id != id);
            appointments.len() != before
        }
    }
}
