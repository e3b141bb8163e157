// Pure decision function for submitting the appointment form.
//
// Responsibilities
// - Reject a draft without a client name or price, or with a price that is not a
//   non-negative number, or without a date.
// - Trim text fields and produce an Add mutation for a new record or an Update
//   mutation for the record being edited.
// - Never perform input or output.

use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::core::mutation::Mutation;
use crate::modules::appointments::use_cases::submit_appointment::decision::{
    SubmitTarget, ValidationError,
};
use crate::modules::appointments::use_cases::submit_appointment::draft::Draft;

pub fn decide_submit(draft: &Draft, target: SubmitTarget) -> Result<Mutation, ValidationError> {
    let client_name = draft.client_name.trim();
    if client_name.is_empty() {
        return Err(ValidationError::MissingClientName);
    }

    let price_text = draft.price.trim();
    if price_text.is_empty() {
        return Err(ValidationError::MissingPrice);
    }
    let price = match price_text.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => price,
        _ => return Err(ValidationError::InvalidPrice(price_text.to_string())),
    };

    let date = draft.date.trim();
    if date.is_empty() {
        return Err(ValidationError::MissingDate);
    }

    let (id, is_new) = match target {
        SubmitTarget::New { id } => (id, true),
        SubmitTarget::Existing { id } => (id, false),
    };
    let appointment = Appointment {
        id: id.clone(),
        date: date.to_string(),
        client_name: client_name.to_string(),
        pet_name: draft.pet_name.trim().to_string(),
        price,
        comment: draft.comment.trim().to_string(),
    };

    Ok(if is_new {
        Mutation::Add(appointment)
    } else {
        Mutation::Update { id, appointment }
    })
}
