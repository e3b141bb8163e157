// Plain-text rendering of the list and history screens for the host binary.
//
// Boundaries
// - Reads derived views only. Never touches the store or the controller.
// - Dates are shown relative to the `now` passed in, so output is deterministic in tests.

use crate::modules::appointments::core::appointment::{Appointment, parse_wall_clock};
use crate::modules::appointments::core::views::{ClientHistory, Dashboard};
use chrono::{Days, NaiveDateTime};

pub fn format_date(text: &str, now: NaiveDateTime) -> String {
    let Some(date) = parse_wall_clock(text) else {
        return text.to_string();
    };
    let time = date.format("%H:%M");
    let day = date.date();

    if day == now.date() {
        format!("Today, {time}")
    } else if now.date().checked_add_days(Days::new(1)) == Some(day) {
        format!("Tomorrow, {time}")
    } else {
        format!("{}, {time}", date.format("%d.%m.%Y"))
    }
}

pub fn format_price(price: f64) -> String {
    format!("{price} ₽")
}

pub fn render_dashboard(dashboard: &Dashboard, now: NaiveDateTime) -> String {
    let aggregate = &dashboard.aggregate;
    let mut lines = vec![
        format!(
            "Grooming log: {} records, {} clients, {} upcoming",
            aggregate.total,
            dashboard.client_count(),
            aggregate.future_count
        ),
        String::new(),
        "Next appointment".to_string(),
    ];

    match &dashboard.nearest {
        Some(nearest) => {
            lines.push(format!("  When:   {}", format_date(&nearest.date, now)));
            lines.push(format!("  Client: {}", nearest.client_name));
            if !nearest.pet_name.is_empty() {
                lines.push(format!("  Pet:    {}", nearest.pet_name));
            }
            lines.push(format!("  Price:  {}", format_price(nearest.price)));
            if !nearest.comment.is_empty() {
                lines.push(format!("  Note:   {}", nearest.comment));
            }
        }
        None => lines.push("  No upcoming appointments. Add a record to get started.".to_string()),
    }

    lines.push(String::new());
    lines.push("Statistics".to_string());
    lines.push(format!("  Total records: {}", aggregate.total));
    lines.push(format!("  Upcoming:      {}", aggregate.future_count));
    lines.push(format!("  Revenue:       {}", format_price(aggregate.revenue)));

    if !dashboard.recent.is_empty() {
        lines.push(String::new());
        lines.push("Recent records".to_string());
        lines.extend(dashboard.recent.iter().map(|a| render_row(a, now)));
    }

    lines.join("\n")
}

pub fn render_history(history: &ClientHistory, now: NaiveDateTime) -> String {
    let mut lines = vec![
        format!("Client: {}", history.client_name),
        format!("  Visits: {}", history.total_visits),
        format!("  Spent:  {}", format_price(history.total_spent)),
        String::new(),
    ];

    if history.appointments.is_empty() {
        lines.push("  No records for this client.".to_string());
    } else {
        for appointment in &history.appointments {
            lines.push(render_row(appointment, now));
            if !appointment.comment.is_empty() {
                lines.push(format!("      {}", appointment.comment));
            }
        }
    }

    lines.join("\n")
}

fn render_row(appointment: &Appointment, now: NaiveDateTime) -> String {
    let who = if appointment.pet_name.is_empty() {
        appointment.client_name.clone()
    } else {
        format!("{} ({})", appointment.client_name, appointment.pet_name)
    };
    format!(
        "  {} | {} | {}",
        format_date(&appointment.date, now),
        who,
        format_price(appointment.price)
    )
}
