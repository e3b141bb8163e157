// Interaction controller turns user intents into store mutations and screen changes.
//
// Responsibilities
// - Track the current screen (list, form, history), the form draft, the type-ahead
//   visibility and a pending delete confirmation.
// - On submit, ask the decider for a mutation and apply it to the store.
// - Reject intents that do not belong to the current screen without changing anything.
// - A form opened from the history screen returns there when it closes.
//
// Boundaries
// - Owns the injected store; persistence happens through the store's on-change hook.
// - Derived views are recomputed on demand from the store snapshot.

use crate::modules::appointments::core::appointment::Appointment;
use crate::modules::appointments::core::store::AppointmentStore;
use crate::modules::appointments::core::views::{
    ClientHistory, Dashboard, client_history, recompute, suggestions_for,
};
use crate::modules::appointments::use_cases::interaction::intent::Intent;
use crate::modules::appointments::use_cases::interaction::view_mode::ViewMode;
use crate::modules::appointments::use_cases::submit_appointment::decide::decide_submit;
use crate::modules::appointments::use_cases::submit_appointment::decision::{
    SubmitTarget, ValidationError,
};
use crate::modules::appointments::use_cases::submit_appointment::draft::Draft;
use crate::shared::infrastructure::clock::Clock;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InteractionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("no appointment with id {0}")]
    UnknownAppointment(String),

    #[error("{intent} is not available on {mode}")]
    UnexpectedIntent {
        intent: &'static str,
        mode: &'static str,
    },
}

#[derive(Clone, Copy)]
enum Screen {
    List,
    Form,
    History,
}

pub struct InteractionController<C: Clock> {
    store: AppointmentStore,
    clock: C,
    mode: ViewMode,
    return_to: ViewMode,
    draft: Draft,
    suggestions_visible: bool,
    pending_delete: Option<String>,
}

impl<C: Clock> InteractionController<C> {
    pub fn new(store: AppointmentStore, clock: C) -> Self {
        Self {
            store,
            clock,
            mode: ViewMode::List,
            return_to: ViewMode::List,
            draft: Draft::default(),
            suggestions_visible: false,
            pending_delete: None,
        }
    }

    pub fn mode(&self) -> &ViewMode {
        &self.mode
    }

    pub fn store(&self) -> &AppointmentStore {
        &self.store
    }

    pub fn snapshot(&self) -> &[Appointment] {
        self.store.snapshot()
    }

    /// The form draft, only while the form is open.
    pub fn draft(&self) -> Option<&Draft> {
        self.mode.is_form_open().then_some(&self.draft)
    }

    pub fn pending_delete(&self) -> Option<&str> {
        self.pending_delete.as_deref()
    }

    pub fn suggestions_visible(&self) -> bool {
        self.mode.is_form_open() && self.suggestions_visible
    }

    /// Client names matching the draft's client name, empty while the list is hidden.
    pub fn visible_suggestions(&self) -> Vec<String> {
        if !self.suggestions_visible() {
            return Vec::new();
        }
        suggestions_for(self.store.snapshot(), &self.draft.client_name)
    }

    pub fn dashboard(&self) -> Dashboard {
        recompute(self.store.snapshot(), self.clock.now())
    }

    pub fn selected_history(&self) -> Option<ClientHistory> {
        match &self.mode {
            ViewMode::HistoryBrowse {
                selected_client: Some(client_name),
            } => Some(client_history(self.store.snapshot(), client_name)),
            _ => None,
        }
    }

    pub fn handle(&mut self, intent: Intent) -> Result<(), InteractionError> {
        if let Some(id) = self.pending_delete.clone() {
            return match intent {
                Intent::ConfirmDelete => {
                    self.pending_delete = None;
                    if self.store.remove(&id) {
                        tracing::info!(id = %id, "deleted appointment");
                    }
                    Ok(())
                }
                Intent::DeclineDelete => {
                    self.pending_delete = None;
                    Ok(())
                }
                other => Err(self.unexpected(&other)),
            };
        }

        match (self.screen(), intent) {
            (Screen::List, Intent::OpenNewForm) => {
                let draft = Draft::blank(self.clock.now());
                self.open_form(None, draft);
                Ok(())
            }
            (Screen::List | Screen::History, Intent::Edit { id }) => {
                let draft = self
                    .store
                    .get(&id)
                    .map(Draft::from_appointment)
                    .ok_or_else(|| InteractionError::UnknownAppointment(id.clone()))?;
                self.open_form(Some(id), draft);
                Ok(())
            }
            (Screen::List | Screen::History, Intent::RequestDelete { id }) => {
                self.pending_delete = Some(id);
                Ok(())
            }
            (Screen::List, Intent::BrowseHistory { client }) => {
                self.mode = ViewMode::HistoryBrowse {
                    selected_client: client,
                };
                Ok(())
            }
            (Screen::History, Intent::SelectClient(client_name)) => {
                self.mode = ViewMode::HistoryBrowse {
                    selected_client: Some(client_name),
                };
                Ok(())
            }
            (Screen::History, Intent::Back) => {
                self.mode = ViewMode::List;
                Ok(())
            }
            (Screen::Form, Intent::Cancel) => {
                self.close_form();
                Ok(())
            }
            (Screen::Form, Intent::Submit) => self.submit(),
            (Screen::Form, Intent::SetDate(date)) => {
                self.draft.date = date;
                Ok(())
            }
            (Screen::Form, Intent::TypeClientName(client_name)) => {
                self.suggestions_visible = !client_name.is_empty();
                self.draft.client_name = client_name;
                Ok(())
            }
            (Screen::Form, Intent::FocusClientName) => {
                self.suggestions_visible = !self.draft.client_name.is_empty();
                Ok(())
            }
            (Screen::Form, Intent::BlurClientName) => {
                self.suggestions_visible = false;
                Ok(())
            }
            (Screen::Form, Intent::PickSuggestion(client_name)) => {
                self.draft.client_name = client_name;
                self.suggestions_visible = false;
                Ok(())
            }
            (Screen::Form, Intent::SetPetName(pet_name)) => {
                self.draft.pet_name = pet_name;
                Ok(())
            }
            (Screen::Form, Intent::SetPrice(price)) => {
                self.draft.price = price;
                Ok(())
            }
            (Screen::Form, Intent::SetComment(comment)) => {
                self.draft.comment = comment;
                Ok(())
            }
            (_, other) => Err(self.unexpected(&other)),
        }
    }

    fn submit(&mut self) -> Result<(), InteractionError> {
        let target = match &self.mode {
            ViewMode::FormOpen {
                editing_id: Some(id),
            } => SubmitTarget::Existing { id: id.clone() },
            _ => SubmitTarget::New {
                id: self.store.allocate_id(self.clock.timestamp_millis()),
            },
        };

        let mutation = decide_submit(&self.draft, target).inspect_err(|reason| {
            tracing::debug!(reason = %reason, "submit rejected");
        })?;
        if !self.store.apply(mutation) {
            tracing::debug!("edited appointment no longer exists, nothing saved");
        }
        self.close_form();
        Ok(())
    }

    fn open_form(&mut self, editing_id: Option<String>, draft: Draft) {
        let previous = std::mem::replace(&mut self.mode, ViewMode::FormOpen { editing_id });
        self.return_to = match previous {
            ViewMode::HistoryBrowse { .. } => previous,
            _ => ViewMode::List,
        };
        self.draft = draft;
        self.suggestions_visible = false;
    }

    fn close_form(&mut self) {
        self.mode = std::mem::take(&mut self.return_to);
        self.draft = Draft::default();
        self.suggestions_visible = false;
    }

    fn screen(&self) -> Screen {
        match self.mode {
            ViewMode::List => Screen::List,
            ViewMode::FormOpen { .. } => Screen::Form,
            ViewMode::HistoryBrowse { .. } => Screen::History,
        }
    }

    fn unexpected(&self, intent: &Intent) -> InteractionError {
        let mode = if self.pending_delete.is_some() {
            "PendingDelete"
        } else {
            self.mode.name()
        };
        tracing::debug!(intent = intent.name(), mode, "intent ignored");
        InteractionError::UnexpectedIntent {
            intent: intent.name(),
            mode,
        }
    }
}
