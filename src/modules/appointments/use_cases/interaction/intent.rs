// User intents forwarded by the rendering layer.
//
// - Form field intents carry the full new field text, not a keystroke.
// - Record-level intents (edit, delete, history) carry the record id or client name.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    OpenNewForm,
    Edit { id: String },
    Cancel,
    Submit,

    SetDate(String),
    TypeClientName(String),
    FocusClientName,
    BlurClientName,
    PickSuggestion(String),
    SetPetName(String),
    SetPrice(String),
    SetComment(String),

    RequestDelete { id: String },
    ConfirmDelete,
    DeclineDelete,

    BrowseHistory { client: Option<String> },
    SelectClient(String),
    Back,
}

impl Intent {
    pub fn name(&self) -> &'static str {
        match self {
            Self::OpenNewForm => "OpenNewForm",
            Self::Edit { .. } => "Edit",
            Self::Cancel => "Cancel",
            Self::Submit => "Submit",
            Self::SetDate(_) => "SetDate",
            Self::TypeClientName(_) => "TypeClientName",
            Self::FocusClientName => "FocusClientName",
            Self::BlurClientName => "BlurClientName",
            Self::PickSuggestion(_) => "PickSuggestion",
            Self::SetPetName(_) => "SetPetName",
            Self::SetPrice(_) => "SetPrice",
            Self::SetComment(_) => "SetComment",
            Self::RequestDelete { .. } => "RequestDelete",
            Self::ConfirmDelete => "ConfirmDelete",
            Self::DeclineDelete => "DeclineDelete",
            Self::BrowseHistory { .. } => "BrowseHistory",
            Self::SelectClient(_) => "SelectClient",
            Self::Back => "Back",
        }
    }
}
