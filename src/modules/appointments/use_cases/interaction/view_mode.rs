/// Which screen the controller is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    List,
    FormOpen {
        editing_id: Option<String>,
    },
    HistoryBrowse {
        selected_client: Option<String>,
    },
}

impl ViewMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::FormOpen { .. } => "FormOpen",
            Self::HistoryBrowse { .. } => "HistoryBrowse",
        }
    }

    pub fn is_form_open(&self) -> bool {
        matches!(self, Self::FormOpen { .. })
    }
}
