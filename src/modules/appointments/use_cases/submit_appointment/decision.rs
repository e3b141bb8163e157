#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("client name is required")]
    MissingClientName,

    #[error("price is required")]
    MissingPrice,

    #[error("price must be a non-negative number, got {0:?}")]
    InvalidPrice(String),

    #[error("date is required")]
    MissingDate,
}

/// Which record a submit writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitTarget {
    New { id: String },
    Existing { id: String },
}
