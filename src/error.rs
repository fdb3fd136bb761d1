use thiserror::Error;

/// Input problems caught before anything touches the database.
///
/// These are always recoverable: the shell re-prompts instead of aborting.
#[derive(Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Date must be 8 digits or YYYYMMDD")]
    DateFormat,
    #[error("Invalid date. Please use a valid date in YYYYMMDD format")]
    DateRange,
    #[error("Amount must be a non-negative number")]
    InvalidAmount,
    #[error("{0} cannot be empty")]
    InvalidLabel(&'static str),
    #[error("Date must be in YYYY-MM-DD format")]
    InvalidDate,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Database error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// An insert affected zero rows, so no generated id exists.
    #[error("Creating {0} record failed, no rows affected")]
    InsertFailed(&'static str),

    #[error("Admin access required")]
    AdminRequired,
}
