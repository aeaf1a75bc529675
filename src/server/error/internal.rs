use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A row written moments ago could not be read back.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("{entity} {id} not found after write")]
    MissingAfterWrite {
        /// Table the row was written to
        entity: &'static str,
        /// Primary key of the row
        id: i32,
    },
}
