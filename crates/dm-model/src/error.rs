use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("subject identifier must not be empty")]
    EmptySubjectId,
}
