#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    InvalidInput(String),
    InvalidConfig(String),
    Logging(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => {
                write!(f, "Invalid input: {}", msg)
            }
            DomainError::InvalidConfig(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            DomainError::Logging(msg) => {
                write!(f, "Logging setup failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for DomainError {}

pub type DomainResult<T> = Result<T, DomainError>;
