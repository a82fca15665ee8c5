use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS message: {0}")]
    InvalidDnsMessage(String),

    #[error("Downstream handler failed: {0}")]
    Downstream(String),

    #[error("Failed to write response: {0}")]
    SinkWrite(String),

    #[error("No next handler after plugin {0}")]
    NoNextHandler(&'static str),

    #[error("I/O error: {0}")]
    IoError(String),
}
