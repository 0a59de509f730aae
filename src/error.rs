/// Everything that can go wrong while building a report.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Could not connect to the statistics service: {0}")]
    Connection(String),

    #[error("Timed out waiting for the statistics service: {0}")]
    Timeout(String),

    #[error("The statistics service answered with HTTP status {0}")]
    BadStatus(u16),

    #[error("Could not read the response from the statistics service: {0}")]
    Protocol(String),

    #[error("An unknown transport error occurred: {0}")]
    UnknownTransport(String),

    #[error("The statistics service returned unexpected data: {0}")]
    Schema(String),

    #[error("Cannot compute a percentile when there are no teams")]
    NoTeams,

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Could not write the report: {0}")]
    Output(#[from] std::io::Error),
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout(e.to_string())
        } else if e.is_connect() {
            Error::Connection(e.to_string())
        } else if let Some(status) = e.status() {
            Error::BadStatus(status.as_u16())
        } else if e.is_decode() || e.is_body() {
            Error::Protocol(e.to_string())
        } else {
            Error::UnknownTransport(e.to_string())
        }
    }
}
