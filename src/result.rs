use std::fmt::Display;

use miette::miette;

/// Fallback detail when the catalog gave nothing better to report
pub const GENERIC_REMOTE_DETAIL: &str = "Request to the footage catalog failed";

#[derive(Debug)]
pub enum Error {
    /// The footage catalog could not be reached or answered with a failure.
    /// `status` is the HTTP status when a response was received.
    RemoteService { status: Option<u16>, detail: String },

    /// No catalog entry has this topic id
    UnknownTopic(String),

    /// The custom topic was requested without a usable query
    MissingCustomQuery,

    Miette(miette::Report),
}

impl Error {
    pub fn remote(status: Option<u16>, detail: impl Into<String>) -> Self {
        let detail = detail.into();
        let detail = if detail.trim().is_empty() {
            GENERIC_REMOTE_DETAIL.to_owned()
        } else {
            detail
        };

        Error::RemoteService { status, detail }
    }

    pub fn wrap_err_with<D, F>(self, f: F) -> Error
    where
        D: Display + Send + Sync + 'static,
        F: FnOnce() -> D,
    {
        match self {
            Error::Miette(report) => Error::Miette(report.wrap_err(f())),
            err => err,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::RemoteService {
                status: Some(status),
                detail,
            } => write!(f, "Remote service error (HTTP {status}): {detail}"),
            Error::RemoteService {
                status: None,
                detail,
            } => write!(f, "Remote service error: {detail}"),
            Error::UnknownTopic(id) => write!(f, "Unknown topic '{id}'"),
            Error::MissingCustomQuery => {
                write!(f, "The custom topic needs a non-empty search query")
            }
            Error::Miette(report) => write!(f, "{report}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<miette::Report> for Error {
    fn from(err: miette::Report) -> Self {
        Error::Miette(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Miette(miette!("{err}"))
    }
}

impl From<Error> for miette::Report {
    fn from(err: Error) -> Self {
        match err {
            Error::Miette(err) => err,
            err => miette!("{err}"),
        }
    }
}

pub fn bail<T, D>(msg: D) -> Result<T>
where
    D: Display + std::fmt::Debug + Send + Sync + 'static,
{
    Err(Error::Miette(miette!("{msg}")))
}

pub type Result<T> = std::result::Result<T, Error>;
