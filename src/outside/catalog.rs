use std::num::NonZeroU32;

use crate::{result::Result, types::Orientation, types::VideoCandidate, utils::non_zero};

/// Parameters of a single catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub results_per_page: NonZeroU32,
    /// One-based page index
    pub page: NonZeroU32,
    pub orientation: Orientation,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            results_per_page: non_zero(15),
            page: non_zero(1),
            orientation: Orientation::Portrait,
        }
    }
}

/// Interface for querying a remote stock footage catalog
pub trait FootageCatalog {
    /// Run one query for the term and return the candidates of the requested page.
    ///
    /// An empty page is not an error. Failures of the remote service are returned
    /// as [`crate::result::Error::RemoteService`].
    ///
    /// Implementations **must not** retry or cache on their own.
    fn search(&self, term: &str, options: &SearchOptions) -> Result<Vec<VideoCandidate>>;
}

impl<C: FootageCatalog + ?Sized> FootageCatalog for &C {
    fn search(&self, term: &str, options: &SearchOptions) -> Result<Vec<VideoCandidate>> {
        (**self).search(term, options)
    }
}
