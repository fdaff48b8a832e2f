mod catalog;
mod download;
mod pexels;
#[cfg(test)]
pub(crate) mod test_server;

pub use catalog::{FootageCatalog, SearchOptions};
pub use download::{download_clips, download_variant, DownloadReport};
pub use pexels::{parse_search_response, remote_failure, Pexels, DEFAULT_BASE_URL};
