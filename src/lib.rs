//! Acquire background stock footage by topic.
//!
//! A topic resolves to several search terms, each term is searched on the footage
//! catalog, the merged results are randomly sampled, and the file closest to the
//! wanted width is selected for each picked video.

pub mod aggregator;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod io;
pub mod logging;
pub mod outside;
pub mod result;
pub mod sampler;
pub mod selector;
pub mod service;
pub mod types;
mod utils;

pub use catalog::resolve_topic;
pub use outside::{FootageCatalog, Pexels, SearchOptions};
pub use result::{Error, Result};
pub use sampler::{sample, SeededShuffler, Shuffler, ThreadShuffler};
pub use selector::select_best_variant;
pub use service::{
    get_best_video_file, list_topics, AcquisitionOptions, FootageService, PickedClip,
};
pub use types::{FileVariant, Orientation, Topic, TopicTerms, VideoCandidate};
