use std::num::NonZeroU32;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    aggregator::{gather_for_terms, DEFAULT_PER_TERM_COUNT},
    catalog,
    outside::FootageCatalog,
    result::Result,
    sampler::{sample, Shuffler, ThreadShuffler},
    selector::select_best_variant,
    types::{FileVariant, Orientation, Topic, VideoCandidate},
};

/// Settings shared by every acquisition of a service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquisitionOptions {
    pub per_term_count: NonZeroU32,
    pub orientation: Orientation,
}

impl Default for AcquisitionOptions {
    fn default() -> Self {
        Self {
            per_term_count: DEFAULT_PER_TERM_COUNT,
            orientation: Orientation::Portrait,
        }
    }
}

/// A sampled candidate along with the file chosen for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PickedClip {
    pub candidate: VideoCandidate,
    pub variant: FileVariant,
}

/// Entry point to acquire background footage by topic.
///
/// Holds no state between calls: every call builds its own candidate pool.
#[derive(Debug)]
pub struct FootageService<C, S = ThreadShuffler> {
    catalog: C,
    shuffler: S,
    options: AcquisitionOptions,
}

impl<C: FootageCatalog> FootageService<C> {
    pub fn new(catalog: C, options: AcquisitionOptions) -> Self {
        Self::with_shuffler(catalog, ThreadShuffler, options)
    }
}

impl<C: FootageCatalog, S: Shuffler> FootageService<C, S> {
    pub fn with_shuffler(catalog: C, shuffler: S, options: AcquisitionOptions) -> Self {
        Self {
            catalog,
            shuffler,
            options,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Return up to `count` random candidates for the topic.
    ///
    /// `custom_query` is the search term of the custom topic, ignored otherwise.
    /// Fails only if the topic cannot be resolved: catalog failures are
    /// skipped term by term, and an empty result means nothing was found.
    pub fn get_videos_by_category(
        &self,
        topic_id: &str,
        count: usize,
        custom_query: Option<&str>,
    ) -> Result<Vec<VideoCandidate>> {
        let terms = catalog::search_terms(topic_id, custom_query)?;
        debug!("Topic '{topic_id}' resolved to {terms:?}");

        let pool = gather_for_terms(
            &self.catalog,
            &terms,
            self.options.per_term_count,
            self.options.orientation,
        );
        info!("{} candidates found for topic '{topic_id}'", pool.len());

        Ok(sample(pool, count, &self.shuffler))
    }

    /// Sample candidates for the topic and choose the file closest to `target_width` for each
    pub fn pick(
        &self,
        topic_id: &str,
        count: usize,
        custom_query: Option<&str>,
        target_width: u32,
    ) -> Result<Vec<PickedClip>> {
        let candidates = self.get_videos_by_category(topic_id, count, custom_query)?;

        Ok(candidates
            .into_iter()
            .filter_map(|candidate| {
                let variant = get_best_video_file(&candidate, target_width)?.clone();
                Some(PickedClip { candidate, variant })
            })
            .collect())
    }
}

/// Choose the file of the candidate closest to `target_width`. None if it has no file.
pub fn get_best_video_file(candidate: &VideoCandidate, target_width: u32) -> Option<&FileVariant> {
    select_best_variant(candidate, target_width)
}

/// Every topic that can be given to [`FootageService::get_videos_by_category`]
pub fn list_topics() -> &'static [Topic] {
    catalog::list_topics()
}
