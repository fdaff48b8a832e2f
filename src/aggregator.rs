use std::num::NonZeroU32;

use tracing::{debug, warn};

use crate::{
    outside::{FootageCatalog, SearchOptions},
    types::{Orientation, VideoCandidate},
    utils::non_zero,
};

/// Default number of results asked for each term
pub const DEFAULT_PER_TERM_COUNT: NonZeroU32 = non_zero(10);

/// Search every term one after the other and merge the results.
///
/// A failing term is logged and skipped, so this never fails: if every term fails
/// the pool is simply empty. The pool keeps the term order, then the catalog order.
/// Candidates without any variant are left out. Duplicates across terms are kept.
pub fn gather_for_terms<C: FootageCatalog>(
    catalog: &C,
    terms: &[String],
    per_term_count: NonZeroU32,
    orientation: Orientation,
) -> Vec<VideoCandidate> {
    let options = SearchOptions {
        results_per_page: per_term_count,
        orientation,
        ..SearchOptions::default()
    };

    let mut pool = Vec::new();
    for term in terms {
        match catalog.search(term, &options) {
            Ok(candidates) => {
                let found = candidates.len();
                pool.extend(candidates.into_iter().filter(VideoCandidate::is_downloadable));
                debug!("'{term}': {found} candidates, pool is now {} long", pool.len());
            }
            Err(err) => warn!("Search for '{term}' failed, skipping it: {err}"),
        }
    }

    pool
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, collections::HashMap};

    use super::*;
    use crate::{
        result::{Error, Result},
        types::FileVariant,
    };

    /// Catalog answering from a fixed table, recording every query it receives
    #[derive(Default)]
    pub struct ScriptedCatalog {
        pub answers: HashMap<String, Result<Vec<VideoCandidate>>>,
        pub queries: RefCell<Vec<(String, SearchOptions)>>,
    }

    impl ScriptedCatalog {
        pub fn with(mut self, term: &str, answer: Result<Vec<VideoCandidate>>) -> Self {
            self.answers.insert(term.to_owned(), answer);
            self
        }
    }

    impl FootageCatalog for ScriptedCatalog {
        fn search(&self, term: &str, options: &SearchOptions) -> Result<Vec<VideoCandidate>> {
            self.queries.borrow_mut().push((term.to_owned(), *options));
            match self.answers.get(term) {
                Some(Ok(candidates)) => Ok(candidates.clone()),
                Some(Err(Error::RemoteService { status, detail })) => {
                    Err(Error::remote(*status, detail.clone()))
                }
                Some(Err(_)) | None => Err(Error::remote(Some(404), "no such term")),
            }
        }
    }

    pub fn mp4_candidate(id: &str) -> VideoCandidate {
        VideoCandidate::new(
            id,
            vec![FileVariant {
                width: 1080,
                height: 1920,
                container_format: "mp4".into(),
                url: format!("https://cdn.example/{id}.mp4"),
            }],
        )
    }

    fn ids(pool: &[VideoCandidate]) -> Vec<&str> {
        pool.iter().map(|c| c.id.as_str()).collect()
    }

    fn terms(terms: &[&str]) -> Vec<String> {
        terms.iter().map(|&t| t.to_owned()).collect()
    }

    #[test]
    fn merges_in_term_order() {
        let catalog = ScriptedCatalog::default()
            .with("a", Ok(vec![mp4_candidate("a1"), mp4_candidate("a2")]))
            .with("b", Ok(vec![mp4_candidate("b1")]));

        let terms = terms(&["b", "a"]);
        let pool = gather_for_terms(&catalog, &terms, non_zero(10), Orientation::Portrait);
        assert_eq!(ids(&pool), vec!["b1", "a1", "a2"]);
    }

    #[test]
    fn forwards_count_and_orientation() {
        let catalog = ScriptedCatalog::default().with("a", Ok(vec![]));
        gather_for_terms(&catalog, &terms(&["a"]), non_zero(7), Orientation::Landscape);

        let queries = catalog.queries.borrow();
        assert_eq!(queries.len(), 1);
        assert_eq!(queries[0].1.results_per_page.get(), 7);
        assert_eq!(queries[0].1.page.get(), 1);
        assert_eq!(queries[0].1.orientation, Orientation::Landscape);
    }

    #[test]
    fn failing_term_is_skipped() {
        let catalog = ScriptedCatalog::default()
            .with("a", Ok(vec![mp4_candidate("a1")]))
            .with("b", Err(Error::remote(Some(500), "boom")))
            .with("c", Ok(vec![mp4_candidate("c1")]));

        let terms = terms(&["a", "b", "c"]);
        let pool = gather_for_terms(&catalog, &terms, non_zero(10), Orientation::Portrait);
        assert_eq!(ids(&pool), vec!["a1", "c1"]);
        assert_eq!(catalog.queries.borrow().len(), 3);
    }

    #[test]
    fn all_terms_failing_is_empty() {
        let catalog = ScriptedCatalog::default();
        let terms = terms(&["x", "y"]);
        let pool = gather_for_terms(&catalog, &terms, non_zero(10), Orientation::Portrait);
        assert!(pool.is_empty());
    }

    #[test]
    fn keeps_duplicates_and_drops_undownloadable() {
        let catalog = ScriptedCatalog::default()
            .with("a", Ok(vec![mp4_candidate("same"), VideoCandidate::new("empty", vec![])]))
            .with("b", Ok(vec![mp4_candidate("same")]));

        let terms = terms(&["a", "b"]);
        let pool = gather_for_terms(&catalog, &terms, non_zero(10), Orientation::Portrait);
        assert_eq!(ids(&pool), vec!["same", "same"]);
    }
}
