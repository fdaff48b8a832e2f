use serde::Serialize;

/// Container format preferred when two variants are equally close to the target width
pub const PREFERRED_FORMAT: &str = "mp4";

/// One encoded rendition of a stock video
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileVariant {
    pub width: u32,
    pub height: u32,
    /// Container tag such as `mp4` or `webm`
    pub container_format: String,
    pub url: String,
}

impl FileVariant {
    /// Absolute distance between the variant width and the wanted one
    pub fn width_distance(&self, target_width: u32) -> u32 {
        self.width.abs_diff(target_width)
    }

    pub fn is_preferred_format(&self) -> bool {
        self.container_format.eq_ignore_ascii_case(PREFERRED_FORMAT)
    }
}

/// One stock video returned by the footage catalog.
///
/// `variants` keeps the catalog order, which is not sorted by resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoCandidate {
    pub id: String,
    pub variants: Vec<FileVariant>,

    /// Length of the clip in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Catalog page of the video, used for attribution
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl VideoCandidate {
    pub fn new(id: impl Into<String>, variants: Vec<FileVariant>) -> Self {
        Self {
            id: id.into(),
            variants,
            duration: None,
            page_url: None,
            preview_image: None,
            author: None,
        }
    }

    /// A candidate without any variant cannot be downloaded
    pub fn is_downloadable(&self) -> bool {
        !self.variants.is_empty()
    }
}
