use std::path::{Path, PathBuf};

use miette::{Context, IntoDiagnostic};
use reqwest::blocking::Client;
use tracing::{debug, info, trace, warn};

use crate::{
    io::{clip_stem, find_unused_path, named_tempfile_in},
    result::{Error, Result},
    service::PickedClip,
    types::FileVariant,
};

/// Download the variant file into `out_dir`.
///
/// The file is named `<stem>.<format>`, with a counter added if that name is taken.
/// Data is written to a temporary file first so that a failed download
/// never leaves a partial file behind. Return the path of the written file.
pub fn download_variant(
    client: &Client,
    variant: &FileVariant,
    out_dir: &Path,
    stem: &str,
) -> Result<PathBuf> {
    debug!("Downloading {}", variant.url);
    let mut res = client
        .get(&variant.url)
        .send()
        .map_err(|err| Error::remote(None, err.to_string()))?;

    let status = res.status();
    if !status.is_success() {
        return Err(Error::remote(
            Some(status.as_u16()),
            format!("Could not download {}", variant.url),
        ));
    }

    let mut tmp = named_tempfile_in(out_dir, &variant.container_format)?;
    let written = res
        .copy_to(tmp.as_file_mut())
        .map_err(|err| Error::remote(Some(status.as_u16()), err.to_string()))?;
    trace!("{written} bytes written to {}", tmp.path().display());

    let output = find_unused_path(out_dir, stem, &variant.container_format)?;
    tmp.persist(&output)
        .into_diagnostic()
        .wrap_err_with(|| format!("Could not save {}", output.display()))?;

    Ok(output)
}

/// Outcome of downloading several clips
#[derive(Debug, Default)]
pub struct DownloadReport {
    pub saved: Vec<PathBuf>,
    /// Ids of the candidates whose file could not be saved
    pub failed: Vec<String>,
}

/// Download the file of every clip, named after `name` and the candidate id.
///
/// A failed download is logged and skipped, the other clips are still downloaded.
pub fn download_clips(
    client: &Client,
    clips: &[PickedClip],
    out_dir: &Path,
    name: &str,
) -> DownloadReport {
    let mut report = DownloadReport::default();

    for clip in clips {
        let id = &clip.candidate.id;
        match download_variant(client, &clip.variant, out_dir, &clip_stem(name, id)) {
            Ok(path) => {
                info!("Saved {}", path.display());
                report.saved.push(path);
            }
            Err(err) => {
                warn!("Could not download video {id} from {}: {err}", clip.variant.url);
                report.failed.push(id.clone());
            }
        }
    }

    report
}
