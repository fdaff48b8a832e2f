use std::path::{Path, PathBuf};

use heck::ToKebabCase;
use tempfile::NamedTempFile;

use crate::result::{bail, Result};

/// Build a file stem out of a search term and a candidate id.
/// e.g. ("Beach Waves", "42") -> "beach-waves-42"
pub fn clip_stem(term: &str, candidate_id: &str) -> String {
    let term = term.to_kebab_case();
    if term.is_empty() {
        candidate_id.to_kebab_case()
    } else {
        format!("{term}-{}", candidate_id.to_kebab_case())
    }
}

pub fn find_unused_path(out_dir: &Path, stem: &str, extension: &str) -> Result<PathBuf> {
    let mut output = out_dir.to_path_buf();

    // Format for 1st file: <stem>.<ext>
    output.push(format!("{stem}.{extension}"));
    if !output.exists() {
        return Ok(output);
    }

    // Format for 2nd file and up: <stem> (<count>).<ext>
    for n in 2u16.. {
        output.set_file_name(format!("{stem} ({n}).{extension}"));
        if !output.exists() {
            return Ok(output);
        }
    }

    bail("Code is broken or you have really REALLY too much files with the same name")
}

/// Create a named temporary file in the directory and return its handle.
///
/// Keeping it in the output directory makes the final rename stay on one filesystem.
/// The file destructor will be called at the handle drop.
/// **As such, one must not simply get the file path and drop the handle.**
pub fn named_tempfile_in(dir: &Path, extension: &str) -> Result<NamedTempFile> {
    Ok(tempfile::Builder::new()
        .prefix(".reelpick-")
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)?)
}
