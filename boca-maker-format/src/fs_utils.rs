//! Small filesystem helpers used while staging and packaging the problems.

use std::fs::File;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Error};
use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Create a directory and all its parents. It's not an error if the directory already exists,
/// but it is if the path exists and it's not a directory.
pub fn make_dir<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    let path = path.as_ref();
    if path.exists() && !path.is_dir() {
        bail!("{} exists but it's not a directory", path.display());
    }
    std::fs::create_dir_all(path)
        .with_context(|| format!("Failed to create directory {}", path.display()))
}

/// Copy recursively the content of `src` inside `dest`, merging the two trees. Files already
/// present in `dest` are overwritten. Symbolic links are followed, the copy contains what they
/// point to.
pub fn copy_dir<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dest: Q) -> Result<(), Error> {
    let src = src.as_ref();
    let dest = dest.as_ref();
    for entry in WalkDir::new(src).follow_links(true).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", src.display()))?;
        let relative = entry.path().strip_prefix(src)?;
        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            make_dir(&target)?;
        } else {
            trace!("Copying {} -> {}", entry.path().display(), target.display());
            std::fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} to {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}

/// Compress the content of `dir` into the zip file `dest`. The paths inside the archive are
/// relative to `dir` and keep their unix permissions, since the BOCA scripts must stay executable.
///
/// When `move_files` is set the archived files are removed from disk, leaving only the (empty)
/// directory structure behind.
pub fn zip_dir<P: AsRef<Path>, Q: AsRef<Path>>(
    dir: P,
    dest: Q,
    move_files: bool,
) -> Result<(), Error> {
    let dir = dir.as_ref();
    let dest = dest.as_ref();
    let file = File::create(dest)
        .with_context(|| format!("Failed to create archive {}", dest.display()))?;
    let mut zip = ZipWriter::new(file);
    let mut archived: Vec<PathBuf> = vec![];

    for entry in WalkDir::new(dir).min_depth(1).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", dir.display()))?;
        let path = entry.path();
        let name = path
            .strip_prefix(dir)?
            .to_str()
            .with_context(|| format!("Invalid path {}", path.display()))?
            .to_owned();
        let mode = entry
            .metadata()
            .with_context(|| format!("Failed to stat {}", path.display()))?
            .permissions()
            .mode();
        let options = SimpleFileOptions::default()
            .compression_method(CompressionMethod::Stored)
            .unix_permissions(mode);
        if entry.file_type().is_dir() {
            zip.add_directory(name, options)?;
        } else {
            zip.start_file(name, options)?;
            let mut source =
                File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
            std::io::copy(&mut source, &mut zip)
                .with_context(|| format!("Failed to archive {}", path.display()))?;
            archived.push(path.to_owned());
        }
    }
    zip.finish()
        .with_context(|| format!("Failed to write archive {}", dest.display()))?;

    if move_files {
        for path in archived {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
        }
    }
    Ok(())
}

/// Remove all the subdirectories of `base` that do not contain any file, directly or inside one
/// of their subdirectories. `base` itself is never removed. Returns the number of removed
/// directories.
pub fn remove_empty_dirs<P: AsRef<Path>>(base: P) -> Result<usize, Error> {
    let base = base.as_ref();
    let mut removed = 0;
    // children come before their parent, so a parent emptied by this loop is removed as well
    for entry in WalkDir::new(base).min_depth(1).contents_first(true) {
        let entry = entry.with_context(|| format!("Failed to walk {}", base.display()))?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let path = entry.path();
        let is_empty = std::fs::read_dir(path)
            .with_context(|| format!("Failed to list {}", path.display()))?
            .next()
            .is_none();
        if is_empty {
            debug!("Removing empty directory {}", path.display());
            std::fs::remove_dir(path)
                .with_context(|| format!("Failed to remove {}", path.display()))?;
            removed += 1;
        }
    }
    Ok(removed)
}
