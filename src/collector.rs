//! Folder discovery: find directories that directly contain audio files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Walk the given roots and group audio files by their parent directory.
///
/// Files inside a folder are listed in lexical order, which fixes the input
/// order the suggestion engine sees (vote counting and sort tie-breaks are
/// stable over it). Hidden files and directories are skipped.
pub fn discover_folders(roots: &[PathBuf], extensions: &[String]) -> Vec<(PathBuf, Vec<PathBuf>)> {
    let mut folders: BTreeMap<PathBuf, Vec<PathBuf>> = BTreeMap::new();

    for root in roots {
        for entry in WalkDir::new(root)
            .follow_links(true)
            .into_iter()
            .filter_entry(|e| !is_hidden(e))
            .filter_map(|e| e.ok())
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
                continue;
            };
            let ext = ext.to_lowercase();
            if extensions.iter().any(|allowed| *allowed == ext) {
                let parent = path.parent().unwrap_or(Path::new("")).to_path_buf();
                folders.entry(parent).or_default().push(path.to_path_buf());
            }
        }
    }

    folders
        .into_iter()
        .map(|(folder, mut files)| {
            files.sort();
            (folder, files)
        })
        .collect()
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn exts() -> Vec<String> {
        vec!["mp3".to_string(), "flac".to_string()]
    }

    #[test]
    fn test_discover_groups_by_parent_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let book = dir.path().join("book");
        fs::create_dir(&book).unwrap();
        for name in ["02.mp3", "01.mp3", "cover.jpg", "notes.txt"] {
            fs::write(book.join(name), b"").unwrap();
        }

        let folders = discover_folders(&[dir.path().to_path_buf()], &exts());
        assert_eq!(folders.len(), 1);
        let (folder, files) = &folders[0];
        assert_eq!(folder, &book);
        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["01.mp3", "02.mp3"]);
    }

    #[test]
    fn test_hidden_entries_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("._junk.mp3"), b"").unwrap();
        fs::write(dir.path().join("real.mp3"), b"").unwrap();
        let hidden = dir.path().join(".cache");
        fs::create_dir(&hidden).unwrap();
        fs::write(hidden.join("stale.mp3"), b"").unwrap();

        let folders = discover_folders(&[dir.path().to_path_buf()], &exts());
        assert_eq!(folders.len(), 1);
        assert_eq!(folders[0].1.len(), 1);
        assert!(folders[0].1[0].ends_with("real.mp3"));
    }
}
