use filegate_utils::is_hidden;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Terminal folder picker: the subdirectories of one directory and a cursor.
#[derive(Debug, Clone, Default)]
pub struct FolderBrowser {
    current: PathBuf,
    entries: Vec<PathBuf>,
    selected: usize,
}

impl FolderBrowser {
    /// Opens at `dir`, or at its nearest existing ancestor.
    #[must_use]
    pub fn open(dir: &Path) -> Self {
        let current = dir
            .ancestors()
            .find(|p| p.is_dir())
            .map_or_else(|| dir.to_path_buf(), Path::to_path_buf);

        let mut browser = Self {
            current,
            entries: Vec::new(),
            selected: 0,
        };
        browser.refresh();
        browser
    }

    #[must_use]
    pub fn current(&self) -> &Path {
        &self.current
    }

    #[must_use]
    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    #[must_use]
    pub const fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn selected_entry(&self) -> Option<&Path> {
        self.entries.get(self.selected).map(PathBuf::as_path)
    }

    pub fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected + 1 < self.entries.len() {
            self.selected += 1;
        }
    }

    /// Descends into the highlighted subdirectory.
    pub fn enter_selected(&mut self) {
        if let Some(entry) = self.selected_entry().map(Path::to_path_buf) {
            self.current = entry;
            self.refresh();
        }
    }

    /// Moves to the parent directory, highlighting the one we came from.
    pub fn go_parent(&mut self) {
        let Some(parent) = self.current.parent().map(Path::to_path_buf) else {
            return;
        };
        let previous = std::mem::replace(&mut self.current, parent);
        self.refresh();
        if let Some(index) = self.entries.iter().position(|e| *e == previous) {
            self.selected = index;
        }
    }

    fn refresh(&mut self) {
        self.selected = 0;
        self.entries = match list_subdirectories(&self.current) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Failed to list {:?}: {}", self.current, e);
                Vec::new()
            }
        };
    }
}

fn list_subdirectories(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(std::result::Result::ok)
        .map(|e| e.path())
        .filter(|p| !is_hidden(p))
        .filter(|p| p.is_dir())
        .collect();
    entries.sort();
    Ok(entries)
}
