//! "Saved for offline" shelf: a small key-value store keyed by book id.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use catalog_core::{Item, ItemId};
use engine_logging::{engine_info, engine_warn};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

const SHELF_FILENAME: &str = ".catalog_shelf.ron";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedBook {
    pub id: ItemId,
    pub title: String,
    pub authors: Vec<String>,
}

impl From<&Item> for SavedBook {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            authors: item.authors.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
struct PersistedShelf {
    books: BTreeMap<ItemId, SavedBook>,
}

pub struct Shelf {
    dir: PathBuf,
}

impl Shelf {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(SHELF_FILENAME)
    }

    /// Saved books ordered by id. A missing or unreadable shelf is empty.
    pub fn load(&self) -> Vec<SavedBook> {
        match self.read() {
            Ok(shelf) => shelf.books.into_values().collect(),
            Err(err) => {
                engine_warn!("Failed to load shelf: {:#}", err);
                Vec::new()
            }
        }
    }

    /// Stores `item`, replacing an earlier save of the same id.
    /// Fails without writing when the existing shelf cannot be read.
    pub fn save(&self, item: &Item) -> anyhow::Result<()> {
        let mut shelf = self.read()?;
        shelf.books.insert(item.id, SavedBook::from(item));

        let content = ron::ser::to_string_pretty(&shelf, ron::ser::PrettyConfig::new())?;
        let target = write_atomically(&self.dir, SHELF_FILENAME, &content)?;
        engine_info!("Saved book {} to {:?}", item.id, target);
        Ok(())
    }

    fn read(&self) -> anyhow::Result<PersistedShelf> {
        let path = self.path();
        let content = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Ok(PersistedShelf::default());
            }
            Err(err) => {
                return Err(err).with_context(|| format!("reading shelf {}", path.display()));
            }
        };

        ron::from_str(&content).with_context(|| format!("parsing shelf {}", path.display()))
    }
}

/// Writes `{dir}/{filename}` through a temp file in the same directory and a rename.
fn write_atomically(dir: &Path, filename: &str, content: &str) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let target = dir.join(filename);
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content.as_bytes())?;
    tmp.flush()?;
    tmp.as_file_mut().sync_all()?;
    tmp.persist(&target).map_err(|err| err.error)?;
    Ok(target)
}
