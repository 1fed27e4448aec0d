/// Pack emission — directory layout, serialization, and the per-build
/// write report.
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::document::{Document, JsonStyle};

/// A failed write of one output file. I/O failure on one file does not
/// abort the rest of the builder's files; the failure is recorded in
/// the [`EmitReport`] instead.
#[derive(Debug, Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// What one `build` call actually put on disk, in write order.
///
/// Batch pipelines generating many builders should check
/// [`is_complete`](EmitReport::is_complete) per report rather than
/// assume success.
#[derive(Debug, Default)]
pub struct EmitReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<WriteError>,
}

impl EmitReport {
    /// True when every attempted write succeeded.
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Output category, mapped to a directory under the behavior or
/// resource tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Blocks,
    Entities,
    Items,
    Recipes,
    LootTables,
    ClientEntity,
    Attachables,
    RenderControllers,
    AnimationControllers,
    Textures,
    Texts,
    Ui,
}

impl Category {
    /// (behavior-tree?, directory name) for this category.
    fn layout(&self) -> (bool, &'static str) {
        match self {
            Self::Blocks => (true, "blocks"),
            Self::Entities => (true, "entities"),
            Self::Items => (true, "items"),
            Self::Recipes => (true, "recipes"),
            Self::LootTables => (true, "loot_tables"),
            Self::ClientEntity => (false, "entity"),
            Self::Attachables => (false, "attachables"),
            Self::RenderControllers => (false, "render_controllers"),
            Self::AnimationControllers => (false, "animation_controllers"),
            Self::Textures => (false, "textures"),
            Self::Texts => (false, "texts"),
            Self::Ui => (false, "ui"),
        }
    }
}

/// Writes finalized documents into the pack's directory tree.
///
/// Directories are created as needed; each file is written whole in a
/// single operation (no atomic rename — a crash mid-write can leave a
/// truncated file, an accepted tradeoff for a build-time tool). Two
/// builders whose identifiers derive the same file stem will silently
/// overwrite each other, last writer wins; builders share no state, so
/// the collision is not detected here.
#[derive(Debug, Clone)]
pub struct Emitter {
    out_root: PathBuf,
    behavior_dir: String,
    resource_dir: String,
    style: JsonStyle,
}

impl Emitter {
    pub fn new(out_root: impl Into<PathBuf>) -> Emitter {
        Emitter {
            out_root: out_root.into(),
            behavior_dir: "behavior".to_string(),
            resource_dir: "resources".to_string(),
            style: JsonStyle::Compact,
        }
    }

    /// Rename the behavior tree directory (default `behavior`).
    pub fn behavior_dir(mut self, name: &str) -> Emitter {
        self.behavior_dir = name.to_string();
        self
    }

    /// Rename the resource tree directory (default `resources`).
    pub fn resource_dir(mut self, name: &str) -> Emitter {
        self.resource_dir = name.to_string();
        self
    }

    /// JSON output style (default compact). Applies to every document
    /// this emitter writes; never mixed per file.
    pub fn json_style(mut self, style: JsonStyle) -> Emitter {
        self.style = style;
        self
    }

    /// Full path a document of `category` with `file_name` will land at.
    pub fn path_for(&self, category: Category, file_name: &str) -> PathBuf {
        let (behavior, dir) = category.layout();
        let tree = if behavior {
            &self.behavior_dir
        } else {
            &self.resource_dir
        };
        self.out_root.join(tree).join(dir).join(file_name)
    }

    /// Serialize and write one JSON document, recording the outcome.
    pub fn write_json(
        &self,
        category: Category,
        file_stem: &str,
        document: &Document,
        report: &mut EmitReport,
    ) {
        let path = self.path_for(category, &format!("{}.json", file_stem));
        match document.render(self.style) {
            Ok(text) => self.write_file(path, &text, report),
            Err(err) => report.failed.push(WriteError {
                path,
                source: io::Error::new(io::ErrorKind::InvalidData, err),
            }),
        }
    }

    /// Write one text file (the `.lang` format), recording the outcome.
    pub fn write_text(
        &self,
        category: Category,
        file_name: &str,
        contents: &str,
        report: &mut EmitReport,
    ) {
        let path = self.path_for(category, file_name);
        self.write_file(path, contents, report);
    }

    fn write_file(&self, path: PathBuf, contents: &str, report: &mut EmitReport) {
        if let Err(err) = Self::try_write(&path, contents) {
            report.failed.push(WriteError { path, source: err });
        } else {
            report.written.push(path);
        }
    }

    fn try_write(path: &Path, contents: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, contents)
    }
}
