use crate::{
    errors::{FileOperation, IoError},
    layout::{Layout, GITKEEP},
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(ds_skeleton::scaffold::io))]
    Io(#[from] IoError),
}

/// Counts of what a [`Scaffolder::run`] touched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub directories: usize,
    pub files: usize,
    pub markers: usize,
}

/// Materializes a [`Layout`] below `root`.
///
/// Directory creation is idempotent. File creation is not content-preserving:
/// every declared file is truncated and rewritten on each run, so edits made to
/// scaffolded files are lost when the scaffolder runs again. Nothing is rolled
/// back on failure; re-running after fixing the cause is the recovery path.
#[derive(Debug, Clone)]
pub struct Scaffolder {
    root: PathBuf,
    layout: Layout,
}
impl Scaffolder {
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self::with_layout(root, Layout::default())
    }

    pub fn with_layout<P: Into<PathBuf>>(root: P, layout: Layout) -> Self {
        Self {
            root: root.into(),
            layout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Ensures every declared directory exists and marks the empty ones with `.gitkeep`.
    ///
    /// Directories that receive a declared file are never marked, because
    /// [`Scaffolder::create_files`] is about to fill them. Returns the number of
    /// markers placed.
    pub fn create_directories(&self) -> Result<usize, ScaffoldError> {
        let mut markers = 0;

        for directory in &self.layout.directories {
            let full_path = self.root.join(directory);

            create_directory(&full_path)?;

            if self.layout.receives_files(directory) {
                log::debug!("{} receives files, no marker needed", directory.display());
                continue;
            }

            if is_empty_dir(&full_path)? {
                write_file(&full_path.join(GITKEEP), "", "keep")?;
                markers += 1;
            } else {
                log::debug!("{} is not empty, skipping marker", full_path.display());
            }
        }

        Ok(markers)
    }

    /// Writes every declared file, creating parent directories as needed.
    ///
    /// Existing files at the same paths are truncated. Returns the number of files written.
    pub fn create_files(&self) -> Result<usize, ScaffoldError> {
        let mut written = 0;

        for (file_path, contents) in self.layout.resolved_files() {
            let full_path = self.root.join(file_path);

            if let Some(parent) = full_path.parent() {
                create_directory(parent)?;
            }

            log::debug!("{} resolved to {} bytes", file_path.display(), contents.len());

            write_file(&full_path, &contents, "create")?;
            written += 1;
        }

        Ok(written)
    }

    /// Creates directories, then files, printing progress to stdout.
    pub fn run(&self) -> Result<Summary, ScaffoldError> {
        if self.root.as_path() == Path::new(".") {
            println!("Creating project structure in the current directory...");
        } else {
            println!(
                "Creating project structure in '{}'...",
                self.root.display()
            );
        }

        let markers = self.create_directories()?;
        let files = self.create_files()?;

        let summary = Summary {
            directories: self.layout.directories.len(),
            files,
            markers,
        };
        log::debug!("{:?}", summary);

        println!("\nProject structure created successfully.");
        println!("Next steps:");
        println!("1. Place your raw CSV files in the 'data/01_raw/' folder.");
        println!("2. Initialize a git repository with 'git init'.");

        Ok(summary)
    }
}

/// Creates `path` and any missing parents. Succeeds if it already exists.
fn create_directory(path: &Path) -> Result<(), IoError> {
    std::fs::create_dir_all(path)
        .map_err(|error| IoError::new(FileOperation::Mkdir, path.into(), error))
}

/// Truncates or creates `path` and writes `contents` to it.
fn write_file(path: &Path, contents: &str, verb: &str) -> Result<(), IoError> {
    std::fs::write(path, contents)
        .map_err(|error| IoError::new(FileOperation::Write, path.into(), error))?;

    println!("{} {}", verb.green(), path.display());

    Ok(())
}

fn is_empty_dir(path: &Path) -> Result<bool, IoError> {
    let mut children = WalkDir::new(path).min_depth(1).max_depth(1).into_iter();

    match children.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(error)) => {
            let failed = error.path().unwrap_or(path).to_path_buf();

            Err(IoError::new(FileOperation::List, failed, error.into()))
        }
    }
}
