use crate::{
    layout::Layout,
    preview::preview_as_tree,
    prompt::{self, apply_changes},
    scaffold::{self, Scaffolder, Summary},
};
use std::path::PathBuf;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SkeletonError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] scaffold::ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Prompt(#[from] prompt::PromptError),
}

/// How [`scaffold`] should behave before touching the disk.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write straight away.
    #[default]
    Write,
    /// Show the planned tree and ask before writing.
    Preview,
    /// Show the planned tree and stop.
    DryRun,
}

/// What a call to [`scaffold`] ended up doing.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Created(Summary),
    Previewed,
    Canceled,
}

/// Scaffolds the data-science skeleton into `destination`.
///
/// # Errors
///
/// Returns a [`SkeletonError`] if:
///
/// - A directory or file cannot be created or written to.
/// - A declared file collides with an existing directory, or the reverse.
/// - The confirmation prompt cannot be shown (only in [`Mode::Preview`]).
pub fn scaffold(destination: &str, mode: Mode) -> Result<Outcome, SkeletonError> {
    let scaffolder = Scaffolder::with_layout(PathBuf::from(destination), Layout::default());

    log::debug!(
        "scaffolding {} in {:?} mode",
        scaffolder.root().display(),
        mode
    );

    match mode {
        Mode::Write => {}
        Mode::DryRun => {
            preview_as_tree(scaffolder.layout(), scaffolder.root());

            return Ok(Outcome::Previewed);
        }
        Mode::Preview => {
            preview_as_tree(scaffolder.layout(), scaffolder.root());

            if !apply_changes()? {
                println!("Nothing was written.");

                return Ok(Outcome::Canceled);
            }
        }
    }

    let summary = scaffolder.run()?;

    Ok(Outcome::Created(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dry_run_writes_nothing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let destination = temp.path().join("project");
        let destination = destination.to_str().expect("utf-8 path");

        let outcome = scaffold(destination, Mode::DryRun).expect("dry run");

        assert_eq!(outcome, Outcome::Previewed);
        assert!(!temp.path().join("project").exists());
    }

    #[test]
    fn write_mode_creates_the_skeleton() {
        let temp = tempfile::tempdir().expect("tempdir");
        let destination = temp.path().to_str().expect("utf-8 path");

        let outcome = scaffold(destination, Mode::Write).expect("scaffold");

        assert_eq!(
            outcome,
            Outcome::Created(Summary {
                directories: 7,
                files: 12,
                markers: 5,
            })
        );
        assert!(temp.path().join("data/03_processed/.gitkeep").is_file());
    }
}
