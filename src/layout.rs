//! Static description of the data-science project skeleton.
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Reserved file name that receives [`GITIGNORE_CONTENT`] instead of its declared content.
pub const GITIGNORE_PATH: &str = ".gitignore";
/// Marker dropped into declared directories that would otherwise stay empty.
pub const GITKEEP: &str = ".gitkeep";

pub const DIRECTORIES: &[&str] = &[
    "data/01_raw",
    "data/02_intermediate",
    "data/03_processed",
    "models",
    "notebooks",
    "reports/figures",
    "src",
];

pub const FILES: &[(&str, Option<&str>)] = &[
    (GITIGNORE_PATH, None),
    (
        "README.md",
        Some("# Improved Fraud Detection System\n\nProject overview and setup instructions will go here."),
    ),
    (
        "requirements.txt",
        Some("pandas\nnumpy\nscikit-learn\nmatplotlib\nseaborn\nlightgbm\nxgboost\nshap\njoblib\n"),
    ),
    ("notebooks/01_ecommerce_eda_and_preprocessing.ipynb", None),
    ("notebooks/02_creditcard_eda_and_preprocessing.ipynb", None),
    ("notebooks/03_modelling_and_evaluation.ipynb", None),
    ("notebooks/04_model_interpretation_with_shap.ipynb", None),
    ("reports/Interim_1_Report.md", Some("# Interim Report 1")),
    ("src/__init__.py", None),
    (
        "src/data_processing.py",
        Some("# Functions for loading and cleaning data\n"),
    ),
    (
        "src/feature_engineering.py",
        Some("# Functions for creating new features\n"),
    ),
    (
        "src/modelling.py",
        Some("# Functions for training and evaluating models\n"),
    ),
];

pub const GITIGNORE_CONTENT: &str = r#"
# Byte-compiled / optimized / DLL files
__pycache__/
*.py[cod]
*$py.class

# C extensions
*.so

# Distribution / packaging
.Python
build/
develop-eggs/
dist/
downloads/
eggs/
.eggs/
lib/
lib64/
parts/
sdist/
var/
wheels/
*.egg-info/
.installed.cfg
*.egg
MANIFEST

# PyInstaller
*.manifest
*.spec

# Installer logs
pip-log.txt
pip-delete-this-directory.txt

# Unit test / coverage reports
htmlcov/
.tox/
.nox/
.coverage
.coverage.*
.cache
nosetests.xml
coverage.xml
*.cover
.hypothesis/
.pytest_cache/

# Environments
.env
.venv
env/
venv/
ENV/
env.bak/
venv.bak/

# Jupyter Notebook
.ipynb_checkpoints

# Data and Models - often large and not version controlled
# Use .gitkeep to ensure the directories are tracked by git
data/01_raw/*
!data/01_raw/.gitkeep
data/02_intermediate/*
!data/02_intermediate/.gitkeep
data/03_processed/*
!data/03_processed/.gitkeep
models/*
!models/.gitkeep

# IDE settings
.idea/
.vscode/
"#;

/// Resolves what ends up on disk for a declared file.
///
/// - the reserved `.gitignore` path gets [`GITIGNORE_CONTENT`] trimmed on both ends,
///   without a trailing newline
/// - non-empty declared content is trimmed at the end and terminated by exactly one `\n`
/// - anything else becomes an empty file
pub fn resolve_content(path: &Path, declared: Option<&str>) -> String {
    if path == Path::new(GITIGNORE_PATH) {
        return GITIGNORE_CONTENT.trim().to_string();
    }

    match declared {
        Some(content) if !content.is_empty() => format!("{}\n", content.trim_end()),
        _ => String::new(),
    }
}

/// Kind of a node in the planned skeleton, see [`Layout::entries`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    Marker,
}

/// The directories and files to materialize, relative to a project root.
#[derive(Debug, Clone)]
pub struct Layout {
    pub directories: Vec<PathBuf>,
    pub files: IndexMap<PathBuf, Option<String>>,
}
impl Layout {
    pub fn new<D, F, P, C>(directories: D, files: F) -> Self
    where
        D: IntoIterator<Item = P>,
        F: IntoIterator<Item = (P, Option<C>)>,
        P: Into<PathBuf>,
        C: Into<String>,
    {
        Self {
            directories: directories.into_iter().map(Into::into).collect(),
            // IndexMap keeps the first position of a repeated key and the last value
            files: files
                .into_iter()
                .map(|(path, content)| (path.into(), content.map(Into::into)))
                .collect(),
        }
    }

    /// Final content of every declared file, in declaration order.
    pub fn resolved_files(&self) -> impl Iterator<Item = (&Path, String)> + '_ {
        self.files
            .iter()
            .map(|(path, declared)| (path.as_path(), resolve_content(path, declared.as_deref())))
    }

    /// Whether a declared file lands directly inside `directory`.
    pub fn receives_files(&self, directory: &Path) -> bool {
        self.files
            .keys()
            .any(|file| file.parent().map(|parent| parent == directory).unwrap_or(false))
    }

    /// Every path the skeleton declares, plus the markers a fresh run would place.
    pub fn entries(&self) -> Vec<(PathBuf, EntryKind)> {
        let mut entries = Vec::new();

        for directory in &self.directories {
            entries.push((directory.clone(), EntryKind::Directory));

            if !self.receives_files(directory) {
                entries.push((directory.join(GITKEEP), EntryKind::Marker));
            }
        }

        for path in self.files.keys() {
            entries.push((path.clone(), EntryKind::File));
        }

        entries
    }
}
impl Default for Layout {
    fn default() -> Self {
        Self::new(DIRECTORIES.iter().copied(), FILES.iter().copied())
    }
}
