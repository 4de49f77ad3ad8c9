use camino::Utf8PathBuf;

/// Identity and introspection failures. "Not a repository" and "git is
/// missing" are distinct cases so callers never mistake one for the other.
#[derive(Debug, thiserror::Error)]
pub enum GitError {
    #[error("not a git repository")]
    NotARepository,

    #[error("git was not found in the local environment")]
    GitUnavailable,

    #[error("unparseable repository url: {0}")]
    UnparseableUrl(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Failures of the clone operation, in the order its phases can raise them.
#[derive(Debug, thiserror::Error)]
pub enum CloneError {
    #[error("not an empty directory: {0}")]
    DirectoryNotEmpty(Utf8PathBuf),

    #[error("a repository already exists at {0}")]
    RepositoryExists(Utf8PathBuf),

    #[error("could not resolve the user home directory for ssh key install")]
    NoHomeDirectory,

    #[error("failed to clone {slug}")]
    CloneFailed { slug: String },

    #[error("branch validation failed: expected {expected}, found {found:?}")]
    BranchValidation {
        expected: String,
        found: Option<String>,
    },

    #[error("commit validation failed: expected {expected}, found {found:?}")]
    CommitValidation {
        expected: String,
        found: Option<String>,
    },

    #[error(transparent)]
    Git(#[from] GitError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
