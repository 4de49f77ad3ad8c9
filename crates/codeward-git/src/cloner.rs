use crate::plumbing::run_git;
use crate::{CloneError, RepoIdentity};
use camino::Utf8Path;
use std::fs;

/// Mutually exclusive authentication modes for the clone.
#[derive(Clone, Debug)]
pub enum CloneCredential {
    /// Private key material installed at the invoking user's default key
    /// path before cloning over SSH.
    SshKey { private_key: String },
    /// Token embedded into the HTTPS clone URI as `username:token@`.
    Token { username: String, token: String },
}

/// Materialize `repo` into `target` with a shallow (depth 1) clone and
/// verify the post-clone state against the requested branch/commit pins.
///
/// Phases, in order: precondition checks, command assembly, clone, branch
/// verification, commit checkout + verification. Any phase failure aborts
/// the operation; a git invocation itself failing only surfaces when the
/// resulting checkout is not resolvable.
///
/// Returns the identity re-derived from the fresh checkout.
pub fn clone_into(
    repo: &RepoIdentity,
    credential: Option<&CloneCredential>,
    target: &Utf8Path,
) -> Result<RepoIdentity, CloneError> {
    if !target.exists() {
        fs::create_dir_all(target)?;
    }
    if fs::read_dir(target)?.next().is_some() {
        return Err(CloneError::DirectoryNotEmpty(target.to_owned()));
    }
    // A resolvable checkout implies a non-empty target, so the emptiness
    // check above fires first in practice. The variant stays as a distinct
    // refusal for callers that surface it after their own inspection.
    if RepoIdentity::from_local(target).is_ok() {
        return Err(CloneError::RepositoryExists(target.to_owned()));
    }

    let clone_uri = match credential {
        Some(CloneCredential::SshKey { private_key }) => {
            install_ssh_key(private_key)?;
            repo.ssh_clone_uri()
        }
        Some(CloneCredential::Token { username, token }) => repo
            .http_clone_uri()
            .replacen("https://", &format!("https://{username}:{token}@"), 1),
        None => repo.http_clone_uri(),
    };

    let mut args = vec!["clone"];
    if let Some(branch) = repo.branch() {
        args.push("--branch");
        args.push(branch);
    }
    args.extend(["--depth", "1", clone_uri.as_str(), "."]);

    // Log the credential-free URI only.
    tracing::info!(uri = %repo.http_clone_uri(), target = %target, "cloning repository");
    run_git(&args, target)?;

    let local = RepoIdentity::from_local(target).map_err(|_| CloneError::CloneFailed {
        slug: repo.slug(),
    })?;

    if let Some(expected) = repo.branch() {
        let matches = local
            .branch()
            .is_some_and(|found| found.eq_ignore_ascii_case(expected));
        if !matches {
            return Err(CloneError::BranchValidation {
                expected: expected.to_string(),
                found: local.branch().map(str::to_string),
            });
        }
    }

    if let Some(expected) = repo.commit() {
        tracing::info!(commit = expected, "checking out pinned commit");
        run_git(&["checkout", expected], target)?;
        let pinned = RepoIdentity::from_local(target).map_err(|_| CloneError::CloneFailed {
            slug: repo.slug(),
        })?;
        let matches = pinned
            .commit()
            .is_some_and(|found| found.eq_ignore_ascii_case(expected));
        if !matches {
            return Err(CloneError::CommitValidation {
                expected: expected.to_string(),
                found: pinned.commit().map(str::to_string),
            });
        }
        return Ok(pinned);
    }

    Ok(local)
}

fn install_ssh_key(private_key: &str) -> Result<(), CloneError> {
    let home = dirs::home_dir().ok_or(CloneError::NoHomeDirectory)?;
    let ssh_dir = home.join(".ssh");
    fs::create_dir_all(&ssh_dir)?;
    fs::write(ssh_dir.join("id_rsa"), private_key)?;
    Ok(())
}
