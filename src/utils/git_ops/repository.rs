use crate::error::{Error, Result};
use gix;
use std::path::{Path, PathBuf};
use std::process::Command;

pub struct GitOps;

impl GitOps {
    /// detect root of the repository enclosing `path`
    pub fn detect_repository_root<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(Error::RepositoryNotFound {
                path: path.to_path_buf(),
            });
        }

        let repo = gix::discover(path)?;

        // working directory for normal repos, git dir for bare ones
        let root_path = if let Some(work_dir) = repo.work_dir() {
            work_dir.to_path_buf()
        } else {
            repo.git_dir().to_path_buf()
        };

        Ok(root_path)
    }

    /// detect if the given path is inside a repository
    pub fn is_repository<P: AsRef<Path>>(path: P) -> Result<bool> {
        Ok(gix::discover(path.as_ref()).is_ok())
    }

    /// read the full history text of the repository
    ///
    /// runs the git binary rather than walking the commit graph: the
    /// textual `git log` format (marker line, optional merge line, author
    /// line, date line, indented message) is the parser's input contract
    pub fn read_history_log<P: AsRef<Path>>(repo_path: P) -> Result<String> {
        let output = Command::new("git")
            .arg("-C")
            .arg(repo_path.as_ref())
            .arg("log")
            .output()
            .map_err(|e| Error::HistoryCommandFailed {
                reason: e.to_string(),
            })?;

        if !output.status.success() {
            return Err(Error::HistoryCommandFailed {
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
