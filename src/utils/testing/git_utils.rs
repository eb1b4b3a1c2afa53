use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Test git repository driven through the command-line git binary, so the
/// history text it produces is exactly what the generator consumes in
/// production
pub struct TestGitRepo {
    repo_path: std::path::PathBuf,
}

impl TestGitRepo {
    /// Initialize a new git repository at the given path
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let repo = Self {
            repo_path: path.to_path_buf(),
        };

        repo.run_git(&["init", "--initial-branch=main"])?;

        // Configure identity and disable signing so commits work in CI
        repo.run_git(&["config", "user.name", "Test User"])?;
        repo.run_git(&["config", "user.email", "test@example.com"])?;
        repo.run_git(&["config", "commit.gpgsign", "false"])?;

        Ok(repo)
    }

    /// Write a file relative to the repository root
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<()> {
        let full_path = self.repo_path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::IoError)?;
        }

        std::fs::write(full_path, content).map_err(Error::IoError)
    }

    /// Add all files and create a commit
    pub fn add_all_and_commit(&self, message: &str) -> Result<()> {
        self.run_git(&["add", "."])?;
        self.run_git(&["commit", "--allow-empty", "-m", message])?;
        Ok(())
    }

    /// Write a file and commit the change
    pub fn commit_file(&self, file_path: &str, content: &str, message: &str) -> Result<()> {
        self.write_file(file_path, content)?;
        self.add_all_and_commit(message)
    }

    /// Create a new branch
    pub fn create_branch(&self, branch_name: &str) -> Result<()> {
        self.run_git(&["branch", branch_name])
    }

    /// Checkout a branch
    pub fn checkout_branch(&self, branch_name: &str) -> Result<()> {
        self.run_git(&["checkout", branch_name])
    }

    /// Merge a branch with a merge commit, never fast-forward, so the
    /// resulting history entry carries a `Merge:` metadata line
    pub fn merge_branch(&self, branch_name: &str, message: &str) -> Result<()> {
        self.run_git(&["merge", "--no-ff", "-m", message, branch_name])
    }

    /// Get current HEAD commit ID
    pub fn head_commit_id(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["rev-parse", "HEAD"])
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitCommandFailed {
                reason: format!(
                    "failed to get HEAD commit: {}",
                    String::from_utf8_lossy(&output.stderr)
                ),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.repo_path
    }

    fn run_git(&self, args: &[&str]) -> Result<()> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitCommandFailed {
                reason: format!(
                    "git {} failed: {}",
                    args.first().unwrap_or(&""),
                    String::from_utf8_lossy(&output.stderr)
                ),
            });
        }

        Ok(())
    }
}
