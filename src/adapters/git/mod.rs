//! Command-line git adapter
//!
//! Implements [`RefSource`] by invoking `git for-each-ref` and feeding the
//! output through the core line parser.
//!
//! The format string concatenates `%(committerdate:raw)` and
//! `%(taggerdate:raw)`: git emits exactly one of the two per ref (committer
//! date for commits under branches and lightweight tags, tagger date for
//! annotated tags), so every output line carries a usable date in its first
//! column. This is what lets annotated and lightweight tags sort by date in
//! a single pass.

use std::path::{Path, PathBuf};
use std::process::Command;

use super::RefScope;
use crate::core::models::RefRecord;
use crate::core::ports::RefSource;
use crate::core::services::parse_lines;

/// for-each-ref format yielding `<seconds> <offset> <objectname> <refname>`
const FOR_EACH_REF_FORMAT: &str = "%(committerdate:raw)%(taggerdate:raw) %(objectname) %(refname)";

/// Ref producer backed by the `git` command-line tool
#[derive(Debug, Clone)]
pub struct GitRefSource {
    /// Working directory the git command runs in
    workdir: PathBuf,
    /// Which refs to enumerate
    scope: RefScope,
}

impl GitRefSource {
    /// Create an adapter reading the repository at `workdir`
    #[must_use]
    pub const fn new(workdir: PathBuf, scope: RefScope) -> Self {
        Self { workdir, scope }
    }

    /// Create an adapter for the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if the current directory cannot be determined.
    pub fn current_dir(scope: RefScope) -> anyhow::Result<Self> {
        Ok(Self::new(std::env::current_dir()?, scope))
    }

    /// The working directory this adapter reads
    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Run `git for-each-ref` and return its raw output lines
    fn for_each_ref(&self) -> anyhow::Result<String> {
        let format_arg = format!("--format={FOR_EACH_REF_FORMAT}");
        let output = Command::new("git")
            .current_dir(&self.workdir)
            .arg("for-each-ref")
            .arg(&format_arg)
            .args(self.scope.patterns())
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git for-each-ref failed: {}", stderr.trim());
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl RefSource for GitRefSource {
    fn list_refs(&self) -> anyhow::Result<Vec<RefRecord>> {
        let stdout = self.for_each_ref()?;
        log::debug!("for-each-ref returned {} byte(s) from {}", stdout.len(), self.workdir.display());
        let records = parse_lines(stdout.lines())?;
        Ok(records)
    }
}
