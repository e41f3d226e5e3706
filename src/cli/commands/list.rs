//! Listing commands: branches, tags, all

use std::path::PathBuf;

use reflist::adapters::{GitRefSource, Libgit2RefSource, RefScope};
use reflist::config::GlobalConfig;
use reflist::core::models::RefOrdering;
use reflist::core::ports::RefSource;
use reflist::core::services::RefList;
use reflist::output::{OutputMode, RefListing, print_listing};

/// Repository location and backend selection shared by the list commands
#[derive(Debug, Clone)]
pub struct RepoArgs {
    /// Repository path (current directory when not given)
    path: PathBuf,
    /// Which producer reads the repository
    backend: Backend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Backend {
    /// Shell out to `git for-each-ref`
    Cli,
    /// Read the repository through libgit2
    Libgit2,
}

impl RepoArgs {
    /// Resolve the repo path and backend selector
    pub fn new(repo: Option<String>, backend: &str) -> anyhow::Result<Self> {
        let path = match repo {
            Some(p) => PathBuf::from(p),
            None => std::env::current_dir()?,
        };
        let backend = match backend {
            "cli" => Backend::Cli,
            "libgit2" => Backend::Libgit2,
            other => anyhow::bail!("unknown backend: {other:?} (use: cli, libgit2)"),
        };
        Ok(Self { path, backend })
    }

    /// Build the producer for the given scope
    fn source(&self, scope: RefScope) -> Box<dyn RefSource> {
        match self.backend {
            Backend::Cli => Box::new(GitRefSource::new(self.path.clone(), scope)),
            Backend::Libgit2 => Box::new(Libgit2RefSource::new(self.path.clone(), scope)),
        }
    }
}

/// List local branches under the requested ordering
pub fn list_branches(
    repo: &RepoArgs,
    sort: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let ordering = resolve_ordering(sort)?;
    let list = RefList::from_source(repo.source(RefScope::Branches).as_ref())?;
    print_listing(&RefListing::from_refs(&list.branches(ordering)), mode)
}

/// List tags under the requested ordering
pub fn list_tags(repo: &RepoArgs, sort: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let ordering = resolve_ordering(sort)?;
    let list = RefList::from_source(repo.source(RefScope::Tags).as_ref())?;
    print_listing(&RefListing::from_refs(&list.tags(ordering)), mode)
}

/// List every branch and tag in repository order
pub fn list_all(repo: &RepoArgs, mode: OutputMode) -> anyhow::Result<()> {
    let list = RefList::from_source(repo.source(RefScope::All).as_ref())?;
    print_listing(&RefListing::from_refs(&list.all()), mode)
}

/// Pick the ordering: explicit flag first, then the persisted default
fn resolve_ordering(sort: Option<&str>) -> anyhow::Result<RefOrdering> {
    let selector = match sort {
        Some(s) => s.to_string(),
        None => GlobalConfig::load().list.sort,
    };
    Ok(selector.parse::<RefOrdering>()?)
}
