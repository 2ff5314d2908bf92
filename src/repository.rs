// Repository bootstrap: the directory skeleton and config file the object
// store writes into. The store itself assumes this layout already exists.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use log::info;

const STORE_DIR: &str = ".casket";

const DESCRIPTION: &[u8] =
    b"Unnamed repository; edit this file 'description' to name the repository.\n";

pub struct Repository {
    pub worktree: PathBuf,
    pub storedir: PathBuf,
}

impl Repository {
    /// Creates the repository skeleton under `worktree`: the store directory,
    /// the objects tree, a description file, and a bare-bones config.
    pub fn init(worktree: &Path) -> anyhow::Result<Self> {
        if worktree.exists() && !worktree.is_dir() {
            bail!("expected a directory at {}", worktree.display());
        }

        let storedir = worktree.join(STORE_DIR);
        if storedir.exists() && !is_empty_dir(&storedir) {
            bail!("already a repository: {}", storedir.display());
        }

        fs::create_dir_all(storedir.join("objects"))
            .with_context(|| format!("failed to create {}", storedir.display()))?;
        fs::write(storedir.join("description"), DESCRIPTION)?;
        fs::write(storedir.join("config"), default_config())?;

        info!("initialized empty repository at {}", storedir.display());

        Ok(Self {
            worktree: worktree.to_path_buf(),
            storedir,
        })
    }

    /// Walks up from `start` looking for an enclosing repository.
    pub fn find(start: &Path) -> anyhow::Result<Self> {
        for dir in start.ancestors() {
            let storedir = dir.join(STORE_DIR);
            if storedir.is_dir() {
                return Ok(Self {
                    worktree: dir.to_path_buf(),
                    storedir,
                });
            }
        }

        bail!("no repository found in {} or any parent", start.display())
    }

    pub fn objects_dir(&self) -> PathBuf {
        self.storedir.join("objects")
    }
}

// The config is write-once: nothing in the store reads it back.
fn default_config() -> String {
    let entries = [
        ("repositoryformatversion", "0"),
        ("filemode", "false"),
        ("bare", "false"),
    ];

    let mut config = String::from("[core]\n");
    for (key, value) in entries {
        config.push_str(&format!("\t{} = {}\n", key, value));
    }
    config
}

fn is_empty_dir(path: &Path) -> bool {
    path.is_dir() && fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_none())
}
