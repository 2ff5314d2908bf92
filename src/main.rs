use std::io::Write;
use std::path::PathBuf;
use std::{env, fs, io, process};

use anyhow::Context;
use clap::{Parser, Subcommand};

use casket::{Digest, Object, ObjectStore, Repository};

#[derive(Subcommand, Debug)]
enum Command {
    /// Initialize a casket repository
    ///
    /// The path defaults to the directory the command is invoked in
    Init {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
    /// Compute the digest of a file, optionally writing the object to the
    /// store
    HashObject {
        /// Write the object to the store
        #[arg(short = 'w')]
        write: bool,
        /// Object kind tag
        #[arg(short = 't', default_value = "blob")]
        kind: String,
        path: PathBuf,
    },
    /// Print the raw payload of a stored object (uncompressed and without
    /// the envelope header) to stdout
    CatFile {
        /// Accepted for interface compatibility; lookup is digest-keyed
        kind: String,
        digest: String,
    },
}

/// A minimal content-addressable object store
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Casket {
    #[command(subcommand)]
    cmd: Command,
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Casket::parse()) {
        eprintln!("error: {:#}", e);
        process::exit(1);
    }
}

fn run(casket: Casket) -> anyhow::Result<()> {
    match casket.cmd {
        Command::Init { path } => {
            let repository = Repository::init(&path)?;
            println!(
                "Initialized empty repository at {}",
                repository.storedir.display()
            );
        }
        Command::HashObject { write, kind, path } => {
            let payload = fs::read(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;
            let object = Object::new(&kind, payload)?;

            let digest = if write {
                let store = open_store()?;
                store.put(&object)?
            } else {
                Digest::of(&object.encode())
            };

            println!("{}", digest);
        }
        Command::CatFile { kind: _, digest } => {
            let digest: Digest = digest.parse()?;
            let store = open_store()?;
            let object = store.get(&digest)?;
            io::stdout().write_all(object.payload())?;
        }
    };

    Ok(())
}

fn open_store() -> anyhow::Result<ObjectStore> {
    let cwd = env::current_dir().context("cannot determine current directory")?;
    let repository = Repository::find(&cwd)?;
    Ok(ObjectStore::open(&repository))
}
