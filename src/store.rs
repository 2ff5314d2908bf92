// The orchestration layer: maps objects at the API boundary to compressed
// envelope files on disk, keyed by digest.
//
// On-disk layout, relative to the objects directory:
//   <first 2 hex chars of digest>/<remaining 38 hex chars>

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use log::debug;
use tempfile::NamedTempFile;

use crate::compress;
use crate::digest::Digest;
use crate::error::StoreError;
use crate::object::Object;
use crate::repository::Repository;

pub struct ObjectStore {
    objects_dir: PathBuf,
}

impl ObjectStore {
    pub fn open(repository: &Repository) -> Self {
        Self {
            objects_dir: repository.objects_dir(),
        }
    }

    /// Stores an object and returns its digest: encode, hash the envelope,
    /// compress, write under the fan-out path. Writing the same object twice
    /// lands identical bytes at the identical path, so no existence check is
    /// needed.
    pub fn put(&self, object: &Object) -> Result<Digest, StoreError> {
        let envelope = object.encode();
        let digest = Digest::of(&envelope);
        let compressed = compress::deflate(&envelope)?;

        let dir = self.fanout_dir(&digest);
        fs::create_dir_all(&dir)?;

        // Write to a sibling temp file and rename into place so a concurrent
        // reader never observes a half-written object.
        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(&compressed)?;
        file.persist(self.object_path(&digest))
            .map_err(|e| StoreError::Io(e.error))?;

        debug!("stored {} object {}", object.kind(), digest);
        Ok(digest)
    }

    /// Retrieves the object stored under `digest`.
    pub fn get(&self, digest: &Digest) -> Result<Object, StoreError> {
        let path = self.object_path(digest);

        let compressed = fs::read(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::ObjectNotFound(digest.to_hex()),
            _ => StoreError::Io(e),
        })?;

        let envelope = compress::inflate(&compressed).map_err(|e| StoreError::CorruptObject {
            digest: digest.to_hex(),
            source: e,
        })?;

        Object::decode(&envelope)
    }

    fn fanout_dir(&self, digest: &Digest) -> PathBuf {
        self.objects_dir.join(&digest.to_hex()[..2])
    }

    fn object_path(&self, digest: &Digest) -> PathBuf {
        self.fanout_dir(digest).join(&digest.to_hex()[2..])
    }
}
