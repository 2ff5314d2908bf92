// casket: a minimal content-addressable object store.
//
// Objects are framed into a self-describing envelope, addressed by the SHA-1
// of the envelope bytes, compressed with zlib, and stored under a two-level
// fan-out directory keyed by the hex digest.

pub mod compress;
pub mod digest;
pub mod error;
pub mod object;
pub mod repository;
pub mod store;

pub use digest::Digest;
pub use error::StoreError;
pub use object::Object;
pub use repository::Repository;
pub use store::ObjectStore;
