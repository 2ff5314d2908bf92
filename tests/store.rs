// End-to-end exercises of the public API: bootstrap a repository in a
// scratch directory, then push objects through the full
// encode/hash/compress/persist pipeline and back.

use casket::{Object, ObjectStore, Repository, StoreError};

#[test]
fn store_and_fetch_through_public_api() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Repository::init(dir.path())?;
    let store = ObjectStore::open(&repository);

    let digest = store.put(&Object::new("blob", b"hello world".to_vec())?)?;
    assert_eq!(digest.to_hex(), "95d09f2b10159347eece71399a7e2e907ea3df4f");

    let fetched = store.get(&digest)?;
    assert_eq!(fetched.kind(), "blob");
    assert_eq!(fetched.into_payload(), b"hello world");

    Ok(())
}

#[test]
fn reopened_store_sees_earlier_objects() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Repository::init(dir.path())?;

    let digest = {
        let store = ObjectStore::open(&repository);
        store.put(&Object::new("note", b"survives reopen".to_vec())?)?
    };

    let found = Repository::find(dir.path())?;
    let store = ObjectStore::open(&found);
    assert_eq!(store.get(&digest)?.payload(), b"survives reopen");

    Ok(())
}

#[test]
fn digest_printed_and_parsed_at_the_boundary() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Repository::init(dir.path())?;
    let store = ObjectStore::open(&repository);

    let digest = store.put(&Object::new("blob", b"boundary".to_vec())?)?;

    // Callers address objects by the lowercase hex rendering alone.
    let hex = digest.to_string();
    assert_eq!(hex.len(), 40);
    assert!(hex.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));

    let parsed = hex.parse()?;
    assert_eq!(store.get(&parsed)?.payload(), b"boundary");

    Ok(())
}

#[test]
fn missing_object_reports_not_found() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let repository = Repository::init(dir.path())?;
    let store = ObjectStore::open(&repository);

    let absent = "0123456789abcdef0123456789abcdef01234567".parse()?;
    assert!(matches!(
        store.get(&absent),
        Err(StoreError::ObjectNotFound(_))
    ));

    Ok(())
}
