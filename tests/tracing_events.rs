use chained_buckets::{BucketError, HashedMap};
use tracing::Level;

#[test]
fn operations_run_under_a_subscriber() -> Result<(), BucketError> {
    let subscriber =
        tracing_subscriber::fmt().with_max_level(Level::TRACE).with_test_writer().finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut map = HashedMap::new();
        for i in 0..100 {
            map.set(format!("key{i}"), i)?;
        }
        assert_eq!(map.capacity(), 256);

        map.clear();
        assert!(map.is_empty());
        assert_eq!(map.capacity(), 256);
        Ok(())
    })
}
