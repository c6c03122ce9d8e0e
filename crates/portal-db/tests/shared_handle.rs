//! The process-wide store handle is opened once and then reused.

use portal_config::StoreConfig;
use portal_db::handle;

#[tokio::test]
async fn shared_handle_is_opened_once() {
    assert!(handle::try_shared().is_none());

    let seeded = StoreConfig {
        seed_demo_data: true,
        ..StoreConfig::in_memory()
    };
    let first = handle::shared(&seeded).await.unwrap();
    assert_eq!(first.list_circulars(None, None).await.unwrap().len(), 4);

    // Later callers get the same store whatever config they pass.
    let second = handle::shared(&StoreConfig::in_memory()).await.unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(handle::try_shared().is_some_and(|svc| std::ptr::eq(svc, first)));
    assert_eq!(second.list_circulars(None, None).await.unwrap().len(), 4);
}
