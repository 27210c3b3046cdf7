use article_pager::{Key, LoadError, LoadParams, PagingSource, FLOOR_KEY};
use proptest::prelude::*;
use tokio_util::sync::CancellationToken;

mod common;
use common::{instant_source, runtime};

proptest! {
    #[test]
    fn initial_load_starts_at_floor(load_size in 1usize..256) {
        let source = instant_source();
        let page = runtime()
            .block_on(source.load(LoadParams::refresh(None, load_size), &CancellationToken::new()))
            .expect("initial load succeeds");

        let ids: Vec<Key> = page.data.iter().map(|a| a.id).collect();
        prop_assert_eq!(ids, (0..load_size as Key).collect::<Vec<_>>());
        prop_assert_eq!(page.prev_key, None);
        prop_assert_eq!(page.next_key, Some(load_size as Key));
    }

    #[test]
    fn keyed_load_covers_half_open_range(key in 0i64..1_000_000, load_size in 1usize..128) {
        let source = instant_source();
        let page = runtime()
            .block_on(source.load(LoadParams::at(key, load_size), &CancellationToken::new()))
            .expect("keyed load succeeds");

        prop_assert_eq!(page.len(), load_size);
        for (offset, article) in page.data.iter().enumerate() {
            prop_assert_eq!(article.id, key + offset as Key);
        }
        prop_assert_eq!(page.next_key, Some(key + load_size as Key));
    }

    #[test]
    fn prev_key_never_below_floor(key in 1i64..10_000, load_size in 1usize..512) {
        let bounds = LoadParams::at(key, load_size).bounds().expect("valid params");
        let prev = bounds.prev_key.expect("non-floor page has a previous key");
        prop_assert!(prev >= FLOOR_KEY);
        prop_assert_eq!(prev, (key - load_size as Key).max(FLOOR_KEY));
        prop_assert!(prev < key);
    }

    #[test]
    fn negative_keys_are_rejected(key in i64::MIN..0, load_size in 1usize..64) {
        let result = LoadParams::at(key, load_size).bounds();
        prop_assert!(matches!(result, Err(LoadError::InvalidParams(_))));
    }
}

#[test]
fn unrepresentable_timestamp_fails_the_whole_page() {
    let source = instant_source();
    let key = Key::MAX / 2;

    let outcome = runtime().block_on(source.load(LoadParams::at(key, 2), &CancellationToken::new()));

    assert_eq!(outcome, Err(LoadError::TimestampOutOfRange { id: key }));
}
