//! Tweet store tests.

use super::{NewTweet, TweetStore};

fn new_tweet(text: &str) -> NewTweet {
    NewTweet {
        model_name: "m".to_string(),
        personality: "p".to_string(),
        content_type: "t".to_string(),
        content_format: "Text".to_string(),
        tweet_text: text.to_string(),
        posted_url: None,
    }
}

fn temp_store() -> (tempfile::TempDir, TweetStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = TweetStore::open(dir.path().join("tweets.db")).unwrap();
    (dir, store)
}

#[test]
fn add_then_get_returns_inserted_fields() {
    let (_dir, store) = temp_store();
    let input = new_tweet("hello");

    let id = store.add(&input).unwrap();
    let record = store.get(id).unwrap();

    assert_eq!(record.id, id);
    assert_eq!(record.model_name, input.model_name);
    assert_eq!(record.personality, input.personality);
    assert_eq!(record.content_type, input.content_type);
    assert_eq!(record.content_format, input.content_format);
    assert_eq!(record.tweet_text, input.tweet_text);
    assert_eq!(record.posted_url, None);
    assert!(!record.is_posted());
}

#[test]
fn first_insert_gets_id_one_and_url_update_sticks() {
    let (_dir, store) = temp_store();

    let id = store.add(&new_tweet("hello")).unwrap();
    assert_eq!(id, 1);
    assert!(store.update_posted_url(1, "https://x.com/u/status/1"));
    assert_eq!(
        store.get(1).unwrap().posted_url.as_deref(),
        Some("https://x.com/u/status/1")
    );
}

#[test]
fn update_posted_url_changes_only_that_field() {
    let (_dir, store) = temp_store();
    let id = store.add(&new_tweet("hello")).unwrap();
    let before = store.get(id).unwrap();

    assert!(store.update_posted_url(id, "https://x.com/u/status/9"));
    let after = store.get(id).unwrap();

    assert_eq!(after.posted_url.as_deref(), Some("https://x.com/u/status/9"));
    assert_eq!(after.id, before.id);
    assert_eq!(after.tweet_text, before.tweet_text);
    assert_eq!(after.model_name, before.model_name);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn update_posted_url_on_missing_id_reports_failure() {
    let (_dir, store) = temp_store();
    store.add(&new_tweet("only")).unwrap();

    assert!(!store.update_posted_url(42, "https://x.com/u/status/42"));

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].posted_url, None);
    assert!(store.get(42).is_none());
}

#[test]
fn list_all_returns_newest_first() {
    let (_dir, store) = temp_store();
    let ids: Vec<i64> = (0..5)
        .map(|i| store.add(&new_tweet(&format!("tweet {}", i))).unwrap())
        .collect();

    let all = store.list_all().unwrap();
    assert_eq!(all.len(), 5);
    let listed: Vec<i64> = all.iter().map(|r| r.id).collect();
    let mut expected = ids.clone();
    expected.reverse();
    assert_eq!(listed, expected);
    assert!(all.windows(2).all(|w| w[0].created_at >= w[1].created_at));
}

#[test]
fn list_all_on_empty_store() {
    let (_dir, store) = temp_store();
    assert_eq!(store.list_all(), Some(vec![]));
}

#[test]
fn add_keeps_supplied_posted_url() {
    let (_dir, store) = temp_store();
    let mut tweet = new_tweet("posted already");
    tweet.posted_url = Some(super::POSTED_MARKER.to_string());

    let id = store.add(&tweet).unwrap();
    assert_eq!(store.get(id).unwrap().posted_url.as_deref(), Some("posted"));
}

#[test]
fn reopening_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tweets.db");
    let id = TweetStore::open(&path)
        .unwrap()
        .add(&new_tweet("durable"))
        .unwrap();

    let reopened = TweetStore::open(&path).unwrap();
    assert_eq!(reopened.get(id).unwrap().tweet_text, "durable");
}

#[test]
fn storage_failure_is_reported_not_raised() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tweets.db");
    let store = TweetStore::open(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    std::fs::create_dir(&path).unwrap();

    assert_eq!(store.add(&new_tweet("lost")), None);
    assert!(!store.update_posted_url(1, "https://x.com/u/status/1"));
    assert_eq!(store.list_all(), None);
    assert_eq!(store.get(1), None);
}

#[test]
fn preview_truncates_long_text() {
    let (_dir, store) = temp_store();
    let id = store
        .add(&new_tweet("line one\nline two is a bit longer"))
        .unwrap();
    let record = store.get(id).unwrap();
    assert_eq!(record.preview(100), "line one line two is a bit longer");
    let short = record.preview(10);
    assert!(short.ends_with('…'));
    assert_eq!(short.chars().count(), 10);
}
