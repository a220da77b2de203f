use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TweetRecord {
    pub id: String,
    pub text: String,
    pub user_id: String,
}

/// In-memory repository backing the user and tweet collections.
///
/// Both collections are ordered maps keyed by id so listings come back in
/// insertion order. Tweet ids are issued from a monotonic counter rather
/// than derived from the last element, so deleting the newest tweet never
/// causes an id to be reused and posting into an empty collection works.
#[derive(Debug)]
pub struct Store {
    users: RwLock<IndexMap<String, UserRecord>>,
    tweets: RwLock<IndexMap<String, TweetRecord>>,
    next_tweet_id: AtomicU64,
}

impl Store {
    pub fn new(users: Vec<UserRecord>, tweets: Vec<TweetRecord>) -> Self {
        let next_tweet_id = tweets
            .iter()
            .filter_map(|tweet| tweet.id.parse::<u64>().ok())
            .max()
            .map(|max| max + 1)
            .unwrap_or(1);

        Self {
            users: RwLock::new(users.into_iter().map(|u| (u.id.clone(), u)).collect()),
            tweets: RwLock::new(tweets.into_iter().map(|t| (t.id.clone(), t)).collect()),
            next_tweet_id: AtomicU64::new(next_tweet_id),
        }
    }

    /// Build a store holding the fixed seed dataset.
    pub fn seeded() -> Self {
        let users = vec![
            UserRecord {
                id: "1".to_string(),
                first_name: "pill sang".to_string(),
                last_name: "sung".to_string(),
            },
            UserRecord {
                id: "2".to_string(),
                first_name: "pill won".to_string(),
                last_name: "sung".to_string(),
            },
        ];
        let tweets = vec![
            TweetRecord {
                id: "1".to_string(),
                text: "first".to_string(),
                user_id: "2".to_string(),
            },
            TweetRecord {
                id: "2".to_string(),
                text: "second".to_string(),
                user_id: "1".to_string(),
            },
        ];
        Self::new(users, tweets)
    }

    pub async fn list_users(&self) -> Vec<UserRecord> {
        self.users.read().await.values().cloned().collect()
    }

    pub async fn find_user(&self, id: &str) -> Option<UserRecord> {
        self.users.read().await.get(id).cloned()
    }

    pub async fn list_tweets(&self) -> Vec<TweetRecord> {
        self.tweets.read().await.values().cloned().collect()
    }

    pub async fn find_tweet(&self, id: &str) -> Option<TweetRecord> {
        self.tweets.read().await.get(id).cloned()
    }

    /// Append a tweet for an existing user.
    ///
    /// Returns `None` without mutating anything when no user with `user_id`
    /// exists. The user check and the insert happen under the tweet write
    /// lock, so each append is atomic relative to other mutations.
    pub async fn append_tweet(&self, text: &str, user_id: &str) -> Option<TweetRecord> {
        if self.find_user(user_id).await.is_none() {
            return None;
        }

        let mut tweets = self.tweets.write().await;
        let id = self.next_tweet_id.fetch_add(1, Ordering::SeqCst).to_string();
        let tweet = TweetRecord {
            id: id.clone(),
            text: text.to_string(),
            user_id: user_id.to_string(),
        };
        tweets.insert(id, tweet.clone());
        Some(tweet)
    }

    /// Remove the tweet with the given id, preserving the order of the rest.
    /// Returns `false` when no such tweet exists.
    pub async fn remove_tweet(&self, id: &str) -> bool {
        self.tweets.write().await.shift_remove(id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_store_has_expected_shape() {
        let store = Store::seeded();

        let users = store.list_users().await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].id, "1");
        assert_eq!(users[1].id, "2");

        let tweets = store.list_tweets().await;
        assert_eq!(tweets.len(), 2);
        assert_eq!(tweets[0].text, "first");
        assert_eq!(tweets[1].text, "second");
    }

    #[tokio::test]
    async fn append_issues_sequential_ids() {
        let store = Store::seeded();

        let first = store.append_tweet("hello", "1").await.unwrap();
        assert_eq!(first.id, "3");

        let second = store.append_tweet("again", "2").await.unwrap();
        assert_eq!(second.id, "4");

        assert_eq!(store.list_tweets().await.len(), 4);
    }

    #[tokio::test]
    async fn append_with_unknown_user_is_a_no_op() {
        let store = Store::seeded();

        assert!(store.append_tweet("x", "999").await.is_none());
        assert_eq!(store.list_tweets().await.len(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_deleting_the_newest_tweet() {
        let store = Store::seeded();

        let posted = store.append_tweet("ephemeral", "1").await.unwrap();
        assert!(store.remove_tweet(&posted.id).await);

        let next = store.append_tweet("lasting", "1").await.unwrap();
        assert_eq!(next.id, "4");
    }

    #[tokio::test]
    async fn remove_is_false_on_second_call() {
        let store = Store::seeded();

        assert!(store.remove_tweet("1").await);
        assert!(!store.remove_tweet("1").await);
        assert!(store.find_tweet("1").await.is_none());
    }

    #[tokio::test]
    async fn append_works_on_an_emptied_collection() {
        let store = Store::seeded();

        assert!(store.remove_tweet("1").await);
        assert!(store.remove_tweet("2").await);
        assert!(store.list_tweets().await.is_empty());

        let tweet = store.append_tweet("fresh start", "1").await.unwrap();
        assert_eq!(tweet.id, "3");
    }
}
