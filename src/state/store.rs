use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;

use crate::log;

use super::message::{Message, MessageKey};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Key '{0}' does not exist")]
    NotFound(MessageKey),
}

pub type Entry = (MessageKey, Message);

#[derive(Default)]
struct Inner {
    entries: Vec<Entry>,
    // Never reset, so keys stay unique after deletes.
    next_id: u64,
}

impl Inner {
    fn position(&self, key: &MessageKey) -> Option<usize> {
        self.entries.iter().position(|(k, _)| k == key)
    }
}

/// Ordered, shareable message collection. Cloning hands out another handle to
/// the same store.
#[derive(Clone, Default)]
pub struct MessageStore {
    inner: Arc<RwLock<Inner>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add(&self, header: impl Into<String>, body: impl Into<String>) -> MessageKey {
        let message = Message::new(header, body);
        let mut inner = self.inner.write().await;

        inner.next_id += 1;
        let key = MessageKey::from_id(inner.next_id);

        println!("{} Added {} {}", log::STATE, key, message);
        inner.entries.push((key.clone(), message));
        key
    }

    pub async fn replace(
        &self,
        key: &MessageKey,
        header: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.position(key) else {
            return Err(StoreError::NotFound(key.clone()));
        };

        let message = &mut inner.entries[index].1;
        let old = message.clone();
        message.header = header.into();
        message.body = body.into();

        println!(
            "{} Replaced {} old: {}, new: {}",
            log::STATE,
            key,
            old,
            message
        );
        Ok(())
    }

    pub async fn delete(&self, key: &MessageKey) -> Result<Message, StoreError> {
        let mut inner = self.inner.write().await;
        let Some(index) = inner.position(key) else {
            return Err(StoreError::NotFound(key.clone()));
        };

        // `remove` shifts the tail down, which keeps the relative order.
        let (_, message) = inner.entries.remove(index);
        println!("{} Deleted {} {}", log::STATE, key, message);
        Ok(message)
    }

    #[cfg(test)]
    pub async fn get(&self, key: &MessageKey) -> Option<Message> {
        let inner = self.inner.read().await;
        inner
            .position(key)
            .map(|index| inner.entries[index].1.clone())
    }

    /// Point in time copy of every entry in display order.
    pub async fn snapshot(&self) -> Vec<Entry> {
        self.inner.read().await.entries.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    #[cfg(test)]
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn keys(snapshot: &[Entry]) -> Vec<MessageKey> {
        snapshot.iter().map(|(k, _)| k.clone()).collect()
    }

    #[tokio::test]
    async fn add_appends_at_tail_with_fresh_key() {
        let store = MessageStore::new();
        let first = store.add("A", "1").await;
        let second = store.add("B", "2").await;

        assert_ne!(first, second);

        let snapshot = store.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[1], (second, Message::new("B", "2")));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn keys_are_not_reused_after_delete() {
        let store = MessageStore::new();
        let first = store.add("A", "1").await;
        store.delete(&first).await.unwrap();

        let second = store.add("A", "1").await;
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn replace_keeps_position() {
        let store = MessageStore::new();
        let a = store.add("A", "1").await;
        let b = store.add("B", "2").await;
        let c = store.add("C", "3").await;

        store.replace(&b, "B'", "2'").await.unwrap();

        let snapshot = store.snapshot().await;
        assert_eq!(keys(&snapshot), vec![a, b.clone(), c]);
        assert_eq!(snapshot[1].1, Message::new("B'", "2'"));
        assert_eq!(store.get(&b).await, Some(Message::new("B'", "2'")));
    }

    #[tokio::test]
    async fn replace_unknown_key_leaves_store_untouched() {
        let store = MessageStore::new();
        store.add("A", "1").await;
        let before = store.snapshot().await;

        let missing = MessageKey::from("missing");
        assert_eq!(
            store.replace(&missing, "X", "Y").await,
            Err(StoreError::NotFound(missing))
        );
        assert_eq!(store.snapshot().await, before);
    }

    #[tokio::test]
    async fn delete_removes_only_that_entry() {
        let store = MessageStore::new();
        let a = store.add("A", "1").await;
        let b = store.add("B", "2").await;
        let c = store.add("C", "3").await;

        assert_eq!(store.delete(&b).await, Ok(Message::new("B", "2")));
        assert_eq!(keys(&store.snapshot().await), vec![a, c]);
        assert_eq!(store.get(&b).await, None);
    }

    #[tokio::test]
    async fn delete_unknown_key_is_not_found() {
        let store = MessageStore::new();
        let a = store.add("A", "1").await;
        store.delete(&a).await.unwrap();

        assert_eq!(store.delete(&a).await, Err(StoreError::NotFound(a)));
        assert!(store.is_empty().await);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_adds_produce_distinct_keys() {
        let store = MessageStore::new();

        let handles: Vec<_> = (0..64)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.add(format!("h{}", i), format!("b{}", i)).await
                })
            })
            .collect();

        let mut returned = HashSet::new();
        for handle in handles {
            returned.insert(handle.await.unwrap());
        }
        assert_eq!(returned.len(), 64);

        let snapshot = store.snapshot().await;
        let stored: HashSet<_> = keys(&snapshot).into_iter().collect();
        assert_eq!(stored, returned);

        // Keys come from a counter taken under the same lock as the push, so
        // display order matches key order.
        let ordered = keys(&snapshot);
        let mut sorted = ordered.clone();
        sorted.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        assert_eq!(ordered, sorted);
    }
}
