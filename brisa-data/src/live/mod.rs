//! Live change feeds
//!
//! Push-based subscriptions over SurrealDB live queries. Each feed owns a
//! background task that forwards state snapshots into an unbounded channel;
//! the returned [`Subscription`] is the cancellation handle. Dropping it (or
//! calling [`Subscription::unsubscribe`]) stops the task and kills the live
//! query exactly once, so listeners cannot leak.

use std::collections::BTreeMap;

use futures::StreamExt;
use serde::de::DeserializeOwned;
use surrealdb::engine::any::Any;
use surrealdb::{Action, RecordId, Surreal};
use tokio::sync::mpsc;
use tokio_util::sync::{CancellationToken, DropGuard};

use crate::db::models::Identified;
use crate::db::repository::{RepoError, RepoResult};

/// One delivery on a live feed
///
/// Stream errors are delivered in-band (listeners have no synchronous
/// caller to throw to); after an error item the feed ends.
pub type LiveUpdate<T> = Result<T, RepoError>;

/// Handle to an active live feed
///
/// Yields the current state immediately, then one snapshot per change.
/// Cancellation is synchronous for the caller; deliveries already queued in
/// the channel may still be observed afterwards.
pub struct Subscription<T> {
    rx: mpsc::UnboundedReceiver<LiveUpdate<T>>,
    _guard: DropGuard,
}

impl<T> Subscription<T> {
    /// Next snapshot; `None` once the feed is closed
    pub async fn next(&mut self) -> Option<LiveUpdate<T>> {
        self.rx.recv().await
    }

    /// Cancel the feed and release the underlying live query
    ///
    /// Dropping the subscription has the same effect; the live query is
    /// killed exactly once either way.
    pub fn unsubscribe(self) {
        drop(self);
    }
}

/// Subscribe to a single record
///
/// Emits `Some(record)` for the initial state and after every write,
/// `None` when the record is absent or deleted.
pub async fn watch_record<T>(
    db: &Surreal<Any>,
    id: RecordId,
) -> RepoResult<Subscription<Option<T>>>
where
    T: DeserializeOwned + Send + Sync + Unpin + 'static,
{
    // Live query is registered before the initial read so that writes
    // landing in between are not lost; a duplicated snapshot is harmless.
    let mut stream = db.select(id.clone()).live().await?;
    let initial: Option<T> = db.select(id).await?;

    let (tx, rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();

    tokio::spawn(async move {
        let _ = tx.send(Ok(initial));
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                item = stream.next() => match item {
                    Some(Ok(notification)) => {
                        let state = match notification.action {
                            Action::Delete => None,
                            _ => Some(notification.data),
                        };
                        if tx.send(Ok(state)).is_err() {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        tracing::warn!(error = %e, "Record feed stream error");
                        let _ = tx.send(Err(RepoError::Database(e.to_string())));
                        break;
                    }
                    None => break,
                },
            }
        }
    });

    Ok(Subscription { rx, _guard: guard })
}

/// Subscribe to a whole collection
///
/// Emits the full collection for the initial state and a refreshed full
/// snapshot after every create, update or delete. The working snapshot is
/// maintained incrementally from notifications, keyed by record id.
pub async fn watch_table<T>(db: &Surreal<Any>, table: &str) -> RepoResult<Subscription<Vec<T>>>
where
    T: DeserializeOwned + Identified + Clone + Send + Sync + Unpin + 'static,
{
    let mut stream: surrealdb::method::Stream<Vec<T>> = db.select(table).live().await?;
    let initial: Vec<T> = db.select(table).await?;
    let table = table.to_string();

    let (tx, rx) = mpsc::unbounded_channel();
    let token = CancellationToken::new();
    let guard = token.clone().drop_guard();

    tokio::spawn(async move {
        let mut records: BTreeMap<String, T> = BTreeMap::new();
        for record in initial {
            if let Some(key) = record.record_id().map(ToString::to_string) {
                records.insert(key, record);
            }
        }
        if tx.send(Ok(records.values().cloned().collect())).is_err() {
            return;
        }

        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                item = stream.next() => match item {
                    Some(Ok(notification)) => {
                        // Notifications overlapping the initial read are
                        // idempotent map overwrites.
                        let Some(key) = notification.data.record_id().map(ToString::to_string)
                        else {
                            continue;
                        };
                        match notification.action {
                            Action::Delete => {
                                records.remove(&key);
                            }
                            _ => {
                                records.insert(key, notification.data);
                            }
                        }
                        if tx.send(Ok(records.values().cloned().collect())).is_err() {
                            break;
                        }
                    }
                    Some(Err(e)) => {
                        tracing::warn!(table = %table, error = %e, "Collection feed stream error");
                        let _ = tx.send(Err(RepoError::Database(e.to_string())));
                        break;
                    }
                    None => break,
                },
            }
        }
    });

    Ok(Subscription { rx, _guard: guard })
}
