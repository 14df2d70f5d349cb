// SPDX-FileCopyrightText: 2026 The tavern authors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::Event;

/// The collaborator that fetches and mutates the event collection.
///
/// The engine itself never performs I/O; callers fetch a snapshot through an
/// implementation of this trait and hand it to
/// [`filter_events`](crate::filter_events). Mutations (`like`, `delete`)
/// carry no read-after-write guarantee beyond "a subsequent fetch reflects
/// the change", so callers re-fetch the affected collection afterwards
/// instead of patching the snapshot in place. Failures surface as the
/// implementor's error; nothing here retries.
#[async_trait]
pub trait EventSource {
    /// Error type of the underlying transport.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches the full current event collection.
    async fn get_all(&self) -> Result<Vec<Event>, Self::Error>;

    /// Fetches the events liked by the holder of `token`.
    async fn get_liked(&self, token: &str) -> Result<Vec<Event>, Self::Error>;

    /// Fetches the events created by the holder of `token`.
    async fn get_created(&self, token: &str) -> Result<Vec<Event>, Self::Error>;

    /// Records a like on `event_id`. Idempotent from the caller's point of
    /// view.
    async fn like(&self, token: &str, event_id: &str) -> Result<(), Self::Error>;

    /// Removes an event owned by the holder of `token`.
    async fn delete(&self, token: &str, event_id: &str) -> Result<(), Self::Error>;
}
