//! Polling of previously shared schedules ("my invitations").
//!
//! The caller owns the list of schedule ids it created — there is no implicit
//! global store. Each id is fetched independently; a failed fetch is logged
//! and skipped so one stale id cannot hide the rest.

use tracing::warn;

use slotshare_core::Schedule;

use crate::client::ScheduleClient;

/// Fetch the given schedules, newest first. Ids that fail to resolve are
/// dropped from the result.
pub async fn fetch_invitations(client: &ScheduleClient, ids: &[i64]) -> Vec<Schedule> {
    let mut invitations = Vec::with_capacity(ids.len());

    for &id in ids {
        match client.fetch_schedule(id).await {
            Ok(schedule) => invitations.push(schedule),
            Err(err) => warn!(id, error = %err, "failed to fetch schedule"),
        }
    }

    invitations.sort_by(|a, b| b.id.cmp(&a.id));
    invitations
}
