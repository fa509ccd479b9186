//! Loading flags with request generations.
//!
//! A [`LoadingFlag`] remembers the latest request issued for one operation.
//! It reads as loading from [`begin`](LoadingFlag::begin) until the
//! completion of that same request is [`finish`](LoadingFlag::finish)ed.
//! Completions of older requests are reported as stale and leave the flag
//! alone, so a superseded request can neither clear the flag early nor
//! overwrite the newer result.

use crate::fetch::messages::RequestId;

/// In-flight marker for one operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlag {
    latest: Option<RequestId>,
}

impl LoadingFlag {
    /// Returns `true` while the latest issued request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.latest.is_some()
    }

    /// Marks `id` as the latest request for this operation.
    pub fn begin(&mut self, id: RequestId) {
        self.latest = Some(id);
    }

    /// Records the completion of `id`.
    ///
    /// Returns `true` if `id` was the latest request, in which case the flag
    /// is cleared. Returns `false` for stale completions.
    pub fn finish(&mut self, id: RequestId) -> bool {
        if self.latest == Some(id) {
            self.latest = None;
            true
        } else {
            false
        }
    }
}
