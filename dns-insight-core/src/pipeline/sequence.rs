//! Per-pipeline request numbering

use crate::types::RequestId;

/// Hands out increasing request ids and remembers the latest one issued
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn next(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Latest id issued, if any
    pub fn latest(&self) -> Option<RequestId> {
        (self.latest > 0).then_some(RequestId(self.latest))
    }

    pub fn is_latest(&self, id: RequestId) -> bool {
        self.latest > 0 && id.0 == self.latest
    }
}
