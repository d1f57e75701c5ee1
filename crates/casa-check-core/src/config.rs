/// Configuration for the collaboration core.
#[derive(Debug, Clone)]
pub struct CollabConfig {
    /// Invitation expiration in seconds (default: 7 days).
    ///
    /// The original backend relied on an implicit persistence-layer default;
    /// here the TTL is an explicit, documented policy knob.
    pub invitation_expires_in: u64,
    /// Length of a canonical identifier (hyphenated UUID). Candidates at
    /// least this long bypass prefix resolution.
    pub canonical_id_length: usize,
}

impl Default for CollabConfig {
    fn default() -> Self {
        Self {
            invitation_expires_in: 60 * 60 * 24 * 7, // 7 days
            canonical_id_length: 36,
        }
    }
}

impl CollabConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn invitation_ttl(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.invitation_expires_in as i64)
    }
}
