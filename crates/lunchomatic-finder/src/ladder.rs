//! Endpoint/radius fallback ladder.
//!
//! On a transient failure the ladder first tries the same radius on the next
//! endpoint. Once every endpoint has failed at a radius it drops to the next
//! smaller tier and restarts from the primary endpoint. After the smallest
//! tier on the last endpoint there is nowhere left to go.
//!
//! | Step | Tier  | Endpoint  |
//! |------|-------|-----------|
//! | 1    | 8000  | primary   |
//! | 2    | 8000  | secondary |
//! | 3    | 5000  | primary   |
//! | 4    | 5000  | secondary |
//! | 5    | 3000  | primary   |
//! | 6    | 3000  | secondary |

/// Position within the ladder: which radius tier, which endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderPosition {
    pub tier_index: usize,
    pub endpoint_index: usize,
}

/// The shape of the ladder. Holds no per-search state, so one value can be
/// shared by any number of searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackLadder {
    tier_count: usize,
    endpoint_count: usize,
}

impl FallbackLadder {
    /// Both counts are clamped to at least one.
    #[must_use]
    pub fn new(tier_count: usize, endpoint_count: usize) -> Self {
        Self {
            tier_count: tier_count.max(1),
            endpoint_count: endpoint_count.max(1),
        }
    }

    /// Largest radius, primary endpoint.
    #[must_use]
    pub fn start(&self) -> LadderPosition {
        LadderPosition {
            tier_index: 0,
            endpoint_index: 0,
        }
    }

    /// Where to go after a transient failure at `pos`, or `None` when exhausted.
    #[must_use]
    pub fn next(&self, pos: LadderPosition) -> Option<LadderPosition> {
        if pos.endpoint_index + 1 < self.endpoint_count {
            return Some(LadderPosition {
                tier_index: pos.tier_index,
                endpoint_index: pos.endpoint_index + 1,
            });
        }
        if pos.tier_index + 1 < self.tier_count {
            return Some(LadderPosition {
                tier_index: pos.tier_index + 1,
                endpoint_index: 0,
            });
        }
        None
    }

    /// Upper bound on attempts a single search can issue.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.tier_count * self.endpoint_count
    }
}
