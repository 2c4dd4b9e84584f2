//! `rh-dispatch` — matcher state, match policies, and the ride transaction.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`state`]    | `Driver`, `Passenger`, `MatcherState`                     |
//! | [`cache`]    | `PairTimeCache` (advisory travel-time cache)              |
//! | [`pool`]     | `AvailablePool` (deque), `PendingPool` (time-ordered heap)|
//! | [`context`]  | `MatchContext` — the view policies and the ride see       |
//! | [`policy`]   | `MatchPolicy` trait, `MatchChoice`                        |
//! | [`policies`] | the concrete policy family                                |
//! | [`ride`]     | `complete_ride` — the pickup+trip settlement              |
//! | [`metrics`]  | `Metrics`, subsystem timers, summary report               |
//! | [`error`]    | `DispatchError`, `DispatchResult<T>`                      |
//!
//! # Policy family
//!
//! | Policy                  | Selection                                        |
//! |-------------------------|--------------------------------------------------|
//! | [`FifoPolicy`]          | earliest sign-on (head of the pool)              |
//! | [`NearestDriverPolicy`] | smallest straight-line distance                  |
//! | [`BestPickupPolicy`]    | smallest routed pickup time (Dijkstra or A*)     |
//! | [`PrunedPickupPolicy`]  | routed pickup over the 10 nearest, early exit    |
//! | [`EquitablePolicy`]     | pickup time × per-driver assignment penalty      |
//! | [`TrafficAwarePolicy`]  | congestion-aware pickup time, commits the path   |
//! | [`PeakRetention`]       | wrapper: waives retirement during evening hours  |

pub mod cache;
pub mod context;
pub mod error;
pub mod metrics;
pub mod policies;
pub mod policy;
pub mod pool;
pub mod ride;
pub mod state;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cache::PairTimeCache;
pub use context::MatchContext;
pub use error::{DispatchError, DispatchResult};
pub use metrics::{Metrics, SubsystemTimer};
pub use policies::{
    BestPickupPolicy, EquitablePolicy, FifoPolicy, NearestDriverPolicy, PeakRetention,
    PrunedPickupPolicy, TrafficAwarePolicy,
};
pub use policy::{MatchChoice, MatchPolicy};
pub use pool::{AvailablePool, PendingPool};
pub use ride::{RideOutcome, complete_ride};
pub use state::{Driver, MatcherState, Passenger};
