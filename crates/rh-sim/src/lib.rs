//! `rh-sim` — the event-driven dispatch loop.
//!
//! # Loop shape
//!
//! ```text
//! init:     pending ← all driver sign-ons; T ← first request; admit it
//! iterate:  ① Promote — pending drivers with available_at ≤ T join the
//!                       available pool, in sign-on order
//!           ② Serve   — while drivers and waiting passengers both exist:
//!                       pop the longest-waiting passenger, let the policy
//!                       pick a driver, settle the ride, re-queue the
//!                       driver (unless retired)
//!           ③ Advance — admit the next request and move T to it;
//!                       terminate when the stream is exhausted
//! ```
//!
//! The loop is a plain single-threaded state machine: no suspension
//! points, no I/O, no shared state.  Observers receive callbacks at step,
//! match, retirement, and skip boundaries for tracing.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rh_dispatch::FifoPolicy;
//! use rh_sim::{NoopObserver, SimulationBuilder};
//!
//! let mut sim = SimulationBuilder::new(network, drivers, passengers, FifoPolicy).build()?;
//! let report = sim.run(&mut NoopObserver)?;
//! println!("{}", report.metrics.summary());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod sim;


pub use builder::SimulationBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use sim::{SimReport, Simulation};
