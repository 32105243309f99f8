//! `cn-driver`: reference day loop for the contact_net transmission kernel.
//!
//! # Day loop
//!
//! ```text
//! for day in 0..config.days:
//!   for network (parallel with the `parallel` feature):
//!     for disease:
//!       ① Gate     : skip unless network.should_be_open(day, disease)
//!       ② Contacts : for each infectious member, round the mean contact
//!                     rate stochastically to an integer count
//!       ③ Partners : sample that many other members uniformly
//!       ④ Transmit : for each susceptible partner, accept with
//!                     get_transmission_prob(disease, infector, partner)
//!   ⑤ Merge      : keep one exposure per (disease, infectee)
//!   ⑥ Apply      : HealthTable::apply moves exposed agents S → I
//! ```
//!
//! The kernel crates never draw random numbers or change health state; this
//! crate is where both happen.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Evaluates networks on Rayon's thread pool.             |

pub mod builder;
pub mod driver;
pub mod error;
pub mod exposure;
pub mod health;
pub mod observer;

#[cfg(test)]
mod tests;

pub use builder::DriverBuilder;
pub use driver::{DayDriver, evaluate_network_day};
pub use error::{DriverError, DriverResult};
pub use exposure::{Exposure, NetworkDaySummary};
pub use health::{HealthState, HealthTable, HealthView};
pub use observer::{DayObserver, NoopObserver};
