//! `cn-network`: contact networks and the transmission evaluator.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                          |
//! |---------------|-------------------------------------------------------------------|
//! | [`group`]     | `GroupPolicy` trait, `SingleGroup`, `AssignedGroups`, `DiseaseGroups` |
//! | [`gate`]      | `ActivityGate` trait, `AlwaysOpen`, `FollowPlace`, `ClosedForDiseases`, `BothGates` |
//! | [`evaluator`] | `ContactNetwork` trait: contact rate and transmission probability |
//! | [`network`]   | `Network<G, A>`: place + shared parameters + policies            |
//! | [`error`]     | `NetworkError`, `NetworkResult<T>`                                |
//!
//! # Design notes
//!
//! A `Network` is built once during population setup and then only read.
//! Every evaluator method is a pure function of the shared
//! [`NetworkParams`][cn_params::NetworkParams], the network's policies and
//! the arguments, so the driver may evaluate networks, diseases and agent
//! pairs concurrently without locks.
//!
//! The random draws (how many contacts an agent actually makes, whether a
//! contact transmits) belong to the caller.  This crate only supplies the
//! means and probabilities.

pub mod error;
pub mod evaluator;
pub mod gate;
pub mod group;
pub mod network;


pub use error::{NetworkError, NetworkResult};
pub use evaluator::ContactNetwork;
pub use gate::{ActivityGate, ActivityGateExt, AlwaysOpen, BothGates, ClosedForDiseases, FollowPlace};
pub use group::{AssignedGroups, DiseaseGroups, GroupPolicy, SingleGroup};
pub use network::Network;
