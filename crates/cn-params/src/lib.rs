//! `cn-params`: the per-disease parameter table shared by every contact
//! network.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`table`]   | `NetworkParams`: contact rates + transmission matrix       |
//! | [`loader`]  | `get_parameters`, JSON and CSV loaders                      |
//! | [`error`]   | `ParamsError`, `ParamsResult<T>`                            |
//!
//! # Lifecycle
//!
//! The table is built exactly once, before the first simulated day, and is
//! immutable afterwards.  Callers share it as `Arc<NetworkParams>`; the
//! construction-then-`Arc` hand-off is what orders the single write before
//! every read, so no locking is involved.

pub mod error;
pub mod loader;
pub mod table;


pub use error::{ParamsError, ParamsResult};
pub use loader::{
    get_parameters, load_params_csv, load_params_csv_reader, load_params_json,
    load_params_json_reader,
};
pub use table::NetworkParams;
