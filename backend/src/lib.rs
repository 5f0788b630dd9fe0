//! HTTP front end for `vsm_search`.

pub mod api;
pub mod state;

pub use state::AppState;
