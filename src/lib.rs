//! eventdeck
//!
//! Terminal discovery browser for fitness events: a paged carousel with
//! wheel/trackpad disambiguation and a live case-insensitive search.
//!
//! Pure core (`model`, `state`) and impure shell (`source`, `view`,
//! `logging`, `config`).

pub mod config;
pub mod logging;
pub mod model;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
