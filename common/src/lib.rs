//! Browser-independent core of the worksite admin console.
//!
//! The frontend crate wires these types into Yew components; the host crate
//! only uses `model::config`. Nothing here touches the DOM or the network.

pub mod error;
pub mod form;
pub mod listing;
pub mod model;
pub mod requests;
