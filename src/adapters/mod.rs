//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter         | Implements   | Connects to              |
//! |-----------------|--------------|--------------------------|
//! | `label_display` | DisplayPort  | In-memory labels + log   |
//! | `log_sink`      | EventSink    | Serial / stderr log      |
//!
//! The sensor and actuator adapters live in [`crate::sensors`] and
//! [`crate::drivers`].

pub mod label_display;
pub mod log_sink;
