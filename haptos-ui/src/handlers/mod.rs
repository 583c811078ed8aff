//! Handler building blocks
//!
//! Concrete VP handlers are narrow adapters between a VP's raw bytes and
//! a strongly-typed operation on the machine capability. This module
//! provides the shared pieces: fixed-point and string value helpers, and
//! the sub-action tables used by control VPs.

pub mod control;
pub mod value;

pub use control::{action_arg, action_code, dispatch_sub_action, SubAction};
pub use value::{push_scaled, push_text, push_u16, write_scaled};
