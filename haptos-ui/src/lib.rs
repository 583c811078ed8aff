//! VP dispatch and screen-navigation engine
//!
//! This crate is the core of the Haptos display bridge:
//!
//! - `VpTable`: address-keyed registry of VP descriptors, validated at load
//! - `ScreenMap`: per-screen VP subscription lists and navigation metadata
//! - `UiEngine`: inbound dispatch and periodic push of the active screen
//! - `Navigator`: screen-transition state machine with idle preconditions
//! - `handlers`: building blocks for concrete VP handlers
//!
//! # Architecture
//!
//! Inbound: `(address, payload)` events from the transport are looked up in
//! the table and routed to the descriptor's write handler, which mutates
//! machine state through the `MachineState` capability or requests a screen
//! change. Outbound: on each refresh tick the active screen's subscription
//! list is walked in declared order and each push handler's payload is
//! handed to the transport.
//!
//! Everything runs to completion on the owner's control-loop tick; nothing
//! here blocks or suspends. Navigation requested from inside a write
//! handler is deferred to the next tick so a handler can never re-enter the
//! refresh iteration.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod diag;
pub mod dispatch;
pub mod handlers;
pub mod navigator;
pub mod screens;
pub mod vp;

#[cfg(any(test, feature = "mock"))]
pub mod testing;

pub use diag::Diagnostics;
pub use dispatch::{NavRequest, UiContext, UiEngine};
pub use navigator::{NavOutcome, Navigator};
pub use screens::{ScreenDef, ScreenMap};
pub use vp::{ConfigError, PushHandler, VpDescriptor, VpHandler, VpTable, WriteHandler};
