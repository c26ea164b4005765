//! Change notification system.
//!
//! - `event`: The closed set of notifications and their flat record view
//! - `dispatcher`: Observer registration and synchronous delivery

pub mod dispatcher;
pub mod event;

pub use dispatcher::{EventDispatcher, EventQueue, Listener, ListenerId};
pub use event::{EventKind, EventRecord, GameEvent};
