pub mod client;
pub mod command;
pub mod config;
pub mod http;
pub mod view;

pub use client::{Action, ActionError, ErrorKind, Synchronizer};
pub use config::{ClientArgs, ClientConfig};
pub use http::{HttpTransport, Transport};
