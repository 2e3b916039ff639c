pub mod config;
pub mod error;
pub mod policy;
pub mod request;
pub mod snapshot;
pub mod state;
