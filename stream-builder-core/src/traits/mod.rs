pub mod backend;
pub mod policy_provider;
pub mod stream_delegate;
