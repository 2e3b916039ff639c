pub mod decision;
pub mod privacy;
pub mod resolver;
pub mod static_provider;
