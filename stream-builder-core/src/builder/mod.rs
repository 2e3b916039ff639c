pub mod factory;
pub mod handoff;
pub mod orchestrator;
pub mod validator;
