// Infrastructure layer - External dependencies and adapters
pub mod backend_client;
pub mod config;
pub mod payloads;
