// Presentation layer - HTTP routes and renderers
pub mod app_state;
pub mod handlers;
pub mod routes;
pub mod text_renderer;
pub mod view_mapper;
