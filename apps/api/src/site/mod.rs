pub mod handlers;
pub mod nav;
pub mod profile;
pub mod templates;
