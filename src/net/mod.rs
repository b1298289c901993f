//! REST plumbing: typed wire shapes, the credential-attaching HTTP
//! client, the auth service, and generic resource CRUD.

pub mod auth;
pub mod error;
pub mod http;
pub mod resources;
pub mod types;
