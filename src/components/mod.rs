//! Reusable UI pieces: session-aware navigation, the route guard, the
//! generic list controller, and form/pagination widgets.

pub mod form;
pub mod list_controller;
pub mod nav_bar;
pub mod pagination;
pub mod route_guard;
