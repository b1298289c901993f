//! # fleetdesk
//!
//! Leptos + WASM front end for the Fleetdesk fleet-management backend:
//! authenticated CRUD screens for vehicles, maintenance interventions,
//! and users over a REST API.
//!
//! The interesting machinery is the session layer — durable token +
//! cached profile in `session`, credential attachment and 401 teardown in
//! `net::http`, the route guard in `components::route_guard`, and the
//! generic paginated list controller in `components::list_controller`.
//! Pages are thin views over those pieces.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(App);
}
