//! Top navigation bar.
//!
//! Renders against the shared `AuthState` signal, which the root `App`
//! keeps in sync with the session store, so a login or logout anywhere in
//! the app updates the links immediately.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthApi;
use crate::net::types::Role;
use crate::state::auth::AuthState;

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let auth_api = expect_context::<AuthApi>();
    let navigate = use_navigate();

    // Local teardown always succeeds; a failed server call is only worth
    // a console line.
    let logout = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let auth_api = auth_api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(err) = auth_api.logout().await {
                    leptos::logging::warn!("logout request failed: {err}");
                }
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth_api, &navigate);
        }
    });

    let is_admin = move || {
        auth.get()
            .user
            .is_some_and(|user| user.role == Role::Admin)
    };
    let user_name = move || auth.get().user.map(|user| user.name).unwrap_or_default();

    view! {
        <nav class="navbar">
            <A href="/" attr:class="navbar__brand">"Fleetdesk"</A>
            <ul class="navbar__links">
                <Show
                    when=move || auth.get().authenticated
                    fallback=|| {
                        view! {
                            <li>
                                <A href="/register">"S'inscrire"</A>
                            </li>
                            <li>
                                <A href="/login" attr:class="btn btn--primary">
                                    "Connexion"
                                </A>
                            </li>
                        }
                    }
                >
                    <li>
                        <A href="/vehicules">"Véhicules"</A>
                    </li>
                    <li>
                        <A href="/interventions">"Interventions"</A>
                    </li>
                    <Show when=is_admin>
                        <li>
                            <A href="/users">"Utilisateurs"</A>
                        </li>
                    </Show>
                    <li class="navbar__user">{user_name}</li>
                    <li>
                        <button class="btn" on:click=move |_| logout.run(())>
                            "Déconnexion"
                        </button>
                    </li>
                </Show>
            </ul>
        </nav>
    }
}
