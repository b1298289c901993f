//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::components::route_guard::RequireAuth;
use crate::net::auth::AuthApi;
use crate::net::http::ApiClient;
use crate::net::types::Role;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::interventions::{InterventionFormPage, InterventionListPage};
use crate::pages::login::LoginPage;
use crate::pages::register::RegisterPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::users::{UserFormPage, UserListPage};
use crate::pages::vehicles::{VehicleFormPage, VehicleListPage};
use crate::session::store::SessionStore;
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Wires the session store, API client, and auth service into context,
/// keeps the shared `AuthState` signal in sync with the store, and sets
/// up client-side routing with guarded resource routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionStore::new();
    let client = ApiClient::new(session.clone());
    let auth_api = AuthApi::new(client.clone(), session.clone());

    // Session-dependent chrome renders from this signal; the subscription
    // keeps it current for the lifetime of the app.
    let auth_state = RwSignal::new(AuthState::from_session(&session));
    {
        let observed = session.clone();
        session.subscribe(move |_| auth_state.set(AuthState::from_session(&observed)));
    }

    provide_context(session);
    provide_context(client);
    provide_context(auth_api);
    provide_context(auth_state);

    view! {
        <Stylesheet id="leptos" href="/pkg/fleetdesk.css"/>
        <Title text="Fleetdesk"/>

        <Router>
            <NavBar/>
            <main class="container">
                <Routes fallback=|| "Page non trouvée.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>

                    <Route
                        path=StaticSegment("")
                        view=|| view! { <RequireAuth><VehicleListPage/></RequireAuth> }
                    />
                    <Route
                        path=StaticSegment("vehicules")
                        view=|| view! { <RequireAuth><VehicleListPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("vehicules"), StaticSegment("new"))
                        view=|| view! { <RequireAuth><VehicleFormPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("vehicules"),
                            ParamSegment("id"),
                            StaticSegment("edit"),
                        )
                        view=|| view! { <RequireAuth><VehicleFormPage/></RequireAuth> }
                    />

                    <Route
                        path=StaticSegment("interventions")
                        view=|| view! { <RequireAuth><InterventionListPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("interventions"), StaticSegment("new"))
                        view=|| view! { <RequireAuth><InterventionFormPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("interventions"),
                            ParamSegment("id"),
                            StaticSegment("edit"),
                        )
                        view=|| view! { <RequireAuth><InterventionFormPage/></RequireAuth> }
                    />

                    <Route
                        path=StaticSegment("users")
                        view=|| {
                            view! {
                                <RequireAuth role=Role::Admin>
                                    <UserListPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("users"), StaticSegment("new"))
                        view=|| {
                            view! {
                                <RequireAuth role=Role::Admin>
                                    <UserFormPage/>
                                </RequireAuth>
                            }
                        }
                    />
                    <Route
                        path=(StaticSegment("users"), ParamSegment("id"), StaticSegment("edit"))
                        view=|| {
                            view! {
                                <RequireAuth role=Role::Admin>
                                    <UserFormPage/>
                                </RequireAuth>
                            }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}
