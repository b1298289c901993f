//! Login page.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthApi;

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth_api = expect_context::<AuthApi>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let auth_api = auth_api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                error.set(None);
                let credentials = crate::net::types::Credentials {
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                };
                match auth_api.login(&credentials).await {
                    Ok(_) => navigate("/", leptos_router::NavigateOptions::default()),
                    Err(err) => error.set(Some(err.user_message())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth_api, &navigate);
        }
    });

    view! {
        <div class="auth-page">
            <div class="card">
                <h3>"Connexion"</h3>
                {move || {
                    error.get().map(|text| view! { <div class="alert alert--danger">{text}</div> })
                }}
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="form-label">
                        "Email"
                        <input
                            type="email"
                            class="form-control"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required=true
                        />
                    </label>
                    <label class="form-label">
                        "Mot de passe"
                        <input
                            type="password"
                            class="form-control"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required=true
                        />
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Connexion..." } else { "Se connecter" }}
                    </button>
                </form>
                <p class="auth-page__hint">
                    <A href="/forgot-password">"Mot de passe oublié ?"</A>
                </p>
            </div>
        </div>
    }
}
