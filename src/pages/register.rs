//! Registration page. A successful registration immediately chains a
//! login — `register` itself never establishes a session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::auth::AuthApi;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth_api = expect_context::<AuthApi>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        error.set(None);
        if password.get_untracked() != password_confirmation.get_untracked() {
            error.set(Some("Les mots de passe ne correspondent pas.".to_owned()));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let auth_api = auth_api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                let input = crate::net::types::RegisterInput {
                    name: name.get_untracked(),
                    email: email.get_untracked(),
                    password: password.get_untracked(),
                    password_confirmation: password_confirmation.get_untracked(),
                };
                let credentials = crate::net::types::Credentials {
                    email: input.email.clone(),
                    password: input.password.clone(),
                };
                let result = match auth_api.register(&input).await {
                    Ok(()) => auth_api.login(&credentials).await.map(|_| ()),
                    Err(err) => Err(err),
                };
                match result {
                    Ok(()) => navigate("/", leptos_router::NavigateOptions::default()),
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
                <h3>"Inscription"</h3>
                {move || {
                    error.get().map(|text| view! { <div class="alert alert--danger">{text}</div> })
                }}
                <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    submit.run(());
                }>
                    <label class="form-label">
                        "Nom"
                        <input
                            type="text"
                            class="form-control"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            required=true
                        />
                    </label>
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
                    <label class="form-label">
                        "Confirmation du mot de passe"
                        <input
                            type="password"
                            class="form-control"
                            prop:value=move || password_confirmation.get()
                            on:input=move |ev| password_confirmation.set(event_target_value(&ev))
                            required=true
                        />
                    </label>
                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Inscription..." } else { "S'inscrire" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
