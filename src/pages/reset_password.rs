//! Password reset page, reached from the emailed link carrying `token`
//! and `email` query parameters.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::auth::AuthApi;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let auth_api = expect_context::<AuthApi>();
    let navigate = use_navigate();
    let query = use_query_map();

    let token = Memo::new(move |_| query.get().get("token").unwrap_or_default());
    let email = Memo::new(move |_| query.get().get("email").unwrap_or_default());
    let link_valid = move || !token.get().is_empty() && !email.get().is_empty();

    let password = RwSignal::new(String::new());
    let password_confirmation = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        error.set(None);
        if password.get_untracked() != password_confirmation.get_untracked() {
            error.set(Some("Les mots de passe ne correspondent pas.".to_owned()));
            return;
        }
        if password.get_untracked().len() < 8 {
            error.set(Some(
                "Le mot de passe doit contenir au moins 8 caractères.".to_owned(),
            ));
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let auth_api = auth_api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                let input = crate::net::types::ResetPasswordInput {
                    email: email.get_untracked(),
                    token: token.get_untracked(),
                    password: password.get_untracked(),
                    password_confirmation: password_confirmation.get_untracked(),
                };
                match auth_api.reset_password(&input).await {
                    Ok(()) => {
                        message.set(Some(
                            "Votre mot de passe a été réinitialisé avec succès.".to_owned(),
                        ));
                        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
                        navigate("/login", leptos_router::NavigateOptions::default());
                    }
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
                <h3>"Réinitialisation du mot de passe"</h3>
                {move || {
                    message.get().map(|text| view! { <div class="alert alert--success">{text}</div> })
                }}
                {move || {
                    error.get().map(|text| view! { <div class="alert alert--danger">{text}</div> })
                }}
                <Show
                    when=link_valid
                    fallback=|| {
                        view! {
                            <div class="alert alert--danger">
                                "Le lien de réinitialisation est invalide ou a expiré."
                            </div>
                        }
                    }
                >
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
                                readonly=true
                                disabled=true
                            />
                        </label>
                        <label class="form-label">
                            "Nouveau mot de passe"
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
                            {move || {
                                if pending.get() { "Réinitialisation..." } else { "Réinitialiser" }
                            }}
                        </button>
                    </form>
                </Show>
            </div>
        </div>
    }
}
