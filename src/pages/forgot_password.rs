//! Password reset request page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::net::auth::AuthApi;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let auth_api = expect_context::<AuthApi>();

    let email = RwSignal::new(String::new());
    let message = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            let auth_api = auth_api.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                error.set(None);
                message.set(None);
                match auth_api.forgot_password(&email.get_untracked()).await {
                    // Same wording whether or not the account exists.
                    Ok(()) => message.set(Some(
                        "Un lien de réinitialisation a été envoyé à votre adresse email si elle existe dans notre système."
                            .to_owned(),
                    )),
                    Err(err) => error.set(Some(err.user_message())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &auth_api;
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
                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Envoi..." } else { "Envoyer le lien" }}
                    </button>
                </form>
                <p class="auth-page__hint">
                    <A href="/login">"Retour à la connexion"</A>
                </p>
            </div>
        </div>
    }
}
