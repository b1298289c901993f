//! User management pages (admin only — routing enforces the role).

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::form::{select_field, text_field};
use crate::components::list_controller::{ListController, ListText};
use crate::components::pagination::Pagination;
use crate::net::http::ApiClient;
use crate::net::types::{Role, UserProfile};
use crate::session::store::SessionStore;
use crate::state::list::NoticeKind;

const USER_TEXT: ListText = ListText {
    load_failed: "Impossible de charger les utilisateurs. Veuillez réessayer plus tard.",
    confirm_delete: "Êtes-vous sûr de vouloir supprimer cet utilisateur ?",
    deleted: "Utilisateur supprimé avec succès",
    delete_failed: "Impossible de supprimer l'utilisateur",
};

const ROLES: &[(&str, &str)] = &[
    ("user", "Utilisateur"),
    ("manager", "Gestionnaire"),
    ("admin", "Administrateur"),
];

fn role_badge(role: Role) -> &'static str {
    match role {
        Role::Admin => "badge badge--danger",
        Role::Manager => "badge badge--warning",
        Role::User => "badge badge--info",
    }
}

fn dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_owned())
}

#[component]
pub fn UserListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let ctrl = ListController::<UserProfile>::new(client, USER_TEXT);
    let state = ctrl.state;
    let me_id = session.user().map(|u| u.id);

    Effect::new({
        let ctrl = ctrl.clone();
        move || ctrl.load(1)
    });

    let refresh_ctrl = ctrl.clone();
    let retry_ctrl = ctrl.clone();
    let pager_ctrl = ctrl.clone();
    let rows_ctrl = ctrl.clone();

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h3>"Gestion des Utilisateurs"</h3>
                <div>
                    <button class="btn" on:click=move |_| refresh_ctrl.reload()>
                        "Actualiser"
                    </button>
                    <A href="/users/new" attr:class="btn btn--primary">
                        "Nouvel Utilisateur"
                    </A>
                </div>
            </header>

            {move || {
                state
                    .get()
                    .notice
                    .map(|notice| {
                        let class = match notice.kind {
                            NoticeKind::Success => "alert alert--success",
                            NoticeKind::Error => "alert alert--danger",
                        };
                        view! { <div class=class>{notice.text}</div> }
                    })
            }}
            {move || {
                let ctrl = retry_ctrl.clone();
                state
                    .get()
                    .error
                    .map(|text| {
                        view! {
                            <div class="alert alert--danger">
                                {text}
                                <button class="btn btn--small" on:click=move |_| ctrl.reload()>
                                    "Réessayer"
                                </button>
                            </div>
                        }
                    })
            }}
            <Show when=move || state.get().loading>
                <p class="list-page__loading">"Chargement des utilisateurs..."</p>
            </Show>

            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Nom"</th>
                            <th>"Email"</th>
                            <th>"Rôle"</th>
                            <th>"Date de création"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let ctrl = rows_ctrl.clone();
                            let items = state.get().items;
                            if items.is_empty() {
                                view! {
                                    <tr>
                                        <td colspan="6" class="table__empty">
                                            "Aucun utilisateur trouvé"
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|user| {
                                        let ctrl = ctrl.clone();
                                        let id = user.id;
                                        let is_me = me_id == Some(id);
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{user.name}</td>
                                                <td>{user.email}</td>
                                                <td>
                                                    <span class=role_badge(
                                                        user.role,
                                                    )>{user.role.label()}</span>
                                                </td>
                                                <td>{dash(user.created_at)}</td>
                                                <td>
                                                    <A
                                                        href=format!("/users/{id}/edit")
                                                        attr:class="btn btn--small"
                                                    >
                                                        "Modifier"
                                                    </A>
                                                    <button
                                                        class="btn btn--danger btn--small"
                                                        disabled=is_me
                                                        on:click=move |_| {
                                                            if is_me {
                                                                ctrl.notify_error(
                                                                    "Vous ne pouvez pas supprimer votre propre compte.",
                                                                );
                                                            } else {
                                                                ctrl.delete(id);
                                                            }
                                                        }
                                                    >
                                                        "Supprimer"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                                    .into_any()
                            }
                        }}
                    </tbody>
                </table>
            </div>

            <Pagination
                current_page=Signal::derive(move || state.get().current_page)
                total_pages=Signal::derive(move || state.get().total_pages)
                on_select=Callback::new(move |page| pager_ctrl.load(page))
            />
        </div>
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct UserForm {
    name: String,
    email: String,
    role: String,
    password: String,
    password_confirmation: String,
}

#[component]
pub fn UserFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = Memo::new(move |_| params.get().get("id").and_then(|v| v.parse::<i64>().ok()));

    let form = RwSignal::new(UserForm {
        role: "user".to_owned(),
        ..UserForm::default()
    });
    let change_password = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    Effect::new({
        let client = client.clone();
        move || {
            if let Some(id) = id.get() {
                #[cfg(feature = "hydrate")]
                {
                    let client = client.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::resources::fetch_one::<UserProfile>(&client, id).await {
                            Ok(user) => {
                                form.set(UserForm {
                                    name: user.name,
                                    email: user.email,
                                    role: user.role.as_str().to_owned(),
                                    password: String::new(),
                                    password_confirmation: String::new(),
                                });
                            }
                            Err(crate::net::error::ApiError::Unauthorized) => {}
                            Err(err) => error.set(Some(err.user_message())),
                        }
                    });
                }
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (&client, id);
                }
            }
        }
    });

    let submit = Callback::new(move |()| {
        error.set(None);
        let editing = id.get_untracked();
        let wants_password = editing.is_none() || change_password.get_untracked();
        let current = form.get_untracked();
        if wants_password {
            if current.password != current.password_confirmation {
                error.set(Some("Les mots de passe ne correspondent pas.".to_owned()));
                return;
            }
            if current.password.len() < 8 {
                error.set(Some(
                    "Le mot de passe doit contenir au moins 8 caractères.".to_owned(),
                ));
                return;
            }
        }
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let session = session.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                let role = Role::parse(&current.role).unwrap_or_default();
                let input = crate::net::types::UserInput {
                    name: current.name.clone(),
                    email: current.email.clone(),
                    role,
                    password: wants_password.then(|| current.password.clone()),
                    password_confirmation: wants_password
                        .then(|| current.password_confirmation.clone()),
                };
                let result = match editing {
                    Some(id) => {
                        crate::net::resources::update::<UserProfile, _>(&client, id, &input).await
                    }
                    None => crate::net::resources::create::<UserProfile, _>(&client, &input).await,
                };
                match result {
                    Ok(()) => {
                        // Editing your own account refreshes the cached
                        // profile so the nav shows the new name.
                        if let Some(mut me) = session.user() {
                            if editing == Some(me.id) {
                                me.name = current.name.clone();
                                me.email = current.email.clone();
                                me.role = role;
                                if let Err(err) = session.replace_user(&me) {
                                    leptos::logging::warn!("profile cache refresh failed: {err}");
                                }
                            }
                        }
                        navigate("/users", leptos_router::NavigateOptions::default());
                    }
                    Err(crate::net::error::ApiError::Unauthorized) => {}
                    Err(err) => error.set(Some(err.user_message())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &session, &navigate);
        }
    });

    view! {
        <div class="form-page">
            <h2>
                {move || {
                    if id.get().is_some() { "Modifier l'utilisateur" } else { "Ajouter un utilisateur" }
                }}
            </h2>
            {move || {
                error.get().map(|text| view! { <div class="alert alert--danger">{text}</div> })
            }}
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }>
                {text_field("Nom", "text", form, |f| &f.name, |f, v| f.name = v)}
                {text_field("Email", "email", form, |f| &f.email, |f, v| f.email = v)}
                {select_field("Rôle", form, ROLES, |f| &f.role, |f, v| f.role = v)}

                <Show when=move || id.get().is_some()>
                    <label class="form-check">
                        <input
                            type="checkbox"
                            prop:checked=move || change_password.get()
                            on:change=move |ev| change_password.set(event_target_checked(&ev))
                        />
                        "Changer le mot de passe"
                    </label>
                </Show>

                <Show when=move || id.get().is_none() || change_password.get()>
                    {text_field(
                        "Mot de passe",
                        "password",
                        form,
                        |f| &f.password,
                        |f, v| f.password = v,
                    )}
                    {text_field(
                        "Confirmation du mot de passe",
                        "password",
                        form,
                        |f| &f.password_confirmation,
                        |f, v| f.password_confirmation = v,
                    )}
                </Show>

                <div class="form-page__actions">
                    <A href="/users" attr:class="btn">
                        "Annuler"
                    </A>
                    <button type="submit" class="btn btn--primary" disabled=move || pending.get()>
                        {move || if pending.get() { "Enregistrement..." } else { "Enregistrer" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
