//! Maintenance intervention list and form pages.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::form::{select_field, text_field};
use crate::components::list_controller::{ListController, ListText};
use crate::components::pagination::Pagination;
use crate::net::http::ApiClient;
use crate::net::types::{Intervention, InterventionInput};
use crate::state::list::NoticeKind;

const INTERVENTION_TEXT: ListText = ListText {
    load_failed: "Impossible de charger les interventions. Veuillez réessayer plus tard.",
    confirm_delete: "Êtes-vous sûr de vouloir supprimer cette intervention ?",
    deleted: "Intervention supprimée avec succès",
    delete_failed: "Impossible de supprimer l'intervention",
};

const STATUTS: &[(&str, &str)] = &[
    ("programmée", "Programmée"),
    ("en_cours", "En cours"),
    ("terminée", "Terminée"),
    ("annulée", "Annulée"),
];

fn statut_class(statut: Option<&str>) -> &'static str {
    match statut {
        Some("terminée") => "badge badge--success",
        Some("en_cours") => "badge badge--warning",
        Some("programmée") => "badge badge--info",
        _ => "badge",
    }
}

fn vehicle_cell(intervention: &Intervention) -> String {
    match (&intervention.vehicule, intervention.vehicule_id) {
        (Some(v), _) => format!("{} {} ({})", v.marque, v.modele, v.immatriculation),
        (None, Some(id)) => format!("ID: {id}"),
        (None, None) => "-".to_owned(),
    }
}

fn dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_owned())
}

#[component]
pub fn InterventionListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let ctrl = ListController::<Intervention>::new(client, INTERVENTION_TEXT);
    let state = ctrl.state;

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
                <h3>"Liste des Interventions"</h3>
                <div>
                    <button class="btn" on:click=move |_| refresh_ctrl.reload()>
                        "Actualiser"
                    </button>
                    <A href="/interventions/new" attr:class="btn btn--primary">
                        "Nouvelle Intervention"
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
                <p class="list-page__loading">"Chargement des interventions..."</p>
            </Show>

            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Véhicule"</th>
                            <th>"Nature"</th>
                            <th>"Fait générateur"</th>
                            <th>"Date"</th>
                            <th>"Statut"</th>
                            <th>"Coût"</th>
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
                                        <td colspan="8" class="table__empty">
                                            "Aucune intervention trouvée"
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|intervention| {
                                        let ctrl = ctrl.clone();
                                        let id = intervention.id;
                                        let vehicle = vehicle_cell(&intervention);
                                        let badge = statut_class(intervention.statut.as_deref());
                                        let statut = intervention
                                            .statut
                                            .clone()
                                            .unwrap_or_else(|| "Non défini".to_owned());
                                        let cout = intervention
                                            .cout
                                            .map_or_else(|| "-".to_owned(), |c| format!("{c} €"));
                                        view! {
                                            <tr>
                                                <td>{id}</td>
                                                <td>{vehicle}</td>
                                                <td>{dash(intervention.nature_intervention)}</td>
                                                <td>{dash(intervention.fait_generateur)}</td>
                                                <td>{dash(intervention.date_intervention)}</td>
                                                <td>
                                                    <span class=badge>{statut}</span>
                                                </td>
                                                <td>{cout}</td>
                                                <td>
                                                    <A
                                                        href=format!("/interventions/{id}/edit")
                                                        attr:class="btn btn--small"
                                                    >
                                                        "Éditer"
                                                    </A>
                                                    <button
                                                        class="btn btn--danger btn--small"
                                                        on:click=move |_| ctrl.delete(id)
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

#[component]
pub fn InterventionFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = Memo::new(move |_| params.get().get("id").and_then(|v| v.parse::<i64>().ok()));

    let form = RwSignal::new(InterventionInput {
        statut: "programmée".to_owned(),
        ..InterventionInput::default()
    });
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
                        match crate::net::resources::fetch_one::<Intervention>(&client, id).await {
                            Ok(intervention) => {
                                form.set(InterventionInput {
                                    vehicule_id: intervention
                                        .vehicule_id
                                        .map(|v| v.to_string())
                                        .unwrap_or_default(),
                                    nature_intervention: intervention
                                        .nature_intervention
                                        .unwrap_or_default(),
                                    fait_generateur: intervention
                                        .fait_generateur
                                        .unwrap_or_default(),
                                    date_intervention: intervention
                                        .date_intervention
                                        .unwrap_or_default(),
                                    statut: intervention.statut.unwrap_or_default(),
                                    cout: intervention
                                        .cout
                                        .map(|c| c.to_string())
                                        .unwrap_or_default(),
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
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                pending.set(true);
                error.set(None);
                let input = form.get_untracked();
                let result = match id.get_untracked() {
                    Some(id) => {
                        crate::net::resources::update::<Intervention, _>(&client, id, &input).await
                    }
                    None => {
                        crate::net::resources::create::<Intervention, _>(&client, &input).await
                    }
                };
                match result {
                    Ok(()) => navigate("/interventions", leptos_router::NavigateOptions::default()),
                    Err(crate::net::error::ApiError::Unauthorized) => {}
                    Err(err) => error.set(Some(err.user_message())),
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&client, &navigate);
        }
    });

    view! {
        <div class="form-page">
            <h3>
                {move || {
                    if id.get().is_some() {
                        "Modifier l'intervention"
                    } else {
                        "Ajouter une Intervention"
                    }
                }}
            </h3>
            {move || {
                error.get().map(|text| view! { <div class="alert alert--danger">{text}</div> })
            }}
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }>
                {text_field(
                    "Véhicule (ID)",
                    "number",
                    form,
                    |f| &f.vehicule_id,
                    |f, v| f.vehicule_id = v,
                )}
                {text_field(
                    "Nature de l'intervention",
                    "text",
                    form,
                    |f| &f.nature_intervention,
                    |f, v| f.nature_intervention = v,
                )}
                {text_field(
                    "Fait générateur",
                    "text",
                    form,
                    |f| &f.fait_generateur,
                    |f, v| f.fait_generateur = v,
                )}
                {text_field(
                    "Date",
                    "date",
                    form,
                    |f| &f.date_intervention,
                    |f, v| f.date_intervention = v,
                )}
                {select_field("Statut", form, STATUTS, |f| &f.statut, |f, v| f.statut = v)}
                {text_field("Coût (€)", "number", form, |f| &f.cout, |f, v| f.cout = v)}
                <div class="form-page__actions">
                    <A href="/interventions" attr:class="btn">
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
