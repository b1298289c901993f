//! Vehicle list and form pages.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::form::{select_field, text_field};
use crate::components::list_controller::{ListController, ListText};
use crate::components::pagination::Pagination;
use crate::net::http::ApiClient;
use crate::net::types::{Vehicle, VehicleInput};
use crate::state::list::NoticeKind;

const VEHICLE_TEXT: ListText = ListText {
    load_failed: "Impossible de charger les véhicules. Veuillez réessayer plus tard.",
    confirm_delete: "Êtes-vous sûr de vouloir supprimer ce véhicule ?",
    deleted: "Véhicule supprimé avec succès",
    delete_failed: "Impossible de supprimer le véhicule",
};

const CARBURANTS: &[(&str, &str)] = &[
    ("essence", "Essence"),
    ("diesel", "Diesel"),
    ("electrique", "Electrique"),
    ("hybride", "Hybride"),
    ("gpl", "GPL"),
];
const TRANSMISSIONS: &[(&str, &str)] = &[
    ("traction", "Traction"),
    ("propulsion", "Propulsion"),
    ("integrale", "Intégrale"),
];
const BOITES: &[(&str, &str)] = &[
    ("manuelle", "Manuelle"),
    ("automatique", "Automatique"),
    ("semi-automatique", "Semi-Automatique"),
];
const TYPES_VEHICULE: &[(&str, &str)] = &[
    ("berline", "Berline"),
    ("suv", "SUV"),
    ("utilitaire", "Utilitaire"),
    ("camion", "Camion"),
    ("moto", "Moto"),
    ("autre", "Autre"),
];
const PTAC: &[(&str, &str)] = &[("leger", "Léger"), ("lourd", "Lourd")];

fn dash(value: Option<String>) -> String {
    value.filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_owned())
}

fn dash_unit<T: ToString>(value: Option<T>, unit: &str) -> String {
    value.map_or_else(|| "-".to_owned(), |v| format!("{} {unit}", v.to_string()))
}

#[component]
pub fn VehicleListPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let ctrl = ListController::<Vehicle>::new(client, VEHICLE_TEXT);
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
                <h3>"Liste des Véhicules"</h3>
                <div>
                    <button class="btn" on:click=move |_| refresh_ctrl.reload()>
                        "Actualiser"
                    </button>
                    <A href="/vehicules/new" attr:class="btn btn--primary">
                        "Ajouter"
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
                <p class="list-page__loading">"Chargement des véhicules..."</p>
            </Show>

            <div class="table-wrap">
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Marque"</th>
                            <th>"Modèle"</th>
                            <th>"Immatriculation"</th>
                            <th>"NIV"</th>
                            <th>"Type Véhicule"</th>
                            <th>"Type Carburant"</th>
                            <th>"Type Transmission"</th>
                            <th>"Type Boîte"</th>
                            <th>"PTAC"</th>
                            <th>"Poids"</th>
                            <th>"Longueur"</th>
                            <th>"Largeur"</th>
                            <th>"Hauteur"</th>
                            <th>"Kilométrage"</th>
                            <th>"Date Mise en Circulation"</th>
                            <th>"Numéro Flotte"</th>
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
                                        <td colspan="17" class="table__empty">
                                            "Aucun véhicule trouvé"
                                        </td>
                                    </tr>
                                }
                                    .into_any()
                            } else {
                                items
                                    .into_iter()
                                    .map(|vehicle| {
                                        let ctrl = ctrl.clone();
                                        let id = vehicle.id;
                                        view! {
                                            <tr>
                                                <td>{vehicle.marque}</td>
                                                <td>{vehicle.modele}</td>
                                                <td>{vehicle.immatriculation}</td>
                                                <td>{dash(vehicle.niv)}</td>
                                                <td>{dash(vehicle.type_vehicule)}</td>
                                                <td>{dash(vehicle.type_carburant)}</td>
                                                <td>{dash(vehicle.type_transmission)}</td>
                                                <td>{dash(vehicle.type_boite)}</td>
                                                <td>{dash(vehicle.ptac)}</td>
                                                <td>{dash_unit(vehicle.poids, "kg")}</td>
                                                <td>{dash_unit(vehicle.longueur, "mm")}</td>
                                                <td>{dash_unit(vehicle.largeur, "mm")}</td>
                                                <td>{dash_unit(vehicle.hauteur, "mm")}</td>
                                                <td>{dash_unit(vehicle.odometre, "km")}</td>
                                                <td>{dash(vehicle.date_mise_circulation)}</td>
                                                <td>{dash(vehicle.numero_flotte)}</td>
                                                <td>
                                                    <A
                                                        href=format!("/vehicules/{id}/edit")
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

/// Create and edit share this form; edit mode is driven by the `:id`
/// route parameter.
#[component]
pub fn VehicleFormPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let navigate = use_navigate();
    let params = use_params_map();
    let id = Memo::new(move |_| params.get().get("id").and_then(|v| v.parse::<i64>().ok()));

    let form = RwSignal::new(VehicleInput::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    // Prefill when editing.
    Effect::new({
        let client = client.clone();
        move || {
            if let Some(id) = id.get() {
                #[cfg(feature = "hydrate")]
                {
                    let client = client.clone();
                    leptos::task::spawn_local(async move {
                        match crate::net::resources::fetch_one::<Vehicle>(&client, id).await {
                            Ok(vehicle) => form.set(VehicleInput::from_vehicle(&vehicle)),
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
                        crate::net::resources::update::<Vehicle, _>(&client, id, &input).await
                    }
                    None => crate::net::resources::create::<Vehicle, _>(&client, &input).await,
                };
                match result {
                    Ok(()) => navigate("/vehicules", leptos_router::NavigateOptions::default()),
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
            <h2>
                {move || {
                    if id.get().is_some() { "Modifier le véhicule" } else { "Ajouter un Véhicule" }
                }}
            </h2>
            {move || {
                error.get().map(|text| view! { <div class="alert alert--danger">{text}</div> })
            }}
            <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                submit.run(());
            }>
                <div class="form-grid">
                    {text_field("Marque", "text", form, |f| &f.marque, |f, v| f.marque = v)}
                    {text_field("Modèle", "text", form, |f| &f.modele, |f, v| f.modele = v)}
                    {text_field(
                        "Immatriculation",
                        "text",
                        form,
                        |f| &f.immatriculation,
                        |f, v| f.immatriculation = v,
                    )}
                    {text_field("NIV", "text", form, |f| &f.niv, |f, v| f.niv = v)}
                    {text_field("Couleur", "text", form, |f| &f.couleur, |f, v| f.couleur = v)}
                    {text_field(
                        "Date de mise en circulation",
                        "date",
                        form,
                        |f| &f.date_mise_circulation,
                        |f, v| f.date_mise_circulation = v,
                    )}
                    {text_field(
                        "Kilométrage (km)",
                        "number",
                        form,
                        |f| &f.odometre,
                        |f, v| f.odometre = v,
                    )}
                    {select_field(
                        "Type Carburant",
                        form,
                        CARBURANTS,
                        |f| &f.type_carburant,
                        |f, v| f.type_carburant = v,
                    )}
                    {select_field(
                        "Type Transmission",
                        form,
                        TRANSMISSIONS,
                        |f| &f.type_transmission,
                        |f, v| f.type_transmission = v,
                    )}
                    {select_field(
                        "Type Boîte",
                        form,
                        BOITES,
                        |f| &f.type_boite,
                        |f, v| f.type_boite = v,
                    )}
                    {select_field(
                        "Type Véhicule",
                        form,
                        TYPES_VEHICULE,
                        |f| &f.type_vehicule,
                        |f, v| f.type_vehicule = v,
                    )}
                    {select_field("PTAC", form, PTAC, |f| &f.ptac, |f, v| f.ptac = v)}
                    {text_field("Poids (kg)", "number", form, |f| &f.poids, |f, v| f.poids = v)}
                    {text_field(
                        "Longueur (mm)",
                        "number",
                        form,
                        |f| &f.longueur,
                        |f, v| f.longueur = v,
                    )}
                    {text_field(
                        "Largeur (mm)",
                        "number",
                        form,
                        |f| &f.largeur,
                        |f, v| f.largeur = v,
                    )}
                    {text_field(
                        "Hauteur (mm)",
                        "number",
                        form,
                        |f| &f.hauteur,
                        |f, v| f.hauteur = v,
                    )}
                    {text_field(
                        "Numéro Flotte",
                        "text",
                        form,
                        |f| &f.numero_flotte,
                        |f, v| f.numero_flotte = v,
                    )}
                </div>
                <div class="form-page__actions">
                    <A href="/vehicules" attr:class="btn">
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
