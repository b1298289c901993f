//! Form field helpers shared by the resource forms.
//!
//! Each form keeps its payload in one `RwSignal<T>`; fields read and
//! write through plain accessor function pointers, which keeps the call
//! sites short without a macro.

use leptos::prelude::*;

pub fn text_field<T: Send + Sync + 'static>(
    label: &'static str,
    kind: &'static str,
    form: RwSignal<T>,
    read: fn(&T) -> &String,
    write: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <label class="form-label">
            {label}
            <input
                type=kind
                class="form-control"
                prop:value=move || form.with(|f| read(f).clone())
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        </label>
    }
}

pub fn select_field<T: Send + Sync + 'static>(
    label: &'static str,
    form: RwSignal<T>,
    options: &'static [(&'static str, &'static str)],
    read: fn(&T) -> &String,
    write: fn(&mut T, String),
) -> impl IntoView {
    view! {
        <label class="form-label">
            {label}
            <select
                class="form-select"
                prop:value=move || form.with(|f| read(f).clone())
                on:change=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            >
                {options
                    .iter()
                    .copied()
                    .map(|(value, text)| {
                        view! {
                            <option
                                value=value
                                selected=move || form.with(|f| read(f).as_str() == value)
                            >
                                {text}
                            </option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}
