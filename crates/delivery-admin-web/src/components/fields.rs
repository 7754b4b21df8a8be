//! Form inputs bound to a field of a form signal

use leptos::prelude::*;

/// Read one field of a form signal
pub fn bind<F, T>(form: RwSignal<F>, get: fn(&F) -> T) -> Signal<T>
where
    F: Send + Sync + 'static,
    T: Clone + Send + Sync + 'static,
{
    Signal::derive(move || form.with(get))
}

/// Write one field of a form signal
pub fn setter<F, T>(form: RwSignal<F>, set: fn(&mut F, T)) -> Callback<T>
where
    F: Send + Sync + 'static,
    T: 'static,
{
    Callback::new(move |value| form.update(|f| set(f, value)))
}

fn label_text(label: &'static str, required: bool) -> String {
    if required {
        format!("{label} *")
    } else {
        label.to_string()
    }
}

/// Single line input
#[component]
pub fn TextField(
    /// Label text
    label: &'static str,
    /// Current value
    value: Signal<String>,
    /// Called on every keystroke
    on_input: Callback<String>,
    /// Inputs are locked while a submit is in flight
    #[prop(into)]
    disabled: Signal<bool>,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
    /// HTML input type
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label_text(label, required)}</span>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi line input
#[component]
pub fn TextArea(
    /// Label text
    label: &'static str,
    /// Current value
    value: Signal<String>,
    /// Called on every keystroke
    on_input: Callback<String>,
    /// Inputs are locked while a submit is in flight
    #[prop(into)]
    disabled: Signal<bool>,
    /// Marks the label with an asterisk
    #[prop(optional)]
    required: bool,
    /// Placeholder text
    #[prop(optional)]
    placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label_text(label, required)}</span>
            <textarea
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Drop-down over `(value, label)` pairs
#[component]
pub fn SelectField(
    /// Label text
    label: &'static str,
    /// Selectable `(value, label)` pairs
    options: &'static [(&'static str, &'static str)],
    /// Selected value
    value: Signal<String>,
    /// Called with the new value
    on_change: Callback<String>,
    /// Inputs are locked while a submit is in flight
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(option, text)| {
                        view! {
                            <option value=*option selected=move || value.get() == *option>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Labelled checkbox
#[component]
pub fn CheckboxField(
    /// Label text
    #[prop(into)]
    label: String,
    /// Current state
    checked: Signal<bool>,
    /// Called with the new state
    on_toggle: Callback<bool>,
    /// Inputs are locked while a submit is in flight
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class="field field-checkbox">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            <span>{label}</span>
        </label>
    }
}

/// Cancel and submit buttons at the bottom of every form
#[component]
pub fn FormActions(
    /// Submit button text
    submit_label: &'static str,
    /// Locks both buttons and swaps the submit text
    #[prop(into)]
    busy: Signal<bool>,
    /// Called by the cancel button
    on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-actions">
            <button
                type="button"
                class="btn btn-secondary"
                prop:disabled=move || busy.get()
                on:click=move |_| on_cancel.run(())
            >
                "Cancelar"
            </button>
            <button type="submit" class="btn btn-primary" prop:disabled=move || busy.get()>
                {move || if busy.get() { "Salvando..." } else { submit_label }}
            </button>
        </div>
    }
}
