use leptos::*;

use crate::application::resource::submit_enabled;

/// Controlled text field plus submit button. Holds no state of its own.
#[component]
pub fn QueryInput(
    value: RwSignal<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] placeholder: String,
    #[prop(default = "Analyze")] idle_label: &'static str,
    #[prop(default = "Analyzing...")] busy_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="input-group">
            <input
                type="text"
                class="text-input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <button
                class="submit-button"
                disabled=move || !submit_enabled(&value.get(), loading.get())
                on:click=move |_| on_submit.call(())
            >
                {move || if loading.get() { busy_label } else { idle_label }}
            </button>
        </div>
    }
}

#[component]
pub fn WalletInputForm(
    wallet_address: RwSignal<String>,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] loading: Signal<bool>,
) -> impl IntoView {
    view! {
        <QueryInput
            value=wallet_address
            on_submit=on_submit
            loading=loading
            placeholder="Enter your Solana wallet address"
        />
    }
}
