use leptos::*;

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! { <div class="error-message">{message}</div> }
}
