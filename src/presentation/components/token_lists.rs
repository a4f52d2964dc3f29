use leptos::*;

use crate::application::endpoints::{AllTokensRequest, TopTokensRequest};
use crate::infrastructure::http::{ApiClient, Transport};
use crate::presentation::RemoteResource;

#[component]
pub fn AllTokens<T: Transport + Clone + 'static>(client: ApiClient<T>) -> impl IntoView {
    let tokens = RemoteResource::<AllTokensRequest, T>::new(client);

    view! {
        <section class="card">
            <h2 class="card-heading">"📜 All Tokens (First 20)"</h2>
            <button
                class="submit-button"
                disabled=move || tokens.is_loading()
                on:click=move |_| tokens.submit(AllTokensRequest)
            >
                {move || if tokens.is_loading() { "Loading..." } else { "Load Tokens" }}
            </button>
            {tokens
                .render(|listings| {
                    view! {
                        <ul class="token-list">
                            {listings
                                .iter()
                                .map(|listing| view! { <li>{listing.label()}</li> })
                                .collect_view()}
                        </ul>
                    }
                        .into_view()
                })}
        </section>
    }
}

#[component]
pub fn TopTokens<T: Transport + Clone + 'static>(client: ApiClient<T>) -> impl IntoView {
    let top = RemoteResource::<TopTokensRequest, T>::new(client);

    view! {
        <section class="card">
            <h2 class="card-heading">"🚀 Top Tokens"</h2>
            <button
                class="submit-button"
                disabled=move || top.is_loading()
                on:click=move |_| top.submit(TopTokensRequest::default())
            >
                {move || if top.is_loading() { "Loading..." } else { "Fetch Top Tokens" }}
            </button>
            {top
                .render(|ranked| {
                    view! {
                        <ol class="token-list">
                            {ranked
                                .iter()
                                .map(|token| view! { <li>{token.label()}</li> })
                                .collect_view()}
                        </ol>
                    }
                        .into_view()
                })}
        </section>
    }
}
