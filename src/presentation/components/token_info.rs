use leptos::*;

use super::QueryInput;
use crate::application::endpoints::TokenInfoRequest;
use crate::infrastructure::http::{ApiClient, Transport};
use crate::presentation::RemoteResource;

#[component]
pub fn TokenInfoLookup<T: Transport + Clone + 'static>(client: ApiClient<T>) -> impl IntoView {
    let mint = create_rw_signal(String::new());
    let info = RemoteResource::<TokenInfoRequest, T>::new(client);

    let on_submit = move |_: ()| {
        let address = mint.get_untracked();
        if info.can_submit(&address) {
            info.submit(TokenInfoRequest::new(&address));
        }
    };

    view! {
        <section class="card">
            <h2 class="card-heading">"🎯 Token Info"</h2>
            <QueryInput
                value=mint
                on_submit=on_submit
                loading=Signal::derive(move || info.is_loading())
                placeholder="Enter token mint address"
                idle_label="Fetch"
                busy_label="Loading..."
            />
            {info.render(|token| view! { <pre class="token-info">{token.pretty()}</pre> }.into_view())}
        </section>
    }
}
