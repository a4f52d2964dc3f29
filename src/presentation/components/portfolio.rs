use leptos::*;

use super::{PortfolioCard, WalletInputForm};
use crate::application::endpoints::PortfolioRequest;
use crate::infrastructure::http::ApiClient;
use crate::presentation::RemoteResource;

#[component]
pub fn Portfolio(client: ApiClient) -> impl IntoView {
    let wallet_address = create_rw_signal(String::new());
    let portfolio = RemoteResource::<PortfolioRequest>::new(client);

    let on_submit = move |_: ()| {
        let address = wallet_address.get_untracked();
        if portfolio.can_submit(&address) {
            portfolio.submit(PortfolioRequest::new(&address));
        }
    };

    view! {
        <section class="card">
            <h2 class="card-heading">"Wallet Insight"</h2>
            <WalletInputForm
                wallet_address=wallet_address
                on_submit=on_submit
                loading=Signal::derive(move || portfolio.is_loading())
            />
            {portfolio.render(|result| view! { <PortfolioCard portfolio=result.clone() /> }.into_view())}
        </section>
    }
}
