use leptos::*;

use crate::domain::portfolio::PortfolioResult;

#[component]
pub fn PortfolioCard(portfolio: PortfolioResult) -> impl IntoView {
    let rows = [
        ("Wallet", portfolio.wallet.clone()),
        ("SOL Balance", portfolio.balance_label()),
        ("Current SOL Price", portfolio.price_label()),
        ("Total Value", portfolio.value_label()),
    ];

    view! {
        <div class="portfolio-box">
            {rows
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="portfolio-item">
                            <span>{label}</span>
                            <span>{value}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
