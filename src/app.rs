use leptos::*;

use crate::infrastructure::http::ApiClient;
use crate::presentation::components::{Portfolio, SolPriceHistory, TokenSentiment, TradeSignals};

/// Root view. Each panel owns its own request state; nothing is shared between them.
#[component]
pub fn App(client: ApiClient) -> impl IntoView {
    view! {
        <style>
            {r#"
            .coinme-app {
                font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
                background: #0d1117;
                min-height: 100vh;
                padding: 24px;
                color: #c9d1d9;
            }

            .app-title {
                text-align: center;
                color: #58a6ff;
                font-size: 36px;
                margin-bottom: 24px;
            }

            .card {
                max-width: 800px;
                margin: 0 auto 24px auto;
                background: #161b22;
                border: 1px solid #30363d;
                border-radius: 12px;
                padding: 20px;
            }

            .card-heading {
                margin-top: 0;
                color: #f0f6fc;
            }

            .input-group {
                display: flex;
                gap: 10px;
                margin-bottom: 16px;
            }

            .text-input {
                flex: 1;
                padding: 10px 12px;
                background: #0d1117;
                color: #c9d1d9;
                border: 1px solid #30363d;
                border-radius: 8px;
            }

            .submit-button {
                padding: 10px 18px;
                background: #238636;
                color: white;
                border: none;
                border-radius: 8px;
                cursor: pointer;
            }

            .submit-button:disabled {
                background: #30363d;
                cursor: not-allowed;
            }

            .error-message {
                color: #f85149;
                background: rgba(248, 81, 73, 0.1);
                border: 1px solid #f85149;
                border-radius: 8px;
                padding: 10px;
                margin-top: 12px;
            }

            .portfolio-box {
                display: grid;
                gap: 8px;
            }

            .portfolio-item {
                display: flex;
                justify-content: space-between;
                word-break: break-all;
            }

            .dropdown-wrapper {
                display: flex;
                align-items: center;
                gap: 8px;
                margin-bottom: 12px;
            }

            .dropdown-wrapper select {
                background: #0d1117;
                color: #c9d1d9;
                border: 1px solid #30363d;
                border-radius: 6px;
                padding: 6px;
            }

            .toggle {
                display: flex;
                align-items: center;
                gap: 6px;
                margin-bottom: 12px;
            }

            .chart-canvas {
                width: 100%;
                border: 1px solid #30363d;
                border-radius: 8px;
            }

            .news-list li {
                margin-bottom: 12px;
            }

            .risk-warning {
                color: #d29922;
            }

            .todays-signal {
                border-top: 1px solid #30363d;
                margin-top: 12px;
            }

            .token-info {
                white-space: pre-wrap;
                background: #0d1117;
                padding: 12px;
                border-radius: 8px;
            }
            "#}
        </style>
        <div class="coinme-app">
            <h1 class="app-title">"CoinMe"</h1>
            <Portfolio client=client.clone() />
            <TradeSignals client=client.clone() />
            <TokenSentiment client=client.clone() />
            <SolPriceHistory client=client />
        </div>
    }
}
