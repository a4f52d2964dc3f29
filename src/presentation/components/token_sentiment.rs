use leptos::*;

use super::{BarChartCanvas, QueryInput};
use crate::application::chart_service::sentiment_chart;
use crate::application::endpoints::SentimentRequest;
use crate::domain::sentiment::SentimentResult;
use crate::infrastructure::http::ApiClient;
use crate::presentation::RemoteResource;

#[component]
pub fn TokenSentiment(client: ApiClient) -> impl IntoView {
    let token = create_rw_signal(String::new());
    let sentiment = RemoteResource::<SentimentRequest>::new(client);

    let on_submit = move |_: ()| {
        let name = token.get_untracked();
        if sentiment.can_submit(&name) {
            sentiment.submit(SentimentRequest::new(&name));
        }
    };

    view! {
        <section class="card">
            <h2 class="card-heading">"🧠 Public News Based Token Sentiment Analyzer"</h2>
            <QueryInput
                value=token
                on_submit=on_submit
                loading=Signal::derive(move || sentiment.is_loading())
                placeholder="Enter token name (e.g. SOL)"
            />
            {sentiment.render(|result| view! { <SentimentReport result=result.clone() /> }.into_view())}
        </section>
    }
}

#[component]
fn SentimentReport(result: SentimentResult) -> impl IntoView {
    let color = result.tone().color();
    let chart = sentiment_chart(&result);

    view! {
        <div class="report">
            <h3>"📊 Sentiment: " <span style:color=color>{result.sentiment.clone()}</span></h3>
            <p>
                <strong>"Token: "</strong>
                {result.token.clone()}
            </p>
            <p>
                <strong>"Average Score: "</strong>
                <span style:color=color>{result.score_label()}</span>
            </p>
            <p>
                <strong>"Risk Warning: "</strong>
                <span class="risk-warning">{result.risk_warning.clone()}</span>
            </p>

            <h4>"📉 Sentiment Chart"</h4>
            <BarChartCanvas chart=chart />

            <h4>"📰 News Summaries"</h4>
            <ul class="news-list">
                {result
                    .news_analysis
                    .iter()
                    .map(|item| {
                        view! {
                            <li>
                                <div class="news-summary">{item.summary.clone()}</div>
                                <div>
                                    <strong>"Sentiment: "</strong>
                                    <span style:color=item.tone().color()>{item.score_label()}</span>
                                </div>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
