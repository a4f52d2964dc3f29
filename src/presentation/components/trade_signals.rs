use leptos::*;

use super::{LineChartCanvas, QueryInput};
use crate::application::chart_service::trade_signal_chart;
use crate::application::endpoints::TradeSignalsRequest;
use crate::domain::chart::LineChart;
use crate::domain::trade_signals::{AnalysisPoint, SignalSource, TradeSignal, TradeSignalResult};
use crate::infrastructure::http::ApiClient;
use crate::presentation::RemoteResource;

const DEFAULT_TOKEN_ID: &str = "solana";

#[component]
pub fn TradeSignals(client: ApiClient) -> impl IntoView {
    let token_id = create_rw_signal(DEFAULT_TOKEN_ID.to_string());
    let use_adjusted = create_rw_signal(true);
    let signals = RemoteResource::<TradeSignalsRequest>::new(client);

    let source = Signal::derive(move || SignalSource::from_toggle(use_adjusted.get()));
    let chart = create_memo(move |_| {
        signals
            .with_data(|result| trade_signal_chart(result, source.get()))
            .flatten()
    });

    let on_submit = move |_: ()| {
        let id = token_id.get_untracked();
        if signals.can_submit(&id) {
            signals.submit(TradeSignalsRequest::new(&id));
        }
    };

    view! {
        <section class="card">
            <h2 class="card-heading">"📈 TradeSmarter: AI-Driven Crypto Signals"</h2>
            <QueryInput
                value=token_id
                on_submit=on_submit
                loading=Signal::derive(move || signals.is_loading())
                placeholder="Enter token name (e.g. solana)"
                idle_label="Get Signal Chart"
                busy_label="Loading..."
            />
            <label class="toggle">
                <input
                    type="checkbox"
                    prop:checked=move || use_adjusted.get()
                    on:change=move |_| use_adjusted.update(|v| *v = !*v)
                />
                "Use Adjusted Signal"
            </label>
            {signals
                .render(move |result| {
                    view! { <SignalReport result=result.clone() source=source chart=chart /> }.into_view()
                })}
        </section>
    }
}

#[component]
fn SignalReport(
    result: TradeSignalResult,
    #[prop(into)] source: Signal<SignalSource>,
    #[prop(into)] chart: Signal<Option<LineChart>>,
) -> impl IntoView {
    let latest = result.latest().cloned();

    view! {
        <p>
            <strong>"USD Index Trend: "</strong>
            {result.usd_index_trend.clone()}
        </p>
        <p>
            <strong>"USD % Change: "</strong>
            {result.change_label()}
        </p>
        <Show when=move || chart.with(Option::is_some)>
            <LineChartCanvas chart=chart />
        </Show>
        {result
            .note
            .clone()
            .map(|note| {
                view! {
                    <p class="note">"📌 Note: " {note}</p>
                    {latest.map(|point| view! { <TodaysSignal point=point source=source /> })}
                }
            })}
    }
}

/// Summary of the most recent analysis row
#[component]
fn TodaysSignal(point: AnalysisPoint, #[prop(into)] source: Signal<SignalSource>) -> impl IntoView {
    let heading = format!("📅 Today's Signal ({}):", point.timestamp);
    let price = format!("${}", point.price);
    let sma_5 = point.sma_5.to_string();
    let sma_10 = point.sma_10.to_string();

    let point = store_value(point);
    let label = move || point.with_value(|p| p.effective_signal(source.get()).to_string());
    let color = move || {
        if point.with_value(|p| p.trade_signal(source.get())) == TradeSignal::Buy {
            "limegreen"
        } else {
            "red"
        }
    };

    view! {
        <div class="todays-signal">
            <h4>{heading}</h4>
            <p>
                <strong>"Price: "</strong>
                {price}
            </p>
            <p>
                <strong>"SMA 5: "</strong>
                {sma_5}
            </p>
            <p>
                <strong>"SMA 10: "</strong>
                {sma_10}
            </p>
            <p>
                <strong>"Signal: "</strong>
                <span style:color=color>{label}</span>
            </p>
        </div>
    }
}
