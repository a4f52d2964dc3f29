use leptos::*;
use strum::IntoEnumIterator;

use super::{ErrorMessage, LineChartCanvas};
use crate::application::chart_service::price_history_chart;
use crate::application::endpoints::PriceHistoryRequest;
use crate::domain::price_history::HistoryWindow;
use crate::infrastructure::http::{ApiClient, Transport};
use crate::presentation::RemoteResource;

/// Issues one request for the current window now and another on every change.
pub fn watch_window<T>(window: RwSignal<HistoryWindow>, history: RemoteResource<PriceHistoryRequest, T>)
where
    T: Transport + Clone + 'static,
{
    create_effect(move |_| {
        history.submit(PriceHistoryRequest::new(window.get()));
    });
}

/// SOL price line chart with a look-back selector; refetches on every selection
#[component]
pub fn SolPriceHistory<T: Transport + Clone + 'static>(client: ApiClient<T>) -> impl IntoView {
    let window = create_rw_signal(HistoryWindow::default());
    let history = RemoteResource::<PriceHistoryRequest, T>::new(client);
    watch_window(window, history);

    let chart = create_memo(move |_| history.with_data(|h| price_history_chart(h, window.get())));

    let on_change = move |event: ev::Event| {
        let selected = event_target_value(&event)
            .parse::<u32>()
            .ok()
            .and_then(HistoryWindow::from_days);
        if let Some(selected) = selected {
            window.set(selected);
        }
    };

    view! {
        <section class="card">
            <h2 class="card-heading">"📈 SOL Price Chart"</h2>
            <div class="dropdown-wrapper">
                <label for="days">"View for:"</label>
                <select id="days" on:change=on_change>
                    {HistoryWindow::iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option.days().to_string()
                                    selected=move || window.get() == option
                                >
                                    {option.to_string()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
            <Show
                when=move || history.error().is_none()
                fallback=move || view! { <ErrorMessage message=history.error().unwrap_or_default() /> }
            >
                <LineChartCanvas chart=chart />
            </Show>
        </section>
    }
}
