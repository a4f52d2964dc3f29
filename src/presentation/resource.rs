use std::marker::PhantomData;

use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::application::endpoints::Endpoint;
use crate::application::resource::{Completion, ResourceState, ResourceView, submit_enabled};
use crate::domain::logging::LogComponent;
use crate::infrastructure::http::{ApiClient, GlooTransport, Transport};
use crate::presentation::components::ErrorMessage;
use crate::{log_debug, log_warn};

/// Reactive handle over one endpoint's request state.
///
/// Each view owns one of these; it is `Copy`, so it can be moved freely into
/// event handlers and effects.
pub struct RemoteResource<E: Endpoint, T: 'static = GlooTransport> {
    state: RwSignal<ResourceState<E::Output>>,
    client: StoredValue<ApiClient<T>>,
    _endpoint: PhantomData<fn(E)>,
}

impl<E: Endpoint, T: 'static> Clone for RemoteResource<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Endpoint, T: 'static> Copy for RemoteResource<E, T> {}

impl<E, T> RemoteResource<E, T>
where
    E: Endpoint,
    T: Transport + Clone + 'static,
{
    pub fn new(client: ApiClient<T>) -> Self {
        Self {
            state: create_rw_signal(ResourceState::new()),
            client: store_value(client),
            _endpoint: PhantomData,
        }
    }

    pub fn state(&self) -> RwSignal<ResourceState<E::Output>> {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn with_data<R>(&self, f: impl FnOnce(&E::Output) -> R) -> Option<R> {
        self.state.with(|s| s.data().map(f))
    }

    /// For event handlers: reads state without subscribing
    pub fn can_submit(&self, input: &str) -> bool {
        submit_enabled(input, self.state.with_untracked(|s| s.is_loading()))
    }

    /// Error text, else `ready(data)`, else nothing
    pub fn render(self, ready: impl Fn(&E::Output) -> View + 'static) -> impl Fn() -> View {
        move || {
            self.state.with(|s| match s.view() {
                ResourceView::Error(message) => {
                    view! { <ErrorMessage message=message.to_string() /> }.into_view()
                }
                ResourceView::Ready(data) => ready(data),
                ResourceView::Empty => ().into_view(),
            })
        }
    }

    /// Start a request. Superseded responses are dropped when they arrive.
    pub fn submit(&self, request: E) {
        let Some(ticket) = self.state.try_update(|s| s.begin()) else {
            return;
        };
        let state = self.state;
        let client = self.client.get_value();

        spawn_local(async move {
            let outcome = client
                .fetch(&request)
                .await
                .map_err(|e| e.user_message(E::FAILURE_MESSAGE));

            match state.try_update(|s| s.complete(ticket, outcome)) {
                Some(Completion::Applied) => {}
                Some(Completion::Stale) => {
                    log_debug!(
                        LogComponent::View("RemoteResource"),
                        "dropped stale {} response #{}",
                        E::PATH,
                        ticket.sequence()
                    );
                }
                None => {
                    log_warn!(
                        LogComponent::View("RemoteResource"),
                        "{} response arrived after its view was unmounted",
                        E::PATH
                    );
                }
            }
        });
    }
}
