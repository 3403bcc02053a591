//! Event detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net;
use crate::net::types::Event;
use crate::util::fmt;

#[component]
pub fn EventDetailPage() -> impl IntoView {
    let params = use_params_map();
    let event_id = move || params.read().get("id").and_then(|v| v.parse::<u64>().ok());

    let event = RwSignal::new(None::<Event>);
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Advances on every param-driven fetch; disposed with the component,
    // so `try_get_value` reads `None` once the page is torn down.
    let generation = StoredValue::new(0u64);

    Effect::new(move || {
        let Some(id) = event_id() else {
            error.set("Event not found.".to_owned());
            loading.set(false);
            return;
        };
        let r#gen = generation.get_value() + 1;
        generation.set_value(r#gen);
        loading.set(true);
        error.set(String::new());

        leptos::task::spawn_local(async move {
            let result = net::event::get_event(id).await;
            if generation.try_get_value() != Some(r#gen) {
                return;
            }
            match result {
                Ok(event_data) => event.set(Some(event_data)),
                Err(err) => {
                    log::warn!("event {id} fetch failed: {err}");
                    error.set("Failed to fetch event.".to_owned());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="page">
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || !loading.get() && error.get().is_empty()
                fallback=move || {
                    view! {
                        <Show when=move || loading.get()>
                            <p class="page-status">"Loading..."</p>
                        </Show>
                    }
                }
            >
                {move || {
                    event
                        .get()
                        .map(|event_data| {
                            let date = fmt::format_date(&event_data.date);
                            let season_href = format!("/seasons/{}", event_data.season_id);
                            let is_finals = event_data.is_finals;
                            view! {
                                <div class="detail-card">
                                    <h1>{event_data.name}</h1>
                                    <p class="detail-card__meta">{format!("Date: {date}")}</p>
                                    <p class="detail-card__meta">{format!("Location: {}", event_data.location)}</p>
                                    <Show when=move || is_finals>
                                        <p class="detail-card__badge">"Finals"</p>
                                    </Show>
                                    <a class="detail-card__back" href=season_href>"Back to season"</a>
                                </div>
                            }
                        })
                }}
            </Show>
        </div>
    }
}
