//! Event creation form, scoped to the season in the route.

#[cfg(test)]
#[path = "create_event_test.rs"]
mod create_event_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net;

/// Validated event form values.
#[derive(Clone, Debug, PartialEq, Eq)]
struct EventInput {
    name: String,
    date: String,
    location: String,
}

fn validate_event_input(name: &str, date: &str, location: &str) -> Result<EventInput, &'static str> {
    let name = name.trim();
    let date = date.trim();
    let location = location.trim();
    if name.is_empty() || date.is_empty() || location.is_empty() {
        return Err("Enter a name, date, and location.");
    }
    Ok(EventInput {
        name: name.to_owned(),
        date: date.to_owned(),
        location: location.to_owned(),
    })
}

#[component]
pub fn CreateEventPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let season_id_now = move || {
        params
            .get_untracked()
            .get("id")
            .and_then(|v| v.parse::<u64>().ok())
    };

    let name = RwSignal::new(String::new());
    let date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(season_id) = season_id_now() else {
            error.set("Season not found.".to_owned());
            return;
        };
        let input = match validate_event_input(&name.get(), &date.get(), &location.get()) {
            Ok(input) => input,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match net::event::create_event(season_id, &input.name, &input.date, &input.location).await {
                Ok(event) => {
                    log::info!("created event {} in season {season_id}", event.id);
                    navigate(&format!("/seasons/{season_id}"), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("event creation failed: {err}");
                    error.set("Failed to create event.".to_owned());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--narrow">
            <h1>"Create New Event"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Event Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Date"
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Location"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary form__submit" type="submit" disabled=move || busy.get()>
                    "Create Event"
                </button>
            </form>
        </div>
    }
}
