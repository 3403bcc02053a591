//! League creation form.

#[cfg(test)]
#[path = "create_league_test.rs"]
mod create_league_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net;

fn validate_league_input(name: &str, location: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let location = location.trim();
    if name.is_empty() || location.is_empty() {
        return Err("Enter both a name and a location.");
    }
    Ok((name.to_owned(), location.to_owned()))
}

#[component]
pub fn CreateLeaguePage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (name_value, location_value) =
            match validate_league_input(&name.get(), &location.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match net::league::create_league(&name_value, &location_value).await {
                Ok(league) => {
                    log::info!("created league {}", league.id);
                    navigate("/leagues", NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("league creation failed: {err}");
                    error.set("Failed to create league.".to_owned());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--narrow">
            <h1>"Create New League"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "League Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
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
                    "Create League"
                </button>
            </form>
        </div>
    }
}
