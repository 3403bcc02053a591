//! Season creation form, scoped to the league in the route.

#[cfg(test)]
#[path = "create_season_test.rs"]
mod create_season_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::net;

fn validate_season_input(name: &str, counting_games: &str) -> Result<(String, u32), &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Enter a season name.");
    }
    match counting_games.trim().parse::<u32>() {
        Ok(games) if games > 0 => Ok((name.to_owned(), games)),
        _ => Err("Counting games must be a positive number."),
    }
}

#[component]
pub fn CreateSeasonPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let league_id_now = move || {
        params
            .get_untracked()
            .get("id")
            .and_then(|v| v.parse::<u64>().ok())
    };

    let name = RwSignal::new(String::new());
    let counting_games = RwSignal::new(String::new());
    let has_finals = RwSignal::new(false);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let Some(league_id) = league_id_now() else {
            error.set("League not found.".to_owned());
            return;
        };
        let (name_value, games) =
            match validate_season_input(&name.get(), &counting_games.get()) {
                Ok(values) => values,
                Err(msg) => {
                    error.set(msg.to_owned());
                    return;
                }
            };
        busy.set(true);
        error.set(String::new());

        let finals = has_finals.get();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match net::season::create_season(league_id, &name_value, games, finals).await {
                Ok(season) => {
                    log::info!("created season {} in league {league_id}", season.id);
                    navigate(&format!("/leagues/{league_id}"), NavigateOptions::default());
                }
                Err(err) => {
                    log::warn!("season creation failed: {err}");
                    error.set("Failed to create season.".to_owned());
                    busy.set(false);
                }
            }
        });
    };

    view! {
        <div class="page page--narrow">
            <h1>"Create New Season"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <form class="form" on:submit=on_submit>
                <label class="form__label">
                    "Season Name"
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__label">
                    "Counting Games"
                    <input
                        class="form__input"
                        type="number"
                        min="1"
                        prop:value=move || counting_games.get()
                        on:input=move |ev| counting_games.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__check">
                    <input
                        type="checkbox"
                        prop:checked=move || has_finals.get()
                        on:input=move |ev| has_finals.set(event_target_checked(&ev))
                    />
                    "Season ends with finals"
                </label>
                <button class="btn btn--primary form__submit" type="submit" disabled=move || busy.get()>
                    "Create Season"
                </button>
            </form>
        </div>
    }
}
