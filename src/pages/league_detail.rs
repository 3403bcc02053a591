//! League detail page: league info, active/past seasons, player roster.
//!
//! SYSTEM CONTEXT
//! ==============
//! The fetch effect re-runs whenever the route's league id changes. Each
//! run advances a generation counter; responses carrying a stale
//! generation are dropped so a fast route change can never apply an
//! out-of-date league's data, and teardown can never touch disposed
//! signals.

#[cfg(test)]
#[path = "league_detail_test.rs"]
mod league_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::season_card::SeasonCard;
use crate::net;
use crate::net::error::ApiError;
use crate::net::types::{League, Player, Season};
use crate::util::fmt;

/// Order seasons newest-first and present the newest as "active".
fn split_seasons(mut seasons: Vec<Season>) -> (Option<Season>, Vec<Season>) {
    seasons.sort_by(|a, b| b.date_created.cmp(&a.date_created));
    let mut rest = seasons.into_iter();
    let active = rest.next();
    (active, rest.collect())
}

/// Parse a comma- or whitespace-separated list of IFPA numbers.
fn parse_ifpa_numbers(input: &str) -> Result<Vec<u32>, &'static str> {
    let mut numbers = Vec::new();
    for part in input.split(|c: char| c == ',' || c.is_whitespace()) {
        if part.is_empty() {
            continue;
        }
        match part.parse::<u32>() {
            Ok(n) => numbers.push(n),
            Err(_) => return Err("IFPA numbers must be comma-separated integers."),
        }
    }
    if numbers.is_empty() {
        return Err("Enter at least one IFPA number.");
    }
    Ok(numbers)
}

#[component]
pub fn LeagueDetailPage() -> impl IntoView {
    let params = use_params_map();
    let league_id = move || params.read().get("id").and_then(|v| v.parse::<u64>().ok());
    let league_id_now = move || {
        params
            .get_untracked()
            .get("id")
            .and_then(|v| v.parse::<u64>().ok())
    };

    let league = RwSignal::new(None::<League>);
    let seasons = RwSignal::new(Vec::<Season>::new());
    let players = RwSignal::new(Vec::<Player>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Advances on every param-driven fetch; disposed with the component,
    // so `try_get_value` reads `None` once the page is torn down.
    let generation = StoredValue::new(0u64);

    Effect::new(move || {
        let Some(id) = league_id() else {
            error.set("League not found.".to_owned());
            loading.set(false);
            return;
        };
        let r#gen = generation.get_value() + 1;
        generation.set_value(r#gen);
        loading.set(true);
        error.set(String::new());

        leptos::task::spawn_local(async move {
            let result = async {
                Ok::<_, ApiError>((
                    net::league::get_league(id).await?,
                    net::season::list_seasons(id).await?,
                    net::league::list_players(id).await?,
                ))
            }
            .await;
            if generation.try_get_value() != Some(r#gen) {
                return;
            }
            match result {
                Ok((league_data, season_data, player_data)) => {
                    league.set(Some(league_data));
                    seasons.set(season_data);
                    players.set(player_data);
                }
                Err(err) => {
                    log::warn!("league {id} fetch failed: {err}");
                    error.set("Failed to fetch league data.".to_owned());
                }
            }
            loading.set(false);
        });
    });

    // Roster add-by-IFPA form state.
    let ifpa_input = RwSignal::new(String::new());
    let roster_busy = RwSignal::new(false);
    let roster_error = RwSignal::new(String::new());

    let on_add_players = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if roster_busy.get() {
            return;
        }
        let Some(id) = league_id_now() else {
            return;
        };
        let numbers = match parse_ifpa_numbers(&ifpa_input.get()) {
            Ok(numbers) => numbers,
            Err(msg) => {
                roster_error.set(msg.to_owned());
                return;
            }
        };
        roster_busy.set(true);
        roster_error.set(String::new());

        let r#gen = generation.get_value();
        leptos::task::spawn_local(async move {
            let result = async {
                net::league::add_players_by_ifpa(id, &numbers).await?;
                net::league::list_players(id).await
            }
            .await;
            if generation.try_get_value() != Some(r#gen) {
                return;
            }
            match result {
                Ok(updated) => {
                    players.set(updated);
                    ifpa_input.set(String::new());
                }
                Err(err) => {
                    log::warn!("adding players to league {id} failed: {err}");
                    roster_error.set("Failed to add players.".to_owned());
                }
            }
            roster_busy.set(false);
        });
    };

    let create_season_href = move || format!("/leagues/{}/seasons/create", league_id().unwrap_or(0));

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
                    league
                        .get()
                        .map(|league_data| {
                            let created = fmt::format_date(&league_data.date_created);
                            let owner = fmt::full_name(&league_data.owner);
                            view! {
                                <div class="detail-card">
                                    <h1>{league_data.name}</h1>
                                    <p class="detail-card__meta">{format!("Location: {}", league_data.location)}</p>
                                    <p class="detail-card__meta">{format!("Created: {created}")}</p>
                                    <p class="detail-card__meta">{format!("Owner: {owner}")}</p>
                                </div>
                            }
                        })
                }}

                <section class="page__section">
                    <h2>"Active Season"</h2>
                    {move || {
                        let (active, _) = split_seasons(seasons.get());
                        match active {
                            Some(season) => view! { <SeasonCard season=season active=true/> }.into_any(),
                            None => {
                                view! {
                                    <div class="page__empty">
                                        <p>"No active season"</p>
                                        <a class="btn btn--primary" href=create_season_href>
                                            "Create New Season"
                                        </a>
                                    </div>
                                }
                                    .into_any()
                            }
                        }
                    }}
                </section>

                {move || {
                    let (_, past) = split_seasons(seasons.get());
                    (!past.is_empty())
                        .then(|| {
                            view! {
                                <section class="page__section">
                                    <h2>"Past Seasons"</h2>
                                    <div class="card-list">
                                        {past
                                            .into_iter()
                                            .map(|season| view! { <SeasonCard season=season/> })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </section>
                            }
                        })
                }}

                <section class="page__section">
                    <div class="page__header">
                        <h2>"Players"</h2>
                        <a class="btn" href=create_season_href>"Create Season"</a>
                    </div>
                    <Show when=move || !roster_error.get().is_empty()>
                        <p class="page__error">{move || roster_error.get()}</p>
                    </Show>
                    <Show
                        when=move || !players.get().is_empty()
                        fallback=|| view! { <p class="page__empty">"No players yet."</p> }
                    >
                        <ul class="roster">
                            {move || {
                                players
                                    .get()
                                    .into_iter()
                                    .map(|player| {
                                        view! {
                                            <li class="roster__player">
                                                <span class="roster__player-name">{player.name}</span>
                                                {player
                                                    .ifpa_number
                                                    .map(|n| {
                                                        view! {
                                                            <span class="roster__player-ifpa">
                                                                {format!("IFPA #{n}")}
                                                            </span>
                                                        }
                                                    })}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>
                    <form class="roster__add" on:submit=on_add_players>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="IFPA numbers, e.g. 1234, 5678"
                            prop:value=move || ifpa_input.get()
                            on:input=move |ev| ifpa_input.set(event_target_value(&ev))
                        />
                        <button class="btn" type="submit" disabled=move || roster_busy.get()>
                            "Add by IFPA"
                        </button>
                    </form>
                </section>
            </Show>
        </div>
    }
}
