//! Season detail page: season settings, point distribution, event list.

#[cfg(test)]
#[path = "season_detail_test.rs"]
mod season_detail_test;

use std::collections::HashMap;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net;
use crate::net::error::ApiError;
use crate::net::types::{Event, Season};
use crate::util::fmt;

/// Point-distribution rows ordered by numeric player count.
///
/// Keys that do not parse as a player count are dropped rather than
/// rendered out of order.
fn point_distribution_rows(dist: &HashMap<String, Vec<u32>>) -> Vec<(u32, Vec<u32>)> {
    let mut rows: Vec<(u32, Vec<u32>)> = dist
        .iter()
        .filter_map(|(count, points)| count.parse::<u32>().ok().map(|c| (c, points.clone())))
        .collect();
    rows.sort_by_key(|(count, _)| *count);
    rows
}

fn format_points(points: &[u32]) -> String {
    points
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[component]
pub fn SeasonDetailPage() -> impl IntoView {
    let params = use_params_map();
    let season_id = move || params.read().get("id").and_then(|v| v.parse::<u64>().ok());

    let season = RwSignal::new(None::<Season>);
    let events = RwSignal::new(Vec::<Event>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Advances on every param-driven fetch; disposed with the component,
    // so `try_get_value` reads `None` once the page is torn down.
    let generation = StoredValue::new(0u64);

    Effect::new(move || {
        let Some(id) = season_id() else {
            error.set("Season not found.".to_owned());
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
                    net::season::get_season(id).await?,
                    net::event::list_events(id).await?,
                ))
            }
            .await;
            if generation.try_get_value() != Some(r#gen) {
                return;
            }
            match result {
                Ok((season_data, event_data)) => {
                    season.set(Some(season_data));
                    events.set(event_data);
                }
                Err(err) => {
                    log::warn!("season {id} fetch failed: {err}");
                    error.set("Failed to fetch season.".to_owned());
                }
            }
            loading.set(false);
        });
    });

    let create_event_href = move || format!("/seasons/{}/events/create", season_id().unwrap_or(0));

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
                    season
                        .get()
                        .map(|season_data| {
                            let created = fmt::format_date(&season_data.date_created);
                            let rows = point_distribution_rows(&season_data.point_distribution);
                            view! {
                                <div class="detail-card">
                                    <h1>{season_data.name}</h1>
                                    <p class="detail-card__meta">{format!("Created: {created}")}</p>
                                    <p class="detail-card__meta">
                                        {format!("Counting Games: {}", season_data.counting_games)}
                                    </p>
                                    <p class="detail-card__meta">
                                        {format!("Has Finals: {}", if season_data.has_finals { "Yes" } else { "No" })}
                                    </p>
                                    <p class="detail-card__meta">
                                        {format!("Event Count: {}", season_data.event_count)}
                                    </p>
                                    <a class="detail-card__back" href=format!("/leagues/{}", season_data.league_id)>
                                        "Back to league"
                                    </a>
                                </div>
                                <Show when={
                                    let has_rows = !rows.is_empty();
                                    move || has_rows
                                }>
                                    <section class="page__section">
                                        <h2>"Point Distribution"</h2>
                                        <table class="points-table">
                                            <thead>
                                                <tr>
                                                    <th>"Players"</th>
                                                    <th>"Points by finish"</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {rows
                                                    .iter()
                                                    .map(|(count, points)| {
                                                        view! {
                                                            <tr>
                                                                <td>{count.to_string()}</td>
                                                                <td>{format_points(points)}</td>
                                                            </tr>
                                                        }
                                                    })
                                                    .collect::<Vec<_>>()}
                                            </tbody>
                                        </table>
                                    </section>
                                </Show>
                            }
                        })
                }}

                <section class="page__section">
                    <div class="page__header">
                        <h2>"Events"</h2>
                        <a class="btn btn--primary" href=create_event_href>"Create Event"</a>
                    </div>
                    <Show
                        when=move || !events.get().is_empty()
                        fallback=|| view! { <p class="page__empty">"No events yet."</p> }
                    >
                        <div class="card-list">
                            {move || {
                                events
                                    .get()
                                    .into_iter()
                                    .map(|event| {
                                        let href = format!("/events/{}", event.id);
                                        let date = fmt::format_date(&event.date);
                                        view! {
                                            <a class="event-card" href=href>
                                                <span class="event-card__name">{event.name}</span>
                                                <span class="event-card__meta">{date}</span>
                                                <span class="event-card__meta">{event.location}</span>
                                                <Show when={
                                                    let is_finals = event.is_finals;
                                                    move || is_finals
                                                }>
                                                    <span class="event-card__badge">"Finals"</span>
                                                </Show>
                                            </a>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>
            </Show>
        </div>
    }
}
