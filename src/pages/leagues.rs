//! League list page — the authenticated landing route.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use leptos::prelude::*;

use crate::components::league_card::LeagueCard;
use crate::net;
use crate::net::types::League;

#[component]
pub fn LeaguesPage() -> impl IntoView {
    let leagues = RwSignal::new(Vec::<League>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());

    // Drop the response instead of touching disposed signals if the user
    // navigates away before the fetch lands.
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let alive_task = alive.clone();
    leptos::task::spawn_local(async move {
        let result = net::league::list_leagues().await;
        if !alive_task.load(Ordering::Relaxed) {
            return;
        }
        match result {
            Ok(items) => leagues.set(items),
            Err(err) => {
                log::warn!("league list fetch failed: {err}");
                error.set("Failed to fetch leagues.".to_owned());
            }
        }
        loading.set(false);
    });

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Pinball Leagues"</h1>
                <a class="btn btn--primary" href="/leagues/create">"Create League"</a>
            </div>
            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page-status">"Loading leagues..."</p> }
            >
                <div class="card-list">
                    {move || {
                        leagues
                            .get()
                            .into_iter()
                            .map(|league| view! { <LeagueCard league=league/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
