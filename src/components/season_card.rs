//! Reusable card component for season list items.

use leptos::prelude::*;

use crate::net::types::Season;
use crate::util::fmt;

/// A clickable card representing a season.
#[component]
pub fn SeasonCard(season: Season, #[prop(optional)] active: bool) -> impl IntoView {
    let href = format!("/seasons/{}", season.id);
    let created = fmt::format_date(&season.date_created);
    let has_finals = season.has_finals;

    view! {
        <a class="season-card" class:season-card--active=active href=href>
            <span class="season-card__name">{season.name}</span>
            <span class="season-card__meta">{format!("Created: {created}")}</span>
            <span class="season-card__meta">{format!("Events: {}", season.event_count)}</span>
            <span class="season-card__meta">{format!("Counting Games: {}", season.counting_games)}</span>
            <Show when=move || has_finals>
                <span class="season-card__badge">"Has Finals"</span>
            </Show>
        </a>
    }
}
