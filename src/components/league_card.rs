//! Reusable card component for league list items.
//!
//! DESIGN
//! ======
//! Keeps league presentation identical between the list page and any
//! future embedding while centralizing the navigation affordance.

use leptos::prelude::*;

use crate::net::types::League;
use crate::util::fmt;

/// A clickable card representing a league.
#[component]
pub fn LeagueCard(league: League) -> impl IntoView {
    let href = format!("/leagues/{}", league.id);
    let created = fmt::format_date(&league.date_created);
    let owner = fmt::full_name(&league.owner);

    view! {
        <a class="league-card" href=href>
            <span class="league-card__name">{league.name}</span>
            <span class="league-card__meta">{format!("Location: {}", league.location)}</span>
            <span class="league-card__meta">{format!("Created: {created}")}</span>
            <span class="league-card__meta">{format!("Owner: {owner}")}</span>
        </a>
    }
}
