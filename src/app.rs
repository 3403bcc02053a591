//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::components::layout::Layout;
use crate::pages::create_event::CreateEventPage;
use crate::pages::create_league::CreateLeaguePage;
use crate::pages::create_season::CreateSeasonPage;
use crate::pages::event_detail::EventDetailPage;
use crate::pages::league_detail::LeagueDetailPage;
use crate::pages::leagues::LeaguesPage;
use crate::pages::login::LoginPage;
use crate::pages::season_detail::SeasonDetailPage;
use crate::pages::signup::SignupPage;
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides the auth session context, kicks off the startup session
/// resolution, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    // Resolve any stored token before route guards make their call.
    crate::state::auth::restore_session(auth);

    view! {
        <Title text="Pinball League Manager"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("signup") view=SignupPage/>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path="/leagues"/> }/>
                    <Route
                        path=StaticSegment("leagues")
                        view=|| view! { <RequireAuth><LeaguesPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("leagues"), StaticSegment("create"))
                        view=|| view! { <RequireAuth><CreateLeaguePage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("leagues"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><LeagueDetailPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("leagues"),
                            ParamSegment("id"),
                            StaticSegment("seasons"),
                            StaticSegment("create"),
                        )
                        view=|| view! { <RequireAuth><CreateSeasonPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("seasons"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><SeasonDetailPage/></RequireAuth> }
                    />
                    <Route
                        path=(
                            StaticSegment("seasons"),
                            ParamSegment("id"),
                            StaticSegment("events"),
                            StaticSegment("create"),
                        )
                        view=|| view! { <RequireAuth><CreateEventPage/></RequireAuth> }
                    />
                    <Route
                        path=(StaticSegment("events"), ParamSegment("id"))
                        view=|| view! { <RequireAuth><EventDetailPage/></RequireAuth> }
                    />
                </Routes>
            </Layout>
        </Router>
    }
}
