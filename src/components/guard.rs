//! Route guard for authenticated-only pages.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

/// Renders children only for an authenticated session.
///
/// While the initial session resolution is still loading this shows a
/// placeholder; once it completes without a user, navigation moves to
/// `/login` before any protected content renders.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <Show
            when=move || auth.get().is_authenticated()
            fallback=move || {
                view! {
                    <p class="page-status">
                        {move || if auth.get().loading { "Loading..." } else { "Redirecting to login..." }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}
