//! Application shell: top navigation bar wrapping every routed page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bar is the one always-visible consumer of the auth session: it
//! switches between login/signup links and the user chrome, and hosts the
//! logout action. Logout only clears the session; the route guard on the
//! current page observes the change and performs the redirect.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn Layout(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let user_email = move || auth.get().user.map(|u| u.email).unwrap_or_default();
    let on_logout = move |_| crate::state::auth::logout(auth);

    view! {
        <div class="app-shell">
            <header class="topbar">
                <a class="topbar__brand" href="/">"Pinball League Manager"</a>
                <span class="topbar__spacer"></span>
                <Show
                    when=move || auth.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a class="topbar__link" href="/login">"Login"</a>
                            <a class="topbar__link" href="/signup">"Sign Up"</a>
                        }
                    }
                >
                    <a class="topbar__link" href="/leagues">"Leagues"</a>
                    <span class="topbar__user">{user_email}</span>
                    <button class="btn topbar__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </Show>
            </header>
            <main class="app-main">{children()}</main>
        </div>
    }
}
