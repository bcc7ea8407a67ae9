use fin_portal_common::session::Session;
use leptos::*;
use leptos_router::*;

use crate::pages::Page;

/// Dropdown under the avatar. Logging out drops the session; the app shell
/// clears the persisted mirror in response.
#[component]
pub fn profile_menu(cx: Scope, session: RwSignal<Option<Session>>) -> impl IntoView {
    let navigate = use_navigate(cx);
    view! { cx,
        <div class="profile-menu">
            <button on:click=move |_| {
                session.set(None);
                if let Err(error) = navigate(Page::Login.path(), NavigateOptions::default()) {
                    error!("{error:?}");
                }
            }>
                "Logout"
            </button>
        </div>
    }
}
