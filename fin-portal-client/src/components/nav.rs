use fin_portal_common::session::Session;
use leptos::*;

use crate::components::user::ProfileMenu;

#[component]
fn user_context(
    cx: Scope,
    session: RwSignal<Option<Session>>,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    move || {
        session
            .get()
            .map(|current| {
                let initials = current.username().to_uppercase();
                let display_name = current.display_name().to_owned();
                view! { cx,
                    <div class="profile-container">
                        <button
                            class="user-profile-photo"
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {initials}
                        </button>
                        <div class="user-name">{display_name}</div>
                        <Show when=move || menu_open.get() fallback=|_| ()>
                            <ProfileMenu session=session/>
                        </Show>
                    </div>
                }
            })
    }
}

/// Top navigation bar: the brand, the portal name for the active role and the
/// profile menu anchor
#[component]
pub fn nav_bar(
    cx: Scope,
    session: RwSignal<Option<Session>>,
    menu_open: ReadSignal<bool>,
    set_menu_open: WriteSignal<bool>,
) -> impl IntoView {
    view! { cx,
        <nav class="navbar" id="mainNavBar">
            <div class="navbar-banner">
                <a class="navbar-brand" href="/">"FinPortal"</a>
                {move || {
                    session
                        .get()
                        .map(|current| {
                            view! { cx,
                                <span class="portal-name">{current.role().portal_name()}</span>
                            }
                        })
                }}
            </div>
            <UserContext session=session menu_open=menu_open set_menu_open=set_menu_open/>
        </nav>
    }
}
