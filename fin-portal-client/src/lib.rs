//! Client-side rendered dashboard with two portals: Prefinity for customers
//! and InsightGen for businesses. The [App] shell owns the session signal,
//! mirrors it into tab storage and gates every protected route on it.

mod api;
mod components;
mod config;
mod gate;
mod pages;
mod storage;

use fin_portal_common::{
    session::{Role, Session},
    store::SessionStore,
};
use leptos::*;
use leptos_router::*;

use crate::{
    api::PortalApi,
    components::nav::NavBar,
    gate::Gate,
    pages::{
        business::BusinessPortal, customer::CustomerPortal, login::Login, myfin::MyFin,
        products_hub::ProductHub, Page,
    },
    storage::BrowserStore,
};

#[component]
pub fn App(cx: Scope) -> impl IntoView {
    let api = PortalApi::new(config::API_URL);
    let store = BrowserStore;
    let session = create_rw_signal(cx, store.read());
    let (menu_open, set_menu_open) = create_signal(cx, false);

    // Every session change rewrites the persisted mirror and drops the menu
    create_effect(cx, move |_| {
        match session.get() {
            Some(current) => store.write(&current),
            None => store.clear(),
        }
        set_menu_open.set(false);
    });

    view! {
        cx,
        <Router>
            <NavBar session=session menu_open=menu_open set_menu_open=set_menu_open/>
            <main>
                <Routes>
                    <Route
                        path=Page::Home.path()
                        view=move |cx| {
                            view! { cx, <Gatekeeper session=session api=api/> }
                        }
                    >
                        <Route
                            path=Page::Products.segment()
                            view=move |cx| {
                                view! { cx, <ProductHub session=session api=api/> }
                            }
                        />
                        <Route
                            path=Page::MyFin.segment()
                            view=move |cx| {
                                view! { cx, <MyFin session=session api=api/> }
                            }
                        />
                        <Route path="" view=|_| ()/>
                        <Route path="*any" view=|_| ()/>
                    </Route>
                    <Route
                        path=Page::Login.path()
                        view=move |cx| {
                            view! { cx, <Login session=session api=api/> }
                        }
                    />
                </Routes>
            </main>
        </Router>
    }
}

/// Runs the gate on every render and mounts whatever it selects: a redirect
/// for unauthenticated visitors or the portal matching the session's role
#[component]
fn gatekeeper(cx: Scope, session: RwSignal<Option<Session>>, api: PortalApi) -> impl IntoView {
    let location = use_location(cx);
    move || match gate::evaluate(session.get().as_ref(), &location.pathname.get()) {
        Gate::Redirect => view! { cx, <Redirect path=Page::Login.path()/> }.into_view(cx),
        Gate::Anonymous => ().into_view(cx),
        Gate::Mount(Role::Customer) => view! { cx, <CustomerPortal/> }.into_view(cx),
        Gate::Mount(Role::Business) => {
            view! { cx, <BusinessPortal session=session api=api/> }.into_view(cx)
        }
    }
}
