use leptos::*;
use leptos_router::*;

use crate::pages::Page;

#[component]
fn customer_side_bar(cx: Scope) -> impl IntoView {
    view! { cx,
        <div class="customer-sidebar">
            <div class="customer-sidebar-handle">"="</div>
            <A href=Page::Products.path()>"Products Hub"</A>
            <A href=Page::MyFin.path()>"MyFin"</A>
        </div>
    }
}

/// Consumer portal shell. The portal's own root immediately forwards to the
/// default products view; sub views render through the outlet.
#[component]
pub fn customer_portal(cx: Scope) -> impl IntoView {
    let location = use_location(cx);
    view! { cx,
        <div class="customer-portal-container">
            <CustomerSideBar/>
            {move || {
                (location.pathname.get() == Page::Home.path())
                    .then(|| view! { cx, <Redirect path=Page::Products.path()/> })
            }}
            <Outlet/>
        </div>
    }
}
