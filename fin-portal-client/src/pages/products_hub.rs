use fin_portal_common::{product::Product, session::Session};
use leptos::*;

use crate::api::PortalApi;

#[component]
fn product_card(cx: Scope, product: Product) -> impl IntoView {
    view! { cx,
        <div class="product-card">
            <h3>{product.product_name}</h3>
            <p>{product.business_name}</p>
        </div>
    }
}

fn carousel(cx: Scope, products: Vec<Product>) -> View {
    products
        .into_iter()
        .map(|product| view! { cx, <ProductCard product=product/> })
        .collect::<Vec<_>>()
        .into_view(cx)
}

/// Consumer products view: recommendations by default, search results while a
/// query is active
#[component]
pub fn product_hub(cx: Scope, session: RwSignal<Option<Session>>, api: PortalApi) -> impl IntoView {
    // Recommendations are kept only when the backend returns a non-empty list
    let recommended = create_local_resource(
        cx,
        move || session.get().map(|current| current.id()),
        move |cid| async move {
            let Some(cid) = cid else {
                return None;
            };
            match api.recommended(cid).await {
                Ok(products) if !products.is_empty() => Some(products),
                Ok(_) => None,
                Err(error) => {
                    log::error!("Could not fetch recommendations. {error}");
                    None
                }
            }
        },
    );

    let (query_input, set_query_input) = create_signal(cx, String::new());
    let (search_query, set_search_query) = create_signal(cx, String::new());
    let (search_results, set_search_results) = create_signal(cx, None::<Vec<Product>>);
    let search_action = create_action(cx, move |query: &String| {
        let query = query.clone();
        async move {
            match api.search_products(&query).await {
                Ok(products) => set_search_results.set(Some(products)),
                Err(error) => log::error!("Product search failed. {error}"),
            }
        }
    });

    view! { cx,
        <h1 class="customer-portal-heading">"Products Hub"</h1>
        <form
            class="product-search"
            on:submit=move |ev| {
                ev.prevent_default();
                let query = query_input.get_untracked();
                set_search_query.set(query.clone());
                search_action.dispatch(query);
            }
        >
            <input
                required=true
                name="query"
                type="text"
                placeholder="Search for products"
                prop:value=move || query_input.get()
                on:input=move |ev| set_query_input.set(event_target_value(&ev))
            />
            <button type="submit">"Search"</button>
            <button
                type="reset"
                on:click=move |_| {
                    set_query_input.set(String::new());
                    set_search_results.set(None);
                }
            >
                "Reset"
            </button>
        </form>
        <div class="product-display">
            {move || match search_results.get() {
                None => {
                    view! { cx,
                        <div class="recommended-products">
                            <h2>"Recommended Products"</h2>
                            <p>
                                "Based on your previous purchases and purchases made by similar customers"
                            </p>
                            <p>"Search something to see other products."</p>
                            <div class="product-carousel">
                                {move || match recommended.read(cx) {
                                    Some(Some(products)) => carousel(cx, products),
                                    _ => {
                                        view! { cx,
                                            <p>"No recommendations available, make some purchases!"</p>
                                        }
                                            .into_view(cx)
                                    }
                                }}
                            </div>
                        </div>
                    }
                        .into_view(cx)
                }
                Some(products) => {
                    let results = if products.is_empty() {
                        view! { cx, <p>"No results found"</p> }.into_view(cx)
                    } else {
                        carousel(cx, products)
                    };
                    view! { cx,
                        <div class="search-results">
                            <h2>
                                {move || format!("Search Results for \"{}\"", search_query.get())}
                            </h2>
                            <div class="product-carousel">{results}</div>
                        </div>
                    }
                        .into_view(cx)
                }
            }}
        </div>
    }
}
