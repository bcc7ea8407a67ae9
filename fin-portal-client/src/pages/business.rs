use fin_portal_common::session::Session;
use leptos::*;

use crate::{api::PortalApi, components::pie_chart::PieChartDisplay};

/// Business analytics portal: revenue KPI charts plus generated insights. A
/// failed insight fetch surfaces the backend's message inline; a failed KPI
/// fetch only logs and leaves the charts empty.
#[component]
pub fn business_portal(
    cx: Scope,
    session: RwSignal<Option<Session>>,
    api: PortalApi,
) -> impl IntoView {
    let bid = Signal::derive(cx, move || session.get().map(|current| current.id()));
    let kpi = create_local_resource(
        cx,
        move || bid.get(),
        move |bid| async move {
            let Some(bid) = bid else {
                return None;
            };
            match api.business_kpi(bid).await {
                Ok(data) => Some(data),
                Err(error) => {
                    log::error!("Could not fetch business KPIs. {error}");
                    None
                }
            }
        },
    );
    let insight = create_local_resource(
        cx,
        move || bid.get(),
        move |bid| async move {
            let Some(bid) = bid else {
                return None;
            };
            Some(api.business_insight(bid).await.map_err(|error| error.to_string()))
        },
    );

    view! { cx,
        <div class="business-portal-container">
            <Transition fallback=move || view! { cx, <span>"Loading..."</span> }>
                {move || {
                    kpi.read(cx)
                        .flatten()
                        .map(|data| {
                            view! { cx,
                                <PieChartDisplay
                                    heading="Performance Overview"
                                    description="Revenue by product and by payment mode"
                                    primary=data.product_slices()
                                    secondary=data.mode_slices()
                                />
                            }
                        })
                }}
                {move || {
                    insight
                        .read(cx)
                        .flatten()
                        .map(|result| match result {
                            Ok(insight) => {
                                view! { cx,
                                    <div class="business-insights">
                                        <h2>"Insights"</h2>
                                        <h3>"Action Items"</h3>
                                        <ul>
                                            {insight
                                                .action_items
                                                .into_iter()
                                                .map(|item| view! { cx, <li>{item}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                        <h3>"Questions to Consider"</h3>
                                        <ul>
                                            {insight
                                                .questions
                                                .into_iter()
                                                .map(|question| view! { cx, <li>{question}</li> })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                                    .into_view(cx)
                            }
                            Err(detail) => {
                                view! { cx, <p class="form-error">{detail}</p> }.into_view(cx)
                            }
                        })
                }}
            </Transition>
        </div>
    }
}
