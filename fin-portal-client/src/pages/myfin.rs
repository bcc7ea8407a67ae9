use fin_portal_common::{loan::Loan, session::Session};
use leptos::*;

use crate::{
    api::PortalApi,
    components::{pie_chart::PieChartDisplay, table::DataTable},
};

/// Columns of the loan recommendation table
const LOAN_COLUMNS: &[&str] = &[
    "Loan",
    "Category",
    "Approval",
    "Interest Rate",
    "Amount",
    "Term",
    "Processing Fee",
];

#[component]
fn loan_row(cx: Scope, loan: Loan) -> impl IntoView {
    let approval = loan.approval_percent();
    let rates = loan.rate_range();
    let amounts = loan.amount_range();
    let terms = loan.term_range();
    let fee = format!("${}", loan.processing_fee);
    view! { cx,
        <tr>
            <td>{loan.loan_type_readable}</td>
            <td>{loan.purchase_category}</td>
            <td>{approval}</td>
            <td>{rates}</td>
            <td>{amounts}</td>
            <td>{terms}</td>
            <td>{fee}</td>
        </tr>
    }
}

/// Customer financials view: spending breakdown charts plus loan offers
#[component]
pub fn my_fin(cx: Scope, session: RwSignal<Option<Session>>, api: PortalApi) -> impl IntoView {
    let cid = Signal::derive(cx, move || session.get().map(|current| current.id()));
    let spends = create_local_resource(
        cx,
        move || cid.get(),
        move |cid| async move {
            let Some(cid) = cid else {
                return None;
            };
            match api.customer_spends(cid).await {
                Ok(data) => Some(data),
                Err(error) => {
                    log::error!("Could not fetch the spending breakdown. {error}");
                    None
                }
            }
        },
    );
    let loans = create_local_resource(
        cx,
        move || cid.get(),
        move |cid| async move {
            let Some(cid) = cid else {
                return None;
            };
            match api.loan_recommendations(cid).await {
                Ok(loans) => Some(loans),
                Err(error) => {
                    log::error!("Could not fetch loan recommendations. {error}");
                    None
                }
            }
        },
    );

    view! { cx,
        <h1 class="customer-portal-heading">"MyFin: My Financials"</h1>
        <Transition fallback=move || view! { cx, <span>"Loading..."</span> }>
            {move || {
                spends
                    .read(cx)
                    .flatten()
                    .map(|data| {
                        view! { cx,
                            <PieChartDisplay
                                heading="Spending Breakdown"
                                description="Where your money went, by category and by payment mode"
                                primary=data.category_slices()
                                secondary=data.mode_slices()
                            />
                        }
                    })
            }}
            <div class="loan-recommendations">
                <h2>"Loan Recommendations"</h2>
                {move || {
                    loans
                        .read(cx)
                        .flatten()
                        .map(|loans| {
                            let rows = loans
                                .into_iter()
                                .map(|loan| view! { cx, <LoanRow loan=loan/> })
                                .collect::<Vec<_>>()
                                .into_view(cx);
                            view! { cx,
                                <DataTable
                                    caption="Loan offers ranked by approval probability"
                                    columns=LOAN_COLUMNS
                                    rows=rows
                                />
                            }
                        })
                }}
            </div>
        </Transition>
    }
}
