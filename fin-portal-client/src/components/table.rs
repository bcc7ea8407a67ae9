use leptos::*;

#[component]
pub fn data_table(
    cx: Scope,
    caption: &'static str,
    columns: &'static [&'static str],
    rows: View,
) -> impl IntoView {
    view! { cx,
        <div class="table-responsive-sm">
            <table class="table table-striped caption-top">
                <caption>{caption}</caption>
                <thead>
                    <tr>
                    {columns.iter()
                        .copied()
                        .map(|c| view! { cx, <th>{c}</th> })
                        .collect::<Vec<_>>()}
                    </tr>
                </thead>
                <tbody>
                {rows}
                </tbody>
            </table>
        </div>
    }
}
