use std::f64::consts::TAU;

use fin_portal_common::chart::{slice_spans, PieSlice};
use leptos::*;

/// Geometry of the rendered pie in viewBox units
const RADIUS: f64 = 90.0;
const CENTER: f64 = 100.0;

/// Point on the pie's rim for `fraction` of a full clockwise turn, measured
/// from 12 o'clock
fn rim_point(fraction: f64) -> (f64, f64) {
    let angle = fraction * TAU - TAU / 4.0;
    (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
}

/// SVG path of one slice sweeping from `start` to `end` turn fractions
fn slice_path(start: f64, end: f64) -> String {
    let (x1, y1) = rim_point(start);
    let (x2, y2) = rim_point(end);
    let large_arc = i32::from(end - start > 0.5);
    format!("M {CENTER} {CENTER} L {x1} {y1} A {RADIUS} {RADIUS} 0 {large_arc} 1 {x2} {y2} Z")
}

/// Pie chart over the given slices with a color legend. Renders a placeholder
/// note instead when every value is zero.
#[component]
pub fn pie_chart(cx: Scope, slices: Vec<PieSlice>) -> impl IntoView {
    let spans = slice_spans(&slices);
    if spans.is_empty() {
        return view! { cx, <p>"No chart data available"</p> }.into_view(cx);
    }
    let wedges = slices
        .iter()
        .zip(&spans)
        .map(|(slice, (start, end))| {
            let title = format!("{}: ${}", slice.name, slice.value);
            // a lone slice degenerates to a full circle
            if spans.len() == 1 {
                view! { cx,
                    <circle cx="100" cy="100" r="90" fill=slice.color>
                        <title>{title}</title>
                    </circle>
                }
                .into_view(cx)
            } else {
                view! { cx,
                    <path d=slice_path(*start, *end) fill=slice.color>
                        <title>{title}</title>
                    </path>
                }
                .into_view(cx)
            }
        })
        .collect::<Vec<_>>();
    let legend = slices
        .iter()
        .map(|slice| {
            let swatch = format!("background-color: {}", slice.color);
            view! { cx,
                <li>
                    <span class="legend-swatch" style=swatch></span>
                    {format!("{} (${})", slice.name, slice.value)}
                </li>
            }
        })
        .collect::<Vec<_>>();
    view! { cx,
        <div class="pie-chart">
            <svg viewBox="0 0 200 200" role="img">{wedges}</svg>
            <ul class="pie-legend">{legend}</ul>
        </div>
    }
    .into_view(cx)
}

/// Heading plus a pair of pie charts, the graph panel of both portals
#[component]
pub fn pie_chart_display(
    cx: Scope,
    heading: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    primary: Vec<PieSlice>,
    secondary: Vec<PieSlice>,
) -> impl IntoView {
    view! { cx,
        <div class="portal-graphs">
            <h2>{heading}</h2>
            {description.map(|text| view! { cx, <p>{text}</p> })}
            <PieChart slices=primary/>
            <PieChart slices=secondary/>
        </div>
    }
}
