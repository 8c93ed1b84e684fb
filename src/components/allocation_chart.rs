//! Allocation Chart Component
//!
//! Portfolio allocation doughnut with a legend underneath. Slice
//! angles come from the view model; this component only paints.

use std::f64::consts::PI;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::AppState;
use crate::viewmodel::allocation::SLICE_BORDER;
use crate::viewmodel::AllocationView;

#[component]
pub fn AllocationChart() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    let allocation = create_memo(move |_| {
        AllocationView::from_allocation(
            &state
                .snapshot
                .get()
                .map(|snapshot| snapshot.portfolio.allocation)
                .unwrap_or_default(),
        )
    });

    create_effect(move |_| {
        let view = allocation.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_allocation_chart(&canvas, &view);
        }
    });

    view! {
        <section class="card">
            <h2>"Portfolio Allocation"</h2>
            <canvas node_ref=canvas_ref id="allocation-chart" width="300" height="300" />
            <div class="chart-legend">
                {move || {
                    allocation
                        .get()
                        .slices
                        .into_iter()
                        .map(|slice| view! {
                            <span class="legend-entry">
                                <span
                                    class="legend-swatch"
                                    style=format!("background-color: {}", slice.color)
                                />
                                {format!("{} ({:.0}%)", slice.name, slice.fraction * 100.0)}
                            </span>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}

fn draw_allocation_chart(canvas: &HtmlCanvasElement, view: &AllocationView) {
    let ctx = match canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    {
        Some(ctx) => ctx,
        None => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_fill_style_str("#1e1e1e");
    ctx.fill_rect(0.0, 0.0, width, height);

    if view.slices.is_empty() {
        ctx.set_fill_style_str("#777777");
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No allocation data", width / 2.0 - 60.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;

    for slice in &view.slices {
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, slice.start_angle, slice.end_angle);
        ctx.close_path();
        ctx.set_fill_style_str(slice.color);
        ctx.fill();
        ctx.set_stroke_style_str(SLICE_BORDER);
        ctx.set_line_width(3.0);
        ctx.stroke();
    }

    // Punch the hole that makes it a doughnut
    ctx.begin_path();
    let _ = ctx.arc(cx, cy, radius * 0.55, 0.0, 2.0 * PI);
    ctx.set_fill_style_str("#1e1e1e");
    ctx.fill();
}
