//! Budget Chart Component
//!
//! Grouped spent-vs-allocated bars on an HTML5 canvas. The bar
//! geometry comes from the view model; this component only paints.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::state::AppState;
use crate::viewmodel::budgets::{
    self, ALLOCATED_BORDER, ALLOCATED_FILL, SPENT_BORDER, SPENT_FILL,
};
use crate::viewmodel::BudgetChartView;

#[component]
pub fn BudgetChart() -> impl IntoView {
    let state = use_context::<AppState>().expect("AppState not found");
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let view = BudgetChartView::from_budgets(
            &state
                .snapshot
                .get()
                .map(|snapshot| snapshot.budgets)
                .unwrap_or_default(),
        );
        if let Some(canvas) = canvas_ref.get() {
            draw_budget_chart(&canvas, &view);
        }
    });

    view! {
        <section class="card">
            <h2>"Budgets"</h2>
            <canvas node_ref=canvas_ref id="budget-chart" width="600" height="300" />
            <div class="chart-legend">
                <span class="legend-entry">
                    <span
                        class="legend-swatch"
                        style=format!("background-color: {}", SPENT_BORDER)
                    />
                    "Spent"
                </span>
                <span class="legend-entry">
                    <span
                        class="legend-swatch"
                        style=format!("background-color: {}", ALLOCATED_BORDER)
                    />
                    "Budget"
                </span>
            </div>
        </section>
    }
}

fn draw_budget_chart(canvas: &HtmlCanvasElement, view: &BudgetChartView) {
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

    if view.groups.is_empty() {
        ctx.set_fill_style_str("#777777");
        ctx.set_font("14px sans-serif");
        let _ = ctx.fill_text("No budget data", width / 2.0 - 50.0, height / 2.0);
        return;
    }

    let margin_left = 50.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 25.0;
    let plot_width = width - margin_left - margin_right;
    let plot_height = height - margin_top - margin_bottom;

    // Horizontal gridlines with amount labels
    ctx.set_stroke_style_str("#333333");
    ctx.set_fill_style_str("#a0a0a0");
    ctx.set_font("11px sans-serif");
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + plot_height * (i as f64 / 4.0);
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = view.y_max * (1.0 - i as f64 / 4.0);
        let _ = ctx.fill_text(&format!("{:.0}", value), 4.0, y + 4.0);
    }

    for rect in budgets::layout_bars(view, plot_width, plot_height) {
        let (fill, border) = if rect.spent {
            (SPENT_FILL, SPENT_BORDER)
        } else {
            (ALLOCATED_FILL, ALLOCATED_BORDER)
        };
        let x = margin_left + rect.x;
        let y = margin_top + rect.y;
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(x, y, rect.width, rect.height);
        ctx.set_stroke_style_str(border);
        ctx.stroke_rect(x, y, rect.width, rect.height);
    }

    // Category labels under each slot
    ctx.set_fill_style_str("#a0a0a0");
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");
    let slot = plot_width / view.groups.len() as f64;
    for (i, group) in view.groups.iter().enumerate() {
        let x = margin_left + i as f64 * slot + slot / 2.0;
        let _ = ctx.fill_text(&group.category, x, height - 8.0);
    }
    ctx.set_text_align("left");
}
