use leptos::html::Canvas;
use leptos::*;

use crate::domain::{
    chart::{ChartPoint, ValueFormat, Viewport},
    logging::{LogComponent, get_logger},
};
use crate::infrastructure::rendering::{AreaChartRenderer, ChartStyle};

const CANVAS_WIDTH: u32 = 720;
const CANVAS_HEIGHT: u32 = 320;

/// Area + line chart over labeled points with a hover tooltip.
#[component]
pub fn AreaChart(
    #[prop(into)] points: Signal<Vec<ChartPoint>>,
    style: ChartStyle,
    tooltip_format: ValueFormat,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<Canvas>();
    let hover = create_rw_signal(None::<usize>);
    let viewport = store_value(None::<Viewport>);
    let renderer = store_value(AreaChartRenderer::new(style));

    create_effect(move |_| {
        let hovered = hover.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        points.with(|points| {
            let drawn = renderer.with_value(|renderer| renderer.render(&canvas, points, hovered));
            match drawn {
                Ok(drawn) => viewport.set_value(drawn),
                Err(e) => get_logger().error(
                    LogComponent::Presentation("AreaChart"),
                    &format!("❌ Render error: {:?}", e),
                ),
            }
        });
    });

    let handle_mouse_move = move |event: web_sys::MouseEvent| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        // Canvas pixels may be scaled by CSS.
        let css_width = canvas.client_width().max(1) as f64;
        let x = event.offset_x() as f64 * canvas.width() as f64 / css_width;
        let index = viewport.with_value(|vp| vp.as_ref().and_then(|vp| vp.nearest_index(x)));
        if hover.get_untracked() != index {
            hover.set(index);
        }
    };

    let tooltip = move || {
        let index = hover.get()?;
        let point = points.with(|points| points.get(index).cloned())?;
        Some(view! {
            <div class="chart-tooltip">
                <div class="chart-tooltip-label">{point.label}</div>
                <div class="chart-tooltip-value">{tooltip_format.format(point.value)}</div>
            </div>
        })
    };

    view! {
        <div class="chart-wrapper">
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="area-chart"
                on:mousemove=handle_mouse_move
                on:mouseleave=move |_| hover.set(None)
            />
            {tooltip}
        </div>
    }
}
