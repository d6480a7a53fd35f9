use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::domain::{
    chart::{ChartPoint, ChartScaleService, Color, ValueFormat, Viewport},
    logging::{LogComponent, get_logger},
};

const FONT: &str = "12px sans-serif";
const LINE_WIDTH: f64 = 3.0;

/// Presentation options for one area chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub color: Color,
    pub axis_format: ValueFormat,
    pub legend: Option<&'static str>,
}

impl ChartStyle {
    pub fn exchange_rate() -> Self {
        Self { color: Color::TEAL, axis_format: ValueFormat::Rate, legend: Some("Exchange Rate") }
    }

    pub fn price() -> Self {
        Self { color: Color::TEAL, axis_format: ValueFormat::Plain, legend: None }
    }
}

/// Canvas 2D area chart: gradient fill under a solid line, Y ticks and
/// thinned X labels.
pub struct AreaChartRenderer {
    style: ChartStyle,
}

impl AreaChartRenderer {
    pub fn new(style: ChartStyle) -> Self {
        Self { style }
    }

    fn context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
        canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2D context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("Failed to cast to 2D context"))
    }

    /// Redraw the whole canvas. Returns the viewport used so hover hit-testing
    /// matches what is on screen; `None` when there is nothing to plot.
    pub fn render(
        &self,
        canvas: &HtmlCanvasElement,
        points: &[ChartPoint],
        hover: Option<usize>,
    ) -> Result<Option<Viewport>, JsValue> {
        let context = Self::context(canvas)?;
        let width = canvas.width() as f64;
        let height = canvas.height() as f64;
        context.clear_rect(0.0, 0.0, width, height);

        let Some(domain) = ChartScaleService::y_domain(points) else {
            self.render_no_data(&context, width, height)?;
            return Ok(None);
        };
        let viewport = Viewport::new(width, height, domain, points.len());

        self.render_grid(&context, &viewport)?;
        self.render_area(&context, &viewport, points)?;
        self.render_line(&context, &viewport, points);
        self.render_x_labels(&context, &viewport, points)?;
        if let Some(legend) = self.style.legend {
            self.render_legend(&context, &viewport, legend)?;
        }
        if let Some(index) = hover.filter(|i| *i < points.len()) {
            self.render_hover_marker(&context, &viewport, index, points[index].value)?;
        }

        get_logger().trace(
            LogComponent::Infrastructure("AreaChartRenderer"),
            &format!("rendered {} points into {}x{}", points.len(), width, height),
        );
        Ok(Some(viewport))
    }

    fn render_no_data(&self, context: &CanvasRenderingContext2d, width: f64, height: f64) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from_str(&Color::AXIS.css(1.0)));
        context.set_font(FONT);
        context.set_text_align("center");
        context.fill_text("No data", width / 2.0, height / 2.0)
    }

    fn render_grid(&self, context: &CanvasRenderingContext2d, viewport: &Viewport) -> Result<(), JsValue> {
        context.set_line_width(1.0);
        context.set_stroke_style(&JsValue::from_str(&Color::GRID.css(1.0)));
        context.set_fill_style(&JsValue::from_str(&Color::AXIS.css(1.0)));
        context.set_font(FONT);
        context.set_text_align("right");
        context.set_text_baseline("middle");

        for tick in ChartScaleService::y_ticks(viewport.domain) {
            let y = viewport.value_to_y(tick);
            context.begin_path();
            context.move_to(viewport.left, y);
            context.line_to(viewport.width - viewport.right, y);
            context.stroke();
            context.fill_text(&self.style.axis_format.format(tick), viewport.left - 6.0, y)?;
        }
        Ok(())
    }

    fn render_area(
        &self,
        context: &CanvasRenderingContext2d,
        viewport: &Viewport,
        points: &[ChartPoint],
    ) -> Result<(), JsValue> {
        let baseline = viewport.baseline_y();
        let gradient = context.create_linear_gradient(0.0, viewport.top, 0.0, baseline);
        gradient.add_color_stop(0.0, &self.style.color.css(0.8))?;
        gradient.add_color_stop(1.0, &self.style.color.css(0.0))?;

        context.begin_path();
        context.move_to(viewport.index_to_x(0), baseline);
        for (i, point) in points.iter().enumerate() {
            context.line_to(viewport.index_to_x(i), viewport.value_to_y(point.value));
        }
        context.line_to(viewport.index_to_x(points.len() - 1), baseline);
        context.close_path();
        context.set_fill_style(&gradient);
        context.fill();
        Ok(())
    }

    fn render_line(&self, context: &CanvasRenderingContext2d, viewport: &Viewport, points: &[ChartPoint]) {
        context.begin_path();
        for (i, point) in points.iter().enumerate() {
            let (x, y) = (viewport.index_to_x(i), viewport.value_to_y(point.value));
            if i == 0 {
                context.move_to(x, y);
            } else {
                context.line_to(x, y);
            }
        }
        context.set_line_width(LINE_WIDTH);
        context.set_line_join("round");
        context.set_stroke_style(&JsValue::from_str(&self.style.color.css(1.0)));
        context.stroke();
    }

    fn render_x_labels(
        &self,
        context: &CanvasRenderingContext2d,
        viewport: &Viewport,
        points: &[ChartPoint],
    ) -> Result<(), JsValue> {
        context.set_fill_style(&JsValue::from_str(&Color::AXIS.css(1.0)));
        context.set_font(FONT);
        context.set_text_align("center");
        context.set_text_baseline("top");
        let y = viewport.baseline_y() + 8.0;
        for index in ChartScaleService::label_indices(points.len()) {
            context.fill_text(&points[index].label, viewport.index_to_x(index), y)?;
        }
        Ok(())
    }

    fn render_legend(&self, context: &CanvasRenderingContext2d, viewport: &Viewport, legend: &str) -> Result<(), JsValue> {
        let x = viewport.left + 8.0;
        let y = viewport.top + 8.0;
        context.set_fill_style(&JsValue::from_str(&self.style.color.css(1.0)));
        context.fill_rect(x, y, 12.0, 12.0);
        context.set_fill_style(&JsValue::from_str(&Color::AXIS.css(1.0)));
        context.set_font(FONT);
        context.set_text_align("left");
        context.set_text_baseline("top");
        context.fill_text(legend, x + 18.0, y)
    }

    fn render_hover_marker(
        &self,
        context: &CanvasRenderingContext2d,
        viewport: &Viewport,
        index: usize,
        value: f64,
    ) -> Result<(), JsValue> {
        let x = viewport.index_to_x(index);
        let y = viewport.value_to_y(value);

        context.set_line_width(1.0);
        context.set_stroke_style(&JsValue::from_str(&Color::AXIS.css(0.6)));
        context.begin_path();
        context.move_to(x, viewport.top);
        context.line_to(x, viewport.baseline_y());
        context.stroke();

        context.begin_path();
        context.arc(x, y, 5.0, 0.0, std::f64::consts::TAU)?;
        context.set_fill_style(&JsValue::from_str(&self.style.color.css(1.0)));
        context.fill();
        Ok(())
    }
}
