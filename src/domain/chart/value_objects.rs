use crate::domain::market_data::{FxRate, YFinancePricePoint};

/// One labeled sample on the chart's X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

impl From<&FxRate> for ChartPoint {
    fn from(rate: &FxRate) -> Self {
        Self::new(rate.cur_dt.clone(), rate.rate)
    }
}

impl From<&YFinancePricePoint> for ChartPoint {
    fn from(point: &YFinancePricePoint) -> Self {
        Self::new(point.dt.clone(), point.close)
    }
}

/// Value Object - vertical value bounds of the plot area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YDomain {
    pub min: f64,
    pub max: f64,
}

impl YDomain {
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Value Object - Viewport
///
/// Maps point indices and values to pixels inside a plot rectangle that
/// leaves `left` pixels for the Y axis and `bottom` pixels for the X labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub domain: YDomain,
    pub point_count: usize,
}

impl Viewport {
    pub fn new(width: f64, height: f64, domain: YDomain, point_count: usize) -> Self {
        Self { width, height, left: 60.0, right: 16.0, top: 16.0, bottom: 40.0, domain, point_count }
    }

    pub fn plot_width(&self) -> f64 {
        (self.width - self.left - self.right).max(0.0)
    }

    pub fn plot_height(&self) -> f64 {
        (self.height - self.top - self.bottom).max(0.0)
    }

    pub fn baseline_y(&self) -> f64 {
        self.top + self.plot_height()
    }

    /// X pixel of the point at `index`; a single point sits in the middle.
    pub fn index_to_x(&self, index: usize) -> f64 {
        if self.point_count <= 1 {
            return self.left + self.plot_width() / 2.0;
        }
        let step = self.plot_width() / (self.point_count - 1) as f64;
        self.left + step * index as f64
    }

    /// Y pixel of `value`, inverted so larger values sit higher.
    pub fn value_to_y(&self, value: f64) -> f64 {
        let span = self.domain.span();
        if span == 0.0 {
            return self.top + self.plot_height() / 2.0;
        }
        let normalized = (value - self.domain.min) / span;
        self.top + self.plot_height() * (1.0 - normalized)
    }

    /// Index of the point horizontally closest to pixel `x`.
    pub fn nearest_index(&self, x: f64) -> Option<usize> {
        if self.point_count == 0 {
            return None;
        }
        if self.point_count == 1 {
            return Some(0);
        }
        let step = self.plot_width() / (self.point_count - 1) as f64;
        if step <= 0.0 {
            return Some(0);
        }
        let raw = ((x - self.left) / step).round();
        Some(raw.clamp(0.0, (self.point_count - 1) as f64) as usize)
    }
}

/// How values are printed on ticks and in the tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Exchange rates: four decimals.
    Rate,
    /// Prices: `$x.xx`.
    Usd,
    /// Two decimals, no unit.
    Plain,
}

impl ValueFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            ValueFormat::Rate => format!("{:.4}", value),
            ValueFormat::Usd => format!("${:.2}", value),
            ValueFormat::Plain => format!("{:.2}", value),
        }
    }
}

/// Value Object - Color
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn from_hex(hex: u32) -> Self {
        Self { r: ((hex >> 16) & 0xFF) as u8, g: ((hex >> 8) & 0xFF) as u8, b: (hex & 0xFF) as u8 }
    }

    /// CSS `rgba(...)` string for canvas styles.
    pub fn css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    pub const TEAL: Color = Color::from_hex(0x427a76);
    pub const AXIS: Color = Color::from_hex(0x666666);
    pub const GRID: Color = Color::from_hex(0xe0e0e0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_maps_domain_edges_to_plot_edges() {
        let viewport = Viewport::new(476.0, 256.0, YDomain { min: 1.0, max: 2.0 }, 5);
        assert_eq!(viewport.value_to_y(2.0), viewport.top);
        assert_eq!(viewport.value_to_y(1.0), viewport.baseline_y());
        assert_eq!(viewport.index_to_x(0), viewport.left);
        assert_eq!(viewport.index_to_x(4), viewport.left + viewport.plot_width());
        assert_eq!(viewport.nearest_index(viewport.left + 105.0), Some(1));
        assert_eq!(viewport.nearest_index(-50.0), Some(0));
    }

    #[test]
    fn value_formats() {
        assert_eq!(ValueFormat::Rate.format(1.36789), "1.3679");
        assert_eq!(ValueFormat::Usd.format(189.5), "$189.50");
        assert_eq!(Color::TEAL.css(0.8), "rgba(66, 122, 118, 0.8)");
    }
}
