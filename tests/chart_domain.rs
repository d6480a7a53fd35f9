use investment_lens::domain::chart::{ChartPoint, ChartScaleService, ValueFormat, Viewport, YDomain};
use investment_lens::domain::market_data::{FxRate, YFinancePricePoint};

fn rates(values: &[f64]) -> Vec<ChartPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| ChartPoint::new(format!("2024-01-{:02}", i + 1), *v))
        .collect()
}

#[test]
fn domain_pads_ten_percent_of_range() {
    let domain = ChartScaleService::y_domain(&rates(&[1.10, 1.30, 1.20])).unwrap();
    assert!((domain.min - 1.08).abs() < 1e-9);
    assert!((domain.max - 1.32).abs() < 1e-9);
}

#[test]
fn empty_series_has_no_domain() {
    assert!(ChartScaleService::y_domain(&[]).is_none());
    assert!(ChartScaleService::y_domain(&rates(&[f64::NAN])).is_none());
}

#[test]
fn five_ticks_span_the_domain() {
    let ticks = ChartScaleService::y_ticks(YDomain { min: 100.0, max: 200.0 });
    assert_eq!(ticks, vec![100.0, 125.0, 150.0, 175.0, 200.0]);
}

#[test]
fn long_series_shows_about_six_labels() {
    let indices = ChartScaleService::label_indices(90);
    assert_eq!(indices.first(), Some(&0));
    assert_eq!(indices.len(), 5);
    assert!(ChartScaleService::label_indices(30).len() <= 7);
    assert_eq!(ChartScaleService::label_indices(7), (0..7).collect::<Vec<_>>());
}

#[test]
fn hover_maps_back_to_the_drawn_point() {
    let points = rates(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    let domain = ChartScaleService::y_domain(&points).unwrap();
    let viewport = Viewport::new(720.0, 320.0, domain, points.len());
    for i in 0..points.len() {
        assert_eq!(viewport.nearest_index(viewport.index_to_x(i)), Some(i));
    }
    assert!(viewport.value_to_y(8.0) < viewport.value_to_y(1.0));
}

#[test]
fn series_convert_to_points() {
    let fx = FxRate { cur_dt: "2024-02-01".into(), rate: 1.3456 };
    assert_eq!(ChartPoint::from(&fx), ChartPoint::new("2024-02-01", 1.3456));

    let price = YFinancePricePoint {
        dt: "2024-02-01".into(),
        close: 187.25,
        raw_close: 187.25,
        adj_close: 186.9,
        volume: 1.0,
        stock_splits: 0.0,
        dividends: 0.0,
        split_factor: 1.0,
    };
    assert_eq!(ChartPoint::from(&price).value, 187.25);
}

#[test]
fn formats_per_chart() {
    assert_eq!(ValueFormat::Rate.format(1.34567), "1.3457");
    assert_eq!(ValueFormat::Usd.format(187.256), "$187.26");
    assert_eq!(ValueFormat::Plain.format(187.2), "187.20");
}
