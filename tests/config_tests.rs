use gpui_slope::{
    AxisSide, Figure, FigureConfig, LegendConfig, LegendPosition, Mapping, Metrics, MetricsConfig,
    XyItem, XyMetrics,
};

#[test]
fn test_defaults() {
    let config = FigureConfig::default();
    assert_eq!(config.metrics.x_low_bound, 80.0);
    assert_eq!(config.metrics.y_up_bound, 45.0);
    assert_eq!(config.metrics.padding, 0.05);
    assert_eq!(config.metrics.bottom_label, "X");
    assert_eq!(config.metrics.left_label, "Y");
    assert!(config.legend.enabled);
    assert_eq!(config.legend.position, LegendPosition::TopRight);
}

#[test]
fn test_partial_json_fills_defaults() {
    let config = FigureConfig::from_json(
        r#"{ "metrics": { "x_low_bound": 60.0, "bottom_label": "time" },
             "legend": { "position": "BottomLeft" } }"#,
    )
    .unwrap();
    assert_eq!(config.metrics.x_low_bound, 60.0);
    assert_eq!(config.metrics.x_up_bound, 80.0);
    assert_eq!(config.metrics.bottom_label, "time");
    assert!(config.legend.enabled);
    assert_eq!(config.legend.position, LegendPosition::BottomLeft);

    assert_eq!(FigureConfig::from_json("{}").unwrap(), FigureConfig::default());
}

#[test]
fn test_invalid_configs_are_rejected() {
    let err = FigureConfig::from_json(r#"{ "metrics": { "y_low_bound": -1.0 } }"#).unwrap_err();
    assert!(err.to_string().contains("y_low_bound"), "{err}");

    let err = FigureConfig::from_json(r#"{ "metrics": { "padding": 0.5 } }"#).unwrap_err();
    assert!(err.to_string().contains("padding"), "{err}");

    assert!(FigureConfig::from_json("{ not json").is_err());
    assert!(FigureConfig::from_json(r#"{ "legend": { "position": "Middle" } }"#).is_err());
}

#[test]
fn test_from_path() {
    let path = std::env::temp_dir().join(format!("gpui_slope_config_{}.json", std::process::id()));
    let config = FigureConfig {
        metrics: MetricsConfig {
            padding: 0.1,
            ..Default::default()
        },
        legend: LegendConfig {
            enabled: false,
            position: LegendPosition::TopLeft,
        },
    };
    std::fs::write(&path, config.to_json().unwrap()).unwrap();
    let loaded = FigureConfig::from_path(&path).unwrap();
    std::fs::remove_file(&path).ok();
    assert_eq!(loaded, config);

    let err = FigureConfig::from_path(path.with_extension("missing")).unwrap_err();
    assert!(format!("{err:#}").contains("failed to read figure config"));
}

#[test]
fn test_figure_applies_config() {
    let config = FigureConfig::from_json(
        r#"{ "metrics": { "padding": 0.0, "left_label": "volts" },
             "legend": { "enabled": false } }"#,
    )
    .unwrap();
    let mut figure = Figure::with_config(&config);
    assert!(!figure.legend.enabled);

    let id = figure.add_xy_metrics();
    figure
        .metrics_mut(id)
        .unwrap()
        .add_item(Box::new(XyItem::new("c", vec![2.0, 4.0], vec![1.0, 3.0])));
    let metrics = figure.xy_metrics(id).unwrap();
    assert_eq!(metrics.get_axis(AxisSide::Left).label(), "volts");
    let w = metrics.data_window();
    assert_eq!((w.xmin, w.xmax, w.ymin, w.ymax), (2.0, 4.0, 1.0, 3.0));
}

#[test]
fn test_metrics_config_margins() {
    let metrics = XyMetrics::with_config(&MetricsConfig {
        x_low_bound: 10.0,
        x_up_bound: 20.0,
        y_low_bound: 30.0,
        y_up_bound: 40.0,
        ..Default::default()
    });
    assert_eq!(metrics.x_boundary(), (10.0, 20.0));
    assert_eq!(metrics.y_boundary(), (30.0, 40.0));
}
