//! Property tests for grid rendering.

use colstats_model::{
    ColumnStatistics, DateHints, Metric, MetricCell, MetricValue, StatisticsReport,
};
use colstats_render::{NULL_MARKER, format_cell, render_grid};
use proptest::prelude::*;

fn metric_value() -> impl Strategy<Value = Option<MetricValue>> {
    prop_oneof![
        Just(None),
        any::<f64>().prop_map(|value| Some(MetricValue::Number(value))),
        (-1e13f64..1e13).prop_map(|value| Some(MetricValue::Number(value))),
        "[a-z0-9-]{0,12}".prop_map(|text| Some(MetricValue::Text(text))),
    ]
}

fn column_statistics() -> impl Strategy<Value = ColumnStatistics> {
    (
        0u64..10_000,
        prop::option::of(0u64..10_000),
        metric_value(),
        metric_value(),
        metric_value(),
        metric_value(),
    )
        .prop_map(|(length, unique_count, min, median, mean, max)| ColumnStatistics {
            length,
            null_count: length / 2,
            unique_count,
            min,
            median,
            mean,
            max,
        })
}

fn report() -> impl Strategy<Value = (StatisticsReport, DateHints)> {
    prop::collection::vec((column_statistics(), any::<bool>()), 0..12).prop_map(|columns| {
        let mut hints = DateHints::new();
        let mut entries = Vec::with_capacity(columns.len());
        for (index, (stats, is_date)) in columns.into_iter().enumerate() {
            let name = format!("col_{index}");
            if is_date {
                hints.insert(name.clone(), "%Y-%m-%d");
            }
            entries.push((name, stats));
        }
        let report = StatisticsReport::try_from_columns(entries).expect("unique names");
        (report, hints)
    })
}

proptest! {
    #[test]
    fn grid_shape_follows_report((report, hints) in report()) {
        let grid = render_grid(&report, Some(&hints));
        prop_assert_eq!(grid.column_count(), report.len() + 1);
        prop_assert_eq!(grid.row_count(), Metric::ALL.len());
        for (row, metric) in grid.rows().iter().zip(Metric::ALL) {
            prop_assert_eq!(row.len(), report.len() + 1);
            prop_assert_eq!(row[0].as_str(), metric.as_str());
        }
    }

    #[test]
    fn rendering_is_deterministic((report, hints) in report()) {
        prop_assert_eq!(
            render_grid(&report, Some(&hints)),
            render_grid(&report, Some(&hints))
        );
    }

    #[test]
    fn null_cells_always_render_marker(is_date in any::<bool>()) {
        for metric in Metric::ALL {
            let first = format_cell(metric, MetricCell::Null, is_date);
            let second = format_cell(metric, MetricCell::Null, is_date);
            prop_assert_eq!(first.as_str(), NULL_MARKER);
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn any_number_formats_without_panicking(value in any::<f64>(), is_date in any::<bool>()) {
        let value = MetricValue::Number(value);
        for metric in Metric::ALL {
            let text = format_cell(metric, MetricCell::Value(&value), is_date);
            prop_assert!(!text.is_empty());
        }
    }
}

#[test]
fn epoch_renders_per_column_hint() {
    let epoch = ColumnStatistics {
        length: 1,
        null_count: 0,
        unique_count: Some(0),
        min: Some(MetricValue::Number(0.0)),
        median: Some(MetricValue::Number(0.0)),
        mean: Some(MetricValue::Number(0.0)),
        max: Some(MetricValue::Number(0.0)),
    };
    let report = StatisticsReport::try_from_columns(vec![
        ("when".to_string(), epoch.clone()),
        ("amount".to_string(), epoch),
    ])
    .unwrap();
    let hints: DateHints = [("when", "%Y-%m-%d")].into_iter().collect();
    let grid = render_grid(&report, Some(&hints));

    for metric in [Metric::Min, Metric::Median, Metric::Mean, Metric::Max] {
        assert_eq!(grid.cell(metric, "when"), Some("1970-01-01T00:00:00.000Z"));
        assert_eq!(grid.cell(metric, "amount"), Some("0.00"));
    }
    assert_eq!(grid.cell(Metric::UniqueCount, "when"), Some("0"));
    assert_eq!(grid.cell(Metric::NullCount, "amount"), Some("0"));
}
