// SVG rendering of line charts
use crate::domain::chart::{ChartKind, LineChart};
use askama::Template;
use std::fmt::Write;

const WIDTH: f64 = 800.0;
const HEIGHT: f64 = 400.0;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 50.0;
const MARGIN_BOTTOM: f64 = 60.0;
const MAX_X_TICKS: usize = 6;
const POINT_RADIUS: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    fn distance(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }
}

/// Bezier control points around `current`, pulled toward the line from
/// `previous` to `next` by `tension`. Returns (incoming, outgoing).
pub fn control_points(previous: Point, current: Point, next: Point, tension: f64) -> (Point, Point) {
    let d01 = previous.distance(&current);
    let d12 = current.distance(&next);
    let total = d01 + d12;

    let (s01, s12) = if total > 0.0 {
        (d01 / total, d12 / total)
    } else {
        (0.0, 0.0)
    };
    let fa = tension * s01;
    let fb = tension * s12;
    let dx = next.x - previous.x;
    let dy = next.y - previous.y;

    (
        Point {
            x: current.x - fa * dx,
            y: current.y - fa * dy,
        },
        Point {
            x: current.x + fb * dx,
            y: current.y + fb * dy,
        },
    )
}

/// Cubic path through `points`. Empty for fewer than two points.
pub fn line_path(points: &[Point], tension: f64) -> String {
    if points.len() < 2 {
        return String::new();
    }

    let controls: Vec<(Point, Point)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let previous = if i == 0 { *p } else { points[i - 1] };
            let next = points.get(i + 1).copied().unwrap_or(*p);
            control_points(previous, *p, next, tension)
        })
        .collect();

    let mut path = format!("M{:.2},{:.2}", points[0].x, points[0].y);
    for i in 1..points.len() {
        let (_, out) = controls[i - 1];
        let (inc, _) = controls[i];
        let _ = write!(
            path,
            " C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
            out.x, out.y, inc.x, inc.y, points[i].x, points[i].y
        );
    }
    path
}

/// A positioned text label.
struct Tick {
    x: String,
    y: String,
    text: String,
}

struct Marker {
    x: String,
    y: String,
}

#[derive(Template)]
#[template(path = "line_chart.svg", escape = "html")]
struct LineChartTemplate<'a> {
    width: f64,
    height: f64,
    responsive: bool,
    label: &'a str,
    color: &'a str,
    x_label: &'a str,
    y_label: &'a str,
    legend_x: String,
    legend_text_x: String,
    left: f64,
    right: f64,
    top: f64,
    bottom: f64,
    x_title_x: String,
    x_title_y: String,
    y_title_y: String,
    y_ticks: Vec<Tick>,
    x_ticks: Vec<Tick>,
    path: String,
    points: Vec<Marker>,
    radius: f64,
}

/// Render `chart` as a standalone SVG document.
pub fn render_line_chart(chart: &LineChart) -> askama::Result<String> {
    let spec = &chart.spec;
    let data = &chart.data;
    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_height = HEIGHT - MARGIN_TOP - MARGIN_BOTTOM;
    let bottom = MARGIN_TOP + plot_height;

    let (lo, hi, y_tick_values) = value_bounds(data.value_range());

    let n = data.len();
    let x_at = |i: usize| {
        if n <= 1 {
            MARGIN_LEFT + plot_width / 2.0
        } else {
            MARGIN_LEFT + plot_width * i as f64 / (n - 1) as f64
        }
    };
    let y_at = |v: f64| MARGIN_TOP + plot_height * (1.0 - normalize(v, lo, hi));

    let points: Vec<Point> = data
        .values
        .iter()
        .enumerate()
        .map(|(i, v)| Point { x: x_at(i), y: y_at(*v) })
        .collect();

    let y_ticks = y_tick_values
        .into_iter()
        .map(|v| Tick {
            x: coord(MARGIN_LEFT - 6.0),
            y: coord(y_at(v) + 4.0),
            text: format_value(v),
        })
        .collect();
    let x_ticks = tick_indices(n)
        .into_iter()
        .map(|i| Tick {
            x: coord(x_at(i)),
            y: coord(bottom + 18.0),
            text: data.labels[i].clone(),
        })
        .collect();

    let path = match spec.kind {
        ChartKind::Line => line_path(&points, spec.smoothing),
    };

    LineChartTemplate {
        width: WIDTH,
        height: HEIGHT,
        responsive: spec.responsive,
        label: &spec.series_label,
        color: &spec.color,
        x_label: &spec.x_label,
        y_label: &spec.y_label,
        legend_x: coord(WIDTH / 2.0 - 60.0),
        legend_text_x: coord(WIDTH / 2.0 - 24.0),
        left: MARGIN_LEFT,
        right: MARGIN_LEFT + plot_width,
        top: MARGIN_TOP,
        bottom,
        x_title_x: coord(MARGIN_LEFT + plot_width / 2.0),
        x_title_y: coord(HEIGHT - 10.0),
        y_title_y: coord(MARGIN_TOP + plot_height / 2.0),
        y_ticks,
        x_ticks,
        path,
        points: points
            .iter()
            .map(|p| Marker {
                x: coord(p.x),
                y: coord(p.y),
            })
            .collect(),
        radius: POINT_RADIUS,
    }
    .render()
}

/// Value axis bounds and the values to label on it. A flat series is padded
/// in proportion to its magnitude so the range never collapses.
fn value_bounds(range: Option<(f64, f64)>) -> (f64, f64, Vec<f64>) {
    match range {
        Some((lo, hi)) if hi > lo => (lo, hi, vec![lo, hi]),
        Some((v, _)) => {
            let pad = (v.abs() * 0.05).max(1.0);
            (v - pad, v + pad, vec![v])
        }
        None => (0.0, 1.0, vec![]),
    }
}

/// Position of `v` in `[lo, hi]` as a fraction. Halving first keeps the span
/// finite for values near `f64::MAX`.
fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    let span = hi / 2.0 - lo / 2.0;
    let t = (v / 2.0 - lo / 2.0) / span;
    if t.is_finite() { t } else { 0.5 }
}

fn coord(v: f64) -> String {
    format!("{:.2}", v)
}

/// Indices of the x labels to print, at most `MAX_X_TICKS`, always
/// including the first and last point.
fn tick_indices(n: usize) -> Vec<usize> {
    if n <= MAX_X_TICKS {
        return (0..n).collect();
    }
    let step = (n - 1) as f64 / (MAX_X_TICKS - 1) as f64;
    (0..MAX_X_TICKS)
        .map(|k| (k as f64 * step).round() as usize)
        .collect()
}

fn format_value(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{:.0}", v)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartData, ChartSpec};
    use crate::domain::sensor::SensorReading;

    fn chart(readings: &[SensorReading]) -> LineChart {
        LineChart::new(
            ChartSpec::line("Temperature (°C)", "#ff6384"),
            ChartData::from_readings(readings),
        )
    }

    fn render(chart: &LineChart) -> String {
        render_line_chart(chart).unwrap()
    }

    #[test]
    fn test_zero_tension_draws_straight_segments() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 10.0, y: 5.0 };
        let c = Point { x: 20.0, y: 0.0 };

        let (inc, out) = control_points(a, b, c, 0.0);
        assert_eq!(inc, b);
        assert_eq!(out, b);
    }

    #[test]
    fn test_control_points_follow_neighbour_direction() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 10.0, y: 0.0 };
        let c = Point { x: 20.0, y: 0.0 };

        let (inc, out) = control_points(a, b, c, 0.1);
        // Equal distances split the tension evenly: 0.05 * 20.
        assert!((inc.x - 9.0).abs() < 1e-9);
        assert!((out.x - 11.0).abs() < 1e-9);
        assert_eq!(inc.y, 0.0);
    }

    #[test]
    fn test_coincident_points_do_not_produce_nan() {
        let p = Point { x: 3.0, y: 4.0 };
        let (inc, out) = control_points(p, p, p, 0.1);
        assert_eq!(inc, p);
        assert_eq!(out, p);
    }

    #[test]
    fn test_path_has_one_segment_per_gap() {
        let points: Vec<Point> = (0..4)
            .map(|i| Point {
                x: i as f64 * 10.0,
                y: (i % 2) as f64,
            })
            .collect();
        let path = line_path(&points, 0.1);

        assert!(path.starts_with("M0.00,0.00"));
        assert_eq!(path.matches(" C").count(), 3);
        assert!(line_path(&points[..1], 0.1).is_empty());
    }

    #[test]
    fn test_render_includes_axes_label_and_color() {
        let svg = render(&chart(&[
            SensorReading::new("2024-01-01T00:00:00Z", 21.5),
            SensorReading::new("2024-01-01T01:00:00Z", 22.0),
        ]));

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="100%""#));
        assert!(svg.contains(">Time</text>"));
        assert!(svg.contains(">Value</text>"));
        assert!(svg.contains("Temperature (°C)"));
        assert!(svg.contains(r##"stroke="#ff6384""##));
        assert!(svg.contains("2024-01-01T01:00:00Z"));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn test_render_empty_chart() {
        let svg = render(&chart(&[]));
        assert!(svg.contains("Temperature (°C)"));
        assert!(!svg.contains("<path"));
        assert!(!svg.contains("<circle"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_render_single_point() {
        let svg = render(&chart(&[SensorReading::new("2024-01-01T00:00:00Z", 21.5)]));
        assert!(!svg.contains("<path"));
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains(">21.5</text>"));
    }

    #[test]
    fn test_render_flat_series_of_large_values() {
        let svg = render(&chart(&[
            SensorReading::new("a", 1e17),
            SensorReading::new("b", 1e17),
        ]));

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
        assert_eq!(svg.matches("<circle").count(), 2);
        // The flat line sits mid-plot.
        assert!(svg.contains(r#"cy="195.00""#));
    }

    #[test]
    fn test_render_extreme_spread_stays_finite() {
        let svg = render(&chart(&[
            SensorReading::new("a", -f64::MAX),
            SensorReading::new("b", f64::MAX),
        ]));

        assert!(!svg.contains("NaN"));
        assert!(!svg.contains("inf"));
    }

    #[test]
    fn test_value_bounds() {
        assert_eq!(value_bounds(None), (0.0, 1.0, vec![]));
        assert_eq!(value_bounds(Some((2.0, 5.0))), (2.0, 5.0, vec![2.0, 5.0]));
        assert_eq!(value_bounds(Some((10.0, 10.0))), (9.0, 11.0, vec![10.0]));

        let (lo, hi, _) = value_bounds(Some((1e17, 1e17)));
        assert!(hi > lo);
        assert!((normalize(1e17, lo, hi) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_render_escapes_text() {
        let mut chart = chart(&[SensorReading::new("<t1>", 1.0)]);
        chart.spec.series_label = "A & B".to_string();
        let svg = render(&chart);

        assert!(svg.contains("A &amp; B"));
        assert!(svg.contains("&lt;t1&gt;"));
        assert!(!svg.contains("<t1>"));
    }

    #[test]
    fn test_tick_indices() {
        assert_eq!(tick_indices(3), vec![0, 1, 2]);
        assert_eq!(tick_indices(11), vec![0, 2, 4, 6, 8, 10]);
        assert_eq!(tick_indices(101).last(), Some(&100));
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(21.0), "21");
        assert_eq!(format_value(21.5), "21.5");
        assert_eq!(format_value(-0.25), "-0.25");
        assert_eq!(format_value(1.001), "1");
    }
}
