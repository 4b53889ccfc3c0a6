use plotly_client::core::{
    Axis, ColorScale, ColorStop, ErrorBar, FloatOrList, Line, Marker, StringOrList, TraceType,
};
use plotly_client::{Figure, Layout, PlotlyError, Trace, TypedArray};
use serde_json::{Value, json};

fn full_trace() -> Trace {
    Trace {
        trace_type: TraceType::Scatter,
        x: Some(TypedArray::integers([1, 2, 3])),
        y: Some(TypedArray::floats([0.5, 1.5, 2.5])),
        z: Some(TypedArray::integers([7, 8, 9])),
        r: Some(TypedArray::floats([1.0])),
        t: Some(TypedArray::floats([90.0])),
        mode: Some("lines+markers".to_owned()),
        name: Some("series a".to_owned()),
        text: Some(TypedArray::strings(["a", "b", "c"])),
        error_x: Some(ErrorBar::percent(5.0)),
        error_y: Some(ErrorBar {
            arrayminus: Some(TypedArray::floats([0.1, 0.2, 0.3])),
            symmetric: Some(false),
            ..ErrorBar::data(TypedArray::floats([0.2, 0.4, 0.6]))
        }),
        marker: Some(Marker {
            color: Some(StringOrList::list(["red".to_owned(), "blue".to_owned()])),
            size: Some(FloatOrList::Scalar(12.0)),
            symbol: Some(StringOrList::scalar("diamond")),
            line: Some(Line {
                color: Some("black".to_owned()),
                width: Some(0.5),
                dash: None,
            }),
            opacity: Some(0.8),
            sizeref: Some(2.0),
            sizemode: Some("area".to_owned()),
            colorscale: Some(ColorScale::custom([
                ColorStop::new(0.0, "#000000"),
                ColorStop::new(1.0, "#ffffff"),
            ])),
            cauto: Some(false),
            cmin: Some(0.0),
            cmax: Some(10.0),
        }),
        line: Some(Line {
            color: Some("green".to_owned()),
            width: Some(2.0),
            dash: Some("dot".to_owned()),
        }),
        textposition: Some("top center".to_owned()),
        fill: Some("tozeroy".to_owned()),
        fillcolor: Some("rgba(0,0,0,0.1)".to_owned()),
    }
}

const TRACE_KEYS: [&str; 15] = [
    "x",
    "y",
    "z",
    "r",
    "t",
    "mode",
    "name",
    "text",
    "error_x",
    "error_y",
    "marker",
    "line",
    "textposition",
    "fill",
    "fillcolor",
];

const MARKER_KEYS: [&str; 11] = [
    "color",
    "size",
    "symbol",
    "line",
    "opacity",
    "sizeref",
    "sizemode",
    "colorscale",
    "cauto",
    "cmin",
    "cmax",
];

fn clear_trace_field(trace: &mut Trace, key: &str) {
    match key {
        "x" => trace.x = None,
        "y" => trace.y = None,
        "z" => trace.z = None,
        "r" => trace.r = None,
        "t" => trace.t = None,
        "mode" => trace.mode = None,
        "name" => trace.name = None,
        "text" => trace.text = None,
        "error_x" => trace.error_x = None,
        "error_y" => trace.error_y = None,
        "marker" => trace.marker = None,
        "line" => trace.line = None,
        "textposition" => trace.textposition = None,
        "fill" => trace.fill = None,
        "fillcolor" => trace.fillcolor = None,
        other => panic!("unknown trace field {other}"),
    }
}

fn clear_marker_field(marker: &mut Marker, key: &str) {
    match key {
        "color" => marker.color = None,
        "size" => marker.size = None,
        "symbol" => marker.symbol = None,
        "line" => marker.line = None,
        "opacity" => marker.opacity = None,
        "sizeref" => marker.sizeref = None,
        "sizemode" => marker.sizemode = None,
        "colorscale" => marker.colorscale = None,
        "cauto" => marker.cauto = None,
        "cmin" => marker.cmin = None,
        "cmax" => marker.cmax = None,
        other => panic!("unknown marker field {other}"),
    }
}

fn round_trip(figure: &Figure) -> (Value, Figure) {
    let encoded = figure.to_json_string().expect("encode");
    let value: Value = serde_json::from_str(&encoded).expect("valid json");
    let decoded = Figure::from_json_str(&encoded).expect("decode");
    (value, decoded)
}

#[test]
fn every_unset_trace_field_stays_unset_after_round_trip() {
    for key in TRACE_KEYS {
        let mut trace = full_trace();
        clear_trace_field(&mut trace, key);
        let figure = Figure::new(vec![trace]);

        let (value, decoded) = round_trip(&figure);
        assert!(
            value["data"][0].get(key).is_none(),
            "`{key}` must be omitted when unset"
        );
        assert_eq!(decoded, figure, "`{key}` must decode back as unset");
    }
}

#[test]
fn every_unset_marker_field_stays_unset_after_round_trip() {
    for key in MARKER_KEYS {
        let mut trace = full_trace();
        if let Some(marker) = trace.marker.as_mut() {
            clear_marker_field(marker, key);
        }
        let figure = Figure::new(vec![trace]);

        let (value, decoded) = round_trip(&figure);
        assert!(
            value["data"][0]["marker"].get(key).is_none(),
            "marker `{key}` must be omitted when unset"
        );
        assert_eq!(decoded, figure, "marker `{key}` must decode back as unset");
    }
}

#[test]
fn zero_values_are_distinct_from_unset() {
    let trace = Trace::bar()
        .with_x(TypedArray::default())
        .with_name("")
        .with_marker(Marker {
            opacity: Some(0.0),
            cauto: Some(false),
            ..Marker::default()
        });
    let figure = Figure::new(vec![trace]).with_layout(Layout {
        width: Some(0),
        ..Layout::default()
    });

    let (value, decoded) = round_trip(&figure);
    assert_eq!(
        value,
        json!({
            "layout": {"width": 0},
            "data": [{
                "type": "bar",
                "x": [],
                "name": "",
                "marker": {"opacity": 0.0, "cauto": false}
            }]
        })
    );
    assert_eq!(decoded, figure);
}

#[test]
fn layout_fields_round_trip_and_unset_ones_are_omitted() {
    let layout = Layout {
        title: Some("Revenue".to_owned()),
        height: Some(400),
        barmode: Some("group".to_owned()),
        xaxis: Some(Axis::titled("Month").with_type("date")),
        ..Layout::default()
    };
    let figure = Figure::new(vec![Trace::scatter()]).with_layout(layout);

    let (value, decoded) = round_trip(&figure);
    assert_eq!(
        value["layout"],
        json!({
            "title": "Revenue",
            "height": 400,
            "barmode": "group",
            "xaxis": {"title": "Month", "type": "date"}
        })
    );
    assert_eq!(decoded, figure);
}

#[test]
fn figure_without_traces_omits_data_and_decodes_empty() {
    let figure = Figure::default().with_layout(Layout::titled("nothing yet"));
    let (value, decoded) = round_trip(&figure);
    assert!(value.get("data").is_none());
    assert!(decoded.data.is_empty());
}

#[test]
fn null_fields_from_the_service_decode_as_unset() {
    let figure = Figure::from_json_str(
        r#"{
            "data": [{
                "type": "scatter",
                "x": null,
                "name": null,
                "marker": {"color": null, "size": [1, 2], "colorscale": null}
            }],
            "layout": {"title": null}
        }"#,
    )
    .expect("decode");

    let trace = &figure.data[0];
    assert_eq!(trace.x, None);
    assert_eq!(trace.name, None);
    let marker = trace.marker.as_ref().expect("marker");
    assert_eq!(marker.color, None);
    assert_eq!(marker.size, Some(FloatOrList::list([1.0, 2.0])));
    assert_eq!(marker.colorscale, None);
    assert_eq!(figure.layout.title, None);
}

#[test]
fn null_top_level_fields_decode_as_defaults() {
    let figure = Figure::from_json_str(r#"{"data": null, "layout": null}"#).expect("decode");
    assert_eq!(figure, Figure::default());

    let figure = Figure::from_json_str(r#"{"data": [{"type": null, "y": [1]}]}"#).expect("decode");
    assert_eq!(figure.data[0].trace_type, TraceType::Scatter);
    assert_eq!(figure.data[0].y, Some(TypedArray::integers([1])));
}

#[test]
fn non_finite_values_fail_to_encode_instead_of_becoming_null() {
    let marker_cases = [
        Marker {
            opacity: Some(f64::NAN),
            ..Marker::default()
        },
        Marker::default().with_size(FloatOrList::Scalar(f64::INFINITY)),
        Marker::default().with_colorscale(ColorScale::custom([ColorStop::new(f64::NAN, "red")])),
    ];
    for marker in marker_cases {
        let figure = Figure::new(vec![Trace::scatter().with_marker(marker)]);
        let err = figure.to_json_string().expect_err("non-finite marker");
        assert!(matches!(err, PlotlyError::Encode { .. }), "{err}");
    }

    let figure = Figure::new(vec![
        Trace::scatter().with_y(TypedArray::floats([1.0, f64::NEG_INFINITY])),
    ]);
    assert!(matches!(
        figure.to_json_string(),
        Err(PlotlyError::Encode { .. })
    ));

    let figure = Figure::new(vec![Trace::scatter().with_error_y(ErrorBar::percent(f64::NAN))]);
    assert!(figure.to_json_pretty().is_err());
}
