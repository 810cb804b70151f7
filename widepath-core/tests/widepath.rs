//! Tests for the `Widepath` orchestration API.

mod common;

use common::solve_str;
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use widepath_core::{UNREACHABLE, WidepathBuilder, WidepathError};

use widepath_test_support::tracing::RecordingLayer;

#[rstest]
#[case::triangle("3 3\n0 1 5\n1 2 3\n0 2 1\n", "0 5 3\n5 0 3\n3 3 0\n")]
#[case::single_edge("2 1\n0 1 7\n", "0 7\n7 0\n")]
#[case::single_line_input("2 1 0 1 7", "0 7\n7 0\n")]
#[case::parallel_edges("2 3\n0 1 1\n1 0 9\n0 1 4\n", "0 9\n9 0\n")]
#[case::self_loop_only("1 1\n0 0 5\n", "0\n")]
#[case::empty("0 0\n", "")]
fn scenarios_render_expected_tables(#[case] input: &str, #[case] expected: &str) {
    let (_, output) = solve_str(input);
    assert_eq!(output, expected);
}

#[rstest]
fn disconnected_graph_uses_the_unreachable_sentinel() {
    let (summary, output) = solve_str("4 1\n0 1 2\n");
    assert_eq!(
        output,
        "0 2 -1 -1\n2 0 -1 -1\n-1 -1 0 -1\n-1 -1 -1 0\n"
    );
    assert_eq!(UNREACHABLE, -1);
    assert_eq!(summary.component_count(), 3);
    assert_eq!(summary.tree_edge_count(), 1);
}

#[rstest]
fn identical_input_produces_identical_bytes() {
    let input = "6 9\n0 1 4\n1 2 4\n2 3 4\n3 4 4\n4 5 4\n5 0 4\n0 3 4\n1 4 4\n2 5 4\n";
    let (first_summary, first) = solve_str(input);
    let (second_summary, second) = solve_str(input);
    assert_eq!(first, second);
    assert_eq!(first_summary, second_summary);
}

#[rstest]
fn widest_path_beats_a_direct_narrow_edge() {
    // 0-3 directly is narrow; 0-1-2-3 has bottleneck 6.
    let (_, output) = solve_str("4 4\n0 3 1\n0 1 8\n1 2 6\n2 3 7\n");
    let first_row = output.lines().next().expect("row 0");
    assert_eq!(first_row, "0 8 6 6");
}

#[rstest]
fn crlf_input_stops_at_the_first_carriage_return() {
    let (summary, output) = solve_str("2 18446744073709551615\r\n0 1 5\r\n");
    assert_eq!(summary.edge_count(), 0);
    assert_eq!(output, "0 -1\n-1 0\n");
}

#[cfg(target_pointer_width = "64")]
#[rstest]
fn untabulatable_node_count_fails_without_aborting() {
    let widepath = WidepathBuilder::new().build().expect("defaults valid");
    let err = widepath
        .run(&b"1000000000 0\n"[..], Vec::new())
        .expect_err("a 4 EB table cannot be allocated");
    assert!(matches!(err, WidepathError::Table(_)));
    assert_eq!(err.stage_code(), Some("TABLE_ALLOCATION_FAILED"));
}

#[rstest]
fn out_of_range_node_ids_are_rejected() {
    let widepath = WidepathBuilder::new().build().expect("defaults valid");
    let err = widepath
        .run(&b"3 1\n0 3 1\n"[..], Vec::new())
        .expect_err("id 3 is out of range");
    assert!(matches!(err, WidepathError::Graph(_)));
    assert_eq!(err.stage_code(), Some("GRAPH_INVALID_NODE_ID"));
}

#[rstest]
fn run_records_stage_spans_in_order() {
    let widepath = WidepathBuilder::new()
        .with_read_buffer_size(16)
        .build()
        .expect("configuration must be valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let mut output = Vec::new();
    let summary = tracing::subscriber::with_default(subscriber, || {
        widepath.run(&b"3 3\n0 1 5\n1 2 3\n0 2 1\n"[..], &mut output)
    })
    .expect("run must succeed");

    assert_eq!(
        layer.span_names(),
        vec![
            "core.read_graph",
            "core.mst",
            "core.bottlenecks",
            "core.serialize",
            "core.run",
        ]
    );
    let read_span = layer.span("core.read_graph").expect("read span recorded");
    assert_eq!(read_span.field("read_buffer_size"), Some("16"));
    assert_eq!(read_span.field("nodes"), Some("3"));
    assert_eq!(read_span.field("edges"), Some("3"));
    let serialize_span = layer.span("core.serialize").expect("serialize span recorded");
    assert_eq!(
        serialize_span.field("bytes"),
        Some(summary.bytes_written().to_string().as_str())
    );
    assert!(layer.events_at(Level::WARN).is_empty());
}

#[rstest]
fn disconnected_graph_logs_a_warning() {
    let widepath = WidepathBuilder::new().build().expect("defaults valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || widepath.run(&b"3 0\n"[..], Vec::new()))
        .expect("run must succeed");

    let warnings = layer.events_at(Level::WARN);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].field("components"), Some("3"));
}

#[rstest]
fn failing_run_marks_the_span_with_an_error_event() {
    let widepath = WidepathBuilder::new().build().expect("defaults valid");
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let result = tracing::subscriber::with_default(subscriber, || {
        widepath.run(&b"2 1\n0 1 4294967296\n"[..], Vec::new())
    });
    let err = result.expect_err("weight overflow must fail");
    assert_eq!(err.stage_code(), Some("GRAPH_WEIGHT_OUT_OF_RANGE"));
    assert!(
        layer
            .events_at(Level::ERROR)
            .iter()
            .any(|event| event.field("error").is_some())
    );
}
