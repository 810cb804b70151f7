use std::io;

use rstest::rstest;
use widepath_core::{
    DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, MstError,
    SerializeError, SerializeErrorCode, WidepathError, WidepathErrorCode,
};

#[rstest]
#[case(GraphError::NodeCountTooLarge { node_count: u64::MAX }, GraphErrorCode::NodeCountTooLarge)]
#[case(
    GraphError::InvalidNodeId { edge_index: 0, node: 9, node_count: 2 },
    GraphErrorCode::InvalidNodeId,
)]
#[case(GraphError::WeightOutOfRange { edge_index: 1, weight: 1 << 40 }, GraphErrorCode::WeightOutOfRange)]
#[case(GraphError::NegativeWeight { weight: -1 }, GraphErrorCode::NegativeWeight)]
#[case(GraphError::from(io::Error::from(io::ErrorKind::UnexpectedEof)), GraphErrorCode::Read)]
fn returns_expected_graph_code(#[case] error: GraphError, #[case] expected: GraphErrorCode) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.code().to_string(), expected.as_str());
}

#[rstest]
#[case(DisjointSetError::OutOfRange { node: 4, len: 2 }, DisjointSetErrorCode::OutOfRange)]
#[case(DisjointSetError::NotRepresentative { node: 1 }, DisjointSetErrorCode::NotRepresentative)]
fn returns_expected_disjoint_set_code(
    #[case] error: DisjointSetError,
    #[case] expected: DisjointSetErrorCode,
) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case(SerializeError::OutputTooLarge { node_count: usize::MAX }, SerializeErrorCode::OutputTooLarge)]
#[case(SerializeError::ShortWrite { written: 1, expected: 2 }, SerializeErrorCode::ShortWrite)]
#[case(
    SerializeError::Io { source: io::Error::from(io::ErrorKind::BrokenPipe) },
    SerializeErrorCode::Io,
)]
fn returns_expected_serialize_code(
    #[case] error: SerializeError,
    #[case] expected: SerializeErrorCode,
) {
    assert_eq!(error.code(), expected);
}

#[rstest]
#[case(WidepathError::InvalidReadBufferSize { got: 0 }, WidepathErrorCode::InvalidReadBufferSize, None)]
#[case(
    WidepathError::from(GraphError::NegativeWeight { weight: -2 }),
    WidepathErrorCode::Graph,
    Some("GRAPH_NEGATIVE_WEIGHT"),
)]
#[case(
    WidepathError::from(MstError::from(DisjointSetError::OutOfRange { node: 3, len: 3 })),
    WidepathErrorCode::Mst,
    Some("MST_DISJOINT_SET"),
)]
#[case(
    WidepathError::from(SerializeError::ShortWrite { written: 0, expected: 4 }),
    WidepathErrorCode::Serialize,
    Some("SERIALIZE_SHORT_WRITE"),
)]
#[case(
    WidepathError::Io { document: "graphviz document", source: io::Error::from(io::ErrorKind::BrokenPipe) },
    WidepathErrorCode::Io,
    None,
)]
fn returns_expected_widepath_code(
    #[case] error: WidepathError,
    #[case] expected: WidepathErrorCode,
    #[case] stage: Option<&str>,
) {
    assert_eq!(error.code(), expected);
    assert_eq!(error.stage_code(), stage);
}

#[rstest]
fn display_messages_name_the_offending_values() {
    let err = GraphError::InvalidNodeId {
        edge_index: 4,
        node: 12,
        node_count: 10,
    };
    assert_eq!(
        err.to_string(),
        "edge 4 references node 12, but node_count is 10"
    );
    let err = SerializeError::ShortWrite {
        written: 3,
        expected: 8,
    };
    assert_eq!(err.to_string(), "short write: sink accepted 3 of 8 bytes");
}
