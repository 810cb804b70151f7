use widepath_core::{SolveSummary, WidepathBuilder};

/// Runs the default pipeline over `input` and returns the summary and the
/// rendered table.
pub fn solve_str(input: &str) -> (SolveSummary, String) {
    let widepath = WidepathBuilder::new()
        .build()
        .expect("default configuration is valid");
    let mut output = Vec::new();
    let summary = widepath
        .run(input.as_bytes(), &mut output)
        .expect("pipeline must succeed");
    (
        summary,
        String::from_utf8(output).expect("table output is ASCII"),
    )
}
