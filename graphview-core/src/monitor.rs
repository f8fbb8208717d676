use crate::diagnostics::Diagnostics;

/// Artifact sizes above this are worth a warning before the surface tries
/// to render them.
pub const LARGE_GRAPH_BYTES: u64 = 1_000_000;

/// Runs exactly once per load, immediately after the detector reports
/// readiness. Emits at most one warning; an oversized artifact is still a
/// successful load.
pub fn check_graph_size(content_bytes: u64) -> Diagnostics {
    let mut diagnostics = Diagnostics::default();
    if content_bytes > LARGE_GRAPH_BYTES {
        diagnostics.warnings.push(format!(
            "Graph HTML is {content_bytes} bytes and may render slowly. \
             Consider a smaller graph width."
        ));
    }
    diagnostics
}
