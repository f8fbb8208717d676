//! Client-side orchestration for the graph artifact viewer: parameter
//! management, request construction, load detection and diagnostics.
//! Rendering of the artifact itself is out of scope; the embedded surface
//! is abstracted behind [`RenderTarget`].

pub mod controller;
pub mod detector;
pub mod diagnostics;
pub mod monitor;
pub mod params;
pub mod request;
pub mod target;

pub use controller::{SearchController, ViewerMessage};
pub use detector::{LoadComplete, LoadDetector, LoadPhase, POLL_INTERVAL};
pub use diagnostics::Diagnostics;
pub use monitor::{check_graph_size, LARGE_GRAPH_BYTES};
pub use params::{GraphParams, GraphParamsUpdate, DEFAULT_GRAPH_WIDTH};
pub use request::{
    build_graph_uri, NavigationEvent, RenderEndpoint, RequestError, RequestIdentity,
    GRAPH_VIEWER_TAG,
};
pub use target::RenderTarget;
