use serde::{Deserialize, Serialize};
use url::Url;

use crate::params::GraphParams;

/// Tag announced as the active tool and used when navigation carries none.
pub const GRAPH_VIEWER_TAG: &str = "graph_viewer";

/// Inbound navigation parameters. `host` is interpreted as the module
/// identifier; absent values fall back to prior state or fixed defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationEvent {
    pub run: Option<String>,
    pub tag: Option<String>,
    pub host: Option<String>,
    pub params_op_name: Option<String>,
}

/// Identifies which profiling session and artifact store to query, as
/// opposed to what to display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestIdentity {
    pub run: String,
    pub tag: String,
    pub host: String,
}

impl Default for RequestIdentity {
    fn default() -> Self {
        Self {
            run: String::new(),
            tag: GRAPH_VIEWER_TAG.to_string(),
            host: String::new(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum RequestError {
    #[error("invalid render endpoint: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Base URL of the rendering service's data endpoint.
#[derive(Debug, Clone)]
pub struct RenderEndpoint {
    base: Url,
}

impl RenderEndpoint {
    pub fn parse(raw: &str) -> Result<Self, RequestError> {
        Ok(Self {
            base: Url::parse(raw)?,
        })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }
}

/// Builds the request URI for a pre-rendered graph artifact. Pure; callers
/// are responsible for the `valid_to_plot` guard.
pub fn build_graph_uri(
    endpoint: &RenderEndpoint,
    identity: &RequestIdentity,
    params: &GraphParams,
) -> String {
    let mut url = endpoint.base.clone();
    {
        let mut pairs = url.query_pairs_mut();
        pairs.clear();
        pairs.append_pair("run", &identity.run);
        pairs.append_pair("tag", &identity.tag);
        pairs.append_pair("host", &identity.host);
        pairs.append_pair("node_name", &params.op_name);
        pairs.append_pair("module_name", &params.selected_module);
        pairs.append_pair("graph_width", &params.graph_width.to_string());
        pairs.append_pair("show_metadata", &params.show_metadata.to_string());
        pairs.append_pair("merge_fusion", &params.merge_fusion.to_string());
        pairs.append_pair("format", "html");
        pairs.append_pair("type", "graph");
    }
    url.into()
}
