use serde::{Deserialize, Serialize};

pub const DEFAULT_GRAPH_WIDTH: u32 = 3;

/// Display configuration for the requested graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphParams {
    pub selected_module: String,
    pub op_name: String,
    pub graph_width: u32,
    pub show_metadata: bool,
    pub merge_fusion: bool,
}

impl Default for GraphParams {
    fn default() -> Self {
        Self {
            selected_module: String::new(),
            op_name: String::new(),
            graph_width: DEFAULT_GRAPH_WIDTH,
            show_metadata: false,
            merge_fusion: false,
        }
    }
}

/// Partially-specified parameter change. The accepted field set is fixed by
/// the type; unknown keys in external JSON payloads are dropped during
/// deserialization without error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GraphParamsUpdate {
    pub selected_module: Option<String>,
    pub op_name: Option<String>,
    pub graph_width: Option<u32>,
    pub show_metadata: Option<bool>,
    pub merge_fusion: Option<bool>,
}

impl GraphParams {
    /// Applies every field the update carries; everything else is untouched.
    pub fn apply(&mut self, update: GraphParamsUpdate) {
        if let Some(selected_module) = update.selected_module {
            self.selected_module = selected_module;
        }
        if let Some(op_name) = update.op_name {
            self.op_name = op_name;
        }
        if let Some(graph_width) = update.graph_width {
            self.graph_width = graph_width;
        }
        if let Some(show_metadata) = update.show_metadata {
            self.show_metadata = show_metadata;
        }
        if let Some(merge_fusion) = update.merge_fusion {
            self.merge_fusion = merge_fusion;
        }
    }

    /// The single gate before any request is issued. Width and flags are
    /// passed through uninterpreted.
    pub fn valid_to_plot(&self) -> bool {
        !self.op_name.is_empty() && !self.selected_module.is_empty()
    }
}
