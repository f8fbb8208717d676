use graphview_core::{GraphParams, GraphParamsUpdate, DEFAULT_GRAPH_WIDTH};

/// Editable copy of the search controls; submitted as a typed partial so
/// the controller applies it through the same merge path as any other
/// update.
#[derive(Debug, Clone)]
pub(crate) struct SearchDraft {
    pub(crate) module: String,
    pub(crate) op_name: String,
    pub(crate) graph_width: u32,
    pub(crate) show_metadata: bool,
    pub(crate) merge_fusion: bool,
}

impl Default for SearchDraft {
    fn default() -> Self {
        Self {
            module: String::new(),
            op_name: String::new(),
            graph_width: DEFAULT_GRAPH_WIDTH,
            show_metadata: false,
            merge_fusion: false,
        }
    }
}

impl SearchDraft {
    pub(crate) fn from_params(params: &GraphParams) -> Self {
        Self {
            module: params.selected_module.clone(),
            op_name: params.op_name.clone(),
            graph_width: params.graph_width,
            show_metadata: params.show_metadata,
            merge_fusion: params.merge_fusion,
        }
    }

    pub(crate) fn to_update(&self) -> GraphParamsUpdate {
        GraphParamsUpdate {
            selected_module: Some(self.module.clone()),
            op_name: Some(self.op_name.clone()),
            graph_width: Some(self.graph_width),
            show_metadata: Some(self.show_metadata),
            merge_fusion: Some(self.merge_fusion),
        }
    }
}
