use std::sync::mpsc;
use std::time::Instant;

use graphview_core::{
    GraphParamsUpdate, LoadPhase, NavigationEvent, RenderEndpoint, RenderTarget, SearchController,
    ViewerMessage, POLL_INTERVAL,
};

/// Records every capability call and serves a canned document state.
#[derive(Default)]
struct RecordingTarget {
    loaded_uris: Vec<String>,
    clears: usize,
    reloads: usize,
    ready: bool,
    content_bytes: u64,
}

impl RenderTarget for RecordingTarget {
    fn load(&mut self, uri: &str) {
        self.loaded_uris.push(uri.to_string());
    }

    fn is_ready(&self) -> bool {
        self.ready
    }

    fn content_size(&self) -> Option<u64> {
        if self.ready {
            Some(self.content_bytes)
        } else {
            None
        }
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn force_reload(&mut self) {
        self.reloads += 1;
    }
}

fn controller() -> (
    SearchController<RecordingTarget>,
    mpsc::Receiver<ViewerMessage>,
) {
    let endpoint = RenderEndpoint::parse("http://localhost:6006/data/plugin/graph_viewer/data")
        .expect("endpoint");
    let (tx, rx) = mpsc::channel();
    let controller = SearchController::new(endpoint, RecordingTarget::default(), &tx);
    (controller, rx)
}

#[test]
fn announces_active_tool_exactly_once_at_construction() {
    let (_controller, rx) = controller();
    assert_eq!(
        rx.try_recv(),
        Ok(ViewerMessage::ActiveTool("graph_viewer".to_string()))
    );
    assert!(rx.try_recv().is_err());
}

#[test]
fn navigation_seeds_params_and_issues_a_request() {
    let (mut controller, _rx) = controller();
    controller.navigate(
        NavigationEvent {
            run: Some("r1".to_string()),
            tag: Some("t1".to_string()),
            host: Some("moduleA".to_string()),
            params_op_name: Some("opX".to_string()),
        },
        Instant::now(),
    );

    assert_eq!(controller.params().selected_module, "moduleA");
    assert_eq!(controller.params().op_name, "opX");
    assert_eq!(controller.params().graph_width, 3);
    assert!(!controller.params().show_metadata);
    assert!(!controller.params().merge_fusion);
    assert!(controller.loading_graph_html());

    let target = controller.target();
    assert_eq!(target.clears, 1);
    assert_eq!(target.reloads, 0);
    assert_eq!(target.loaded_uris.len(), 1);
    assert!(target.loaded_uris[0].contains(
        "run=r1&tag=t1&host=moduleA&node_name=opX&module_name=moduleA\
         &graph_width=3&show_metadata=false&merge_fusion=false&format=html&type=graph"
    ));
}

#[test]
fn navigation_replaces_params_wholesale_but_keeps_identity_fallbacks() {
    let (mut controller, _rx) = controller();
    let now = Instant::now();
    controller.navigate(
        NavigationEvent {
            run: Some("r1".to_string()),
            tag: None,
            host: Some("moduleA".to_string()),
            params_op_name: Some("opX".to_string()),
        },
        now,
    );
    controller.submit(
        GraphParamsUpdate {
            graph_width: Some(12),
            ..Default::default()
        },
        now,
    );
    assert_eq!(controller.params().graph_width, 12);

    // A later event without run or host keeps the prior identity; display
    // options drop back to defaults.
    controller.navigate(
        NavigationEvent {
            params_op_name: Some("opY".to_string()),
            ..Default::default()
        },
        now,
    );
    assert_eq!(controller.identity().run, "r1");
    assert_eq!(controller.identity().tag, "graph_viewer");
    assert_eq!(controller.identity().host, "moduleA");
    assert_eq!(controller.params().selected_module, "moduleA");
    assert_eq!(controller.params().op_name, "opY");
    assert_eq!(controller.params().graph_width, 3);
}

#[test]
fn invalid_params_skip_the_request_silently() {
    let (mut controller, _rx) = controller();
    controller.navigate(
        NavigationEvent {
            run: Some("r1".to_string()),
            ..Default::default()
        },
        Instant::now(),
    );

    assert!(!controller.loading_graph_html());
    assert_eq!(controller.phase(), LoadPhase::Idle);
    assert!(controller.diagnostics().is_empty());
    // The page is still reset before the gate.
    assert_eq!(controller.target().clears, 1);
    assert!(controller.target().loaded_uris.is_empty());
}

#[test]
fn user_search_merges_resets_and_forces_a_reload() {
    let (mut controller, _rx) = controller();
    let now = Instant::now();
    controller.target_mut().ready = true;
    controller.target_mut().content_bytes = 2_000_000;
    controller.navigate(
        NavigationEvent {
            run: Some("r1".to_string()),
            host: Some("moduleA".to_string()),
            params_op_name: Some("opX".to_string()),
            ..Default::default()
        },
        now,
    );
    controller.tick(now);
    assert!(!controller.loading_graph_html());
    assert_eq!(controller.diagnostics().warnings.len(), 1);

    let update: GraphParamsUpdate =
        serde_json::from_str(r#"{"graphWidth": 10, "unknownField": "x"}"#).expect("payload");
    controller.submit(update, now);

    assert_eq!(controller.params().graph_width, 10);
    assert_eq!(controller.params().op_name, "opX");
    // Diagnostics were reset for the new search.
    assert!(controller.diagnostics().is_empty());
    assert!(controller.loading_graph_html());
    assert_eq!(controller.target().reloads, 1);
    assert_eq!(controller.target().loaded_uris.len(), 2);
    assert!(controller.target().loaded_uris[1].contains("graph_width=10"));
}

#[test]
fn tick_polls_until_ready_then_runs_the_size_check_once() {
    let (mut controller, _rx) = controller();
    let start = Instant::now();
    controller.navigate(
        NavigationEvent {
            run: Some("r1".to_string()),
            host: Some("moduleA".to_string()),
            params_op_name: Some("opX".to_string()),
            ..Default::default()
        },
        start,
    );

    controller.tick(start);
    assert!(controller.loading_graph_html());
    assert_eq!(controller.phase(), LoadPhase::Polling);

    controller.target_mut().ready = true;
    controller.target_mut().content_bytes = 4096;
    let later = start + POLL_INTERVAL;
    controller.tick(later);

    assert!(!controller.loading_graph_html());
    assert_eq!(controller.phase(), LoadPhase::Loaded);
    // Within the threshold: no warning, and nothing else is appended.
    assert!(controller.diagnostics().is_empty());

    // Loaded is terminal; further ticks change nothing.
    controller.tick(later + POLL_INTERVAL);
    assert!(controller.diagnostics().is_empty());
}
