use std::sync::mpsc::Sender;
use std::time::Instant;

use crate::detector::{LoadDetector, LoadPhase};
use crate::diagnostics::Diagnostics;
use crate::monitor::check_graph_size;
use crate::params::{GraphParams, GraphParamsUpdate};
use crate::request::{build_graph_uri, NavigationEvent, RenderEndpoint, RequestIdentity};
use crate::target::RenderTarget;

/// Outbound notifications to the surrounding application. Write-only; no
/// response is expected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewerMessage {
    ActiveTool(String),
}

/// Top-level orchestration for one viewer panel. Sole owner and mutator of
/// the parameter set, request identity, diagnostics and load state.
pub struct SearchController<T: RenderTarget> {
    params: GraphParams,
    identity: RequestIdentity,
    endpoint: RenderEndpoint,
    diagnostics: Diagnostics,
    detector: LoadDetector,
    target: T,
    loading_graph_html: bool,
}

impl<T: RenderTarget> SearchController<T> {
    /// Announces the active tool exactly once, at construction.
    pub fn new(endpoint: RenderEndpoint, target: T, messages: &Sender<ViewerMessage>) -> Self {
        let identity = RequestIdentity::default();
        let _ = messages.send(ViewerMessage::ActiveTool(identity.tag.clone()));
        Self {
            params: GraphParams::default(),
            identity,
            endpoint,
            diagnostics: Diagnostics::default(),
            detector: LoadDetector::new(),
            target,
            loading_graph_html: false,
        }
    }

    /// External navigation: identity fields fall back to prior state, the
    /// parameter set is replaced wholesale with fresh defaults seeded from
    /// the event, then a search runs.
    pub fn navigate(&mut self, event: NavigationEvent, now: Instant) {
        if let Some(run) = event.run {
            self.identity.run = run;
        }
        if let Some(tag) = event.tag {
            self.identity.tag = tag;
        }
        if let Some(host) = event.host {
            self.identity.host = host;
        }
        let mut params = GraphParams {
            selected_module: self.identity.host.clone(),
            ..GraphParams::default()
        };
        if let Some(op_name) = event.params_op_name {
            params.op_name = op_name;
        }
        self.params = params;
        self.search(now, false);
    }

    /// User-submitted partial change: allowlisted merge, then a search that
    /// also forces the target to re-fetch.
    pub fn submit(&mut self, update: GraphParamsUpdate, now: Instant) {
        self.params.apply(update);
        self.search(now, true);
    }

    fn search(&mut self, now: Instant, user_initiated: bool) {
        self.reset_page();
        if !self.params.valid_to_plot() {
            self.detector.cancel();
            self.loading_graph_html = false;
            log::debug!("graph search skipped: module or op name not set");
            return;
        }
        let uri = build_graph_uri(&self.endpoint, &self.identity, &self.params);
        log::info!("requesting graph artifact: {uri}");
        self.target.load(&uri);
        self.loading_graph_html = true;
        self.detector.arm(now);
        if user_initiated {
            self.target.force_reload();
        }
    }

    fn reset_page(&mut self) {
        self.target.clear();
        self.diagnostics.reset();
    }

    /// Drives the detector while a load is in flight. On completion the
    /// size check runs once and its diagnostics are merged in.
    pub fn tick(&mut self, now: Instant) {
        if !self.loading_graph_html {
            return;
        }
        if let Some(done) = self.detector.poll(&self.target, now) {
            self.loading_graph_html = false;
            log::debug!("graph artifact loaded: {} bytes", done.content_bytes);
            self.diagnostics.merge(check_graph_size(done.content_bytes));
        }
    }

    pub fn params(&self) -> &GraphParams {
        &self.params
    }

    pub fn identity(&self) -> &RequestIdentity {
        &self.identity
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn loading_graph_html(&self) -> bool {
        self.loading_graph_html
    }

    pub fn phase(&self) -> LoadPhase {
        self.detector.phase()
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }
}
