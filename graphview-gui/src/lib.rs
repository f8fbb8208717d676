use eframe::egui;
use std::sync::mpsc::{self, Receiver};
use std::time::{Duration, Instant};

use graphview_core::{
    NavigationEvent, RenderEndpoint, RenderTarget, SearchController, ViewerMessage,
};

mod html_frame;
mod notification_handler;
mod ui;
mod ui_state;

pub use html_frame::HtmlFrame;
use notification_handler::NotificationHandler;
use ui_state::SearchDraft;

const NOTIFICATION_MAX_AGE_SECS: f32 = 6.0;

#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "Graph Viewer".to_string(),
            width: 1100.0,
            height: 720.0,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ViewerError {
    #[error("viewer error: {0}")]
    Viewer(String),
}

/// Runs the viewer panel until the window is closed. Navigation events sent
/// on `navigation_rx` are drained once per frame; dropping the sender ends
/// the feed without affecting an in-flight load.
pub fn run_viewer(
    config: ViewerConfig,
    endpoint: RenderEndpoint,
    navigation_rx: Receiver<NavigationEvent>,
) -> Result<(), ViewerError> {
    let mut options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([config.width, config.height]),
        ..Default::default()
    };
    // NOTE: Vsync generates hangs and lag on occluded windows.
    options.vsync = false;

    eframe::run_native(
        &config.title,
        options,
        Box::new(move |_cc| Box::new(ViewerApp::new(endpoint, navigation_rx))),
    )
    .map_err(|err| ViewerError::Viewer(err.to_string()))
}

struct ViewerApp {
    controller: SearchController<HtmlFrame>,
    navigation_rx: Receiver<NavigationEvent>,
    messages_rx: Receiver<ViewerMessage>,
    notification_handler: NotificationHandler,
    draft: SearchDraft,
    active_tool: String,
    reported_fetch_error: Option<String>,
}

impl ViewerApp {
    fn new(endpoint: RenderEndpoint, navigation_rx: Receiver<NavigationEvent>) -> Self {
        let (messages_tx, messages_rx) = mpsc::channel();
        let controller = SearchController::new(endpoint, HtmlFrame::new(), &messages_tx);
        Self {
            controller,
            navigation_rx,
            messages_rx,
            notification_handler: NotificationHandler::new(),
            draft: SearchDraft::default(),
            active_tool: String::new(),
            reported_fetch_error: None,
        }
    }

    fn poll_navigation(&mut self, now: Instant) {
        let mut navigated = false;
        while let Ok(event) = self.navigation_rx.try_recv() {
            self.controller.navigate(event, now);
            navigated = true;
        }
        if navigated {
            self.draft = SearchDraft::from_params(self.controller.params());
        }
    }

    fn poll_messages(&mut self) {
        while let Ok(message) = self.messages_rx.try_recv() {
            match message {
                ViewerMessage::ActiveTool(tag) => self.active_tool = tag,
            }
        }
    }

    fn on_load_complete(&mut self) {
        let size = self.controller.target().content_size().unwrap_or(0);
        self.notification_handler
            .show_info("Graph", &format!("Graph loaded ({size} bytes)"));
        let warnings: Vec<String> = self.controller.diagnostics().warnings.clone();
        for warning in warnings {
            self.notification_handler.show_warning("Graph", &warning);
        }
    }

    fn report_fetch_errors(&mut self) {
        let current = self
            .controller
            .target()
            .fetch_error()
            .map(|err| err.to_string());
        if current.is_some() && current != self.reported_fetch_error {
            if let Some(err) = &current {
                self.notification_handler.show_warning("Graph", err);
            }
        }
        self.reported_fetch_error = current;
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        self.poll_navigation(now);
        self.poll_messages();
        self.controller.target_mut().poll_fetch();

        let was_loading = self.controller.loading_graph_html();
        self.controller.tick(now);
        if was_loading && !self.controller.loading_graph_html() {
            self.on_load_complete();
        }
        self.report_fetch_errors();
        self.notification_handler
            .cleanup_old_notifications(NOTIFICATION_MAX_AGE_SECS);

        self.render_side_panel(ctx);
        self.render_central_panel(ctx);
        self.render_notifications(ctx);

        // Keep ticking while a load is in flight even without input events.
        if self.controller.loading_graph_html() {
            ctx.request_repaint_after(Duration::from_millis(250));
        }
    }
}
