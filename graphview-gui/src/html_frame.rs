use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use graphview_core::RenderTarget;

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Embedded viewing surface backed by an HTTP fetch. The artifact body is
/// retrieved on a background thread; results arrive over a channel tagged
/// with the generation that started them, so a fetch superseded by a newer
/// search or a clear can never overwrite current state.
pub struct HtmlFrame {
    uri: Option<String>,
    document: Option<String>,
    fetch_error: Option<String>,
    generation: u64,
    fetch_rx: Option<Receiver<(u64, Result<String, String>)>>,
}

impl HtmlFrame {
    pub fn new() -> Self {
        Self {
            uri: None,
            document: None,
            fetch_error: None,
            generation: 0,
            fetch_rx: None,
        }
    }

    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    /// Non-blocking poll for the background fetch; call once per frame.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = &self.fetch_rx else {
            return;
        };
        let Ok((generation, result)) = rx.try_recv() else {
            return;
        };
        self.fetch_rx = None;
        if generation != self.generation {
            return;
        }
        match result {
            Ok(body) => {
                self.document = Some(body);
                self.fetch_error = None;
            }
            Err(err) => {
                log::warn!("graph fetch failed: {err}");
                self.fetch_error = Some(err);
            }
        }
    }

    fn start_fetch(&mut self) {
        let Some(uri) = self.uri.clone() else {
            return;
        };
        self.generation += 1;
        let generation = self.generation;
        self.document = None;
        self.fetch_error = None;
        let (tx, rx) = mpsc::channel();
        self.fetch_rx = Some(rx);
        std::thread::spawn(move || {
            let result = ureq::get(&uri)
                .timeout(FETCH_TIMEOUT)
                .call()
                .map_err(|err| format!("Failed to fetch graph: {err}"))
                .and_then(|response| {
                    response
                        .into_string()
                        .map_err(|err| format!("Failed to read graph: {err}"))
                });
            let _ = tx.send((generation, result));
        });
    }
}

impl Default for HtmlFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderTarget for HtmlFrame {
    fn load(&mut self, uri: &str) {
        self.uri = Some(uri.to_string());
        self.start_fetch();
    }

    fn is_ready(&self) -> bool {
        self.document.as_deref().is_some_and(has_header_marker)
    }

    fn content_size(&self) -> Option<u64> {
        self.document.as_ref().map(|doc| doc.len() as u64)
    }

    fn clear(&mut self) {
        self.document = None;
        self.fetch_error = None;
        self.fetch_rx = None;
        // In-flight sends now carry a stale generation.
        self.generation += 1;
    }

    fn force_reload(&mut self) {
        // load() already fetches fresh content; refetch only when nothing
        // from this search is still in flight.
        if self.fetch_rx.is_some() {
            return;
        }
        self.start_fetch();
    }
}

/// Readiness marker: a `<head>` element with non-empty content. This is an
/// external contract with the rendering service's output format.
fn has_header_marker(document: &str) -> bool {
    let lower = document.to_ascii_lowercase();
    let Some(start) = lower.find("<head") else {
        return false;
    };
    let Some(open_end) = lower[start..].find('>') else {
        return false;
    };
    let content_start = start + open_end + 1;
    let Some(len) = lower[content_start..].find("</head>") else {
        return false;
    };
    !document[content_start..content_start + len].trim().is_empty()
}
