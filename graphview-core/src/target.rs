/// Capabilities the embedded viewing surface must expose so the polling and
/// sizing logic stays independent of any concrete host element.
pub trait RenderTarget {
    /// Points the surface at a new artifact URI and begins loading it.
    fn load(&mut self, uri: &str);

    /// Whether the structural marker of a finished artifact is present.
    /// A missing or still-arriving document reads as not ready.
    fn is_ready(&self) -> bool;

    /// Byte size of the loaded content, if any has arrived.
    fn content_size(&self) -> Option<u64>;

    /// Discards previously loaded content.
    fn clear(&mut self);

    /// Re-fetches the current URI from scratch. Changing the URI alone does
    /// not guarantee a fresh load of dynamically injected content.
    fn force_reload(&mut self);
}
