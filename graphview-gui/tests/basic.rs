#[test]
fn viewer_config_defaults() {
    let config = graphview_gui::ViewerConfig::default();
    assert_eq!(config.title, "Graph Viewer");
    assert_eq!(config.width, 1100.0);
    assert_eq!(config.height, 720.0);
}

#[test]
fn html_frame_implements_the_render_target_boundary() {
    use graphview_core::RenderTarget;

    let mut frame = graphview_gui::HtmlFrame::new();
    assert!(!frame.is_ready());
    assert!(frame.content_size().is_none());

    // Clearing an empty frame is a no-op, not an error.
    frame.clear();
    assert!(!frame.is_ready());
}
