//! Scroll-target math.
//!
//! The presenter measures geometry; the math that turns measurements into
//! scroll offsets lives here so it can be tested without a UI environment.
//! All tops are viewport-relative, the way element bounding rects report
//! them.

/// Geometry snapshot taken from the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LayoutSnapshot {
    /// Height of the fixed header region.
    pub header_height: i64,
    /// Current vertical scroll position of the page.
    pub page_offset: i64,
    /// Viewport-relative top of the capture/preview area.
    pub capture_top: i64,
    /// Viewport-relative top of the capture trigger control.
    pub trigger_top: i64,
    /// Viewport-relative top of the result section.
    pub result_top: i64,
}

/// Absolute scroll offset that puts an element just below the fixed header.
pub fn anchor_offset(viewport_top: i64, page_offset: i64, header_height: i64) -> i64 {
    viewport_top + page_offset - header_height
}

/// Scroll target after revealing the result: whichever of the trigger
/// control and the result section sits higher up, so both re-recording and
/// the new outcome stay reachable without manual scrolling.
pub fn result_scroll_target(snapshot: &LayoutSnapshot) -> i64 {
    let trigger = anchor_offset(
        snapshot.trigger_top,
        snapshot.page_offset,
        snapshot.header_height,
    );
    let result = anchor_offset(
        snapshot.result_top,
        snapshot.page_offset,
        snapshot.header_height,
    );
    trigger.min(result)
}

/// Scroll target that brings the capture area just below the fixed header,
/// used when the share code expires.
pub fn capture_scroll_target(snapshot: &LayoutSnapshot) -> i64 {
    anchor_offset(
        snapshot.capture_top,
        snapshot.page_offset,
        snapshot.header_height,
    )
}

/// True when the capture area has scrolled up underneath the fixed header,
/// in which case the trigger press first resets the view to the top.
pub fn capture_hidden_behind_header(snapshot: &LayoutSnapshot) -> bool {
    snapshot.capture_top < snapshot.header_height
}
