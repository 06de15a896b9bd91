//! Terminal presentation surface. Every state change the session pushes
//! becomes one tagged line on stdout; geometry is flat, so no scrolling
//! ever fires.

use totem_core::layout::LayoutSnapshot;
use totem_core::services::{CodeRenderer, GalleryItem, Presenter, StreamHandle, TriggerState};
use totem_core::types::{ClipLocator, CodeSpec};

/// Prints the share code parameters; a kiosk build would draw a scannable
/// image here.
pub struct TermCodeRenderer;

impl CodeRenderer for TermCodeRenderer {
    fn render(&mut self, spec: &CodeSpec) {
        println!(
            "[code] {} ({}x{}, {} on {}, level {})",
            spec.payload,
            spec.width,
            spec.height,
            spec.dark_color,
            spec.light_color,
            spec.correction
        );
    }

    fn clear(&mut self) {
        println!("[code] cleared");
    }
}

#[derive(Default)]
pub struct TermPresenter;

impl TermPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Presenter for TermPresenter {
    fn bind_preview(&mut self, stream: &StreamHandle) {
        println!("[preview] live on stream {}", stream.id());
    }

    fn show_notice(&mut self, message: &str) {
        println!("[notice] {message}");
    }

    fn show_wall_clock(&mut self, text: &str) {
        println!("[clock] {text}");
    }

    fn show_countdown(&mut self, remaining: u32) {
        println!("[countdown] {remaining}");
    }

    fn hide_countdown(&mut self) {
        println!("[countdown] done");
    }

    fn set_trigger(&mut self, state: TriggerState) {
        let label = match state {
            TriggerState::Ready => "ready",
            TriggerState::Disabled => "disabled",
            TriggerState::Recording => "recording",
        };
        println!("[trigger] {label}");
    }

    fn show_elapsed(&mut self, text: &str) {
        println!("[elapsed] {text}");
    }

    fn hide_elapsed(&mut self) {
        println!("[elapsed] hidden");
    }

    fn set_loading(&mut self, visible: bool) {
        println!("[loading] {}", if visible { "on" } else { "off" });
    }

    fn reveal_result(&mut self) {
        println!("[result] revealed");
    }

    fn render_gallery(&mut self, items: &[GalleryItem]) {
        println!("[gallery] {} item(s)", items.len());
        for (index, item) in items.iter().enumerate() {
            let marker = if item.available { "ok" } else { "stale" };
            println!(
                "[gallery]   {index}: {} at {} ({marker})",
                item.locator, item.timestamp
            );
        }
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        // Scripted runs auto-accept.
        println!("[confirm] {prompt} -> yes");
        true
    }

    fn open_clip(&mut self, locator: &ClipLocator) {
        println!("[open] {locator}");
    }

    fn show_share_panel(&mut self) {
        println!("[share] panel visible");
    }

    fn show_share_remaining(&mut self, label: &str) {
        println!("[share] expires in {label}");
    }

    fn show_share_expired(&mut self) {
        println!("[share] expired");
    }

    fn layout(&self) -> LayoutSnapshot {
        LayoutSnapshot::default()
    }

    fn scroll_to(&mut self, offset: i64) {
        println!("[view] scroll to {offset}");
    }
}
