//! Session orchestration.
//!
//! One [`Booth`] owns everything a capture session touches: the stream
//! handle, the live encoder, the clip store, the gallery and the share
//! code. Control flow is an explicit state machine over [`Phase`] with
//! [`Event`]s as inputs; no state lives in which timers happen to be
//! running. The runtime feeds [`Event::Tick`] on a one-second cadence and
//! the booth multiplexes it to the wall clock, the countdown, the elapsed
//! counter and the share-code expiry.

use crate::clips::ClipStore;
use crate::clock;
use crate::countdown::{Countdown, CountdownStep};
use crate::gallery::Gallery;
use crate::layout;
use crate::recording::{RecordingSession, RecordingTick};
use crate::services::{
    CaptureDevice, CodeRenderer, DownloadSink, EncoderEvent, EncoderFactory, GalleryItem,
    MediaEncoder, Presenter, StreamHandle, TriggerState,
};
use crate::share::{ShareCode, ShareTick};
use crate::storage::KeyValueStore;
use crate::types::{BoothConfig, ClipRef, GalleryEntry};
use std::time::SystemTime;

/// External inputs to the session state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The user pressed the capture trigger.
    CaptureRequested,
    /// One second elapsed.
    Tick,
    /// The user stopped an active recording early.
    StopRequested,
    /// The user asked to wipe the gallery.
    ClearGalleryRequested,
    /// The user clicked a gallery item.
    GalleryItemOpened(usize),
}

/// Where the session is in its capture cycle. The share-code countdown runs
/// independently of the phase; a new cycle may begin while a code is live.
enum Phase {
    Idle,
    CountingDown(Countdown),
    Recording(RecordingSession),
    /// Encoder stop requested; waiting for its final events.
    Finalizing(RecordingSession),
}

/// What a phase tick decided, applied after the phase borrow ends.
enum PhaseStep {
    None,
    StartRecording,
    StopRecording,
}

/// The external collaborators, owned by the session for its lifetime.
pub struct Services {
    pub camera: Box<dyn CaptureDevice>,
    pub encoders: Box<dyn EncoderFactory>,
    pub codes: Box<dyn CodeRenderer>,
    pub downloads: Box<dyn DownloadSink>,
    pub presenter: Box<dyn Presenter>,
}

pub struct Booth {
    config: BoothConfig,
    services: Services,
    store: Box<dyn KeyValueStore>,
    clips: ClipStore,
    gallery: Gallery,
    phase: Phase,
    stream: Option<StreamHandle>,
    encoder: Option<Box<dyn MediaEncoder>>,
    share: Option<ShareCode>,
}

impl Booth {
    pub fn new(config: BoothConfig, services: Services, store: Box<dyn KeyValueStore>) -> Self {
        let gallery = Gallery::load(store.as_ref(), &config.gallery);
        Self {
            config,
            services,
            store,
            clips: ClipStore::new(),
            gallery,
            phase: Phase::Idle,
            stream: None,
            encoder: None,
            share: None,
        }
    }

    /// Startup: render the clock immediately so no one-second gap is
    /// visible, show the persisted gallery, then acquire the camera. A
    /// denied device leaves the session degraded but alive.
    pub fn start(&mut self, now: SystemTime) {
        self.services
            .presenter
            .show_wall_clock(&clock::wall_clock_text(now));
        self.render_gallery();

        let constraints = self.config.capture.constraints();
        match self.services.camera.request(&constraints) {
            Ok(stream) => {
                self.services.presenter.bind_preview(&stream);
                self.stream = Some(stream);
            }
            Err(err) => {
                tracing::warn!(error = %err, "capture device unavailable, recording disabled");
                self.services.presenter.show_notice(
                    "Could not access the camera. Please grant the required permissions.",
                );
                self.services.presenter.set_trigger(TriggerState::Disabled);
            }
        }
    }

    pub fn handle(&mut self, event: Event, now: SystemTime) {
        match event {
            Event::CaptureRequested => self.capture_requested(),
            Event::Tick => self.tick(now),
            Event::StopRequested => self.stop_recording(),
            Event::ClearGalleryRequested => self.clear_gallery(),
            Event::GalleryItemOpened(index) => self.open_gallery_item(index),
        }
        self.pump_encoder(now);
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn clips(&self) -> &ClipStore {
        &self.clips
    }
}

/// Capture cycle.
impl Booth {
    fn capture_requested(&mut self) {
        // The disabled trigger is the user-facing guard; the phase check
        // also keeps a bypassed disable from creating a second encoder.
        if !matches!(self.phase, Phase::Idle) {
            return;
        }
        if self.stream.is_none() {
            return;
        }

        let snapshot = self.services.presenter.layout();
        if layout::capture_hidden_behind_header(&snapshot) {
            self.services.presenter.scroll_to(0);
        }

        self.services.presenter.set_trigger(TriggerState::Disabled);
        let from = self.config.recording.countdown_from;
        self.services.presenter.show_countdown(from);
        self.phase = Phase::CountingDown(Countdown::start(from));
    }

    fn start_recording(&mut self) {
        let Some(stream) = self.stream else {
            self.phase = Phase::Idle;
            self.services.presenter.set_trigger(TriggerState::Ready);
            return;
        };

        let spec = self.config.recording.container_spec();
        let mut encoder = self.services.encoders.create(&stream, &spec);
        encoder.start();
        self.encoder = Some(encoder);

        self.services.presenter.set_trigger(TriggerState::Recording);
        self.services
            .presenter
            .show_elapsed(&clock::format_elapsed(0));
        self.phase = Phase::Recording(RecordingSession::begin());
    }

    /// Idempotent stop: the cleanup path runs whether or not the encoder
    /// was active.
    fn stop_recording(&mut self) {
        if let Some(encoder) = self.encoder.as_mut()
            && encoder.is_active()
        {
            encoder.stop();
        }

        self.services.presenter.hide_elapsed();
        self.services.presenter.set_trigger(TriggerState::Ready);

        if matches!(self.phase, Phase::Recording(_))
            && let Phase::Recording(session) = std::mem::replace(&mut self.phase, Phase::Idle)
        {
            self.phase = Phase::Finalizing(session);
        }
    }
}

/// Tick handling.
impl Booth {
    fn tick(&mut self, now: SystemTime) {
        self.services
            .presenter
            .show_wall_clock(&clock::wall_clock_text(now));

        let step = match &mut self.phase {
            Phase::CountingDown(countdown) => match countdown.tick() {
                CountdownStep::Display(remaining) => {
                    self.services.presenter.show_countdown(remaining);
                    PhaseStep::None
                }
                CountdownStep::Finished => {
                    self.services.presenter.hide_countdown();
                    PhaseStep::StartRecording
                }
            },
            Phase::Recording(session) => {
                let outcome = session.tick(self.config.recording.duration_secs);
                let elapsed = session.elapsed();
                self.services
                    .presenter
                    .show_elapsed(&clock::format_elapsed(elapsed));
                match outcome {
                    RecordingTick::Running => PhaseStep::None,
                    RecordingTick::ReachedCap => PhaseStep::StopRecording,
                }
            }
            Phase::Idle | Phase::Finalizing(_) => PhaseStep::None,
        };

        match step {
            PhaseStep::None => {}
            PhaseStep::StartRecording => self.start_recording(),
            PhaseStep::StopRecording => self.stop_recording(),
        }

        self.tick_share();
    }

    fn tick_share(&mut self) {
        let mut expired = false;
        if let Some(code) = self.share.as_mut() {
            match code.tick() {
                ShareTick::Remaining(_) => {
                    let label = code.label();
                    self.services.presenter.show_share_remaining(&label);
                }
                ShareTick::Expired => expired = true,
            }
        }
        if expired {
            self.expire_share();
        }
    }

    fn expire_share(&mut self) {
        let Some(code) = self.share.take() else {
            return;
        };

        self.services.codes.clear();
        self.services.presenter.show_share_expired();

        let snapshot = self.services.presenter.layout();
        self.services
            .presenter
            .scroll_to(layout::capture_scroll_target(&snapshot));

        self.clips.release(code.locator());
    }
}

/// Finalization fan-out.
impl Booth {
    fn pump_encoder(&mut self, now: SystemTime) {
        let events = match self.encoder.as_mut() {
            Some(encoder) => encoder.drain_events(),
            None => return,
        };

        for event in events {
            match event {
                EncoderEvent::DataAvailable(data) => {
                    if let Phase::Recording(session) | Phase::Finalizing(session) =
                        &mut self.phase
                    {
                        session.push_chunk(data);
                    }
                }
                EncoderEvent::Stopped => self.finalize(now),
            }
        }
    }

    fn finalize(&mut self, now: SystemTime) {
        let session = match std::mem::replace(&mut self.phase, Phase::Idle) {
            Phase::Finalizing(session) => session,
            other => {
                self.phase = other;
                return;
            }
        };
        self.encoder = None;

        self.services.presenter.set_loading(true);

        let created_at = clock::timestamp_ms(now);
        let clip = ClipRef {
            locator: self.clips.create(session.finish(), created_at),
            created_at,
        };

        self.trigger_download(&clip);
        self.store_in_gallery(&clip);
        self.generate_share_code(&clip);

        // The finalizer's own reference; the gallery and the share code
        // keep theirs.
        self.clips.release(&clip.locator);

        self.services.presenter.reveal_result();
        let snapshot = self.services.presenter.layout();
        self.services
            .presenter
            .scroll_to(layout::result_scroll_target(&snapshot));

        self.services.presenter.set_loading(false);
    }

    fn trigger_download(&mut self, clip: &ClipRef) {
        self.clips.retain(&clip.locator);

        let filename = format!(
            "{}{}.{}",
            self.config.download.file_prefix, clip.created_at, self.config.recording.extension
        );

        if let Some(data) = self.clips.resolve(&clip.locator)
            && let Err(err) = self.services.downloads.save(&clip.locator, &data, &filename)
        {
            tracing::warn!(error = %err, %filename, "failed to save clip locally");
        }

        // Only the download's reference goes away here.
        self.clips.release(&clip.locator);
    }

    fn store_in_gallery(&mut self, clip: &ClipRef) {
        self.clips.retain(&clip.locator);

        let entry = GalleryEntry {
            locator: clip.locator.clone(),
            timestamp: clip.created_at,
        };
        match self.gallery.insert(self.store.as_mut(), entry) {
            Ok(evicted) => {
                for old in evicted {
                    self.clips.release(&old.locator);
                }
            }
            Err(err) => tracing::warn!(error = %err, "failed to persist gallery"),
        }

        self.render_gallery();
    }

    fn generate_share_code(&mut self, clip: &ClipRef) {
        // A new recording implicitly replaces the previous code.
        if let Some(previous) = self.share.take() {
            self.services.codes.clear();
            self.clips.release(previous.locator());
        }

        self.clips.retain(&clip.locator);
        let code = ShareCode::generate(clip.locator.clone(), self.config.share.window_secs);
        self.services.codes.render(&code.code_spec(&self.config.share));
        self.services.presenter.show_share_panel();
        self.services.presenter.show_share_remaining(&code.label());
        self.share = Some(code);
    }
}

/// Gallery interaction.
impl Booth {
    fn render_gallery(&mut self) {
        let items: Vec<GalleryItem> = self
            .gallery
            .entries()
            .iter()
            .map(|entry| GalleryItem {
                locator: entry.locator.clone(),
                timestamp: entry.timestamp,
                available: self.clips.resolve(&entry.locator).is_some(),
            })
            .collect();

        self.services.presenter.render_gallery(&items);
    }

    fn clear_gallery(&mut self) {
        if !self
            .services
            .presenter
            .confirm("Clear the entire video gallery?")
        {
            return;
        }

        for entry in self.gallery.entries().to_vec() {
            self.clips.release(&entry.locator);
        }

        if let Err(err) = self.gallery.clear(self.store.as_mut()) {
            tracing::warn!(error = %err, "failed to clear gallery storage");
        }

        self.render_gallery();
    }

    fn open_gallery_item(&mut self, index: usize) {
        let Some(entry) = self.gallery.entries().get(index) else {
            return;
        };

        if self.clips.resolve(&entry.locator).is_some() {
            let locator = entry.locator.clone();
            self.services.presenter.open_clip(&locator);
        } else {
            // Recorded in a previous session; the locator died with it.
            tracing::warn!(locator = %entry.locator, "clip is no longer resolvable");
        }
    }
}
