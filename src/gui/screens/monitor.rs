use std::path::PathBuf;
use std::time::{Duration, Instant};

use iced::{
    Color, Element, Length, Point, Rectangle, Renderer, Size, Task, Theme, mouse,
    widget::{button, canvas, column, progress_bar, scrollable, stack, text},
};
use log::{debug, info, warn};
use rfd::AsyncFileDialog;

use crate::camera;
use crate::export::ExportSnapshot;
use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    state::{DEMO_FEED_HEIGHT, DEMO_FEED_WIDTH, FeedSource, Frame},
    widgets,
};
use crate::models::Detection;
use crate::session::SessionPhase;

/// Scan cadence while capturing
const SCAN_INTERVAL: Duration = Duration::from_secs(2);
/// How long a detection overlay stays on screen
const OVERLAY_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct MonitorScreen {
    source: FeedSource,
    frame: Option<Frame>,
    error: Option<String>,
    last_scan: Option<Instant>,
    overlay_deadline: Option<Instant>,
}

#[derive(Debug, Clone)]
pub enum MonitorMessage {
    Tick,
    StartStop,
    FrameGrabbed(Result<Frame, String>),
    OpenImage,
    ImageLoaded(Result<Option<Frame>, String>),
    Export,
    ExportTo(Option<PathBuf>),
    ToggleDarkMode,
    Close,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SessionClosed,
}

impl MonitorScreen {
    pub fn new(source: FeedSource) -> Self {
        let frame = match &source {
            FeedSource::Still(frame) => Some(frame.clone()),
            _ => None,
        };
        Self {
            source,
            frame,
            error: None,
            last_scan: None,
            overlay_deadline: None,
        }
    }

    fn feed_dimensions(&self) -> (u32, u32) {
        match &self.frame {
            Some(frame) => frame.dimensions(),
            None => (DEMO_FEED_WIDTH, DEMO_FEED_HEIGHT),
        }
    }

    /// Timer heartbeat: expire the overlay, then kick off the next scan
    /// once the cadence interval has elapsed.
    fn tick(&mut self, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        if state.session.overlay_visible()
            && self
                .overlay_deadline
                .is_some_and(|deadline| Instant::now() >= deadline)
        {
            state.session.clear_overlay();
            self.overlay_deadline = None;
        }

        if state.session.phase() != SessionPhase::Capturing {
            return Task::none();
        }
        if self
            .last_scan
            .is_some_and(|at| at.elapsed() < SCAN_INTERVAL)
        {
            return Task::none();
        }
        if let Err(e) = state.session.begin_scan() {
            debug!("Skipping scan: {e}");
            return Task::none();
        }
        self.last_scan = Some(Instant::now());

        match self.source.clone() {
            FeedSource::Camera(index) => Task::perform(
                async move {
                    tokio::task::spawn_blocking(move || camera::grab_frame(index))
                        .await
                        .map_err(|e| e.to_string())?
                        .map_err(|e| e.to_string())
                },
                |result| {
                    ScreenMessage::ScreenMessage(MonitorMessage::FrameGrabbed(
                        result.map(Frame::new),
                    ))
                },
            ),
            FeedSource::Still(frame) => {
                self.scan_frame_now(state, &frame);
                Task::none()
            }
            FeedSource::Demo => {
                self.fabricate_now(state);
                Task::none()
            }
        }
    }

    fn scan_frame_now(&mut self, state: &mut AppState, frame: &Frame) {
        let started = Instant::now();
        let detection = state.scanner.scan_frame(&frame.image, &mut rand::rng());
        let latency_ms = started.elapsed().as_secs_f32() * 1000.0;
        self.record_scan(state, detection, latency_ms);
    }

    fn fabricate_now(&mut self, state: &mut AppState) {
        let started = Instant::now();
        let (width, height) = self.feed_dimensions();
        let detection = state.scanner.fabricate(width, height, &mut rand::rng());
        let latency_ms = started.elapsed().as_secs_f32() * 1000.0;
        self.record_scan(state, detection, latency_ms);
    }

    fn record_scan(&mut self, state: &mut AppState, detection: Detection, latency_ms: f32) {
        match state.session.complete_scan(detection, latency_ms) {
            Ok(()) => self.overlay_deadline = Some(Instant::now() + OVERLAY_DURATION),
            Err(e) => debug!("Discarding scan result: {e}"),
        }
    }
}

impl Screen for MonitorScreen {
    type Message = MonitorMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let stats = state.session.stats();

        let mut history = column![].spacing(4);
        for detection in state.session.history() {
            history = history.push(text(format!(
                "{}  {:>5.1}%  {:02}:{:02}:{:02}",
                detection.plate,
                detection.confidence,
                detection.timestamp.hour(),
                detection.timestamp.minute(),
                detection.timestamp.second(),
            )));
        }

        let controls = column![
            button(if state.session.is_active() {
                "Stop Capture"
            } else {
                "Start Capture"
            })
            .on_press(ScreenMessage::ScreenMessage(MonitorMessage::StartStop)),
            button("Open Image...")
                .on_press(ScreenMessage::ScreenMessage(MonitorMessage::OpenImage)),
            button("Export JSON").on_press(ScreenMessage::ScreenMessage(MonitorMessage::Export)),
            button(if state.dark_mode {
                "Light Mode"
            } else {
                "Dark Mode"
            })
            .on_press(ScreenMessage::ScreenMessage(MonitorMessage::ToggleDarkMode)),
            button("Close Session").on_press(ScreenMessage::ScreenMessage(MonitorMessage::Close)),
        ]
        .spacing(8);

        let sidebar = column![
            text("Statistics").size(20),
            text(format!("Detections: {}", stats.detections)),
            text(format!("Avg confidence: {:.1}%", stats.avg_confidence)),
            progress_bar(0.0..=100.0, stats.avg_confidence).height(10),
            text(format!("Latency: {:.1} ms", stats.last_latency_ms)),
            text(format!("Frame rate: {:.1} fps", stats.fps)),
            text("History").size(20),
            scrollable(history).height(Length::Fill),
            controls,
        ]
        .spacing(10)
        .padding(10);

        let (feed_width, feed_height) = self.feed_dimensions();
        let overlay = FeedOverlay {
            detection: if state.session.overlay_visible() {
                state.session.latest()
            } else {
                None
            },
            feed_width,
            feed_height,
            placeholder: self.frame.is_none(),
        };

        let feed: Element<'_, ScreenMessage<Self>> = match &self.frame {
            Some(frame) => stack![
                iced::widget::image(frame.handle.clone())
                    .width(Length::Fill)
                    .height(Length::Fill),
                canvas(overlay).width(Length::Fill).height(Length::Fill),
            ]
            .into(),
            None => canvas(overlay)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        };

        let mut main_content = column![feed].spacing(10).padding(10);
        if let Some(error) = &self.error {
            main_content = main_content.push(text(error.as_str()).style(iced::widget::text::danger));
        }

        widgets::layout(sidebar, main_content, state.session.phase())
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            MonitorMessage::Tick => self.tick(state),
            MonitorMessage::StartStop => {
                if state.session.is_active() {
                    state.session.stop();
                    self.overlay_deadline = None;
                    info!("Capture stopped");
                } else {
                    self.error = None;
                    self.last_scan = None;
                    if let Err(e) = state.session.start() {
                        warn!("Could not start capture: {e}");
                    }
                }
                Task::none()
            }
            MonitorMessage::FrameGrabbed(Ok(frame)) => {
                if state.session.phase() != SessionPhase::Processing {
                    debug!("Dropping frame grabbed after stop");
                    return Task::none();
                }
                self.error = None;
                self.frame = Some(frame.clone());
                self.scan_frame_now(state, &frame);
                Task::none()
            }
            MonitorMessage::FrameGrabbed(Err(error)) => {
                warn!("Camera capture failed: {error}");
                self.error = Some(error);
                self.overlay_deadline = None;
                state.session.stop();
                Task::none()
            }
            MonitorMessage::OpenImage => Task::perform(
                async {
                    match AsyncFileDialog::new()
                        .add_filter("Images", &["png", "jpg", "jpeg", "bmp", "webp"])
                        .pick_file()
                        .await
                    {
                        Some(file) => Frame::load(file.path())
                            .map(Some)
                            .map_err(|e| e.to_string()),
                        None => Ok(None),
                    }
                },
                |result| ScreenMessage::ScreenMessage(MonitorMessage::ImageLoaded(result)),
            ),
            MonitorMessage::ImageLoaded(Ok(Some(frame))) => {
                self.source = FeedSource::Still(frame.clone());
                self.frame = Some(frame);
                self.error = None;
                Task::none()
            }
            MonitorMessage::ImageLoaded(Ok(None)) => Task::none(),
            MonitorMessage::ImageLoaded(Err(error)) => {
                warn!("Image load failed: {error}");
                self.error = Some(error);
                Task::none()
            }
            MonitorMessage::Export => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("JSON", &["json"])
                        .set_file_name("platewatch-export.json")
                        .save_file()
                        .await
                        .map(|file| file.path().to_path_buf())
                },
                |path| ScreenMessage::ScreenMessage(MonitorMessage::ExportTo(path)),
            ),
            MonitorMessage::ExportTo(Some(path)) => {
                match ExportSnapshot::from_session(&state.session).write_to(&path) {
                    Ok(()) => info!("Exported snapshot to {}", path.display()),
                    Err(e) => {
                        warn!("Export failed: {e}");
                        self.error = Some(e.to_string());
                    }
                }
                Task::none()
            }
            MonitorMessage::ExportTo(None) => Task::none(),
            MonitorMessage::ToggleDarkMode => {
                state.dark_mode = !state.dark_mode;
                Task::none()
            }
            MonitorMessage::Close => {
                state.session.stop();
                self.overlay_deadline = None;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::SessionClosed))
            }
        }
    }
}

/// Draws the detection rectangle and plate label over the feed, and a dark
/// placeholder backdrop when the feed has no pixels (demo mode).
#[derive(Debug)]
struct FeedOverlay<'a> {
    detection: Option<&'a Detection>,
    feed_width: u32,
    feed_height: u32,
    placeholder: bool,
}

impl<'a> canvas::Program<ScreenMessage<MonitorScreen>> for FeedOverlay<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        if self.placeholder {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), Color::from_rgb8(24, 26, 32));
            frame.fill_text(canvas::Text {
                content: "NO SIGNAL".to_string(),
                position: Point::new(frame.width() / 2.0 - 64.0, frame.height() / 2.0),
                color: Color::from_rgb8(90, 96, 110),
                size: 28.0.into(),
                ..canvas::Text::default()
            });
        }

        if let Some(detection) = self.detection {
            // Same contain-fit mapping the image widget uses for the feed
            let feed_w = self.feed_width as f32;
            let feed_h = self.feed_height as f32;
            let scale = (bounds.width / feed_w).min(bounds.height / feed_h);
            let offset_x = (bounds.width - feed_w * scale) / 2.0;
            let offset_y = (bounds.height - feed_h * scale) / 2.0;

            let region = detection.region;
            let top_left = Point::new(
                offset_x + region.x as f32 * scale,
                offset_y + region.y as f32 * scale,
            );
            let size = Size::new(region.width as f32 * scale, region.height as f32 * scale);

            let accent = Color::from_rgb8(0, 220, 120);
            frame.stroke(
                &canvas::Path::rectangle(top_left, size),
                canvas::Stroke::default().with_color(accent).with_width(3.0),
            );
            frame.fill_text(canvas::Text {
                content: format!("{}  {:.1}%", detection.plate, detection.confidence),
                position: Point::new(top_left.x, (top_left.y - 18.0).max(0.0)),
                color: accent,
                size: 16.0.into(),
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
