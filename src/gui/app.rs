use std::time::Duration;

use iced::{Element, Subscription, Task, Theme};

use crate::gui::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage, landing::LandingScreen, monitor::MonitorMessage},
};

/// UI heartbeat driving scans and overlay expiry
const TICK_INTERVAL: Duration = Duration::from_millis(200);

pub struct PlatewatchApp {
    state: AppState,
    screen: ScreenData,
}

pub fn run() -> iced::Result {
    iced::application(PlatewatchApp::new, PlatewatchApp::update, PlatewatchApp::view)
        .title(PlatewatchApp::title)
        .subscription(PlatewatchApp::subscription)
        .theme(PlatewatchApp::theme)
        .run()
}

impl PlatewatchApp {
    fn new() -> (Self, Task<Message>) {
        (
            Self {
                state: AppState::default(),
                screen: ScreenData::Landing(LandingScreen::default()),
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        "Platewatch - License Plate Monitor".to_string()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(unwrap_screen_message)
    }

    fn view(&self) -> Element<'_, Message> {
        self.screen.view(&self.state).map(unwrap_screen_message)
    }

    fn theme(&self) -> Theme {
        if self.state.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.state.session.is_active() {
            iced::time::every(TICK_INTERVAL)
                .map(|_| Message::Monitor(ScreenMessage::ScreenMessage(MonitorMessage::Tick)))
        } else {
            Subscription::none()
        }
    }
}

fn unwrap_screen_message(message: ScreenMessage<ScreenData>) -> Message {
    match message {
        ScreenMessage::ScreenMessage(message) => message,
        ScreenMessage::ParentMessage(never) => match never {},
    }
}
