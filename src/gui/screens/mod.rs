pub mod landing;
pub mod monitor;

use iced::{Element, Task};
use log::warn;

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug + Clone;
    type ParentMessage: std::fmt::Debug + Clone;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    Landing(landing::LandingScreen),
    Monitor(monitor::MonitorScreen),
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::Landing(screen) => screen.view(state).map(Message::Landing),
            ScreenData::Monitor(screen) => screen.view(state).map(Message::Monitor),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::Landing(page), Message::Landing(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Landing)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    landing::ParentMessage::FeedChosen(source) => {
                        if let Err(e) = state.session.start() {
                            warn!("Could not start capture session: {e}");
                        }
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::Monitor(monitor::MonitorScreen::new(source)),
                        )))
                    }
                },
            },
            (ScreenData::Monitor(page), Message::Monitor(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Monitor)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    monitor::ParentMessage::SessionClosed => {
                        Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(
                            ScreenData::Landing(landing::LandingScreen::default()),
                        )))
                    }
                },
            },
            _ => Task::none(),
        }
    }
}
