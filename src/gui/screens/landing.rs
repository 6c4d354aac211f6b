use iced::{
    Alignment::Center,
    Element, Task,
    widget::{button, column, container, row, text},
};
use log::warn;
use rfd::AsyncFileDialog;

use crate::gui::{
    AppState,
    screens::{Screen, ScreenMessage},
    state::{FeedSource, Frame},
};

#[derive(Debug, Clone, Default)]
pub struct LandingScreen {
    error: Option<String>,
}

#[derive(Debug, Clone)]
pub enum LandingMessage {
    UseCamera,
    OpenImage,
    UseDemoFeed,
    ImageLoadFailed(String),
    None,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    FeedChosen(FeedSource),
}

impl Screen for LandingScreen {
    type Message = LandingMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let mut content = column![
            text("Platewatch").size(32),
            text("Simulated license-plate monitoring demo"),
            row![
                button("Live Camera").on_press(ScreenMessage::ScreenMessage(
                    LandingMessage::UseCamera
                )),
                button("Open Image...").on_press(ScreenMessage::ScreenMessage(
                    LandingMessage::OpenImage
                )),
                button("Demo Feed").on_press(ScreenMessage::ScreenMessage(
                    LandingMessage::UseDemoFeed
                )),
            ]
            .spacing(20),
        ]
        .spacing(20)
        .padding(20)
        .align_x(Center);

        if let Some(error) = &self.error {
            content = content.push(text(error.as_str()).style(iced::widget::text::danger));
        }

        container(content)
            .center_x(iced::Length::Fill)
            .center_y(iced::Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        _state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            LandingMessage::UseCamera => Task::done(ScreenMessage::ParentMessage(
                ParentMessage::FeedChosen(FeedSource::Camera(0)),
            )),
            LandingMessage::UseDemoFeed => Task::done(ScreenMessage::ParentMessage(
                ParentMessage::FeedChosen(FeedSource::Demo),
            )),
            LandingMessage::OpenImage => Task::perform(
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
                |result| match result {
                    Ok(Some(frame)) => ScreenMessage::ParentMessage(ParentMessage::FeedChosen(
                        FeedSource::Still(frame),
                    )),
                    Ok(None) => ScreenMessage::ScreenMessage(LandingMessage::None),
                    Err(e) => ScreenMessage::ScreenMessage(LandingMessage::ImageLoadFailed(e)),
                },
            ),
            LandingMessage::ImageLoadFailed(error) => {
                warn!("Image load failed: {error}");
                self.error = Some(error);
                Task::none()
            }
            LandingMessage::None => Task::none(),
        }
    }
}
