use crate::gui::screens::{
    ScreenData, ScreenMessage, landing::LandingScreen, monitor::MonitorScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    Landing(ScreenMessage<LandingScreen>),
    Monitor(ScreenMessage<MonitorScreen>),
    ChangeScreen(ScreenData),
}
