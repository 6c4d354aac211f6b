use iced::{
    Color, Element, Theme, border,
    widget::{column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::session::SessionPhase;

fn phase_label(phase: SessionPhase) -> &'static str {
    match phase {
        SessionPhase::Idle => "Idle",
        SessionPhase::Capturing => "Capturing",
        SessionPhase::Processing => "Processing",
        SessionPhase::Displaying => "Detected",
    }
}

fn phase_style(phase: SessionPhase, current: SessionPhase) -> impl Fn(&Theme) -> Style {
    move |theme: &Theme| {
        let style = bordered_box(theme).border(border::width(2));
        if phase == current {
            style.background(theme.palette().primary)
        } else {
            // dim the phases we are not in
            let mut color_rgba = theme.palette().background.into_rgba8();
            color_rgba[0] /= 2;
            color_rgba[1] /= 2;
            color_rgba[2] /= 2;
            style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
        }
    }
}

fn phase_box<'a, Message>(phase: SessionPhase, current: SessionPhase) -> Element<'a, Message>
where
    Message: 'a,
{
    container(text(phase_label(phase)))
        .style(phase_style(phase, current))
        .padding(10)
        .into()
}

/// Sidebar + main split with the session-phase strip pinned to the top of
/// the sidebar
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
    phase: SessionPhase,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(column![
            container(row![
                phase_box(SessionPhase::Idle, phase),
                phase_box(SessionPhase::Capturing, phase),
                phase_box(SessionPhase::Processing, phase),
                phase_box(SessionPhase::Displaying, phase),
            ]),
            container(sidebar.into()).height(iced::Length::Fill),
        ])
        .width(iced::Length::FillPortion(1)),
        container(main_content.into()).width(iced::Length::FillPortion(3)),
    ])
    .center_x(iced::Length::Fill)
    .center_y(iced::Length::Fill)
    .into()
}
