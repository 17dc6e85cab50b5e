//! Application header row

use iced::widget::{row, text, Space};
use iced::{Alignment, Element, Length};

use crate::Message;

/// Render the application header with title
pub fn view_header() -> Element<'static, Message> {
    row![
        text("Groundwork").size(28),
        Space::new().width(Length::Fill),
        text("Topsoil Calculator").size(14),
    ]
    .align_y(Alignment::Center)
    .into()
}
