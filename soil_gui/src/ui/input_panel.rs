//! Input Panel
//!
//! Collects the three dimension fields and both unit selections, plus the
//! Reset / Calculate actions. Field values stay raw strings; the engine owns
//! validation.

use iced::widget::{button, column, container, pick_list, row, text, text_input, Space};
use iced::{Alignment, Element, Length, Padding};

use soil_core::units::{AreaUnit, DepthUnit};

use crate::{App, Message};

/// Render the dimension form
pub fn view_input_panel(app: &App) -> Element<'_, Message> {
    let dimension_inputs = column![
        labeled_input("Length:", &app.length, Message::LengthChanged),
        labeled_input("Width:", &app.width, Message::WidthChanged),
        row![
            text("Unit:").size(11).width(Length::Fixed(80.0)),
            pick_list(
                &AreaUnit::ALL[..],
                Some(app.area_unit),
                Message::AreaUnitSelected
            )
            .width(Length::Fill)
            .text_size(11),
        ]
        .align_y(Alignment::Center),
        Space::new().height(4),
        labeled_input("Depth:", &app.depth, Message::DepthChanged),
        row![
            text("Depth Unit:").size(11).width(Length::Fixed(80.0)),
            pick_list(
                &DepthUnit::ALL[..],
                Some(app.depth_unit),
                Message::DepthUnitSelected
            )
            .width(Length::Fill)
            .text_size(11),
        ]
        .align_y(Alignment::Center),
    ]
    .spacing(6);

    let action_buttons = row![
        button(text("Reset").size(11))
            .on_press(Message::Reset)
            .padding(Padding::from([6, 12]))
            .style(button::secondary),
        Space::new().width(Length::Fill),
        button(text("Calculate").size(11))
            .on_press(Message::Calculate)
            .padding(Padding::from([6, 12]))
            .style(button::primary),
    ]
    .align_y(Alignment::Center);

    container(
        column![
            text("Bed Dimensions").size(14),
            Space::new().height(8),
            dimension_inputs,
            Space::new().height(12),
            action_buttons,
        ]
        .padding(8),
    )
    .width(Length::Fill)
    .style(container::bordered_box)
    .padding(5)
    .into()
}

/// Label + text input on one row
fn labeled_input<'a>(
    label: &'a str,
    value: &'a str,
    on_change: impl Fn(String) -> Message + 'a,
) -> Element<'a, Message> {
    row![
        text(label).size(11).width(Length::Fixed(80.0)),
        text_input("", value)
            .on_input(on_change)
            .width(Length::Fill)
            .padding(4)
            .size(11),
    ]
    .align_y(Alignment::Center)
    .into()
}
