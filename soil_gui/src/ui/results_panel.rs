//! Results Panel
//!
//! Shows exactly one of:
//! - the current validation error (red)
//! - the derived quantities (volume, bags, weight)
//! - a hint when nothing has been calculated yet

use iced::widget::{column, container, row, text, Column, Space};
use iced::{Element, Length};

use soil_core::TopsoilResult;

use crate::{App, Message};

/// Render the results panel based on the current calculation state
pub fn view_results_panel(app: &App) -> Element<'_, Message> {
    let content: Column<'_, Message> = if let Some(ref error) = app.error {
        column![
            text("Error").size(14),
            Space::new().height(8),
            text(error.to_string()).size(12).color([0.8, 0.2, 0.2]),
        ]
    } else if let Some(ref result) = app.result {
        view_quantities(result)
    } else {
        column![
            text("Results").size(14),
            Space::new().height(8),
            text("Enter dimensions and press Calculate")
                .size(12)
                .color([0.5, 0.5, 0.5]),
        ]
    };

    container(content.padding(8))
        .width(Length::Fill)
        .style(container::bordered_box)
        .padding(5)
        .into()
}

/// Render the derived quantities
fn view_quantities(result: &TopsoilResult) -> Column<'_, Message> {
    column![
        text("Results").size(14),
        Space::new().height(8),
        quantity_row(
            "Volume:",
            format!("{:.2} cubic yards", result.volume_cubic_yards)
        ),
        quantity_row("Estimated Bags:", format!("{} bags", result.bag_count)),
        quantity_row(
            "Estimated Weight:",
            format!("{:.2} tons", result.weight_tons)
        ),
        Space::new().height(10),
        text("Actual amounts vary with soil moisture and composition.")
            .size(10)
            .color([0.5, 0.5, 0.5]),
    ]
    .spacing(4)
}

/// Label on the left, value on the right
fn quantity_row(label: &'static str, value: String) -> Element<'static, Message> {
    row![
        text(label).size(11).color([0.6, 0.6, 0.6]),
        Space::new().width(Length::Fill),
        text(value).size(11),
    ]
    .into()
}
