//! # Groundwork GUI Application
//!
//! Desktop form for the topsoil estimating engine, built with Iced.
//!
//! The application owns the transient form state (raw dimension strings,
//! unit selections, and the single result-or-error slot). All conversion and
//! validation logic lives in `soil_core`; this crate only collects input and
//! renders whatever the engine returns.

mod ui;

use iced::widget::{column, container, scrollable, Space};
use iced::{Element, Length, Theme};

use soil_core::calculations::topsoil;
use soil_core::units::{AreaUnit, DepthUnit};
use soil_core::{CalcError, TopsoilInput, TopsoilResult};

fn main() -> iced::Result {
    iced::application(App::default, App::update, App::view)
        .title("Groundwork - Topsoil Calculator")
        .theme(App::theme)
        .window_size((460.0, 640.0))
        .run()
}

/// Messages emitted by the form widgets
#[derive(Debug, Clone)]
pub enum Message {
    LengthChanged(String),
    WidthChanged(String),
    DepthChanged(String),
    AreaUnitSelected(AreaUnit),
    DepthUnitSelected(DepthUnit),
    Calculate,
    Reset,
}

/// Transient form state.
///
/// At most one of `result`/`error` is set after a calculation attempt; both
/// are cleared by Reset.
pub struct App {
    pub length: String,
    pub width: String,
    pub depth: String,
    pub area_unit: AreaUnit,
    pub depth_unit: DepthUnit,
    pub result: Option<TopsoilResult>,
    pub error: Option<CalcError>,
    pub status: String,
}

impl Default for App {
    fn default() -> Self {
        App {
            length: String::new(),
            width: String::new(),
            depth: String::new(),
            area_unit: AreaUnit::default(),
            depth_unit: DepthUnit::default(),
            result: None,
            error: None,
            status: "Ready".to_string(),
        }
    }
}

impl App {
    /// Snapshot the current field values as engine input
    fn to_input(&self) -> TopsoilInput {
        TopsoilInput {
            length: self.length.clone(),
            width: self.width.clone(),
            depth: self.depth.clone(),
            area_unit: self.area_unit,
            depth_unit: self.depth_unit,
        }
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::LengthChanged(value) => self.length = value,
            Message::WidthChanged(value) => self.width = value,
            Message::DepthChanged(value) => self.depth = value,
            Message::AreaUnitSelected(unit) => self.area_unit = unit,
            Message::DepthUnitSelected(unit) => self.depth_unit = unit,
            Message::Calculate => {
                // A new attempt always clears the previous error first
                self.error = None;
                match topsoil::calculate(&self.to_input()) {
                    Ok(result) => {
                        self.result = Some(result);
                        self.status =
                            format!("Estimated {:.2} cu yd", result.volume_cubic_yards);
                    }
                    Err(error) => {
                        self.result = None;
                        self.status = format!("Input error: {}", error.error_code());
                        self.error = Some(error);
                    }
                }
            }
            Message::Reset => {
                *self = App::default();
                self.status = "Cleared".to_string();
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let form = column![
            ui::header::view_header(),
            Space::new().height(12),
            ui::input_panel::view_input_panel(self),
            Space::new().height(10),
            ui::results_panel::view_results_panel(self),
        ]
        .padding(12)
        .max_width(460);

        column![
            container(scrollable(form))
                .width(Length::Fill)
                .height(Length::Fill),
            ui::status_bar::view_status_bar(&self.status),
        ]
        .padding(6)
        .into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }
}
