//! Interactive helper widgets for `egui_plot` plots.
//!
//! Every widget keeps its state machine in a toolkit independent `logic`
//! module fed with the values from [`event`], and a small `ui` module doing
//! the egui wiring and drawing.

pub mod button_bar;
pub mod cursor;
pub mod error;
pub mod event;
pub mod region;
pub mod selector;

pub use button_bar::{
    Action, Button, ButtonBar, ButtonParams, ButtonResult, InputFormat, InputPrompt, InputValue,
};
pub use cursor::{MeasurementCursor, Readout};
pub use error::ConfigError;
pub use event::{ClickEvent, HostRequest, PointerEvent};
pub use region::Region;
pub use selector::{DragRect, RectStyle, RectangleSelector};
