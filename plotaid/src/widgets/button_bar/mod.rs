mod logic;
mod ui;

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::region::Region;

pub const DEFAULT_BUTTON_WIDTH: f64 = 0.2;

/// What a button does when it is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Sets the result to `1`.
    Next,
    /// Sets the result to `-1`.
    Previous,
    /// Closes the display surface.
    Close,
    /// Sets the result to the label of the button.
    Option,
    /// Asks the user for a value.
    UInput,
}

/// Format of the value requested by an `UINPUT` button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputFormat {
    Integer,
    Float,
    #[default]
    Text,
}

/// Optional metadata attached to a single button.
pub struct ButtonParams {
    /// Close the surface after an `OPTION` button was clicked.
    pub close: bool,
    /// Called after an `OPTION` button was clicked.
    pub func: Option<Box<dyn FnMut()>>,
    pub title: String,
    /// Text shown above the input field of the prompt.
    pub comment: String,
    /// Key under which the entered value is stored.
    pub name: String,
    pub format: InputFormat,
    pub minval: Option<f64>,
    pub maxval: Option<f64>,
}

pub struct Button {
    pub label: String,
    pub action: Action,
    pub params: ButtonParams,
}

/// Last outcome of the button bar, `Index(0)` until something was clicked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ButtonResult {
    Index(i32),
    Label(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

/// State of an open `UINPUT` prompt.
#[derive(Debug)]
pub struct InputPrompt {
    pub title: String,
    pub comment: String,
    pub name: String,
    pub format: InputFormat,
    pub minval: Option<f64>,
    pub maxval: Option<f64>,
    /// Text currently typed into the prompt.
    pub text: String,
    pub error: Option<String>,
}

/// A strip of buttons below a plot driving a simple interaction flow.
pub struct ButtonBar {
    buttons: Vec<Button>,
    regions: Vec<Region>,
    result: ButtonResult,
    data: HashMap<String, Option<InputValue>>,
    prompt: Option<InputPrompt>,
}

impl Default for ButtonParams {
    fn default() -> Self {
        Self {
            close: false,
            func: None,
            title: "Enter a Value".to_string(),
            comment: "Message".to_string(),
            name: "x".to_string(),
            format: InputFormat::Text,
            minval: None,
            maxval: None,
        }
    }
}

impl fmt::Debug for ButtonParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonParams")
            .field("close", &self.close)
            .field("func", &self.func.as_ref().map(|_| "FnMut()"))
            .field("title", &self.title)
            .field("comment", &self.comment)
            .field("name", &self.name)
            .field("format", &self.format)
            .field("minval", &self.minval)
            .field("maxval", &self.maxval)
            .finish()
    }
}

impl ButtonParams {
    pub fn with_close(mut self, close: bool) -> Self {
        self.close = close;
        self
    }

    pub fn with_func(mut self, func: impl FnMut() + 'static) -> Self {
        self.func = Some(Box::new(func));
        self
    }

    pub fn with_prompt(mut self, title: &str, comment: &str) -> Self {
        self.title = title.to_owned();
        self.comment = comment.to_owned();
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = name.to_owned();
        self
    }

    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn with_bounds(mut self, minval: Option<f64>, maxval: Option<f64>) -> Self {
        self.minval = minval;
        self.maxval = maxval;
        self
    }
}

impl Default for ButtonResult {
    fn default() -> Self {
        ButtonResult::Index(0)
    }
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Integer(value) => write!(f, "{value}"),
            InputValue::Float(value) => write!(f, "{value}"),
            InputValue::Text(value) => write!(f, "{value}"),
        }
    }
}
