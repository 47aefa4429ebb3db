use std::{collections::HashMap, str::FromStr};

use crate::widgets::{
    error::ConfigError,
    event::{ClickEvent, HostRequest},
    region::{hit_test, strip_layout, Region, STRIP_BUTTON_BOTTOM, STRIP_BUTTON_HEIGHT},
};

use super::{
    Action, Button, ButtonBar, ButtonParams, ButtonResult, InputFormat, InputPrompt, InputValue,
    DEFAULT_BUTTON_WIDTH,
};

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Next,
        Action::Previous,
        Action::Close,
        Action::Option,
        Action::UInput,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Action::Next => "NEXT",
            Action::Previous => "PREVIOUS",
            Action::Close => "CLOSE",
            Action::Option => "OPTION",
            Action::UInput => "UINPUT",
        }
    }
}

impl FromStr for Action {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.name() == s)
            .ok_or_else(|| ConfigError::UnsupportedAction(s.to_owned()))
    }
}

impl Default for ButtonBar {
    /// A single "Close" button.
    fn default() -> Self {
        let button = Button {
            label: "Close".to_string(),
            action: Action::Close,
            params: ButtonParams::default(),
        };
        let start = (1.0 - DEFAULT_BUTTON_WIDTH) / 2.0;
        Self {
            buttons: vec![button],
            regions: vec![Region::new(
                start,
                STRIP_BUTTON_BOTTOM,
                DEFAULT_BUTTON_WIDTH,
                STRIP_BUTTON_HEIGHT,
            )],
            result: ButtonResult::default(),
            data: HashMap::new(),
            prompt: None,
        }
    }
}

impl ButtonBar {
    pub fn new(
        labels: &[&str],
        actions: &[&str],
        params: Option<Vec<ButtonParams>>,
    ) -> Result<Self, ConfigError> {
        Self::with_width(labels, actions, params, DEFAULT_BUTTON_WIDTH)
    }

    /// Validate the configuration and lay out the buttons, each `width`
    /// wide (as fraction of the surface width).
    pub fn with_width(
        labels: &[&str],
        actions: &[&str],
        params: Option<Vec<ButtonParams>>,
        width: f64,
    ) -> Result<Self, ConfigError> {
        if labels.is_empty() {
            return Err(ConfigError::NoButtons);
        }
        if actions.len() != labels.len() {
            return Err(ConfigError::ActionCountMismatch {
                labels: labels.len(),
                actions: actions.len(),
            });
        }
        let actions = actions
            .iter()
            .map(|action| action.parse::<Action>())
            .collect::<Result<Vec<_>, _>>()?;
        let params = match params {
            Some(params) if params.len() != labels.len() => {
                return Err(ConfigError::ParamCountMismatch {
                    labels: labels.len(),
                    params: params.len(),
                });
            }
            Some(params) => params,
            None => labels.iter().map(|_| ButtonParams::default()).collect(),
        };
        let regions = strip_layout(labels.len(), width)?;

        let buttons = labels
            .iter()
            .zip(actions)
            .zip(params)
            .map(|((label, action), params)| Button {
                label: label.to_string(),
                action,
                params,
            })
            .collect();

        Ok(Self {
            buttons,
            regions,
            result: ButtonResult::default(),
            data: HashMap::new(),
            prompt: None,
        })
    }

    /// Dispatch a click on the surface to the button under the pointer.
    pub fn click(&mut self, event: &ClickEvent) -> Option<HostRequest> {
        if self.prompt.is_some() {
            log::debug!("ignoring click while input prompt is open");
            return None;
        }
        let idx = hit_test(&self.regions, event)?;
        let button = &mut self.buttons[idx];
        log::debug!("button '{}' clicked ({})", button.label, button.action.name());

        match button.action {
            Action::Next => {
                self.result = ButtonResult::Index(1);
                None
            }
            Action::Previous => {
                self.result = ButtonResult::Index(-1);
                None
            }
            Action::Close => Some(HostRequest::Close),
            Action::Option => {
                self.result = ButtonResult::Label(button.label.clone());
                if let Some(func) = button.params.func.as_mut() {
                    func();
                }
                button.params.close.then_some(HostRequest::Close)
            }
            Action::UInput => {
                self.prompt = Some(InputPrompt::new(&button.params));
                None
            }
        }
    }

    /// Index of the button under the pointer, for highlighting.
    pub fn hovered(&self, event: &ClickEvent) -> Option<usize> {
        if self.prompt.is_some() {
            return None;
        }
        hit_test(&self.regions, event)
    }

    /// Store the value of the open prompt, if it is valid.
    pub fn confirm_prompt(&mut self) {
        let Some(prompt) = self.prompt.as_mut() else {
            return;
        };
        if let Some(value) = prompt.submit() {
            log::info!("'{}' set to {}", prompt.name, value);
            self.data.insert(prompt.name.clone(), Some(value));
            self.prompt = None;
        }
    }

    /// Close the open prompt, recording that no value was entered.
    pub fn cancel_prompt(&mut self) {
        if let Some(prompt) = self.prompt.take() {
            log::info!("input for '{}' cancelled", prompt.name);
            self.data.insert(prompt.name, None);
        }
    }

    /// Replace the entered values, e.g. with a loaded session.
    pub fn restore(&mut self, data: HashMap<String, Option<InputValue>>) {
        self.data = data;
    }

    pub fn result(&self) -> &ButtonResult {
        &self.result
    }

    /// Read the result and reset it to `Index(0)`.
    pub fn take_result(&mut self) -> ButtonResult {
        std::mem::take(&mut self.result)
    }

    pub fn data(&self) -> &HashMap<String, Option<InputValue>> {
        &self.data
    }

    pub fn prompt(&self) -> Option<&InputPrompt> {
        self.prompt.as_ref()
    }

    pub fn prompt_mut(&mut self) -> Option<&mut InputPrompt> {
        self.prompt.as_mut()
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.buttons.iter().map(|button| button.label.as_str())
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }
}

impl InputPrompt {
    pub fn new(params: &ButtonParams) -> Self {
        Self {
            title: params.title.clone(),
            comment: params.comment.clone(),
            name: params.name.clone(),
            format: params.format,
            minval: params.minval,
            maxval: params.maxval,
            text: String::new(),
            error: None,
        }
    }

    /// Parse the typed text. On failure the reason is kept in `error` and
    /// `None` is returned.
    pub fn submit(&mut self) -> Option<InputValue> {
        match self.parse() {
            Ok(value) => {
                self.error = None;
                Some(value)
            }
            Err(error) => {
                log::debug!("rejected input '{}': {}", self.text, error);
                self.error = Some(error);
                None
            }
        }
    }

    fn parse(&self) -> Result<InputValue, String> {
        let text = self.text.trim();
        match self.format {
            InputFormat::Text => Ok(InputValue::Text(self.text.clone())),
            InputFormat::Integer => {
                let value = text
                    .parse::<i64>()
                    .map_err(|_| "Not an integer.".to_string())?;
                self.check_bounds(value as f64)?;
                Ok(InputValue::Integer(value))
            }
            InputFormat::Float => {
                let value = text
                    .parse::<f64>()
                    .map_err(|_| "Not a floating point value.".to_string())?;
                self.check_bounds(value)?;
                Ok(InputValue::Float(value))
            }
        }
    }

    fn check_bounds(&self, value: f64) -> Result<(), String> {
        if let Some(minval) = self.minval.filter(|minval| value < *minval) {
            return Err(format!("The allowed minimum value is {minval}."));
        }
        if let Some(maxval) = self.maxval.filter(|maxval| value > *maxval) {
            return Err(format!("The allowed maximum value is {maxval}."));
        }
        Ok(())
    }
}
