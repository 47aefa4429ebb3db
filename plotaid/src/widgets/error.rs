use std::fmt;

use super::button_bar::Action;

/// Invalid widget configuration, raised while a widget is constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NoButtons,
    ActionCountMismatch { labels: usize, actions: usize },
    ParamCountMismatch { labels: usize, params: usize },
    UnsupportedAction(String),
    StripOverflow { buttons: usize, width: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoButtons => {
                write!(f, "'button_labels' must have at least one button label")
            }
            ConfigError::ActionCountMismatch { labels, actions } => write!(
                f,
                "'button_actions' must be the same length as 'button_labels' ({actions} != {labels})"
            ),
            ConfigError::ParamCountMismatch { labels, params } => write!(
                f,
                "'button_params' must be the same length as 'button_labels' ({params} != {labels})"
            ),
            ConfigError::UnsupportedAction(action) => {
                let supported: Vec<&str> = Action::ALL.iter().map(|a| a.name()).collect();
                write!(
                    f,
                    "action '{}' not currently supported, supported actions are: {}",
                    action,
                    supported.join(", ")
                )
            }
            ConfigError::StripOverflow { buttons, width } => write!(
                f,
                "{buttons} buttons of width {width} do not fit into the button strip"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
