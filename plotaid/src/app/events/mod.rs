//! Deferred work polled once per frame, currently the native session dialogs.

use std::{path::PathBuf, thread::JoinHandle};

use app_core::event::{AppEvent, EventState};
use derive_new::new;

use super::{
    storage::{load_json, save_json},
    EguiApp,
};

type BoxedEvent<A> = Box<dyn AppEvent<App = A>>;

/// Events waiting for their next turn. Busy events are kept in order and
/// applied again on the following frame.
pub struct EventQueue<A> {
    pending: Vec<BoxedEvent<A>>,
}

impl<A> EventQueue<A> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, event: BoxedEvent<A>) {
        self.pending.push(event);
    }
}

/// Apply each event once. Returns the events that are still busy and whether
/// any of them finished.
fn apply_all<A>(app: &mut A, events: Vec<BoxedEvent<A>>) -> (Vec<BoxedEvent<A>>, bool) {
    let mut busy = Vec::new();
    let mut finished = false;
    for mut event in events {
        match event.apply(app) {
            Ok(EventState::Finished) => finished = true,
            Ok(EventState::Busy) => busy.push(event),
            Err(err) => log::error!("event failed: {}", err),
        }
    }
    (busy, finished)
}

impl EguiApp {
    pub fn run_events(&mut self) {
        let events = std::mem::take(&mut self.event_queue.pending);
        let (busy, finished) = apply_all(self, events);
        // Events queued while applying go after the ones still waiting.
        let queued = std::mem::replace(&mut self.event_queue.pending, busy);
        self.event_queue.pending.extend(queued);
        if finished {
            self.request_redraw();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOp {
    Save,
    Load,
}

impl SessionOp {
    fn verb(&self) -> &'static str {
        match self {
            SessionOp::Save => "save",
            SessionOp::Load => "load",
        }
    }
}

/// Waits for a file dialog running on a helper thread, then saves or
/// restores the session at the picked path.
#[derive(new)]
pub struct SessionDialog {
    op: SessionOp,
    dialog: Option<JoinHandle<Option<PathBuf>>>,
}

impl AppEvent for SessionDialog {
    type App = EguiApp;

    fn apply(&mut self, app: &mut Self::App) -> Result<EventState, String> {
        let Some(dialog) = self.dialog.take_if(|dialog| dialog.is_finished()) else {
            return match self.dialog {
                Some(_) => Ok(EventState::Busy),
                None => Err(format!("{} dialog was already handled", self.op.verb())),
            };
        };
        let path = match dialog.join() {
            Ok(Some(path)) => path,
            Ok(None) => {
                log::debug!("{} dialog cancelled", self.op.verb());
                return Ok(EventState::Finished);
            }
            Err(_) => return Err(format!("{} dialog thread panicked", self.op.verb())),
        };
        match self.op {
            SessionOp::Save => save_json(app, Some(path.as_path()))?,
            SessionOp::Load => {
                load_json(app, Some(path.as_path()))?;
                let mut inputs: Vec<&str> =
                    app.button_bar.data().keys().map(String::as_str).collect();
                inputs.sort_unstable();
                log::info!(
                    "restored page {}, {} regions and inputs {:?} from {:?}",
                    app.page + 1,
                    app.selector.data().len(),
                    inputs,
                    path
                );
            }
        }
        Ok(EventState::Finished)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        ticks: u32,
    }

    /// Busy until the counter reached `until`.
    struct WaitFor {
        until: u32,
    }

    impl AppEvent for WaitFor {
        type App = Counter;

        fn apply(&mut self, app: &mut Counter) -> Result<EventState, String> {
            app.ticks += 1;
            if app.ticks >= self.until {
                Ok(EventState::Finished)
            } else {
                Ok(EventState::Busy)
            }
        }
    }

    struct Broken;

    impl AppEvent for Broken {
        type App = Counter;

        fn apply(&mut self, _app: &mut Counter) -> Result<EventState, String> {
            Err("broken".into())
        }
    }

    #[test]
    fn test_busy_events_are_kept() {
        let mut app = Counter { ticks: 0 };
        let mut queue = EventQueue::<Counter>::new();
        queue.push(Box::new(WaitFor { until: 3 }));
        queue.push(Box::new(Broken));

        let (busy, finished) = apply_all(&mut app, std::mem::take(&mut queue.pending));
        assert_eq!(busy.len(), 1);
        assert!(!finished);

        let (busy, finished) = apply_all(&mut app, busy);
        assert_eq!(busy.len(), 1);
        assert!(!finished);

        let (busy, finished) = apply_all(&mut app, busy);
        assert!(busy.is_empty());
        assert!(finished);
        assert_eq!(app.ticks, 3);
    }
}
