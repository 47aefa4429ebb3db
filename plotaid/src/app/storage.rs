use std::{collections::HashMap, path::Path};

use app_core::storage::Storage;
use serde::{Deserialize, Serialize};

use crate::{widgets::InputValue, EguiApp};

#[derive(Serialize, Deserialize)]
struct SessionStorage {
    page: usize,
    selections: Vec<[f64; 4]>,
    inputs: HashMap<String, Option<InputValue>>,
}

pub fn save_json(app: &EguiApp, path: Option<&Path>) -> Result<(), String> {
    let session = SessionStorage {
        page: app.page,
        selections: app.selector.data().to_vec(),
        inputs: app.button_bar.data().clone(),
    };
    Storage::new(session).save_json(path)
}

pub fn load_json(app: &mut EguiApp, path: Option<&Path>) -> Result<(), String> {
    let Storage::<SessionStorage> { session } = Storage::load_json(path)?;

    app.page = session.page % super::common::NUM_PAGES;
    app.selector.restore(session.selections);
    app.button_bar.restore(session.inputs);
    app.request_redraw();
    Ok(())
}
