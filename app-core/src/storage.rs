//! This module defines the `Storage` type which wraps the session state of an
//! app and provides methods to store/load it to/from a JSON file.

use serde::{Deserialize, Serialize};
use serde_json::{from_reader, to_writer};
use std::path::{Path, PathBuf};

use super::string_error::ErrorStringExt;

const STORAGE_FILE: &str = "./.plotaid_session.json";

#[derive(Serialize, Deserialize)]
pub struct Storage<T> {
    pub session: T,
}

impl<T> Storage<T>
where
    for<'a> T: Serialize + Deserialize<'a>,
{
    pub fn new(session: T) -> Self {
        Self { session }
    }

    pub fn save_json(&self, input_path: Option<&Path>) -> Result<(), String> {
        let output_path = resolve_path(input_path);
        let file =
            std::fs::File::create(&output_path).err_to_string("could not open storage file")?;
        to_writer(file, &self).err_to_string("could not save session to json")?;
        log::debug!("saved session to file {:?}", output_path.canonicalize());
        Ok(())
    }

    pub fn load_json(input_path: Option<&Path>) -> Result<Storage<T>, String> {
        let input_path = resolve_path(input_path);
        let file = std::fs::File::open(&input_path).err_to_string("could not open storage file")?;
        let storage = from_reader(file).err_to_string("could not load session from storage file")?;
        log::debug!("loaded session from file {:?}", input_path);
        Ok(storage)
    }
}

fn resolve_path(path: Option<&Path>) -> PathBuf {
    match path {
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(STORAGE_FILE),
    }
}
