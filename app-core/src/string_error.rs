use std::fmt::Display;

/// Turn any displayable error into a `String` error, prefixed with some context.
pub trait ErrorStringExt<T> {
    fn err_to_string(self, msg: &str) -> Result<T, String>;
}

impl<T, E: Display> ErrorStringExt<T> for Result<T, E> {
    fn err_to_string(self, msg: &str) -> Result<T, String> {
        self.map_err(|err| format!("{msg}: {err}"))
    }
}
