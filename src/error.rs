use thiserror::Error;

/// Validation failures of the layout input.
///
/// Cycles, self-loops and empty input are not errors; the engine handles
/// them on its own.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("Edge '{from}' -> '{to}' references unknown task '{task}'")]
    UnknownTask {
        task: String,
        from: String,
        to: String,
    },

    #[error("Task '{0}' appears more than once in the task list")]
    DuplicateTask(String),

    #[error("Unknown {option} '{value}'; use one of: {expected}")]
    InvalidOption {
        option: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Failures while reading a layout request (CLI / WASM input).
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Couldn't parse JSON request.\n{0}")]
    Json(#[from] serde_json::Error),

    #[error("Line {line}: '{text}' is not a task name or an 'A -> B' edge")]
    Syntax { line: usize, text: String },

    #[error(transparent)]
    Layout(#[from] LayoutError),
}
