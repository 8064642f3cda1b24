use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("failed to start '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with code {}:\n{stderr}", .code.map_or_else(|| "<signal>".to_string(), |c| c.to_string()))]
    Exit {
        program: String,
        code: Option<i32>,
        stderr: String,
    },
}
