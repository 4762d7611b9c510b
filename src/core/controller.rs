use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub(crate) struct AppState {
    pub(crate) config: Configuration,
    pub(crate) store: RepositoryStore,
}

impl AppState {
    pub fn new(branch: &str, store: RepositoryStore) -> AppState {
        AppState {
            config: Configuration::new(branch),
            store,
        }
    }
}

// Exit code plus diagnostic, reported at the process boundary.
// Codes follow the sysexits convention.
pub(crate) type SessionError = (i32, String);

pub fn io_to_session_error(err: std::io::Error) -> SessionError {
    (74, format!("{}", err))
}

impl From<CommandError> for SessionError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (66, format!("{:?}", err))
            }
            CommandError::Parse { .. } => {
                (65, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (65, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (65, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (70, format!("{:?}", err))
            }
            CommandError::Other { .. } => {
                (70, format!("{:?}", err))
            }
        }
    }
}
