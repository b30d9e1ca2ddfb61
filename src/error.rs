use std::{error, fmt, path::PathBuf};

#[derive(Debug, derive_more::From)]
pub enum ZError {
    ScreenError(zscreen::Error),
    RonDeserializeError {
        error: ron::de::Error,
        path: PathBuf,
    },
}

impl ZError {
    pub fn from_ron_de_error(error: ron::de::Error, path: PathBuf) -> Self {
        ZError::RonDeserializeError { error, path }
    }
}

impl fmt::Display for ZError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ZError::ScreenError(ref e) => write!(f, "ZScreen Error: {}", e),
            ZError::RonDeserializeError { error, path } => {
                let s = path.to_str().unwrap_or("<no path>");
                write!(f, "Can't deserialize '{}': {}", s, error)
            }
        }
    }
}

impl error::Error for ZError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ZError::ScreenError(ref e) => Some(e),
            ZError::RonDeserializeError { error, .. } => Some(error),
        }
    }
}
