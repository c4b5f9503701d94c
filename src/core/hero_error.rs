use std::fmt;

#[derive(Debug)]
pub enum HeroError {
    InvalidOffset(String),
    InvalidKeyframes(String),
    InvalidColor(String),
    Settings(String),
}

impl fmt::Display for HeroError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeroError::InvalidOffset(msg) => write!(f, "invalid scroll offset: {}", msg),
            HeroError::InvalidKeyframes(msg) => write!(f, "invalid keyframes: {}", msg),
            HeroError::InvalidColor(msg) => write!(f, "invalid colour: {}", msg),
            HeroError::Settings(msg) => write!(f, "failed to load hero settings: {}", msg),
        }
    }
}

impl std::error::Error for HeroError {}

impl From<std::io::Error> for HeroError {
    fn from(error: std::io::Error) -> Self {
        HeroError::Settings(error.to_string())
    }
}

impl From<ron::de::SpannedError> for HeroError {
    fn from(error: ron::de::SpannedError) -> Self {
        HeroError::Settings(error.to_string())
    }
}
