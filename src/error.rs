#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Invalid door index: {0}")]
    InvalidDoorIndex(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
