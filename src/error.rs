#[derive(Debug, thiserror::Error)]
pub enum TeamNamerError {
    #[error("cannot pick from an empty sequence")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, TeamNamerError>;
