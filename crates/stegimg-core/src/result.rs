use crate::error::StegImgError;

pub type Result<T> = std::result::Result<T, StegImgError>;
