use super::mello_error::MelloError;

pub type MelloResult<T> = Result<T, MelloError>;
