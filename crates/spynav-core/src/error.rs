use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("mismatched section lists: {headings} headings, {contents} contents")]
    SectionMismatch { headings: usize, contents: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
