use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Document(#[from] svgr::Error),

    #[error("cairo error: {0:?}")]
    Cairo(cairo::Status),

    #[error("could not capture raster: {0}")]
    Capture(String),

    #[error("could not export document: {0}")]
    Export(String),
}
