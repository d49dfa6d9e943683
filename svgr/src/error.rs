use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open {}: {source}", path.display())]
    Open {
	path: PathBuf,
	#[source]
	source: io::Error,
    },

    #[error("could not read svg content: {0}")]
    Read(#[source] io::Error),

    #[error("svg parse error: {0}")]
    Parse(String),
}
