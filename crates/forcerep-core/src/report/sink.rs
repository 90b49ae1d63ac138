use super::error::ReportError;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where a reporter writes its rows.
pub enum OutputSink {
    /// A file, created or truncated on open (or appended to in append mode).
    Path(PathBuf),
    /// An already open handle, such as stdout or an in-memory buffer.
    Writer(Box<dyn Write + Send>),
}

impl OutputSink {
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        OutputSink::Writer(Box::new(writer))
    }

    pub fn stdout() -> Self {
        Self::writer(std::io::stdout())
    }

    pub(crate) fn open(self, append: bool) -> Result<Box<dyn Write + Send>, ReportError> {
        match self {
            OutputSink::Path(path) => {
                let file = OpenOptions::new()
                    .write(true)
                    .create(true)
                    .append(append)
                    .truncate(!append)
                    .open(&path)?;
                Ok(Box::new(BufWriter::new(file)))
            }
            OutputSink::Writer(writer) => Ok(writer),
        }
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputSink::Path(path) => f.debug_tuple("Path").field(path).finish(),
            OutputSink::Writer(_) => f.write_str("Writer(..)"),
        }
    }
}

impl From<PathBuf> for OutputSink {
    fn from(path: PathBuf) -> Self {
        OutputSink::Path(path)
    }
}

impl From<&Path> for OutputSink {
    fn from(path: &Path) -> Self {
        OutputSink::Path(path.to_path_buf())
    }
}

impl From<&str> for OutputSink {
    fn from(path: &str) -> Self {
        OutputSink::Path(PathBuf::from(path))
    }
}
