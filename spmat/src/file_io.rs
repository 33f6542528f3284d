//! File I/O for .spmat files
//!
//! Reading always decodes into a fresh container; nothing is handed back (or
//! swapped into a load target) until the whole file has been validated.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};
use spmat_core::{
    decode, encode, read_header, MatrixElement, MatrixOperations, SparseGraph, SparseMatrix,
    SpmatError, TextHeader,
};

use crate::error::{Error, Result};

/// Options controlling how a container is written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SaveOptions {
    sync: bool,
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flush the file to stable storage before returning
    pub fn with_sync(mut self, sync: bool) -> Self {
        self.sync = sync;
        self
    }

    pub fn sync(&self) -> bool {
        self.sync
    }
}

/// File handle for .spmat files
#[derive(Debug, Clone)]
pub struct SpmatFile {
    pub header: TextHeader,
    pub path: PathBuf,
}

impl SpmatFile {
    /// Open an existing file and parse its header only
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let mut reader = BufReader::new(file);

        let mut head = Vec::new();
        for _ in 0..2 {
            let read = reader
                .read_until(b'\n', &mut head)
                .map_err(|e| Error::io(path, e))?;
            if read == 0 {
                break;
            }
        }
        let header = read_header(utf8(path, &head)?)?;

        Ok(Self {
            header,
            path: path.to_path_buf(),
        })
    }

    /// Write a matrix or graph with default options
    pub fn write_matrix<M, P>(path: P, matrix: &M) -> Result<()>
    where
        M: MatrixOperations,
        P: AsRef<Path>,
    {
        Self::write_matrix_with(path, matrix, &SaveOptions::default())
    }

    /// Write a matrix or graph
    ///
    /// The whole body is encoded before the destination is touched, so an
    /// unwritable path fails without leaving a partial file behind it.
    pub fn write_matrix_with<M, P>(path: P, matrix: &M, options: &SaveOptions) -> Result<()>
    where
        M: MatrixOperations,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let text = encode(matrix);

        let mut file = File::create(path).map_err(|e| Error::io(path, e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| Error::io(path, e))?;
        if options.sync() {
            file.sync_all().map_err(|e| Error::io(path, e))?;
        }

        let (nrows, ncols) = matrix.dimensions();
        debug!(
            "wrote {}: {}x{} {} ({} nnz, {} bytes)",
            path.display(),
            nrows,
            ncols,
            M::Element::data_type(),
            matrix.nnz(),
            text.len()
        );
        Ok(())
    }

    /// Read a whole file into a fresh matrix
    pub fn read_matrix<T, P>(path: P) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| Error::io(path, e))?;
        decode_logged(path, utf8(path, &bytes)?)
    }

    /// Read a whole file into a fresh graph; the stored shape must be square
    pub fn read_graph<T, P>(path: P) -> Result<SparseGraph<T>>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let matrix = Self::read_matrix(path)?;
        SparseGraph::try_from(matrix).map_err(|e| {
            warn!("load of {} rejected: {e}", path.display());
            Error::from(e)
        })
    }

    /// Read a file through a memory map instead of a heap buffer
    #[cfg(feature = "mmap")]
    pub fn read_matrix_mmap<T, P>(path: P) -> Result<SparseMatrix<T>>
    where
        T: MatrixElement,
        P: AsRef<Path>,
    {
        use memmap2::Mmap;

        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        let len = file.metadata().map_err(|e| Error::io(path, e))?.len();
        if len == 0 {
            // Zero-length maps are rejected on some platforms
            return decode_logged(path, "");
        }

        // SAFETY: the map is read-only and dropped before returning; callers
        // must not truncate the file while it is being decoded
        let mmap = unsafe { Mmap::map(&file) }.map_err(|e| Error::io(path, e))?;
        decode_logged(path, utf8(path, &mmap)?)
    }
}

/// File contents as text; anything but UTF-8 is malformed content
fn utf8<'a>(path: &Path, bytes: &'a [u8]) -> Result<&'a str> {
    std::str::from_utf8(bytes).map_err(|e| {
        warn!("load of {} rejected: {e}", path.display());
        Error::from(SpmatError::InvalidEncoding)
    })
}

fn decode_logged<T: MatrixElement>(path: &Path, text: &str) -> Result<SparseMatrix<T>> {
    match decode(text) {
        Ok(matrix) => {
            debug!(
                "read {}: {}x{} ({} nnz)",
                path.display(),
                matrix.nrows(),
                matrix.ncols(),
                matrix.nnz()
            );
            Ok(matrix)
        }
        Err(e) => {
            warn!("load of {} rejected: {e}", path.display());
            Err(e.into())
        }
    }
}

/// Save and load for the in-memory containers
pub trait Persist: Sized {
    /// Write to `path` with default options
    fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.save_with(path, &SaveOptions::default())
    }

    fn save_with<P: AsRef<Path>>(&self, path: P, options: &SaveOptions) -> Result<()>;

    /// Replace `self` with the contents of `path`
    ///
    /// On failure `self` is left exactly as it was.
    fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()>;
}

impl<T: MatrixElement> Persist for SparseMatrix<T> {
    fn save_with<P: AsRef<Path>>(&self, path: P, options: &SaveOptions) -> Result<()> {
        SpmatFile::write_matrix_with(path, self, options)
    }

    fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        *self = SpmatFile::read_matrix(path)?;
        Ok(())
    }
}

impl<T: MatrixElement> Persist for SparseGraph<T> {
    fn save_with<P: AsRef<Path>>(&self, path: P, options: &SaveOptions) -> Result<()> {
        SpmatFile::write_matrix_with(path, self, options)
    }

    fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        *self = SpmatFile::read_graph(path)?;
        Ok(())
    }
}
