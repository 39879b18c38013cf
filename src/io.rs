//! Reading and writing wav files over byte streams.
//!
//! The blocking functions work against [`embedded_io`] readers and writers,
//! the [`asynch`] module mirrors them for [`embedded_io_async`]. With the
//! `std` feature enabled, `File` adapts `std::fs::File` to both trait
//! families and `read_file`/`write_file` handle whole files by path.

use crate::error::{Error, ReadError, WriteError};
use crate::header::{HEADER_LEN, WavHeader};
use crate::wav::{Wav, decode_samples};
use alloc::vec;

/// Read a wav file from a reader
///
/// Consumes exactly 44 header bytes followed by the number of data bytes the
/// header declares; anything after that is left in the reader.
pub fn read_wav<R: embedded_io::Read>(reader: &mut R) -> Result<Wav, ReadError<R::Error>> {
    let mut header_bytes = [0; HEADER_LEN];
    let read = read_full(reader, &mut header_bytes).map_err(ReadError::Reader)?;
    if read < HEADER_LEN {
        return Err(ReadError::Parser(Error::TruncatedHeader));
    }

    let header = WavHeader::from_bytes(&header_bytes)?;
    header.validate()?;

    let mut data = vec![0; header.data_size as usize];
    let read = read_full(reader, &mut data).map_err(ReadError::Reader)?;
    if read < data.len() {
        return Err(ReadError::Parser(Error::TruncatedData {
            expected: header.data_size,
            found: read as u32,
        }));
    }

    let samples = decode_samples(&header, &data)?;

    Ok(Wav { header, samples })
}

/// Write a wav file to a writer and flush it
///
/// The header goes out first as its 44 byte layout, then the sample data.
pub fn write_wav<W: embedded_io::Write>(
    writer: &mut W,
    wav: &Wav,
) -> Result<(), WriteError<W::Error>> {
    let bytes = wav.to_bytes()?;

    writer.write_all(&bytes).map_err(WriteError::Writer)?;
    writer.flush().map_err(WriteError::Writer)?;

    Ok(())
}

/// Read into `buf` until it is full or the reader is exhausted, returning the
/// number of bytes read
fn read_full<R: embedded_io::Read>(reader: &mut R, buf: &mut [u8]) -> Result<usize, R::Error> {
    let mut total = 0;

    while total < buf.len() {
        match reader.read(&mut buf[total..])? {
            0 => break,
            n => total += n,
        }
    }

    Ok(total)
}

#[cfg(feature = "std")]
impl Wav {
    /// Read a wav file from a file path
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ReadError<FileError>> {
        read_file(path)
    }
}

/// Read a wav file from a file path
#[cfg(feature = "std")]
pub fn read_file(path: impl AsRef<std::path::Path>) -> Result<Wav, ReadError<FileError>> {
    let file = std::fs::File::open(path).map_err(|e| ReadError::Reader(FileError(e)))?;
    read_wav(&mut File(file))
}

/// Write a wav file to a file path
#[cfg(feature = "std")]
pub fn write_file(path: impl AsRef<std::path::Path>, wav: &Wav) -> Result<(), WriteError<FileError>> {
    let file = std::fs::File::create(path).map_err(|e| WriteError::Writer(FileError(e)))?;
    write_wav(&mut File(file), wav)
}

#[cfg(feature = "std")]
mod file_wrapper {
    use std::fs;
    use std::io::{Read, Write};

    /// Wrapper for std::fs::File implementing the embedded-io traits
    pub struct File(pub fs::File);

    #[doc(hidden)]
    #[derive(Debug)]
    pub struct FileError(pub std::io::Error);

    impl embedded_io::Error for FileError {
        fn kind(&self) -> embedded_io::ErrorKind {
            embedded_io::ErrorKind::Other
        }
    }

    impl embedded_io::ErrorType for File {
        type Error = FileError;
    }

    impl embedded_io::Read for File {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
            self.0.read(buf).map_err(|e| FileError(e))
        }
    }

    impl embedded_io::Write for File {
        fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
            self.0.write(buf).map_err(|e| FileError(e))
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.0.flush().map_err(|e| FileError(e))
        }
    }
}

#[cfg(feature = "std")]
pub use file_wrapper::{File, FileError};

//-----------------------------------
// MARK: Async

/// Async versions of the stream functions
pub mod asynch {
    use super::*;

    /// Read a wav file from an async reader
    pub async fn read_wav<R: embedded_io_async::Read>(
        reader: &mut R,
    ) -> Result<Wav, ReadError<R::Error>> {
        let mut header_bytes = [0; HEADER_LEN];
        let read = read_full(reader, &mut header_bytes)
            .await
            .map_err(ReadError::Reader)?;
        if read < HEADER_LEN {
            return Err(ReadError::Parser(Error::TruncatedHeader));
        }

        let header = WavHeader::from_bytes(&header_bytes)?;
        header.validate()?;

        let mut data = vec![0; header.data_size as usize];
        let read = read_full(reader, &mut data)
            .await
            .map_err(ReadError::Reader)?;
        if read < data.len() {
            return Err(ReadError::Parser(Error::TruncatedData {
                expected: header.data_size,
                found: read as u32,
            }));
        }

        let samples = decode_samples(&header, &data)?;

        Ok(Wav { header, samples })
    }

    /// Write a wav file to an async writer and flush it
    pub async fn write_wav<W: embedded_io_async::Write>(
        writer: &mut W,
        wav: &Wav,
    ) -> Result<(), WriteError<W::Error>> {
        let bytes = wav.to_bytes()?;

        writer.write_all(&bytes).await.map_err(WriteError::Writer)?;
        writer.flush().await.map_err(WriteError::Writer)?;

        Ok(())
    }

    async fn read_full<R: embedded_io_async::Read>(
        reader: &mut R,
        buf: &mut [u8],
    ) -> Result<usize, R::Error> {
        let mut total = 0;

        while total < buf.len() {
            match reader.read(&mut buf[total..]).await? {
                0 => break,
                n => total += n,
            }
        }

        Ok(total)
    }

    /// Read a wav file from a file path without blocking, backed by tokio
    #[cfg(feature = "std")]
    pub async fn read_file(
        path: impl AsRef<std::path::Path>,
    ) -> Result<Wav, ReadError<FileError>> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ReadError::Reader(FileError(e)))?;

        Wav::from_bytes(&bytes).map_err(ReadError::Parser)
    }

    /// Write a wav file to a file path without blocking, backed by tokio
    #[cfg(feature = "std")]
    pub async fn write_file(
        path: impl AsRef<std::path::Path>,
        wav: &Wav,
    ) -> Result<(), WriteError<FileError>> {
        let bytes = wav.to_bytes()?;

        tokio::fs::write(path, bytes)
            .await
            .map_err(|e| WriteError::Writer(FileError(e)))
    }
}

//-----------------------------------
// MARK: Tests
