/// Error type for different decoding, extraction and encoding failures
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// No RIFF tag found at the start of the header
    NoRiffTagFound,
    /// No WAVE tag found in the header
    NoWaveTagFound,
    /// Fewer bytes available than the fixed 44 byte header
    TruncatedHeader,
    /// Sample data ended before the size declared in the header
    TruncatedData {
        /// byte count the header declared
        expected: u32,
        /// byte count actually available
        found: u32,
    },
    /// Unsupported encoding, only integer PCM is supported
    UnsupportedFormat(u16),
    /// Unsupported bit depth
    UnsupportedBitDepth(u16),
    /// Channel count outside the 1..=6 range the format allows
    UnsupportedChannelCount(u16),
    /// Block align disagrees with the channel count and bit depth
    BlockAlignMismatch {
        /// value derived from the other header fields
        expected: u16,
        /// value found in the header
        found: u16,
    },
    /// Byte rate disagrees with the sample rate and block align
    ByteRateMismatch {
        /// value derived from the other header fields
        expected: u32,
        /// value found in the header
        found: u32,
    },
    /// File size disagrees with the data size
    FileSizeMismatch {
        /// value derived from the data size
        expected: u32,
        /// value found in the header
        found: u32,
    },
    /// Data size is not a whole number of frames
    UnalignedDataSize {
        /// byte length of the sample data
        data_size: u32,
        /// byte length of one frame
        block_align: u16,
    },
    /// Declared data size disagrees with the length of the sample buffer
    DataSizeMismatch {
        /// byte count the header declares
        declared: u32,
        /// byte count the sample buffer holds
        actual: u32,
    },
    /// Requested channel does not exist
    InvalidChannel(u16),
    /// Empty sample buffer
    EmptyData,
}

/// Error type for stream reads, splitting transport from parsing failures
#[cfg(feature = "io")]
#[derive(Debug, PartialEq, Eq)]
pub enum ReadError<E> {
    /// Error from the underlying reader
    Reader(E),
    /// Error from the parser
    Parser(Error),
}

#[cfg(feature = "io")]
impl<E> From<Error> for ReadError<E> {
    fn from(e: Error) -> Self {
        ReadError::Parser(e)
    }
}

/// Error type for stream writes, splitting transport from encoding failures
#[cfg(feature = "io")]
#[derive(Debug, PartialEq, Eq)]
pub enum WriteError<E> {
    /// Error from the underlying writer
    Writer(E),
    /// Error from the encoder
    Encoder(Error),
}

#[cfg(feature = "io")]
impl<E> From<Error> for WriteError<E> {
    fn from(e: Error) -> Self {
        WriteError::Encoder(e)
    }
}
