use crate::error::Error;

/// Size in bytes of the fixed RIFF/WAVE header
pub const HEADER_LEN: usize = 44;

/// Maximum number of channels the format allows
pub const MAX_CHANNELS: u16 = 6;

/// Size in bytes of the `fmt ` chunk body for PCM
const FMT_CHUNK_LEN: u32 = 16;

/// Format tag for integer PCM, the only supported encoding
const FORMAT_PCM: u16 = 1;

/// Struct representing the fixed 44 byte header of a canonical PCM wav file
///
/// The layout is a single RIFF chunk holding one `fmt ` and one `data` chunk,
/// for more information see [`here`]
///
/// The four constant tags are not stored; [`WavHeader::from_bytes`] checks
/// them and [`WavHeader::to_bytes`] writes them back.
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    /// total file size minus 8 bytes
    pub file_size: u32,
    /// size of the `fmt ` chunk body, `16` for PCM
    pub fmt_chunk_size: u32,
    /// storage format, `1` for integer PCM
    pub audio_format: u16,
    /// number of interleaved channels, 1 to 6
    pub num_channels: u16,
    /// sample rate, typical values are `22_050`, `44_100` or `48_000`
    pub sample_rate: u32,
    /// number of data bytes per second of playback
    pub byte_rate: u32,
    /// byte count of one frame, one sample for every channel
    pub block_align: u16,
    /// bits used for coding each sample, `8` or `16`
    pub bits_per_sample: u16,
    /// byte length of the sample data following the header
    pub data_size: u32,
}

impl WavHeader {
    /// Create a header for `data_size` bytes of sample data, deriving the
    /// dependent fields
    pub fn new(
        sample_rate: u32,
        num_channels: u16,
        bits_per_sample: u16,
        data_size: u32,
    ) -> Result<Self, Error> {
        if num_channels == 0 || num_channels > MAX_CHANNELS {
            return Err(Error::UnsupportedChannelCount(num_channels));
        }

        if bits_per_sample != 8 && bits_per_sample != 16 {
            return Err(Error::UnsupportedBitDepth(bits_per_sample));
        }

        let block_align = num_channels * (bits_per_sample / 8);

        if data_size % block_align as u32 != 0 {
            return Err(Error::UnalignedDataSize {
                data_size,
                block_align,
            });
        }

        Ok(WavHeader {
            file_size: data_size + HEADER_LEN as u32 - 8,
            fmt_chunk_size: FMT_CHUNK_LEN,
            audio_format: FORMAT_PCM,
            num_channels,
            sample_rate,
            byte_rate: sample_rate * block_align as u32,
            block_align,
            bits_per_sample,
            data_size,
        })
    }

    /// Parse a header from its 44 byte representation
    ///
    /// Only the RIFF and WAVE tags are checked here, use
    /// [`WavHeader::validate`] to check the field invariants.
    pub fn from_bytes(bytes: &[u8; HEADER_LEN]) -> Result<Self, Error> {
        if &bytes[0..4] != b"RIFF" {
            return Err(Error::NoRiffTagFound);
        }

        if &bytes[8..12] != b"WAVE" {
            return Err(Error::NoWaveTagFound);
        }

        Ok(WavHeader {
            file_size: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            fmt_chunk_size: u32::from_le_bytes([bytes[16], bytes[17], bytes[18], bytes[19]]),
            audio_format: u16::from_le_bytes([bytes[20], bytes[21]]),
            num_channels: u16::from_le_bytes([bytes[22], bytes[23]]),
            sample_rate: u32::from_le_bytes([bytes[24], bytes[25], bytes[26], bytes[27]]),
            byte_rate: u32::from_le_bytes([bytes[28], bytes[29], bytes[30], bytes[31]]),
            block_align: u16::from_le_bytes([bytes[32], bytes[33]]),
            bits_per_sample: u16::from_le_bytes([bytes[34], bytes[35]]),
            data_size: u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
        })
    }

    /// Convert the header into its 44 byte representation
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut bytes = [0; HEADER_LEN];

        bytes[0..4].copy_from_slice(b"RIFF");
        bytes[4..8].copy_from_slice(&self.file_size.to_le_bytes());
        bytes[8..12].copy_from_slice(b"WAVE");
        bytes[12..16].copy_from_slice(b"fmt ");
        bytes[16..20].copy_from_slice(&self.fmt_chunk_size.to_le_bytes());
        bytes[20..22].copy_from_slice(&self.audio_format.to_le_bytes());
        bytes[22..24].copy_from_slice(&self.num_channels.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.sample_rate.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.byte_rate.to_le_bytes());
        bytes[32..34].copy_from_slice(&self.block_align.to_le_bytes());
        bytes[34..36].copy_from_slice(&self.bits_per_sample.to_le_bytes());
        bytes[36..40].copy_from_slice(b"data");
        bytes[40..44].copy_from_slice(&self.data_size.to_le_bytes());

        bytes
    }

    /// Check the invariants that tie the header fields together
    ///
    /// A header passing this check describes integer PCM, stays inside the
    /// channel and bit depth bounds, and has `block_align`, `byte_rate`,
    /// `file_size` and `data_size` agreeing with each other.
    pub fn validate(&self) -> Result<(), Error> {
        if self.audio_format != FORMAT_PCM {
            return Err(Error::UnsupportedFormat(self.audio_format));
        }

        if self.num_channels == 0 || self.num_channels > MAX_CHANNELS {
            return Err(Error::UnsupportedChannelCount(self.num_channels));
        }

        if self.bits_per_sample != 8 && self.bits_per_sample != 16 {
            return Err(Error::UnsupportedBitDepth(self.bits_per_sample));
        }

        let block_align = self.num_channels * (self.bits_per_sample / 8);
        if self.block_align != block_align {
            return Err(Error::BlockAlignMismatch {
                expected: block_align,
                found: self.block_align,
            });
        }

        let byte_rate = self.sample_rate * self.block_align as u32;
        if self.byte_rate != byte_rate {
            return Err(Error::ByteRateMismatch {
                expected: byte_rate,
                found: self.byte_rate,
            });
        }

        let file_size = self.data_size + HEADER_LEN as u32 - 8;
        if self.file_size != file_size {
            return Err(Error::FileSizeMismatch {
                expected: file_size,
                found: self.file_size,
            });
        }

        if self.data_size % self.block_align as u32 != 0 {
            return Err(Error::UnalignedDataSize {
                data_size: self.data_size,
                block_align: self.block_align,
            });
        }

        Ok(())
    }

    /// Number of frames in the sample data, one sample per channel each
    pub fn frames(&self) -> u32 {
        if self.block_align == 0 {
            0
        } else {
            self.data_size / self.block_align as u32
        }
    }

    /// Playback length in whole seconds, truncated
    pub fn duration_secs(&self) -> u32 {
        if self.byte_rate == 0 {
            0
        } else {
            self.data_size / self.byte_rate
        }
    }

    pub(crate) fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_derives_dependent_fields() {
        let header = WavHeader::new(44_100, 2, 16, 400).unwrap();

        assert_eq!(header.file_size, 436);
        assert_eq!(header.fmt_chunk_size, 16);
        assert_eq!(header.audio_format, 1);
        assert_eq!(header.block_align, 4);
        assert_eq!(header.byte_rate, 176_400);
        assert_eq!(header.frames(), 100);
        assert!(header.validate().is_ok());
    }

    #[test]
    fn new_rejects_bad_arguments() {
        assert_eq!(
            WavHeader::new(44_100, 0, 16, 0),
            Err(Error::UnsupportedChannelCount(0))
        );
        assert_eq!(
            WavHeader::new(44_100, 7, 16, 0),
            Err(Error::UnsupportedChannelCount(7))
        );
        assert_eq!(
            WavHeader::new(44_100, 2, 24, 0),
            Err(Error::UnsupportedBitDepth(24))
        );
        assert_eq!(
            WavHeader::new(44_100, 2, 16, 402),
            Err(Error::UnalignedDataSize {
                data_size: 402,
                block_align: 4,
            })
        );
    }

    #[test]
    fn parse_header_16_bit_stereo() {
        let bytes: [u8; 44] = [
            0x52, 0x49, 0x46, 0x46, // RIFF
            0x34, 0x00, 0x00, 0x00, // file size
            0x57, 0x41, 0x56, 0x45, // WAVE
            0x66, 0x6d, 0x74, 0x20, // fmt_
            0x10, 0x00, 0x00, 0x00, // chunk size
            0x01, 0x00, // audio format
            0x02, 0x00, // num channels
            0x22, 0x56, 0x00, 0x00, // sample rate
            0x88, 0x58, 0x01, 0x00, // byte rate
            0x04, 0x00, // block align
            0x10, 0x00, // bits per sample
            0x64, 0x61, 0x74, 0x61, // data
            0x10, 0x00, 0x00, 0x00, // data size
        ];

        let header = WavHeader::from_bytes(&bytes).unwrap();

        assert_eq!(header.file_size, 0x34);
        assert_eq!(header.fmt_chunk_size, 16);
        assert_eq!(header.audio_format, 1);
        assert_eq!(header.num_channels, 2);
        assert_eq!(header.sample_rate, 22_050);
        assert_eq!(header.byte_rate, 88_200);
        assert_eq!(header.block_align, 4);
        assert_eq!(header.bits_per_sample, 16);
        assert_eq!(header.data_size, 16);
        assert!(header.validate().is_ok());
        assert_eq!(header.to_bytes(), bytes);
    }

    #[test]
    fn parse_header_missing_tags() {
        let mut bytes = WavHeader::new(48_000, 1, 16, 8).unwrap().to_bytes();
        bytes[0..4].copy_from_slice(b"RIFX");
        assert_eq!(WavHeader::from_bytes(&bytes), Err(Error::NoRiffTagFound));

        let mut bytes = WavHeader::new(48_000, 1, 16, 8).unwrap().to_bytes();
        bytes[8..12].copy_from_slice(b"AIFF");
        assert_eq!(WavHeader::from_bytes(&bytes), Err(Error::NoWaveTagFound));
    }

    #[test]
    fn validate_catches_field_mismatches() {
        let mut header = WavHeader::new(48_000, 2, 16, 1_600).unwrap();
        header.audio_format = 3;
        assert_eq!(header.validate(), Err(Error::UnsupportedFormat(3)));

        let mut header = WavHeader::new(48_000, 2, 16, 1_600).unwrap();
        header.block_align = 2;
        assert_eq!(
            header.validate(),
            Err(Error::BlockAlignMismatch {
                expected: 4,
                found: 2,
            })
        );

        let mut header = WavHeader::new(48_000, 2, 16, 1_600).unwrap();
        header.byte_rate = 96_000;
        assert_eq!(
            header.validate(),
            Err(Error::ByteRateMismatch {
                expected: 192_000,
                found: 96_000,
            })
        );

        let mut header = WavHeader::new(48_000, 2, 16, 1_600).unwrap();
        header.file_size = 1_600;
        assert_eq!(
            header.validate(),
            Err(Error::FileSizeMismatch {
                expected: 1_636,
                found: 1_600,
            })
        );
    }

    #[test]
    fn duration_truncates_to_whole_seconds() {
        // three and a half seconds of mono audio at 8kHz
        let header = WavHeader::new(8_000, 1, 16, 56_000).unwrap();
        assert_eq!(header.duration_secs(), 3);

        let header = WavHeader::new(8_000, 1, 16, 0).unwrap();
        assert_eq!(header.duration_secs(), 0);
    }
}
