//! Basic `no_std` library for parsing, channel extraction and creation of
//! PCM wav files.
//!
//! Only the canonical layout is supported: a 44 byte header holding a single
//! `fmt ` and a single `data` chunk, followed by interleaved little-endian
//! 16 bit integer samples.
//!
//! Reading a wav file:
//! ```
//! use std::fs;
//! use std::path::Path;
//! use wavex::Wav;
//!
//! fn main() {
//!     let bytes = fs::read(Path::new("./test_files/stereo_16_44100.wav")).unwrap();
//!     let wav = Wav::from_bytes(&bytes).unwrap();
//!
//!     assert_eq!(wav.header.num_channels, 2);
//!     assert_eq!(wav.header.bits_per_sample, 16);
//!     assert_eq!(wav.header.sample_rate, 44_100);
//!
//!     println!("{} seconds of audio", wav.duration_secs());
//! }
//! ```
//!
//! Pulling one channel out of an interleaved file as a new mono file:
//! ```
//! use std::fs;
//! use wavex::Wav;
//!
//! fn main() {
//!     let bytes = fs::read("./test_files/stereo_16_44100.wav").unwrap();
//!     let wav = Wav::from_bytes(&bytes).unwrap();
//!
//!     // channel 0 is the left channel, take every frame
//!     let left = wav.extract_channel(0, None).unwrap();
//!
//!     assert_eq!(left.header.num_channels, 1);
//!     assert_eq!(left.samples.len() as u32, wav.header.frames());
//! }
//! ```
//!
//! Writing a wav file:
//! ```
//! use std::fs::File;
//! use std::io::Write;
//! use std::path::Path;
//! use wavex::Wav;
//!
//! fn main() {
//!     // Enjoy the silence
//!     let wav = Wav::from_samples(vec![0; 44_100], 44_100, 1).unwrap();
//!
//!     let path = Path::new("silence.wav");
//!     let mut file = File::create(&path).unwrap();
//!     file.write_all(&wav.to_bytes().unwrap()).unwrap();
//!     # std::fs::remove_file(&path).unwrap();
//! }
//! ```

#![cfg_attr(all(not(test), not(feature = "std")), no_std)]
#![warn(missing_docs)]

extern crate alloc;

mod error;
mod header;
mod wav;

pub use error::Error;
pub use header::{HEADER_LEN, MAX_CHANNELS, WavHeader};
pub use wav::Wav;

#[cfg(feature = "io")]
pub mod io;
#[cfg(feature = "io")]
pub use error::{ReadError, WriteError};
