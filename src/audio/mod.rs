pub mod capture;
pub mod file;
pub mod wav;

pub use capture::{AudioCapture, MemoryCapture};
pub use file::AudioFile;
pub use wav::{encode_wav, sample_to_i16};
