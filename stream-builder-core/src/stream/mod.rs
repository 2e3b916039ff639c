pub mod audio_stream;
pub mod registry;
