mod temp_audio_file;

pub use temp_audio_file::TempAudioFile;
