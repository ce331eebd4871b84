use imagelab_engine::EngineError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("File extension is necessary.")]
    MissingExtension,

    #[error("Unsupported file format: {0}. Supported formats are ppm, png, jpg, jpeg and bmp")]
    UnsupportedFormat(String),

    #[error("Invalid PPM file: {0}")]
    PpmParse(String),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Image codec error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported PNG layout: {0}")]
    UnsupportedLayout(String),

    #[error("Image too large: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Invalid command")]
    UnknownCommand,

    #[error("Invalid command format")]
    InvalidFormat,

    #[error("Script file not found: {}", .0.display())]
    ScriptNotFound(PathBuf),

    #[error("Scripts nested deeper than {0} levels")]
    ScriptDepth(usize),

    #[error("Failed to load the image at filepath: {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error("Failed to save the image at filepath: {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: CodecError,
    },

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
