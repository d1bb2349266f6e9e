use crate::types::ObdVersion;

#[derive(Debug, thiserror::Error)]
pub enum ObdError {
    #[error("No encoder is implemented for {version:?}")]
    UnsupportedVersion { version: ObdVersion },
    #[error("Thing has no default frame group")]
    MissingDefaultFrameGroup,
    #[error("Thing has no sprite list for the default frame group")]
    MissingDefaultSprites,
    #[error("Frame group declares {frames} frames but carries no animation data")]
    MissingAnimation { frames: u8 },
    #[error("Animated group declares {frames} frames but carries {durations} frame durations")]
    MismatchedFrameDurations { frames: usize, durations: usize },
    #[error("Market name does not fit a 16-bit length prefix: {length} bytes")]
    MarketNameTooLong { length: usize },
    #[error("IOError: {source}")]
    IOError {
        #[from]
        source: std::io::Error,
    },
}
