pub mod error;
pub mod llm;

pub use error::{GroqVisionError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{GroqVisionError, Result};
    pub use crate::llm::{
        ContentPart, EncodedImage, GroqClient, GroqConfig, LlmMessage, MessageRole,
        DEFAULT_VISION_MODEL,
    };
}
