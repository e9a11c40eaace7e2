pub mod groq;
pub mod images;
pub mod models;

pub use groq::{GroqClient, GroqConfig, DEFAULT_VISION_MODEL, GROQ_API_URL};
pub use images::EncodedImage;
pub use models::{ContentPart, ImageUrl, LlmMessage, MessageRole};
