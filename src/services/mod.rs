//! Service implementations for the Ideogram API.

mod images;
mod validation;

pub use images::ImageService;
pub use validation::{ImageRequestValidator, MAX_NUM_IMAGES, MAX_PROMPT_LENGTH};
