//! Request, response and enumeration types for the Ideogram API.

mod enums;
mod image_file;
mod palette;
mod requests;
mod responses;

pub use enums::{AspectRatio, ColorPalettePreset, MagicPromptOption, Model, StyleType};
pub use image_file::{ImageFile, ImageSource, DEFAULT_IMAGE_FILENAME, DEFAULT_MASK_FILENAME};
pub use palette::{ColorPalette, ColorPaletteMember, ImageWeight};
pub use requests::{
    DescribeImageRequest, EditImageRequest, GenerateImageRequest, RemixImageRequest,
};
pub use responses::{DescribeResponse, DescriptionData, ImageData, ImageResponse};
