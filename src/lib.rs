//! Ideogram Client Library
//!
//! A typed Rust client for the Ideogram image-generation API. Supports
//! generating images from a prompt, editing an image with an optional mask,
//! remixing an image, and describing an image in text.
//!
//! # Features
//!
//! - **Local validation**: blank or oversized prompts and unreadable images
//!   are rejected before any network call
//! - **Typed requests**: every wire enumeration is a Rust enum
//! - **Uniform errors**: one [`IdeogramError`] type carrying the HTTP status
//!   and provider error code where available
//! - **Cancellation**: every operation has a variant taking a
//!   [`CancellationToken`](tokio_util::sync::CancellationToken)
//! - **Observability**: `tracing` spans per operation
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use integrations_ideogram::{GenerateImageRequest, IdeogramClient, Model, StyleType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IdeogramClient::builder()
//!         .api_key("your_api_key")
//!         .build()?;
//!
//!     let request = GenerateImageRequest::new("A cozy cabin in a snowy forest")
//!         .with_model(Model::V2)
//!         .with_style_type(StyleType::Realistic)
//!         .with_num_images(2);
//!
//!     let response = client.images().generate(request).await?;
//!     for image in &response.data {
//!         println!("{} ({})", image.url, image.resolution);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Editing with a mask
//!
//! ```rust,no_run
//! use integrations_ideogram::{EditImageRequest, IdeogramClient, ImageFile};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = IdeogramClient::from_api_key("your_api_key")?;
//!
//!     let request = EditImageRequest::new(ImageFile::from_path("photo.png"), "Add a red hat")
//!         .with_mask(ImageFile::from_path("mask.png"));
//!
//!     let response = client.images().edit(request).await?;
//!     println!("{} image(s)", response.data.len());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;
pub mod types;

// Re-exports for convenience
pub use client::{IdeogramClient, IdeogramClientBuilder};
pub use config::IdeogramConfig;
pub use errors::{IdeogramError, IdeogramResult};
pub use services::ImageService;

pub use types::{
    AspectRatio, ColorPalette, ColorPaletteMember, ColorPalettePreset, DescribeImageRequest,
    DescribeResponse, DescriptionData, EditImageRequest, GenerateImageRequest, ImageData,
    ImageFile, ImageResponse, ImageWeight, MagicPromptOption, Model, RemixImageRequest, StyleType,
};

pub use tokio_util::sync::CancellationToken;

/// Mock implementations for testing.
#[cfg(any(test, feature = "mocks"))]
pub mod mocks;
