use super::{
    AspectRatio, ColorPalette, ImageFile, ImageWeight, MagicPromptOption, Model, StyleType,
};

/// Request for `POST /v3/generate`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateImageRequest {
    /// Text prompt.
    pub prompt: String,
    /// Output aspect ratio.
    pub aspect_ratio: Option<AspectRatio>,
    /// Model version.
    pub model: Option<Model>,
    /// Prompt enhancement.
    pub magic_prompt_option: Option<MagicPromptOption>,
    /// Seed for reproducible output.
    pub seed: Option<u32>,
    /// Style type.
    pub style_type: Option<StyleType>,
    /// What to keep out of the image.
    pub negative_prompt: Option<String>,
    /// Number of images to generate, 1 to 8.
    pub num_images: Option<u32>,
    /// Color palette.
    pub color_palette: Option<ColorPalette>,
}

impl GenerateImageRequest {
    /// Creates a request with only a prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            aspect_ratio: None,
            model: None,
            magic_prompt_option: None,
            seed: None,
            style_type: None,
            negative_prompt: None,
            num_images: None,
            color_palette: None,
        }
    }

    /// Sets the aspect ratio.
    pub fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
        self.aspect_ratio = Some(aspect_ratio);
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the magic prompt option.
    pub fn with_magic_prompt(mut self, option: MagicPromptOption) -> Self {
        self.magic_prompt_option = Some(option);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the style type.
    pub fn with_style_type(mut self, style_type: StyleType) -> Self {
        self.style_type = Some(style_type);
        self
    }

    /// Sets the negative prompt.
    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    /// Sets the number of images.
    pub fn with_num_images(mut self, num_images: u32) -> Self {
        self.num_images = Some(num_images);
        self
    }

    /// Sets the color palette.
    pub fn with_color_palette(mut self, palette: impl Into<ColorPalette>) -> Self {
        self.color_palette = Some(palette.into());
        self
    }
}

/// Request for `POST /v3/edit`.
#[derive(Debug)]
pub struct EditImageRequest {
    /// Image to edit.
    pub image_file: ImageFile,
    /// Text prompt.
    pub prompt: String,
    /// Mask marking the region to edit.
    pub mask: Option<ImageFile>,
    /// Model version.
    pub model: Option<Model>,
    /// Prompt enhancement.
    pub magic_prompt_option: Option<MagicPromptOption>,
    /// Seed for reproducible output.
    pub seed: Option<u32>,
    /// Style type.
    pub style_type: Option<StyleType>,
}

impl EditImageRequest {
    /// Creates an edit request.
    pub fn new(image_file: impl Into<ImageFile>, prompt: impl Into<String>) -> Self {
        Self {
            image_file: image_file.into(),
            prompt: prompt.into(),
            mask: None,
            model: None,
            magic_prompt_option: None,
            seed: None,
            style_type: None,
        }
    }

    /// Sets the mask.
    pub fn with_mask(mut self, mask: impl Into<ImageFile>) -> Self {
        self.mask = Some(mask.into());
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the magic prompt option.
    pub fn with_magic_prompt(mut self, option: MagicPromptOption) -> Self {
        self.magic_prompt_option = Some(option);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the style type.
    pub fn with_style_type(mut self, style_type: StyleType) -> Self {
        self.style_type = Some(style_type);
        self
    }
}

/// Request for `POST /v3/remix`.
#[derive(Debug)]
pub struct RemixImageRequest {
    /// Source image.
    pub image_file: ImageFile,
    /// Text prompt.
    pub prompt: String,
    /// How closely to follow the source image.
    pub image_weight: Option<ImageWeight>,
    /// Model version.
    pub model: Option<Model>,
    /// Prompt enhancement.
    pub magic_prompt_option: Option<MagicPromptOption>,
    /// Seed for reproducible output.
    pub seed: Option<u32>,
    /// Style type.
    pub style_type: Option<StyleType>,
}

impl RemixImageRequest {
    /// Creates a remix request.
    pub fn new(image_file: impl Into<ImageFile>, prompt: impl Into<String>) -> Self {
        Self {
            image_file: image_file.into(),
            prompt: prompt.into(),
            image_weight: None,
            model: None,
            magic_prompt_option: None,
            seed: None,
            style_type: None,
        }
    }

    /// Sets the image weight.
    pub fn with_image_weight(mut self, weight: f64) -> Self {
        self.image_weight = Some(ImageWeight::new(weight));
        self
    }

    /// Sets the model.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = Some(model);
        self
    }

    /// Sets the magic prompt option.
    pub fn with_magic_prompt(mut self, option: MagicPromptOption) -> Self {
        self.magic_prompt_option = Some(option);
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the style type.
    pub fn with_style_type(mut self, style_type: StyleType) -> Self {
        self.style_type = Some(style_type);
        self
    }
}

/// Request for `POST /v3/describe`.
#[derive(Debug)]
pub struct DescribeImageRequest {
    /// Image to describe.
    pub image_file: ImageFile,
}

impl DescribeImageRequest {
    /// Creates a describe request.
    pub fn new(image_file: impl Into<ImageFile>) -> Self {
        Self {
            image_file: image_file.into(),
        }
    }
}
