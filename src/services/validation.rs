use crate::errors::{IdeogramError, IdeogramResult};
use crate::types::{ColorPalette, GenerateImageRequest, ImageWeight};

/// Maximum prompt length, in characters.
pub const MAX_PROMPT_LENGTH: usize = 10_000;

/// Maximum number of images per generate call.
pub const MAX_NUM_IMAGES: u32 = 8;

/// Checks request fields that can be judged without touching byte sources.
pub struct ImageRequestValidator;

impl ImageRequestValidator {
    /// Validates a prompt: non-blank and at most [`MAX_PROMPT_LENGTH`] characters.
    pub fn validate_prompt(prompt: &str) -> IdeogramResult<()> {
        if prompt.trim().is_empty() {
            return Err(IdeogramError::validation_param(
                "Prompt cannot be null or empty",
                "prompt",
            ));
        }

        if prompt.chars().count() > MAX_PROMPT_LENGTH {
            return Err(IdeogramError::validation_param(
                format!(
                    "Prompt exceeds maximum length of {} characters",
                    MAX_PROMPT_LENGTH
                ),
                "prompt",
            ));
        }

        Ok(())
    }

    /// Validates every field of a generate request.
    pub fn validate_generate(request: &GenerateImageRequest) -> IdeogramResult<()> {
        Self::validate_prompt(&request.prompt)?;

        if let Some(n) = request.num_images {
            if !(1..=MAX_NUM_IMAGES).contains(&n) {
                return Err(IdeogramError::validation_param(
                    format!("num_images must be between 1 and {}", MAX_NUM_IMAGES),
                    "num_images",
                ));
            }
        }

        if let Some(ref palette) = request.color_palette {
            Self::validate_color_palette(palette)?;
        }

        Ok(())
    }

    /// Validates a remix image weight.
    pub fn validate_image_weight(weight: &ImageWeight) -> IdeogramResult<()> {
        if !(0.0..=1.0).contains(&weight.weight) {
            return Err(IdeogramError::validation_param(
                "image_weight must be between 0.0 and 1.0",
                "image_weight",
            ));
        }
        Ok(())
    }

    /// Validates a color palette: exactly one of preset or members, and
    /// well-formed members.
    pub fn validate_color_palette(palette: &ColorPalette) -> IdeogramResult<()> {
        let members = match (&palette.name, &palette.members) {
            (Some(_), Some(_)) => {
                return Err(IdeogramError::validation_param(
                    "Color palette cannot have both a preset name and members",
                    "color_palette",
                ))
            }
            (None, None) => {
                return Err(IdeogramError::validation_param(
                    "Color palette requires a preset name or members",
                    "color_palette",
                ))
            }
            (Some(_), None) => return Ok(()),
            (None, Some(members)) => members,
        };

        if members.is_empty() {
            return Err(IdeogramError::validation_param(
                "Color palette members cannot be empty",
                "color_palette",
            ));
        }

        for (i, member) in members.iter().enumerate() {
            if !is_hex_color(&member.color) {
                return Err(IdeogramError::validation_param(
                    format!("Invalid hex color: {}", member.color),
                    format!("color_palette.members[{}].color", i),
                ));
            }

            if let Some(weight) = member.weight {
                if !(0.0..=1.0).contains(&weight) {
                    return Err(IdeogramError::validation_param(
                        "Color weight must be between 0.0 and 1.0",
                        format!("color_palette.members[{}].weight", i),
                    ));
                }
            }
        }

        Ok(())
    }
}

fn is_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ColorPaletteMember, ColorPalettePreset};
    use test_case::test_case;

    #[test_case(""; "empty")]
    #[test_case("   "; "spaces")]
    #[test_case("\t\n "; "mixed whitespace")]
    fn test_blank_prompt_rejected(prompt: &str) {
        let err = ImageRequestValidator::validate_prompt(prompt).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.message(), "Prompt cannot be null or empty");
    }

    #[test]
    fn test_prompt_length_boundary() {
        let at_limit = "a".repeat(MAX_PROMPT_LENGTH);
        assert!(ImageRequestValidator::validate_prompt(&at_limit).is_ok());

        let over = "a".repeat(MAX_PROMPT_LENGTH + 1);
        let err = ImageRequestValidator::validate_prompt(&over).unwrap_err();
        assert_eq!(
            err.message(),
            "Prompt exceeds maximum length of 10000 characters"
        );
    }

    #[test]
    fn test_prompt_length_counts_characters() {
        let prompt = "é".repeat(MAX_PROMPT_LENGTH);
        assert!(ImageRequestValidator::validate_prompt(&prompt).is_ok());
    }

    #[test_case(0, false)]
    #[test_case(1, true)]
    #[test_case(8, true)]
    #[test_case(9, false)]
    fn test_num_images_range(n: u32, ok: bool) {
        let request = GenerateImageRequest::new("a cat").with_num_images(n);
        assert_eq!(ImageRequestValidator::validate_generate(&request).is_ok(), ok);
    }

    #[test]
    fn test_palette_with_both_rejected() {
        let palette = ColorPalette {
            name: Some(ColorPalettePreset::Ember),
            members: Some(vec![ColorPaletteMember::new("#FFFFFF")]),
        };
        let err = ImageRequestValidator::validate_color_palette(&palette).unwrap_err();
        assert!(matches!(
            err,
            IdeogramError::Validation { param: Some(ref p), .. } if p == "color_palette"
        ));
    }

    #[test]
    fn test_palette_with_neither_rejected() {
        assert!(ImageRequestValidator::validate_color_palette(&ColorPalette::default()).is_err());
    }

    #[test_case("#FF5733", true)]
    #[test_case("#ff5733", true)]
    #[test_case("FF5733", false)]
    #[test_case("#FFF", false)]
    #[test_case("#GG5733", false)]
    fn test_palette_member_colors(color: &str, ok: bool) {
        let palette = ColorPalette::members(vec![ColorPaletteMember::new(color)]);
        assert_eq!(
            ImageRequestValidator::validate_color_palette(&palette).is_ok(),
            ok
        );
    }

    #[test]
    fn test_palette_member_weight_out_of_range() {
        let palette =
            ColorPalette::members(vec![ColorPaletteMember::new("#000000").with_weight(1.5)]);
        assert!(ImageRequestValidator::validate_color_palette(&palette).is_err());
    }

    #[test]
    fn test_image_weight_range() {
        assert!(ImageRequestValidator::validate_image_weight(&ImageWeight::default()).is_ok());
        assert!(ImageRequestValidator::validate_image_weight(&ImageWeight::new(-0.1)).is_err());
        assert!(ImageRequestValidator::validate_image_weight(&ImageWeight::new(1.01)).is_err());
    }
}
