//! Closed enumerations with fixed wire tokens.
//!
//! Each variant maps to exactly one uppercase token on the wire, in both
//! directions. Serde goes through the same table as [`FromStr`] and `as_str`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::errors::IdeogramError;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the wire token.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $( $name::$variant => $token ),+
                }
            }
        }

        impl FromStr for $name {
            type Err = IdeogramError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $( $token => Ok($name::$variant), )+
                    other => Err(IdeogramError::validation_param(
                        format!("Unknown {} token: {}", stringify!($name), other),
                        stringify!($name),
                    )),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let token = String::deserialize(deserializer)?;
                token.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

wire_enum! {
    /// Ideogram model versions.
    Model {
        /// V2 model.
        V2 => "V_2",
        /// V2 Turbo model (faster generation).
        V2Turbo => "V_2_TURBO",
        /// V1 model.
        V1 => "V_1",
        /// V1 Turbo model (faster generation).
        V1Turbo => "V_1_TURBO",
    }
}

wire_enum! {
    /// Style type for generated images.
    StyleType {
        /// Let the model pick.
        Auto => "AUTO",
        /// General style.
        General => "GENERAL",
        /// Realistic style.
        Realistic => "REALISTIC",
        /// Design style.
        Design => "DESIGN",
        /// 3D render style.
        Render3D => "RENDER_3D",
        /// Anime style.
        Anime => "ANIME",
    }
}

wire_enum! {
    /// Magic prompt enhancement options.
    MagicPromptOption {
        /// Enable prompt enhancement.
        On => "ON",
        /// Disable prompt enhancement.
        Off => "OFF",
        /// Let the API decide.
        Auto => "AUTO",
    }
}

wire_enum! {
    /// Aspect ratio for generated images.
    AspectRatio {
        /// 10:16 (portrait).
        Aspect10x16 => "ASPECT_10_16",
        /// 16:10 (landscape).
        Aspect16x10 => "ASPECT_16_10",
        /// 9:16 (portrait).
        Aspect9x16 => "ASPECT_9_16",
        /// 16:9 (landscape).
        Aspect16x9 => "ASPECT_16_9",
        /// 3:2 (landscape).
        Aspect3x2 => "ASPECT_3_2",
        /// 2:3 (portrait).
        Aspect2x3 => "ASPECT_2_3",
        /// 4:3 (landscape).
        Aspect4x3 => "ASPECT_4_3",
        /// 3:4 (portrait).
        Aspect3x4 => "ASPECT_3_4",
        /// 1:1 (square).
        Aspect1x1 => "ASPECT_1_1",
        /// 1:3 (tall portrait).
        Aspect1x3 => "ASPECT_1_3",
        /// 3:1 (wide landscape).
        Aspect3x1 => "ASPECT_3_1",
    }
}

wire_enum! {
    /// Named color palette presets.
    ColorPalettePreset {
        /// Ember.
        Ember => "EMBER",
        /// Fresh.
        Fresh => "FRESH",
        /// Jungle.
        Jungle => "JUNGLE",
        /// Magic.
        Magic => "MAGIC",
        /// Melon.
        Melon => "MELON",
        /// Mosaic.
        Mosaic => "MOSAIC",
        /// Muted.
        Muted => "MUTED",
        /// Pastel.
        Pastel => "PASTEL",
        /// Realism.
        Realism => "REALISM",
        /// Rustic.
        Rustic => "RUSTIC",
        /// Sakura.
        Sakura => "SAKURA",
    }
}
