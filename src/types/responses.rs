use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Result of generate, edit and remix.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImageResponse {
    /// Generated images, in server order.
    #[serde(default)]
    pub data: Vec<ImageData>,
    /// Creation time, unix seconds.
    #[serde(default)]
    pub created: i64,
}

impl ImageResponse {
    /// Creation time as a UTC timestamp. `None` if out of range.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.created, 0).single()
    }

    /// Iterates over the image URLs.
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|image| image.url.as_str())
    }
}

/// A single generated image.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ImageData {
    /// Where to download the image.
    #[serde(default)]
    pub url: String,
    /// Prompt actually used, possibly enhanced.
    #[serde(default)]
    pub prompt: String,
    /// Resolution such as `1024x1024`.
    #[serde(default)]
    pub resolution: String,
    /// Whether the image passed safety checks.
    #[serde(default)]
    pub is_image_safe: bool,
    /// Seed used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
}

/// Result of describe.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DescribeResponse {
    /// Descriptions, in server order.
    #[serde(default)]
    pub data: Vec<DescriptionData>,
}

impl DescribeResponse {
    /// Iterates over the description texts.
    pub fn descriptions(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(|d| d.description.as_str())
    }
}

/// A single image description.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DescriptionData {
    /// Description text.
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_response_deserialization() {
        let json = r#"{
            "data": [{
                "url": "https://ideogram.ai/api/images/abc.png",
                "prompt": "a cat",
                "resolution": "1024x1024",
                "is_image_safe": true,
                "seed": 7
            }],
            "created": 1000
        }"#;

        let response: ImageResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.created, 1000);
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].seed, Some(7));
        assert!(response.data[0].is_image_safe);
        assert_eq!(
            response.urls().collect::<Vec<_>>(),
            vec!["https://ideogram.ai/api/images/abc.png"]
        );
    }

    #[test]
    fn test_image_data_without_seed() {
        let json = r#"{"url":"u","prompt":"p","resolution":"512x512","is_image_safe":false}"#;
        let data: ImageData = serde_json::from_str(json).unwrap();
        assert_eq!(data.seed, None);
    }

    #[test]
    fn test_created_at() {
        let response = ImageResponse {
            data: Vec::new(),
            created: 1_700_000_000,
        };
        let created = response.created_at().unwrap();
        assert_eq!(created.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_describe_response_descriptions() {
        let json = r#"{"data":[{"description":"A red barn"},{"description":"A field"}]}"#;
        let response: DescribeResponse = serde_json::from_str(json).unwrap();

        assert_eq!(
            response.descriptions().collect::<Vec<_>>(),
            vec!["A red barn", "A field"]
        );
    }
}
