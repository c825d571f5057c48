//! Typed requests to wire payloads.
//!
//! Encoding validates first and touches byte sources only after the scalar
//! fields pass, so a rejected request never drains its image. Byte sources
//! are read asynchronously, which makes the multipart encoders `async`. Optional fields
//! are inserted into the JSON map only when set; an unset field never appears
//! as a key, not even as `null`.

use serde_json::{json, Map, Value};

use super::{HttpRequest, MultipartPart, MultipartRequest};
use crate::errors::IdeogramResult;
use crate::services::ImageRequestValidator;
use crate::types::{
    ColorPalette, DescribeImageRequest, EditImageRequest, GenerateImageRequest, ImageFile,
    MagicPromptOption, Model, RemixImageRequest, StyleType, DEFAULT_IMAGE_FILENAME,
    DEFAULT_MASK_FILENAME,
};

/// API version prefix.
pub const API_VERSION: &str = "v3";

const IMAGE_CONTENT_TYPE: &str = "image/png";
const IMAGE_REQUEST_FIELD: &str = "image_request";
const IMAGE_FILE_FIELD: &str = "image_file";
const MASK_FIELD: &str = "mask";

/// Ideogram endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `POST /v3/generate`
    Generate,
    /// `POST /v3/edit`
    Edit,
    /// `POST /v3/remix`
    Remix,
    /// `POST /v3/describe`
    Describe,
}

impl Endpoint {
    /// Operation name.
    pub fn name(&self) -> &'static str {
        match self {
            Endpoint::Generate => "generate",
            Endpoint::Edit => "edit",
            Endpoint::Remix => "remix",
            Endpoint::Describe => "describe",
        }
    }

    /// Request path, including the version prefix.
    pub fn path(&self) -> String {
        format!("/{}/{}", API_VERSION, self.name())
    }
}

/// A validated, transport-ready request.
#[derive(Debug, Clone)]
pub enum EncodedRequest {
    /// JSON body.
    Json(HttpRequest),
    /// Multipart form.
    Multipart(MultipartRequest),
}

impl EncodedRequest {
    /// Request path.
    pub fn path(&self) -> &str {
        match self {
            EncodedRequest::Json(request) => &request.path,
            EncodedRequest::Multipart(request) => &request.path,
        }
    }

    /// Adds headers that are not already set on the request. Header names
    /// compare case-insensitively.
    pub fn merge_headers<'a, I>(&mut self, headers: I)
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        let target = match self {
            EncodedRequest::Json(request) => &mut request.headers,
            EncodedRequest::Multipart(request) => &mut request.headers,
        };
        for (name, value) in headers {
            if !target.keys().any(|set| set.eq_ignore_ascii_case(name)) {
                target.insert(name.clone(), value.clone());
            }
        }
    }
}

/// Stateless encoder for the four operations.
pub struct RequestEncoder;

impl RequestEncoder {
    /// Encodes a generate request as a JSON body.
    pub fn encode_generate(request: &GenerateImageRequest) -> IdeogramResult<EncodedRequest> {
        ImageRequestValidator::validate_generate(request)?;

        let mut fields = Map::new();
        fields.insert("prompt".to_string(), Value::String(request.prompt.clone()));
        insert_token(
            &mut fields,
            "aspect_ratio",
            request.aspect_ratio.map(|a| a.as_str()),
        );
        insert_common(
            &mut fields,
            request.model,
            request.magic_prompt_option,
            request.seed,
            request.style_type,
        );
        if let Some(ref negative_prompt) = request.negative_prompt {
            fields.insert(
                "negative_prompt".to_string(),
                Value::String(negative_prompt.clone()),
            );
        }
        if let Some(num_images) = request.num_images {
            fields.insert("num_images".to_string(), json!(num_images));
        }
        if let Some(ref palette) = request.color_palette {
            fields.insert("color_palette".to_string(), palette_value(palette));
        }

        let body = envelope(fields).to_string().into_bytes();
        let http_request = HttpRequest::post(Endpoint::Generate.path())
            .with_header("Content-Type", mime::APPLICATION_JSON.essence_str())
            .with_body(body);

        Ok(EncodedRequest::Json(http_request))
    }

    /// Encodes an edit request as a multipart form: `image_file`, optional
    /// `mask`, then `image_request`.
    pub async fn encode_edit(request: EditImageRequest) -> IdeogramResult<EncodedRequest> {
        ImageRequestValidator::validate_prompt(&request.prompt)?;

        let image_part =
            file_part(request.image_file, IMAGE_FILE_FIELD, DEFAULT_IMAGE_FILENAME).await?;
        let mask_part = match request.mask {
            Some(mask) => Some(file_part(mask, MASK_FIELD, DEFAULT_MASK_FILENAME).await?),
            None => None,
        };

        let mut fields = Map::new();
        fields.insert("prompt".to_string(), Value::String(request.prompt));
        insert_common(
            &mut fields,
            request.model,
            request.magic_prompt_option,
            request.seed,
            request.style_type,
        );

        let mut multipart = MultipartRequest::new(Endpoint::Edit.path()).with_part(image_part);
        if let Some(mask_part) = mask_part {
            multipart = multipart.with_part(mask_part);
        }
        multipart = multipart.with_part(json_part(fields));

        Ok(EncodedRequest::Multipart(multipart))
    }

    /// Encodes a remix request as a multipart form: `image_file`, then
    /// `image_request`.
    pub async fn encode_remix(request: RemixImageRequest) -> IdeogramResult<EncodedRequest> {
        ImageRequestValidator::validate_prompt(&request.prompt)?;
        if let Some(ref weight) = request.image_weight {
            ImageRequestValidator::validate_image_weight(weight)?;
        }

        let image_part =
            file_part(request.image_file, IMAGE_FILE_FIELD, DEFAULT_IMAGE_FILENAME).await?;

        let mut fields = Map::new();
        fields.insert("prompt".to_string(), Value::String(request.prompt));
        if let Some(weight) = request.image_weight {
            fields.insert(
                "image_weight".to_string(),
                json!({ "weight": weight.weight }),
            );
        }
        insert_common(
            &mut fields,
            request.model,
            request.magic_prompt_option,
            request.seed,
            request.style_type,
        );

        let multipart = MultipartRequest::new(Endpoint::Remix.path())
            .with_part(image_part)
            .with_part(json_part(fields));

        Ok(EncodedRequest::Multipart(multipart))
    }

    /// Encodes a describe request as a multipart form with a single
    /// `image_file` part.
    pub async fn encode_describe(request: DescribeImageRequest) -> IdeogramResult<EncodedRequest> {
        let image_part =
            file_part(request.image_file, IMAGE_FILE_FIELD, DEFAULT_IMAGE_FILENAME).await?;

        Ok(EncodedRequest::Multipart(
            MultipartRequest::new(Endpoint::Describe.path()).with_part(image_part),
        ))
    }
}

fn insert_token(fields: &mut Map<String, Value>, key: &str, token: Option<&'static str>) {
    if let Some(token) = token {
        fields.insert(key.to_string(), Value::String(token.to_string()));
    }
}

fn insert_common(
    fields: &mut Map<String, Value>,
    model: Option<Model>,
    magic_prompt_option: Option<MagicPromptOption>,
    seed: Option<u32>,
    style_type: Option<StyleType>,
) {
    insert_token(fields, "model", model.map(|m| m.as_str()));
    insert_token(
        fields,
        "magic_prompt_option",
        magic_prompt_option.map(|o| o.as_str()),
    );
    if let Some(seed) = seed {
        fields.insert("seed".to_string(), json!(seed));
    }
    insert_token(fields, "style_type", style_type.map(|s| s.as_str()));
}

fn palette_value(palette: &ColorPalette) -> Value {
    let mut value = Map::new();
    if let Some(name) = palette.name {
        value.insert("name".to_string(), Value::String(name.as_str().to_string()));
    }
    if let Some(ref members) = palette.members {
        let members = members
            .iter()
            .map(|member| {
                let mut entry = Map::new();
                entry.insert("color".to_string(), Value::String(member.color.clone()));
                if let Some(weight) = member.weight {
                    entry.insert("weight".to_string(), json!(weight));
                }
                Value::Object(entry)
            })
            .collect();
        value.insert("members".to_string(), Value::Array(members));
    }
    Value::Object(value)
}

fn envelope(fields: Map<String, Value>) -> Value {
    let mut outer = Map::new();
    outer.insert(IMAGE_REQUEST_FIELD.to_string(), Value::Object(fields));
    Value::Object(outer)
}

fn json_part(fields: Map<String, Value>) -> MultipartPart {
    MultipartPart::Json {
        name: IMAGE_REQUEST_FIELD.to_string(),
        value: envelope(fields).to_string(),
    }
}

async fn file_part(
    file: ImageFile,
    field: &str,
    default_filename: &str,
) -> IdeogramResult<MultipartPart> {
    let (filename, data) = file.read_all(field, default_filename).await?;
    Ok(MultipartPart::File {
        name: field.to_string(),
        filename,
        content_type: IMAGE_CONTENT_TYPE.to_string(),
        data,
    })
}
