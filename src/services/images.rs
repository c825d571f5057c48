//! Image generation, editing, remixing and description.

use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::instrument;

use crate::errors::IdeogramResult;
use crate::observability::{log_error, log_request, log_response, RequestTimer};
use crate::transport::{
    EncodedRequest, Endpoint, HttpResponse, HttpTransport, RequestEncoder, ResponseParser,
    TransportError,
};
use crate::types::{
    DescribeImageRequest, DescribeResponse, EditImageRequest, GenerateImageRequest,
    ImageResponse, RemixImageRequest,
};

/// Image service.
///
/// Each call validates and encodes the request, sends it once, and decodes
/// the response. Nothing is retried.
pub struct ImageService {
    transport: Arc<dyn HttpTransport>,
    default_headers: Arc<HashMap<String, String>>,
}

impl ImageService {
    /// Creates a new image service.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        default_headers: Arc<HashMap<String, String>>,
    ) -> Self {
        Self {
            transport,
            default_headers,
        }
    }

    /// Generates images from a text prompt.
    #[instrument(skip(self, request), fields(operation = "generate"))]
    pub async fn generate(&self, request: GenerateImageRequest) -> IdeogramResult<ImageResponse> {
        self.execute(
            Endpoint::Generate,
            async { RequestEncoder::encode_generate(&request) },
            None,
        )
        .await
    }

    /// Like [`generate`](Self::generate), aborting when `token` is cancelled.
    #[instrument(skip(self, request, token), fields(operation = "generate"))]
    pub async fn generate_with_cancellation(
        &self,
        request: GenerateImageRequest,
        token: &CancellationToken,
    ) -> IdeogramResult<ImageResponse> {
        self.execute(
            Endpoint::Generate,
            async { RequestEncoder::encode_generate(&request) },
            Some(token),
        )
        .await
    }

    /// Edits an image, optionally restricted to a masked region.
    #[instrument(skip(self, request), fields(operation = "edit", has_mask = request.mask.is_some()))]
    pub async fn edit(&self, request: EditImageRequest) -> IdeogramResult<ImageResponse> {
        self.execute(Endpoint::Edit, RequestEncoder::encode_edit(request), None)
            .await
    }

    /// Like [`edit`](Self::edit), aborting when `token` is cancelled.
    #[instrument(skip(self, request, token), fields(operation = "edit", has_mask = request.mask.is_some()))]
    pub async fn edit_with_cancellation(
        &self,
        request: EditImageRequest,
        token: &CancellationToken,
    ) -> IdeogramResult<ImageResponse> {
        self.execute(
            Endpoint::Edit,
            RequestEncoder::encode_edit(request),
            Some(token),
        )
        .await
    }

    /// Generates new images based on a source image.
    #[instrument(skip(self, request), fields(operation = "remix"))]
    pub async fn remix(&self, request: RemixImageRequest) -> IdeogramResult<ImageResponse> {
        self.execute(Endpoint::Remix, RequestEncoder::encode_remix(request), None)
            .await
    }

    /// Like [`remix`](Self::remix), aborting when `token` is cancelled.
    #[instrument(skip(self, request, token), fields(operation = "remix"))]
    pub async fn remix_with_cancellation(
        &self,
        request: RemixImageRequest,
        token: &CancellationToken,
    ) -> IdeogramResult<ImageResponse> {
        self.execute(
            Endpoint::Remix,
            RequestEncoder::encode_remix(request),
            Some(token),
        )
        .await
    }

    /// Describes an image in text.
    #[instrument(skip(self, request), fields(operation = "describe"))]
    pub async fn describe(&self, request: DescribeImageRequest) -> IdeogramResult<DescribeResponse> {
        self.execute(
            Endpoint::Describe,
            RequestEncoder::encode_describe(request),
            None,
        )
        .await
    }

    /// Like [`describe`](Self::describe), aborting when `token` is cancelled.
    #[instrument(skip(self, request, token), fields(operation = "describe"))]
    pub async fn describe_with_cancellation(
        &self,
        request: DescribeImageRequest,
        token: &CancellationToken,
    ) -> IdeogramResult<DescribeResponse> {
        self.execute(
            Endpoint::Describe,
            RequestEncoder::encode_describe(request),
            Some(token),
        )
        .await
    }

    async fn execute<T, E>(
        &self,
        endpoint: Endpoint,
        encode: E,
        cancel: Option<&CancellationToken>,
    ) -> IdeogramResult<T>
    where
        T: DeserializeOwned,
        E: Future<Output = IdeogramResult<EncodedRequest>>,
    {
        let result = self.execute_inner(endpoint, encode, cancel).await;
        if let Err(ref error) = result {
            log_error(endpoint.name(), error);
        }
        result
    }

    async fn execute_inner<T, E>(
        &self,
        endpoint: Endpoint,
        encode: E,
        cancel: Option<&CancellationToken>,
    ) -> IdeogramResult<T>
    where
        T: DeserializeOwned,
        E: Future<Output = IdeogramResult<EncodedRequest>>,
    {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(TransportError::Cancelled.into());
        }

        // Encoding reads image sources, so it races the token too.
        let call = self.encode_and_send(endpoint, encode);
        let response = match cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(TransportError::Cancelled.into()),
                    result = call => result,
                }
            }
            None => call.await,
        }?;

        ResponseParser::parse(&response)
    }

    async fn encode_and_send<E>(
        &self,
        endpoint: Endpoint,
        encode: E,
    ) -> IdeogramResult<HttpResponse>
    where
        E: Future<Output = IdeogramResult<EncodedRequest>>,
    {
        let mut encoded = encode.await?;
        encoded.merge_headers(self.default_headers.iter());

        log_request(endpoint.name(), encoded.path());
        let timer = RequestTimer::start(endpoint.name());

        let response = match encoded {
            EncodedRequest::Json(request) => self.transport.send(request).await,
            EncodedRequest::Multipart(request) => self.transport.send_multipart(request).await,
        }?;

        log_response(endpoint.name(), response.status, timer.elapsed_ms());
        Ok(response)
    }
}

impl std::fmt::Debug for ImageService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageService").finish_non_exhaustive()
    }
}
