
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::{bail, Result};
use reqwest::{self, Client};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::images;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080";

#[derive(Serialize)]
struct ResizeRequestBody {
    x: u32,
    y: u32,
    data: String,
    format: String,
}

#[derive(Deserialize)]
struct ResizeResponseBody {
    x: u32,
    y: u32,
    format: String,
    data: String,
}

pub struct ResizedImage {
    pub x: u32,
    pub y: u32,
    pub format: String,
    pub data: Vec<u8>,
}

// the output formats the resize service encodes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ImageFormat {
    Webp,
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Webp => "webp",
            ImageFormat::Png => "png",
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Gif => "gif",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let format = match s {
            "webp" => ImageFormat::Webp,
            "png" => ImageFormat::Png,
            "jpg" | "jpeg" => ImageFormat::Jpeg,
            "gif" => ImageFormat::Gif,
            _ => bail!("unsupported image format {:?}", s),
        };
        Ok(format)
    }
}

// /limit bounds the image within x by y keeping the aspect ratio,
// /scale resizes to exactly x by y
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Operation {
    Limit,
    Scale,
}

impl Operation {
    fn path(&self) -> &'static str {
        match self {
            Operation::Limit => "/limit",
            Operation::Scale => "/scale",
        }
    }
}

impl FromStr for Operation {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let operation = match s {
            "limit" => Operation::Limit,
            "scale" => Operation::Scale,
            _ => bail!("unsupported operation {:?}", s),
        };
        Ok(operation)
    }
}

pub struct ResizeClient {
    client: Client,
    endpoint: String,
}

impl ResizeClient {
    pub fn new(endpoint: impl Into<String>) -> Result<Arc<Self>> {
        let client = reqwest::Client::new();
        let this = Self {
            client,
            endpoint: endpoint.into(),
        };
        let this = Arc::new(this);
        Ok(this)
    }

    pub async fn limit(&self, width: u32, height: u32, format: ImageFormat, data: &[u8]) -> Result<ResizedImage> {
        self.resize(Operation::Limit, width, height, format, data).await
    }

    pub async fn scale(&self, width: u32, height: u32, format: ImageFormat, data: &[u8]) -> Result<ResizedImage> {
        self.resize(Operation::Scale, width, height, format, data).await
    }

    async fn resize(&self, operation: Operation, width: u32, height: u32, format: ImageFormat, data: &[u8]) -> Result<ResizedImage> {
        let request_body = ResizeRequestBody {
            x: width,
            y: height,
            data: images::to_base64(data),
            format: format.to_string(),
        };
        let url = [self.endpoint.as_str(), operation.path()].concat();
        info!("resize request {} ({} bytes)", url, data.len());
        let response = self.client.post(&url)
            .header("Content-type", "application/json; charset=utf-8")
            .json(&request_body)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            bail!("resize server returned bad status: {}", status);
        }
        let text = response.text().await?;
        info!("resize response {} bytes", text.len());
        let response: ResizeResponseBody = serde_json::from_str(&text)?;
        let data = images::from_base64(&response.data)?;
        let result = ResizedImage {
            x: response.x,
            y: response.y,
            format: response.format,
            data,
        };
        Ok(result)
    }
}
