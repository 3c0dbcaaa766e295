
use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;

use crate::resize_client::{ImageFormat, Operation, ResizeClient, DEFAULT_ENDPOINT};
use crate::storage;

const DEFAULT_INPUT: &str = "olaf.jpg";
const DEFAULT_OUTPUT: &str = "olaf_out.webp";
const DEFAULT_WIDTH: u32 = 200;
const DEFAULT_HEIGHT: u32 = 500;

pub struct ResizeJob {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub format: ImageFormat,
    pub operation: Operation,
}

impl ResizeJob {
    pub fn from_env() -> Result<Self> {
        let input = env_value("RESIZER_INPUT").unwrap_or_else(|| DEFAULT_INPUT.into());
        let output = env_value("RESIZER_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.into());
        let width = match env_value("RESIZER_WIDTH") {
            Some(v) => v.parse().with_context(|| format!("invalid RESIZER_WIDTH {:?}", v))?,
            None => DEFAULT_WIDTH,
        };
        let height = match env_value("RESIZER_HEIGHT") {
            Some(v) => v.parse().with_context(|| format!("invalid RESIZER_HEIGHT {:?}", v))?,
            None => DEFAULT_HEIGHT,
        };
        let format = match env_value("RESIZER_FORMAT") {
            Some(v) => v.parse()?,
            None => ImageFormat::Webp,
        };
        let operation = match env_value("RESIZER_OPERATION") {
            Some(v) => v.parse()?,
            None => Operation::Limit,
        };
        let job = Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            width,
            height,
            format,
            operation,
        };
        Ok(job)
    }
}

pub fn endpoint_from_env() -> String {
    env_value("RESIZER_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.into())
}

fn env_value(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

#[derive(Debug)]
pub struct JobSummary {
    pub x: u32,
    pub y: u32,
    pub format: String,
    pub bytes: usize,
}

pub struct JobHandle {
    resize_client: Arc<ResizeClient>,
}

impl JobHandle {
    pub fn new(resize_client: &Arc<ResizeClient>) -> Result<Arc<Self>> {
        let resize_client = Arc::clone(resize_client);
        let this = Self {
            resize_client,
        };
        let this = Arc::new(this);
        Ok(this)
    }

    // load, resize through the service, save. the output file is only
    // written once the response is fully decoded.
    pub async fn run(&self, job: &ResizeJob) -> Result<JobSummary> {
        let data = storage::load_file(&job.input)?;
        info!("loaded {} ({} bytes)", job.input.display(), data.len());
        let resized = match job.operation {
            Operation::Limit => self.resize_client.limit(job.width, job.height, job.format, &data).await?,
            Operation::Scale => self.resize_client.scale(job.width, job.height, job.format, &data).await?,
        };
        storage::save_file(&job.output, &resized.data)?;
        info!("wrote {} ({} bytes)", job.output.display(), resized.data.len());
        let summary = JobSummary {
            x: resized.x,
            y: resized.y,
            format: resized.format,
            bytes: resized.data.len(),
        };
        Ok(summary)
    }
}
