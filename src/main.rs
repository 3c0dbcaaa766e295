use anyhow::Result;
use tracing::info;

use resizer_client::job::{endpoint_from_env, JobHandle, ResizeJob};
use resizer_client::resize_client::ResizeClient;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .init();
    let job = ResizeJob::from_env()?;
    let resize_client = ResizeClient::new(endpoint_from_env())?;
    let job_handle = JobHandle::new(&resize_client)?;
    let summary = job_handle.run(&job).await?;
    info!("x: {}", summary.x);
    info!("y: {}", summary.y);
    info!("format: {}", summary.format);
    Ok(())
}
