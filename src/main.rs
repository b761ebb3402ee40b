use north_cv::prelude::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    north_cv::cmd::run().await?;
    Ok(())
}
