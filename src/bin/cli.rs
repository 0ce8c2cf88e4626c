use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    mentorship::cli::run().await
}
