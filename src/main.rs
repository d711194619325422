use tracing::error;

#[tokio::main]
async fn main() {
    if let Err(e) = envdoctor_cli::run().await {
        error!("Error: {}", e);
        eprintln!("{}", envdoctor_cli::format_error(&e.to_string()));
        std::process::exit(1);
    }
}
