use clap::Parser;
use tokio::net::TcpListener;
use todo_server::Config;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = Config::parse();
    let listener = TcpListener::bind(config.bind_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(
        %addr,
        static_dir = %config.static_dir.display(),
        "listening; API under /api/todos, press Ctrl+C to stop"
    );
    todo_server::run(listener, &config).await
}
