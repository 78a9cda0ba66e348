use clap::Parser;
use goaltracker_server::{
    api::app_router,
    build_state,
    cli::{Cli, Command},
    config::Config,
    init_database, init_tracing,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;
    if let Some(db_path) = cli.db_path {
        config.db_path = db_path;
    }
    init_tracing();

    match cli.command.unwrap_or(Command::Serve) {
        Command::Initdb => {
            let db_path = init_database(&config)?;
            tracing::info!("Database ready at {}", db_path);
            println!("Initialized the database.");
        }
        Command::Serve => {
            let state = build_state(&config).await?;
            let router = app_router(state, &config);
            tracing::info!("Listening on {}", config.listen_addr);
            let listener = tokio::net::TcpListener::bind(config.listen_addr).await?;
            axum::serve(listener, router).await?;
        }
    }
    Ok(())
}
