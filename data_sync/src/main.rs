use data_sync::state::{AppState, Db};
use shared::error::InitializationError;
use shared::{init_tracing, load_config};
use tracing::info;

const EXPORT_BINDINGS_COMMAND: &str = "export-bindings";
const DEFAULT_BINDINGS_PATH: &str = "./bindings.ts";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // `data_sync export-bindings [path]` writes the front-end types and exits
    let mut args = std::env::args().skip(1);
    if args.next().as_deref() == Some(EXPORT_BINDINGS_COMMAND) {
        let path = args.next().unwrap_or_else(|| DEFAULT_BINDINGS_PATH.to_string());
        specta_typescript::Typescript::default()
            .bigint(specta_typescript::BigIntExportBehavior::Number)
            .export_to(&path, &specta::export())?;
        return Ok(());
    }

    init_tracing()?;

    let config = load_config().map_err(InitializationError::from)?;
    let connect_options = config.postgres.connect_options()?;

    let app = data_sync::app(AppState {
        db: Db::new(connect_options),
    });

    let listen_addr = &config.server.listen_addr;
    info!("starting server at {listen_addr}");
    let listener = tokio::net::TcpListener::bind(listen_addr.as_str())
        .await
        .map_err(InitializationError::from)?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shared::shutdown_listener(None))
        .await?;

    Ok(())
}
