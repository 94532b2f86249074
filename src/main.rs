use std::net::SocketAddr;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use medisupply_admin::build_app;
use medisupply_admin::config::environment::EnvironmentConfig;
use medisupply_admin::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging (RUST_LOG o info por defecto)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
        )
        .init();

    info!("💊 MediSupply Admin Gateway");
    info!("================================================");

    let config = EnvironmentConfig::from_env()?;
    let addr: SocketAddr = config.server_url().parse()?;
    info!("⚙️ Entorno: {}", config.environment);
    if config.cors_origins.iter().any(|o| o == "*") && config.is_production() {
        tracing::warn!("⚠️ CORS abierto en producción");
    }

    let app = build_app(AppState::from_config(config)?);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET   /health - Estado del servicio");
    info!("📋 Pedidos:");
    info!("   GET   /api/orders - Listar pedidos");
    info!("   GET   /api/orders/:id - Obtener pedido");
    info!("   PATCH /api/orders/:id - Cambiar estado");
    info!("   POST  /api/orders/:id/confirm - Confirmar pedido");
    info!("   PATCH /api/orders/bulk-update - Cambio de estado masivo");
    info!("🚚 Logística:");
    info!("   GET   /api/vehicles/available - Vehículos disponibles");
    info!("   POST  /api/routes/generate - Generar rutas");
    info!("   GET   /api/routes - Listar rutas (q = filtro de texto)");
    info!("📦 Inventario:");
    info!("   GET   /api/inventory/product-location - Ubicación de producto");
    info!("   GET   /api/inventory/stock-levels - Niveles de stock");
    info!("🏷️ Catálogo:");
    info!("   GET   /api/products - Listar productos");

    // Iniciar servidor en background
    let server_handle = tokio::spawn(async move {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| {
                error!("❌ Error del servidor: {}", e);
                e
            })
    });

    // Esperar a que el servidor termine
    if let Err(e) = server_handle.await? {
        error!("❌ Servidor terminó con error: {}", e);
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo escuchar Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo escuchar SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
