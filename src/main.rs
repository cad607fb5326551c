use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info, warn};

use shine_clean_loyalty::config::{DatabaseConfig, EnvironmentConfig, StoreBackend};
use shine_clean_loyalty::database::connect_and_migrate;
use shine_clean_loyalty::repositories::{MemoryShopStore, PgShopStore, ShopStore};
use shine_clean_loyalty::{create_app_router, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Shine Clean - API de fidelización");
    info!("====================================");
    info!("🏷️ Entorno: {}", config.environment);
    if !config.is_development() && config.cors_origins.is_empty() {
        warn!("⚠️ CORS_ORIGINS vacío: se aceptan peticiones de cualquier origen");
    }

    let store: Arc<dyn ShopStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .clone()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set for the postgres backend"))?;
            let pool = match connect_and_migrate(&DatabaseConfig::new(url)).await {
                Ok(pool) => pool,
                Err(e) => {
                    error!("❌ Error conectando a la base de datos: {}", e);
                    return Err(anyhow::anyhow!("Error de base de datos: {}", e));
                }
            };
            info!("✅ PostgreSQL listo");
            Arc::new(PgShopStore::new(pool))
        }
        StoreBackend::Memory => {
            info!("🧪 Usando almacenamiento en memoria (los datos no persisten)");
            Arc::new(MemoryShopStore::new())
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let app = create_app_router(AppState::new(store, config));

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Estado del servicio");
    info!("   GET    /api/customers?search= - Listar clientes");
    info!("   POST   /api/customers - Registrar cliente");
    info!("   GET    /api/customers/:id - Obtener cliente");
    info!("   POST   /api/customers/:id/washes - Registrar lavado");
    info!("   GET    /api/customers/:id/washes - Historial de lavados");
    info!("   GET    /api/admin/expenses | POST - Gastos");
    info!("   GET    /api/admin/revenue | POST - Ingresos");
    info!("   GET    /api/admin/summary - Balance");
    info!("   GET    /api/admin/stock | POST - Stock");
    info!("   DELETE /api/admin/stock/:id - Eliminar producto");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
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
