//! Conexión a PostgreSQL
//!
//! Creación del pool, migraciones del esquema y helpers de logging.

use sqlx::PgPool;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::utils::errors::AppResult;

/// Crear el pool y aplicar las migraciones pendientes
pub async fn connect_and_migrate(config: &DatabaseConfig) -> AppResult<PgPool> {
    info!("🔗 Conectando a PostgreSQL: {}", mask_database_url(&config.url));
    let pool = config.create_pool().await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Ejecutar migraciones de la base de datos
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    sqlx::migrate!("./migrations").run(pool).await?;
    info!("✅ Migraciones aplicadas");
    Ok(())
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(at_pos) = url.find('@') else {
        return url.to_string();
    };
    let scheme_end = url.find("://").map(|pos| pos + 3).unwrap_or(0);
    if scheme_end > at_pos {
        return url.to_string();
    }
    format!("{}***:***@{}", &url[..scheme_end], &url[at_pos + 1..])
}
