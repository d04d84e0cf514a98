//! Test server harness.

use bizmatch::catalog::CsvCatalogSource;
use bizmatch::config::EngineConfig;
use bizmatch_server::gateway::{HandlerState, create_router_with_state};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

const STARTUP_WAIT_TIMEOUT_SECS: u64 = 5;
const STARTUP_POLL_INTERVAL_MS: u64 = 50;

pub const CSV_HEADER: &str = "ID,Nome do Negócio,Descrição Detalhada,Investimento Estimado (R$),Concorrência (SP),Habilidades Requeridas,Gostos/Interesses,Região-Alvo (Exemplos de Bairros),Razão para ser um Bom Negócio";

/// Three-row catalog used by most end-to-end tests.
pub const SAMPLE_ROWS: &str = "\
1,Ateliê de Costura,Consertos e roupas sob medida,\"1,000\",Média,costura;vendas,moda,vila mariana,Demanda constante
2,Marmitas Delivery,Marmitas com delivery e atendimento por telefone,2000,Alta,cozinha,culinária,moema,Refeições rápidas
3,Brechó Solidário,Roupas usadas em bom estado,500,Baixa,vendas;organização,moda;sustentabilidade,vila prudente,Baixo custo inicial
";

#[derive(Debug, Clone)]
pub struct TestServerConfig {
    pub port: u16,
    /// CSV rows (without header). `None` starts the server without a catalog file.
    pub catalog_rows: Option<String>,
    pub engine_config: EngineConfig,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            port: 0,
            catalog_rows: Some(SAMPLE_ROWS.to_string()),
            engine_config: EngineConfig::default(),
        }
    }
}

impl TestServerConfig {
    pub fn without_catalog() -> Self {
        Self {
            catalog_rows: None,
            ..Self::default()
        }
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    pub catalog_path: PathBuf,
    _server_handle: JoinHandle<()>,
    shutdown_tx: Option<oneshot::Sender<()>>,
    _temp_dir: TempDir,
}

impl TestServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

pub async fn find_available_port() -> std::io::Result<u16> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    Ok(addr.port())
}

pub async fn wait_for_server_ready(
    addr: SocketAddr,
    timeout: Duration,
    interval: Duration,
) -> Result<(), ServerStartupError> {
    let start = std::time::Instant::now();

    loop {
        if start.elapsed() > timeout {
            return Err(ServerStartupError::Timeout);
        }

        match tokio::net::TcpStream::connect(addr).await {
            Ok(_) => return Ok(()),
            Err(_) => {
                tokio::time::sleep(interval).await;
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ServerStartupError {
    #[error("Server failed to start within timeout")]
    Timeout,
    #[error("Failed to bind to address: {0}")]
    BindError(#[from] std::io::Error),
}

/// Writes `rows` under the standard header to `path`.
pub fn write_catalog(path: &std::path::Path, rows: &str) -> std::io::Result<()> {
    std::fs::write(path, format!("{}\n{}", CSV_HEADER, rows))
}

/// Spawns a server backed by a CSV catalog in a temporary directory.
///
/// The catalog is read from disk on every request, so tests may rewrite
/// [`TestServer::catalog_path`] while the server is running.
pub async fn spawn_test_server(config: TestServerConfig) -> Result<TestServer, ServerStartupError> {
    let port = if config.port == 0 {
        find_available_port().await?
    } else {
        config.port
    };

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;

    let temp_dir = TempDir::new()?;
    let catalog_path = temp_dir.path().join("businesses.csv");
    if let Some(rows) = &config.catalog_rows {
        write_catalog(&catalog_path, rows)?;
    }

    let source = CsvCatalogSource::new(catalog_path.clone());
    let state = HandlerState::new(Arc::new(source), config.engine_config);
    let app = create_router_with_state(state);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    let server_handle = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await
            .unwrap();
    });

    wait_for_server_ready(
        local_addr,
        Duration::from_secs(STARTUP_WAIT_TIMEOUT_SECS),
        Duration::from_millis(STARTUP_POLL_INTERVAL_MS),
    )
    .await?;

    Ok(TestServer {
        addr: local_addr,
        catalog_path,
        _server_handle: server_handle,
        shutdown_tx: Some(shutdown_tx),
        _temp_dir: temp_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_find_available_port() {
        let port = find_available_port()
            .await
            .expect("Should find available port");
        assert!(port > 0);
    }

    #[test]
    fn test_server_config_defaults() {
        let config = TestServerConfig::default();
        assert_eq!(config.port, 0);
        assert!(config.catalog_rows.is_some());
        assert!(TestServerConfig::without_catalog().catalog_rows.is_none());
    }
}
