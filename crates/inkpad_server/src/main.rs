use inkpad_server::{InkpadServer, ServerConfig};

#[tokio::main]
async fn main() {
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("inkpad-server: {err}");
            std::process::exit(2);
        }
    };

    if let Some(log_dir) = config.log_dir.as_deref() {
        let log_dir = log_dir.to_str().unwrap_or_default();
        if let Err(err) = inkpad_core::init_logging(inkpad_core::default_log_level(), log_dir) {
            eprintln!("inkpad-server: {err}");
            std::process::exit(2);
        }
    }

    if let Err(err) = InkpadServer::new(config).serve().await {
        eprintln!("inkpad-server: {err}");
        std::process::exit(1);
    }
}
