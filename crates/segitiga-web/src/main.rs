use clap::Parser;
use segitiga_types::Locale;
use segitiga_web::{SegitigaConfig, serve, tracing_setup::init_tracing};
use std::path::PathBuf;

/// Triangle area and perimeter calculator served over HTTP.
#[derive(Parser, Debug)]
#[command(name = "segitiga", version, about)]
struct Cli {
    /// Configuration file (defaults to ./segitiga.toml when present)
    #[arg(short, long, env = "SEGITIGA_CONFIG")]
    config: Option<PathBuf>,

    /// Listen host, overrides configuration
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides configuration
    #[arg(short, long)]
    port: Option<u16>,

    /// Message language (id or en), overrides configuration
    #[arg(short, long)]
    locale: Option<Locale>,

    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn apply(self, mut config: SegitigaConfig) -> SegitigaConfig {
        if let Some(host) = self.host {
            config.server.host = host;
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(locale) = self.locale {
            config.ui.locale = locale;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = SegitigaConfig::load(cli.config.as_deref())?.apply_env()?;
    let config = cli.apply(config);

    init_tracing(&config.logging)?;
    serve(config).await
}
