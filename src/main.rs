use clap::Parser;
use nutriscan::{cli, config, http, repl};
use cli::{Cli, Commands};
use config::Config;
use http::HttpBackend;
use nutriscan_common::Orchestrator;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = Config::load()?;
    if let Some(url) = cli.search_url {
        config.set_search_url(url)?;
    }
    if let Some(url) = cli.detection_url {
        config.set_detection_url(url)?;
    }
    if let Some(url) = cli.nutrition_url {
        config.set_nutrition_url(url)?;
    }

    match cli.command.unwrap_or(Commands::Chat { no_welcome: false }) {
        Commands::Chat { no_welcome } => {
            println!("🍃 NutriScan\n");
            let backend = HttpBackend::new(config.endpoints.clone(), config.timeout())?;
            let orchestrator = if config.welcome && !no_welcome {
                Orchestrator::with_welcome(backend)
            } else {
                Orchestrator::new(backend)
            };
            let view = repl::attach_view(&orchestrator);
            repl::run_chat(&orchestrator, &view).await?;
        }

        Commands::Ask { query } => {
            let backend = HttpBackend::new(config.endpoints.clone(), config.timeout())?;
            let orchestrator = Orchestrator::new(backend);
            let view = repl::attach_view(&orchestrator);
            repl::with_spinner(&view, "検索中...", orchestrator.submit(&query.join(" "))).await;
        }

        Commands::Nutrition { food } => {
            let backend = HttpBackend::new(config.endpoints.clone(), config.timeout())?;
            let orchestrator = Orchestrator::new(backend);
            let view = repl::attach_view(&orchestrator);
            repl::with_spinner(&view, "栄養情報を検索中...", orchestrator.lookup_nutrition(&food)).await;
        }

        Commands::Config { set_search_url, set_detection_url, set_nutrition_url, set_timeout, reset, show } => {
            // 環境変数・引数による上書きを保存しないよう、ファイルから読み直す
            let mut stored = if reset {
                Config::default()
            } else {
                Config::load_from(&Config::config_path()?)?
            };
            let mut changed = reset;

            if let Some(url) = set_search_url {
                stored.set_search_url(url)?;
                changed = true;
            }
            if let Some(url) = set_detection_url {
                stored.set_detection_url(url)?;
                changed = true;
            }
            if let Some(url) = set_nutrition_url {
                stored.set_nutrition_url(url)?;
                changed = true;
            }
            if let Some(seconds) = set_timeout {
                stored.timeout_seconds = seconds;
                changed = true;
            }

            if changed {
                stored.save()?;
                println!("✔ 設定を保存しました: {}", Config::config_path()?.display());
            }

            if show || !changed {
                let shown = if changed { &stored } else { &config };
                println!("設定:");
                println!("  検索: {}", shown.endpoints.search);
                println!("  検出: {}", shown.endpoints.detection);
                println!("  栄養情報: {}", shown.endpoints.nutrition);
                println!("  タイムアウト: {}秒", shown.timeout_seconds);
                println!("  挨拶: {}", if shown.welcome { "表示" } else { "非表示" });
            }
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "nutriscan=debug,nutriscan_common=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
