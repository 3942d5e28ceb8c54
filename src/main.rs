use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use oklch_theme::{Oklch, Strategy};
use tintforge::api;
use tintforge::assets::AssetLoader;
use tintforge::models::AppConfig;
use tintforge::server;
use tintforge::services::{ImageRef, PaletteExtractor, ThemeService};

#[derive(Parser)]
#[command(name = "tintforge")]
#[command(about = "Tintforge - OKLCH design-token themes derived from image palettes")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Extract a palette from an image file, URL or data URL
    Extract {
        /// Image path, http(s) URL or data: URL
        source: String,

        /// Print JSON instead of one color per line
        #[arg(long)]
        json: bool,
    },
    /// Generate a theme from a base color
    Generate {
        /// Base color as "oklch(L C H)" or "#rrggbb"
        color: String,

        /// standard, vivid, minimal or professional (default from config)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Print all four strategies as JSON
        #[arg(long)]
        json: bool,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Extract a palette and generate a theme from one of its colors
    Theme {
        /// Image path, http(s) URL or data: URL
        source: String,

        /// standard, vivid, minimal or professional (default from config)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Palette entry to use as base color (0 = most prominent)
        #[arg(short, long, default_value_t = 0)]
        index: usize,

        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the embedded config.yaml to disk for customization
    Init {
        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tintforge API",
        description = "OKLCH design-token themes derived from image palettes",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(api::handle_palette, api::handle_themes, api::handle_theme_css),
    components(schemas(
        api::PaletteRequest,
        api::PaletteResponse,
        api::ThemesRequest,
        api::ThemesResponse,
    )),
    tags(
        (name = "Palette", description = "Palette extraction from images"),
        (name = "Themes", description = "Theme stylesheet generation")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Extract { source, json }) => {
            init_cli_tracing();
            run_extract_command(&source, json).await
        }
        Some(Commands::Generate {
            color,
            strategy,
            json,
            output,
        }) => {
            init_cli_tracing();
            run_generate_command(&color, strategy.as_deref(), json, output.as_deref())
        }
        Some(Commands::Theme {
            source,
            strategy,
            index,
            output,
        }) => {
            init_cli_tracing();
            run_theme_command(&source, strategy.as_deref(), index, output.as_deref()).await
        }
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for one-shot commands
fn init_cli_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tintforge=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();
}

fn load_config() -> AppConfig {
    AppConfig::load_from_assets(&AssetLoader::from_env())
}

/// Interpret a CLI source argument: URLs pass through, anything else is a file path.
fn image_ref(source: &str) -> anyhow::Result<ImageRef> {
    if ["http://", "https://", "data:"]
        .iter()
        .any(|scheme| source.starts_with(scheme))
    {
        return Ok(ImageRef::Url(source.to_string()));
    }
    let bytes = std::fs::read(source).with_context(|| format!("Failed to read image {source}"))?;
    Ok(ImageRef::Encoded(bytes))
}

fn resolve_strategy(name: Option<&str>, config: &AppConfig) -> anyhow::Result<Strategy> {
    match name {
        Some(name) => Ok(name.parse()?),
        None => Ok(config.themes.default_strategy),
    }
}

fn emit(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{text}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {} ({} bytes)", path.display(), text.len() + 1);
        }
        None => println!("{text}"),
    }
    Ok(())
}

fn describe_color(color: Oklch) -> String {
    format!("{color}  {}", color.to_srgb().to_hex())
}

/// Print the palette of an image (no server needed)
async fn run_extract_command(source: &str, json: bool) -> anyhow::Result<()> {
    let config = load_config();
    let extractor = PaletteExtractor::from_config(&config.extraction)?;
    let palette = extractor.extract(&image_ref(source)?).await;

    if json {
        let body = serde_json::json!({ "colors": palette.to_css_strings() });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        for color in palette.colors() {
            println!("{}", describe_color(*color));
        }
    }
    Ok(())
}

/// Print the stylesheet for a base color
fn run_generate_command(
    color: &str,
    strategy: Option<&str>,
    json: bool,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config();
    let themes = ThemeService::from_config(&config.themes);

    if json {
        let (base, sheets) = themes.stylesheets(color);
        let mut body = serde_json::Map::new();
        body.insert("base".to_string(), base.to_string().into());
        for (strategy, css) in sheets {
            body.insert(strategy.name().to_string(), css.into());
        }
        return emit(&serde_json::to_string_pretty(&body)?, output);
    }

    let strategy = resolve_strategy(strategy, &config)?;
    emit(&themes.stylesheet(color, strategy), output)
}

/// Extract a palette, pick one color and print its stylesheet
async fn run_theme_command(
    source: &str,
    strategy: Option<&str>,
    index: usize,
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let config = load_config();
    let strategy = resolve_strategy(strategy, &config)?;
    let extractor = PaletteExtractor::from_config(&config.extraction)?;
    let palette = extractor.extract(&image_ref(source)?).await;

    let base = palette.colors().get(index).copied().with_context(|| {
        format!(
            "Palette has {} color(s); index {index} is out of range",
            palette.len()
        )
    })?;
    eprintln!("Base color: {}", describe_color(base));

    let themes = ThemeService::from_config(&config.themes);
    emit(&themes.stylesheet(&base.to_string(), strategy), output)
}

/// Extract embedded config to filesystem
fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        for f in AssetLoader::list_embedded() {
            println!("  {f}");
        }
        return Ok(());
    }

    let report = AssetLoader::from_env().init(force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Tintforge v{VERSION}");
    println!("OKLCH design-token themes derived from image palettes\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    let config_source = match config_file {
        Some(ref path) if PathBuf::from(path).exists() => path.to_string(),
        Some(_) => "embedded (file not found)".to_string(),
        None => "embedded".to_string(),
    };
    println!("\nConfig:  {config_source}");

    let loader = AssetLoader::new(config_file.map(PathBuf::from));
    let config = match loader
        .read_config_string()
        .map_err(anyhow::Error::from)
        .and_then(|text| serde_yaml::from_str::<AppConfig>(&text).map_err(anyhow::Error::from))
    {
        Ok(config) => config,
        Err(e) => {
            println!("  (invalid: {e}; defaults apply)");
            AppConfig::default()
        }
    };
    println!("  Listen:           {}", config.bind_addr());
    println!("  Default strategy: {}", config.themes.default_strategy);
    println!(
        "  Palette cache:    {}",
        if config.extraction.cache_ttl_secs == 0 || config.extraction.cache_max_entries == 0 {
            "disabled".to_string()
        } else {
            format!(
                "{} entries, {}s TTL",
                config.extraction.cache_max_entries, config.extraction.cache_ttl_secs
            )
        }
    );

    println!("\nCommands:");
    println!("  tintforge serve      Start the HTTP server");
    println!("  tintforge extract    Extract a palette from an image");
    println!("  tintforge generate   Generate a theme from a base color");
    println!("  tintforge theme      Extract a palette and generate a theme");
    println!("  tintforge init       Write config.yaml for customization");
    println!("\nRun 'tintforge --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tintforge=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let asset_loader = Arc::new(AssetLoader::from_env());
    tracing::info!(
        config = ?asset_loader
            .config_file()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embedded".to_string()),
        "Config source configured"
    );

    if let Err(e) = asset_loader.seed_if_configured() {
        tracing::warn!(%e, "Failed to seed config");
    }

    let state = server::create_app_state(asset_loader)?;
    let bind_addr = state.config.bind_addr();

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Tintforge server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
