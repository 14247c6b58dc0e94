//! focuspoint - salient point detection for images
//!
//! CLI entry point

use clap::Parser;
use std::time::Duration;

use focuspoint::{
    config, exit_codes, fetch, Cli, Commands, Config, DetectArgs, FetchOptions,
    SalientPointDetector,
};

#[cfg(feature = "web")]
use focuspoint::{CliOverrides, ServeArgs, ServerConfig, WebServer};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detect(args) => run_detect(&args),
        #[cfg(feature = "web")]
        Commands::Serve(args) => run_serve(&args),
        Commands::Info => run_info(),
    };

    std::process::exit(match result {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_codes::GENERAL_ERROR
        }
    });
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

// ============ Detect Command ============

fn run_detect(args: &DetectArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);

    let config = Config::load().unwrap_or_default();
    let mut fetch_options = FetchOptions::default()
        .with_timeout(Duration::from_secs(config.fetch.timeout_secs))
        .with_max_bytes(config.fetch.max_bytes);
    if let Some(secs) = args.timeout {
        fetch_options = fetch_options.with_timeout(Duration::from_secs(secs));
    }

    let image = match (&args.image, &args.url) {
        (Some(path), _) => {
            if !path.exists() {
                eprintln!("Error: Input file not found: {}", path.display());
                std::process::exit(exit_codes::INPUT_NOT_FOUND);
            }
            fetch::load_from_path(path)?
        }
        (None, Some(url)) => fetch::load_from_url(url, &fetch_options)?,
        (None, None) => {
            eprintln!("Error: Provide an image path or --url");
            std::process::exit(exit_codes::INPUT_NOT_FOUND);
        }
    };

    let detector = SalientPointDetector::new();
    let result = detector.detect(&image)?;

    let json = if args.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);

    Ok(())
}

// ============ Serve Command (Web Server) ============

#[cfg(feature = "web")]
fn run_serve(args: &ServeArgs) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(args.verbose);

    // Load config file if specified, otherwise use the search order
    let file_config = match &args.config {
        Some(path) => match Config::load_from_path(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                Config::default()
            }
        },
        None => Config::load().unwrap_or_default(),
    };

    // Merge config file with CLI arguments (CLI takes precedence)
    let overrides = CliOverrides {
        port: args.port,
        bind: args.bind.clone(),
        timeout_secs: None,
    };
    let config = file_config.merge_with_cli(&overrides);

    let server_config = ServerConfig::default()
        .with_port(config.server.port)
        .with_bind(&config.server.bind);
    let fetch_options = FetchOptions::default()
        .with_timeout(Duration::from_secs(config.fetch.timeout_secs))
        .with_max_bytes(config.fetch.max_bytes);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async {
        let server = WebServer::with_options(server_config, fetch_options);
        server.run().await.map_err(|e| e.to_string())
    })?;

    Ok(())
}

// ============ Info Command ============

fn run_info() -> Result<(), Box<dyn std::error::Error>> {
    println!("focuspoint v{}", env!("CARGO_PKG_VERSION"));
    println!();

    println!("System Information:");
    println!("  Platform: {}", std::env::consts::OS);
    println!("  Arch: {}", std::env::consts::ARCH);
    println!("  CPUs: {}", num_cpus::get());

    // Memory info (Linux)
    if let Ok(meminfo) = std::fs::read_to_string("/proc/meminfo") {
        if let Some(line) = meminfo.lines().find(|l| l.starts_with("MemTotal:")) {
            if let Some(kb) = line.split_whitespace().nth(1) {
                if let Ok(kb_val) = kb.parse::<u64>() {
                    println!("  Memory: {:.1} GB", kb_val as f64 / 1_048_576.0);
                }
            }
        }
    }

    println!();
    println!("Features:");
    println!("  web: {}", if cfg!(feature = "web") { "ENABLED" } else { "DISABLED" });

    println!();
    println!("Config File Locations:");
    println!("  Local: ./{}", config::LOCAL_CONFIG_FILE);
    if let Some(path) = Config::user_config_path() {
        println!("  User:  {}", path.display());
    }

    Ok(())
}
