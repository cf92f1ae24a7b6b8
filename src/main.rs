use std::path::PathBuf;

use care_center::config::Config;
use care_center::server;

#[tokio::main]
async fn main() {
    let mut args = std::env::args().skip(1);
    let mut port: Option<u16> = None;
    let mut fixtures_path: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" | "-p" => {
                port = args.next().and_then(|p| p.parse().ok());
                if port.is_none() {
                    eprintln!("Error: --port requires a numeric argument");
                    std::process::exit(1);
                }
            }
            "--fixtures" | "-f" => {
                fixtures_path = args.next().map(PathBuf::from);
                if fixtures_path.is_none() {
                    eprintln!("Error: --fixtures requires a JSON file path");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Care Center - family directory service");
                println!();
                println!("Usage: care-center [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>        Port to listen on (default: $CARE_PORT or 4000)");
                println!("  -f, --fixtures <PATH>    Seed the directory from a JSON fixture file");
                println!("  -h, --help               Show this help");
                println!();
                println!("Environment: CARE_HOST, CARE_PORT, CARE_FIXTURES, RUST_LOG");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    server::init_tracing();

    let mut config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(port) = port {
        config.port = port;
    }
    if fixtures_path.is_some() {
        config.fixtures_path = fixtures_path;
    }

    if let Err(e) = server::start_server(config).await {
        eprintln!("Server failed: {}", e);
        std::process::exit(1);
    }
}
