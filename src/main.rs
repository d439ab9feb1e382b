use std::env;

use riskfolio::api::CommandError;
use tracing::error;

#[tokio::main]
async fn main() {
    riskfolio::logging::init_tracing();

    let raw_args: Vec<String> = env::args().collect();
    match raw_args.get(1).map(|s| s.as_str()) {
        Some("serve") => {
            let port = raw_args
                .get(2)
                .and_then(|s| s.parse::<u16>().ok())
                .unwrap_or(8080);
            if let Err(e) = riskfolio::api::run_http_server(port).await {
                error!(error = %e, "server error");
                std::process::exit(1);
            }
        }
        Some("evaluate") => match riskfolio::api::run_evaluate_command(&raw_args[1..]) {
            Ok(json) => println!("{json}"),
            Err(CommandError::Usage(e)) => e.exit(),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            }
        },
        _ => {
            eprintln!("Usage: riskfolio serve [port] | riskfolio evaluate [--help]");
            std::process::exit(1);
        }
    }
}
