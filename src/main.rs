//! gogol main entrypoint.

use gogol_cli::run;
use gogol_cli::ui::messages::error;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
