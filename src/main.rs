//! ecotrack main entrypoint.

use ecotrack::run;
use ecotrack::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
