use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::assets::load_best_effort;
use crate::ui::messages::header;
use crate::utils::colors::colorize_optional;

/// Print version and data locations. Configured images are loaded best effort:
/// a missing file is reported and the command still succeeds.
pub fn handle(cfg: &Config) -> AppResult<()> {
    header(format!("ecotrack {}", env!("CARGO_PKG_VERSION")));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    println!();
    println!("Config file : {}", Config::config_file().display());
    println!("Database    : {}", cfg.database);

    for (label, path) in [("logo", cfg.logo.as_deref()), ("picture", cfg.picture.as_deref())] {
        let status = match load_best_effort(label, path) {
            Some(asset) => format!("{} ({} bytes)", asset.path.display(), asset.size()),
            None => colorize_optional(""),
        };
        println!("{:<12}: {}", label, status);
    }

    Ok(())
}
