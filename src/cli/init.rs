use tracing::info;

use crate::cli::InitArgs;
use crate::config::Config;

pub fn execute(args: InitArgs) -> anyhow::Result<()> {
    if args.config.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.config.display()
        );
    }

    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)?;
    std::fs::write(&args.config, yaml)?;

    info!("Wrote default config to {:?}", args.config);
    println!("Wrote {}", args.config.display());
    Ok(())
}
