use crate::cli::Cli;
use crate::config::Settings;
use crate::error::Result;

/// Load settings, layer the command line on top and validate the result.
pub fn load_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    apply_cli(&mut settings, cli);
    settings.validate()?;
    Ok(settings)
}

fn apply_cli(settings: &mut Settings, cli: &Cli) {
    if let Some(root) = &cli.root {
        settings.library.root = root.clone();
    }
    if let Some(base) = &cli.base_url {
        settings.library.base_url = base.clone();
    }
    if let Some(name) = &cli.output {
        settings.output.file_name = name.clone();
    }
    if !cli.extensions.is_empty() {
        settings.library.extensions = cli.extensions.clone();
    }
    if cli.skip_hidden {
        settings.library.include_hidden = false;
    }
    if cli.no_follow_links {
        settings.library.follow_links = false;
    }
    if cli.verbose {
        settings.log.level = "debug".to_string();
    }
}
