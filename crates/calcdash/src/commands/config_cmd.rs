//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config;
use crate::error::CliError;
use crate::output;

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Init => {
            let path = config::init_config()?;
            output::print_output(
                &format!("Wrote default config to {}", path.display()),
                global.quiet,
            );
            Ok(())
        }

        ConfigCommand::Show => {
            // Effective config: defaults + file + environment.
            let cfg = config::load_config()?;
            output::print_output(&toml::to_string_pretty(&cfg)?, global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }
    }
}
