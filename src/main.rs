use clap::Parser;
use mapgen_settings::config::toml_config::LogFormat;
use mapgen_settings::utils::{logger, validation::Validate};
use mapgen_settings::{CliConfig, LocalStorage, SettingsError, SettingsPersistence, TomlConfig};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // Load the TOML file first; it can switch logging to JSON or debug
    let file_config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let json_logs = args.json_logs
        || file_config
            .as_ref()
            .is_some_and(|c| c.log_format() == LogFormat::Json);
    let debug = args.debug || file_config.as_ref().is_some_and(|c| c.debug_enabled());

    // Initialise logging
    if json_logs {
        logger::init_json_logger(args.verbose || debug);
    } else {
        logger::init_cli_logger(args.verbose || debug);
    }

    tracing::info!("Starting mapgen-settings");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    // Validate command line and file values before touching the state file
    if let Err(e) = validate_inputs(&args, file_config.as_ref()) {
        exit_with("Configuration validation failed", &e);
    }

    // Defaults, then TOML, then state file, then --set
    let persistence = SettingsPersistence::new(LocalStorage::new(".".to_string()));
    let store = match args.build_store(file_config.as_ref(), &persistence, debug) {
        Ok(store) => store,
        Err(e) => exit_with("Failed to load settings state", &e),
    };

    if args.save {
        if let Some(state) = &args.state {
            if let Err(e) = persistence.save(&store, state) {
                exit_with("Failed to save settings state", &e);
            }
            tracing::info!("📁 Settings saved to: {}", state);
        }
    }

    for (key, value) in store.iter() {
        println!("{} = {}", key, value);
    }

    Ok(())
}

fn validate_inputs(args: &CliConfig, file_config: Option<&TomlConfig>) -> Result<(), SettingsError> {
    args.validate()?;
    if let Some(config) = file_config {
        config.validate()?;
    }
    Ok(())
}

fn exit_with(context: &str, e: &SettingsError) -> ! {
    tracing::error!("❌ {}: {}", context, e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
