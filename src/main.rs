use clap::Parser;
use coord_convert::utils::{logger, validation::Validate};
use coord_convert::{CliConfig, ConverterSession, DerivedViews, TomlConfig};

fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    // 初始化日誌
    logger::init_logger(args.verbose, args.json);

    tracing::debug!("CLI config: {:?}", args);

    let config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => TomlConfig::default(),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let mut session = ConverterSession::with_config(&config)?;

    if args.sample {
        session.load_sample();
    }

    if let Some(format) = args.format {
        session.set_format(format);
    }

    for assignment in &args.assignments {
        if args.strict {
            if let Err(e) = session.try_update_field(assignment.field, &assignment.value) {
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        } else {
            session.update_field(assignment.field, &assignment.value);
        }
    }

    if args.json || config.json_output() {
        println!("{}", serde_json::to_string_pretty(session.views())?);
    } else {
        print_views(session.views());
    }

    Ok(())
}

fn print_views(views: &DerivedViews) {
    println!("Input format: {}", views.format);
    println!("  DD:  {}", views.dd);
    println!("  DMS: {}", views.dms);
    println!("  DDM: {}", views.ddm);
}
