use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use pauroc::configuration::Configuration;
use pauroc::manager::managererror::ManagerError;
use pauroc::manager::manager::IManager;

const USAGE: &str = "usage: pauroc <config.json> [curve] [range]";

fn run(config_path: &str, curve_name: Option<&str>, range_name: Option<&str>) -> Result<(), ManagerError> {
    let config = Configuration::new();
    config.from_reader(config_path)?;

    let curve_names = match curve_name {
        Some(name) => vec![name.to_owned()],
        None => config.curve_manager().names()
    };
    let range_names = match range_name {
        Some(name) => vec![name.to_owned()],
        None => config.range_manager().names()
    };

    for curve_name in curve_names.iter() {
        let curve = config.curve_manager().get(curve_name)?;
        for range_name in range_names.iter() {
            let range = config.range_manager().get(range_name)?;
            println!("{}\t{}\t[{}, {}]\t{}",
                     curve_name,
                     range_name,
                     range.start(),
                     range.end(),
                     config.evaluate(curve_name, range_name)?);
        }
        println!("{}\tauc\t[0, 1]\t{}", curve_name, config.report(curve.auc()));
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let Some(config_path) = args.get(1) else {
        eprintln!("{}", USAGE);
        return ExitCode::from(2);
    };

    match run(config_path, args.get(2).map(String::as_str), args.get(3).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}
