use anyhow::{anyhow, Result};
use clap::{arg, Command};
use std::{fs, io::Read};
use tvs_instance::Instance;
use tvs_utils::dejsonify;

fn cli() -> Command {
    Command::new("tvs-verifier")
        .about("Verifies a scheduling problem instance")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("verify_instance")
                .about("Verifies an instance")
                .arg(
                    arg!(<INSTANCE> "Instance json string, path to json file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("verify_instance", sub_m)) => {
            verify_instance(sub_m.get_one::<String>("INSTANCE").unwrap().clone())
        }
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn verify_instance(instance_path: String) -> Result<()> {
    let instance = load_instance(&instance_path);

    match instance.verify() {
        Ok(_) => println!("Instance is valid"),
        Err(e) => {
            eprintln!("Verification error: {}", e);
            std::process::exit(1);
        }
    }
    Ok(())
}

fn load_instance(instance: &str) -> Instance {
    let instance = if instance == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .unwrap_or_else(|_| {
                eprintln!("Failed to read instance from stdin");
                std::process::exit(1);
            });
        buffer
    } else if instance.ends_with(".json") {
        fs::read_to_string(instance).unwrap_or_else(|_| {
            eprintln!("Failed to read instance file: {}", instance);
            std::process::exit(1);
        })
    } else {
        instance.to_string()
    };

    dejsonify::<Instance>(&instance).unwrap_or_else(|_| {
        eprintln!("Failed to parse instance");
        std::process::exit(1);
    })
}
