use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use std::{fs, path::PathBuf};
use tvs_instance::{Instance, ScheduleParams};
use tvs_utils::{compress_obj, dejsonify, jsonify};

fn cli() -> Command {
    Command::new("tvs-generator")
        .about("Generates TV channel scheduling problem instances")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("generate_instance")
                .about("Generates an instance")
                .arg(
                    arg!(<PARAMS> "Params json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<RAND_HASH> "A string used in seed generation")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(arg!(<NONCE> "Nonce value").value_parser(clap::value_parser!(u64)))
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the instance will be saved to this file path (default json)")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--compress [COMPRESS] "If output file is set, the instance will be compressed as zlib")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn main() {
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("generate_instance", sub_m)) => generate_instance(
            sub_m.get_one::<String>("PARAMS").unwrap().clone(),
            sub_m.get_one::<String>("RAND_HASH").unwrap().clone(),
            *sub_m.get_one::<u64>("NONCE").unwrap(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_one::<bool>("compress").unwrap().clone(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

pub fn generate_instance(
    params: String,
    rand_hash: String,
    nonce: u64,
    output_file: Option<PathBuf>,
    compress: bool,
) -> Result<()> {
    let params = load_params(&params);
    params.validate()?;
    let seed = params.calc_seed(&rand_hash, nonce);
    let instance = Instance::generate(&seed, &params)?;

    if let Some(path) = output_file {
        if compress {
            fs::write(&path, compress_obj(&instance))?;
        } else {
            fs::write(&path, jsonify(&instance))?;
        }
        println!("instance written to: {:?}", path);
    } else {
        println!("{}", jsonify(&instance));
    }
    Ok(())
}

fn load_params(params: &str) -> ScheduleParams {
    let params = if params.ends_with(".json") {
        fs::read_to_string(params).unwrap_or_else(|_| {
            eprintln!("Failed to read params file: {}", params);
            std::process::exit(1);
        })
    } else {
        params.to_string()
    };

    dejsonify::<ScheduleParams>(&params).unwrap_or_else(|_| {
        eprintln!("Failed to parse params");
        std::process::exit(1);
    })
}
