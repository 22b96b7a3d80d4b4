mod args;

use std::process;

use blueprint_persist::naming::SplitNamer;
use blueprint_scan::generate;
use clap::Parser;

use crate::args::Cli;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let world = match blueprint_world::load_world(&cli.world) {
        Ok(world) => world,
        Err(e) => {
            log::error!("failed to load world {}: {e}", cli.world.display());
            process::exit(1);
        }
    };

    let params = cli.run_params();
    let namer = SplitNamer::new(&cli.output_dir);
    match generate(&world, &params, &namer) {
        Ok(files) => {
            println!("Generated blueprint file(s):");
            for file in files {
                println!("  {}", file.display());
            }
        }
        Err(e) => {
            log::error!("{e}");
            process::exit(1);
        }
    }
}
