extern crate rust_raytracer as root;

use root::parsing::config::Config;
use root::parsing::{construct_world, get_settings};
use root::prelude::{View, World};
use root::renderer::{NaiveRenderer, Renderer};

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use structopt::StructOpt;
use tracing::level_filters::LevelFilter;
use tracing::{error, info};

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long)]
    pub scene_file: Option<String>,
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        _ => default,
    }
}

fn construct_scene(config: &Config) -> anyhow::Result<(World, View)> {
    match &config.scene_file {
        Some(scene_file) => construct_world(&PathBuf::from(scene_file)),
        None => {
            info!("no scene file given, using the reference scene");
            Ok((World::reference(), View::reference()))
        }
    }
}

fn run(opts: Opt) -> anyhow::Result<()> {
    let mut config: Config = get_settings(Path::new(&opts.config_file))?.into();

    // override scene file based on provided command line argument
    if opts.scene_file.is_some() {
        config.scene_file = opts.scene_file;
    }

    let threads = config.max_threads();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()?;
    info!("using {} threads", threads);

    let (world, view) = construct_scene(&config)?;

    if opts.dry_run {
        info!("dry run, skipping render");
        return Ok(());
    }
    NaiveRenderer::new().render(world, view, &config)
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .init();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("fatal error, aborting: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
