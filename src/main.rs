use std::error::Error;
use std::path::PathBuf;

use clap::Parser;

mod config;
mod obj;

use config::{CuboidConfig, load_config_from_path};

#[derive(Parser, Debug)]
#[command(name = "pcuboid")]
#[command(version, about = "Build a subdivided, eased cuboid mesh and export it as OBJ")]
struct Args {
    /// TOML config with [shape] and [export] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Half extents along x,y,z
    #[arg(long, value_delimiter = ',', num_args = 3)]
    half_extents: Option<Vec<f64>>,

    /// Segment counts along x,y,z
    #[arg(long, value_delimiter = ',', num_args = 3)]
    subdivisions: Option<Vec<u32>>,

    /// Easing exponents along x,y,z (1 = uniform spacing)
    #[arg(long, value_delimiter = ',', num_args = 3)]
    tones: Option<Vec<f64>>,

    /// Output OBJ path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Object name written to the OBJ file
    #[arg(long)]
    name: Option<String>,

    /// Clamp shape values to the interactive panel's ranges before building
    #[arg(long)]
    clamp: bool,

    /// Verify the mesh is closed before writing it
    #[arg(long)]
    check: bool,

    /// Log per-side build details
    #[arg(short, long)]
    verbose: bool,
}

fn triple<T>(flag: &str, v: Vec<T>) -> Result<[T; 3], Box<dyn Error>> {
    <[T; 3]>::try_from(v).map_err(|v| format!("--{} takes 3 values, got {}", flag, v.len()).into())
}

impl Args {
    fn resolve(&self) -> Result<CuboidConfig, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => {
                log::info!("loading config from {}", path.display());
                load_config_from_path(path)?
            }
            None => CuboidConfig::default(),
        };
        if let Some(v) = self.half_extents.clone() {
            cfg.shape.half_extents = triple("half-extents", v)?;
        }
        if let Some(v) = self.subdivisions.clone() {
            cfg.shape.subdivisions = triple("subdivisions", v)?;
        }
        if let Some(v) = self.tones.clone() {
            cfg.shape.tones = triple("tones", v)?;
        }
        if let Some(p) = &self.output {
            cfg.export.path = p.clone();
        }
        if let Some(n) = &self.name {
            cfg.export.object_name = n.clone();
        }
        if self.clamp {
            cfg.shape.clamp_to_host_ranges();
        }
        Ok(cfg)
    }
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let cfg = args.resolve()?;
    log::info!(
        "shape half_extents={:?} subdivisions={:?} tones={:?}",
        cfg.shape.half_extents,
        cfg.shape.subdivisions,
        cfg.shape.tones
    );
    let mesh = cfg.shape.params().build()?;
    if args.check {
        if !mesh.is_closed() {
            return Err("mesh is not closed".into());
        }
        log::info!("closed surface check passed");
    }
    let b = mesh.bounds();
    log::info!(
        "built {} vertices, {} quads, bounds min={:?} max={:?}",
        mesh.vertex_count(),
        mesh.face_count(),
        b.min.to_array(),
        b.max.to_array()
    );
    obj::write_obj(&cfg.export.path, &mesh, &cfg.export.object_name)?;
    log::info!("wrote {}", cfg.export.path.display());
    Ok(())
}

fn main() {
    let args = Args::parse();
    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
