use anyhow::Result;
use clap::{Parser, Subcommand};
use fixture_input::{Control, InputState};
use fixture_render::{DebugTextRenderer, Renderer};
use fixture_scene::{FrameControl, Scene, SceneConfig};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fixture-cli", about = "Headless tools for the fixture scene")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML scene configuration; built-in scene when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and scene summary
    Info,
    /// Print vertex/triangle statistics for the generated primitives
    Meshes,
    /// Step the scene headlessly and print the resulting frame
    Simulate {
        /// Number of frames to step
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Seconds per frame
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Controls held for the whole run (e.g. forward, orbit-left)
        #[arg(long = "hold")]
        hold: Vec<Control>,
        /// Print a snapshot line every N frames (0 disables)
        #[arg(long, default_value = "0")]
        every: u64,
        /// Emit the final state as JSON instead of the draw listing
        #[arg(long)]
        json: bool,
    },
    /// Print the effective scene configuration as YAML
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SceneConfig::load(path)?,
        None => SceneConfig::default(),
    };

    match cli.command {
        Commands::Info => {
            let scene = Scene::new(&config)?;
            println!("fixture-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("render: {}", fixture_render::crate_info());
            println!("meshes: {}", scene.meshes().len());
            println!("pendulums: {}", scene.pendulums().len());
            println!("draws per frame: {}", scene.frame().draws.len());
        }
        Commands::Meshes => {
            let scene = Scene::new(&config)?;
            let p = scene.primitives();
            for (name, handle) in [
                ("sphere", p.sphere),
                ("cube", p.cube),
                ("cylinder", p.cylinder),
                ("pyramid", p.pyramid),
            ] {
                let Some(mesh) = scene.meshes().get(handle) else {
                    continue;
                };
                let (lo, hi) = mesh.bounds().unwrap_or_default();
                println!(
                    "{name:<9} handle={} vertices={:<4} triangles={:<4} bounds=({:.2}, {:.2}, {:.2})..({:.2}, {:.2}, {:.2})",
                    handle.0,
                    mesh.vertex_count(),
                    mesh.triangle_count(),
                    lo.x,
                    lo.y,
                    lo.z,
                    hi.x,
                    hi.y,
                    hi.z
                );
            }
        }
        Commands::Simulate {
            frames,
            dt,
            hold,
            every,
            json,
        } => simulate(&config, frames, dt, hold, every, json)?,
        Commands::Config => {
            print!("{}", config.to_yaml_string()?);
        }
    }

    Ok(())
}

fn simulate(
    config: &SceneConfig,
    frames: u64,
    dt: f32,
    hold: Vec<Control>,
    every: u64,
    json: bool,
) -> Result<()> {
    let mut scene = Scene::new(config)?;
    let input: InputState = hold.into_iter().collect();
    tracing::debug!(frames, dt, held = ?input.held().collect::<Vec<_>>(), "simulating");

    for i in 1..=frames {
        if scene.update(dt, &input) == FrameControl::Exit {
            tracing::info!(frame = i, "exit control held; stopping");
            break;
        }
        if every > 0 && i % every == 0 {
            let snap = scene.snapshot();
            let angles: Vec<String> = snap
                .pendulums
                .iter()
                .map(|p| format!("{:.3}", p.angle))
                .collect();
            println!(
                "frame {:>5} t={:.3} player=({:.2}, {:.2}, {:.2}) elevator={:.3} pendulums=[{}]",
                snap.frame,
                snap.elapsed,
                snap.player.x,
                snap.player.y,
                snap.player.z,
                snap.elevator.displacement,
                angles.join(", ")
            );
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&scene.snapshot())?);
    } else {
        print!("{}", DebugTextRenderer::new().render(&scene.frame()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_parses_held_controls() {
        let cli = Cli::try_parse_from([
            "fixture-cli",
            "simulate",
            "--frames",
            "10",
            "--hold",
            "forward",
            "--hold",
            "Orbit-Left",
        ])
        .unwrap();
        let Commands::Simulate { frames, hold, every, json, .. } = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(frames, 10);
        assert_eq!(hold, vec![Control::Forward, Control::OrbitLeft]);
        assert_eq!(every, 0);
        assert!(!json);
    }

    #[test]
    fn unknown_control_is_rejected() {
        assert!(Cli::try_parse_from(["fixture-cli", "simulate", "--hold", "jump"]).is_err());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::try_parse_from(["fixture-cli", "meshes", "--config", "scene.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("scene.yaml")));
    }

    #[test]
    fn simulate_runs_on_default_scene() {
        simulate(&SceneConfig::default(), 5, 0.1, vec![Control::Forward], 0, true).unwrap();
    }
}
