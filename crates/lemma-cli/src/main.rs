use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use lemma_script::{validate_scene, validate_storyboard, Scene, Timeline};

#[derive(Parser)]
#[command(
    name = "lemma",
    version,
    about = "Lemma — scripted math lessons as animation-engine scene scripts"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every storyboard and its scenes
    List,

    /// Validate one scene, or everything when no scene is given
    Check {
        /// Scene id to check (e.g. pythagorean-proof)
        #[arg()]
        scene: Option<String>,
    },

    /// Export a scene script as JSON
    Export {
        /// Scene id to export
        #[arg()]
        scene: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Print the static timeline of a scene
    Timing {
        /// Scene id to lay out
        #[arg()]
        scene: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::List => cmd_list(),
        Commands::Check { scene } => cmd_check(scene.as_deref()),
        Commands::Export {
            scene,
            output,
            pretty,
        } => cmd_export(&scene, output, pretty),
        Commands::Timing { scene } => cmd_timing(&scene),
    }
}

fn lookup_scene(id: &str) -> Result<Scene> {
    lemma_lessons::find_scene(id)
        .with_context(|| format!("no scene named '{id}' (run `lemma list` to see them)"))
}

fn cmd_list() -> Result<()> {
    for board in lemma_lessons::storyboards() {
        println!(
            "{} — {}x{} @ {:.0}fps, {} total",
            board.name,
            board.settings.width,
            board.settings.height,
            board.settings.fps,
            board.total_duration()
        );
        for scene in &board.scenes {
            println!(
                "  {:<24} {:>3} directives  {}",
                scene.id.to_string(),
                scene.directive_count(),
                scene.total_duration()
            );
        }
    }
    Ok(())
}

fn cmd_check(scene: Option<&str>) -> Result<()> {
    if let Some(id) = scene {
        let scene = lookup_scene(id)?;
        check_one(&scene)?;
        println!("✓ {id} OK");
        return Ok(());
    }

    let mut checked = 0;
    for board in lemma_lessons::storyboards() {
        if let Err(errors) = validate_storyboard(&board) {
            report(&board.name, &errors);
            anyhow::bail!("storyboard '{}' failed validation", board.name);
        }
        for scene in &board.scenes {
            println!("✓ {} OK", scene.id);
            checked += 1;
        }
    }
    info!(checked, "all scenes valid");
    Ok(())
}

fn check_one(scene: &Scene) -> Result<()> {
    if let Err(errors) = validate_scene(scene) {
        report(&scene.id.0, &errors);
        anyhow::bail!("scene '{}' failed validation", scene.id);
    }
    Ok(())
}

fn report(name: &str, errors: &[lemma_core::LemmaError]) {
    eprintln!("✗ {name}:");
    for error in errors {
        eprintln!("    {error}");
    }
}

fn cmd_export(id: &str, output: Option<PathBuf>, pretty: bool) -> Result<()> {
    let scene = lookup_scene(id)?;
    check_one(&scene)?;

    let json = if pretty {
        serde_json::to_string_pretty(&scene)?
    } else {
        serde_json::to_string(&scene)?
    };

    match output {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("exported {} to {}", id, path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_timing(id: &str) -> Result<()> {
    let scene = lookup_scene(id)?;
    let timeline = Timeline::of(&scene);

    println!("{:>4}  {:>12}  {:>8}  directive", "#", "at", "for");
    for entry in &timeline.entries {
        // Declares and shows take no clock time; skip the noise.
        if entry.duration.as_seconds() == 0.0 && !entry.label.starts_with("show") {
            continue;
        }
        println!(
            "{:>4}  {:>12}  {:>8}  {}",
            entry.index,
            entry.at.to_string(),
            entry.duration.to_string(),
            entry.label
        );
    }
    println!("total: {}", timeline.total);
    Ok(())
}
