//! # engine_app: headless scripting harness
//!
//! Loads a JSON scene into an [`InMemoryHost`] and drives the scripting API
//! against it the way a game script would at startup.
//!
//! ## Startup Sequence
//!
//! 1. Build the in-memory engine and apply the requested window size.
//! 2. Load the scene file, if one was given.
//! 3. Create the script runtime (configured from the environment).
//! 4. List the scene, resolve the player by tag and make sure it carries a
//!    script component.

mod scene_file;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use engine_host::InMemoryHost;
use engine_script::{ScriptComponent, ScriptConfig, ScriptRuntime};
use scene_file::SceneFile;

#[derive(Parser)]
#[command(name = "engine_app", about = "Headless harness for the scripting API")]
struct Args {
    /// Scene description to load (JSON)
    #[arg(short, long)]
    scene: Option<PathBuf>,

    /// Window width reported to scripts
    #[arg(long)]
    width: Option<u32>,

    /// Window height reported to scripts
    #[arg(long)]
    height: Option<u32>,

    /// Tag of the entity treated as the player
    #[arg(short, long, default_value = "Player")]
    player_tag: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("engine_app=info".parse()?))
        .init();

    let args = Args::parse();
    let host = Arc::new(InMemoryHost::new());

    if let Some(path) = &args.scene {
        info!(path = %path.display(), "loading scene");
        let scene = SceneFile::from_path(path)
            .with_context(|| format!("reading scene {}", path.display()))?;
        let loaded = scene.load_into(&host)?;
        info!(entities = loaded.len(), "scene loaded");
    }

    let runtime = ScriptRuntime::with_config(host.clone(), ScriptConfig::from_env());
    run(&runtime, &args)?;

    info!(
        engine_calls = host.total_calls(),
        log_messages = host.logged_messages().len(),
        "harness finished"
    );
    Ok(())
}

fn run(runtime: &ScriptRuntime, args: &Args) -> Result<()> {
    let app = runtime.application();
    if let Some(width) = args.width {
        app.set_width(width)?;
    }
    if let Some(height) = args.height {
        app.set_height(height)?;
    }
    let (width, height) = app.size()?;
    info!(width, height, "window");

    let scene = runtime.scene();
    for entity in scene.entities()? {
        let tag = entity.tag()?;
        let position = entity.translation()?;
        let parent = entity.parent()?.map(|p| p.id());
        info!(entity = %entity.id(), %tag, ?parent, %position, "scene entity");
    }

    let log = runtime.log();
    let Some(player) = scene.find_entity_by_tag(&args.player_tag)? else {
        warn!(tag = %args.player_tag, "player not found");
        log.warn(format_args!("no entity tagged {:?}", args.player_tag))?;
        return Ok(());
    };

    let had_script = player.has_component::<ScriptComponent>()?;
    let script = player.add_component::<ScriptComponent>()?;
    info!(entity = %script.entity_id(), attached = !had_script, "player script ready");
    let position = player.translation()?;
    log.info(format_args!("{} ({}) ready at {position}", args.player_tag, player.id()))?;
    Ok(())
}
