//! Mark rover teleop CLI.
//!
//! Provides three modes of operation:
//! - `headless`: Replay a key script against the rig, optionally recording
//!   each frame to CSV, and print the result
//! - `bindings`: Print the key, command code and joint table
//! - `info`: Print workspace crate versions

mod script;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use mark_core::prelude::*;
use mark_record::Recorder;
use mark_sim::{SceneBuilder, SessionStats};
use mark_teleop::{DriveTable, KeyboardTeleopMap, TeleopKey, TeleopSpeeds};
use mark_viz::ActiveCamera;

// ---------------------------------------------------------------------------
// CLI
// ---------------------------------------------------------------------------

/// Script run by `headless` without `--script`, and when no subcommand is given.
const DEFAULT_SCRIPT: &str = "w*10";

/// Mark rover teleop rig.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Print Bevy log output.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a key script headlessly and print the final rig state.
    Headless {
        /// Comma-separated steps, e.g. "w*30, w+a*10, idle*5, 2".
        #[arg(short, long, default_value = DEFAULT_SCRIPT)]
        script: String,

        /// Run exactly this many frames, truncating or padding the script.
        #[arg(short, long)]
        frames: Option<u32>,

        /// Rig configuration file (TOML).
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Record every frame to `<DIR>/<timestamp>/data.csv`.
        #[arg(short, long, value_name = "DIR")]
        record: Option<PathBuf>,
    },

    /// Print key bindings and the joints each key drives.
    Bindings,

    /// Print crate information.
    Info,
}

// ---------------------------------------------------------------------------
// Mode implementations
// ---------------------------------------------------------------------------

#[derive(Clone, Copy)]
struct HeadlessOptions<'a> {
    script: &'a str,
    frames: Option<u32>,
    config: Option<&'a Path>,
    record: Option<&'a Path>,
    verbose: bool,
}

impl Default for HeadlessOptions<'_> {
    fn default() -> Self {
        Self {
            script: DEFAULT_SCRIPT,
            frames: None,
            config: None,
            record: None,
            verbose: false,
        }
    }
}

fn run_headless(options: &HeadlessOptions<'_>) -> Result<(), MarkError> {
    let HeadlessOptions {
        script,
        frames,
        config,
        record,
        verbose,
    } = *options;

    let config = match config {
        Some(path) => RigConfig::from_file(path)?,
        None => RigConfig::default(),
    };
    let steps = script::parse_script(script)?;

    let mut scene = SceneBuilder::new()
        .with_config(config)
        .with_logging(verbose)
        .build()?;
    if let Some(dir) = record {
        scene.app.insert_resource(Recorder::start(dir)?);
    }
    let ran = script::replay(&mut scene.app, &steps, frames);

    println!("frames: {ran}");
    if let Some(mut recorder) = scene.app.world_mut().remove_resource::<Recorder>() {
        recorder.finish()?;
        println!(
            "recorded {} rows to {}",
            recorder.rows(),
            recorder.session_dir().display()
        );
    }
    println!();
    println!("joint targets:");
    for role in JointRole::ALL {
        let target = scene.target(role).unwrap_or(f32::NAN);
        println!("  {:<14} {target:>10.3}", role.name());
    }

    let world = scene.app.world();
    let active = world.resource::<ActiveCamera>().0;
    println!();
    println!("active camera: {active}");
    if let Some(position) = scene.camera_position(CameraSlot::TopDown) {
        println!(
            "top-down camera: ({:.3}, {:.3}, {:.3})",
            position.x, position.y, position.z
        );
    }

    let stats = world.resource::<SessionStats>();
    println!();
    println!(
        "session: frames_driven={}, camera_switches={}",
        stats.frames_driven, stats.camera_switches
    );
    for (key, held) in &stats.held_frames {
        println!("  {:<14} held {held} frames", key.label());
    }

    Ok(())
}

fn run_bindings() {
    let keyboard = KeyboardTeleopMap::mark_default();
    let table = DriveTable::mark_default();
    let speeds = TeleopSpeeds::default();

    println!("{:<6} {:<11} {:<14} effects", "code", "key", "input");
    for input in TeleopKey::ALL {
        let key = keyboard
            .key_for(input)
            .map_or_else(|| "-".to_owned(), |key| format!("{key:?}"));
        let effects = table
            .effects(input)
            .iter()
            .map(|effect| format!("{} {:+}", effect.role, effect.delta(&speeds)))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:<6} {key:<11} {:<14} {effects}",
            input.command_code(),
            input.label()
        );
    }

    println!();
    println!("cameras: Digit1 -> {}, Digit2 -> {}", CameraSlot::TopDown, CameraSlot::Mark);
}

fn crate_versions() -> [(&'static str, &'static str); 5] {
    [
        ("mark-core", mark_core::VERSION),
        ("mark-teleop", mark_teleop::VERSION),
        ("mark-viz", mark_viz::VERSION),
        ("mark-record", mark_record::VERSION),
        ("mark-sim", mark_sim::VERSION),
    ]
}

fn run_info() {
    println!("mark v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("crates:");
    for (name, version) in crate_versions() {
        println!("  {name:<12} {version}");
    }
}

// ---------------------------------------------------------------------------
// main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Headless {
            script,
            frames,
            config,
            record,
        }) => run_headless(&HeadlessOptions {
            script: &script,
            frames,
            config: config.as_deref(),
            record: record.as_deref(),
            verbose: cli.verbose,
        }),
        Some(Commands::Bindings) => {
            run_bindings();
            Ok(())
        }
        Some(Commands::Info) => {
            run_info();
            Ok(())
        }
        None => run_headless(&HeadlessOptions {
            verbose: cli.verbose,
            ..HeadlessOptions::default()
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
