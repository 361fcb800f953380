//! Headless driver: composes the portfolio scene into the recording
//! engine, ticks it at a fixed rate and logs what happens.

use std::{
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    thread,
    time::Duration,
};

use clap::{Parser, ValueEnum};
use starfolio::{
    input::PointerEvent,
    interaction::Interaction,
    options::SceneOptions,
    scene::{compose, HeadlessEngine, Scene, SceneHandles},
    util::FrameTiming,
    SceneError,
};

/// Viewport the scripted pointer moves over.
const VIEWPORT: (f32, f32) = (1280.0, 720.0);

#[derive(Debug, Parser)]
#[command(name = "starfolio", version, about = "Run the portfolio scene headless")]
struct Args {
    /// Scene options TOML; built-in defaults when omitted.
    #[arg(long, conflicts_with = "preset")]
    options: Option<PathBuf>,
    /// Named preset from `--preset-dir`.
    #[arg(long)]
    preset: Option<String>,
    /// Directory holding `<name>.toml` presets.
    #[arg(long, default_value = "presets")]
    preset_dir: PathBuf,
    /// Print the presets in `--preset-dir` and exit.
    #[arg(long)]
    list_presets: bool,
    /// Frames to simulate.
    #[arg(long, default_value_t = 300)]
    frames: u32,
    /// Simulated frame rate.
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Only load assets that exist under this directory.
    #[arg(long)]
    asset_root: Option<PathBuf>,
    /// Pace frames against the wall clock instead of stepping.
    #[arg(long)]
    realtime: bool,
    /// Scripted pointer input.
    #[arg(long, value_enum, default_value_t = Script::None)]
    script: Script,
    /// Print the options JSON schema and exit.
    #[arg(long)]
    dump_schema: bool,
    /// Write the effective options as TOML to this path and exit.
    #[arg(long)]
    save_options: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Script {
    /// No pointer input.
    None,
    /// Sweep the pointer across the canvas, hover the interactive object
    /// through the middle third of the run and click it once.
    PointerDemo,
}

struct HeadlessRun {
    scene: Scene<HeadlessEngine>,
    handles: SceneHandles,
    timing: FrameTiming,
    frames: u32,
    realtime: bool,
    script: Script,
}

impl HeadlessRun {
    fn new(args: &Args, options: &SceneOptions) -> Result<Self, SceneError> {
        let engine = match &args.asset_root {
            Some(root) => HeadlessEngine::with_asset_root(root),
            None => HeadlessEngine::new(),
        };
        let mut scene = Scene::new(engine);
        scene.resize(VIEWPORT.0, VIEWPORT.1);
        let handles = compose(&mut scene, options, &Interaction::default())?;
        for path in &handles.skipped {
            log::warn!("left out {path}");
        }
        Ok(Self {
            scene,
            handles,
            timing: FrameTiming::new(args.fps),
            frames: args.frames,
            realtime: args.realtime,
            script: args.script,
        })
    }

    fn run(&mut self) {
        let fps = self.timing.target_fps().max(1);
        let step = 1.0 / fps as f32;
        for frame in 0..self.frames {
            if self.script == Script::PointerDemo {
                self.pointer_demo(frame);
            }
            let clock = if self.realtime {
                while !self.timing.should_render() {
                    thread::sleep(Duration::from_millis(1));
                }
                self.timing.begin_frame()
            } else {
                self.timing.step(step)
            };
            self.scene.frame(clock);
            if frame % fps == 0 {
                self.report(frame, clock.elapsed);
            }
        }
        log::info!(
            "ran {} frames ({:.1} fps), {} transform writes",
            self.scene.frame_count(),
            self.timing.fps(),
            self.scene.engine().transform_writes()
        );
        self.scene.clear();
    }

    fn pointer_demo(&mut self, frame: u32) {
        let (width, height) = VIEWPORT;
        let t = frame as f32 / self.frames.max(1) as f32;
        let (x, y) = (t * width, height * 0.5);
        self.scene.pointer_moved(x, y);

        let Some(rock) = self.handles.interactive else {
            return;
        };
        let enter = self.frames / 3;
        let leave = self.frames * 2 / 3;
        let event = if frame == enter {
            Some(PointerEvent::Enter)
        } else if frame == (enter + leave) / 2 {
            Some(PointerEvent::Click)
        } else if frame == leave {
            Some(PointerEvent::Leave)
        } else {
            None
        };
        if let Some(event) = event {
            let _ = self.scene.dispatch(rock, event);
        }
        if (enter..leave).contains(&frame) {
            let _ = self.scene.dispatch(rock, PointerEvent::Move { x, y });
        }
    }

    fn report(&self, frame: u32, elapsed: f32) {
        let engine = self.scene.engine();
        let orbiter = engine
            .nodes_labelled("orbiter")
            .first()
            .and_then(|&id| engine.world_position(id));
        let circle = engine
            .nodes_labelled("mouse circle")
            .first()
            .and_then(|&id| engine.world_position(id));
        log::info!(
            "frame {frame} t={elapsed:.2}s orbiter={orbiter:?} circle={circle:?} \
             lights={} outlined={} paused={}",
            engine.light_count(),
            engine.outlined().len(),
            self.handles.interactive_pause.is_paused()
        );
        for tooltip in self.scene.overlays() {
            log::info!(
                "tooltip {:?} at ({:.0}, {:.0})",
                tooltip.text,
                tooltip.left,
                tooltip.top
            );
        }
    }
}

fn load_options(args: &Args) -> Result<SceneOptions, SceneError> {
    if let Some(name) = &args.preset {
        log::info!("loading preset {name} from {}", args.preset_dir.display());
        return SceneOptions::load_preset(&args.preset_dir, name);
    }
    match &args.options {
        Some(path) => {
            log::info!("loading options from {}", path.display());
            SceneOptions::load(path)
        }
        None => Ok(SceneOptions::default()),
    }
}

fn run(args: &Args) -> Result<(), SceneError> {
    if args.dump_schema {
        let schema = serde_json::to_string_pretty(&SceneOptions::json_schema())
            .map_err(|e| SceneError::OptionsParse(e.to_string()))?;
        writeln!(io::stdout(), "{schema}")?;
        return Ok(());
    }

    if args.list_presets {
        let mut stdout = io::stdout().lock();
        for name in SceneOptions::list_presets(&args.preset_dir) {
            writeln!(stdout, "{name}")?;
        }
        return Ok(());
    }

    let options = load_options(args)?;
    if let Some(path) = &args.save_options {
        options.save(path)?;
        log::info!("wrote options to {}", path.display());
        return Ok(());
    }

    HeadlessRun::new(args, &options)?.run();
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
