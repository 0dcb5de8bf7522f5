//! extrude-rs - headless storyboard player
//!
//! Builds, inspects and plays scene files from the command line.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use extrude_rs::actions::{Action, ActionKind, RotationAxis, RotationOrigin};
use extrude_rs::settings::EditorSettings;
use extrude_rs::shapes::{generators, Polygon, ShapeKind};
use extrude_rs::{Point, Scene, Shape};

#[derive(Parser, Debug)]
#[command(name = "extrude-rs", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a scene to the end and report the result.
    Play(PlayArgs),
    /// Write the startup scene: a generated shape turning once about X.
    Demo(DemoArgs),
    /// Print the shape and action list of a scene.
    Info(InfoArgs),
    /// Write a scene whose shape is built from clicked points.
    Draw(DrawArgs),
    /// Move the point under one position to another in a scene file.
    Drag(DragArgs),
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Scene file (defaults to the last scene used).
    scene: Option<PathBuf>,

    /// Dump every frame as JSON to this path.
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    /// Output scene path.
    out: PathBuf,

    /// Shape to generate.
    #[arg(long, value_enum, default_value_t = ShapeChoice::Circle)]
    shape: ShapeChoice,

    /// Steps of the rotation (defaults to the editor's action length).
    #[arg(long)]
    steps: Option<u32>,
}

#[derive(Parser, Debug)]
struct InfoArgs {
    /// Scene file.
    scene: PathBuf,
}

#[derive(Parser, Debug)]
struct DrawArgs {
    /// Output scene path.
    out: PathBuf,

    /// Points as `x,y`, in click order.
    #[arg(required = true, value_parser = parse_xy, allow_hyphen_values = true)]
    points: Vec<(f64, f64)>,

    /// Build a Bezier outline instead of a polygon.
    #[arg(long)]
    bezier: bool,
}

#[derive(Parser, Debug)]
struct DragArgs {
    /// Scene file, rewritten in place.
    scene: PathBuf,

    /// Position to pick the point at, as `x,y`.
    #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
    from: (f64, f64),

    /// Where the point goes, as `x,y`.
    #[arg(long, value_parser = parse_xy, allow_hyphen_values = true)]
    to: (f64, f64),
}

fn parse_xy(s: &str) -> Result<(f64, f64), String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got '{s}'"))?;
    let coord = |v: &str| {
        v.trim()
            .parse::<f64>()
            .map_err(|e| format!("bad coordinate '{v}': {e}"))
    };
    Ok((coord(x)?, coord(y)?))
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ShapeChoice {
    Circle,
    HalfCircle,
    Square,
    Line,
}

impl ShapeChoice {
    fn generate(self, settings: &EditorSettings) -> Polygon {
        let size = settings.generator_size;
        let points = settings.generator_points;
        match self {
            ShapeChoice::Circle => generators::circle(size, points, settings.generator_on_z),
            ShapeChoice::HalfCircle => {
                generators::half_circle(size, points, settings.generator_on_z)
            }
            ShapeChoice::Square => generators::square(size, points),
            ShapeChoice::Line => generators::line(size, points),
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut settings = EditorSettings::load();

    let result = match cli.cmd {
        Command::Play(args) => cmd_play(args, &mut settings),
        Command::Demo(args) => cmd_demo(args, &mut settings),
        Command::Info(args) => cmd_info(args, &mut settings),
        Command::Draw(args) => cmd_draw(args, &mut settings),
        Command::Drag(args) => cmd_drag(args, &mut settings),
    };

    settings.save();
    result
}

fn cmd_play(args: PlayArgs, settings: &mut EditorSettings) -> anyhow::Result<()> {
    let path = args
        .scene
        .or_else(|| settings.last_scene.clone())
        .context("no scene given and no previous scene remembered")?;

    let mut scene = Scene::load(&path)?;
    settings.remember_scene(&path);

    scene.play();
    let mut steps = 0usize;
    while scene.tick() {
        steps += 1;
    }

    let storyboard = scene.storyboard();
    let last = scene.current_points();
    let centroid = Point::centroid(&last);
    println!(
        "{}: {} steps ({} scheduled), {} frames",
        path.display(),
        steps,
        storyboard.total_steps(),
        storyboard.frames().len()
    );
    println!(
        "final centroid: ({:.4}, {:.4}, {:.4})",
        centroid.x, centroid.y, centroid.z
    );

    if let Some(json_path) = args.json {
        let file = File::create(&json_path)
            .with_context(|| format!("create frame dump '{}'", json_path.display()))?;
        serde_json::to_writer_pretty(BufWriter::new(file), storyboard.frames())
            .with_context(|| format!("write frame dump '{}'", json_path.display()))?;
        eprintln!("wrote {}", json_path.display());
    }

    Ok(())
}

fn cmd_demo(args: DemoArgs, settings: &mut EditorSettings) -> anyhow::Result<()> {
    let steps = args.steps.unwrap_or(settings.default_action_steps);
    anyhow::ensure!(steps > 0, "--steps must be at least 1");

    let mut scene = Scene::with_shape(args.shape.generate(settings));
    scene.storyboard_mut().add_action(Action::rotate(
        std::f64::consts::TAU,
        RotationOrigin::Zero,
        RotationAxis::X,
        steps,
    ));

    write_scene(&scene, &args.out, settings)
}

fn cmd_draw(args: DrawArgs, settings: &mut EditorSettings) -> anyhow::Result<()> {
    let kind = if args.bezier {
        ShapeKind::Bezier
    } else {
        ShapeKind::Polygon
    };
    let mut shape = Shape::empty(kind);
    for &(x, y) in &args.points {
        settings.add_point(&mut shape, x, y);
    }
    log::info!(
        "Drew {} from {} clicks ({} outline points)",
        shape.name(),
        args.points.len(),
        shape.point_count()
    );

    write_scene(&Scene::with_shape(shape), &args.out, settings)
}

fn cmd_drag(args: DragArgs, settings: &mut EditorSettings) -> anyhow::Result<()> {
    let mut scene = Scene::load(&args.scene)?;

    let handle = settings
        .drag_point(scene.shape_mut(), args.from, args.to)
        .with_context(|| {
            format!(
                "no point within {} of ({}, {})",
                settings.hit_radius, args.from.0, args.from.1
            )
        })?;
    println!("moved {:?} to ({}, {})", handle, args.to.0, args.to.1);

    write_scene(&scene, &args.scene, settings)
}

fn write_scene(scene: &Scene, out: &Path, settings: &mut EditorSettings) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    scene.save(out)?;
    settings.remember_scene(out);

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_info(args: InfoArgs, settings: &mut EditorSettings) -> anyhow::Result<()> {
    let scene = Scene::load(&args.scene)?;
    settings.remember_scene(&args.scene);

    let shape = scene.shape();
    println!("shape: {} ({} points)", shape.name(), shape.point_count());

    let storyboard = scene.storyboard();
    println!(
        "actions: {} ({} steps)",
        storyboard.action_count(),
        storyboard.total_steps()
    );
    for (i, action) in storyboard.actions().iter().enumerate() {
        let marker = if action.with_previous() { "+" } else { " " };
        let params = match action.kind() {
            ActionKind::Translate(t) => {
                format!("by ({}, {}, {})", t.delta.x, t.delta.y, t.delta.z)
            }
            ActionKind::Scale(s) => {
                format!("by ({}, {}, {})", s.factor.x, s.factor.y, s.factor.z)
            }
            ActionKind::Rotate(r) => {
                format!("{} rad, origin {:?}, axis {:?}", r.angle, r.origin, r.axis)
            }
        };
        println!(
            "{:3}{} {:<9} {:>5} steps  {}",
            i,
            marker,
            action.name(),
            action.steps(),
            params
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_xy() {
        assert_eq!(parse_xy("3,-4.5"), Ok((3.0, -4.5)));
        assert_eq!(parse_xy(" 1 , 2 "), Ok((1.0, 2.0)));
        assert!(parse_xy("3").is_err());
        assert!(parse_xy("a,1").is_err());
    }

    #[test]
    fn test_demo_steps_default_to_settings() {
        let cli = Cli::try_parse_from(["extrude-rs", "demo", "out.scn"]).unwrap();
        match cli.cmd {
            Command::Demo(args) => assert_eq!(args.steps, None),
            other => panic!("expected demo, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_accepts_negative_points() {
        let cli =
            Cli::try_parse_from(["extrude-rs", "draw", "out.scn", "-10,0", "10,5", "--bezier"])
                .unwrap();
        match cli.cmd {
            Command::Draw(args) => {
                assert!(args.bezier);
                assert_eq!(args.points, vec![(-10.0, 0.0), (10.0, 5.0)]);
            }
            other => panic!("expected draw, got {:?}", other),
        }
    }
}
