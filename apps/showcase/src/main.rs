//! Headless showcase: builds the full portfolio scene and drives it with a
//! scripted frame loop, logging every transform the engine emits.
//!
//! `RUST_LOG=debug cargo run -p showcase` shows the animation traffic;
//! `--realtime` paces frames against the wall clock instead of the fixed
//! 16 ms step.

mod content;
mod rotator;
mod scene;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use vitrine_core::{PointerEvent, ResizeEvent, Runtime, ScrollEvent};

use crate::content::SceneContent;
use crate::scene::{Scene, Section};

const FRAME_MILLIS: u64 = 16;

#[derive(Parser, Debug)]
#[command(about = "Drive the Vitrine portfolio scene headlessly")]
struct Args {
    /// Scene content JSON; the embedded default is used when omitted.
    #[arg(long)]
    content: Option<PathBuf>,

    /// Viewport width in logical pixels.
    #[arg(long, default_value_t = 1280.0)]
    width: f32,

    /// Viewport height in logical pixels.
    #[arg(long, default_value_t = 800.0)]
    height: f32,

    /// Frames to run before exiting.
    #[arg(long, default_value_t = 700)]
    frames: u64,

    /// Pace frames against the wall clock instead of stepping as fast as
    /// possible.
    #[arg(long)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let content = match &args.content {
        Some(path) => SceneContent::load(path)
            .with_context(|| format!("loading scene content from {}", path.display()))?,
        None => SceneContent::embedded().context("parsing embedded scene content")?,
    };

    let runtime = Runtime::new();
    let mut scene = Scene::new(content, runtime.handle(), args.width, args.height);
    scene.start();

    log::info!(
        "showcase: {}x{} ({:?}), {} hero characters, {} frames",
        args.width,
        args.height,
        scene.viewport_class(),
        scene.hero_unit_count(),
        args.frames
    );

    let start = web_time::Instant::now();
    let mut now_millis = 0u64;
    for frame in 0..args.frames {
        now_millis += FRAME_MILLIS;
        runtime.advance_to(now_millis);
        inject_scripted_events(&mut scene, frame, args.height);
        scene.tick(now_millis);

        if args.realtime {
            let target = std::time::Duration::from_millis(now_millis);
            if let Some(sleep) = target.checked_sub(start.elapsed()) {
                std::thread::sleep(sleep);
            }
        }
    }

    log::info!(
        "done: {} frame(s), {} navigation(s), carousel offset {:.1}",
        runtime.frames_advanced(),
        scene.navigation_count(),
        scene.track().offset()
    );
    Ok(())
}

/// The demo tape: a plausible visitor session, keyed by frame index.
fn inject_scripted_events(scene: &mut Scene, frame: u64, viewport_height: f32) {
    match frame {
        // Scroll through the hero once scrolling has unlocked (~frame 232).
        240..=300 => {
            let progress = (frame - 240) as f32 / 60.0;
            scene.handle_scroll(ScrollEvent {
                y: progress * viewport_height,
            });
        }
        // Sections come into view as the page scrolls on.
        310 => scene.handle_section_visibility(Section::Content, 0.1),
        330 => scene.handle_section_visibility(Section::SkillsTitle, 0.2),
        340 => scene.handle_section_visibility(Section::Skills, 0.25),
        380 => {
            scene.handle_section_visibility(Section::ProjectsTitle, 0.2);
            scene.handle_section_visibility(Section::Projects, 0.15);
        }
        // Cycle the highlight panel.
        400 => scene.click_highlight_panel(),
        // Hover a marquee row for a while (wide viewports animate on
        // hover).
        420 => scene.marquee_hover(0, true),
        500 => scene.marquee_hover(0, false),
        // Drag the carousel and let momentum run.
        520 => scene.handle_pointer(PointerEvent::Down {
            x: 900.0,
            y: 400.0,
            target: None,
        }),
        521..=540 => scene.handle_pointer(PointerEvent::Move {
            x: 900.0 - (frame - 520) as f32 * 12.0,
            y: 400.0,
        }),
        541 => scene.handle_pointer(PointerEvent::Up),
        // A clean click on the first project panel.
        600 => {
            scene.set_hovered_panel(Some(0));
            scene.handle_pointer(PointerEvent::Down {
                x: 400.0,
                y: 400.0,
                target: None,
            });
        }
        601 => scene.handle_pointer(PointerEvent::Up),
        // Rotate to a narrow viewport; auto-scroll and continuous
        // marquees take over.
        620 => scene.handle_resize(ResizeEvent {
            width: 390.0,
            height: 700.0,
        }),
        640 => scene.handle_section_visibility(Section::Contact, 0.4),
        _ => {}
    }
}
