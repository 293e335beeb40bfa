use vitrine_foundation::track::{LoopingTrack, PanelTarget};

use crate::harness::TestRuntime;

/// One step of a scripted pointer gesture.
#[derive(Debug, Clone)]
pub enum ScriptStep {
    Down {
        x: f32,
        y: f32,
        target: Option<PanelTarget>,
    },
    Move {
        x: f32,
        y: f32,
    },
    Up,
    /// Pump this many frames before the next step.
    Frames(u64),
}

/// A replayable pointer gesture against a [`LoopingTrack`].
#[derive(Debug, Clone, Default)]
pub struct PointerScript {
    steps: Vec<ScriptStep>,
}

impl PointerScript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn down(mut self, x: f32, y: f32) -> Self {
        self.steps.push(ScriptStep::Down { x, y, target: None });
        self
    }

    pub fn down_on(mut self, x: f32, y: f32, target: PanelTarget) -> Self {
        self.steps.push(ScriptStep::Down {
            x,
            y,
            target: Some(target),
        });
        self
    }

    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.steps.push(ScriptStep::Move { x, y });
        self
    }

    pub fn up(mut self) -> Self {
        self.steps.push(ScriptStep::Up);
        self
    }

    pub fn frames(mut self, n: u64) -> Self {
        self.steps.push(ScriptStep::Frames(n));
        self
    }

    /// A horizontal drag from `start_x` by `delta_x` in `moves` steps.
    pub fn horizontal_drag(start_x: f32, y: f32, delta_x: f32, moves: u32) -> Self {
        let mut script = Self::new().down(start_x, y);
        for i in 1..=moves {
            let x = start_x + delta_x * (i as f32 / moves as f32);
            script = script.move_to(x, y);
        }
        script.up()
    }

    pub fn run(&self, track: &LoopingTrack, runtime: &mut TestRuntime) {
        for step in &self.steps {
            match step {
                ScriptStep::Down { x, y, target } => track.begin_drag(*x, *y, target.clone()),
                ScriptStep::Move { x, y } => track.update_drag(*x, *y),
                ScriptStep::Up => track.end_drag(),
                ScriptStep::Frames(n) => {
                    runtime.advance_frames(*n);
                }
            }
        }
    }
}
