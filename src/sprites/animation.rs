//! Distance-driven walk cycle.
//!
//! Column 0 of every row is the idle pose. While the player moves, the
//! frame cycles through columns `1..cols`, advancing once the distance
//! covered since the last advance exceeds `interval`.

/// The two phases of the walk cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationPhase {
    #[default]
    Idle,
    Walking,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WalkAnimation {
    /// Column within the facing row.
    frame: usize,
    /// Distance covered since the frame last advanced.
    step: f32,
    /// Distance that must be exceeded before the next advance.
    pub interval: f32,
    cols: usize,
    phase: AnimationPhase,
}

impl WalkAnimation {
    pub fn new(interval: f32, cols: usize) -> Self {
        debug_assert!(cols >= 2, "walk cycle needs an idle and a walk column");
        Self {
            frame: 0,
            step: 0.0,
            interval,
            cols,
            phase: AnimationPhase::Idle,
        }
    }

    pub fn frame(&self) -> usize {
        self.frame
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn phase(&self) -> AnimationPhase {
        self.phase
    }

    /// Feed this tick's travelled distance and return the resulting phase.
    pub fn update(&mut self, distance: f32) -> AnimationPhase {
        if distance > 0.0 {
            self.phase = AnimationPhase::Walking;
            self.step += distance;
            if self.step > self.interval {
                self.frame = 1 + self.frame % (self.cols - 1);
                self.step = 0.0;
            }
        } else {
            self.phase = AnimationPhase::Idle;
            self.frame = 0;
            self.step = 0.0;
        }
        self.phase
    }
}
