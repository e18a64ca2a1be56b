//=========================================================================
// Animation Selector
//=========================================================================
//
// Chooses a frame sequence from physical state and steps through it at a
// fixed frame duration.
//
// Selection rule:
// ```text
//   on ground  → Run (moving) | Idle (still)
//   airborne   → Jump (rising, vy < 0)
//              → unchanged (falling, no flicker at the apex)
// ```
//
// Frames are opaque identifiers resolved by the external renderer.
//
//=========================================================================

//=== Types ===============================================================

/// Frame identifier handed to the renderer (sprite/asset name).
pub type FrameId = &'static str;

/// Identity of a frame sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Sequence {
    #[default]
    None,
    Idle,
    Run,
    Jump,
}

/// Frame lists for each sequence. Any of them may be empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimationSet {
    pub idle: &'static [FrameId],
    pub run: &'static [FrameId],
    pub jump: &'static [FrameId],
}

impl AnimationSet {
    fn frames(&self, sequence: Sequence) -> &'static [FrameId] {
        match sequence {
            Sequence::None => &[],
            Sequence::Idle => self.idle,
            Sequence::Run => self.run,
            Sequence::Jump => self.jump,
        }
    }
}

//=== AnimationSelector ===================================================

#[derive(Debug, Clone)]
pub struct AnimationSelector {
    set: AnimationSet,
    current: Sequence,
    index: usize,
    timer: f32,
    frame_duration: f32,
}

impl AnimationSelector {
    //--- Construction -----------------------------------------------------

    /// Creates a selector starting on the idle sequence.
    ///
    /// # Panics
    ///
    /// Panics if `frame_duration <= 0.0`.
    pub fn new(set: AnimationSet, frame_duration: f32) -> Self {
        assert!(
            frame_duration > 0.0,
            "Frame duration must be positive, got {}",
            frame_duration
        );

        Self {
            set,
            current: Sequence::Idle,
            index: 0,
            timer: 0.0,
            frame_duration,
        }
    }

    /// Starts on `sequence` instead of idle.
    pub fn starting_with(mut self, sequence: Sequence) -> Self {
        self.current = sequence;
        self
    }

    //--- Selection --------------------------------------------------------

    /// Picks the sequence matching the body's physical state.
    ///
    /// Index and timer are only reset when the sequence actually changes.
    /// A target sequence with no frames leaves the current one in place.
    pub fn select(&mut self, on_ground: bool, moving: bool, vy: f32) {
        let next = if on_ground {
            if moving {
                Sequence::Run
            } else {
                Sequence::Idle
            }
        } else if vy < 0.0 {
            Sequence::Jump
        } else {
            return;
        };

        if self.set.frames(next).is_empty() || next == self.current {
            return;
        }

        self.current = next;
        self.index = 0;
        self.timer = 0.0;
    }

    //--- Playback ---------------------------------------------------------

    /// Advances playback, stepping as many frames as `dt` covers.
    pub fn advance(&mut self, dt: f32) {
        let len = self.set.frames(self.current).len();
        if len == 0 {
            return;
        }

        self.timer += dt;
        while self.timer >= self.frame_duration {
            self.timer -= self.frame_duration;
            self.index = (self.index + 1) % len;
        }
    }

    //--- Queries ----------------------------------------------------------

    pub fn current_frame(&self) -> Option<FrameId> {
        self.set.frames(self.current).get(self.index).copied()
    }

    pub fn sequence(&self) -> Sequence {
        self.current
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
