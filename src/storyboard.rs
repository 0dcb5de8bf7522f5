//! Storyboard - plays an action list against an outline, one frame per step
//!
//! Playback is pull-based: the caller drives it by calling `next_step` once
//! per animation tick, and every successful call appends one frame.
//!
//! ```text
//! Idle --play--> Playing --next_step() == false--> Finished
//!   ^               |                                  |
//!   +----reset------+-------------reset----------------+
//! ```
//!
//! ## Batches
//!
//! An action together with the contiguous run of `with_previous` actions
//! right after it forms a batch. A batch is initialized from the frame
//! before it starts and runs for the step count of its first action; every
//! member executes once per step, in list order, on the same frame.

use crate::actions::Action;
use crate::geometry::PointSequence;
use crate::shapes::Shape;

/// Where the storyboard is in its lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlaybackState {
    #[default]
    Idle,
    Playing,
    Finished,
}

#[derive(Clone, Copy, Debug)]
struct Cursor {
    /// Index of the first action of the running batch
    position: usize,
    /// Steps already taken by the running batch
    step: u32,
}

/// An ordered action list plus the frames produced by playing it
#[derive(Clone, Debug, Default)]
pub struct Storyboard {
    actions: Vec<Action>,
    frames: Vec<PointSequence>,
    cursor: Option<Cursor>,
    state: PlaybackState,
}

impl Storyboard {
    /// Create an empty storyboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storyboard from an existing action list
    pub fn with_actions(actions: Vec<Action>) -> Self {
        Self {
            actions,
            ..Self::default()
        }
    }

    /// The action list
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Mutable access to the action list
    ///
    /// # Panics
    /// Panics while playing
    pub fn actions_mut(&mut self) -> &mut Vec<Action> {
        self.assert_editable();
        &mut self.actions
    }

    /// Append an action
    ///
    /// # Panics
    /// Panics while playing
    pub fn add_action(&mut self, action: Action) {
        self.assert_editable();
        self.actions.push(action);
    }

    /// Remove and return the action at `index`
    ///
    /// # Panics
    /// Panics while playing or if `index` is out of range
    pub fn remove_action(&mut self, index: usize) -> Action {
        self.assert_editable();
        self.actions.remove(index)
    }

    /// Remove every action
    ///
    /// # Panics
    /// Panics while playing
    pub fn clear_actions(&mut self) {
        self.assert_editable();
        self.actions.clear();
    }

    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// Sum of every action's step count, parallel actions included
    pub fn total_steps(&self) -> u64 {
        self.actions.iter().map(|a| u64::from(a.steps())).sum()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Every frame produced so far, frame 0 being the starting outline
    pub fn frames(&self) -> &[PointSequence] {
        &self.frames
    }

    /// The most recent frame
    pub fn current_frame(&self) -> Option<&PointSequence> {
        self.frames.last()
    }

    /// Index and value of the action leading the running batch
    pub fn current_action(&self) -> Option<(usize, &Action)> {
        let cursor = self.cursor?;
        self.actions.get(cursor.position).map(|a| (cursor.position, a))
    }

    /// Steps taken so far by the running batch
    pub fn current_step(&self) -> u32 {
        self.cursor.map_or(0, |c| c.step)
    }

    /// Start playback from the current outline of `shape`
    pub fn play(&mut self, shape: &Shape) {
        self.play_from(&shape.points());
    }

    /// Start playback from `points`
    ///
    /// Any previous playback is discarded first. Does nothing if the action
    /// list is empty.
    pub fn play_from(&mut self, points: &PointSequence) {
        self.reset();

        if self.actions.is_empty() {
            log::debug!("Storyboard has no actions, nothing to play");
            return;
        }

        self.frames.push(points.clone());
        // Deliberately reproduced edge case, not a fix: the scan for the
        // first batch stops at the first sequential action, even when later
        // actions are flagged `with_previous` relative to another lead.
        // Those are prepared from the previous frame once the cursor
        // reaches their lead.
        Self::initialize_batch(&mut self.actions, 0, points);
        self.cursor = Some(Cursor { position: 0, step: 0 });
        self.state = PlaybackState::Playing;

        log::info!(
            "Playing {} actions ({} steps) on {} points",
            self.actions.len(),
            self.total_steps(),
            points.len()
        );
    }

    /// Advance playback by one step
    ///
    /// Returns `false` once every action is exhausted, and while not
    /// playing.
    pub fn next_step(&mut self) -> bool {
        if self.state != PlaybackState::Playing {
            return false;
        }
        let Some(mut cursor) = self.cursor else {
            return false;
        };
        let Some(last) = self.frames.last() else {
            return false;
        };

        if cursor.step >= self.actions[cursor.position].steps() {
            let next = Self::batch_end(&self.actions, cursor.position);
            if next >= self.actions.len() {
                self.finish();
                return false;
            }

            Self::initialize_batch(&mut self.actions, next, last);
            cursor = Cursor { position: next, step: 0 };
            log::debug!("Starting action {} ({})", next, self.actions[next].name());
        }

        let mut frame = last.clone();
        let end = Self::batch_end(&self.actions, cursor.position);
        for action in &mut self.actions[cursor.position..end] {
            action.execute(cursor.step, &mut frame);
        }
        self.frames.push(frame);

        cursor.step += 1;
        self.cursor = Some(cursor);
        true
    }

    /// Step until playback finishes, returning the number of steps taken
    pub fn run_to_end(&mut self) -> usize {
        let mut taken = 0;
        while self.next_step() {
            taken += 1;
        }
        taken
    }

    /// Drop every frame and return to `Idle`
    pub fn reset(&mut self) {
        self.frames.clear();
        self.cursor = None;
        self.state = PlaybackState::Idle;
    }

    fn finish(&mut self) {
        self.cursor = None;
        self.state = PlaybackState::Finished;
        log::info!("Playback finished after {} frames", self.frames.len());
    }

    /// One past the last member of the batch led by `anchor`
    fn batch_end(actions: &[Action], anchor: usize) -> usize {
        actions[anchor + 1..]
            .iter()
            .position(|a| !a.with_previous())
            .map_or(actions.len(), |offset| anchor + 1 + offset)
    }

    fn initialize_batch(actions: &mut [Action], anchor: usize, baseline: &PointSequence) {
        let end = Self::batch_end(actions, anchor);
        for action in &mut actions[anchor..end] {
            action.initialize(baseline);
        }
    }

    fn assert_editable(&self) {
        assert!(
            self.state != PlaybackState::Playing,
            "action list changed during playback"
        );
    }
}
