//! Event sequencer
//!
//! Replays the generator consumption from power-on to the starter pair:
//!
//! 1. Two intro demo teams (batch, trainer IDs, rejecting PIDs)
//! 2. Title screen: 600 gated frames plus one extra gated frame
//! 3. Naming screen: three windows, the middle one at 30 fps with an extra
//!    keyboard call per frame
//! 4. Batch of 1000, trainer IDs, then the two starters
//!
//! A gated frame advances once and jumps 4 more when the upper half of the
//! state is below 10% of its range. The window lengths are measured frame
//! counts and must not be simplified.

use crate::constants::{
    BATCH_ADVANCES, DEMO_PID_SKIP, DEMO_TEAM_SIZE, DEMO_TEAMS, DEMO_TRAILING_ADVANCES, GATE_JUMP,
    GATE_LIMIT, GATE_SCALE, NAMING_ENTER_FRAME, NAMING_EXIT_FRAME, NAMING_KEYBOARD_END_FRAME,
    NAMING_KEYBOARD_FRAME, QUILAVA_FRAMES, QUILAVA_JUMP, STARTER_GENDER_RATIO,
    STARTER_LEADING_ADVANCES, TITLE_FRAMES,
};
use crate::domain::lcg::{Lcg, LcgJump};
use crate::domain::pokemon::{Gender, Pokemon, TrainerId, generate_pid};
use thiserror::Error;

const GATE: LcgJump = LcgJump::new(GATE_JUMP);
const BATCH: LcgJump = LcgJump::new(BATCH_ADVANCES);
const DEMO_SKIP: LcgJump = LcgJump::new(DEMO_PID_SKIP);

/// Sequencer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// No PID of this ratio has the required gender
    #[error("gender {gender:?} is unreachable with gender ratio 0x{ratio:02X}")]
    UnreachableGender { ratio: u8, gender: Gender },
    /// PID retry cap was hit
    #[error("PID retry limit exhausted for initial seed 0x{seed:08X}")]
    PidRetryExhausted { seed: u32 },
}

/// Scenario values for the sequencer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceParams {
    /// Gender ratio byte used for every rejecting PID roll
    pub gender_ratio: u8,
    /// Gender every rejecting PID roll requires
    pub gender: Gender,
    /// Advances from the initial seed to secondary frame 0
    pub secondary_jump: u32,
    /// Number of secondary frames
    pub secondary_frames: u32,
}

impl Default for SequenceParams {
    fn default() -> Self {
        Self {
            gender_ratio: STARTER_GENDER_RATIO,
            gender: Gender::Male,
            secondary_jump: QUILAVA_JUMP,
            secondary_frames: QUILAVA_FRAMES,
        }
    }
}

/// Gated frame: one advance, plus a 4-step jump below the threshold
#[inline]
fn gated_frame(rng: &mut Lcg) {
    let high = rng.advance() >> 16;
    if high * GATE_SCALE < GATE_LIMIT {
        rng.jump(GATE);
    }
}

#[inline]
fn gated_frames(rng: &mut Lcg, count: u32) {
    for _ in 0..count {
        gated_frame(rng);
    }
}

/// Title screen window
fn title_screen(rng: &mut Lcg) {
    gated_frames(rng, TITLE_FRAMES);
    // one more call before input is read
    gated_frame(rng);
}

/// Naming screen windows
fn naming_screen(rng: &mut Lcg) {
    gated_frames(rng, NAMING_KEYBOARD_FRAME - NAMING_ENTER_FRAME);

    // keyboard frames advance at 30 fps (+1 lag frame), with an extra call each
    let keyboard_frames = (NAMING_KEYBOARD_END_FRAME - NAMING_KEYBOARD_FRAME) / 2 + 1;
    for _ in 0..keyboard_frames {
        gated_frame(rng);
        gated_frame(rng);
    }

    gated_frames(rng, NAMING_EXIT_FRAME - NAMING_KEYBOARD_END_FRAME);
}

/// Replays the fixed event pipeline for initial seeds
#[derive(Clone, Copy, Debug)]
pub struct EventSequencer {
    params: SequenceParams,
    secondary: LcgJump,
}

impl EventSequencer {
    /// Create a sequencer, rejecting parameters no PID can satisfy
    pub fn new(params: SequenceParams) -> Result<Self, SequenceError> {
        if !params.gender.is_reachable(params.gender_ratio) {
            return Err(SequenceError::UnreachableGender {
                ratio: params.gender_ratio,
                gender: params.gender,
            });
        }

        Ok(Self {
            params,
            secondary: LcgJump::new(params.secondary_jump),
        })
    }

    pub fn params(&self) -> &SequenceParams {
        &self.params
    }

    /// Run everything up to the first starter
    pub fn begin(&self, seed: u32) -> Result<StarterDraw, SequenceError> {
        let mut rng = Lcg::new(seed);

        for team in 0..DEMO_TEAMS {
            self.demo_team(&mut rng, seed)?;
            if team == 0 {
                rng.advance_by(DEMO_TRAILING_ADVANCES);
            }
        }

        title_screen(&mut rng);
        naming_screen(&mut rng);

        rng.jump(BATCH);
        let trainer = TrainerId::roll(&mut rng);

        Ok(StarterDraw {
            rng,
            trainer,
            initial_seed: seed,
            gender_ratio: self.params.gender_ratio,
            gender: self.params.gender,
        })
    }

    /// Derive both starters for a seed
    pub fn starters(&self, seed: u32) -> Result<[Pokemon; 2], SequenceError> {
        let mut draw = self.begin(seed)?;
        let first = draw.next_starter()?;
        let second = draw.next_starter()?;
        Ok([first, second])
    }

    /// Secondary frames for a seed
    pub fn secondary_frames(&self, seed: u32) -> SecondaryFrames {
        SecondaryFrames {
            rng: Lcg::new(self.secondary.apply(seed)),
            frame: 0,
            frames: self.params.secondary_frames,
        }
    }

    fn demo_team(&self, rng: &mut Lcg, seed: u32) -> Result<(), SequenceError> {
        rng.jump(BATCH);
        let trainer = TrainerId::roll(rng);
        for _ in 0..DEMO_TEAM_SIZE {
            rng.jump(DEMO_SKIP);
            generate_pid(rng, trainer, self.params.gender_ratio, self.params.gender)
                .ok_or(SequenceError::PidRetryExhausted { seed })?;
        }
        Ok(())
    }
}

/// Generator positioned at the starter draws
#[derive(Clone, Copy, Debug)]
pub struct StarterDraw {
    rng: Lcg,
    trainer: TrainerId,
    initial_seed: u32,
    gender_ratio: u8,
    gender: Gender,
}

impl StarterDraw {
    /// Player trainer IDs
    pub fn trainer(&self) -> TrainerId {
        self.trainer
    }

    /// Current generator
    pub fn rng(&self) -> &Lcg {
        &self.rng
    }

    /// Derive the next starter
    pub fn next_starter(&mut self) -> Result<Pokemon, SequenceError> {
        self.rng.advance_by(STARTER_LEADING_ADVANCES);
        Pokemon::roll_rejecting(&mut self.rng, self.trainer, self.gender_ratio, self.gender).ok_or(
            SequenceError::PidRetryExhausted {
                seed: self.initial_seed,
            },
        )
    }
}

/// Iterator over `(frame, Pokemon)` of the secondary scan
///
/// Frame `i` starts from the secondary base advanced `i` times; each frame
/// derives from its own copy of the generator.
#[derive(Clone, Debug)]
pub struct SecondaryFrames {
    rng: Lcg,
    frame: u32,
    frames: u32,
}

impl Iterator for SecondaryFrames {
    type Item = (u32, Pokemon);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.frame >= self.frames {
            return None;
        }

        let mut scratch = self.rng;
        let mon = Pokemon::roll(&mut scratch);
        let frame = self.frame;

        self.rng.advance();
        self.frame += 1;
        Some((frame, mon))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.frames - self.frame) as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SecondaryFrames {}
