//! Reference values for the starter sequence, captured from debug traces.

use colo_rng::constants::DEBUG_SEED;
use colo_rng::{
    EventSequencer, HiddenPower, HiddenPowerType, Ivs, Nature, Pokemon, SequenceParams, TrainerId,
};

fn sequencer() -> EventSequencer {
    EventSequencer::new(SequenceParams::default()).unwrap()
}

#[test]
fn debug_seed_trainer_and_starters() {
    let mut draw = sequencer().begin(DEBUG_SEED).unwrap();
    assert_eq!(draw.trainer(), TrainerId { tid: 8549, sid: 33442 });

    let umbreon = draw.next_starter().unwrap();
    assert_eq!(umbreon.ivs, Ivs::new(1, 6, 14, 1, 13, 0));
    assert_eq!(
        umbreon.hidden_power,
        HiddenPower {
            kind: HiddenPowerType::Electric,
            power: 33
        }
    );
    assert_eq!(umbreon.nature, Nature::Rash);
    assert_eq!(umbreon.pid, 1_562_753_119);

    let espeon = draw.next_starter().unwrap();
    assert_eq!(espeon.ivs, Ivs::new(10, 12, 7, 12, 11, 22));
    assert_eq!(
        espeon.hidden_power,
        HiddenPower {
            kind: HiddenPowerType::Fire,
            power: 58
        }
    );
    assert_eq!(espeon.nature, Nature::Adamant);
    assert_eq!(espeon.pid, 1_576_744_428);

    assert_eq!(draw.rng().seed(), 904_663_133);
}

#[test]
fn seed_zero_starters() {
    let mut draw = sequencer().begin(0).unwrap();
    assert_eq!(draw.trainer(), TrainerId { tid: 24270, sid: 30155 });

    let first = draw.next_starter().unwrap();
    let second = draw.next_starter().unwrap();

    assert_eq!(first, Pokemon::new(4_077_127_967, Ivs::new(19, 24, 19, 22, 15, 30)));
    assert_eq!(first.nature, Nature::Quiet);
    assert_eq!(first.hidden_power.kind, HiddenPowerType::Fire);
    assert_eq!(first.hidden_power.power, 68);

    assert_eq!(second, Pokemon::new(3_875_722_052, Ivs::new(6, 13, 24, 14, 0, 28)));
    assert_eq!(second.nature, Nature::Brave);
    assert_eq!(second.hidden_power.kind, HiddenPowerType::Fighting);
    assert_eq!(second.hidden_power.power, 40);

    assert_eq!(draw.rng().seed(), 3_544_449_304);
}

#[test]
fn starters_matches_step_by_step_draw() {
    let sequencer = sequencer();
    let mut draw = sequencer.begin(DEBUG_SEED).unwrap();
    let expected = [draw.next_starter().unwrap(), draw.next_starter().unwrap()];
    assert_eq!(sequencer.starters(DEBUG_SEED).unwrap(), expected);
}

#[test]
fn debug_seed_secondary_frames() {
    let frames: Vec<(u32, Pokemon)> = sequencer().secondary_frames(DEBUG_SEED).take(3).collect();

    assert_eq!(
        frames,
        vec![
            (0, Pokemon::new(0x746C_7F74, Ivs::new(3, 30, 0, 30, 27, 17))),
            (1, Pokemon::new(0x7F74_5FC2, Ivs::new(17, 30, 27, 11, 21, 28))),
            (2, Pokemon::new(0x5FC2_CFDC, Ivs::new(28, 11, 21, 3, 29, 12))),
        ]
    );
    assert_eq!(frames[0].1.nature, Nature::Sassy);
    assert_eq!(frames[1].1.nature, Nature::Sassy);
    assert_eq!(frames[2].1.nature, Nature::Mild);
}

#[test]
fn secondary_frame_budget() {
    let frames = sequencer().secondary_frames(DEBUG_SEED);
    assert_eq!(frames.len(), 5000);
    assert_eq!(frames.last().map(|(frame, _)| frame), Some(4999));
}
