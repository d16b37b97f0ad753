use super::*;

#[test]
fn initial_phase_depends_on_stroke_count() {
    assert_eq!(AnimationState::initial().phase(3), Phase::AnimatingStroke(0));
    assert_eq!(AnimationState::initial().phase(0), Phase::Idle);
}

#[test]
fn full_durations_visit_every_stroke_in_order() {
    let total = 5;
    let mut s = AnimationState::initial();
    let mut visited = Vec::new();
    for _ in 0..total {
        match s.phase(total) {
            Phase::AnimatingStroke(i) => visited.push(i),
            Phase::Idle => panic!("went idle early"),
        }
        s = s.advance(1.0, total);
    }
    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert_eq!(s.phase(total), Phase::Idle);
}

#[test]
fn partial_steps_accumulate_then_reset() {
    let s = AnimationState::initial().advance(0.25, 2).advance(0.5, 2);
    assert_eq!(s.stroke_index, 0);
    assert!((s.progress - 0.75).abs() < 1e-12);

    let s = s.advance(0.3, 2);
    assert_eq!(
        s,
        AnimationState {
            stroke_index: 1,
            progress: 0.0
        }
    );
}

#[test]
fn oversized_step_never_skips_a_stroke() {
    let s = AnimationState::initial().advance(10.0, 4);
    assert_eq!(s.phase(4), Phase::AnimatingStroke(1));
}

#[test]
fn idle_is_absorbing_and_bad_input_is_ignored() {
    let idle = AnimationState {
        stroke_index: 2,
        progress: 0.0,
    };
    assert_eq!(idle.advance(0.5, 2), idle);

    let s = AnimationState::initial();
    assert_eq!(s.advance(f64::NAN, 2), s);
    assert_eq!(s.advance(-1.0, 2), s);
}

#[test]
fn rounded_fractions_still_complete_the_stroke() {
    let step = 0.16 / 0.8;
    let mut s = AnimationState::initial();
    for _ in 0..5 {
        s = s.advance(step, 1);
    }
    assert_eq!(s.phase(1), Phase::Idle);
}

#[test]
fn elapsed_time_maps_to_exact_progress() {
    let dur = Duration::from_millis(800);
    let s = AnimationState::initial().advance_elapsed(Duration::from_millis(200), dur, 2);
    assert_eq!(s.stroke_index, 0);
    assert_eq!(s.progress, 0.25);

    let s = s.advance_elapsed(dur, dur, 2);
    assert_eq!(
        s,
        AnimationState {
            stroke_index: 1,
            progress: 0.0
        }
    );

    let idle = AnimationState {
        stroke_index: 2,
        progress: 0.0,
    };
    assert_eq!(idle.advance_elapsed(dur, dur, 2), idle);
}
