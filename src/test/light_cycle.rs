use crate::road::{IntersectionId, StreetId};
use crate::schedule::IntersectionSchedule;
use crate::sim::LightCycle;

#[test]
fn light_cycle_walks_slots_in_order_and_wraps() {
    let mut sched = IntersectionSchedule::default();
    sched.push(StreetId(4), 2);
    sched.push(StreetId(1), 1);

    let mut light = LightCycle::new(IntersectionId(0), &sched);
    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(light.green().expect("green"));
        light.advance().expect("advance");
    }
    assert_eq!(
        seen,
        vec![
            StreetId(4),
            StreetId(4),
            StreetId(1),
            StreetId(4),
            StreetId(4),
            StreetId(1)
        ]
    );
    assert_eq!(light.cursor(), 0);
    assert_eq!(light.elapsed(), 0);
}

#[test]
fn light_cycle_tracks_elapsed_green_within_a_slot() {
    let mut sched = IntersectionSchedule::default();
    sched.push(StreetId(0), 3);

    let mut light = LightCycle::new(IntersectionId(0), &sched);
    light.advance().expect("advance");
    light.advance().expect("advance");
    assert_eq!((light.cursor(), light.elapsed()), (0, 2));
    light.advance().expect("advance");
    assert_eq!((light.cursor(), light.elapsed()), (0, 0));
}

#[test]
fn empty_light_cycle_never_grants_green() {
    let mut light = LightCycle::new(IntersectionId(3), &IntersectionSchedule::default());
    for _ in 0..3 {
        assert_eq!(light.green(), None);
        light.advance().expect("advance");
    }
    assert_eq!(light.cursor(), 0);
}
