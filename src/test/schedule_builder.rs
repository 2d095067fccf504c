use super::fixtures::{EXAMPLE, slots};
use crate::io::parse_problem;
use crate::road::{IntersectionId, RoadNetwork, StreetId};
use crate::schedule::{Schedule, ScheduleBuilder, StreetUsage};
use crate::sim::{QueueStats, SimulationResult};

fn id(net: &RoadNetwork, name: &str) -> StreetId {
    net.street_id(name).expect("street")
}

#[test]
fn usage_counts_every_route_street_in_first_seen_order() {
    let problem = parse_problem(EXAMPLE).expect("parse");
    let net = &problem.network;
    let usage = StreetUsage::from_network(net);

    assert_eq!(usage.at(IntersectionId(0)), &[(id(net, "rue-de-londres"), 1)]);
    assert_eq!(
        usage.at(IntersectionId(1)),
        &[(id(net, "rue-d-amsterdam"), 2), (id(net, "rue-d-athenes"), 1)]
    );
    assert_eq!(usage.at(IntersectionId(2)), &[(id(net, "rue-de-moscou"), 2)]);
    assert_eq!(usage.at(IntersectionId(3)), &[(id(net, "rue-de-rome"), 1)]);
    assert_eq!(usage.total(IntersectionId(1)), 3);
    assert_eq!(usage.count(IntersectionId(1), id(net, "rue-d-athenes")), 1);
    assert_eq!(usage.count(IntersectionId(1), id(net, "rue-de-rome")), 0);
}

#[test]
fn build_splits_cycle_budget_by_popularity_and_clamps_to_duration() {
    let problem = parse_problem(EXAMPLE).expect("parse");
    let net = &problem.network;

    // duration = 6：15 与 10 都被截断
    let schedule = ScheduleBuilder::new(problem.duration).build_for(net);
    assert_eq!(
        slots(&schedule, 1),
        vec![(id(net, "rue-d-amsterdam"), 6), (id(net, "rue-d-athenes"), 5)]
    );
    assert_eq!(slots(&schedule, 0), vec![(id(net, "rue-de-londres"), 6)]);

    // ceil(4 * 2 / 3) = 3, ceil(4 * 1 / 3) = 2
    let small = ScheduleBuilder::new(problem.duration)
        .with_cycle_budget(4)
        .build_for(net);
    assert_eq!(
        slots(&small, 1),
        vec![(id(net, "rue-d-amsterdam"), 3), (id(net, "rue-d-athenes"), 2)]
    );
    assert_eq!(small.active_count(), 4);
}

#[test]
fn build_keeps_insertion_order_instead_of_sorting() {
    let mut net = RoadNetwork::new(3);
    let p = net.add_street(0, 1, "p", 1).expect("p");
    let q = net.add_street(2, 1, "q", 1).expect("q");
    net.add_car(vec![q]).expect("car0");
    net.add_car(vec![p]).expect("car1");
    net.add_car(vec![p]).expect("car2");

    let schedule = ScheduleBuilder::new(100).build_for(&net);
    assert_eq!(slots(&schedule, 1), vec![(q, 5), (p, 10)]);
}

#[test]
fn build_is_deterministic_and_only_schedules_incoming_streets() {
    let problem = parse_problem(EXAMPLE).expect("parse");
    let net = &problem.network;
    let builder = ScheduleBuilder::new(problem.duration);

    let a = builder.build_for(net);
    let b = builder.build_for(net);
    assert_eq!(a, b);

    for (intersection, sched) in a.iter() {
        for slot in sched.slots() {
            assert_eq!(net.street(slot.street).end, intersection);
            assert!((1..=problem.duration).contains(&slot.duration));
        }
    }
    a.validate(net, problem.duration).expect("valid");
}

#[test]
fn build_leaves_unused_intersections_empty() {
    let mut net = RoadNetwork::new(3);
    let a = net.add_street(0, 1, "a", 1).expect("a");
    net.add_street(1, 2, "b", 1).expect("b");
    net.add_car(vec![a]).expect("car");

    let schedule = ScheduleBuilder::new(10).build_for(&net);
    assert!(schedule.intersection(IntersectionId(0)).is_empty());
    assert!(schedule.intersection(IntersectionId(2)).is_empty());
    assert_eq!(slots(&schedule, 1), vec![(a, 10)]);
    assert_eq!(schedule.active_count(), 1);
}

fn two_street_schedule(a: u32, b: u32) -> Schedule {
    let mut schedule = Schedule::new(1);
    let at0 = schedule.intersection_mut(IntersectionId(0));
    at0.push(StreetId(0), a);
    at0.push(StreetId(1), b);
    schedule
}

fn stats(entries: Vec<(StreetId, usize)>) -> SimulationResult {
    SimulationResult::new(0, 0, 0, vec![QueueStats::from_entries(entries)])
}

#[test]
fn reweight_moves_green_time_toward_longer_queues() {
    let previous = two_street_schedule(4, 4);
    let result = stats(vec![(StreetId(0), 3), (StreetId(1), 1)]);

    // T = 4, avg = 2：4 * (4 + 1) / 4 = 5，4 * (4 - 1) / 4 = 3
    let next = ScheduleBuilder::new(10).reweight(&previous, &result);
    assert_eq!(slots(&next, 0), vec![(StreetId(0), 5), (StreetId(1), 3)]);

    let clamped = ScheduleBuilder::new(4).reweight(&previous, &result);
    assert_eq!(slots(&clamped, 0), vec![(StreetId(0), 4), (StreetId(1), 3)]);
}

#[test]
fn reweight_rounds_up_and_never_drops_below_one() {
    // 只有 street 0 出现过排队：T = 3, n = 1, street 1 的 scale 为 0
    let previous = two_street_schedule(2, 2);
    let result = stats(vec![(StreetId(0), 3)]);

    let next = ScheduleBuilder::new(10).reweight(&previous, &result);
    assert_eq!(slots(&next, 0), vec![(StreetId(0), 2), (StreetId(1), 1)]);
}

#[test]
fn reweight_with_zero_queues_leaves_durations_unchanged() {
    let previous = two_street_schedule(3, 7);
    let result = stats(vec![(StreetId(0), 0), (StreetId(1), 0)]);
    let next = ScheduleBuilder::new(10).reweight(&previous, &result);
    assert_eq!(next, previous);

    let empty = ScheduleBuilder::new(10).reweight(&previous, &SimulationResult::default());
    assert_eq!(empty, previous);
}

#[test]
fn reweight_preserves_street_order() {
    let mut previous = Schedule::new(1);
    let at0 = previous.intersection_mut(IntersectionId(0));
    at0.push(StreetId(2), 1);
    at0.push(StreetId(0), 1);
    at0.push(StreetId(1), 1);
    let result = stats(vec![(StreetId(0), 9), (StreetId(1), 0), (StreetId(2), 0)]);

    let next = ScheduleBuilder::new(10).reweight(&previous, &result);
    let order: Vec<StreetId> = next
        .intersection(IntersectionId(0))
        .slots()
        .iter()
        .map(|s| s.street)
        .collect();
    assert_eq!(order, vec![StreetId(2), StreetId(0), StreetId(1)]);
    // n = 3, T = 9：street 0 -> ceil(1 * (27 + 27 - 9) / 27) = 2
    assert_eq!(
        next.intersection(IntersectionId(0)).duration_of(StreetId(0)),
        Some(2)
    );
}
