use super::fixtures::{EXAMPLE, single_car};
use crate::io::{ParseError, format_schedule, parse_problem, parse_schedule};
use crate::road::{IntersectionId, NetworkError};
use crate::schedule::{Schedule, ScheduleBuilder};

#[test]
fn format_schedule_lists_active_intersections_in_cycle_order() {
    let problem = parse_problem(EXAMPLE).expect("parse");
    let schedule = ScheduleBuilder::new(problem.duration).build_for(&problem.network);

    let expected = "\
4
0
1
rue-de-londres 6
1
2
rue-d-amsterdam 6
rue-d-athenes 5
2
1
rue-de-moscou 6
3
1
rue-de-rome 6
";
    assert_eq!(format_schedule(&schedule, &problem.network), expected);
}

#[test]
fn format_schedule_skips_empty_intersections() {
    let problem = single_car(3);
    let schedule = ScheduleBuilder::new(3).build_for(&problem.network);
    assert_eq!(format_schedule(&schedule, &problem.network), "1\n1\n1\nA 3\n");
    assert_eq!(format_schedule(&Schedule::new(2), &problem.network), "0\n");
}

#[test]
fn parse_schedule_reads_back_formatted_schedule() {
    let problem = parse_problem(EXAMPLE).expect("parse");
    let schedule = ScheduleBuilder::new(problem.duration).build_for(&problem.network);
    let text = format_schedule(&schedule, &problem.network);
    assert_eq!(parse_schedule(&text, &problem.network).expect("parse"), schedule);
}

#[test]
fn parse_schedule_keeps_listed_order() {
    let problem = parse_problem(EXAMPLE).expect("parse");
    let net = &problem.network;
    let text = "1\n1\n2\nrue-d-athenes 2\nrue-d-amsterdam 1\n";
    let schedule = parse_schedule(text, net).expect("parse");
    let at1 = schedule.intersection(IntersectionId(1)).slots();
    assert_eq!(at1[0].street, net.street_id("rue-d-athenes").expect("athenes"));
    assert_eq!(at1[1].duration, 1);
    assert_eq!(schedule.active_count(), 1);
}

#[test]
fn parse_schedule_rejects_bad_submissions() {
    let problem = single_car(3);
    let net = &problem.network;

    assert_eq!(
        parse_schedule("1\n1\n1\nZ 1\n", net).unwrap_err(),
        ParseError::Network {
            line: 4,
            source: NetworkError::UnknownStreet("Z".into()),
        }
    );
    assert!(matches!(
        parse_schedule("1\n7\n1\nA 1\n", net),
        Err(ParseError::OutOfRange { what: "intersection id", value: 7, .. })
    ));
    assert!(matches!(
        parse_schedule("3\n", net),
        Err(ParseError::OutOfRange { what: "intersection count", .. })
    ));
    assert_eq!(
        parse_schedule("2\n1\n1\nA 1\n1\n1\nA 1\n", net).unwrap_err(),
        ParseError::DuplicateIntersection {
            line: 5,
            intersection: 1,
        }
    );
    assert!(matches!(
        parse_schedule("1\n1\n2\nA 1\n", net),
        Err(ParseError::UnexpectedEof { .. })
    ));
}
