use super::*;

fn pts(raw: &[(i32, i32)]) -> Vec<Point> {
    raw.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn parses_trace_and_path() {
    let result = parse_response("VISITED 1,1\nVISITED 2,2\nPATH_START\n1,1\n2,2\n3,3\n");
    assert_eq!(result.visited, pts(&[(1, 1), (2, 2)]));
    assert_eq!(result.path, pts(&[(1, 1), (2, 2), (3, 3)]));
    assert!(result.has_path());
}

#[test]
fn missing_path_start_yields_empty_path() {
    let result = parse_response("VISITED 1,1\nVISITED 2,2\n3,3\n");
    assert_eq!(result.visited.len(), 2);
    assert!(result.path.is_empty());
    assert!(!result.has_path());
}

#[test]
fn path_start_without_points_yields_empty_path() {
    let result = parse_response("VISITED 4,5\nPATH_START\n\n");
    assert_eq!(result.visited, pts(&[(4, 5)]));
    assert!(!result.has_path());
}

#[test]
fn coordinates_before_path_start_are_ignored() {
    let result = parse_response("7,7\nPATH_START\n8,8\n");
    assert!(result.visited.is_empty());
    assert_eq!(result.path, pts(&[(8, 8)]));
}

#[test]
fn malformed_lines_are_dropped() {
    let body = "VISITED a,b\nVISITED 3\nVISITED 1,2\nnoise\nPATH_START\nx,1\n9;9\n4,4\n";
    let result = parse_response(body);
    assert_eq!(result.visited, pts(&[(1, 2)]));
    assert_eq!(result.path, pts(&[(4, 4)]));
}

#[test]
fn blank_lines_and_crlf_are_tolerated() {
    let result = parse_response("\r\nVISITED 1,1\r\n\r\nPATH_START\r\n2,2\r\n\n");
    assert_eq!(result.visited, pts(&[(1, 1)]));
    assert_eq!(result.path, pts(&[(2, 2)]));
}

#[test]
fn path_start_must_match_exactly() {
    let result = parse_response("PATH_START_NOW\n1,1\n");
    assert!(result.path.is_empty());
}

#[test]
fn visited_lines_after_path_start_still_count() {
    let result = parse_response("PATH_START\n1,1\nVISITED 5,5\n2,2\n");
    assert_eq!(result.visited, pts(&[(5, 5)]));
    assert_eq!(result.path, pts(&[(1, 1), (2, 2)]));
}

#[test]
fn events_preserve_stream_order() {
    let events = parse_events("VISITED 1,1\nPATH_START\n2,2\n");
    assert_eq!(
        events,
        vec![
            ProtocolEvent::Visited(Point::new(1, 1)),
            ProtocolEvent::PathStart,
            ProtocolEvent::PathPoint(Point::new(2, 2)),
        ]
    );
}

#[test]
fn serialization_reparses_to_same_result() {
    let original = parse_response("VISITED 1,1\nVISITED -2,30\nPATH_START\n1,1\n2,2\n");
    let reparsed = parse_response(&original.to_protocol_text());
    assert_eq!(reparsed, original);
}

#[test]
fn serialization_of_empty_result_reparses_empty() {
    let empty = ParsedResult::default();
    assert_eq!(empty.to_protocol_text(), "PATH_START\n");
    assert_eq!(parse_response(&empty.to_protocol_text()), empty);
}

#[test]
fn empty_body_parses_to_nothing() {
    assert_eq!(parse_response(""), ParsedResult::default());
}

#[test]
fn decimal_components_truncate_toward_zero() {
    let result = parse_response("VISITED 1.5,2\nVISITED -1.9,3.99\nPATH_START\n4.7,5\n");
    assert_eq!(result.visited, pts(&[(1, 2), (-1, 3)]));
    assert_eq!(result.path, pts(&[(4, 5)]));
}

#[test]
fn non_finite_components_are_dropped() {
    let result = parse_response("VISITED NaN,2\nVISITED inf,1\nVISITED 9,9\n");
    assert_eq!(result.visited, pts(&[(9, 9)]));
}
