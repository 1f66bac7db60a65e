use super::*;

#[test]
fn parses_rows_after_header() {
    let points = parse_overlay_csv("x,y,path\n10,20,1\n11,21,2\n");
    assert_eq!(points, vec![Point::new(10, 20), Point::new(11, 21)]);
}

#[test]
fn skips_rows_with_bad_coordinates() {
    let points = parse_overlay_csv("x,y,path\n,5,1\nabc,5,1\n5\n7,8,\n");
    assert_eq!(points, vec![Point::new(7, 8)]);
}

#[test]
fn path_column_is_optional_and_ignored() {
    let points = parse_overlay_csv("x,y,path\n1,2,main\n3,4\n");
    assert_eq!(points, vec![Point::new(1, 2), Point::new(3, 4)]);
}

#[test]
fn tolerates_crlf_and_trailing_blank_lines() {
    let points = parse_overlay_csv("x,y,path\r\n3,4,0\r\n\r\n");
    assert_eq!(points, vec![Point::new(3, 4)]);
}

#[test]
fn header_only_or_empty_yields_nothing() {
    assert!(parse_overlay_csv("x,y,path\n").is_empty());
    assert!(parse_overlay_csv("").is_empty());
}
