use super::*;

fn query(sx: &str, sy: &str, ex: &str, ey: &str, algorithm: Option<&str>) -> PathQuery {
    PathQuery {
        start_x: Some(sx.to_owned()),
        start_y: Some(sy.to_owned()),
        end_x: Some(ex.to_owned()),
        end_y: Some(ey.to_owned()),
        algorithm: algorithm.map(str::to_owned),
    }
}

// --- Point / coords ---

#[test]
fn point_displays_as_pair() {
    assert_eq!(Point::new(3, -4).to_string(), "3,-4");
}

#[test]
fn parse_coord_accepts_integers_and_rounds_decimals() {
    assert_eq!(parse_coord("42"), Some(42));
    assert_eq!(parse_coord(" -7 "), Some(-7));
    assert_eq!(parse_coord("2.4"), Some(2));
    assert_eq!(parse_coord("2.5"), Some(3));
    assert_eq!(parse_coord("-2.5"), Some(-3));
}

#[test]
fn parse_coord_rejects_garbage() {
    assert_eq!(parse_coord(""), None);
    assert_eq!(parse_coord("abc"), None);
    assert_eq!(parse_coord("NaN"), None);
    assert_eq!(parse_coord("inf"), None);
    assert_eq!(parse_coord("1e12"), None);
}

#[test]
fn parse_pair_requires_both_halves() {
    assert_eq!(parse_pair("1,2"), Some(Point::new(1, 2)));
    assert_eq!(parse_pair(" 1 , 2 "), Some(Point::new(1, 2)));
    assert_eq!(parse_pair("1,"), None);
    assert_eq!(parse_pair("1"), None);
}

// --- Algorithm ---

#[test]
fn only_exact_astar_selects_astar() {
    assert_eq!(Algorithm::from_query(Some("astar")), Algorithm::AStar);
    assert_eq!(Algorithm::from_query(Some("dijkstra")), Algorithm::Dijkstra);
    assert_eq!(Algorithm::from_query(Some("AStar")), Algorithm::Dijkstra);
    assert_eq!(Algorithm::from_query(Some("bfs")), Algorithm::Dijkstra);
    assert_eq!(Algorithm::from_query(None), Algorithm::Dijkstra);
}

#[test]
fn solver_codes_match_contract() {
    assert_eq!(Algorithm::AStar.solver_code(), "0");
    assert_eq!(Algorithm::Dijkstra.solver_code(), "1");
}

#[test]
fn query_fields_use_camel_case_names() {
    let q: PathQuery =
        serde_json::from_str(r#"{"startX":"1","startY":"2","endX":"3","endY":"4","algorithm":"astar"}"#).unwrap();
    let req = q.to_request().unwrap();
    assert_eq!(req, SolverRequest::new(Point::new(1, 2), Point::new(3, 4), Algorithm::AStar));
}

// --- Request ---

#[test]
fn solver_args_are_positional() {
    let req = SolverRequest::new(Point::new(1, 2), Point::new(3, 4), Algorithm::AStar);
    assert_eq!(req.solver_args(), ["1", "2", "3", "4", "0"].map(String::from));
}

#[test]
fn query_string_names_all_fields() {
    let req = SolverRequest::new(Point::new(10, 20), Point::new(30, 40), Algorithm::Dijkstra);
    assert_eq!(req.query_string(), "startX=10&startY=20&endX=30&endY=40&algorithm=dijkstra");
}

#[test]
fn query_rounds_coordinates() {
    let req = query("10.4", "20.5", "30", "40.49", Some("astar")).to_request().unwrap();
    assert_eq!(req.start, Point::new(10, 21));
    assert_eq!(req.end, Point::new(30, 40));
    assert_eq!(req.algorithm, Algorithm::AStar);
}

#[test]
fn query_reports_missing_field() {
    let mut q = query("1", "2", "3", "4", None);
    q.end_y = None;
    assert_eq!(q.to_request(), Err(QueryError::Missing("endY")));

    let q = query("1", " ", "3", "4", None);
    assert_eq!(q.to_request(), Err(QueryError::Missing("startY")));
}

#[test]
fn query_reports_non_numeric_field() {
    let q = query("1", "2", "left", "4", None);
    assert_eq!(
        q.to_request(),
        Err(QueryError::NotNumeric { field: "endX", value: "left".into() })
    );
}
