use crate::HttpStatusCode;

/// **VALUE**: Verifies the status range predicates used when reporting service failures.
///
/// **BUG THIS CATCHES**: Would catch off-by-one errors at the 4xx/5xx boundaries.
#[test]
fn given_boundary_codes_when_classified_then_ranges_are_exact() {
    // GIVEN/WHEN/THEN: Boundaries of each range
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
    assert!(!HttpStatusCode(200).is_client_error());
    assert!(!HttpStatusCode(200).is_server_error());
}

#[test]
fn given_404_when_checked_then_is_not_found() {
    let status = HttpStatusCode::from(404);

    assert!(status.is_not_found());
    assert!(status.is_client_error());
    assert_eq!(status.to_string(), "404");
}
