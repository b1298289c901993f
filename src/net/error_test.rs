use super::*;

#[test]
fn message_body_is_surfaced_verbatim() {
    let err = ApiError::from_response(403, r#"{"message":"Accès refusé"}"#);
    assert_eq!(err, ApiError::Message("Accès refusé".to_owned()));
    assert_eq!(err.user_message(), "Accès refusé");
}

#[test]
fn validation_body_keeps_field_keyed_messages() {
    let body = r#"{"errors":{"email":["Email invalide."],"password":["Trop court.","Trop simple."]}}"#;
    let err = ApiError::from_response(422, body);

    let ApiError::Validation(errors) = &err else {
        panic!("expected validation error, got {err:?}");
    };
    assert_eq!(errors["email"], vec!["Email invalide.".to_owned()]);
    assert_eq!(errors["password"].len(), 2);
    // Joined verbatim, deterministic field order.
    assert_eq!(err.user_message(), "Email invalide. Trop court. Trop simple.");
}

#[test]
fn message_wins_over_validation_details() {
    let body = r#"{"message":"Données invalides","errors":{"email":["Email invalide."]}}"#;
    let err = ApiError::from_response(422, body);
    assert_eq!(err, ApiError::Message("Données invalides".to_owned()));
}

#[test]
fn unauthorized_status_maps_to_unauthorized() {
    let err = ApiError::from_response(401, r#"{"message":"Unauthenticated."}"#);
    assert_eq!(err, ApiError::Unauthorized);
}

#[test]
fn unusable_bodies_fall_back_to_generic_network_error() {
    assert_eq!(
        ApiError::from_response(500, "<html>boom</html>"),
        ApiError::Network("HTTP 500".to_owned())
    );
    assert_eq!(
        ApiError::from_response(404, "{}"),
        ApiError::Network("HTTP 404".to_owned())
    );
    assert_eq!(
        ApiError::from_response(422, r#"{"message":"","errors":{}}"#),
        ApiError::Network("HTTP 422".to_owned())
    );
}

#[test]
fn generic_failures_show_the_retry_fallback_text() {
    let err = ApiError::Network("timeout".to_owned());
    assert_eq!(
        err.user_message(),
        "Une erreur est survenue. Veuillez réessayer plus tard."
    );
}
