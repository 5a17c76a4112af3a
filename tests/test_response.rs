use petrel::http::encoding::ContentEncoding;
use petrel::http::response::{Response, ResponseBuilder, StatusCode};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Created.as_u16(), 201);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Created.reason_phrase(), "Created");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Not Found");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
}

#[test]
fn test_default_response_is_empty_ok() {
    let response = Response::default();

    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.content_type.is_empty());
    assert!(response.user_agent.is_empty());
    assert_eq!(response.content_encoding, None);
    assert_eq!(response.content_length(), 0);
}

#[test]
fn test_response_builder_sets_fields() {
    let response = ResponseBuilder::new(StatusCode::Ok)
        .content_type("text/plain")
        .content_encoding(ContentEncoding::Gzip)
        .user_agent("foo/1.0")
        .body(b"Hello, World!".to_vec())
        .build();

    assert_eq!(response.content_type, "text/plain");
    assert_eq!(response.content_encoding, Some(ContentEncoding::Gzip));
    assert_eq!(response.user_agent, "foo/1.0");
    assert_eq!(response.body, b"Hello, World!".to_vec());
}

#[test]
fn test_content_length_follows_body() {
    let mut response = ResponseBuilder::new(StatusCode::Ok).body("abc").build();
    assert_eq!(response.content_length(), 3);

    response.body.extend_from_slice(b"def");
    assert_eq!(response.content_length(), 6);
}

#[test]
fn test_response_helpers() {
    assert_eq!(Response::ok().status, StatusCode::Ok);
    assert_eq!(Response::created().status, StatusCode::Created);
    assert_eq!(Response::bad_request().status, StatusCode::BadRequest);
    assert_eq!(Response::not_found().status, StatusCode::NotFound);
    assert_eq!(Response::internal_error().status, StatusCode::InternalServerError);

    assert!(Response::not_found().body.is_empty());
}
