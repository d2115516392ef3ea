use super::*;

#[test]
fn authorization_header_formats_bearer() {
    let req = ApiRequest::get("http://x/api").bearer("abc123");
    assert_eq!(req.authorization_header().as_deref(), Some("Bearer abc123"));
}

#[test]
fn authorization_header_absent_without_token() {
    assert_eq!(ApiRequest::post("http://x/api").authorization_header(), None);
}

#[test]
fn json_sets_body() {
    let req = ApiRequest::post("http://x").json(serde_json::json!({ "a": 1 }));
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.body, Some(serde_json::json!({ "a": 1 })));
}

#[test]
fn reply_success_range() {
    assert!(ApiReply::new(200, "").is_success());
    assert!(ApiReply::new(204, "").is_success());
    assert!(!ApiReply::new(199, "").is_success());
    assert!(!ApiReply::new(301, "").is_success());
    assert!(!ApiReply::new(409, "").is_success());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_on_server() {
    let result = futures::executor::block_on(BrowserTransport.send(ApiRequest::get("http://x")));
    assert_eq!(result, Err(TransportError::Unavailable));
}
