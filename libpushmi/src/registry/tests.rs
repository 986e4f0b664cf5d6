use super::*;
use crate::client::ClientConfig;

fn lister_for(registry: &str, server: &mockito::Server) -> TagLister {
    let config = ClientConfig::new().with_endpoint(registry, server.url());
    TagLister::new(Client::with_config(config).unwrap())
}

#[test]
fn test_list_tags_docker_hub() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/repositories/library/mongo/tags")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"layer":"","name":"1.0"},{"layer":"","name":"2.0"}]"#)
        .create();

    let lister = lister_for("hub.docker.com", &server);
    let reference = ImageReference::resolve("mongo").unwrap();
    let tags = lister.list_tags(&reference, None).unwrap();

    mock.assert();
    assert_eq!(tags, vec!["1.0", "2.0"]);
}

#[test]
fn test_list_tags_docker_hub_ignores_organization() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/repositories/library/myrepo/tags")
        .with_status(200)
        .with_body(r#"[{"name":"latest"}]"#)
        .create();

    let lister = lister_for("hub.docker.com", &server);
    let reference = ImageReference::resolve("myorg/myrepo").unwrap();
    let tags = lister.list_tags(&reference, None).unwrap();

    mock.assert();
    assert_eq!(tags, vec!["latest"]);
}

#[test]
fn test_list_tags_gcr() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v2/myorg/myrepo/tags/list")
        .with_status(200)
        .with_body(r#"{"tags":["latest","v1"]}"#)
        .create();

    let lister = lister_for("gcr.io", &server);
    let reference = ImageReference::resolve("gcr.io/myorg/myrepo").unwrap();
    let tags = lister.list_tags(&reference, None).unwrap();

    mock.assert();
    assert_eq!(tags, vec!["latest", "v1"]);
}

#[test]
fn test_list_tags_quay_preserves_key_order() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/repositories/coreos/etcd/tags")
        .with_status(200)
        .with_body(r#"{"v3.3":"aaa","latest":"bbb","v3.1":"ccc"}"#)
        .create();

    let lister = lister_for("quay.io", &server);
    let reference = ImageReference::resolve("quay.io/coreos/etcd").unwrap();
    let tags = lister.list_tags(&reference, None).unwrap();

    mock.assert();
    assert_eq!(tags, vec!["v3.3", "latest", "v3.1"]);
}

#[test]
fn test_list_tags_empty_list_is_ok() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v2/myorg/empty/tags/list")
        .with_status(200)
        .with_body(r#"{"tags":[]}"#)
        .create();

    let lister = lister_for("gcr.io", &server);
    let reference = ImageReference::resolve("gcr.io/myorg/empty").unwrap();
    let tags = lister.list_tags(&reference, None).unwrap();

    mock.assert();
    assert!(tags.is_empty());
}

#[test]
fn test_list_tags_sends_credentials() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1/repositories/private/app/tags")
        .match_header("authorization", "Basic dXNlcjpwYXNz")
        .with_status(200)
        .with_body(r#"{"1.0":"x"}"#)
        .create();

    let lister = lister_for("quay.io", &server);
    let reference = ImageReference::resolve("quay.io/private/app").unwrap();
    let creds = Credentials::basic("user", "pass");
    let tags = lister.list_tags(&reference, Some(&creds)).unwrap();

    mock.assert();
    assert_eq!(tags, vec!["1.0"]);
}

#[test]
fn test_list_tags_non_200_fails_without_tags() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v2/myorg/myrepo/tags/list")
        .with_status(404)
        .with_body("not found")
        .create();

    let lister = lister_for("gcr.io", &server);
    let reference = ImageReference::resolve("gcr.io/myorg/myrepo").unwrap();
    let result = lister.list_tags(&reference, None);

    mock.assert();
    assert!(matches!(
        result.unwrap_err(),
        PushmiError::RegistryRequestFailed { status: 404, .. }
    ));
}

#[test]
fn test_list_tags_wrong_shape_is_unexpected_response() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v2/myorg/myrepo/tags/list")
        .with_status(200)
        .with_body(r#"[{"name":"1.0"}]"#)
        .create();

    let lister = lister_for("gcr.io", &server);
    let reference = ImageReference::resolve("gcr.io/myorg/myrepo").unwrap();
    let result = lister.list_tags(&reference, None);

    mock.assert();
    assert!(matches!(
        result.unwrap_err(),
        PushmiError::UnexpectedResponse { .. }
    ));
}

#[test]
fn test_list_tags_unsupported_registry_makes_no_request() {
    let mut server = mockito::Server::new();
    let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

    let lister = lister_for("ghcr.io", &server);
    let reference = ImageReference::resolve("ghcr.io/myorg/myrepo").unwrap();
    let result = lister.list_tags(&reference, None);

    mock.assert();
    assert!(matches!(
        result.unwrap_err(),
        PushmiError::UnsupportedRegistry { .. }
    ));
}

#[test]
fn test_tag_url_uses_endpoint_override() {
    let server = mockito::Server::new();
    let lister = lister_for("gcr.io", &server);
    let reference = ImageReference::resolve("gcr.io/a/b").unwrap();

    assert_eq!(
        lister.tag_url(&reference).unwrap(),
        format!("{}/v2/a/b/tags/list", server.url())
    );
}
