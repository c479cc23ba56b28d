use http_requester::{
    core::{HostVerification, RequestOptions, TransportErrorKind},
    requester::Headers,
    HttpRequester,
};
use std::{
    io::{Read, Write},
    net::TcpListener,
    sync::Arc,
    thread,
    time::{Duration, Instant},
};
use test_case::test_case;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn no_headers() -> Headers {
    Headers::new()
}

#[test_case(200 ; "ok")]
#[test_case(404 ; "not found")]
#[test_case(500 ; "server error")]
#[tokio::test]
async fn return_server_status(status: u16) {
    init_logger();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/status"))
        .respond_with(ResponseTemplate::new(status).set_body_string("payload"))
        .mount(&server)
        .await;

    let url = format!("{}/status", server.uri());
    let response = tokio::task::spawn_blocking(move || {
        http_requester::get(&url, &no_headers(), RequestOptions::default(), true)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status_code(), status);
    assert_eq!(response.content(), "payload");
}

#[tokio::test]
async fn send_caller_headers() {
    init_logger();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(header("X-Test", "abc"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = server.uri();
    let response = tokio::task::spawn_blocking(move || {
        let headers = Headers::from([("X-Test".to_string(), "abc".to_string())]);
        http_requester::get(&url, &headers, RequestOptions::default(), true)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.content(), "");
}

#[tokio::test]
async fn post_form_encoded_mapping() {
    init_logger();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/form"))
        .and(body_string("a=1&b=two%20words"))
        .respond_with(ResponseTemplate::new(201).set_body_string("created"))
        .mount(&server)
        .await;

    let url = format!("{}/form", server.uri());
    let response = tokio::task::spawn_blocking(move || {
        http_requester::post(
            &url,
            vec![("a", "1"), ("b", "two words")],
            &no_headers(),
            RequestOptions::default(),
            true,
        )
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status_code(), 201);
    assert_eq!(response.content(), "created");
}

#[tokio::test]
async fn post_raw_body_verbatim() {
    init_logger();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_string("raw-body-string"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let url = server.uri();
    let response = tokio::task::spawn_blocking(move || {
        http_requester::post(
            &url,
            "raw-body-string",
            &no_headers(),
            RequestOptions::default(),
            true,
        )
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status_code(), 200);
}

async fn redirecting_server() -> MockServer {
    let server = MockServer::start().await;
    let location = format!("{}/new", server.uri());

    Mock::given(path("/old"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", location.as_str()))
        .mount(&server)
        .await;
    Mock::given(path("/new"))
        .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
        .mount(&server)
        .await;

    server
}

#[tokio::test]
async fn follow_redirects_on_get() {
    init_logger();
    let server = redirecting_server().await;

    let url = format!("{}/old", server.uri());
    let response = tokio::task::spawn_blocking(move || {
        http_requester::get(&url, &no_headers(), RequestOptions::default(), true)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.content(), "moved here");
}

#[tokio::test]
async fn not_follow_redirects_when_caller_disables_them() {
    init_logger();
    let server = redirecting_server().await;

    let url = format!("{}/old", server.uri());
    let response = tokio::task::spawn_blocking(move || {
        let options = RequestOptions::builder()
            .follow_redirects(false)
            .build()
            .unwrap();
        http_requester::get(&url, &no_headers(), options, true)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status_code(), 302);
}

#[tokio::test]
async fn not_follow_redirects_on_post_by_default() {
    init_logger();
    let server = redirecting_server().await;

    let url = format!("{}/old", server.uri());
    let response = tokio::task::spawn_blocking(move || {
        http_requester::post(&url, "x=1", &no_headers(), RequestOptions::default(), true)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(response.status_code(), 302);
}

#[tokio::test]
async fn fail_when_total_timeout_elapses() {
    init_logger();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let url = server.uri();
    let error = tokio::task::spawn_blocking(move || {
        let options = RequestOptions::builder()
            .timeout(Duration::from_millis(200))
            .build()
            .unwrap();
        http_requester::get(&url, &no_headers(), options, true)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(error.kind(), TransportErrorKind::OperationTimedOut);
    assert_eq!(error.code(), 28);
    assert_eq!(error.message(), "transport error: timeout was reached");
}

#[tokio::test]
async fn fail_on_plain_http_server_addressed_over_tls() {
    init_logger();
    let server = MockServer::start().await;

    let url = server.uri().replacen("http://", "https://", 1);
    let error = tokio::task::spawn_blocking(move || {
        http_requester::get(&url, &no_headers(), RequestOptions::default(), true)
    })
    .await
    .unwrap()
    .unwrap_err();

    assert_eq!(error.kind(), TransportErrorKind::SslConnectError);
    assert!(error.message().starts_with("transport error: "));
}

#[test]
fn fail_fast_on_unreachable_host() {
    init_logger();
    let connect_timeout = Duration::from_secs(1);
    let options = RequestOptions::builder()
        .connect_timeout(connect_timeout)
        .build()
        .unwrap();

    let started = Instant::now();
    let error =
        http_requester::get("http://10.255.255.1/", &no_headers(), options, true).unwrap_err();

    assert_ne!(error.code(), 0);
    assert!(started.elapsed() < connect_timeout + Duration::from_secs(2));
}

#[test]
fn fail_on_malformed_url() {
    init_logger();

    let error = http_requester::get("not a url", &no_headers(), RequestOptions::default(), true)
        .unwrap_err();

    assert_eq!(error.kind(), TransportErrorKind::UrlMalformat);
    assert_eq!(error.code(), 3);
}

#[tokio::test]
async fn serve_concurrent_calls_independently() {
    init_logger();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(204))
        .expect(4)
        .mount(&server)
        .await;

    let url = server.uri();
    let statuses = tokio::task::spawn_blocking(move || {
        let requester = HttpRequester::new();

        std::thread::scope(|scope| {
            let handles = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        requester
                            .get(&url, &Headers::new(), RequestOptions::default(), true)
                            .map(|response| response.status_code())
                    })
                })
                .collect::<Vec<_>>();

            handles
                .into_iter()
                .map(|handle| handle.join().unwrap().unwrap())
                .collect::<Vec<_>>()
        })
    })
    .await
    .unwrap();

    assert_eq!(statuses, vec![204; 4]);
}

#[test]
fn fail_on_unknown_host() {
    init_logger();

    let error = http_requester::get(
        "http://nowhere.invalid/",
        &no_headers(),
        RequestOptions::default(),
        true,
    )
    .unwrap_err();

    assert_eq!(error.kind(), TransportErrorKind::CouldntResolveHost);
    assert_eq!(error.code(), 6);
}

/// Serves `connections` TLS exchanges on `localhost` with a freshly generated
/// self-signed certificate, answering each with `200 ok`.
fn self_signed_server(connections: usize) -> String {
    let certificate = rcgen::generate_simple_self_signed(vec!["localhost".to_string()]).unwrap();
    let config = rustls::ServerConfig::builder()
        .with_safe_defaults()
        .with_no_client_auth()
        .with_single_cert(
            vec![rustls::Certificate(certificate.serialize_der().unwrap())],
            rustls::PrivateKey(certificate.serialize_private_key_der()),
        )
        .unwrap();
    let config = Arc::new(config);

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("https://localhost:{}/", listener.local_addr().unwrap().port());

    thread::spawn(move || {
        for stream in listener.incoming().take(connections) {
            let Ok(stream) = stream else { continue };
            let connection = rustls::ServerConnection::new(config.clone()).unwrap();
            let mut stream = rustls::StreamOwned::new(connection, stream);

            // rejected handshakes end up here as read errors
            let _ = respond_ok(&mut stream);
        }
    });

    url
}

fn respond_ok(stream: &mut (impl Read + Write)) -> std::io::Result<()> {
    let mut request = Vec::new();
    let mut buffer = [0u8; 1024];

    while !request.windows(4).any(|window| window == b"\r\n\r\n") {
        let read = stream.read(&mut buffer)?;
        if read == 0 {
            return Ok(());
        }
        request.extend_from_slice(&buffer[..read]);
    }

    stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 2\r\nConnection: close\r\n\r\nok")?;
    stream.flush()
}

#[test]
fn accept_self_signed_certificate_only_without_verification() {
    init_logger();
    let url = self_signed_server(2);

    let response = http_requester::get(&url, &no_headers(), RequestOptions::default(), false)
        .unwrap();
    assert_eq!(response.status_code(), 200);
    assert_eq!(response.content(), "ok");

    let error = http_requester::get(&url, &no_headers(), RequestOptions::default(), true)
        .unwrap_err();
    assert_eq!(error.kind(), TransportErrorKind::PeerFailedVerification);
    assert_eq!(error.code(), 60);
    assert_eq!(
        error.message(),
        "transport error: SSL peer certificate was not OK"
    );
}

#[test]
fn reject_host_check_disabled_alone() {
    init_logger();
    let options = RequestOptions::builder()
        .verify_host(HostVerification::Disabled)
        .build()
        .unwrap();

    let error =
        http_requester::get("https://localhost:1/", &no_headers(), options, true).unwrap_err();

    assert_eq!(error.kind(), TransportErrorKind::BadFunctionArgument);
    assert_eq!(error.code(), 43);
}
