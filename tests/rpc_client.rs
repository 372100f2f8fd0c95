mod error {
    pub use netprofiles::error::*;
}

mod models {
    pub use netprofiles::rpc::models::*;
}

mod local_node {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::{TcpListener, TcpStream};
    use tokio::task::JoinHandle;
    use url::Url;

    /// Answers one connection per canned `(status, body)` pair and hands back
    /// the request bodies it saw.
    pub async fn serve(responses: Vec<(u16, &'static str)>) -> (Url, JoinHandle<Vec<String>>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for (status, body) in responses {
                let (mut socket, _) = listener.accept().await.expect("accept");
                requests.push(read_request(&mut socket).await);

                let reason = if status == 200 { "OK" } else { "Internal Server Error" };
                let reply = format!(
                    "HTTP/1.1 {status} {reason}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                    body.len()
                );
                socket.write_all(reply.as_bytes()).await.expect("write reply");
                let _ = socket.shutdown().await;
            }
            requests
        });

        let url = Url::parse(&format!("http://{addr}/")).expect("server url");
        (url, handle)
    }

    async fn read_request(socket: &mut TcpStream) -> String {
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let read = socket.read(&mut chunk).await.expect("read request");
            if read == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..read]);

            let Some(end) = buf.windows(4).position(|window| window == b"\r\n\r\n") else {
                continue;
            };
            let head = String::from_utf8_lossy(&buf[..end]).to_ascii_lowercase();
            let length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= end + 4 + length {
                return String::from_utf8_lossy(&buf[end + 4..]).into_owned();
            }
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

mod client_under_test {
    #![allow(dead_code)]

    include!("../src/rpc/client.rs");

    use super::local_node::serve;

    fn local_client(endpoint: Url) -> RpcClient {
        RpcClient::new(endpoint, Duration::from_secs(5)).expect("rpc client")
    }

    #[tokio::test]
    async fn reads_client_version_and_network_id() {
        let (url, server) = serve(vec![
            (
                200,
                r#"{"jsonrpc":"2.0","id":1,"result":"Geth/v1.8.2-stable/linux-amd64/go1.10"}"#,
            ),
            (200, r#"{"jsonrpc":"2.0","id":2,"result":"567345"}"#),
        ])
        .await;
        let client = local_client(url);

        let version = client.client_version().await.expect("client version");
        let network_id = client.net_version().await.expect("net version");

        assert_eq!(version, "Geth/v1.8.2-stable/linux-amd64/go1.10");
        assert_eq!(network_id, 567345);

        let requests = server.await.expect("server task");
        let first: serde_json::Value = serde_json::from_str(&requests[0]).expect("json body");
        let second: serde_json::Value = serde_json::from_str(&requests[1]).expect("json body");
        assert_eq!(first["jsonrpc"], "2.0");
        assert_eq!(first["method"], "web3_clientVersion");
        assert_eq!(first["params"], serde_json::json!([]));
        assert_eq!(first["id"], 1);
        assert_eq!(second["method"], "net_version");
        assert_eq!(second["id"], 2);
    }

    #[tokio::test]
    async fn surfaces_json_rpc_errors() {
        let (url, _server) = serve(vec![(
            200,
            r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32601,"message":"Method not found"}}"#,
        )])
        .await;

        let err = local_client(url).client_version().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Rpc(message)
                if message == "web3_clientVersion failed with code -32601: Method not found"
        ));
    }

    #[tokio::test]
    async fn surfaces_http_failures() {
        let (url, _server) = serve(vec![(500, "node is syncing")]).await;

        let err = local_client(url).net_version().await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Rpc(message)
                if message == "net_version request failed with http 500 Internal Server Error: node is syncing"
        ));
    }

    #[test]
    fn loopback_endpoints_skip_proxies() {
        for endpoint in [
            "http://localhost:8545/",
            "http://LOCALHOST:8545/",
            "http://127.0.0.1:8110/",
            "http://[::1]:8110/",
        ] {
            assert!(is_loopback(&Url::parse(endpoint).unwrap()), "{endpoint}");
        }

        for endpoint in ["http://10.0.0.7:8545/", "http://kovan.example.org:8545/"] {
            assert!(!is_loopback(&Url::parse(endpoint).unwrap()), "{endpoint}");
        }
    }

    #[test]
    fn parses_decimal_and_hex_net_versions() {
        assert_eq!(parse_net_version("42").unwrap(), 42);
        assert_eq!(parse_net_version(" 3\n").unwrap(), 3);
        assert_eq!(parse_net_version("0x2a").unwrap(), 42);
        assert!(matches!(
            parse_net_version("mainnet"),
            Err(AppError::Rpc(message)) if message == "net_version returned \"mainnet\""
        ));
    }

    #[test]
    fn maps_empty_http_error_body() {
        let err = map_http_error("net_version", StatusCode::BAD_GATEWAY, "  ");
        assert!(matches!(
            err,
            AppError::Rpc(message) if message == "net_version request failed with http 502 Bad Gateway"
        ));
    }
}

mod node_check {
    use std::time::Duration;

    use netprofiles::rpc::check_node;
    use netprofiles::{NetworkId, NetworkProfile};

    use super::local_node::serve;

    const CLIENT_VERSION: &str =
        r#"{"jsonrpc":"2.0","id":1,"result":"Geth/v1.8.2-stable/linux-amd64/go1.10"}"#;

    async fn node_reporting(net_version: &'static str) -> (url::Url, u16) {
        let (url, _server) = serve(vec![(200, CLIENT_VERSION), (200, net_version)]).await;
        let port = url.port().expect("server port");
        (url, port)
    }

    #[tokio::test]
    async fn reports_matching_network_id() {
        let (url, port) = node_reporting(r#"{"jsonrpc":"2.0","id":2,"result":"42"}"#).await;
        let profile = NetworkProfile::new("kovan", "127.0.0.1", port, NetworkId::Number(42))
            .expect("valid profile");

        let report = check_node(&profile, Duration::from_secs(5))
            .await
            .expect("node report");

        assert_eq!(report.profile, "kovan");
        assert_eq!(report.endpoint, url.as_str());
        assert_eq!(report.client_version, "Geth/v1.8.2-stable/linux-amd64/go1.10");
        assert_eq!(report.reported_network_id, 42);
        assert!(report.network_id_matches);
    }

    #[tokio::test]
    async fn reports_mismatched_network_id_without_failing() {
        let (_url, port) = node_reporting(r#"{"jsonrpc":"2.0","id":2,"result":"1"}"#).await;
        let profile = NetworkProfile::new(
            "development",
            "127.0.0.1",
            port,
            NetworkId::Text("567345".to_string()),
        )
        .expect("valid profile");

        let report = check_node(&profile, Duration::from_secs(5))
            .await
            .expect("node report");

        assert_eq!(report.reported_network_id, 1);
        assert_eq!(
            report.expected_network_id,
            NetworkId::Text("567345".to_string())
        );
        assert!(!report.network_id_matches);
    }

    #[tokio::test]
    async fn wildcard_profile_accepts_any_network() {
        let (_url, port) = node_reporting(r#"{"jsonrpc":"2.0","id":2,"result":"0x3"}"#).await;
        let profile = NetworkProfile::new("any", "127.0.0.1", port, NetworkId::Text("*".to_string()))
            .expect("valid profile");

        let report = check_node(&profile, Duration::from_secs(5))
            .await
            .expect("node report");

        assert_eq!(report.reported_network_id, 3);
        assert!(report.network_id_matches);
    }
}
