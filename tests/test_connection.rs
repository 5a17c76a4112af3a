use std::io::Read;
use std::sync::Arc;

use flate2::read::GzDecoder;
use petrel::http::connection::Connection;
use petrel::router::Router;
use petrel::server::listener::serve;
use petrel::store::FileStore;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

async fn round_trip(router: Arc<Router>, request: &[u8]) -> Vec<u8> {
    let (mut client, server) = tokio::io::duplex(4096);

    let task = tokio::spawn(async move {
        let mut conn = Connection::new(server, router);
        conn.run().await
    });

    client.write_all(request).await.unwrap();
    let mut response = Vec::new();
    client.read_to_end(&mut response).await.unwrap();

    task.await.unwrap().unwrap();
    response
}

fn split_head_body(response: &[u8]) -> (String, Vec<u8>) {
    let pos = response
        .windows(4)
        .position(|w| w == b"\r\n\r\n")
        .expect("header terminator");
    (
        String::from_utf8_lossy(&response[..pos]).into_owned(),
        response[pos + 4..].to_vec(),
    )
}

#[tokio::test]
async fn test_connection_echo() {
    let dir = tempfile::tempdir().unwrap();
    let router = Arc::new(Router::with_store(FileStore::new(dir.path())));

    let response = round_trip(router, b"GET /echo/abc HTTP/1.1\r\nHost: x\r\n\r\n").await;

    assert_eq!(
        response,
        b"HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 3\r\nUser-Agent: \r\n\r\nabc".to_vec()
    );
}

#[tokio::test]
async fn test_connection_gzip_echo() {
    let dir = tempfile::tempdir().unwrap();
    let router = Arc::new(Router::with_store(FileStore::new(dir.path())));

    let response = round_trip(
        router,
        b"GET /echo/hello HTTP/1.1\r\nAccept-Encoding: gzip\r\n\r\n",
    )
    .await;
    let (head, body) = split_head_body(&response);

    assert!(head.contains("Content-Encoding: gzip"));
    assert!(head.contains(&format!("Content-Length: {}", body.len())));

    let mut decoded = String::new();
    GzDecoder::new(&body[..]).read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, "hello");
}

#[tokio::test]
async fn test_connection_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let router = Arc::new(Router::with_store(FileStore::new(dir.path())));

    let response = round_trip(router, b"NONSENSE\r\n\r\n").await;

    assert!(response.starts_with(b"HTTP/1.1 400 Bad Request\r\n"));
}

#[tokio::test]
async fn test_connection_closed_without_data() {
    let dir = tempfile::tempdir().unwrap();
    let router = Arc::new(Router::with_store(FileStore::new(dir.path())));
    let (client, server) = tokio::io::duplex(64);
    drop(client);

    let mut conn = Connection::new(server, router);
    conn.run().await.unwrap();
}

#[tokio::test]
async fn test_server_handles_concurrent_clients() {
    let dir = tempfile::tempdir().unwrap();
    let router = Arc::new(Router::with_store(FileStore::new(dir.path())));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(serve(listener, router));

    let mut post = TcpStream::connect(addr).await.unwrap();
    post.write_all(b"POST /files/note.txt HTTP/1.1\r\nContent-Length: 5\r\n\r\nhello")
        .await
        .unwrap();
    let mut created = Vec::new();
    post.read_to_end(&mut created).await.unwrap();
    assert!(created.starts_with(b"HTTP/1.1 201 Created\r\n"));

    let mut clients = Vec::new();
    for _ in 0..4 {
        clients.push(tokio::spawn(async move {
            let mut stream = TcpStream::connect(addr).await.unwrap();
            stream
                .write_all(b"GET /files/note.txt HTTP/1.1\r\n\r\n")
                .await
                .unwrap();
            let mut response = Vec::new();
            stream.read_to_end(&mut response).await.unwrap();
            response
        }));
    }

    for client in clients {
        let response = client.await.unwrap();
        let (head, body) = split_head_body(&response);
        assert!(head.starts_with("HTTP/1.1 200 OK"));
        assert!(head.contains("Content-Type: application/octet-stream"));
        assert_eq!(body, b"hello".to_vec());
    }

    server.abort();
}
