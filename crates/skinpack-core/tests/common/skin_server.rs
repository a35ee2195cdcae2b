//! Minimal HTTP/1.1 server serving skins under `/skin/<name>` for integration tests.
//!
//! Known names get `200 OK` with their bytes; anything else gets `404`.
//! Every request is counted so tests can assert that no request was made.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;

pub struct SkinServer {
    /// Base URL with the `{username}` placeholder, e.g. `http://127.0.0.1:1234/skin/{username}`.
    pub url_template: String,
    hits: Arc<AtomicUsize>,
}

impl SkinServer {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start(skins: &[(&str, &[u8])]) -> SkinServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let skins: Arc<HashMap<String, Vec<u8>>> = Arc::new(
        skins
            .iter()
            .map(|(name, body)| (name.to_string(), body.to_vec()))
            .collect(),
    );
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_srv = Arc::clone(&hits);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let skins = Arc::clone(&skins);
            hits_srv.fetch_add(1, Ordering::SeqCst);
            thread::spawn(move || handle(stream, &skins));
        }
    });
    SkinServer {
        url_template: format!("http://127.0.0.1:{}/skin/{{username}}", port),
        hits,
    }
}

fn handle(mut stream: std::net::TcpStream, skins: &HashMap<String, Vec<u8>>) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let mut parts = request.lines().next().unwrap_or("").split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");

    let body = if method.eq_ignore_ascii_case("GET") {
        path.strip_prefix("/skin/").and_then(|name| skins.get(name))
    } else {
        None
    };

    match body {
        Some(body) => {
            let head = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(body);
        }
        None => {
            let _ = stream.write_all(
                b"HTTP/1.1 404 Not Found\r\nContent-Length: 9\r\nConnection: close\r\n\r\nnot found",
            );
        }
    }
}
