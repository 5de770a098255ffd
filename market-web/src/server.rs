//! Static file server for the storefront
//!
//! Serves the built WASM app from the dist/ directory on port 8080. Handy
//! for local testing without a toolchain-provided dev server.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::{Path, PathBuf};

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("SMP Market server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let (path, _query) = match full_path.split_once('?') {
        Some((p, q)) => (p, Some(q)),
        None => (full_path, None),
    };

    // Map paths to files in dist/; the app is a single page, so anything
    // unknown falls back to index.html.
    let file_path = if path == "/" || path.is_empty() {
        PathBuf::from("dist/index.html")
    } else {
        let mut dist_path = PathBuf::from("dist");
        dist_path.push(path.strip_prefix('/').unwrap_or(path));
        if dist_path.is_dir() || !dist_path.exists() {
            PathBuf::from("dist/index.html")
        } else {
            dist_path
        }
    };

    let (body, content_type, status) = match fs::read(&file_path) {
        Ok(contents) => {
            let content_type = content_type_for(&file_path);
            (contents, content_type, "200 OK")
        }
        Err(_) => {
            eprintln!("File not found: {}", file_path.display());
            let error_msg =
                b"<!DOCTYPE html><html><body><h1>Error: File not found</h1></body></html>".to_vec();
            (error_msg, "text/html", "404 NOT FOUND")
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write file contents: {}", e);
    }
    let _ = stream.flush();
}
