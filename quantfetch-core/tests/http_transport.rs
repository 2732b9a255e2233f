//! End-to-end tests of the reqwest transport against a one-shot local server.

use quantfetch_core::data::{DataError, HistoricalSeriesFetcher, HistoryRequest};
use quantfetch_core::{DateRange, FetchConfig};
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

const BODY: &str = "Date,Open,High,Low,Close,Volume,Adj Close\n\
                    2020-01-02,104.0,110.0,103.0,108.0,1200000,108.0\n\
                    2020-01-01,100.0,105.0,99.0,104.0,1000000,104.0\n";

/// Serve exactly one connection with the given status line and body.
/// The request line the client sent is delivered on the returned channel.
fn serve_once(status: &'static str, body: &'static str) -> (String, mpsc::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let request_line = read_request_head(&stream);
        let _ = tx.send(request_line);
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: text/csv\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let mut stream = stream;
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
    });

    (format!("http://{addr}/table.csv"), rx)
}

/// Read the request head up to the blank line; return the request line.
fn read_request_head(stream: &TcpStream) -> String {
    let mut reader = BufReader::new(stream);
    let mut first = String::new();
    reader.read_line(&mut first).unwrap();
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
            break;
        }
    }
    first.trim_end().to_string()
}

fn config(base_url: String) -> FetchConfig {
    FetchConfig {
        base_url,
        timeout_secs: 5,
        ..FetchConfig::default()
    }
}

fn request(symbol: &str) -> HistoryRequest {
    let range = DateRange::from_ymd((2020, 1, 1), (2020, 1, 2)).unwrap();
    HistoryRequest::new(symbol, range).unwrap().adjusted(false)
}

#[test]
fn downloads_and_parses_over_http() {
    let (base_url, seen) = serve_once("200 OK", BODY);
    let fetcher = HistoricalSeriesFetcher::new(&config(base_url)).unwrap();

    let ts = fetcher.fetch(&request("GOOG")).unwrap();

    assert_eq!(ts.closes(), vec![104.0, 108.0]);
    let request_line = seen.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(
        request_line,
        "GET /table.csv?s=GOOG&a=0&b=1&c=2020&d=0&e=2&f=2020 HTTP/1.1"
    );
}

#[test]
fn not_found_is_http_status_error() {
    let (base_url, _seen) = serve_once("404 Not Found", "");
    let fetcher = HistoricalSeriesFetcher::new(&config(base_url)).unwrap();

    let err = fetcher.fetch(&request("NOPE")).unwrap_err();
    assert!(
        matches!(err, DataError::HttpStatus { status: 404, ref symbol } if symbol == "NOPE"),
        "{err}"
    );
}

#[test]
fn refused_connection_is_network_failure() {
    // Bind then drop to obtain a port nothing is listening on.
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let fetcher =
        HistoricalSeriesFetcher::new(&config(format!("http://{addr}/table.csv"))).unwrap();

    let err = fetcher.fetch(&request("GOOG")).unwrap_err();
    assert!(matches!(err, DataError::NetworkFailure { .. }), "{err}");
}

#[test]
fn silent_server_times_out_as_network_failure() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = thread::spawn(move || {
        // Hold the connection open without answering.
        let (stream, _) = listener.accept().unwrap();
        thread::sleep(Duration::from_secs(3));
        drop(stream);
    });

    let fetcher = HistoricalSeriesFetcher::new(&FetchConfig {
        base_url: format!("http://{addr}/table.csv"),
        timeout_secs: 1,
        ..FetchConfig::default()
    })
    .unwrap();

    let err = fetcher.fetch(&request("GOOG")).unwrap_err();
    assert!(matches!(err, DataError::NetworkFailure { .. }), "{err}");
    handle.join().unwrap();
}
