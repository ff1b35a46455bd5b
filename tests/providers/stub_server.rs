//! Local HTTP/1.1 server answering scripted JSON responses.
//!
//! Every connection carries one request and is closed after the response.
//! Requests are recorded in arrival order.

use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;

/// A request as received by the stub.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    /// Returns the target without its query string.
    pub fn path(&self) -> &str {
        self.target
            .split_once('?')
            .map_or(self.target.as_str(), |(path, _)| path)
    }

    /// Returns the raw query string, when present.
    pub fn query(&self) -> Option<&str> {
        self.target.split_once('?').map(|(_, query)| query)
    }

    /// Returns a header by lowercase name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
struct Route {
    method: &'static str,
    path: String,
    status: u16,
    body: String,
}

type Shared<T> = Arc<Mutex<Vec<T>>>;

/// Handle to a running stub; the listener thread lives for the test binary.
pub struct StubServer {
    address: SocketAddr,
    routes: Shared<Route>,
    requests: Shared<RecordedRequest>,
}

impl StubServer {
    /// Binds an ephemeral local port and starts serving.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub server");
        let address = listener.local_addr().expect("stub server address");
        let routes: Shared<Route> = Arc::default();
        let requests: Shared<RecordedRequest> = Arc::default();

        let served_routes = Arc::clone(&routes);
        let served_requests = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                serve(stream, &served_routes, &served_requests);
            }
        });

        Self {
            address,
            routes,
            requests,
        }
    }

    /// Answers `method path` with `status` and a JSON `body`.
    ///
    /// Unrouted requests get `404` with an empty object.
    pub fn respond(&self, method: &'static str, path: &str, status: u16, body: &str) {
        self.routes.lock().expect("routes lock").push(Route {
            method,
            path: path.to_owned(),
            status,
            body: body.to_owned(),
        });
    }

    /// Returns `http://127.0.0.1:<port>`.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.address)
    }

    /// Returns the bound port.
    pub fn port(&self) -> u16 {
        self.address.port()
    }

    /// Returns every request received so far.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().expect("requests lock").clone()
    }

    /// Returns the paths requested so far.
    pub fn paths(&self) -> Vec<String> {
        self.requests()
            .iter()
            .map(|request| request.path().to_owned())
            .collect()
    }
}

fn serve(mut stream: TcpStream, routes: &Shared<Route>, requests: &Shared<RecordedRequest>) {
    let Ok(request) = read_request(&stream) else {
        return;
    };
    let (status, body) = routes
        .lock()
        .expect("routes lock")
        .iter()
        .find(|route| route.method == request.method && route.path == request.path())
        .map_or_else(
            || (404, "{}".to_owned()),
            |route| (route.status, route.body.clone()),
        );
    requests.lock().expect("requests lock").push(request);

    let response = format!(
        "HTTP/1.1 {status} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        reason(status),
        body.len()
    );
    stream
        .write_all(response.as_bytes())
        .and_then(|()| stream.flush())
        .unwrap_or_default();
}

fn read_request(stream: &TcpStream) -> std::io::Result<RecordedRequest> {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line)?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_owned();
    let target = parts.next().unwrap_or_default().to_owned();

    let mut headers = HashMap::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line)?;
        let header = line.trim_end();
        if header.is_empty() {
            break;
        }
        if let Some((name, value)) = header.split_once(':') {
            headers.insert(name.trim().to_ascii_lowercase(), value.trim().to_owned());
        }
    }

    let length = headers
        .get("content-length")
        .and_then(|value| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body)?;

    Ok(RecordedRequest {
        method,
        target,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

const fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        202 => "Accepted",
        401 => "Unauthorized",
        404 => "Not Found",
        _ => "Status",
    }
}
