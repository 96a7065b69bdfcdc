use std::{
    io::{BufRead, BufReader, Read, Write},
    net::{TcpListener, TcpStream},
    sync::{Arc, Mutex},
    thread::{self, JoinHandle},
    time::Duration,
};

/// A canned answer from the fake service.
pub enum Reply {
    Status(u16, &'static str),
    /// Accept the connection and never answer.
    Hang(Duration),
}

/// Loopback HTTP server that answers one connection per scripted reply.
pub struct FakeService {
    pub base_url: String,
    pub bodies: Arc<Mutex<Vec<String>>>,
    pub paths: Arc<Mutex<Vec<String>>>,
    handle: Option<JoinHandle<()>>,
}

impl FakeService {
    pub fn start(replies: Vec<Reply>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let bodies = Arc::new(Mutex::new(Vec::new()));
        let paths = Arc::new(Mutex::new(Vec::new()));

        let handle = thread::spawn({
            let bodies = Arc::clone(&bodies);
            let paths = Arc::clone(&paths);
            move || {
                for reply in replies {
                    let (stream, _) = listener.accept().unwrap();
                    let (path, body) = read_request(&stream);
                    paths.lock().unwrap().push(path);
                    bodies.lock().unwrap().push(body);
                    answer(stream, reply);
                }
            }
        });

        Self {
            base_url,
            bodies,
            paths,
            handle: Some(handle),
        }
    }

    /// Wait until every scripted reply was served.
    pub fn finish(mut self) {
        if let Some(handle) = self.handle.take() {
            handle.join().unwrap();
        }
    }
}

fn read_request(stream: &TcpStream) -> (String, String) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    reader.read_line(&mut request_line).unwrap();
    let path = request_line
        .split_whitespace()
        .take(2)
        .collect::<Vec<_>>()
        .join(" ");

    let mut content_length = 0;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).unwrap();
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap();
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).unwrap();
    (path, String::from_utf8(body).unwrap())
}

fn answer(mut stream: TcpStream, reply: Reply) {
    match reply {
        Reply::Status(code, body) => {
            let response = format!(
                "HTTP/1.1 {} Status\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                code,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();
        }
        Reply::Hang(duration) => thread::sleep(duration),
    }
}

/// A URL on which nothing is listening.
pub fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
