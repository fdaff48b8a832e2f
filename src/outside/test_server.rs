use std::{
    io::{BufRead, BufReader, Write},
    net::TcpListener,
    thread::{self, JoinHandle},
};

use reqwest::blocking::Client;

/// Answer one connection per reply, in order, from a local HTTP/1.1 server.
///
/// Return the server base URL and a handle giving back the head of every request received.
pub fn serve(replies: Vec<(u16, String)>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());

    let handle = thread::spawn(move || {
        let mut requests = Vec::new();
        for (status, body) in replies {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            // GET requests carry no body, the head ends with an empty line
            let mut head = String::new();
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap() == 0 || line == "\r\n" {
                    break;
                }
                head.push_str(&line);
            }

            write!(
                stream,
                "HTTP/1.1 {status} Reply\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            )
            .unwrap();
            stream.flush().unwrap();
            requests.push(head);
        }
        requests
    });

    (base_url, handle)
}

/// Client going straight to the local server, whatever the proxy environment says
pub fn local_client() -> Client {
    Client::builder().no_proxy().build().unwrap()
}
