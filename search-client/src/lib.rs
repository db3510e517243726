use std::{
    fmt,
    io::{BufRead, BufReader, Write},
    net::{IpAddr, Ipv4Addr, SocketAddr, TcpStream},
};

use aerotrack_model::{ScanResponse, SearchCriteria};

/// Port the trip-scan service listens on.
pub const SCAN_PORT: u16 = 7878;

#[derive(Debug)]
pub enum ClientError {
    /// The service could not be reached.
    Connection(String),
    /// The connection dropped mid-request.
    Io(String),
    /// The request could not be encoded or the response not decoded.
    Serde(String),
    /// The service closed the connection without answering.
    EmptyResponse,
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Connection(detail) => {
                write!(f, "could not connect to the scan service: {}", detail)
            }
            ClientError::Io(detail) => write!(f, "connection error: {}", detail),
            ClientError::Serde(detail) => write!(f, "malformed request or response: {}", detail),
            ClientError::EmptyResponse => write!(f, "the scan service returned no response"),
        }
    }
}

impl std::error::Error for ClientError {}

/// Client for the trip-scan service. One request/response exchange per
/// `search` call, newline-delimited JSON over a persistent connection.
pub struct AerotrackClient {
    stream: TcpStream,
}

impl AerotrackClient {
    /// Creates a connection with the scan service at `ip`.
    pub fn connect(ip: Ipv4Addr) -> Result<Self, ClientError> {
        let addr = SocketAddr::new(IpAddr::V4(ip), SCAN_PORT);
        let stream =
            TcpStream::connect(addr).map_err(|e| ClientError::Connection(e.to_string()))?;

        Ok(Self { stream })
    }

    /// Sends one scan request and blocks until the response arrives.
    pub fn search(&mut self, criteria: &SearchCriteria) -> Result<ScanResponse, ClientError> {
        let mut request =
            serde_json::to_string(criteria).map_err(|e| ClientError::Serde(e.to_string()))?;
        request.push('\n');

        self.stream
            .write_all(request.as_bytes())
            .map_err(|e| ClientError::Io(e.to_string()))?;

        let mut line = String::new();
        let mut reader = BufReader::new(&self.stream);
        reader
            .read_line(&mut line)
            .map_err(|e| ClientError::Io(e.to_string()))?;

        if line.trim().is_empty() {
            return Err(ClientError::EmptyResponse);
        }

        serde_json::from_str(line.trim()).map_err(|e| ClientError::Serde(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerotrack_model::Trip;
    use std::io::Read;
    use std::net::TcpListener;
    use std::thread;

    fn sample_criteria() -> SearchCriteria {
        SearchCriteria {
            start_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            end_date: chrono::NaiveDate::from_ymd_opt(2024, 2, 20).unwrap(),
            min_days: 3,
            max_days: 7,
            departure_airports: vec!["FCO".to_string(), "VCE".to_string()],
            destination_airports: vec!["DUB".to_string()],
            return_to_same_airport: false,
        }
    }

    #[test]
    fn test_search_round_trip_against_stub_service() {
        // Port 0 so parallel tests never collide.
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut byte = [0u8; 1];
            loop {
                socket.read_exact(&mut byte).unwrap();
                if byte[0] == b'\n' {
                    break;
                }
                request.push(byte[0]);
            }
            let criteria: SearchCriteria =
                serde_json::from_slice(&request).expect("request should be one JSON line");
            assert_eq!(criteria.destination_airports, vec!["DUB".to_string()]);

            let response = ScanResponse {
                trips: Vec::<Trip>::new(),
            };
            let mut body = serde_json::to_string(&response).unwrap();
            body.push('\n');
            socket.write_all(body.as_bytes()).unwrap();
        });

        let stream = TcpStream::connect(addr).unwrap();
        let mut client = AerotrackClient { stream };
        let response = client.search(&sample_criteria()).unwrap();
        assert!(response.trips.is_empty());

        server.join().unwrap();
    }

    #[test]
    fn test_silent_service_is_an_empty_response() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let server = thread::spawn(move || {
            // Accept, swallow the request, and hang up without answering.
            // Draining the request first means the close is a clean FIN
            // rather than an RST from unread data in the receive buffer.
            let (socket, _) = listener.accept().unwrap();
            let mut line = String::new();
            BufReader::new(&socket).read_line(&mut line).unwrap();
            drop(socket);
        });

        let stream = TcpStream::connect(addr).unwrap();
        let mut client = AerotrackClient { stream };
        match client.search(&sample_criteria()) {
            Err(ClientError::EmptyResponse) => {}
            other => panic!("expected EmptyResponse, got {:?}", other.map(|_| ())),
        }

        server.join().unwrap();
    }
}
