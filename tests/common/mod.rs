#![allow(dead_code)]

use jewel_link::api::{AuthApi, OnboardingApi};
use jewel_link::models::{AuthResponse, LoginRequest, OnboardingData, RegisterRequest, User, UserUpdate};
use jewel_link::{JewelLinkError, Result};
use serde_json::json;
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ==================== Fixtures ====================

pub fn user(role: &str) -> User {
    serde_json::from_value(json!({
        "id": 7,
        "username": "maya",
        "email": "maya@aurora.example",
        "role": role,
        "first_name": "Maya",
        "last_name": "Iyer",
        "tenant": {"id": 3, "name": "Aurora Gems"}
    }))
    .expect("valid user fixture")
}

pub fn auth_response(role: &str, access: &str, refresh: &str) -> AuthResponse {
    AuthResponse {
        user: user(role),
        access_token: access.to_string(),
        refresh_token: refresh.to_string(),
    }
}

pub fn unauthorized() -> JewelLinkError {
    JewelLinkError::AuthenticationError("Token is invalid or expired".to_string())
}

// ==================== Fake APIs ====================

/// Scripted [`AuthApi`]: each method returns a clone of its configured result.
#[derive(Clone)]
pub struct FakeAuthApi {
    pub login: Result<AuthResponse>,
    pub register: Result<AuthResponse>,
    pub profile: Result<User>,
    pub update: Result<User>,
    pub logout: Result<()>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl Default for FakeAuthApi {
    fn default() -> Self {
        Self {
            login: Ok(auth_response("business-admin", "access-1", "refresh-1")),
            register: Ok(auth_response("marketing", "access-reg", "refresh-reg")),
            profile: Ok(user("business-admin")),
            update: Ok(user("business-admin")),
            logout: Ok(()),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl FakeAuthApi {
    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, credentials: &LoginRequest) -> Result<AuthResponse> {
        self.record(format!("login:{}", credentials.username));
        self.login.clone()
    }

    async fn register(&self, user_data: &RegisterRequest) -> Result<AuthResponse> {
        self.record(format!("register:{}", user_data.username));
        self.register.clone()
    }

    async fn logout(&self, refresh_token: &str) -> Result<()> {
        self.record(format!("logout:{}", refresh_token));
        self.logout.clone()
    }

    async fn get_profile(&self) -> Result<User> {
        self.record("profile");
        self.profile.clone()
    }

    async fn update_profile(&self, _update: &UserUpdate) -> Result<User> {
        self.record("update_profile");
        self.update.clone()
    }
}

/// Scripted [`OnboardingApi`] that remembers what it was sent.
#[derive(Clone)]
pub struct FakeOnboardingApi {
    pub result: Result<serde_json::Value>,
    pub submitted: Arc<Mutex<Vec<OnboardingData>>>,
}

impl FakeOnboardingApi {
    pub fn accepting() -> Self {
        Self {
            result: Ok(json!({"status": "completed"})),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(JewelLinkError::NetworkError("connection refused".to_string())),
            submitted: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn submissions(&self) -> Vec<OnboardingData> {
        self.submitted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl OnboardingApi for FakeOnboardingApi {
    async fn complete_onboarding(&self, data: &OnboardingData) -> Result<serde_json::Value> {
        self.submitted.lock().unwrap().push(data.clone());
        self.result.clone()
    }
}

// ==================== Minimal HTTP responder ====================

/// A request as seen by [`serve`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("request body is JSON")
    }
}

/// Canned status and body for one connection.
pub struct CannedResponse {
    pub status: u16,
    pub body: String,
}

impl CannedResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
        }
    }

    pub fn empty(status: u16) -> Self {
        Self {
            status,
            body: String::new(),
        }
    }
}

pub type Recorded = Arc<Mutex<Vec<RecordedRequest>>>;

/// Serve `responses` in order, one per connection, on an ephemeral port.
///
/// Returns the base URL and the log of received requests.
pub async fn serve(responses: Vec<CannedResponse>) -> (String, Recorded) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind test listener");
    let addr = listener.local_addr().expect("listener address");
    let recorded: Recorded = Arc::new(Mutex::new(Vec::new()));
    let log = recorded.clone();

    tokio::spawn(async move {
        for canned in responses {
            let Ok((mut socket, _)) = listener.accept().await else {
                return;
            };
            let Some(request) = read_request(&mut socket).await else {
                return;
            };
            log.lock().unwrap().push(request);

            let reason = match canned.status {
                200 => "OK",
                201 => "Created",
                204 => "No Content",
                400 => "Bad Request",
                401 => "Unauthorized",
                404 => "Not Found",
                _ => "Error",
            };
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                canned.status,
                reason,
                canned.body.len(),
                canned.body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    (format!("http://{}", addr), recorded)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let mut lines = head.split("\r\n");
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();

    let headers: Vec<(String, String)> = lines
        .filter_map(|line| {
            let (k, v) = line.split_once(':')?;
            Some((k.trim().to_string(), v.trim().to_string()))
        })
        .collect();

    let content_length = headers
        .iter()
        .find(|(k, _)| k.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, v)| v.parse::<usize>().ok())
        .unwrap_or(0);

    while buf.len() < header_end + content_length {
        let n = socket.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = (header_end + content_length).min(buf.len());
    let body = String::from_utf8_lossy(&buf[header_end..body_end]).to_string();

    Some(RecordedRequest {
        method,
        target,
        headers,
        body,
    })
}
