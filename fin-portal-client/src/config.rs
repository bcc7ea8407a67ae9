/// Base URL of the backend API; every portal endpoint hangs off this root
pub const API_URL: &str = "http://127.0.0.1:8000";
