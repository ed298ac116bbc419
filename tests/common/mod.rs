use restprobe::{ApiClient, HarnessConfig};
use url::Url;

/// Build a harness client aimed at a stub server.
pub fn client_for(stub: &stub::StubPetstore) -> ApiClient {
    let base = Url::parse(stub.base_url()).expect("stub base URL is valid");
    ApiClient::new(&HarnessConfig::with_base_url(base)).expect("client builds")
}

pub mod stub {
    //! In-process petstore stub: the thirteen endpoints of the demo API over
    //! an in-memory store, served by `tiny_http` on an ephemeral port.
    //!
    //! Response shapes follow the live service closely enough for the
    //! harness's assertions: created/updated entities are echoed back,
    //! missing identifiers yield 404 with an api-result body, and login
    //! returns the plain "logged in user session" message.

    use parking_lot::RwLock;
    use serde_json::{json, Value};
    use std::collections::{BTreeMap, HashMap};
    use std::io::Read;
    use std::sync::Arc;
    use std::thread::{self, JoinHandle};
    use tiny_http::{Header, Request, Response, Server};

    #[derive(Default)]
    struct Store {
        pets: RwLock<HashMap<i64, Value>>,
        users: RwLock<HashMap<String, Value>>,
        orders: RwLock<HashMap<i64, Value>>,
    }

    pub struct StubPetstore {
        server: Arc<Server>,
        handle: Option<JoinHandle<()>>,
        base_url: String,
    }

    impl StubPetstore {
        /// Bind to an ephemeral loopback port and start serving.
        pub fn start() -> Self {
            let server =
                Arc::new(Server::http("127.0.0.1:0").expect("failed to bind stub server"));
            let port = server
                .server_addr()
                .to_ip()
                .expect("stub server listens on an IP socket")
                .port();
            let store = Arc::new(Store::default());
            let worker = Arc::clone(&server);
            let handle = thread::spawn(move || {
                for request in worker.incoming_requests() {
                    handle_request(&store, request);
                }
            });
            Self {
                server,
                handle: Some(handle),
                base_url: format!("http://127.0.0.1:{port}"),
            }
        }

        pub fn base_url(&self) -> &str {
            &self.base_url
        }
    }

    impl Drop for StubPetstore {
        fn drop(&mut self) {
            self.server.unblock();
            if let Some(handle) = self.handle.take() {
                let _ = handle.join();
            }
        }
    }

    fn handle_request(store: &Store, mut request: Request) {
        let method = request.method().to_string();
        let url = request.url().to_string();
        let (path, query) = url.split_once('?').unwrap_or((url.as_str(), ""));
        let mut body = String::new();
        let _ = request.as_reader().read_to_string(&mut body);
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        let (status, payload) = route(store, &method, &segments, query, &body);
        let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
            .expect("static header is valid");
        let response = Response::from_string(payload)
            .with_status_code(status)
            .with_header(header);
        let _ = request.respond(response);
    }

    fn route(
        store: &Store,
        method: &str,
        segments: &[&str],
        query: &str,
        body: &str,
    ) -> (u16, String) {
        match (method, segments) {
            ("POST" | "PUT", &["pet"]) => upsert_by_id(&store.pets, body),
            ("GET", &["pet", id]) => fetch_by_id(&store.pets, id, "Pet not found"),
            ("DELETE", &["pet", id]) => delete_by_id(&store.pets, id),
            ("POST", &["user"]) => create_user(&store.users, body),
            ("GET", &["user", "login"]) => login(query),
            ("GET", &["user", username]) => match store.users.read().get(username) {
                Some(value) => (200, value.to_string()),
                None => (404, api_result(1, "User not found")),
            },
            ("PUT", &["user", username]) => match serde_json::from_str::<Value>(body) {
                Ok(value) => {
                    store.users.write().insert(username.to_string(), value);
                    (200, api_result(200, username))
                }
                Err(_) => (400, api_result(400, "invalid json")),
            },
            ("DELETE", &["user", username]) => {
                if store.users.write().remove(username).is_some() {
                    (200, api_result(200, username))
                } else {
                    (404, api_result(404, "User not found"))
                }
            }
            ("GET", &["store", "inventory"]) => inventory(store),
            ("POST", &["store", "order"]) => upsert_by_id(&store.orders, body),
            ("GET", &["store", "order", id]) => fetch_by_id(&store.orders, id, "Order not found"),
            ("DELETE", &["store", "order", id]) => delete_by_id(&store.orders, id),
            _ => (404, api_result(404, "unknown path")),
        }
    }

    fn api_result(code: i64, message: &str) -> String {
        json!({"code": code, "type": "unknown", "message": message}).to_string()
    }

    fn upsert_by_id(map: &RwLock<HashMap<i64, Value>>, body: &str) -> (u16, String) {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => match value.get("id").and_then(Value::as_i64) {
                Some(id) => {
                    let echoed = value.to_string();
                    map.write().insert(id, value);
                    (200, echoed)
                }
                None => (400, api_result(400, "missing id")),
            },
            Err(_) => (400, api_result(400, "invalid json")),
        }
    }

    fn fetch_by_id(
        map: &RwLock<HashMap<i64, Value>>,
        raw_id: &str,
        missing: &str,
    ) -> (u16, String) {
        match raw_id.parse::<i64>() {
            Ok(id) => match map.read().get(&id) {
                Some(value) => (200, value.to_string()),
                None => (404, api_result(1, missing)),
            },
            Err(_) => (404, api_result(404, "bad id")),
        }
    }

    fn delete_by_id(map: &RwLock<HashMap<i64, Value>>, raw_id: &str) -> (u16, String) {
        match raw_id.parse::<i64>() {
            Ok(id) => {
                if map.write().remove(&id).is_some() {
                    (200, api_result(200, raw_id))
                } else {
                    (404, api_result(404, "not found"))
                }
            }
            Err(_) => (404, api_result(404, "bad id")),
        }
    }

    fn create_user(map: &RwLock<HashMap<String, Value>>, body: &str) -> (u16, String) {
        match serde_json::from_str::<Value>(body) {
            Ok(value) => match value.get("username").and_then(Value::as_str) {
                Some(username) => {
                    let id = value.get("id").and_then(Value::as_i64).unwrap_or_default();
                    let key = username.to_string();
                    map.write().insert(key, value);
                    (200, api_result(200, &id.to_string()))
                }
                None => (400, api_result(400, "missing username")),
            },
            Err(_) => (400, api_result(400, "invalid json")),
        }
    }

    fn login(query: &str) -> (u16, String) {
        if query.contains("username=") && query.contains("password=") {
            (200, api_result(200, "logged in user session:1690000000000"))
        } else {
            (400, api_result(400, "missing credentials"))
        }
    }

    fn inventory(store: &Store) -> (u16, String) {
        let mut counts: BTreeMap<String, i64> = BTreeMap::new();
        for value in store.pets.read().values() {
            if let Some(status) = value.get("status").and_then(Value::as_str) {
                *counts.entry(status.to_string()).or_insert(0) += 1;
            }
        }
        // The mapping is never empty on the live service either.
        counts.entry("available".to_string()).or_insert(0);
        match serde_json::to_string(&counts) {
            Ok(body) => (200, body),
            Err(_) => (500, api_result(500, "inventory serialization failed")),
        }
    }
}
