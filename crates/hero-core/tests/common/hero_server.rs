//! Minimal HTTP/1.1 server mimicking the hero API for integration tests.
//!
//! Serves `/api/v1/resources/heros/{all,image,occupation,powerstats}` from a
//! fixed hero table. Unknown ids and a missing `id` get the upstream
//! plain-text bodies with status 200. Per-hero delays let tests force
//! out-of-order completion.

use serde_json::json;
use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Hero {
    pub id: u32,
    pub name: &'static str,
    pub occupation: &'static str,
    pub image: &'static str,
    pub stats: [u32; 6],
}

#[derive(Debug, Clone, Default)]
pub struct ServerOptions {
    /// Sleep this long before answering any per-hero request for the id.
    pub delays: HashMap<u32, Duration>,
    /// If true, `/all` returns 503.
    pub list_unavailable: bool,
}

pub fn sample_heroes() -> Vec<Hero> {
    vec![
        Hero {
            id: 69,
            name: "Batman",
            occupation: "Businessman",
            image: "https://img.test/69.jpg",
            stats: [81, 40, 29, 55, 63, 90],
        },
        Hero {
            id: 1,
            name: "A-Bomb",
            occupation: "Musician, adventurer, author",
            image: "https://img.test/1.jpg",
            stats: [38, 100, 17, 80, 24, 64],
        },
        Hero {
            id: 644,
            name: "Superman",
            occupation: "Reporter for the Daily Planet",
            image: "https://img.test/644.jpg",
            stats: [94, 100, 100, 100, 100, 85],
        },
    ]
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(heroes: Vec<Hero>) -> String {
    start_with_options(heroes, ServerOptions::default())
}

pub fn start_with_options(heroes: Vec<Hero>, opts: ServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let state = Arc::new((heroes, opts));
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let state = Arc::clone(&state);
            thread::spawn(move || handle(stream, &state.0, &state.1));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, heroes: &[Hero], opts: &ServerOptions) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 4096];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let Ok(request) = std::str::from_utf8(&buf[..n]) else {
        return;
    };
    let target = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or("/");
    let (path, query) = target.split_once('?').unwrap_or((target, ""));
    let id = query
        .split('&')
        .find_map(|kv| kv.strip_prefix("id="))
        .map(str::to_string);

    let (status, content_type, body) = route(path, id.as_deref(), heroes, opts);
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
}

fn route(
    path: &str,
    id: Option<&str>,
    heroes: &[Hero],
    opts: &ServerOptions,
) -> (&'static str, &'static str, String) {
    const JSON: &str = "application/json";
    const TEXT: &str = "text/html; charset=utf-8";

    if path == "/api/v1/resources/heros/all" {
        if opts.list_unavailable {
            return ("503 Service Unavailable", TEXT, String::new());
        }
        let list: Vec<_> = heroes
            .iter()
            .map(|h| json!({"id": h.id, "name": h.name}))
            .collect();
        return ("200 OK", JSON, serde_json::Value::from(list).to_string());
    }

    let Some(resource) = path.strip_prefix("/api/v1/resources/heros/") else {
        return ("404 Not Found", TEXT, String::new());
    };
    if !matches!(resource, "image" | "occupation" | "powerstats") {
        return ("404 Not Found", TEXT, String::new());
    }
    let Some(id) = id else {
        return ("200 OK", TEXT, "No Hero ID Parameter Found".to_string());
    };
    let Ok(id) = id.parse::<u32>() else {
        return ("500 Internal Server Error", TEXT, String::new());
    };
    if let Some(d) = opts.delays.get(&id) {
        thread::sleep(*d);
    }
    let Some(hero) = heroes.iter().find(|h| h.id == id) else {
        return ("200 OK", TEXT, format!("Hero ID {} Does Not Exist", id));
    };
    let body = match resource {
        "image" => json!({"url": hero.image}),
        "occupation" => json!({"occupation": hero.occupation}),
        _ => {
            let [intelligence, strength, speed, durability, power, combat] = hero.stats;
            json!({
                "intelligence": intelligence,
                "strength": strength,
                "speed": speed,
                "durability": durability,
                "power": power,
                "combat": combat,
            })
        }
    };
    ("200 OK", JSON, body.to_string())
}
