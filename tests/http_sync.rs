use common::{CardIndex, GameSnapshot, Player, PlayerNum, Roll, Step, Stock};
use machikoro_web::{ActionError, ClientConfig, ErrorKind, HttpTransport, Synchronizer};
use serde_json::{json, Value};
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use warp::http::StatusCode;
use warp::Filter;

fn table(coins: u32, current: PlayerNum, step: Step, roll: Roll) -> GameSnapshot {
    let mut starting = Stock::default();
    starting[CardIndex::new(0).unwrap()] = 1;
    starting[CardIndex::new(2).unwrap()] = 1;
    let player = Player {
        coins,
        stock: starting,
        ..Player::default()
    };
    GameSnapshot::new(
        [player.clone(), player.clone(), player],
        Stock::new([6; 14]),
        current,
        step,
        roll,
    )
    .with_code("TEST")
}

fn opening() -> GameSnapshot {
    table(3, PlayerNum::P1, Step::Roll, Roll::default())
}

fn rolled() -> GameSnapshot {
    table(5, PlayerNum::P1, Step::Buy, Roll::double(3, 4))
}

fn after_purchase() -> GameSnapshot {
    table(3, PlayerNum::P2, Step::Roll, Roll::double(3, 4))
}

// A stand-in for the game service that answers a fixed script
fn respond(path: &str) -> (StatusCode, Value) {
    match path {
        "start" => (StatusCode::OK, serde_json::to_value(opening()).unwrap()),
        "rollDouble" => (StatusCode::OK, serde_json::to_value(rolled()).unwrap()),
        "purchaseCard/13" => (
            StatusCode::BAD_REQUEST,
            json!({ "message": "Card not in stock." }),
        ),
        p if p.starts_with("purchaseCard/") => {
            (StatusCode::OK, serde_json::to_value(after_purchase()).unwrap())
        }
        "confirm" => (StatusCode::OK, json!({ "step": "buy" })),
        _ => (StatusCode::NOT_FOUND, json!({ "message": "no such endpoint" })),
    }
}

fn serve() -> (SocketAddr, Arc<Mutex<Vec<String>>>) {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let log = requests.clone();
    let routes = warp::get()
        .and(warp::path("machikoroapp"))
        .and(warp::path("game"))
        .and(warp::path::tail())
        .map(move |tail: warp::path::Tail| {
            log.lock().unwrap().push(tail.as_str().to_string());
            let (status, body) = respond(tail.as_str());
            warp::reply::with_status(warp::reply::json(&body), status)
        });
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);
    (addr, requests)
}

fn synchronizer(addr: SocketAddr) -> Synchronizer<HttpTransport> {
    let url = format!("http://{}/machikoroapp/", addr);
    let config = ClientConfig::new(&url, Duration::from_secs(5), PathBuf::from("./logs")).unwrap();
    Synchronizer::new(HttpTransport::new(&config).unwrap())
}

#[tokio::test]
async fn plays_a_turn_against_a_live_server() {
    let (addr, requests) = serve();
    let mut sync = synchronizer(addr);

    let started = sync.start().await.unwrap().clone();
    assert_eq!(started, opening());
    assert_eq!(started.code(), Some("TEST"));

    sync.roll_double().await.unwrap();
    assert_eq!(sync.previous(), Some(&opening()));
    assert_eq!(sync.current(), Some(&rolled()));

    sync.purchase_card(CardIndex::new(3).unwrap()).await.unwrap();
    assert_eq!(sync.previous(), Some(&rolled()));
    assert_eq!(sync.current(), Some(&after_purchase()));

    assert_eq!(
        *requests.lock().unwrap(),
        vec!["start", "rollDouble", "purchaseCard/3"]
    );
}

#[tokio::test]
async fn server_rejection_keeps_the_last_good_state() {
    let (addr, _) = serve();
    let mut sync = synchronizer(addr);
    sync.start().await.unwrap();
    sync.roll_double().await.unwrap();

    let err = sync
        .purchase_card(CardIndex::new(13).unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    match err {
        ActionError::Server {
            status, message, ..
        } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Card not in stock.");
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert_eq!(sync.previous(), Some(&opening()));
    assert_eq!(sync.current(), Some(&rolled()));
}

#[tokio::test]
async fn unknown_endpoint_and_bad_body_are_server_errors() {
    let (addr, _) = serve();
    let mut sync = synchronizer(addr);
    sync.start().await.unwrap();

    let err = sync.end_turn().await.unwrap_err();
    assert!(matches!(err, ActionError::Server { status: 404, .. }));

    let err = sync.confirm().await.unwrap_err();
    assert!(matches!(err, ActionError::Decode { .. }));
    assert_eq!(sync.current(), Some(&opening()));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    // grab a free port and release it so nothing is listening there
    let addr = TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let mut sync = synchronizer(addr);

    let err = sync.start().await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Network);
    assert!(sync.current().is_none());
}
