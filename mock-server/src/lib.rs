//! Test double for the remote JSON API the fetch client talks to.
//!
//! Serves a seeded read-only `/todos` and `/users` list, an item-creation
//! endpoint that assigns sequential string ids, and an `/empty` route that
//! answers 200 with no body so clients can exercise their no-data path.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Todo {
    pub title: String,
    pub completed: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
}

#[derive(Deserialize)]
pub struct CreateItem {
    pub name: String,
    pub phone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub phone: String,
}

#[derive(Deserialize)]
struct TodoFilter {
    completed: Option<bool>,
}

struct AppState {
    todos: Vec<Todo>,
    users: Vec<User>,
    next_item_id: AtomicU64,
}

fn seed() -> AppState {
    AppState {
        todos: vec![
            Todo {
                title: "Buy milk".to_string(),
                completed: true,
            },
            Todo {
                title: "Walk the dog".to_string(),
                completed: false,
            },
            Todo {
                title: "Write tests".to_string(),
                completed: true,
            },
        ],
        users: vec![
            User {
                name: "Leanne Graham".to_string(),
                email: "leanne@example.com".to_string(),
            },
            User {
                name: "Ervin Howell".to_string(),
                email: "ervin@example.com".to_string(),
            },
        ],
        next_item_id: AtomicU64::new(1),
    }
}

pub fn app() -> Router {
    Router::new()
        .route("/todos", get(list_todos))
        .route("/users", get(list_users))
        .route("/items", post(create_item))
        .route("/empty", get(empty_body))
        .with_state(Arc::new(seed()))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_todos(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<TodoFilter>,
) -> Json<Vec<Todo>> {
    let todos = state
        .todos
        .iter()
        .filter(|t| filter.completed.is_none_or(|c| t.completed == c))
        .cloned()
        .collect();
    Json(todos)
}

async fn list_users(State(state): State<Arc<AppState>>) -> Json<Vec<User>> {
    Json(state.users.clone())
}

async fn create_item(
    State(state): State<Arc<AppState>>,
    Json(input): Json<CreateItem>,
) -> (StatusCode, Json<Item>) {
    let id = state.next_item_id.fetch_add(1, Ordering::SeqCst);
    let item = Item {
        id: id.to_string(),
        name: input.name,
        phone: input.phone,
    };
    info!(id = %item.id, "item created");
    (StatusCode::CREATED, Json(item))
}

async fn empty_body() -> StatusCode {
    StatusCode::OK
}
