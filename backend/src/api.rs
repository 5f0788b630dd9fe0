use actix_web::{HttpResponse, Responder, get, post, web};
use serde::{Deserialize, Serialize};
use vsm_search::{Document, WordCount};

use crate::state::AppState;

#[derive(Deserialize)]
struct SearchQuery {
    query: String,
    limit: Option<usize>,
}

#[derive(Serialize)]
struct DocumentRecord<'a> {
    #[serde(flatten)]
    document: &'a Document,
    word_counts: Vec<WordCount>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[get("/")]
async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Vector Space Model Retrieval API")
}

#[post("/search")]
async fn search(query: web::Json<SearchQuery>, data: web::Data<AppState>) -> impl Responder {
    let index = data.snapshot();
    let hits = match query.limit.or(data.config().limit) {
        Some(limit) => index.search_top(&query.query, limit),
        None => index.search(&query.query),
    };
    HttpResponse::Ok().json(hits)
}

#[get("/stats")]
async fn stats(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.snapshot().stats())
}

#[get("/vocabulary")]
async fn vocabulary(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.snapshot().vocabulary())
}

#[get("/documents")]
async fn documents(data: web::Data<AppState>) -> impl Responder {
    let index = data.snapshot();
    let records: Vec<DocumentRecord> = index
        .documents()
        .iter()
        .map(|document| DocumentRecord {
            document,
            word_counts: document.word_count_table(),
        })
        .collect();
    HttpResponse::Ok().json(records)
}

/// Rebuilds the index from the configured directory off the request thread.
/// On failure the current snapshot stays in place.
#[post("/reindex")]
async fn reindex(data: web::Data<AppState>) -> impl Responder {
    let config = data.config().clone();
    match web::block(move || config.load_index()).await {
        Ok(Ok(index)) => HttpResponse::Ok().json(data.replace(index)),
        Ok(Err(e)) => {
            tracing::error!(error = %e, "re-index failed, keeping previous index");
            HttpResponse::InternalServerError().json(ErrorBody { error: e.to_string() })
        }
        Err(e) => {
            tracing::error!(error = %e, "re-index task failed");
            HttpResponse::InternalServerError().json(ErrorBody { error: e.to_string() })
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hello)
        .service(search)
        .service(stats)
        .service(vocabulary)
        .service(documents)
        .service(reindex);
}
