use std::sync::Arc;

use handle_errors::return_error;
use tracing::Span;
use warp::{http::Method, trace::Info, Filter};

use crate::clock::Clock;
use crate::store::Store;

pub mod choice;
pub mod question;

fn request_span(route: &'static str) -> impl Fn(Info<'_>) -> Span + Clone {
    move |info: Info<'_>| {
        tracing::info_span!(
            "request",
            route,
            method = %info.method(),
            path = %info.path(),
            id = %uuid::Uuid::new_v4(),
        )
    }
}

/// Every route of the service, with CORS, tracing and error recovery applied.
pub fn build(
    store: Store,
    clock: Arc<dyn Clock>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let store_filter = warp::any().map(move || store.clone());
    // "now" is read once per request and threaded through explicitly
    let now_filter = warp::any().map(move || clock.now());

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(&[Method::GET, Method::POST]);

    let index = warp::get()
        .and(warp::path!("polls"))
        .and(now_filter.clone())
        .and(store_filter.clone())
        .and_then(question::index)
        .with(warp::trace(request_span("index")));

    let detail = warp::get()
        .and(warp::path!("polls" / i32))
        .and(now_filter.clone())
        .and(store_filter.clone())
        .and_then(question::detail)
        .with(warp::trace(request_span("detail")));

    let results = warp::get()
        .and(warp::path!("polls" / i32 / "results"))
        .and(now_filter.clone())
        .and(store_filter.clone())
        .and_then(question::results)
        .with(warp::trace(request_span("results")));

    let get_questions = warp::get()
        .and(warp::path!("api" / "polls"))
        .and(now_filter.clone())
        .and(store_filter.clone())
        .and_then(question::get_questions)
        .with(warp::trace(request_span("get_questions")));

    let get_question = warp::get()
        .and(warp::path!("api" / "polls" / i32))
        .and(now_filter)
        .and(store_filter.clone())
        .and_then(question::get_question)
        .with(warp::trace(request_span("get_question")));

    let add_question = warp::post()
        .and(warp::path!("api" / "polls"))
        .and(store_filter.clone())
        .and(warp::body::json())
        .and_then(question::add_question)
        .with(warp::trace(request_span("add_question")));

    let add_choice = warp::post()
        .and(warp::path!("api" / "polls" / i32 / "choices"))
        .and(store_filter)
        .and(warp::body::form())
        .and_then(choice::add_choice)
        .with(warp::trace(request_span("add_choice")));

    index
        .or(detail)
        .or(results)
        .or(get_questions)
        .or(get_question)
        .or(add_question)
        .or(add_choice)
        .with(cors)
        .with(warp::trace::request())
        .recover(return_error)
}
