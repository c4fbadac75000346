use chrono::{DateTime, Utc};
use handle_errors::Error;
use tracing::{info, instrument};
use warp::http::StatusCode;

use crate::render;
use crate::store::{QuestionStore, Store};
use crate::types::question::{NewQuestion, QuestionId};
use crate::views;

pub(crate) fn validate_text(text: &str) -> Result<String, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::InvalidInput("text must not be blank".to_string()));
    }
    Ok(text.to_string())
}

#[instrument(skip(store))]
pub async fn index(now: DateTime<Utc>, store: Store) -> Result<impl warp::Reply, warp::Rejection> {
    let ctx = views::index(&store, now);
    info!(count = ctx.latest_question_list.len(), "listing published questions");
    Ok(warp::reply::html(render::index(&ctx)))
}

#[instrument(skip(store))]
pub async fn detail(
    id: i32,
    now: DateTime<Utc>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    match views::detail(&store, QuestionId(id), now) {
        Ok(ctx) => Ok(warp::reply::html(render::detail(&ctx))),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

#[instrument(skip(store))]
pub async fn results(
    id: i32,
    now: DateTime<Utc>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    match views::detail(&store, QuestionId(id), now) {
        Ok(ctx) => Ok(warp::reply::html(render::results(&ctx))),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

#[instrument(skip(store))]
pub async fn get_questions(
    now: DateTime<Utc>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::json(&views::index(&store, now)))
}

#[instrument(skip(store))]
pub async fn get_question(
    id: i32,
    now: DateTime<Utc>,
    store: Store,
) -> Result<impl warp::Reply, warp::Rejection> {
    match views::find_published(now, store.get_question_by_id(QuestionId(id))) {
        Ok(question) => Ok(warp::reply::json(&question)),
        Err(e) => Err(warp::reject::custom(e)),
    }
}

#[instrument(skip(store, new_question))]
pub async fn add_question(
    store: Store,
    new_question: NewQuestion,
) -> Result<impl warp::Reply, warp::Rejection> {
    let text = validate_text(&new_question.text).map_err(warp::reject::custom)?;
    let question = store.create_question(NewQuestion {
        text,
        pub_date: new_question.pub_date,
    });
    info!(id = question.id.0, pub_date = %question.pub_date, "question created");
    Ok(warp::reply::with_status(
        warp::reply::json(&question),
        StatusCode::CREATED,
    ))
}
