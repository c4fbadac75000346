use tracing::{info, instrument};
use warp::http::StatusCode;

use crate::routes::question::validate_text;
use crate::store::{QuestionStore, Store};
use crate::types::{choice::NewChoice, question::QuestionId};

#[instrument(skip(store, new_choice))]
pub async fn add_choice(
    question_id: i32,
    store: Store,
    new_choice: NewChoice,
) -> Result<impl warp::Reply, warp::Rejection> {
    let text = validate_text(&new_choice.text).map_err(warp::reject::custom)?;
    match store.add_choice(QuestionId(question_id), NewChoice { text }) {
        Ok(choice) => {
            info!(id = choice.id.0, question_id, "choice added");
            Ok(warp::reply::with_status(
                warp::reply::json(&choice),
                StatusCode::CREATED,
            ))
        }
        Err(e) => Err(warp::reject::custom(e)),
    }
}
