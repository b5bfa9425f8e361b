use actix_web::{HttpResponse, delete, get, post, put, web};

use payloads::{TutorialId, requests, responses::SuccessMessage};

use crate::store::TutorialStore;
use crate::time::TimeSource;

use super::APIError;

#[tracing::instrument(skip(store), ret)]
#[get("/tutorials")]
pub async fn list_tutorials(
    filter: web::Query<requests::TutorialFilter>,
    store: web::Data<TutorialStore>,
) -> Result<HttpResponse, APIError> {
    let tutorials = store.list(&filter)?;
    Ok(HttpResponse::Ok().json(tutorials))
}

#[tracing::instrument(skip(store), ret)]
#[get("/tutorials/published")]
pub async fn list_published_tutorials(
    store: web::Data<TutorialStore>,
) -> Result<HttpResponse, APIError> {
    let tutorials = store.list_published()?;
    Ok(HttpResponse::Ok().json(tutorials))
}

#[tracing::instrument(skip(store), ret)]
#[get("/tutorials/{tutorial_id}")]
pub async fn get_tutorial(
    tutorial_id: web::Path<TutorialId>,
    store: web::Data<TutorialStore>,
) -> Result<HttpResponse, APIError> {
    let tutorial = store.get(&tutorial_id)?;
    Ok(HttpResponse::Ok().json(tutorial))
}

#[tracing::instrument(skip(store, time_source), ret)]
#[post("/tutorials")]
pub async fn create_tutorial(
    details: web::Json<requests::CreateTutorial>,
    store: web::Data<TutorialStore>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let tutorial = store.create(&details, time_source.now())?;
    Ok(HttpResponse::Ok().json(tutorial))
}

#[tracing::instrument(skip(store, time_source), ret)]
#[put("/tutorials/{tutorial_id}")]
pub async fn update_tutorial(
    tutorial_id: web::Path<TutorialId>,
    details: web::Json<requests::UpdateTutorial>,
    store: web::Data<TutorialStore>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let tutorial =
        store.update(&tutorial_id, &details, time_source.now())?;
    Ok(HttpResponse::Ok().json(tutorial))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/tutorials/{tutorial_id}")]
pub async fn delete_tutorial(
    tutorial_id: web::Path<TutorialId>,
    store: web::Data<TutorialStore>,
) -> Result<HttpResponse, APIError> {
    store.delete(&tutorial_id)?;
    Ok(HttpResponse::Ok().json(SuccessMessage {
        message: "Tutorial was deleted successfully!".into(),
    }))
}

#[tracing::instrument(skip(store), ret)]
#[delete("/tutorials")]
pub async fn delete_all_tutorials(
    store: web::Data<TutorialStore>,
) -> Result<HttpResponse, APIError> {
    let count = store.delete_all()?;
    tracing::info!(count, "deleted all tutorials");
    Ok(HttpResponse::Ok().json(SuccessMessage {
        message: format!("{count} Tutorials were deleted successfully!"),
    }))
}
