pub mod tutorials;

use actix_web::{
    HttpResponse, Responder, ResponseError, body::BoxBody,
    dev::HttpServiceFactory, get, web,
};

use crate::store::StoreError;
use crate::telemetry::log_error;

pub fn api_services() -> impl HttpServiceFactory {
    // published must be registered ahead of the {id} routes
    web::scope("/api")
        .service(health_check)
        .service(tutorials::list_published_tutorials)
        .service(tutorials::list_tutorials)
        .service(tutorials::get_tutorial)
        .service(tutorials::create_tutorial)
        .service(tutorials::update_tutorial)
        .service(tutorials::delete_tutorial)
        .service(tutorials::delete_all_tutorials)
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().body("healthy")
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl ResponseError for APIError {
    fn error_response(&self) -> HttpResponse<BoxBody> {
        match self {
            Self::BadRequest(e) => {
                HttpResponse::BadRequest().body(format!("{self}: {e}"))
            }
            Self::NotFound(e) => {
                HttpResponse::NotFound().body(format!("{self}: {e}"))
            }
            Self::UnexpectedError(e) => {
                log_error(anyhow::anyhow!("{e:#}"));
                HttpResponse::InternalServerError().body(self.to_string())
            }
        }
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::TutorialNotFound => APIError::NotFound(e.into()),
            StoreError::InvalidTitle(_) => APIError::BadRequest(e.into()),
            StoreError::Poisoned => APIError::UnexpectedError(e.into()),
        }
    }
}
