use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use micro_mux::middleware::{middleware_fn, TraceMiddleware};
use micro_mux::{handler_fn, ExtractError, Mux, RequestContext, RequestHandler, Responder};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Deserialize, Debug)]
pub struct User {
    name: String,
    zip: String,
}

async fn show_user(req: RequestContext) -> String {
    format!("user {}\r\n", req.param("id").unwrap_or_default())
}

async fn show_post(req: RequestContext) -> String {
    format!("post {} of user {}\r\n", req.param("postId").unwrap_or_default(), req.param("id").unwrap_or_default())
}

async fn create_user_form(req: RequestContext) -> Result<(StatusCode, String), ExtractError> {
    let user = req.form::<User>()?;
    Ok((StatusCode::CREATED, format!("created {} in {}\r\n", user.name, user.zip)))
}

async fn update_user_json(req: RequestContext) -> Result<String, ExtractError> {
    let user = req.json::<User>()?;
    Ok(format!("user {} is now {:#?}\r\n", req.param("id").unwrap_or_default(), user))
}

async fn default_handler(req: RequestContext) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, format!("nothing at {}\r\n", req.uri().path()))
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // shares one allocation between the routes of the api builder
    let shared = middleware_fn(|handler: Box<dyn RequestHandler>| Arc::new(handler));

    let api = Mux::builder()
        .get("/users/:id", handler_fn(show_user))
        .get("/users/:id/posts/:postId", handler_fn(show_post))
        .post("/users", handler_fn(create_user_form))
        .put("/users/:id", handler_fn(update_user_json))
        .middleware(shared);

    let mux = Mux::builder()
        .mount("/api", api)
        .not_found(handler_fn(default_handler))
        .body_limit(64 * 1024)
        .middleware(TraceMiddleware)
        .build();

    let requests = vec![
        Request::get("/api/users/7").body(String::new()).unwrap(),
        Request::get("/api/users/7/posts/9").body(String::new()).unwrap(),
        Request::post("/api/users")
            .header(http::header::CONTENT_TYPE, mime::APPLICATION_WWW_FORM_URLENCODED.as_ref())
            .body(String::from("name=hello&zip=world"))
            .unwrap(),
        Request::put("/api/users/7")
            .header(http::header::CONTENT_TYPE, mime::APPLICATION_JSON.as_ref())
            .body(String::from(r#"{"name":"hello","zip":"world"}"#))
            .unwrap(),
        Request::builder().method(Method::DELETE).uri("/api/users/7").body(String::new()).unwrap(),
    ];

    for request in requests {
        let response = mux.dispatch(request).await.unwrap_or_else(Responder::into_response);
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        info!(%status, body = %String::from_utf8_lossy(&body), "got response");
    }
}
