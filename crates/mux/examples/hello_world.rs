use http::Request;
use http_body_util::BodyExt;
use micro_mux::middleware::TraceMiddleware;
use micro_mux::{handler_fn, Mux, RequestContext};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

async fn hello_world(_req: RequestContext) -> &'static str {
    "hello world"
}

async fn hello_name(req: RequestContext) -> String {
    format!("hello {}", req.param("name").unwrap_or("stranger"))
}

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::DEBUG).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let mux = Mux::builder()
        .get("/", handler_fn(hello_world))
        .get("/hello/:name", handler_fn(hello_name))
        .middleware(TraceMiddleware)
        .build();

    for path in ["/", "/hello/ferris", "/hello/ferris/again"] {
        let response = mux.dispatch(Request::get(path).body(String::new()).unwrap()).await.unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        info!(path, %status, body = ?body, "got response");
    }
}
