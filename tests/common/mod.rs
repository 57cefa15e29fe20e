use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;

use beacon::build_app;
use beacon::config::AppConfig;

pub struct TestApp {
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            production_host: "bajtos.net".to_string(),
        };

        Self {
            router: build_app(config),
        }
    }

    /// Send a request through the app and return the response.
    pub async fn request(&self, req: Request<Body>) -> Response {
        tower::ServiceExt::oneshot(self.router.clone(), req)
            .await
            .unwrap()
    }

    /// Send a bodyless request to `uri` with the given method and headers.
    pub async fn send(&self, method: &str, uri: &str, headers: &[(&str, &str)]) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let req = builder.body(Body::empty()).unwrap();
        self.request(req).await
    }
}

/// Read the full response body as a String.
pub async fn body_string(resp: Response) -> String {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
