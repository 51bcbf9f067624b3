use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Filter, Rejection, Reply};

use storms::LatLon;

use crate::config::SharedSource;

/// Everything request handlers need, handed to them through a filter.
#[derive(Clone)]
pub struct AppState {
    source: SharedSource,
}

impl AppState {
    pub fn new(source: SharedSource) -> Self {
        AppState { source }
    }
}

pub async fn run(address: std::net::SocketAddr, state: AppState) {
    log::info!("Listening on {}", address);
    warp::serve(routes(state)).run(address).await
}

pub fn routes(
    state: AppState,
) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let health_route = warp::path!("health")
        .and(warp::get())
        .map(|| StatusCode::OK);

    let query = warp::get().and(warp::query::<HitsQuery>());
    // same fields as the search form of the web front end
    let form = warp::post()
        .and(warp::body::content_length_limit(1024 * 16))
        .and(warp::body::form::<HitsQuery>());

    let hits_route = warp::path!("hits")
        .and(query.or(form).unify())
        .and(with_state(state))
        .and_then(hits);

    health_route.or(hits_route).recover(rejection)
}

fn with_state(state: AppState) -> impl Filter<Extract = (AppState,), Error = Infallible> + Clone {
    warp::any().map(move || state.clone())
}

#[derive(Debug, Deserialize)]
pub struct HitsQuery {
    latitude: String,
    longitude: String,
}

#[derive(Debug, Serialize)]
struct HitsResponse {
    latitude: f64,
    longitude: f64,
    storms: Vec<String>,
}

pub async fn hits(query: HitsQuery, state: AppState) -> Result<impl Reply, Rejection> {
    let point = LatLon::parse(&query.latitude, &query.longitude)
        .map_err(|e| warp::reject::custom(Error(e.into())))?;

    let source = state.source.clone();
    let storms = tokio::task::spawn_blocking(move || storms::search(source.as_ref(), &point))
        .await
        .map_err(|e| warp::reject::custom(Error(e.into())))?
        .map_err(|e| warp::reject::custom(Error(e.into())))?;

    Ok(warp::reply::json(&HitsResponse {
        latitude: point.lat(),
        longitude: point.lon(),
        storms,
    }))
}

#[derive(Debug)]
struct Error(anyhow::Error);
impl warp::reject::Reject for Error {}

#[derive(Serialize)]
struct ErrorMessage {
    code: u16,
    message: String,
}

pub async fn rejection(err: warp::Rejection) -> Result<impl Reply, Infallible> {
    let (code, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "Not found.".to_string())
    } else if let Some(Error(e)) = err.find::<Error>() {
        match e.downcast_ref::<storms::Error>() {
            Some(invalid @ storms::Error::InvalidCoordinate(_)) => {
                (StatusCode::BAD_REQUEST, invalid.to_string())
            }
            _ => {
                log::error!("Error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error.".to_string(),
                )
            }
        }
    } else if err.find::<warp::reject::InvalidQuery>().is_some()
        || err.find::<warp::filters::body::BodyDeserializeError>().is_some()
    {
        (
            StatusCode::BAD_REQUEST,
            "Expected latitude and longitude.".to_string(),
        )
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            "Method not allowed.".to_string(),
        )
    } else {
        log::error!("Error: {:?}", err);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error.".to_string(),
        )
    };

    let json = warp::reply::json(&ErrorMessage {
        code: code.as_u16(),
        message,
    });

    Ok(warp::reply::with_status(json, code))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::Arc;
    use storms::TrackFiles;

    const BLOCK: &str = "AL012020,               TEST,      1,
20200815, 0000,  , HU, 25.0N,  80.0W,  70,  985,   60,   50,   40,   50,   30,   25,   20,   25,    0,    0,    0,    0,
";

    fn state_for(paths: Vec<PathBuf>) -> AppState {
        AppState::new(Arc::new(TrackFiles::new(paths)))
    }

    fn track_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BLOCK.as_bytes()).unwrap();
        file
    }

    fn json_body(body: &[u8]) -> serde_json::Value {
        serde_json::from_slice(body).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let res = warp::test::request()
            .path("/health")
            .reply(&routes(state_for(vec![])))
            .await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_hits_query() {
        let file = track_file();
        let res = warp::test::request()
            .path("/hits?latitude=25.0&longitude=-80.0")
            .reply(&routes(state_for(vec![file.path().to_path_buf()])))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let body = json_body(res.body());
        assert_eq!(body["storms"], serde_json::json!(["TEST"]));
        assert_eq!(body["latitude"], serde_json::json!(25.0));
    }

    #[tokio::test]
    async fn test_hits_far_away() {
        let file = track_file();
        let res = warp::test::request()
            .path("/hits?latitude=0&longitude=0")
            .reply(&routes(state_for(vec![file.path().to_path_buf()])))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res.body())["storms"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_hits_form() {
        let file = track_file();
        let res = warp::test::request()
            .method("POST")
            .path("/hits")
            .header("content-type", "application/x-www-form-urlencoded")
            .body("latitude=25.0N&longitude=80.0W")
            .reply(&routes(state_for(vec![file.path().to_path_buf()])))
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res.body())["storms"], serde_json::json!(["TEST"]));
    }

    #[tokio::test]
    async fn test_hits_invalid_coordinate() {
        let file = track_file();
        let res = warp::test::request()
            .path("/hits?latitude=91&longitude=0")
            .reply(&routes(state_for(vec![file.path().to_path_buf()])))
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = json_body(res.body());
        assert_eq!(body["code"], serde_json::json!(400));
        assert!(body["message"].as_str().unwrap().contains("latitude"));
    }

    #[tokio::test]
    async fn test_hits_missing_parameter() {
        let res = warp::test::request()
            .path("/hits?latitude=25.0")
            .reply(&routes(state_for(vec![])))
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_hits_missing_track_file() {
        let dir = tempfile::tempdir().unwrap();
        let res = warp::test::request()
            .path("/hits?latitude=25.0&longitude=-80.0")
            .reply(&routes(state_for(vec![dir.path().join("atl.txt")])))
            .await;

        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            json_body(res.body())["message"],
            serde_json::json!("Internal server error.")
        );
    }

    #[tokio::test]
    async fn test_unknown_route() {
        let res = warp::test::request()
            .path("/result")
            .reply(&routes(state_for(vec![])))
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
