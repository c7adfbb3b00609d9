use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use serde_json::{json, Value};

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

/// Envelope wrapped around every response: `{status, data}`.
#[derive(Debug, Serialize)]
pub struct ZolaResponse {
    pub status: ResponseStatus,
    pub data: Value,
}

impl ZolaResponse {
    pub fn success(data: impl Serialize) -> HttpResponse {
        let data = match serde_json::to_value(data) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to serialize response data: {}", e);
                return Self::error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error");
            }
        };
        HttpResponse::Ok().json(ZolaResponse {
            status: ResponseStatus::Success,
            data,
        })
    }

    pub fn error(status: StatusCode, message: impl ToString) -> HttpResponse {
        HttpResponse::build(status).json(ZolaResponse {
            status: ResponseStatus::Error,
            data: json!({ "error": message.to_string() }),
        })
    }

    pub fn bad_request(message: impl ToString) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, message)
    }

    pub fn bad_gateway(message: impl ToString) -> HttpResponse {
        Self::error(StatusCode::BAD_GATEWAY, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde::ser::Error as _;

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("not representable"))
        }
    }

    #[actix_rt::test]
    async fn success_wraps_data() {
        let response = ZolaResponse::success(json!({ "count": 2 }));
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "status": "success", "data": { "count": 2 } }));
    }

    #[actix_rt::test]
    async fn unserializable_data_is_a_server_error() {
        let response = ZolaResponse::success(Unserializable);
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "error");
        assert_eq!(body["data"]["error"], "Internal server error");
    }
}
