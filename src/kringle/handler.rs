use axum::http::StatusCode;

impl From<super::Error> for StatusCode {
    fn from(e: super::Error) -> Self {
        match e {
            super::Error::MalformedRequest(_)
            | super::Error::TooLarge(_)
            | super::Error::TooSmall(_)
            | super::Error::InvalidEmail(_)
            | super::Error::DuplicateEmail(_) => Self::BAD_REQUEST,
        }
    }
}

pub(super) mod api {
    use axum::{
        Json,
        extract::State,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use bytes::Bytes;
    use log::{debug, info};

    use crate::kringle::{self, model::ExchangeRequest};

    // The body is decoded whatever the Content-Type, browsers post it as text/plain
    // to avoid a preflight.
    pub async fn exchange(
        kringle_service: State<kringle::Service>,
        body: Bytes,
    ) -> crate::Result<Response> {
        let request = serde_json::from_slice::<ExchangeRequest>(&body)
            .map_err(|e| kringle::Error::MalformedRequest(e.to_string()))?;

        info!("received {} emails", request.emails().len());
        debug!("emails: {:?}", request.emails());

        let participants = request.into_participants()?;
        let report = kringle_service.exchange(&participants).await?;

        if report.is_complete() {
            Ok((StatusCode::OK, "OK").into_response())
        } else {
            Ok((StatusCode::BAD_GATEWAY, Json(report)).into_response())
        }
    }
}
