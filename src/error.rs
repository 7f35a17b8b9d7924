use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use log::{error, warn};

use crate::{integration, kringle};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    _Kringle(#[from] kringle::Error),
    #[error(transparent)]
    _Integration(#[from] integration::Error),
    #[error(transparent)]
    _Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::_Kringle(e) => {
                let message = e.to_string();
                warn!("rejected exchange request: {message}");
                (StatusCode::from(e), message).into_response()
            }
            Self::_Integration(e) => {
                error!("integration error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
            Self::_Io(e) => {
                error!("io error: {e:?}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Something went wrong").into_response()
            }
        }
    }
}
