use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use common::games::gomoku::{BoardError, MoveError, SymbolError};
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    InvalidBoard(BoardError),
    InvalidSymbol(SymbolError),
    NoMove(MoveError),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidBoard(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidSymbol(_) => StatusCode::BAD_REQUEST,
            ApiError::NoMove(MoveError::BoardFull) => StatusCode::CONFLICT,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            ApiError::InvalidBoard(e) => e.to_string(),
            ApiError::InvalidSymbol(e) => e.to_string(),
            ApiError::NoMove(e) => e.to_string(),
        }
    }
}

impl From<BoardError> for ApiError {
    fn from(e: BoardError) -> Self {
        ApiError::InvalidBoard(e)
    }
}

impl From<SymbolError> for ApiError {
    fn from(e: SymbolError) -> Self {
        ApiError::InvalidSymbol(e)
    }
}

impl From<MoveError> for ApiError {
    fn from(e: MoveError) -> Self {
        ApiError::NoMove(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
