use axum::Json;
use axum::extract::State;
use common::games::gomoku::{
    Board, Stone, Symbol, choose_symbol as pick_symbol, generate_opening, select_move,
};
use common::{log, log_error};
use serde::{Deserialize, Serialize};

use crate::api_error::ApiError;
use crate::web_server::WebServerState;

#[derive(Debug, Clone, Deserialize)]
pub struct BoardRequest {
    pub board: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NextMoveRequest {
    pub board: Vec<Vec<String>>,
    #[serde(default)]
    pub bot_symbol: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnounceSymbolRequest {
    pub chosen_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveDto {
    pub row: usize,
    pub col: usize,
    pub symbol: String,
}

impl From<Stone> for MoveDto {
    fn from(stone: Stone) -> Self {
        Self {
            row: stone.position.row,
            col: stone.position.col,
            symbol: stone.symbol.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstMoveResponse {
    pub opponent_name: String,
    pub moves: Vec<MoveDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BotSymbolResponse {
    pub bot_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChosenSymbolResponse {
    pub chosen_symbol: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionResponse {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn first_move(State(state): State<WebServerState>) -> Json<FirstMoveResponse> {
    let stones = {
        let mut session = state.session.lock().await;
        generate_opening(&mut session.rng)
    };
    log!(
        "Opening: X at {}, X at {}, O at {}",
        stones[0].position,
        stones[1].position,
        stones[2].position
    );

    Json(FirstMoveResponse {
        opponent_name: state.bot_name.clone(),
        moves: stones.into_iter().map(MoveDto::from).collect(),
    })
}

pub async fn announce_symbol(
    State(state): State<WebServerState>,
    Json(request): Json<AnnounceSymbolRequest>,
) -> Result<Json<BotSymbolResponse>, ApiError> {
    let client_symbol = Symbol::parse(&request.chosen_symbol).inspect_err(|e| {
        log_error!("Rejected announce-symbol: {}", e);
    })?;

    let bot_symbol = state.session.lock().await.assign_from_client(client_symbol);
    log!("Client plays {}, bot plays {}", client_symbol, bot_symbol);

    Ok(Json(BotSymbolResponse {
        bot_symbol: bot_symbol.to_string(),
    }))
}

pub async fn choose_symbol(
    State(state): State<WebServerState>,
    Json(request): Json<BoardRequest>,
) -> Result<Json<ChosenSymbolResponse>, ApiError> {
    let board = parse_board(&request.board)?;

    let chosen = {
        let mut session = state.session.lock().await;
        let chosen = pick_symbol(&board, &mut session.rng);
        session.symbol = chosen;
        chosen
    };
    log!("Bot chose {}", chosen);

    Ok(Json(ChosenSymbolResponse {
        chosen_symbol: chosen.to_string(),
    }))
}

pub async fn next_move(
    State(state): State<WebServerState>,
    Json(request): Json<NextMoveRequest>,
) -> Result<Json<PositionResponse>, ApiError> {
    let board = parse_board(&request.board)?;
    let requested_symbol = request
        .bot_symbol
        .as_deref()
        .map(Symbol::parse)
        .transpose()?;

    let (bot_symbol, decision) = {
        let mut session = state.session.lock().await;
        let bot_symbol = requested_symbol.unwrap_or(session.symbol);
        (bot_symbol, select_move(&board, bot_symbol, &mut session.rng))
    };

    let pos = decision.inspect_err(|e| log_error!("No move for {}: {}", bot_symbol, e))?;
    log!("Bot {} plays {}", bot_symbol, pos);

    Ok(Json(PositionResponse {
        row: pos.row,
        col: pos.col,
    }))
}

fn parse_board(rows: &[Vec<String>]) -> Result<Board, ApiError> {
    Board::from_rows(rows).map_err(|e| {
        log_error!("Rejected board: {}", e);
        ApiError::from(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use common::games::SessionRng;
    use common::games::gomoku::BOARD_SIZE;

    use crate::bot_session::BotSession;

    fn test_state(symbol: Symbol, seed: u64) -> WebServerState {
        WebServerState::new("WifiBot".to_string(), BotSession::new(symbol, SessionRng::new(seed)))
    }

    fn empty_rows() -> Vec<Vec<String>> {
        vec![vec![String::new(); BOARD_SIZE]; BOARD_SIZE]
    }

    fn rows_with(cells: &[(usize, usize, &str)]) -> Vec<Vec<String>> {
        let mut rows = empty_rows();
        for &(row, col, value) in cells {
            rows[row][col] = value.to_string();
        }
        rows
    }

    fn next_move_request(board: Vec<Vec<String>>) -> Json<NextMoveRequest> {
        Json(NextMoveRequest {
            board,
            bot_symbol: None,
        })
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(health().await.0.status, "ok");
    }

    #[tokio::test]
    async fn test_first_move_returns_three_stones() {
        let state = test_state(Symbol::X, 5);
        let response = first_move(State(state)).await.0;

        assert_eq!(response.opponent_name, "WifiBot");
        assert_eq!(response.moves.len(), 3);
        let symbols: Vec<&str> = response.moves.iter().map(|m| m.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["X", "X", "O"]);
    }

    #[tokio::test]
    async fn test_first_move_is_seeded() {
        let a = first_move(State(test_state(Symbol::X, 77))).await.0;
        let b = first_move(State(test_state(Symbol::X, 77))).await.0;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_announce_symbol_updates_bot_symbol() {
        let state = test_state(Symbol::X, 1);
        let request = AnnounceSymbolRequest {
            chosen_symbol: "x".to_string(),
        };

        let response = announce_symbol(State(state.clone()), Json(request)).await.unwrap().0;
        assert_eq!(response.bot_symbol, "O");
        assert_eq!(state.session.lock().await.symbol, Symbol::O);
    }

    #[tokio::test]
    async fn test_announce_symbol_rejects_unknown() {
        let state = test_state(Symbol::X, 1);
        let request = AnnounceSymbolRequest {
            chosen_symbol: "triangle".to_string(),
        };

        let err = announce_symbol(State(state.clone()), Json(request)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(state.session.lock().await.symbol, Symbol::X);
    }

    #[tokio::test]
    async fn test_choose_symbol_prefers_fewer_stones() {
        let state = test_state(Symbol::X, 1);
        let board = rows_with(&[(0, 0, "O"), (0, 1, "O"), (3, 3, "X")]);

        let response = choose_symbol(State(state.clone()), Json(BoardRequest { board }))
            .await
            .unwrap()
            .0;
        assert_eq!(response.chosen_symbol, "X");
        assert_eq!(state.session.lock().await.symbol, Symbol::X);
    }

    #[tokio::test]
    async fn test_next_move_uses_announced_symbol() {
        let state = test_state(Symbol::X, 1);
        announce_symbol(
            State(state.clone()),
            Json(AnnounceSymbolRequest {
                chosen_symbol: "X".to_string(),
            }),
        )
        .await
        .unwrap();

        // O completes its column at (6, 2); X would complete its row at (0, 4).
        let board = rows_with(&[
            (0, 0, "X"),
            (0, 1, "X"),
            (0, 2, "X"),
            (0, 3, "X"),
            (2, 2, "O"),
            (3, 2, "O"),
            (4, 2, "O"),
            (5, 2, "O"),
            (1, 2, "X"),
        ]);

        let response = next_move(State(state), next_move_request(board)).await.unwrap().0;
        assert_eq!(response, PositionResponse { row: 6, col: 2 });
    }

    #[tokio::test]
    async fn test_next_move_symbol_override() {
        let state = test_state(Symbol::O, 1);
        let board = rows_with(&[
            (0, 0, "X"),
            (0, 1, "X"),
            (0, 2, "X"),
            (0, 3, "X"),
            (2, 2, "O"),
            (3, 2, "O"),
            (4, 2, "O"),
            (5, 2, "O"),
            (1, 2, "X"),
        ]);
        let request = Json(NextMoveRequest {
            board,
            bot_symbol: Some("X".to_string()),
        });

        let response = next_move(State(state.clone()), request).await.unwrap().0;
        assert_eq!(response, PositionResponse { row: 0, col: 4 });
        assert_eq!(state.session.lock().await.symbol, Symbol::O);
    }

    #[tokio::test]
    async fn test_next_move_full_board_conflict() {
        let state = test_state(Symbol::X, 1);
        let board: Vec<Vec<String>> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| if (row / 2 + col) % 2 == 0 { "X" } else { "O" }.to_string())
                    .collect()
            })
            .collect();

        let err = next_move(State(state), next_move_request(board)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_next_move_rejects_malformed_board() {
        let state = test_state(Symbol::X, 1);
        let mut board = empty_rows();
        board.truncate(13);

        let err = next_move(State(state.clone()), next_move_request(board)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let board = rows_with(&[(4, 4, "?")]);
        let err = next_move(State(state), next_move_request(board)).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_next_move_on_empty_board_is_in_range() {
        let state = test_state(Symbol::X, 3);
        let response = next_move(State(state), next_move_request(empty_rows())).await.unwrap().0;
        assert!(response.row < BOARD_SIZE);
        assert!(response.col < BOARD_SIZE);
    }
}
