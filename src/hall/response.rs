use super::SessionId;
use crate::Ball;
use crate::cards::CardId;
use crate::session::Detail;
use crate::session::Phase;
use crate::session::Session;
use crate::session::Standing;
use serde::Serialize;

/// Full state of a session. Returned by start, reset and state queries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub session: SessionId,
    pub phase: Phase,
    pub total_cards: usize,
    pub total_calls: usize,
    pub called_numbers: Vec<Ball>,
    pub available: Vec<Ball>,
    pub last_call: Option<Ball>,
    pub ranking: Vec<Standing>,
    pub winners: Vec<CardId>,
    pub has_winners: bool,
}

impl Snapshot {
    pub fn new(session: SessionId, state: &Session, top: usize) -> Self {
        Self {
            session,
            phase: state.phase(),
            total_cards: state.board().len(),
            total_calls: state.calls().len(),
            called_numbers: state.calls().to_vec(),
            available: state.available(),
            last_call: state.last_call(),
            ranking: state.ranking(top),
            winners: state.winners().map(|c| c.id()).collect(),
            has_winners: state.has_winners(),
        }
    }
}

/// Reply to an accepted call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Called {
    pub number: Ball,
    pub called_numbers: Vec<Ball>,
    pub total_calls: usize,
    pub ranking: Vec<Standing>,
    pub newly_won: Vec<CardId>,
    pub winners_detail: Vec<Detail>,
}

/// Reply to an accepted undo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Undone {
    pub number_removed: Ball,
    pub reverted: Vec<CardId>,
    pub total_calls: usize,
    pub ranking: Vec<Standing>,
}

/// Every card of one physical bingo.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cards {
    pub cards: Vec<Detail>,
}

/// A ranking of requested length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Top {
    pub ranking: Vec<Standing>,
}

/// Uniform success/failure envelope. Failures carry only the message,
/// never a partial body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub body: Option<T>,
}

impl<T> From<crate::Result<T>> for Reply<T> {
    fn from(result: crate::Result<T>) -> Self {
        match result {
            Ok(body) => Self {
                success: true,
                message: None,
                body: Some(body),
            },
            Err(e) => Self {
                success: false,
                message: Some(e.to_string()),
                body: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Body {
        total_calls: usize,
    }

    #[test]
    fn success_flattens_body() {
        let reply = Reply::from(crate::Result::Ok(Body { total_calls: 3 }));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "total_calls": 3 }));
    }

    #[test]
    fn failure_carries_message_only() {
        let reply = Reply::<Body>::from(Err(Error::AlreadyCalled(7)));
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "success": false, "message": "ball 7 was already called" })
        );
    }
}
