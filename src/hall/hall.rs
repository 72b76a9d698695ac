use super::response::Called;
use super::response::Cards;
use super::response::Snapshot;
use super::response::Top;
use super::response::Undone;
use crate::BingoId;
use crate::Error;
use crate::ID;
use crate::Result;
use crate::cards::CardId;
use crate::session::Board;
use crate::session::Detail;
use crate::session::Session;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::RwLock;

pub type SessionId = ID<Session>;

/// Keeps every open session by id.
///
/// Each session sits behind its own lock, so calls against one session are
/// serialized while distinct sessions proceed in parallel. The map lock is
/// only held long enough to find the handle.
pub struct Hall {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<Session>>>>,
    top: usize,
}

impl Default for Hall {
    fn default() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            top: crate::RANKING_TOP,
        }
    }
}

impl Hall {
    /// Length of the rankings in every reply.
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Opens a session over `board`.
    pub fn start(&self, board: Arc<Board>) -> Snapshot {
        let id = SessionId::default();
        let session = Session::from(board);
        let snapshot = Snapshot::new(id, &session, self.top);
        self.sessions
            .write()
            .expect("sessions lock")
            .insert(id, Arc::new(Mutex::new(session)));
        log::info!("opened session {}", id);
        snapshot
    }

    /// Removes a session from the hall.
    pub fn close(&self, id: SessionId) -> Result<()> {
        self.sessions
            .write()
            .expect("sessions lock")
            .remove(&id)
            .map(|_| log::info!("closed session {}", id))
            .ok_or_else(|| Error::UnknownSession(id.to_string()))
    }

    /// Resolves an id as received from outside.
    pub fn find(&self, id: &str) -> Result<SessionId> {
        SessionId::try_from(id)
            .ok()
            .filter(|id| self.sessions.read().expect("sessions lock").contains_key(id))
            .ok_or_else(|| Error::UnknownSession(id.to_string()))
    }

    pub fn call(&self, id: SessionId, ball: crate::Ball) -> Result<Called> {
        let top = self.top;
        self.with(id, |session| {
            let call = session.call(ball)?;
            Ok(Called {
                number: call.ball,
                called_numbers: session.calls().to_vec(),
                total_calls: session.calls().len(),
                ranking: session.ranking(top),
                newly_won: call.newly_won,
                winners_detail: session.winners_detail(),
            })
        })
    }

    pub fn undo(&self, id: SessionId) -> Result<Undone> {
        let top = self.top;
        self.with(id, |session| {
            let undo = session.undo()?;
            Ok(Undone {
                number_removed: undo.ball,
                reverted: undo.reverted,
                total_calls: session.calls().len(),
                ranking: session.ranking(top),
            })
        })
    }

    pub fn reset(&self, id: SessionId) -> Result<Snapshot> {
        let top = self.top;
        self.with(id, |session| {
            session.reset();
            log::info!("reset session {}", id);
            Ok(Snapshot::new(id, session, top))
        })
    }

    pub fn state(&self, id: SessionId) -> Result<Snapshot> {
        let top = self.top;
        self.with(id, |session| Ok(Snapshot::new(id, session, top)))
    }

    /// Ranking of any length, independent of the hall default.
    pub fn ranking(&self, id: SessionId, n: usize) -> Result<Top> {
        self.with(id, |session| {
            Ok(Top {
                ranking: session.ranking(n),
            })
        })
    }

    /// Every card of one physical bingo.
    pub fn bingo(&self, id: SessionId, bingo: BingoId) -> Result<Cards> {
        self.with(id, |session| session.bingo(bingo).map(|cards| Cards { cards }))
    }

    pub fn card(&self, id: SessionId, card: CardId) -> Result<Detail> {
        self.with(id, |session| {
            session
                .card(card)
                .ok_or(Error::UnknownBingo(card.bingo))
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.read().expect("sessions lock").len()
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn with<T, F>(&self, id: SessionId, f: F) -> Result<T>
    where
        F: FnOnce(&mut Session) -> Result<T>,
    {
        let handle = self
            .sessions
            .read()
            .expect("sessions lock")
            .get(&id)
            .cloned()
            .ok_or_else(|| Error::UnknownSession(id.to_string()))?;
        let mut session = handle.lock().expect("session lock");
        f(&mut session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::Config;
    use crate::generation::Generator;

    fn board() -> Arc<Board> {
        let config = Config {
            bingos: 10,
            ..Config::default()
        };
        let batch = Generator::from(config).generate().unwrap();
        Arc::new(Board::new(batch, &config).unwrap())
    }

    #[test]
    fn start_is_empty() {
        let hall = Hall::default();
        let snapshot = hall.start(board());
        assert_eq!(snapshot.total_cards, 30);
        assert_eq!(snapshot.total_calls, 0);
        assert!(snapshot.called_numbers.is_empty());
        assert_eq!(snapshot.available.len(), 60);
        assert_eq!(snapshot.ranking.len(), 20);
        assert_eq!(hall.len(), 1);
    }

    #[test]
    fn call_undo_reset() {
        let hall = Hall::default().with_top(5);
        let id = hall.start(board()).session;
        let called = hall.call(id, 17).unwrap();
        assert_eq!(called.called_numbers, vec![17]);
        assert_eq!(called.ranking.len(), 5);
        assert_eq!(hall.ranking(id, 30).unwrap().ranking.len(), 30);
        assert_eq!(hall.call(id, 17), Err(Error::AlreadyCalled(17)));
        assert_eq!(hall.state(id).unwrap().total_calls, 1);
        assert_eq!(hall.undo(id).unwrap().number_removed, 17);
        assert_eq!(hall.undo(id), Err(Error::NothingToUndo));
        hall.call(id, 3).unwrap();
        let fresh = hall.reset(id).unwrap();
        assert_eq!(fresh.total_calls, 0);
        assert_eq!(fresh.last_call, None);
    }

    #[test]
    fn unknown_sessions() {
        let hall = Hall::default();
        let id = hall.start(board()).session;
        let stray = SessionId::default();
        assert!(matches!(hall.call(stray, 1), Err(Error::UnknownSession(_))));
        assert!(matches!(hall.find("nonsense"), Err(Error::UnknownSession(_))));
        assert_eq!(hall.find(&id.to_string()), Ok(id));
        hall.close(id).unwrap();
        assert!(matches!(hall.state(id), Err(Error::UnknownSession(_))));
        assert!(matches!(hall.close(id), Err(Error::UnknownSession(_))));
        assert!(hall.is_empty());
    }

    #[test]
    fn sessions_are_independent() {
        let hall = Hall::default();
        let board = board();
        let a = hall.start(board.clone()).session;
        let b = hall.start(board).session;
        hall.call(a, 5).unwrap();
        assert_eq!(hall.state(b).unwrap().total_calls, 0);
        assert!(hall.call(b, 5).is_ok());
    }

    #[test]
    fn card_lookup() {
        let hall = Hall::default();
        let id = hall.start(board()).session;
        assert_eq!(hall.bingo(id, 6).unwrap().cards.len(), 3);
        assert_eq!(hall.bingo(id, 11), Err(Error::UnknownBingo(11)));
        let card = CardId::new(6, crate::cards::Slot::D);
        assert_eq!(hall.card(id, card).unwrap().card, card);
    }

    #[test]
    fn concurrent_calls_are_serialized() {
        let hall = Arc::new(Hall::default());
        let id = hall.start(board()).session;
        let handles = (0..4)
            .map(|_| {
                let hall = hall.clone();
                std::thread::spawn(move || {
                    (1..=60)
                        .filter(|&ball| hall.call(id, ball).is_ok())
                        .count()
                })
            })
            .collect::<Vec<_>>();
        let accepted = handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .sum::<usize>();
        assert_eq!(accepted, 60);
        let state = hall.state(id).unwrap();
        assert_eq!(state.total_calls, 60);
        assert_eq!(state.winners.len(), 30);
    }
}
