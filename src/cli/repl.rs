use super::query::Query;
use crate::BingoId;
use crate::cards::CardId;
use crate::hall::Cards;
use crate::hall::Hall;
use crate::hall::Reply;
use crate::hall::SessionId;
use crate::session::Board;
use crate::session::Standing;
use clap::Parser;
use serde::Serialize;
use std::io::Write;
use std::sync::Arc;

/// Interactive prompt over one live session.
pub struct Repl {
    hall: Hall,
    session: SessionId,
    json: bool,
}

impl Repl {
    pub fn new(board: Arc<Board>, json: bool) -> Self {
        let hall = Hall::default();
        let session = hall.start(board).session;
        Self {
            hall,
            session,
            json,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        log::info!("launching live session {}", self.session);
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let ref mut input = String::new();
            if std::io::stdin().read_line(input)? == 0 {
                break;
            }
            match input.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                _ => match self.handle(input) {
                    Err(e) => eprintln!("handle error: {}", e),
                    Ok(_) => continue,
                },
            }
        }
        self.hall.close(self.session)?;
        Ok(())
    }

    fn handle(&self, input: &str) -> anyhow::Result<()> {
        let id = self.session;
        match Query::try_parse_from(std::iter::once("> ").chain(input.split_whitespace()))? {
            Query::Call { number } => self.show(self.hall.call(id, number), |called| {
                let mut lines = vec![format!(
                    "called {:02} ({} calls)",
                    called.number, called.total_calls
                )];
                lines.extend(called.newly_won.iter().map(|c| format!("BINGO {}", c)));
                lines.push(standings(&called.ranking));
                lines.join("\n")
            }),
            Query::Undo => self.show(self.hall.undo(id), |undone| {
                let mut lines = vec![format!(
                    "removed {:02} ({} calls)",
                    undone.number_removed, undone.total_calls
                )];
                lines.extend(undone.reverted.iter().map(|c| format!("reverted {}", c)));
                lines.join("\n")
            }),
            Query::Reset => self.show(self.hall.reset(id), |_| "reset".to_string()),
            Query::State => self.show(self.hall.state(id), |state| {
                format!(
                    "{} | {} calls | last {} | winners {}\ncalled {}\n{}",
                    state.phase,
                    state.total_calls,
                    state
                        .last_call
                        .map_or("-".to_string(), |b| format!("{:02}", b)),
                    state
                        .winners
                        .iter()
                        .map(|c| c.to_string())
                        .collect::<Vec<String>>()
                        .join(", "),
                    state
                        .called_numbers
                        .iter()
                        .map(|b| format!("{:02}", b))
                        .collect::<Vec<String>>()
                        .join(" "),
                    standings(&state.ranking),
                )
            }),
            Query::Card { card } => {
                let cards = match card.contains('-') {
                    true => CardId::try_from(card.as_str())
                        .map_err(|e| anyhow::anyhow!(e))
                        .map(|card| self.hall.card(id, card).map(|d| Cards { cards: vec![d] }))?,
                    false => card
                        .parse::<BingoId>()
                        .map(|bingo| self.hall.bingo(id, bingo))?,
                };
                self.show(cards, |cards| {
                    cards
                        .cards
                        .iter()
                        .map(|d| d.to_string())
                        .collect::<Vec<String>>()
                        .join("\n")
                })
            }
            Query::Top { n } => self.show(self.hall.ranking(id, n), |top| standings(&top.ranking)),
        }
    }

    fn show<T, F>(&self, result: crate::Result<T>, text: F) -> anyhow::Result<()>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        let reply = Reply::from(result);
        if self.json {
            println!("{}", serde_json::to_string(&reply)?);
            return Ok(());
        }
        match (reply.body, reply.message) {
            (Some(body), _) => println!("{}", text(&body)),
            (None, message) => eprintln!("{}", message.unwrap_or_default()),
        }
        Ok(())
    }
}

fn standings(ranking: &[Standing]) -> String {
    ranking
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{:>3}. {}", i + 1, s))
        .collect::<Vec<String>>()
        .join("\n")
}
