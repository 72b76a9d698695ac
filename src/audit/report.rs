use super::check::Check;
use super::check::Verdict;
use crate::Error;
use crate::Result;

/// One verdict per check. Computed once per batch, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Report {
    verdicts: Vec<Verdict>,
}

impl From<Vec<Verdict>> for Report {
    fn from(verdicts: Vec<Verdict>) -> Self {
        Self { verdicts }
    }
}

impl Report {
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }
    /// conjunction of every check
    pub fn passed(&self) -> bool {
        self.verdicts.iter().all(|v| v.ok)
    }
    pub fn ok(&self, check: Check) -> bool {
        self.verdicts
            .iter()
            .find(|v| v.check == check)
            .map_or(false, |v| v.ok)
    }
    pub fn failures(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| !v.ok)
    }
    /// the batch is only usable once this succeeds
    pub fn ensure(&self) -> Result<()> {
        if self.passed() {
            Ok(())
        } else {
            Err(Error::Audit(
                self.failures().map(|v| v.check.to_string()).collect(),
            ))
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for verdict in self.verdicts.iter() {
            writeln!(f, "{}", verdict)?;
        }
        write!(
            f,
            "{}",
            if self.passed() {
                "audit passed".to_string()
            } else {
                format!("audit failed: {} of 6 checks", self.failures().count())
            }
        )
    }
}
