use crate::domain::model::SyllabusData;
use crate::utils::error::Result;
use std::sync::Arc;

/// Fixed user-facing message for every generation failure.
pub const GENERATION_FAILED_MESSAGE: &str =
    "Ders programı oluşturulurken bir hata meydana geldi. Lütfen tekrar deneyin.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    Idle,
    Loading {
        previous: Option<Arc<SyllabusData>>,
    },
    Loaded(Arc<SyllabusData>),
    Failed {
        message: String,
        previous: Option<Arc<SyllabusData>>,
    },
}

/// Identifies one generation request; only the latest ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn id(&self) -> u64 {
        self.0
    }
}

#[derive(Debug)]
pub struct Shell {
    state: ShellState,
    issued: u64,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new()
    }
}

impl Shell {
    pub fn new() -> Self {
        Self {
            state: ShellState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &ShellState {
        &self.state
    }

    /// Any state → Loading. Prior error is dropped, prior data is carried.
    pub fn begin_request(&mut self) -> RequestTicket {
        let previous = self.data_arc();
        self.issued += 1;
        self.state = ShellState::Loading { previous };
        tracing::debug!("Shell → Loading (request #{})", self.issued);
        RequestTicket(self.issued)
    }

    /// Applies a finished request. Returns `false` when the ticket was
    /// superseded or the shell is not loading.
    pub fn complete(&mut self, ticket: RequestTicket, result: Result<SyllabusData>) -> bool {
        if ticket.0 != self.issued || !self.is_loading() {
            tracing::debug!(
                "Ignoring stale completion #{} (latest #{})",
                ticket.0,
                self.issued
            );
            return false;
        }

        self.state = match result {
            Ok(data) => {
                tracing::info!(
                    "✅ Syllabus loaded: {} ({} weeks)",
                    data.course_title,
                    data.weeks.len()
                );
                ShellState::Loaded(Arc::new(data))
            }
            Err(e) => {
                // 原始錯誤只寫入日誌，不顯示給使用者
                tracing::error!(
                    "❌ Syllabus generation failed: {} (Category: {:?})",
                    e,
                    e.category()
                );
                ShellState::Failed {
                    message: GENERATION_FAILED_MESSAGE.to_string(),
                    previous: self.data_arc(),
                }
            }
        };
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ShellState::Loading { .. })
    }

    pub fn refresh_enabled(&self) -> bool {
        !self.is_loading()
    }

    pub fn data(&self) -> Option<&SyllabusData> {
        match &self.state {
            ShellState::Idle => None,
            ShellState::Loaded(data) => Some(data.as_ref()),
            ShellState::Loading { previous } | ShellState::Failed { previous, .. } => {
                previous.as_deref()
            }
        }
    }

    fn data_arc(&self) -> Option<Arc<SyllabusData>> {
        match &self.state {
            ShellState::Idle => None,
            ShellState::Loaded(data) => Some(Arc::clone(data)),
            ShellState::Loading { previous } | ShellState::Failed { previous, .. } => {
                previous.clone()
            }
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            ShellState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn show_spinner(&self) -> bool {
        self.is_loading() && self.data().is_none()
    }

    pub fn show_dashboard(&self) -> bool {
        !self.is_loading() && self.data().is_some()
    }
}
