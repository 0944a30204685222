use crate::core::shell::{RequestTicket, Shell, ShellState};
use crate::domain::model::SyllabusData;
use crate::domain::ports::SyllabusGenerator;
use crate::utils::error::{Result, SyllabusError};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

/// Result of one spawned generation request.
#[derive(Debug)]
pub struct Completion {
    pub ticket: RequestTicket,
    pub result: Result<SyllabusData>,
}

/// Drives the shell: spawns generation requests and feeds their results
/// back. At most one request runs: refresh is refused while loading.
pub struct ShellEngine<G: SyllabusGenerator + 'static> {
    generator: Arc<G>,
    shell: Shell,
    tx: mpsc::UnboundedSender<Completion>,
    rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: Option<AbortHandle>,
}

impl<G: SyllabusGenerator + 'static> ShellEngine<G> {
    pub fn new(generator: G) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            generator: Arc::new(generator),
            shell: Shell::new(),
            tx,
            rx,
            in_flight: None,
        }
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Explicit initial transition Idle → Loading. No-op once started.
    pub fn start(&mut self) -> Option<RequestTicket> {
        if !matches!(self.shell.state(), ShellState::Idle) {
            return None;
        }
        tracing::info!("🚀 Generating initial syllabus");
        Some(self.dispatch())
    }

    /// User-triggered refresh. Rejected while a request is loading.
    pub fn refresh(&mut self) -> Option<RequestTicket> {
        if !self.shell.refresh_enabled() {
            tracing::debug!("Refresh ignored: generation already in progress");
            return None;
        }
        tracing::info!("🔄 Regenerating syllabus");
        Some(self.dispatch())
    }

    fn dispatch(&mut self) -> RequestTicket {
        let ticket = self.shell.begin_request();
        let generator = Arc::clone(&self.generator);
        let tx = self.tx.clone();

        // 生成放在內層 task：panic 或被中止時，外層仍會送出 Completion
        let generation = tokio::spawn(async move { generator.generate().await });
        self.in_flight = Some(generation.abort_handle());

        tokio::spawn(async move {
            let started = Instant::now();
            let result = match generation.await {
                Ok(result) => result,
                Err(join_err) => {
                    tracing::error!("💥 Generation request #{} aborted: {}", ticket.id(), join_err);
                    Err(SyllabusError::GenerationTaskFailed {
                        message: if join_err.is_panic() {
                            "generator panicked".to_string()
                        } else {
                            "generation cancelled".to_string()
                        },
                    })
                }
            };
            tracing::debug!(
                "Generation request #{} finished in {:?}",
                ticket.id(),
                started.elapsed()
            );
            // 接收端與引擎同生命週期，送出失敗代表引擎已被丟棄
            let _ = tx.send(Completion { ticket, result });
        });

        ticket
    }

    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.rx.recv().await
    }

    /// Feeds a completion into the shell; `false` if it was stale.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let applied = self.shell.complete(completion.ticket, completion.result);
        if applied {
            self.in_flight = None;
        }
        applied
    }

    /// Waits until the current request has been applied.
    pub async fn settle(&mut self) -> &Shell {
        while self.shell.is_loading() {
            match self.next_completion().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
        &self.shell
    }

    /// Initial (or next) generation, awaited to completion.
    pub async fn generate_once(&mut self) -> &Shell {
        if self.start().is_none() {
            self.refresh();
        }
        self.settle().await
    }
}

impl<G: SyllabusGenerator + 'static> Drop for ShellEngine<G> {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
