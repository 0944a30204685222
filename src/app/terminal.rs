//! Interactive terminal front end: prints the dashboard on every state
//! change and turns stdin lines into refresh / quit commands.

use crate::core::engine::ShellEngine;
use crate::domain::ports::SyllabusGenerator;
use crate::render::render_dashboard;
use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Refresh,
    Help,
    Quit,
    Unknown { input: String },
}

impl Command {
    pub fn parse(input: &str) -> Command {
        match input.trim().to_lowercase().as_str() {
            "r" | "refresh" | "yenile" => Command::Refresh,
            "h" | "help" | "?" | "yardım" => Command::Help,
            "q" | "quit" | "exit" | "çıkış" => Command::Quit,
            _ => Command::Unknown {
                input: input.trim().to_string(),
            },
        }
    }
}

const HELP: &str = "Komutlar: [r] programı yenile · [h] yardım · [q] çıkış";

pub struct TerminalApp<G: SyllabusGenerator + 'static> {
    engine: ShellEngine<G>,
    spinner: Option<ProgressBar>,
}

impl<G: SyllabusGenerator + 'static> TerminalApp<G> {
    pub fn new(engine: ShellEngine<G>) -> Self {
        Self {
            engine,
            spinner: None,
        }
    }

    pub async fn run(mut self, auto_generate: bool) -> Result<()> {
        if auto_generate {
            self.engine.start();
        }
        self.draw();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(input) = line? else {
                        tracing::debug!("stdin closed, leaving");
                        break;
                    };
                    match Command::parse(&input) {
                        Command::Refresh => {
                            if self.engine.refresh().is_some() {
                                self.draw();
                            } else {
                                println!("⏳ Program hâlâ oluşturuluyor, lütfen bekleyin.");
                            }
                        }
                        Command::Help => println!("{}", HELP),
                        Command::Quit => break,
                        Command::Unknown { input } if input.is_empty() => {}
                        Command::Unknown { input } => {
                            println!("Bilinmeyen komut: {}. {}", input, HELP);
                        }
                    }
                }
                Some(completion) = self.engine.next_completion() => {
                    if self.engine.apply(completion) {
                        self.draw();
                    }
                }
            }
        }

        self.stop_spinner();
        Ok(())
    }

    fn draw(&mut self) {
        if self.engine.shell().is_loading() {
            self.start_spinner();
        } else {
            self.stop_spinner();
        }

        let screen = render_dashboard(self.engine.shell());
        let print = || {
            println!("{}", screen);
            println!("{}", HELP);
        };
        // spinner 在 stderr 上跑，輸出前先暫停避免畫面交錯
        match &self.spinner {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }

    fn start_spinner(&mut self) {
        if self.spinner.is_some() {
            return;
        }
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.cyan} {msg} [{elapsed}]") {
            pb.set_style(style);
        }
        pb.set_message("Oluşturuluyor...");
        pb.enable_steady_tick(Duration::from_millis(100));
        self.spinner = Some(pb);
    }

    fn stop_spinner(&mut self) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }
}
