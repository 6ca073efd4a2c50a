// App state machine and event loop.
// ref: ratatui app patterns — https://ratatui.rs/concepts/application-patterns/

use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use anyhow::Result;

use crate::{
    action::Action,
    anchor::AnchorRegistry,
    config::global::GlobalConfig,
    event::poll_event,
    messages::Catalog,
    model::asset::AssetLibrary,
    model::prompt::EntityType,
    prompt::{PromptController, PromptSession},
    tui::Tui,
    ui::{self, prompt::{PromptHit, PromptHitAreas}},
};

const TICK_MS: u64 = 100;

// ── Modes ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Normal,
    Prompt,
}

/// Outcome of a prompt session, sent from the controller callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed { asset_id: u64, kind: EntityType },
    Cancelled { asset_id: u64, kind: EntityType },
}

// ── App ──────────────────────────────────────────────────────────────────────

pub struct App {
    pub library: AssetLibrary,
    pub selected: usize,
    pub list_scroll: usize,
    pub config: GlobalConfig,
    pub catalog: Catalog,
    pub anchors: AnchorRegistry,
    pub prompt: PromptController<'static, u64>,
    /// Button areas of the popup as last drawn.
    pub prompt_hits: Option<PromptHitAreas>,
    pub status_message: Option<String>,
    decisions: Receiver<Decision>,
    /// Where config changes are persisted; `None` keeps them in memory.
    config_path: Option<PathBuf>,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = GlobalConfig::load()?;
        let mut app = Self::with_config(config);
        app.config_path = GlobalConfig::config_path();
        Ok(app)
    }

    pub fn with_config(config: GlobalConfig) -> Self {
        let (tx, decisions) = mpsc::channel();
        let cancel_tx = tx.clone();
        let prompt = PromptController::new(
            move |s: PromptSession<u64>| {
                let _ = tx.send(Decision::Confirmed { asset_id: s.payload, kind: s.entity_type });
            },
            move |s: PromptSession<u64>| {
                let decision = Decision::Cancelled { asset_id: s.payload, kind: s.entity_type };
                let _ = cancel_tx.send(decision);
            },
        );

        Self {
            library: config.library(),
            selected: 0,
            list_scroll: 0,
            catalog: config.catalog(),
            config,
            anchors: AnchorRegistry::default(),
            prompt,
            prompt_hits: None,
            status_message: None,
            decisions,
            config_path: None,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.prompt.is_open() { Mode::Prompt } else { Mode::Normal }
    }

    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        loop {
            terminal.draw(|frame| ui::render(frame, self))?;

            let in_prompt = self.mode() == Mode::Prompt;
            if let Some(action) = poll_event(Duration::from_millis(TICK_MS), in_prompt)? {
                if action == Action::Quit && !in_prompt {
                    break;
                }
                if let Err(e) = self.dispatch(action) {
                    self.status_message = Some(format!("Error: {}", e));
                }
            }
        }
        Ok(())
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    fn clamp_selected(&mut self) {
        let len = self.library.len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    fn nav_down(&mut self) {
        if self.selected + 1 < self.library.len() {
            self.selected += 1;
        }
    }

    // ── Dispatch ──────────────────────────────────────────────────────────────

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match self.mode() {
            Mode::Normal => self.dispatch_normal(action)?,
            Mode::Prompt => self.dispatch_prompt(action),
        }
        self.apply_decisions();
        Ok(())
    }

    fn dispatch_normal(&mut self, action: Action) -> Result<()> {
        match action {
            Action::NavigateUp => self.nav_up(),
            Action::NavigateDown => self.nav_down(),
            Action::Delete => self.open_prompt(self.selected),
            Action::ToggleDirection => {
                self.config.direction = self.config.direction.toggled();
                self.status_message = Some(format!("Direction: {}", self.config.direction));
                self.persist_config()?;
            }
            Action::CycleSide => {
                self.config.side = self.config.side.cycled();
                self.status_message = Some(format!("Side: {}", self.config.side));
                self.persist_config()?;
            }
            Action::Click { column, row } => {
                if let Some(id) = self.anchors.hit(column, row) {
                    if let Some(idx) = self.library.assets.iter().position(|a| a.id == id) {
                        self.selected = idx;
                        self.open_prompt(idx);
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn dispatch_prompt(&mut self, action: Action) {
        match action {
            Action::ConfirmYes => {
                self.prompt.confirm();
            }
            Action::ConfirmNo => {
                self.prompt.cancel();
            }
            Action::Dismiss => {
                self.prompt.dismiss();
            }
            Action::Click { column, row } => {
                let hit = self.prompt_hits.map(|h| h.hit(column, row));
                match hit {
                    Some(PromptHit::Confirm) => {
                        self.prompt.confirm();
                    }
                    Some(PromptHit::Cancel) => {
                        self.prompt.cancel();
                    }
                    Some(PromptHit::Outside) => {
                        self.prompt.dismiss();
                    }
                    Some(PromptHit::Inside) | None => {}
                }
            }
            _ => {}
        }
        if !self.prompt.is_open() {
            self.prompt_hits = None;
        }
    }

    fn open_prompt(&mut self, idx: usize) {
        let Some(asset) = self.library.get(idx) else { return };
        let handle = self.anchors.handle(asset.id, self.config.metrics);
        let (side, direction) = (self.config.side, self.config.direction);
        self.prompt.open(asset.kind, &handle, side, direction, asset.id);
        self.status_message = None;
    }

    /// Drain decisions fired by the prompt callbacks.
    fn apply_decisions(&mut self) {
        while let Ok(decision) = self.decisions.try_recv() {
            match decision {
                Decision::Confirmed { asset_id, kind } => {
                    if let Some(asset) = self.library.remove(asset_id) {
                        log::info!("deleted {} {:?}", kind, asset.name);
                        self.status_message = Some(format!("Deleted {} '{}'", kind, asset.name));
                    }
                    self.clamp_selected();
                }
                Decision::Cancelled { asset_id, kind } => {
                    let name = self.library.find(asset_id).map(|a| a.name.as_str());
                    let name = name.unwrap_or_default();
                    self.status_message = Some(format!("Kept {} '{}'", kind, name));
                }
            }
        }
    }

    fn persist_config(&self) -> Result<()> {
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }
}
