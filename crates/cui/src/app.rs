use anyhow::{Context, Result};
use cardtable_core::{
    AssetSource, CardCollection, CardFactory, DeckConfig, EventBus, HandConfig, InputEvent,
    InteractionController, Mode, Offset, Point, RngState, Size, SyntheticAssets, Table,
    TableConfig, TableEvent,
};
use cardtable_data::{load_table_config_file, load_table_config_or, DirAssets};
use std::collections::VecDeque;
use std::path::Path;

use crate::LaunchOptions;

const MAX_EVENT_LOG: usize = 200;

pub struct App {
    pub config: TableConfig,
    pub seed: u64,
    pub factory: CardFactory,
    pub rng: RngState,
    pub table: Table,
    pub controller: InteractionController,
    pub events: EventBus,
    pub event_log: VecDeque<String>,
    pub status_line: String,
    pub show_help: bool,
    pub should_quit: bool,
}

/// Layout in terminal cells, used when the assets directory carries no
/// `table.json`. The core defaults are pixel sized.
pub fn cell_layout() -> TableConfig {
    let defaults = TableConfig::default();
    TableConfig {
        card_size: Size::new(9, 6),
        hand: HandConfig {
            anchor: Point::new(3, 3),
            offset: Offset::new(4, 0),
            border_pad: 1,
            ..defaults.hand
        },
        deck: DeckConfig {
            anchor: Point::new(3, 14),
            ..defaults.deck
        },
        draw_offset: Offset::new(20, 0),
        seed: None,
    }
}

/// Card images when `cards_dir` exists, labelled stand-ins otherwise.
pub fn resolve_assets(cards_dir: &Path, config: &TableConfig) -> Box<dyn AssetSource> {
    if cards_dir.is_dir() {
        tracing::info!(dir = %cards_dir.display(), "using card images");
        Box::new(DirAssets::new(cards_dir))
    } else {
        tracing::info!(dir = %cards_dir.display(), "card images not found, using synthetic faces");
        Box::new(SyntheticAssets::new(config.card_size))
    }
}

impl App {
    pub fn bootstrap(options: &LaunchOptions) -> Result<Self> {
        let config = match options.config.as_deref() {
            Some(path) => load_table_config_file(path)
                .with_context(|| format!("load table config from {}", path.display()))?,
            None => load_table_config_or(&options.assets, cell_layout)
                .context("load table config")?,
        };
        let assets = resolve_assets(&options.assets.join("cards"), &config);
        Self::new(config, assets, options.seed)
    }

    pub fn new(config: TableConfig, assets: Box<dyn AssetSource>, seed: Option<u64>) -> Result<Self> {
        let mut rng = match seed.or(config.seed) {
            Some(seed) => RngState::from_seed(seed),
            None => RngState::from_entropy(),
        };
        let seed = rng.seed();
        let mut factory = CardFactory::new(assets).context("load card back")?;
        let table = Table::deal(&config, &mut factory, &mut rng).context("deal table")?;
        Ok(Self {
            config,
            seed,
            factory,
            rng,
            table,
            controller: InteractionController::new(),
            events: EventBus::default(),
            event_log: VecDeque::new(),
            status_line: "ready".to_string(),
            show_help: false,
            should_quit: false,
        })
    }

    pub fn handle_pointer(&mut self, event: InputEvent) {
        self.controller.handle(&mut self.table, event, &mut self.events);
    }

    pub fn shuffle_pile(&mut self) {
        if self.table.pile.is_none() {
            self.push_status("no pile to shuffle");
            return;
        }
        self.table.shuffle_pile(&mut self.rng, &mut self.events);
    }

    pub fn flip_hand(&mut self) {
        self.table.flip_hand(&mut self.events);
    }

    /// Throw the current table away and deal a new one from the config.
    pub fn redeal(&mut self) {
        match Table::deal(&self.config, &mut self.factory, &mut self.rng) {
            Ok(table) => {
                self.table = table;
                self.controller = InteractionController::new();
                self.push_status("redealt");
            }
            Err(err) => self.push_status(format!("error: {err}")),
        }
    }

    pub fn next_hint(&self) -> &'static str {
        match self.controller.mode() {
            Mode::Dragging => "release to drop the card here",
            Mode::Idle if self.table.hand.is_empty() => "r to redeal",
            Mode::Idle => "drag a card out of the hand, right-click to flip or draw",
        }
    }

    pub fn pile_len(&self) -> usize {
        self.table.pile.as_ref().map_or(0, |pile| pile.len())
    }

    pub fn push_status(&mut self, value: impl Into<String>) {
        self.status_line = value.into();
    }

    pub fn flush_events(&mut self) {
        let drained: Vec<_> = self.events.drain().collect();
        for event in drained {
            if event == TableEvent::DrawRefused {
                self.push_status("the pile is empty");
            }
            self.push_event_line(format_event(&event));
        }
    }

    fn push_event_line(&mut self, line: String) {
        if self.event_log.len() >= MAX_EVENT_LOG {
            let _ = self.event_log.pop_front();
        }
        self.event_log.push_back(line);
    }
}

fn format_event(event: &TableEvent) -> String {
    match event {
        TableEvent::Picked { code, index } => format!("picked {code} from slot {index}"),
        TableEvent::Dropped { code, at } => format!("dropped {code} at {},{}", at.x, at.y),
        TableEvent::Flipped { code, face_up } => {
            format!("flipped {code} {}", if *face_up { "up" } else { "down" })
        }
        TableEvent::DrawnFromPile { code, remaining } => {
            format!("drew {code}, {remaining} left in the pile")
        }
        TableEvent::DrawRefused => "pile is empty".to_string(),
        TableEvent::Shuffled { seed } => format!("pile shuffled (seed {seed})"),
        TableEvent::GroupFlipped { cards } => format!("flipped {cards} cards in the hand"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let mut config = TableConfig::default();
        config.deck.shuffle_on_deal = false;
        let assets = Box::new(SyntheticAssets::new(Size::new(100, 145)));
        App::new(config, assets, Some(5)).expect("app")
    }

    #[test]
    fn drag_gesture_lands_in_the_log() {
        let mut app = app();
        app.handle_pointer(InputEvent::PrimaryDown(Point::new(12, 12)));
        app.handle_pointer(InputEvent::PointerMove(Offset::new(0, 200)));
        app.handle_pointer(InputEvent::PrimaryUp);
        app.flush_events();
        let log: Vec<_> = app.event_log.iter().cloned().collect();
        assert_eq!(log, ["picked 4D from slot 0", "dropped 4D at 10,210"]);
        assert_eq!(app.table.hand.len(), 5);
    }

    #[test]
    fn drawing_the_pile_dry_reports_it() {
        let mut app = app();
        let point = app.table.pile.as_ref().unwrap().anchor();
        for _ in 0..53 {
            app.handle_pointer(InputEvent::SecondaryDown(point));
            app.handle_pointer(InputEvent::SecondaryUp);
        }
        assert_eq!(app.pile_len(), 0);
        assert_eq!(app.table.loose.len(), 52);
        // Nothing left to click on, so the last gesture was a no-op.
        assert!(app.table.draw_from_pile(&mut app.events).is_err());
        app.flush_events();
        assert_eq!(app.event_log.len(), 53);
        assert_eq!(app.status_line, "the pile is empty");
        assert_eq!(app.event_log.back().map(String::as_str), Some("pile is empty"));
    }

    #[test]
    fn redeal_restores_the_hand() {
        let mut app = app();
        app.handle_pointer(InputEvent::PrimaryDown(Point::new(12, 12)));
        app.handle_pointer(InputEvent::PrimaryUp);
        app.redeal();
        assert_eq!(app.table.hand.len(), 6);
        assert!(app.table.loose.is_empty());
        assert_eq!(app.seed, 5);
    }

    #[test]
    fn unseeded_app_reports_the_seed_it_drew() {
        let mut config = TableConfig::default();
        config.seed = None;
        let assets = Box::new(SyntheticAssets::new(Size::new(100, 145)));
        let app = App::new(config, assets, None).expect("app");
        assert_eq!(app.rng.seed(), app.seed);
    }

    #[test]
    fn config_seed_applies_without_a_flag() {
        let mut config = TableConfig::default();
        config.seed = Some(77);
        let assets = Box::new(SyntheticAssets::new(Size::new(100, 145)));
        let app = App::new(config, assets, None).expect("app");
        assert_eq!(app.seed, 77);
    }

    #[test]
    fn assets_without_table_json_use_cell_layout() {
        let dir = tempfile::tempdir().unwrap();
        let options = LaunchOptions {
            assets: dir.path().to_path_buf(),
            ..LaunchOptions::default()
        };
        let app = App::bootstrap(&options).expect("bootstrap");
        assert_eq!(app.config, cell_layout());
        assert_eq!(app.table.hand.cards()[0].rect().size(), Size::new(9, 6));
    }

    #[test]
    fn event_log_is_bounded() {
        let mut app = app();
        for _ in 0..(MAX_EVENT_LOG + 10) {
            app.flip_hand();
        }
        app.flush_events();
        assert_eq!(app.event_log.len(), MAX_EVENT_LOG);
    }
}
