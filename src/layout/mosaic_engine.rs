use log::{debug, error, trace};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::settings::Settings;
use super::{
    apply_edit, classify_cell, compute_grid, compute_offset, export_state, import_snapshot,
    tally_colors,
};
use crate::events::{Destroyable, EventEmitter, EventObserver, Unsubscriber};
use crate::export::mosaic_svg;
use crate::model::{
    Axis, CellVisibility, ColorTally, LayoutConfig, ModuleEdit, MosaicCommand, MosaicError,
    MosaicEvent, MosaicSnapshot, MosaicState, Position, Result, Site, SitePreset,
    SPACING_DENOMINATOR,
};

/// Owns the one live mosaic and applies commands to it, one at a time.
///
/// Every command either succeeds completely and announces what changed, or
/// fails and leaves the state untouched.
pub struct MosaicEngine {
    state: MosaicState,
    site_preset: SitePreset,
    site: Site,
    default_color: String,
    debug_mode: bool,
    event_emitter: EventEmitter<MosaicEvent>,
    subscription: Option<Unsubscriber<MosaicCommand>>,
}

impl Destroyable for MosaicEngine {
    fn destroy(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.unsubscribe();
        }
    }
}

impl MosaicEngine {
    pub fn new(settings: &Settings, event_emitter: EventEmitter<MosaicEvent>) -> Result<Self> {
        let config = settings.initial_layout.clone();
        let grid = compute_grid(&config)?;
        let offset = compute_offset(&config);
        let site = Site::for_preset(settings.site, &config);
        Ok(Self {
            state: MosaicState {
                config,
                grid,
                offset,
                palette: settings.palette.clone(),
                selected_color: settings.selected_color.clone(),
            },
            site_preset: settings.site,
            site,
            default_color: settings.default_color.clone(),
            debug_mode: Settings::is_debug_mode(),
            event_emitter,
            subscription: None,
        })
    }

    /// Builds an engine that reacts to commands emitted on `command_observer`.
    /// Failed commands are logged; call `destroy` to detach.
    ///
    /// Event listeners may emit further commands. Those are queued and run,
    /// in order, once the current command has finished.
    pub fn connect(
        command_observer: EventObserver<MosaicCommand>,
        event_emitter: EventEmitter<MosaicEvent>,
        settings: &Settings,
    ) -> Result<Rc<RefCell<Self>>> {
        let engine = Rc::new(RefCell::new(Self::new(settings, event_emitter)?));
        MosaicEngine::wire_subscription(engine.clone(), command_observer);
        Ok(engine)
    }

    fn wire_subscription(
        engine: Rc<RefCell<Self>>,
        command_observer: EventObserver<MosaicCommand>,
    ) {
        let engine_handler = engine.clone();
        let pending: Rc<RefCell<VecDeque<MosaicCommand>>> = Rc::default();
        let subscription = command_observer.subscribe(move |command| {
            pending.borrow_mut().push_back(command.clone());
            let Ok(mut engine) = engine_handler.try_borrow_mut() else {
                trace!(target: "mosaic_engine", "Queued {:?}", command);
                return;
            };
            loop {
                let next = pending.borrow_mut().pop_front();
                let Some(command) = next else {
                    break;
                };
                if let Err(err) = engine.handle_command(command.clone()) {
                    error!(target: "mosaic_engine", "Command {:?} failed: {}", command, err);
                }
            }
        });
        engine.borrow_mut().subscription = Some(subscription);
    }

    pub fn handle_command(&mut self, command: MosaicCommand) -> Result<()> {
        trace!(target: "mosaic_engine", "Handling command: {:?}", command);
        match command {
            MosaicCommand::SelectColor(color) => self.select_color(color)?,
            MosaicCommand::PaintTriangle { position, index } => {
                let color = self.state.selected_color.clone();
                self.edit_module(position, ModuleEdit::SetColor { index, color })?
            }
            MosaicCommand::EditModule(position, edit) => self.edit_module(position, edit)?,
            MosaicCommand::SetWidth(width_in) => {
                self.reconfigure(|config| config.width_in = width_in, true)?
            }
            MosaicCommand::SetHeight(height_in) => {
                self.reconfigure(|config| config.height_in = height_in, true)?
            }
            MosaicCommand::SetTileSize(tile_width_in) => {
                self.reconfigure(|config| config.tile_width_in = tile_width_in, true)?
            }
            MosaicCommand::SetSpacingSixteenths(sixteenths) => self.reconfigure(
                |config| config.spacing_in = f64::from(sixteenths) / SPACING_DENOMINATOR,
                true,
            )?,
            MosaicCommand::ToggleAnchor(axis) => self.reconfigure(
                |config| match axis {
                    Axis::X => config.anchor_x = config.anchor_x.toggled(),
                    Axis::Y => config.anchor_y = config.anchor_y.toggled(),
                },
                false,
            )?,
            MosaicCommand::LoadState(snapshot) => self.load_state(snapshot)?,
            MosaicCommand::ImportJson(contents) => {
                self.load_state(MosaicSnapshot::from_json(&contents)?)?
            }
            MosaicCommand::Refresh => self.sync_display(),
        }
        if self.debug_mode {
            debug!(target: "mosaic_engine", "Grid: {:?}", self.state.grid);
        }
        Ok(())
    }

    fn select_color(&mut self, color: String) -> Result<()> {
        if !self.state.palette.contains(&color) {
            return Err(MosaicError::UnknownColor(color));
        }
        self.state.selected_color = color.clone();
        self.event_emitter
            .emit(MosaicEvent::SelectedColorChanged(color));
        Ok(())
    }

    fn edit_module(&mut self, position: Position, edit: ModuleEdit) -> Result<()> {
        let next = apply_edit(&self.state.grid, position, &edit)?;
        let module = next.get(position).cloned();
        self.state.grid = next;
        if let Some(module) = module {
            self.event_emitter
                .emit(MosaicEvent::ModuleChanged(position, module));
        }
        self.emit_tally();
        Ok(())
    }

    /// Applies `change` to a copy of the configuration. Size changes rebuild
    /// the grid from scratch, discarding painted modules.
    fn reconfigure<F>(&mut self, change: F, regenerate: bool) -> Result<()>
    where
        F: FnOnce(&mut LayoutConfig),
    {
        let mut config = self.state.config.clone();
        change(&mut config);
        config.validate()?;

        let grid = if regenerate {
            Some(compute_grid(&config)?)
        } else {
            None
        };
        self.state.offset = compute_offset(&config);
        self.site = Site::for_preset(self.site_preset, &config);
        self.state.config = config;
        if let Some(grid) = grid {
            self.state.grid = grid;
            self.event_emitter.emit(MosaicEvent::GridRegenerated {
                n_rows: self.state.grid.n_rows(),
                n_cols: self.state.grid.n_cols(),
            });
        }
        self.event_emitter
            .emit(MosaicEvent::OffsetChanged(self.state.offset));
        self.emit_tally();
        Ok(())
    }

    fn load_state(&mut self, snapshot: MosaicSnapshot) -> Result<()> {
        let colors = snapshot.colors.clone();
        let selected_color = snapshot.selected_color.clone();
        let (grid, config) = import_snapshot(snapshot)?;

        debug!(target: "mosaic_engine", "Loading {}x{} mosaic", grid.n_rows(), grid.n_cols());
        self.state.offset = compute_offset(&config);
        self.site = Site::for_preset(self.site_preset, &config);
        self.state.config = config;
        self.state.grid = grid;
        if !colors.is_empty() {
            self.state.palette = colors;
        }
        if let Some(selected_color) = selected_color {
            self.state.selected_color = selected_color;
        }
        self.event_emitter.emit(MosaicEvent::StateLoaded);
        self.sync_display();
        Ok(())
    }

    fn sync_display(&self) {
        self.event_emitter.emit(MosaicEvent::GridRegenerated {
            n_rows: self.state.grid.n_rows(),
            n_cols: self.state.grid.n_cols(),
        });
        self.event_emitter
            .emit(MosaicEvent::OffsetChanged(self.state.offset));
        self.event_emitter
            .emit(MosaicEvent::SelectedColorChanged(self.state.selected_color.clone()));
        self.emit_tally();
    }

    fn emit_tally(&self) {
        self.event_emitter.emit(MosaicEvent::TallyChanged(self.tally()));
    }

    pub fn state(&self) -> &MosaicState {
        &self.state
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn classify(&self, position: Position) -> CellVisibility {
        classify_cell(&self.state.config, self.state.offset, position, &self.site)
    }

    pub fn tally(&self) -> ColorTally {
        tally_colors(
            &self.state.grid,
            self.state.offset,
            &self.state.config,
            &self.site,
            &self.default_color,
        )
    }

    pub fn export_state(&self) -> MosaicSnapshot {
        export_state(
            &self.state.grid,
            &self.state.config,
            &self.state.palette,
            Some(self.state.selected_color.as_str()),
        )
    }

    pub fn export_json(&self) -> Result<String> {
        self.export_state().to_json()
    }

    pub fn export_svg(&self) -> String {
        mosaic_svg(&self.state, &self.site, &self.default_color)
    }
}
