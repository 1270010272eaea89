use crate::catalog::CatalogController;
use crate::config::Config;
use crate::constants::{TOAST_NO_LINK, TOAST_NO_PROJECT};
use crate::effects::{Chance, CursorTrail, FastRandChance, Position};
use crate::icons::{IconService, IconTheme};
use crate::logger::Logger;
use crate::ui::components::{
    DialogComponent, EffectsOverlay, FilterBarComponent, HeaderComponent, ProjectListComponent, ProjectModalComponent,
    ScrollPromptComponent, StatusBar, StatusInfo, ToastComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType},
    contains,
    event_handler::EventType,
    Component,
};
use crate::ui::layout::{LayoutManager, MainAreas};
use crate::utils::time::Clock;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{layout::Rect, Frame};
use std::sync::Arc;

/// Layout and pointer state separate from the catalog
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub viewport: Rect,
    pub areas: MainAreas,
    pub pointer: Option<Position>,
}

pub struct AppComponent {
    // Component composition
    header: HeaderComponent,
    filter_bar: FilterBarComponent,
    project_list: ProjectListComponent,
    modal: ProjectModalComponent,
    scroll_prompt: ScrollPromptComponent,
    dialog: DialogComponent,
    toast: ToastComponent,
    trail: CursorTrail,

    // Application state
    catalog: CatalogController,
    state: AppState,
    config: Config,
    /// Catalog revision and icon theme last pushed into the components
    synced: Option<(u64, IconTheme)>,

    // Services
    icons: IconService,
    clock: Arc<dyn Clock>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: Config, catalog: CatalogController, clock: Arc<dyn Clock>) -> Self {
        Self::with_chance(config, catalog, clock, Box::new(FastRandChance::new()))
    }

    /// Build with an explicit random source for the header ripples
    pub fn with_chance(
        config: Config,
        catalog: CatalogController,
        clock: Arc<dyn Clock>,
        chance: Box<dyn Chance>,
    ) -> Self {
        let logger = Logger::new();
        let mut dialog = DialogComponent::new();
        dialog.set_logger(logger.clone());

        let mut app = Self {
            header: HeaderComponent::new(chance),
            filter_bar: FilterBarComponent::new(),
            project_list: ProjectListComponent::new(),
            modal: ProjectModalComponent::new(),
            scroll_prompt: ScrollPromptComponent::default(),
            dialog,
            toast: ToastComponent::new(),
            trail: CursorTrail::new(),
            catalog,
            state: AppState::default(),
            icons: IconService::new(config.ui.icon_theme),
            config,
            synced: None,
            clock,
            logger,
            should_quit: false,
        };

        app.logger.log(format!(
            "AppComponent: {} projects loaded, filter '{}'",
            app.catalog.items().len(),
            app.catalog.active_filter()
        ));
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn catalog(&self) -> &CatalogController {
        &self.catalog
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn header(&self) -> &HeaderComponent {
        &self.header
    }

    pub fn scroll_prompt(&self) -> &ScrollPromptComponent {
        &self.scroll_prompt
    }

    pub fn project_list(&self) -> &ProjectListComponent {
        &self.project_list
    }

    pub fn toast(&self) -> &ToastComponent {
        &self.toast
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn icons(&self) -> &IconService {
        &self.icons
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Lay the screen out for a terminal of `area`
    pub fn set_viewport(&mut self, area: Rect) {
        self.state.viewport = area;
        self.state.areas = LayoutManager::main_layout(area);
        self.scroll_prompt.place(self.state.areas.prompt);
    }

    /// True while any effect is still on screen
    pub fn is_animating(&self) -> bool {
        !self.trail.is_empty() || !self.header.ripples().is_empty() || !self.scroll_prompt.pulse().is_empty()
    }

    fn overlay_active(&self) -> bool {
        self.catalog.is_modal_open() || self.dialog.is_visible()
    }

    fn sync_key(&self) -> (u64, IconTheme) {
        (self.catalog.revision(), self.icons.theme())
    }

    /// Push controller state into the components
    fn sync_component_data(&mut self) {
        self.synced = Some(self.sync_key());

        let counts = self
            .catalog
            .filters()
            .iter()
            .map(|filter| self.catalog.items_for(&filter.id).len())
            .collect();
        self.filter_bar
            .update_data(self.catalog.filters().to_vec(), counts, self.catalog.active_filter());

        self.project_list
            .update_data(self.catalog.filtered_items().into_iter().cloned().collect());

        let selected = self.catalog.selected_item().cloned();
        let detail = selected
            .as_ref()
            .and_then(|item| self.catalog.detail_for(&item.id).cloned());
        self.modal.set_content(selected, detail);

        self.filter_bar.icons = self.icons.clone();
        self.project_list.icons = self.icons.clone();
        self.modal.icons = self.icons.clone();
        self.dialog.icons = self.icons.clone();
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => {
                self.logger.log("Global key: 'q' - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Esc => {
                self.logger.log("Global key: Esc - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('?') => {
                self.logger.log("Global key: '?' - opening help dialog".to_string());
                Action::ShowDialog(DialogType::Help)
            }
            KeyCode::Char('G') => {
                self.logger.log("Global key: 'G' - opening logs dialog".to_string());
                Action::ShowDialog(DialogType::Logs)
            }
            KeyCode::Char('i') => Action::CycleIconTheme,
            KeyCode::Char('o') => Action::ShowLink,
            _ => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.logger.log("Global key: Ctrl+C - quitting application".to_string());
            return Action::Quit;
        }

        // Dialog has priority when visible, then the modal
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if self.catalog.is_modal_open() {
            return match self.modal.handle_key_events(key) {
                Action::None => match key.code {
                    KeyCode::Char('?') | KeyCode::Char('G') | KeyCode::Char('i') => self.handle_global_key(key),
                    _ => Action::None,
                },
                action => action,
            };
        }

        let action = self.filter_bar.handle_key_events(key);
        if action != Action::None {
            return action;
        }

        let action = self.project_list.handle_key_events(key);
        if action != Action::None {
            return action;
        }

        self.handle_global_key(key)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        let now = self.clock.now();
        let position = Position::new(mouse.column, mouse.row);
        let areas = self.state.areas;

        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.state.pointer = Some(position);
                if self.config.effects.trail_enabled {
                    self.trail.on_pointer_move(position, now);
                }
                if self.config.effects.ripples_enabled {
                    // Anything drawn over the header hides it from the pointer
                    let over = (!self.overlay_active()).then_some(position);
                    self.header.on_pointer(over, areas.header, now);
                }
                Action::None
            }
            _ if self.dialog.is_visible() => Action::None,
            _ if self.catalog.is_modal_open() => self.modal.handle_mouse_events(mouse, self.state.viewport),
            MouseEventKind::ScrollDown => Action::NextItem,
            MouseEventKind::ScrollUp => Action::PreviousItem,
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(areas.header, mouse.column, mouse.row) {
                    if self.config.effects.ripples_enabled {
                        self.header.on_click(position, areas.header, now);
                    }
                    Action::None
                } else if contains(areas.filters, mouse.column, mouse.row) {
                    self.filter_bar.handle_mouse_events(mouse, areas.filters)
                } else if contains(areas.list, mouse.column, mouse.row) {
                    self.project_list.handle_mouse_events(mouse, areas.list)
                } else {
                    self.scroll_prompt.handle_mouse(mouse, areas.prompt)
                }
            }
            _ => Action::None,
        }
    }

    /// Expire and spawn time-driven effects; returns true if the screen should be redrawn
    pub fn on_tick(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;

        changed |= self.trail.advance(now) > 0;
        changed |= self.header.advance(now) > 0;
        if self.config.effects.pulse_enabled {
            changed |= self.scroll_prompt.tick(now);
        }
        changed |= self.scroll_prompt.advance(now) > 0;
        changed |= self.toast.expire(now);

        changed || self.is_animating()
    }

    fn show_toast(&mut self, message: String) {
        let now = self.clock.now();
        self.logger.log(format!("Toast: {}", message));
        self.toast.show(message, now, self.config.effects.toast_ms);
    }

    /// Handle app-level actions that change catalog state or trigger effects
    pub fn handle_app_action(&mut self, action: Action) {
        match action {
            Action::SetFilter(key) => match self.catalog.set_filter(&key) {
                Ok(()) => self.logger.log(format!("Filter: '{}'", key)),
                Err(e) => self.logger.log(format!("Filter rejected: {}", e)),
            },
            Action::CycleFilter(offset) => {
                let key = self.catalog.cycle_filter(offset).to_string();
                self.logger.log(format!("Filter: '{}'", key));
            }
            Action::OpenItem(id) => match self.catalog.select(&id) {
                Ok(()) => self.logger.log(format!("Opened project '{}'", id)),
                Err(e) => self.logger.log(format!("Open rejected: {}", e)),
            },
            Action::RetargetItem(offset) => {
                if let Some(id) = self.catalog.select_relative(offset).map(|item| item.id.clone()) {
                    self.project_list.focus(&id);
                    self.logger.log(format!("Re-targeted modal to '{}'", id));
                }
            }
            Action::CloseModal(reason) => {
                self.logger.log(format!("Closed project modal ({:?})", reason));
                self.catalog.dismiss(reason);
            }
            Action::PulseBurst => {
                if self.config.effects.pulse_enabled {
                    self.scroll_prompt.burst(self.clock.now());
                }
            }
            Action::ShowLink => {
                let message = match self.catalog.selected_item().or_else(|| self.project_list.current_item()) {
                    Some(item) => match &item.link {
                        Some(link) => format!("{} {}", self.icons.link(), link),
                        None => TOAST_NO_LINK.to_string(),
                    },
                    None => TOAST_NO_PROJECT.to_string(),
                };
                self.show_toast(message);
            }
            Action::CycleIconTheme => {
                self.icons.cycle_icon_theme();
                self.logger.log(format!("Icon theme: {:?}", self.icons.theme()));
            }
            Action::Quit => {
                self.should_quit = true;
            }
            // Consumed by components on the way up
            Action::NextItem | Action::PreviousItem | Action::ShowDialog(_) | Action::HideDialog | Action::None => {}
        }
    }

    /// Run an action through the component hierarchy, then apply what is left
    pub fn dispatch(&mut self, action: Action) {
        let action = self.update(action);
        self.handle_app_action(action);
        if self.synced != Some(self.sync_key()) {
            self.sync_component_data();
        }
    }

    /// Pointer reports stop while the terminal is unfocused, so nothing on screen
    /// tracks it any more
    pub fn on_focus_lost(&mut self) {
        self.state.pointer = None;
        self.trail.clear();
        self.header.clear();
        self.logger.log("Focus lost: cleared pointer effects".to_string());
    }

    /// Process an event; returns true if the screen should be redrawn
    pub fn handle_event(&mut self, event_type: EventType) -> bool {
        let action = match event_type {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) => self.handle_mouse(mouse),
            EventType::Resize(width, height) => {
                self.set_viewport(Rect::new(0, 0, width, height));
                Action::None
            }
            EventType::FocusLost => {
                self.on_focus_lost();
                Action::None
            }
            EventType::Tick => return self.on_tick(),
            EventType::Other => return false,
        };

        self.dispatch(action);
        true
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent, _area: Rect) -> Action {
        self.handle_mouse(mouse)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        self.project_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if rect != self.state.viewport {
            self.set_viewport(rect);
        }

        let now = self.clock.now();
        let areas = self.state.areas;

        self.header.render(f, areas.header, &self.icons, now);
        self.filter_bar.render(f, areas.filters);
        self.project_list.render(f, areas.list);

        // The list offset is only known after layout
        self.scroll_prompt
            .update_visibility(self.project_list.scrolled_rows(), self.config.ui.scroll_prompt_rows);
        self.scroll_prompt.render(f, areas.prompt, &self.icons, now);

        let filter_label = self
            .catalog
            .catalog()
            .filter(self.catalog.active_filter())
            .map_or(self.catalog.active_filter(), |filter| filter.label.as_str());
        let info = StatusInfo {
            filter_label,
            visible: self.catalog.filtered_len(),
            total: self.catalog.items().len(),
        };
        StatusBar::render(f, areas.status, &info);

        // Overlays, bottom to top
        self.modal.render(f, rect);
        EffectsOverlay::render(f, rect, self.trail.snapshot(now), &self.icons, now);
        self.toast.render(f, rect, &self.icons);
        self.dialog.render(f, rect);
    }
}
