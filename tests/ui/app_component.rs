use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use folio::catalog::{CatalogController, Selection, BUILTIN_CATALOG};
use folio::config::Config;
use folio::constants::{TOAST_NO_LINK, TRAIL_LIFETIME_MS};
use folio::effects::ScriptedChance;
use folio::ui::core::{Action, Component, EventHandler, EventType};
use folio::ui::renderer::run_app_loop;
use folio::ui::AppComponent;
use folio::utils::time::ManualClock;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};
use std::sync::Arc;

const WIDTH: u16 = 100;
const HEIGHT: u16 = 30;

fn build_app(config: Config, rolls: &[f64]) -> (AppComponent, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(0));
    let controller = CatalogController::new(BUILTIN_CATALOG.clone()).unwrap();
    let mut app = AppComponent::with_chance(
        config,
        controller,
        clock.clone(),
        Box::new(ScriptedChance::new(rolls.to_vec())),
    );
    app.set_viewport(Rect::new(0, 0, WIDTH, HEIGHT));
    (app, clock)
}

fn app() -> (AppComponent, Arc<ManualClock>) {
    build_app(Config::default(), &[])
}

fn key(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn mouse(app: &mut AppComponent, kind: MouseEventKind, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }));
}

fn click(app: &mut AppComponent, column: u16, row: u16) {
    mouse(app, MouseEventKind::Down(MouseButton::Left), column, row);
}

fn move_to(app: &mut AppComponent, column: u16, row: u16) {
    mouse(app, MouseEventKind::Moved, column, row);
}

fn screen_text(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[test]
fn test_starts_on_all_filter_with_nothing_open() {
    let (app, _) = app();
    assert_eq!(app.catalog().active_filter(), "all");
    assert_eq!(app.catalog().selection(), &Selection::Closed);
    assert_eq!(app.project_list().current_index(), Some(0));
    assert!(!app.should_quit());
}

#[test]
fn test_filter_keys() {
    let (mut app, _) = app();

    key(&mut app, KeyCode::Tab);
    assert_eq!(app.catalog().active_filter(), "llm");

    key(&mut app, KeyCode::Char('3'));
    assert_eq!(app.catalog().active_filter(), "data");
    let visible: Vec<_> = app.catalog().filtered_items().iter().map(|i| i.id.clone()).collect();
    assert_eq!(visible, vec!["etl", "dqm", "report"]);
    assert_eq!(app.project_list().current_item().map(|i| i.id.as_str()), Some("etl"));

    key(&mut app, KeyCode::BackTab);
    assert_eq!(app.catalog().active_filter(), "llm");

    // Out of range digits do nothing
    key(&mut app, KeyCode::Char('9'));
    assert_eq!(app.catalog().active_filter(), "llm");
}

#[test]
fn test_open_retarget_and_cancel_modal() {
    let (mut app, _) = app();

    key(&mut app, KeyCode::Char('j'));
    key(&mut app, KeyCode::Enter);
    assert_eq!(app.catalog().selection(), &Selection::Open("ats".to_string()));

    // j/k move the open modal instead of the list behind it
    key(&mut app, KeyCode::Char('j'));
    assert_eq!(app.catalog().selection(), &Selection::Open("etl".to_string()));
    assert_eq!(app.project_list().current_item().map(|i| i.id.as_str()), Some("etl"));

    // Escape closes the modal, not the app
    key(&mut app, KeyCode::Esc);
    assert_eq!(app.catalog().selection(), &Selection::Closed);
    assert!(!app.should_quit());
}

#[test]
fn test_modal_closes_on_backdrop_click() {
    let (mut app, _) = app();
    key(&mut app, KeyCode::Enter);
    assert!(app.catalog().is_modal_open());

    // Inside the modal nothing happens
    click(&mut app, WIDTH / 2, HEIGHT / 2);
    assert!(app.catalog().is_modal_open());

    click(&mut app, 0, 0);
    assert_eq!(app.catalog().selection(), &Selection::Closed);
}

#[test]
fn test_click_on_list_opens_that_project() {
    let (mut app, _) = app();
    let list = app.state().areas.list;

    // Entries are two rows tall below the list border
    click(&mut app, list.x + 4, list.y + 3);
    assert_eq!(app.catalog().selection(), &Selection::Open("ats".to_string()));
}

#[test]
fn test_trail_follows_pointer_with_throttle() {
    let (mut app, clock) = app();

    move_to(&mut app, 50, 15);
    assert_eq!(app.trail().len(), 1);

    clock.advance(40);
    move_to(&mut app, 51, 15);
    assert_eq!(app.trail().len(), 1);

    clock.advance(40);
    move_to(&mut app, 52, 15);
    assert_eq!(app.trail().len(), 2);
    assert!(app.is_animating());

    clock.advance(TRAIL_LIFETIME_MS);
    assert!(app.handle_event(EventType::Tick));
    assert!(app.trail().is_empty());
}

#[test]
fn test_trail_can_be_disabled() {
    let mut config = Config::default();
    config.effects.trail_enabled = false;
    let (mut app, _) = build_app(config, &[]);

    move_to(&mut app, 50, 15);
    assert!(app.trail().is_empty());
}

#[test]
fn test_header_name_ripples_on_hover() {
    let (mut app, clock) = build_app(Config::default(), &[0.9, 0.1]);
    let name = folio::ui::components::HeaderComponent::name_area(app.state().areas.header);

    // Entering always ripples, then each move rolls the dice
    move_to(&mut app, name.x, name.y);
    assert_eq!(app.header().ripples().len(), 1);
    clock.advance(10);
    move_to(&mut app, name.x + 1, name.y);
    assert_eq!(app.header().ripples().len(), 2);
    clock.advance(10);
    move_to(&mut app, name.x + 2, name.y);
    assert_eq!(app.header().ripples().len(), 2);

    move_to(&mut app, 50, 20);
    assert!(!app.header().ripples().is_hovered());

    click(&mut app, name.x, name.y);
    assert_eq!(app.header().ripples().len(), 3);
}

#[test]
fn test_header_ripples_land_under_the_pointer() {
    // Without the trail nothing else is drawn on the hovered cell
    let mut config = Config::default();
    config.effects.trail_enabled = false;
    let (mut app, _) = build_app(config, &[]);
    let name = folio::ui::components::HeaderComponent::name_area(app.state().areas.header);

    move_to(&mut app, name.x + 3, name.y);
    let ripple = &app.header().ripples().effects()[0];
    assert_eq!(ripple.position, folio::effects::Position::new(3, 0));

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();
    let glyph = app.icons().effect_glyph(folio::effects::EffectKind::Ripple, 0.0);
    assert_eq!(terminal.backend().buffer()[(name.x + 3, name.y)].symbol(), glyph);
}

#[test]
fn test_focus_lost_clears_pointer_effects() {
    let (mut app, _) = app();
    let name = folio::ui::components::HeaderComponent::name_area(app.state().areas.header);

    move_to(&mut app, name.x, name.y);
    assert_eq!(app.trail().len(), 1);
    assert!(app.header().ripples().is_hovered());

    assert!(app.handle_event(EventType::FocusLost));
    assert!(app.trail().is_empty());
    assert!(app.header().ripples().is_empty());
    assert!(!app.header().ripples().is_hovered());
    assert!(app.state().pointer.is_none());

    // Throttle window is forgotten too, so the first move after refocus pops
    move_to(&mut app, name.x + 1, name.y);
    assert_eq!(app.trail().len(), 1);
    assert_eq!(app.header().ripples().len(), 1);
}

#[test]
fn test_pointer_moves_leave_catalog_untouched() {
    let (mut app, clock) = app();
    let revision = app.catalog().revision();

    for step in 0..20 {
        clock.advance(100);
        move_to(&mut app, 10 + step, 15);
    }
    assert_eq!(app.catalog().revision(), revision);
}

#[test]
fn test_icon_theme_reaches_components() {
    let (mut app, _) = app();
    let before = app.icons().theme();

    key(&mut app, KeyCode::Char('i'));
    assert_ne!(app.icons().theme(), before);
    assert_eq!(app.project_list().icons.theme(), app.icons().theme());

    // Filter changes still reach the list
    key(&mut app, KeyCode::Char('3'));
    assert_eq!(app.project_list().current_item().map(|i| i.id.as_str()), Some("etl"));
}

#[test]
fn test_scroll_prompt_pulses_on_ticks() {
    let (mut app, clock) = app();

    app.handle_event(EventType::Tick);
    assert!(app.scroll_prompt().pulse().is_empty());

    clock.set(1500);
    assert!(app.handle_event(EventType::Tick));
    assert_eq!(app.scroll_prompt().pulse().len(), 1);

    // Clicking the prompt adds a burst
    let prompt = app.state().areas.prompt;
    click(&mut app, prompt.x + prompt.width / 2, prompt.y + 1);
    assert_eq!(app.scroll_prompt().pulse().len(), 4);
}

#[test]
fn test_link_toast() {
    let (mut app, clock) = app();

    key(&mut app, KeyCode::Char('o'));
    let message = app.toast().current().map(|t| t.message.clone()).unwrap();
    assert!(message.contains("https://github.com/Nehainit/RAG_criminal-defense-research"));

    // cashflow has no public link
    for _ in 0..6 {
        key(&mut app, KeyCode::Down);
    }
    assert_eq!(app.project_list().current_item().map(|i| i.id.as_str()), Some("cashflow"));
    key(&mut app, KeyCode::Char('o'));
    assert_eq!(app.toast().current().map(|t| t.message.as_str()), Some(TOAST_NO_LINK));

    clock.advance(Config::default().effects.toast_ms);
    app.handle_event(EventType::Tick);
    assert!(app.toast().current().is_none());
}

#[test]
fn test_help_dialog_captures_keys() {
    let (mut app, _) = app();

    key(&mut app, KeyCode::Char('?'));
    assert!(app.dialog().is_visible());

    // 'q' closes the dialog instead of quitting
    key(&mut app, KeyCode::Char('q'));
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    key(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}

#[test]
fn test_ctrl_c_always_quits() {
    let (mut app, _) = app();
    key(&mut app, KeyCode::Enter);
    app.handle_event(EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
    assert!(app.should_quit());
}

#[test]
fn test_resize_relayouts() {
    let (mut app, _) = app();
    app.handle_event(EventType::Resize(80, 40));
    assert_eq!(app.state().viewport, Rect::new(0, 0, 80, 40));
    assert_eq!(app.state().areas.status.y, 39);
}

#[test]
fn test_render_main_view_and_modal() {
    let (mut app, _) = app();

    let text = screen_text(&mut app);
    assert!(text.contains("Neha"));
    assert!(text.contains("Selected Work"));
    assert!(text.contains("RAG Criminal Defense Research"));
    assert!(text.contains("8/8"));

    key(&mut app, KeyCode::Enter);
    let text = screen_text(&mut app);
    assert!(text.contains("Key Features"));
    assert!(text.contains("Technologies"));
}

#[tokio::test]
async fn test_app_loop_draws_before_quitting() {
    let (mut app, _) = app();
    app.dispatch(Action::Quit);

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    let mut events = EventHandler::default();
    run_app_loop(&mut terminal, &mut app, &mut events).await.unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("Selected Work"));
}
