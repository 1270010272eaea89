use folio::catalog::{CatalogItem, ItemDetail};
use folio::icons::{IconService, IconTheme};
use folio::ui::components::{
    DialogComponent, ProjectModalComponent, StatusBar, StatusInfo, ToastComponent,
};
use folio::ui::core::{Action, Component, DialogType};
use folio::logger::Logger;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};

fn draw(width: u16, height: u16, render: impl FnOnce(&mut ratatui::Frame, Rect)) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            render(f, area);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

fn all_text(buffer: &Buffer) -> String {
    (0..buffer.area.height).map(|y| row_text(buffer, y)).collect::<Vec<_>>().join("\n")
}

fn project(link: Option<&str>) -> CatalogItem {
    CatalogItem {
        id: "etl".to_string(),
        title: "AI-Powered ETL Pipeline".to_string(),
        short_description: "Schema detection".to_string(),
        tags: vec!["LLM".to_string(), "ETL".to_string()],
        categories: vec!["llm".to_string()],
        link: link.map(str::to_string),
    }
}

#[test]
fn test_status_bar_shows_counts() {
    let buffer = draw(80, 1, |f, area| {
        StatusBar::render(
            f,
            area,
            &StatusInfo {
                filter_label: "Data Engineering",
                visible: 3,
                total: 8,
            },
        );
    });
    let text = row_text(&buffer, 0);
    assert!(text.contains("Data Engineering • 3/8 projects"));
}

#[test]
fn test_modal_renders_detail_record() {
    let mut modal = ProjectModalComponent::new();
    modal.icons = IconService::new(IconTheme::Ascii);
    modal.set_content(
        Some(project(Some("https://example.com/etl"))),
        Some(ItemDetail {
            description: "Maps columns between sources".to_string(),
            features: vec!["Automatic schema detection".to_string()],
            technologies: vec!["Python".to_string(), "FastAPI".to_string()],
        }),
    );

    let buffer = draw(100, 30, |f, area| modal.render(f, area));
    let text = all_text(&buffer);
    assert!(text.contains("AI-Powered ETL Pipeline"));
    assert!(text.contains("[x]"));
    assert!(text.contains("Key Features"));
    assert!(text.contains("Automatic schema detection"));
    assert!(text.contains("Python · FastAPI"));
    assert!(text.contains("https://example.com/etl"));
}

#[test]
fn test_modal_without_detail_falls_back_to_tags() {
    let mut modal = ProjectModalComponent::new();
    modal.set_content(Some(project(None)), None);

    let text = all_text(&draw(100, 30, |f, area| modal.render(f, area)));
    assert!(text.contains("Tags"));
    assert!(text.contains("LLM · ETL"));
    assert!(text.contains("No public repository"));
    assert!(!text.contains("Key Features"));
}

#[test]
fn test_closed_modal_draws_nothing() {
    let mut modal = ProjectModalComponent::new();
    let buffer = draw(40, 10, |f, area| modal.render(f, area));
    assert!(all_text(&buffer).trim().is_empty());
}

#[test]
fn test_toast_sits_above_status_row() {
    let mut toast = ToastComponent::new();
    toast.show("Copied".to_string(), 0, 2000);
    let icons = IconService::new(IconTheme::Ascii);

    let buffer = draw(60, 20, |f, area| toast.render(f, area, &icons));
    assert!(row_text(&buffer, 17).contains("Copied"));
    assert!(row_text(&buffer, 19).trim().is_empty());
}

#[test]
fn test_help_dialog_renders_when_shown() {
    let mut dialog = DialogComponent::new();
    assert_eq!(dialog.update(Action::ShowDialog(DialogType::Help)), Action::None);

    let text = all_text(&draw(100, 40, |f, area| dialog.render(f, area)));
    assert!(text.contains("Help"));
    assert!(text.contains("FILTERS"));
}

#[test]
fn test_logs_dialog_lists_logger_history() {
    let logger = Logger::new();
    logger.log("Opened project 'rag'".to_string());

    let mut dialog = DialogComponent::new();
    dialog.set_logger(logger);
    dialog.update(Action::ShowDialog(DialogType::Logs));

    let text = all_text(&draw(100, 30, |f, area| dialog.render(f, area)));
    assert!(text.contains("Opened project 'rag'"));
}
