use crate::model::CategoryId;
use crate::submit::ContactField;
use crate::summary::format_usd;
use crate::ui::app::{App, FocusPanel, SubmitState};
use ratatui::{
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Gauge, List, ListItem, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table,
    },
    Frame,
};

const BRAND_DARK: Color = Color::Rgb(0x1F, 0x2F, 0x3C);
const BRAND_SELECT_BG: Color = Color::Rgb(0xC3, 0xD3, 0xE0);
const BRAND_GREEN: Color = Color::Rgb(0x82, 0x9A, 0x68);
const BRAND_ORANGE: Color = Color::Rgb(0x9E, 0x68, 0x3C);
const BRAND_MUTED: Color = Color::Rgb(0x71, 0x65, 0x65);
const BRAND_RED: Color = Color::Rgb(0xA8, 0x3C, 0x3C);

const HEADER_STYLE: Style = Style::new().fg(BRAND_DARK).add_modifier(Modifier::BOLD);
const SELECTED_STYLE: Style = Style::new()
    .bg(BRAND_SELECT_BG)
    .fg(BRAND_DARK)
    .add_modifier(Modifier::BOLD);
const PRICE_COLOR: Color = BRAND_GREEN;
const LOCKED_STYLE: Style = Style::new().fg(BRAND_MUTED).add_modifier(Modifier::DIM);

pub fn draw_builder(frame: &mut Frame, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Header + progress
        Constraint::Min(10),   // Main content
        Constraint::Length(3), // Footer
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], app);
    draw_main_content(frame, chunks[1], app);
    draw_footer(
        frame,
        chunks[2],
        " ←→ Panel | ↑↓ Move | Enter Select | b Bed | s Seats | o Own van | r Reset | e Send | q Quit ",
    );
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks =
        Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)]).split(area);

    let total = app.configurator.price().total;
    let title = format!(" Van Configurator | Total {} ", format_usd(total));
    let header = Paragraph::new(title)
        .style(HEADER_STYLE)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let percent = app.configurator.progress_percent();
    let gauge = Gauge::default()
        .block(Block::default().title(" Progress ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(BRAND_GREEN))
        .percent(u16::from(percent));
    frame.render_widget(gauge, chunks[1]);
}

fn draw_main_content(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([
        Constraint::Percentage(25), // Categories
        Constraint::Percentage(40), // Options
        Constraint::Percentage(35), // Summary
    ])
    .split(area);

    draw_categories(frame, chunks[0], app);
    draw_options(frame, chunks[1], app);
    draw_summary(frame, chunks[2], app);
}

fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(BRAND_ORANGE)
    } else {
        Style::default()
    }
}

fn draw_categories(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Categories;
    let gate = app.configurator.gate();
    let done = app.configurator.completed();

    let items: Vec<ListItem> = CategoryId::ALL
        .iter()
        .enumerate()
        .map(|(i, category)| {
            let is_selected = i == app.selected_category;
            let unlocked = gate.is_unlocked(*category);

            let style = if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else if !unlocked {
                LOCKED_STYLE
            } else {
                Style::default()
            };

            let status = if !unlocked {
                Span::styled("· ", LOCKED_STYLE)
            } else if done.contains(category) {
                Span::styled("✓ ", Style::default().fg(BRAND_GREEN))
            } else {
                Span::raw("  ")
            };

            let marker = if is_selected && is_focused {
                " ◄"
            } else {
                ""
            };

            ListItem::new(Line::from(vec![
                status,
                Span::styled(category.title(), style),
                Span::styled(marker, Style::default().fg(BRAND_ORANGE)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_style(border_style(is_focused)),
    );

    frame.render_widget(list, area);
}

fn draw_options(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus_panel == FocusPanel::Options;
    let category = app.selected_category();
    let options = app.visible_options();
    let state = app.configurator.state();
    let unlocked = app.is_unlocked(category);

    let visible_rows = (area.height as usize).saturating_sub(3);
    let scroll_offset = if app.selected_option >= visible_rows {
        app.selected_option - visible_rows + 1
    } else {
        0
    };

    let header = Row::new(vec!["", "Option", "Price"])
        .style(HEADER_STYLE)
        .height(1);

    let rows: Vec<Row> = options
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, item)| {
            let is_selected = i == app.selected_option;
            let style = if !unlocked {
                LOCKED_STYLE
            } else if is_selected && is_focused {
                SELECTED_STYLE
            } else if is_selected {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let picked = if state.is_selected(&item.id) { "●" } else { "○" };
            let price = if category == CategoryId::Chassis && state.owns_van {
                "owned".to_string()
            } else {
                format_usd(item.price)
            };

            Row::new(vec![picked.to_string(), item.name.clone(), price]).style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(2),
        Constraint::Percentage(65),
        Constraint::Percentage(30),
    ];

    let title = if unlocked {
        format!(" {} ({}) ", category.title(), options.len())
    } else {
        format!(" {} (locked) ", category.title())
    };
    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(border_style(is_focused)),
    );

    frame.render_widget(table, area);

    if options.len() > visible_rows {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        let mut scrollbar_state = ScrollbarState::new(options.len()).position(app.selected_option);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y + 2,
            width: 1,
            height: area.height - 3,
        };
        frame.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
    }
}

fn price_line(label: &str, amount: u64) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{label:<10}")),
        Span::styled(format_usd(amount), Style::default().fg(PRICE_COLOR)),
    ])
}

fn draw_summary(frame: &mut Frame, area: Rect, app: &App) {
    let price = app.configurator.price();
    let state = app.configurator.state();
    let layers = app.configurator.layers();

    let yes_no = |value: bool| if value { "yes" } else { "no" };

    let mut lines = vec![
        price_line("Base van", price.chassis),
        price_line("Package", price.model),
        price_line("Upgrades", price.upgrades),
        Line::from(vec![
            Span::styled(format!("{:<10}", "Total"), HEADER_STYLE),
            Span::styled(format_usd(price.total), HEADER_STYLE.fg(PRICE_COLOR)),
        ]),
        Line::raw(""),
        Line::raw(format!(
            "Bed: {}  Seats: {}  Own van: {}",
            yes_no(state.has_bed),
            yes_no(state.has_seats),
            yes_no(state.owns_van)
        )),
        Line::raw(""),
        Line::styled(
            format!("── Layers ({}) ──", layers.len()),
            Style::default()
                .fg(BRAND_MUTED)
                .add_modifier(Modifier::ITALIC),
        ),
    ];

    if layers.is_empty() {
        lines.push(Line::styled("no preview", Style::default().fg(BRAND_MUTED)));
    }
    lines.extend(layers.iter().map(|layer| {
        Line::from(vec![
            Span::styled(
                format!("{:>2} {:<14}", layer.z_index(), layer.slot.label()),
                Style::default().fg(BRAND_MUTED),
            ),
            Span::raw(layer.image.clone()),
        ])
    }));

    let summary =
        Paragraph::new(lines).block(Block::default().title(" Summary ").borders(Borders::ALL));
    frame.render_widget(summary, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, help: &str) {
    let footer = Paragraph::new(help)
        .style(Style::default().fg(BRAND_MUTED))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(footer, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

/// Contact dialog drawn over the builder.
pub fn draw_contact(frame: &mut Frame, app: &App) {
    draw_builder(frame, app);

    let field_rows = ContactField::ALL.len() as u16 * 2;
    let area = centered(frame.area(), 64, field_rows + 6);
    frame.render_widget(Clear, area);

    let title = match app.configurator.summary().model_name() {
        Some(model) => format!(" Send configuration: {model} "),
        None => " Send configuration ".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BRAND_ORANGE));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line> = Vec::new();
    for field in ContactField::ALL {
        let is_current = field == app.current_field();
        let label_style = if is_current {
            SELECTED_STYLE
        } else {
            HEADER_STYLE
        };
        let cursor = if is_current { "▏" } else { "" };

        lines.push(Line::from(vec![
            Span::styled(format!("{:<9}", field.label()), label_style),
            Span::raw(app.contact.get(field).to_string()),
            Span::styled(cursor, Style::default().fg(BRAND_ORANGE)),
        ]));
        match app.field_error(field) {
            Some(message) => lines.push(Line::styled(
                format!("         {message}"),
                Style::default().fg(BRAND_RED),
            )),
            None => lines.push(Line::raw("")),
        }
    }

    let (status, style) = match &app.submit_state {
        SubmitState::Editing => (String::new(), Style::default()),
        SubmitState::Sending(_) => ("Sending...".to_string(), Style::default().fg(BRAND_MUTED)),
        SubmitState::Sent => (
            "Thanks! Your configuration has been sent.".to_string(),
            Style::default().fg(BRAND_GREEN),
        ),
        SubmitState::Failed(message) => (message.clone(), Style::default().fg(BRAND_RED)),
    };
    lines.push(Line::styled(status, style));
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        " Tab Next field | Enter Send | Esc Close ",
        Style::default().fg(BRAND_MUTED),
    ));

    frame.render_widget(Paragraph::new(lines), inner);
}
