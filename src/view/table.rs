use super::form::{Field, TransactionForm};
use super::snapshot::{LedgerSnapshot, RowStyle};
use ratatui::{
    prelude::{Alignment, Color, Constraint, Direction, Layout, Modifier, Rect, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState, Wrap},
};

/// Status line shown under the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Hint,
    Info(String),
    Error(String),
}

fn bold() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

pub fn row_style(style: RowStyle) -> Style {
    match style {
        RowStyle::Income => Style::default().fg(Color::Green),
        RowStyle::Expense => Style::default().fg(Color::Red),
        RowStyle::Plain => Style::default(),
    }
}

/// Splits the screen into form, table, total and footer areas.
pub fn screen_layout(area: Rect) -> [Rect; 4] {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(5),
            Constraint::Length(3),
            Constraint::Length(3),
        ])
        .split(area);
    [layout[0], layout[1], layout[2], layout[3]]
}

pub fn render_form(frame: &mut ratatui::Frame, area: Rect, form: &TransactionForm) {
    let lines: Vec<Line> = Field::ALL
        .iter()
        .map(|&field| {
            let focused = form.focus() == field;
            let marker = if focused { "> " } else { "  " };
            let value_style = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default()
            };
            Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<12}", field.label()), bold()),
                Span::styled(form.value(field).to_string(), value_style),
            ])
        })
        .collect();

    let block = Block::default()
        .title("New transaction")
        .borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn render_table(
    frame: &mut ratatui::Frame,
    area: Rect,
    snapshot: &LedgerSnapshot,
    table_state: &mut TableState,
) {
    let block = Block::default().title("Transactions").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = Row::new([
        Cell::from("Id").style(bold()),
        Cell::from("Date").style(bold()),
        Cell::from("Amount").style(bold()),
        Cell::from("Category").style(bold()),
        Cell::from("Description").style(bold()),
    ])
    .style(Style::default().fg(Color::White));

    let rows = snapshot.rows.iter().map(|row| {
        let mut id_short = row.id.clone();
        id_short.truncate(8);
        Row::new([
            Cell::from(id_short),
            Cell::from(row.timestamp.clone()),
            Cell::from(row.amount.clone()),
            Cell::from(row.category.clone()),
            Cell::from(row.description.clone()),
        ])
        .style(row_style(row.style))
    });

    let widths = [
        Constraint::Length(8),
        Constraint::Length(19),
        Constraint::Length(12),
        Constraint::Length(14),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(bold().bg(Color::DarkGray))
        .highlight_symbol("➤ ")
        .column_spacing(1);

    frame.render_stateful_widget(table, inner, table_state);

    if snapshot.is_empty() {
        let empty = Paragraph::new("No transactions yet")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
    }
}

pub fn render_total(
    frame: &mut ratatui::Frame,
    area: Rect,
    snapshot: &LedgerSnapshot,
    label: &str,
) {
    let color = if snapshot.total < 0.0 {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(Span::styled(snapshot.total_line(label), bold().fg(color))).block(block),
        area,
    );
}

pub fn render_footer(frame: &mut ratatui::Frame, area: Rect, status: &Status) {
    let line = match status {
        Status::Hint => Line::from(
            "Tab/Shift+Tab field  Enter add  ↑/↓ select  Del delete selected  Esc exit",
        ),
        Status::Info(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        )),
        Status::Error(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
    };

    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true }),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LedgerStore;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|line| line.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(snapshot: &LedgerSnapshot) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).expect("terminal");
        let mut table_state = TableState::default();
        let form = TransactionForm::default();
        terminal
            .draw(|frame| {
                let [form_area, table_area, total_area, footer_area] = screen_layout(frame.area());
                render_form(frame, form_area, &form);
                render_table(frame, table_area, snapshot, &mut table_state);
                render_total(frame, total_area, snapshot, "Total: ");
                render_footer(frame, footer_area, &Status::Hint);
            })
            .expect("draw");
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_initial_render_shows_empty_table_and_zero_total() {
        let buffer = draw(&LedgerSnapshot::capture(&LedgerStore::new()));
        let text = buffer_text(&buffer);
        assert!(text.contains("No transactions yet"));
        assert!(text.contains("Total: 0.00"));
        assert!(text.contains("Amount"));
    }

    #[test]
    fn test_rows_are_rendered_with_category_styles() {
        let mut store = LedgerStore::new();
        store.add(100.0, "income", "salary").expect("add failed");
        store.add(40.0, "expense", "groceries").expect("add failed");
        store.add(10.0, "transfer", "internal").expect("add failed");

        let buffer = draw(&LedgerSnapshot::capture(&store));
        let text = buffer_text(&buffer);
        assert!(text.contains("salary"));
        assert!(text.contains("groceries"));
        assert!(text.contains("internal"));
        assert!(text.contains("Total: 60.00"));

        let width = buffer.area.width as usize;
        let color_of = |needle: &str| {
            let (row, line) = text
                .lines()
                .enumerate()
                .find(|(_, line)| line.contains(needle))
                .expect("row rendered");
            let byte_col = line.find(needle).expect("needle");
            let col = line[..byte_col].chars().count();
            buffer.content()[row * width + col].fg
        };
        assert_eq!(color_of("salary"), Color::Green);
        assert_eq!(color_of("groceries"), Color::Red);
        assert_eq!(color_of("internal"), Color::Reset);
    }

    #[test]
    fn test_row_style_mapping() {
        assert_eq!(row_style(RowStyle::Income).fg, Some(Color::Green));
        assert_eq!(row_style(RowStyle::Expense).fg, Some(Color::Red));
        assert_eq!(row_style(RowStyle::Plain), Style::default());
    }
}
