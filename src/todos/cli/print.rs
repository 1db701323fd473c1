use colored::{ColoredString, Colorize};
use todos::api::{CmdMessage, MessageLevel};
use todos::detail::route_for;
use todos::model::TodoItem;
use todos::theme::{Color, ColorScheme, Theme};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE_WIDTH: usize = 40;
const DONE_MARKER: &str = "[x]";
const OPEN_MARKER: &str = "[ ]";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(super) fn print_todos(todos: &[TodoItem], theme: &Theme) {
    if todos.is_empty() {
        println!("No todos yet. Add one with `todos add <title>`.");
        return;
    }

    for todo in todos {
        let title = truncate_to_width(&todo.title, TITLE_WIDTH);
        let padding = TITLE_WIDTH.saturating_sub(title.width());
        println!(
            "{} {}{} {}",
            marker(todo, theme),
            styled_title(&title, todo.completed, theme),
            " ".repeat(padding),
            format!("#{}", todo.id).dimmed()
        );
    }
}

pub(super) fn print_todo(todo: &TodoItem, theme: &Theme) {
    println!(
        "{} {}",
        marker(todo, theme),
        styled_title(&todo.title, todo.completed, theme)
    );
    println!("{}", route_for(todo.id).dimmed());
}

pub(super) fn print_theme(scheme: ColorScheme, theme: &Theme, from_system: bool) {
    let source = if from_system { " (system)" } else { "" };
    println!("Theme: {}{}", scheme.to_string().bold(), source);
    for (name, color) in [
        ("background", theme.background),
        ("text", theme.text),
        ("button", theme.button),
    ] {
        println!("  {:<10} {} {}", name, swatch(color), color);
    }
}

fn marker(todo: &TodoItem, theme: &Theme) -> ColoredString {
    let marker = if todo.completed {
        DONE_MARKER
    } else {
        OPEN_MARKER
    };
    paint(marker, theme.button)
}

fn styled_title(title: &str, completed: bool, theme: &Theme) -> ColoredString {
    if completed {
        title.dimmed().strikethrough()
    } else {
        paint(title, theme.text)
    }
}

fn paint(text: &str, color: Color) -> ColoredString {
    text.truecolor(color.r, color.g, color.b)
}

fn swatch(color: Color) -> ColoredString {
    "  ".on_truecolor(color.r, color.g, color.b)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
