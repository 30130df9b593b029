//! User-facing messages. Status lines share one prefix helper; color only on a TTY.

use owo_colors::{OwoColorize, Style};

#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

impl Stream {
    fn is_tty(self) -> bool {
        match self {
            Stream::Out => atty::is(atty::Stream::Stdout),
            Stream::Err => atty::is(atty::Stream::Stderr),
        }
    }
}

fn prefix(label: &str, style: Style, color: bool) -> String {
    if color {
        label.style(style).to_string()
    } else {
        label.to_owned()
    }
}

fn emit(stream: Stream, label: &str, style: Style, msg: &str) {
    let p = prefix(label, style, stream.is_tty());
    match stream {
        Stream::Out => println!("{p} {msg}"),
        Stream::Err => eprintln!("{p} {msg}"),
    }
}

pub fn print_info(msg: &str) {
    emit(Stream::Out, "info:", Style::new().cyan().bold(), msg);
}

pub fn print_warn(msg: &str) {
    emit(Stream::Err, "warn:", Style::new().yellow().bold(), msg);
}

pub fn print_error(msg: &str) {
    emit(Stream::Err, "error:", Style::new().red().bold(), msg);
}

pub fn print_success(msg: &str) {
    emit(Stream::Out, "ok:", Style::new().green().bold(), msg);
}

/// Result line for scripts ("Created: <name>"): never prefixed or colored.
pub fn print_user(msg: &str) {
    println!("{msg}");
}
