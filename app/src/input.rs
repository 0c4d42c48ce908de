use rusty_hub::{Formatting, Text, text::CODE_PREFIX};

/// Prefix users type instead of `§`.
const TYPED_PREFIX: char = '&';

/// One line of relay input.
#[derive(Debug, PartialEq)]
pub enum Command {
    /// Deliver as a game (chat) message.
    Game(Text),
    /// Deliver as an overlay message.
    Overlay(Text),
    /// Print listener counts per channel.
    Listeners,
    Quit,
    Empty,
}

pub fn parse(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Command::Empty;
    }
    match line.split_once(' ') {
        Some(("/overlay", rest)) => Command::Overlay(Text::literal(translate_codes(rest))),
        _ => match line.trim() {
            "/overlay" => Command::Overlay(Text::empty()),
            "/listeners" => Command::Listeners,
            "/quit" | "/exit" => Command::Quit,
            _ => Command::Game(Text::literal(translate_codes(line))),
        },
    }
}

/// Turns `&` followed by a code character into `§`; every other `&` is kept.
pub fn translate_codes(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&next) if c == TYPED_PREFIX && Formatting::is_code(next) => out.push(CODE_PREFIX),
            _ => out.push(c),
        }
    }
    out
}
