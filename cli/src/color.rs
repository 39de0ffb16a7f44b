use minesweeper_core::Glyph;
use minesweeper_core::render::Decorator;
use std::fmt::Write;

const RESET: &str = "\x1b[0m";

/// Colors glyphs with ANSI SGR escapes, anything that is not a glyph passes through.
#[derive(Copy, Clone, Debug, Default)]
pub struct AnsiDecorator;

impl AnsiDecorator {
    fn style(glyph: Glyph) -> &'static str {
        use Glyph::*;
        match glyph {
            Flag => "\x1b[1;33m",
            Hidden => "\x1b[2m",
            Mine => "\x1b[1;31m",
            Empty => "\x1b[2;37m",
            Count(1) => "\x1b[34m",
            Count(2) => "\x1b[32m",
            Count(3) => "\x1b[31m",
            Count(4) => "\x1b[35m",
            Count(5) => "\x1b[33m",
            Count(6) => "\x1b[36m",
            Count(7) => "\x1b[1;30m",
            Count(_) => "\x1b[37m",
        }
    }
}

impl Decorator for AnsiDecorator {
    fn decorate(&self, row: &str) -> String {
        let mut out = String::with_capacity(row.len() * 4);
        for ch in row.chars() {
            match Glyph::from_char(ch) {
                Some(glyph) => {
                    let _ = write!(out, "{}{ch}{RESET}", Self::style(glyph));
                }
                None => out.push(ch),
            }
        }
        out
    }
}
