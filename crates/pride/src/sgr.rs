// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SGR (Select Graphic Rendition) escape sequences.
//!
//! References:
//! - ECMA-48, Control Functions for Coded Character Sets
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code>

use std::borrow::Cow;

/// Escape byte that opens every SGR sequence.
pub const ESC: char = '\x1b';

macro_rules! sgr {
    ($($name:ident = $code:literal;)*) => {
        $(pub const $name: &str = concat!("\x1b[", $code, "m");)*
    };
}

sgr! {
    RESET = "0";
    BOLD = "1";
    FAINT = "2";
    ITALICIZED = "3";
    UNDERLINED = "4";
    BLINK = "5";
    BLINK_RAPID = "6";
    INVERSE = "7";
    INVISIBLE = "8";
    CROSSED_OUT = "9";
    DOUBLY_UNDERLINED = "21";
    NORMAL = "22";
    NOT_ITALICIZED = "23";
    NOT_UNDERLINED = "24";
    STEADY = "25";
    POSITIVE = "27";
    VISIBLE = "28";
    NOT_CROSSED_OUT = "29";

    BLACK = "30";
    RED = "31";
    GREEN = "32";
    YELLOW = "33";
    BLUE = "34";
    MAGENTA = "35";
    CYAN = "36";
    WHITE = "37";
    DEFAULT = "39";

    BACKGROUND_BLACK = "40";
    BACKGROUND_RED = "41";
    BACKGROUND_GREEN = "42";
    BACKGROUND_YELLOW = "43";
    BACKGROUND_BLUE = "44";
    BACKGROUND_MAGENTA = "45";
    BACKGROUND_CYAN = "46";
    BACKGROUND_WHITE = "47";
    BACKGROUND_DEFAULT = "49";

    // aixterm bright variants
    LIGHT_BLACK = "90";
    LIGHT_RED = "91";
    LIGHT_GREEN = "92";
    LIGHT_YELLOW = "93";
    LIGHT_BLUE = "94";
    LIGHT_MAGENTA = "95";
    LIGHT_CYAN = "96";
    LIGHT_WHITE = "97";

    BACKGROUND_LIGHT_BLACK = "100";
    BACKGROUND_LIGHT_RED = "101";
    BACKGROUND_LIGHT_GREEN = "102";
    BACKGROUND_LIGHT_YELLOW = "103";
    BACKGROUND_LIGHT_BLUE = "104";
    BACKGROUND_LIGHT_MAGENTA = "105";
    BACKGROUND_LIGHT_CYAN = "106";
    BACKGROUND_LIGHT_WHITE = "107";
}

/// 256-color foreground sequence.
pub fn fg_256(index: u8) -> String {
    format!("\x1b[38;5;{index}m")
}

/// 256-color background sequence.
pub fn bg_256(index: u8) -> String {
    format!("\x1b[48;5;{index}m")
}

/// Remove every SGR sequence from `s`.
///
/// A sequence runs from `ESC` up to and including the next `m`. An unterminated
/// sequence swallows the rest of the input.
pub fn strip(s: &str) -> Cow<'_, str> {
    if !s.contains(ESC) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len());
    let mut in_sequence = false;
    for c in s.chars() {
        if in_sequence {
            if c == 'm' {
                in_sequence = false;
            }
        } else if c == ESC {
            in_sequence = true;
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
#[path = "sgr_tests.rs"]
mod tests;
