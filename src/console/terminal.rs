//! Console backed by stdin/stdout

use super::{Console, Event};
use crate::output::print_event;
use std::io::{self, BufRead, Write};

/// Interactive terminal console
///
/// Blocks on stdin for every read; there is no timeout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Terminal;

impl Console for Terminal {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        let read = io::stdin().lock().read_line(&mut input)?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(input.trim().to_string()))
    }

    fn announce(&mut self, event: &Event) {
        print_event(event);
    }
}
