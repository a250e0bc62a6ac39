//! Line-by-line message accumulation.
//!
//! The accumulator owns all state of one conversion run: the last date label
//! emitted, the message currently being built, and the fragments produced so
//! far. Fragments come out in the order they must appear on the page.

use tracing::debug;

use crate::core::{ChatMessage, Fragment, MessageHeader};
use crate::parse::{IconResolver, parse_header};

/// Header fields and text lines of the message still open for continuations.
#[derive(Debug)]
struct PendingMessage {
    header: MessageHeader,
    lines: Vec<String>,
}

#[derive(Debug)]
pub struct Accumulator<'a> {
    icons: &'a IconResolver,
    current_date: Option<String>,
    pending: Option<PendingMessage>,
    fragments: Vec<Fragment>,
    dropped_lines: usize,
}

impl<'a> Accumulator<'a> {
    pub fn new(icons: &'a IconResolver) -> Self {
        Accumulator {
            icons,
            current_date: None,
            pending: None,
            fragments: Vec::new(),
            dropped_lines: 0,
        }
    }

    /// Feed one raw line (line terminator already removed).
    pub fn push_line(&mut self, line: &str) {
        match parse_header(line) {
            Some(header) => self.start_message(header),
            None => match self.pending.as_mut() {
                Some(pending) => pending.lines.push(line.to_string()),
                None => {
                    self.dropped_lines += 1;
                    debug!(line, "dropping line before first message header");
                }
            },
        }
    }

    fn start_message(&mut self, mut header: MessageHeader) {
        self.flush();

        if self.current_date.as_deref() != Some(header.date.as_str()) {
            if self.current_date.is_some() {
                self.fragments.push(Fragment::Separator);
            }
            self.fragments.push(Fragment::DateLabel(header.date.clone()));
            self.current_date = Some(header.date.clone());
        }

        let first_line = std::mem::take(&mut header.first_line);
        self.pending = Some(PendingMessage {
            header,
            lines: vec![first_line],
        });
    }

    /// Finalize the open message into a bubble fragment. No-op when nothing is open.
    fn flush(&mut self) {
        let Some(PendingMessage { header, lines }) = self.pending.take() else {
            return;
        };
        debug!(
            date = %header.date,
            time = %header.time,
            sender = %header.sender,
            lines = lines.len(),
            "flushing message"
        );
        let icon = self.icons.icon_path(&header.sender);
        self.fragments.push(Fragment::Bubble(ChatMessage {
            date: header.date,
            time: header.time,
            sender: header.sender,
            icon,
            lines,
        }));
    }

    /// Number of continuation lines discarded because no message was open.
    pub fn dropped_lines(&self) -> usize {
        self.dropped_lines
    }

    /// Flush the last message and return every fragment in emission order.
    pub fn finish(mut self) -> Vec<Fragment> {
        self.flush();
        self.fragments
    }
}

/// Run a fresh accumulator over `lines` and return the resulting fragments.
pub fn accumulate<'l, I>(lines: I, icons: &IconResolver) -> Vec<Fragment>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut acc = Accumulator::new(icons);
    for line in lines {
        acc.push_line(line);
    }
    if acc.dropped_lines() > 0 {
        debug!(count = acc.dropped_lines(), "lines discarded before first header");
    }
    acc.finish()
}
