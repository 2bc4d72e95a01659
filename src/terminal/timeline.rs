use crate::terminal::category::classify;
use crate::terminal::output::{OutputLine, Severity, simulate};

/// Layout and pacing knobs for [`Compositor`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimelineOptions {
    /// Milliseconds per typed character. Must be finite and > 0.
    pub typing_speed_ms: f64,
    /// Baseline of the first prompt line.
    pub start_y: f64,
    /// Vertical advance per printed line.
    pub line_height: f64,
    /// Extra vertical gap after each command block.
    pub command_gap: f64,
    /// Prefix typed before every command.
    pub prompt: String,
    /// Pause between the last typed character and the first output line.
    pub typing_pause_secs: f64,
    /// Pause after the last output line of a command.
    pub output_pause_secs: f64,
    /// Pause after a command that prints nothing.
    pub silent_pause_secs: f64,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            typing_speed_ms: 50.0,
            start_y: 70.0,
            line_height: 20.0,
            command_gap: 10.0,
            prompt: "$ ".to_owned(),
            typing_pause_secs: 0.3,
            output_pause_secs: 0.5,
            silent_pause_secs: 0.8,
        }
    }
}

/// What a [`TimelineEvent`] reveals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// One typed character of a prompt line.
    CharReveal,
    /// One whole line of command output.
    LineReveal,
}

/// A single reveal scheduled on the global clock.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TimelineEvent {
    /// Char or line reveal.
    pub kind: EventKind,
    /// The character (char reveals) or full line text (line reveals).
    pub content: String,
    /// Output severity; `None` for typed characters.
    pub severity: Option<Severity>,
    /// Absolute reveal time in seconds from the start of the animation.
    pub time_secs: f64,
    /// Baseline of the line the content belongs to.
    pub y: f64,
    /// Index of the source command.
    pub command_index: usize,
    /// Character column within the prompt line; 0 for line reveals.
    pub column: usize,
}

/// Result of composing a command list.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct Timeline {
    /// Events in emission order.
    pub events: Vec<TimelineEvent>,
    /// Cursor baseline after the last command block.
    pub final_cursor_y: f64,
    /// Clock value after the last command.
    pub total_duration_secs: f64,
}

impl Timeline {
    /// When the idle cursor should start blinking: once every command has finished.
    pub fn cursor_blink_at(&self) -> f64 {
        self.total_duration_secs
    }

    /// Events derived from the `command_index`-th command, in emission order.
    pub fn events_for(&self, command_index: usize) -> impl Iterator<Item = &TimelineEvent> {
        self.events
            .iter()
            .filter(move |e| e.command_index == command_index)
    }

    /// Character width of the widest visible line, prompt lines included.
    pub fn widest_line_chars(&self) -> usize {
        let mut widest = 0usize;
        for e in &self.events {
            let width = match e.kind {
                EventKind::CharReveal => e.column + 1,
                EventKind::LineReveal => e.content.chars().count(),
            };
            widest = widest.max(width);
        }
        widest
    }

    /// Height needed to show every line plus `padding` below the final cursor.
    pub fn content_height(&self, padding: f64) -> f64 {
        self.final_cursor_y + padding
    }

    /// `true` when no events were produced.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// A prompt line typed at a fixed rate.
#[derive(Clone, Debug, PartialEq)]
pub struct TypingRun {
    /// Prompt plus command text.
    pub text: String,
    /// Seconds between consecutive characters.
    pub per_char_delay_secs: f64,
    /// Clock value of the first character.
    pub start_secs: f64,
}

impl TypingRun {
    /// Number of characters typed.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// `true` for an empty line.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Time spent typing the whole line.
    pub fn duration_secs(&self) -> f64 {
        self.len() as f64 * self.per_char_delay_secs
    }

    /// One char reveal per character, stamped `start + column * delay`.
    pub fn events(&self, command_index: usize, y: f64) -> impl Iterator<Item = TimelineEvent> + '_ {
        self.text.chars().enumerate().map(move |(column, ch)| TimelineEvent {
            kind: EventKind::CharReveal,
            content: ch.to_string(),
            severity: None,
            time_secs: self.start_secs + column as f64 * self.per_char_delay_secs,
            y,
            command_index,
            column,
        })
    }
}

/// Running clock and vertical cursor threaded through composition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cursor {
    /// Global clock in seconds.
    pub clock: f64,
    /// Baseline of the next line.
    pub y: f64,
}

/// Events and end state produced by one command.
#[derive(Clone, Debug, PartialEq)]
pub struct CommandBlock {
    /// Char reveals followed by line reveals.
    pub events: Vec<TimelineEvent>,
    /// Cursor after the block, gap included.
    pub cursor: Cursor,
}

/// Folds a command list into a [`Timeline`].
#[derive(Clone, Debug, Default)]
pub struct Compositor {
    options: TimelineOptions,
}

impl Compositor {
    /// Build a compositor. A non-finite or non-positive typing speed falls back to the default.
    pub fn new(mut options: TimelineOptions) -> Self {
        if !options.typing_speed_ms.is_finite() || options.typing_speed_ms <= 0.0 {
            let fallback = TimelineOptions::default().typing_speed_ms;
            tracing::warn!(
                requested = options.typing_speed_ms,
                fallback,
                "typing speed must be > 0; using default"
            );
            options.typing_speed_ms = fallback;
        }
        Self { options }
    }

    /// Options in effect.
    pub fn options(&self) -> &TimelineOptions {
        &self.options
    }

    /// Cursor before the first command.
    pub fn start(&self) -> Cursor {
        Cursor {
            clock: 0.0,
            y: self.options.start_y,
        }
    }

    /// Lay out a single command starting at `cursor`, using its simulated output.
    pub fn block(&self, cursor: Cursor, command_index: usize, command: &str) -> CommandBlock {
        let output = simulate(command, classify(command));
        self.block_with_output(cursor, command_index, command, &output)
    }

    /// Lay out a single command with caller-supplied output lines.
    pub fn block_with_output(
        &self,
        cursor: Cursor,
        command_index: usize,
        command: &str,
        output: &[OutputLine],
    ) -> CommandBlock {
        let opts = &self.options;
        let run = TypingRun {
            text: format!("{}{}", opts.prompt, command),
            per_char_delay_secs: opts.typing_speed_ms / 1000.0,
            start_secs: cursor.clock,
        };
        let mut events: Vec<TimelineEvent> = run.events(command_index, cursor.y).collect();
        let mut y = cursor.y + opts.line_height;
        let output_start = cursor.clock + run.duration_secs() + opts.typing_pause_secs;

        for line in output {
            if !line.is_blank() {
                events.push(TimelineEvent {
                    kind: EventKind::LineReveal,
                    content: line.text.clone(),
                    severity: Some(line.severity),
                    time_secs: output_start + line.delay_secs,
                    y,
                    command_index,
                    column: 0,
                });
            }
            y += opts.line_height;
        }

        let clock = match output.iter().map(|l| l.delay_secs).reduce(f64::max) {
            Some(last) => output_start + last + opts.output_pause_secs,
            None => output_start + opts.silent_pause_secs,
        };
        CommandBlock {
            events,
            cursor: Cursor {
                clock,
                y: y + opts.command_gap,
            },
        }
    }

    /// Compose `commands` in order. Never fails; an empty list yields an empty timeline.
    #[tracing::instrument(skip_all, fields(commands = commands.len()))]
    pub fn compose<S: AsRef<str>>(&self, commands: &[S]) -> Timeline {
        let (cursor, events) = commands.iter().enumerate().fold(
            (self.start(), Vec::new()),
            |(cursor, mut events), (index, command)| {
                let block = self.block(cursor, index, command.as_ref());
                events.extend(block.events);
                (block.cursor, events)
            },
        );
        tracing::debug!(
            events = events.len(),
            duration = cursor.clock,
            "composed terminal timeline"
        );
        Timeline {
            events,
            final_cursor_y: cursor.y,
            total_duration_secs: cursor.clock,
        }
    }
}

/// Compose with default layout and the given typing speed and first baseline.
pub fn compose<S: AsRef<str>>(commands: &[S], typing_speed_ms: f64, start_y: f64) -> Timeline {
    Compositor::new(TimelineOptions {
        typing_speed_ms,
        start_y,
        ..TimelineOptions::default()
    })
    .compose(commands)
}

#[cfg(test)]
#[path = "../../tests/unit/terminal/timeline.rs"]
mod tests;
