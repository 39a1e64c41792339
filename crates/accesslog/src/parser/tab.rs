use crate::parser::date::parse_timestamp;
use crate::parser::traits::*;
use crate::parser::model::{Event, Status};
use crate::parser::{FIELD_COUNT, MAX_LINE_SIZE};

/// Task events carry their id in the same field, e.g. `SOLVE_TASK 42`.
/// Containment is checked in this order before exact-name lookup.
const TASK_EVENTS: [(&str, Event); 2] = [
    ("SOLVE_TASK", Event::SolveTask),
    ("DONE_TASK", Event::DoneTask),
];

/// Decoder for `origin \t actor \t timestamp \t event[ task] \t outcome` lines.
#[derive(Debug, Clone)]
pub struct TabLineDecoder {
    max_line_size: usize,
}

impl TabLineDecoder {
    pub fn new(max_line_size: usize) -> Self {
        Self { max_line_size }
    }
}

impl Default for TabLineDecoder {
    fn default() -> Self {
        Self::new(MAX_LINE_SIZE)
    }
}

impl LineDecoder for TabLineDecoder {
    fn decode(&self, line: &str) -> Result<Record, DecodeError> {
        if line.len() > self.max_line_size {
            return Err(DecodeError::LineTooLarge(line.len(), self.max_line_size));
        }

        let mut fields: Vec<&str> = line.split('\t').collect();
        // Trailing empty fields do not count toward the field total.
        while fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        let [origin, actor, timestamp, event, outcome] = fields.as_slice() else {
            return Err(DecodeError::FieldCount {
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        };

        let (event, task_id) = decode_event(event)?;

        Ok(Record::new(
            *origin,
            *actor,
            parse_timestamp(timestamp),
            event,
            task_id,
            Status::from_name(outcome).unwrap_or(Status::Unknown),
        ))
    }
}

fn decode_event(text: &str) -> Result<(Event, Option<i32>), DecodeError> {
    for (token, event) in TASK_EVENTS {
        if text.contains(token) {
            let digits: String = text
                .replace(token, "")
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            let task = digits
                .parse::<i32>()
                .map_err(|_| DecodeError::MalformedTaskId(text.to_string()))?;
            return Ok((event, Some(task)));
        }
    }

    Ok((Event::from_name(text).unwrap_or(Event::Unknown), None))
}
