//! Edit operations over a cast document.
//!
//! Every operation is a pure function: it borrows the input cast and returns
//! a new one that honors the timestamp ordering invariant. Parameter checks
//! that do not depend on the document live in [`EditOp::validate`] so an edit
//! script can be rejected up front, before any work is done.
//!
//! All operations are order-stable: events sharing a timestamp keep their
//! original relative order.

use crate::document::Cast;
use crate::error::RangeError;
use crate::event::{Event, EventData};

/// A single edit operation with strongly typed parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum EditOp {
    /// Keep only events in `start..=end`, re-zeroed so the window starts at
    /// time zero.
    Trim {
        /// Window start in seconds.
        start: f64,
        /// Window end in seconds (inclusive).
        end: f64,
    },
    /// Remove events in `start..end` and close the gap: everything at or
    /// after `end` moves left by the width of the window.
    Cut {
        /// Window start in seconds (inclusive).
        start: f64,
        /// Window end in seconds (exclusive).
        end: f64,
    },
    /// Move every event by a fixed offset, which may be negative.
    Shift {
        /// Seconds to add to every timestamp.
        offset: f64,
    },
    /// Insert another recording into the timeline. The other recording's
    /// first event lands at `at`; host events at or after `at` move right by
    /// the other recording's duration.
    Splice {
        /// The recording to insert.
        other: Cast,
        /// Insertion point in seconds.
        at: f64,
    },
    /// Insert an annotation marker without moving anything. A marker sharing
    /// a timestamp with existing events lands after them.
    InsertMarker {
        /// Marker position in seconds.
        at: f64,
        /// Marker label.
        label: String,
    },
    /// Scale playback speed; a factor of 2.0 plays twice as fast.
    SetSpeed {
        /// Speed multiplier, must be positive and finite.
        factor: f64,
    },
    /// Replace a substring in every output and input payload. Markers and
    /// resizes are left alone.
    Replace {
        /// Substring to search for.
        from: String,
        /// Replacement text.
        to: String,
    },
    /// Concatenate another recording after this one, preserving its internal
    /// spacing.
    Append {
        /// The recording to append.
        other: Cast,
    },
}

impl EditOp {
    /// Short human-readable description, used in pipeline errors.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Trim { start, end } => format!("trim {start}..{end}"),
            Self::Cut { start, end } => format!("cut {start}..{end}"),
            Self::Shift { offset } => format!("shift {offset:+}"),
            Self::Splice { at, .. } => format!("splice at {at}"),
            Self::InsertMarker { at, label } => format!("marker {label:?} at {at}"),
            Self::SetSpeed { factor } => format!("speed x{factor}"),
            Self::Replace { from, .. } => format!("replace {from:?}"),
            Self::Append { .. } => "append".to_string(),
        }
    }

    /// Check parameters that do not depend on the target document.
    pub fn validate(&self) -> Result<(), RangeError> {
        match *self {
            Self::Trim { start, end } | Self::Cut { start, end } => check_window(start, end),
            Self::Splice { at, .. } | Self::InsertMarker { at, .. } => {
                if at < 0.0 {
                    Err(RangeError::NegativePoint { at })
                } else {
                    Ok(())
                }
            }
            Self::SetSpeed { factor } => {
                if factor > 0.0 && factor.is_finite() {
                    Ok(())
                } else {
                    Err(RangeError::InvalidSpeed { factor })
                }
            }
            Self::Shift { .. } | Self::Replace { .. } | Self::Append { .. } => Ok(()),
        }
    }

    /// Apply this operation to a cast, producing a new cast.
    pub fn apply(&self, cast: &Cast) -> Result<Cast, RangeError> {
        self.validate()?;
        let out = match self {
            Self::Trim { start, end } => trim(cast, *start, *end),
            Self::Cut { start, end } => cut(cast, *start, *end),
            Self::Shift { offset } => shift(cast, *offset)?,
            Self::Splice { other, at } => splice(cast, other, *at)?,
            Self::InsertMarker { at, label } => insert_marker(cast, *at, label),
            Self::SetSpeed { factor } => set_speed(cast, *factor),
            Self::Replace { from, to } => replace(cast, from, to),
            Self::Append { other } => {
                let mut out = cast.clone();
                out.append(other);
                out
            }
        };
        debug_assert!(out.is_sorted());
        Ok(out)
    }
}

fn check_window(start: f64, end: f64) -> Result<(), RangeError> {
    if start < 0.0 {
        return Err(RangeError::NegativeStart { start });
    }
    if start > end {
        return Err(RangeError::InvertedRange { start, end });
    }
    Ok(())
}

fn trim(cast: &Cast, start: f64, end: f64) -> Cast {
    let events = cast
        .events
        .iter()
        .filter(|e| e.time >= start && e.time <= end)
        .map(|e| e.at(e.time - start))
        .collect();
    Cast {
        header: cast.header.clone(),
        events,
    }
}

fn cut(cast: &Cast, start: f64, end: f64) -> Cast {
    let width = end - start;
    let events = cast
        .events
        .iter()
        .filter(|e| e.time < start || e.time >= end)
        .map(|e| {
            if e.time >= end {
                e.at(e.time - width)
            } else {
                e.clone()
            }
        })
        .collect();
    Cast {
        header: cast.header.clone(),
        events,
    }
}

fn shift(cast: &Cast, offset: f64) -> Result<Cast, RangeError> {
    // The first event has the smallest timestamp, so it alone decides
    // whether the shift stays non-negative.
    if let Some(first) = cast.events.first()
        && first.time + offset < 0.0
    {
        return Err(RangeError::NegativeTimestamp {
            offset,
            time: first.time,
        });
    }
    let events = cast.events.iter().map(|e| e.at(e.time + offset)).collect();
    Ok(Cast {
        header: cast.header.clone(),
        events,
    })
}

fn splice(cast: &Cast, other: &Cast, at: f64) -> Result<Cast, RangeError> {
    let duration = cast.duration();
    if at > duration {
        return Err(RangeError::PastEnd { at, duration });
    }
    if other.events.is_empty() {
        return Ok(cast.clone());
    }

    let width = other.duration();
    let anchor = at - other.first_time();
    let split = cast.events.partition_point(|e| e.time < at);

    let mut events = Vec::with_capacity(cast.events.len() + other.events.len());
    events.extend(cast.events[..split].iter().cloned());
    events.extend(other.events.iter().map(|e| e.at(e.time + anchor)));
    events.extend(cast.events[split..].iter().map(|e| e.at(e.time + width)));
    Ok(Cast {
        header: cast.header.clone(),
        events,
    })
}

fn insert_marker(cast: &Cast, at: f64, label: &str) -> Cast {
    let mut out = cast.clone();
    let index = out.events.partition_point(|e| e.time <= at);
    out.events.insert(index, Event::marker(at, label));
    out
}

fn set_speed(cast: &Cast, factor: f64) -> Cast {
    let events = cast.events.iter().map(|e| e.at(e.time / factor)).collect();
    Cast {
        header: cast.header.clone(),
        events,
    }
}

fn replace(cast: &Cast, from: &str, to: &str) -> Cast {
    let events = cast
        .events
        .iter()
        .map(|e| {
            let data = match &e.data {
                EventData::Output(text) => EventData::Output(text.replace(from, to)),
                EventData::Input(text) => EventData::Input(text.replace(from, to)),
                other => other.clone(),
            };
            Event { time: e.time, data }
        })
        .collect();
    Cast {
        header: cast.header.clone(),
        events,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::Header;

    fn abc() -> Cast {
        let mut cast = Cast::new(Header::new(80, 24));
        cast.push(Event::output(0.0, "a"));
        cast.push(Event::output(1.0, "b"));
        cast.push(Event::output(2.0, "c"));
        cast
    }

    #[test]
    fn trim_keeps_window_and_rezeroes() {
        let out = EditOp::Trim {
            start: 1.0,
            end: 2.0,
        }
        .apply(&abc())
        .unwrap();

        assert_eq!(out.events.len(), 2);
        assert_eq!(out.events[0].time, 0.0);
        assert_eq!(out.events[0].data, EventData::Output("b".to_string()));
        assert_eq!(out.events[1].time, 1.0);
    }

    #[test]
    fn trim_full_range_is_identity() {
        let cast = abc();
        let out = EditOp::Trim {
            start: 0.0,
            end: cast.duration(),
        }
        .apply(&cast)
        .unwrap();
        assert_eq!(out, cast);
    }

    #[test]
    fn trim_rejects_inverted_window() {
        let err = EditOp::Trim {
            start: 2.0,
            end: 1.0,
        }
        .apply(&abc())
        .unwrap_err();
        assert_eq!(
            err,
            RangeError::InvertedRange {
                start: 2.0,
                end: 1.0
            }
        );
    }

    #[test]
    fn trim_rejects_negative_start() {
        let err = EditOp::Trim {
            start: -1.0,
            end: 1.0,
        }
        .apply(&abc())
        .unwrap_err();
        assert_eq!(err, RangeError::NegativeStart { start: -1.0 });
    }

    #[test]
    fn cut_closes_the_gap() {
        let out = EditOp::Cut {
            start: 0.0,
            end: 1.0,
        }
        .apply(&abc())
        .unwrap();

        assert_eq!(out.events.len(), 2);
        assert_eq!(out.events[0].time, 0.0);
        assert_eq!(out.events[0].data, EventData::Output("b".to_string()));
        assert_eq!(out.events[1].time, 1.0);
    }

    #[test]
    fn cut_is_half_open() {
        // the event exactly at `end` survives and shifts
        let out = EditOp::Cut {
            start: 0.5,
            end: 2.0,
        }
        .apply(&abc())
        .unwrap();

        assert_eq!(out.events.len(), 2);
        assert_eq!(out.events[1].time, 0.5);
        assert_eq!(out.events[1].data, EventData::Output("c".to_string()));
    }

    #[test]
    fn shift_moves_everything() {
        let out = EditOp::Shift { offset: 0.25 }.apply(&abc()).unwrap();
        assert_eq!(out.events[0].time, 0.25);
        assert_eq!(out.events[2].time, 2.25);
    }

    #[test]
    fn shift_rejects_negative_result() {
        let mut cast = Cast::new(Header::new(80, 24));
        cast.push(Event::output(3.0, "x"));

        let err = EditOp::Shift { offset: -5.0 }.apply(&cast).unwrap_err();
        assert_eq!(
            err,
            RangeError::NegativeTimestamp {
                offset: -5.0,
                time: 3.0
            }
        );
    }

    #[test]
    fn splice_shifts_the_tail() {
        let mut insert = Cast::new(Header::new(80, 24));
        insert.push(Event::output(0.0, "x"));
        insert.push(Event::output(0.5, "y"));

        let out = EditOp::Splice {
            other: insert,
            at: 1.0,
        }
        .apply(&abc())
        .unwrap();

        assert!(out.is_sorted());
        assert_eq!(out.events.len(), 5);
        assert_eq!(out.output_text(), "axybc");
        // host events at or after the splice point move right by 0.5
        assert_eq!(out.events[3].time, 1.5);
        assert_eq!(out.events[4].time, 2.5);
    }

    #[test]
    fn splice_reanchors_the_insert() {
        // inserted events keep their spacing but start at `at`
        let mut insert = Cast::new(Header::new(80, 24));
        insert.push(Event::output(2.0, "x"));
        insert.push(Event::output(2.5, "y"));

        let out = EditOp::Splice {
            other: insert,
            at: 0.0,
        }
        .apply(&abc())
        .unwrap();

        assert_eq!(out.events[0].time, 0.0);
        assert_eq!(out.events[1].time, 0.5);
        assert!(out.is_sorted());
    }

    #[test]
    fn splice_past_end_is_rejected() {
        let err = EditOp::Splice {
            other: abc(),
            at: 10.0,
        }
        .apply(&abc())
        .unwrap_err();
        assert_eq!(
            err,
            RangeError::PastEnd {
                at: 10.0,
                duration: 2.0
            }
        );
    }

    #[test]
    fn splice_of_empty_cast_is_identity() {
        let cast = abc();
        let out = EditOp::Splice {
            other: Cast::new(Header::default()),
            at: 1.0,
        }
        .apply(&cast)
        .unwrap();
        assert_eq!(out, cast);
    }

    #[test]
    fn insert_marker_shifts_nothing() {
        let out = EditOp::InsertMarker {
            at: 1.0,
            label: "here".to_string(),
        }
        .apply(&abc())
        .unwrap();

        assert_eq!(out.events.len(), 4);
        assert_eq!(out.duration(), 2.0);
        // lands after the existing event at the same timestamp
        assert_eq!(out.events[2].data, EventData::Marker("here".to_string()));
    }

    #[test]
    fn insert_marker_rejects_negative_point() {
        let err = EditOp::InsertMarker {
            at: -0.5,
            label: "no".to_string(),
        }
        .apply(&abc())
        .unwrap_err();
        assert_eq!(err, RangeError::NegativePoint { at: -0.5 });
    }

    #[test]
    fn set_speed_divides_timestamps() {
        let out = EditOp::SetSpeed { factor: 2.0 }.apply(&abc()).unwrap();
        assert_eq!(out.events[1].time, 0.5);
        assert_eq!(out.duration(), 1.0);
    }

    #[test]
    fn set_speed_rejects_zero() {
        let err = EditOp::SetSpeed { factor: 0.0 }.apply(&abc()).unwrap_err();
        assert_eq!(err, RangeError::InvalidSpeed { factor: 0.0 });
    }

    #[test]
    fn replace_touches_output_and_input_only() {
        let mut cast = Cast::new(Header::new(80, 24));
        cast.push(Event::output(0.0, "secret hostname"));
        cast.push(Event::input(0.5, "ssh secret\n"));
        cast.push(Event::marker(1.0, "secret"));

        let out = EditOp::Replace {
            from: "secret".to_string(),
            to: "redacted".to_string(),
        }
        .apply(&cast)
        .unwrap();

        assert_eq!(out.output_text(), "redacted hostname");
        assert_eq!(out.input_text(), "ssh redacted\n");
        assert_eq!(out.markers(), vec![(1.0, "secret")]);
    }

    #[test]
    fn append_preserves_leading_gap() {
        let mut tail = Cast::new(Header::new(80, 24));
        tail.push(Event::output(1.5, "later"));

        let out = EditOp::Append { other: tail }.apply(&abc()).unwrap();
        assert_eq!(out.events.len(), 4);
        assert_eq!(out.duration(), 3.5);
    }

    #[test]
    fn operations_do_not_mutate_the_input() {
        let cast = abc();
        let before = cast.clone();
        let _ = EditOp::Cut {
            start: 0.0,
            end: 1.0,
        }
        .apply(&cast)
        .unwrap();
        assert_eq!(cast, before);
    }
}
