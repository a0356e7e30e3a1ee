//! Post-processing of model answers for display.

use std::time::Duration;

const FINAL_ANSWER_MARKER: &str = "Final Answer:";

/// Strip ReAct-style reasoning that precedes a `Final Answer:` marker.
///
/// Only the text after the first marker is kept, trimmed. Answers without
/// the marker are returned unchanged.
pub fn strip_final_answer(answer: &str) -> &str {
    match answer.split_once(FINAL_ANSWER_MARKER) {
        Some((_, rest)) => rest.trim(),
        None => answer,
    }
}

/// Render elapsed thinking time as `Thought for 1 minute, 5 seconds`.
///
/// Returns an empty string for a zero duration.
pub fn format_thought_duration(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    if elapsed.is_zero() {
        return String::new();
    }

    let minutes = total / 60;
    let seconds = total % 60;
    let mut out = String::from("Thought for ");

    if minutes > 0 {
        out.push_str(&plural(minutes, "minute"));
        if seconds > 0 {
            out.push_str(", ");
        }
    }
    if seconds > 0 || minutes == 0 {
        // Sub-second runs still report "0 seconds"
        out.push_str(&plural(seconds, "second"));
    }
    out
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}
