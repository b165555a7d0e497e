//! Status-line summary of long lines in a buffer

use crate::model::host::{BufferId, EditorHost};

/// Lines wider than the buffer's width limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongLineStats {
    /// Number of lines wider than the limit
    pub count: usize,
    /// Display width of the widest line
    pub max_width: usize,
    /// First long line (0-indexed)
    pub first_line: usize,
}

/// Scan `buffer` for lines wider than its width limit
///
/// Returns `None` when the buffer has no limit or no line exceeds it. Cost is
/// linear in the buffer size, so callers should only run it on redraw.
pub fn long_line_stats<H: EditorHost>(host: &H, buffer: BufferId) -> Option<LongLineStats> {
    let limit = usize::try_from(host.buffer_width_limit(buffer))
        .ok()
        .filter(|limit| *limit > 0)?;

    let mut stats: Option<LongLineStats> = None;
    for line in 0..host.line_count(buffer) {
        let width = host.line_display_width(buffer, line);
        if width <= limit {
            continue;
        }
        match stats.as_mut() {
            Some(stats) => {
                stats.count += 1;
                stats.max_width = stats.max_width.max(width);
            }
            None => {
                stats = Some(LongLineStats {
                    count: 1,
                    max_width: width,
                    first_line: line,
                })
            }
        }
    }
    stats
}

/// Status-line text: `#<count> $<max width>`, or empty when nothing is long
pub fn status_summary<H: EditorHost>(host: &H, buffer: BufferId) -> String {
    match long_line_stats(host, buffer) {
        Some(stats) => format!("#{} ${}", stats.count, stats.max_width),
        None => String::new(),
    }
}
