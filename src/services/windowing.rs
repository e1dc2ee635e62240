use std::ops::Range;

use crate::domain::period::PeriodKind;

/// Number of windows needed to cover `record_count` days. The last one may be short.
pub fn total_instances(record_count: usize, period: PeriodKind) -> usize {
    record_count.div_ceil(period.days())
}

/// Day range covered by window `instance`, or `None` past the last window.
pub fn window_range(record_count: usize, period: PeriodKind, instance: usize) -> Option<Range<usize>> {
    if instance >= total_instances(record_count, period) {
        return None;
    }
    let days = period.days();
    let start = instance * days;
    let end = (start + days).min(record_count);
    Some(start..end)
}
