//! Text rendering of projection results

use super::format::format_num;
use crate::projection::ProjectionResult;

/// Message shown in place of a checkpoint whose total overflowed
pub fn overflow_message() -> String {
    let largest = format_num(f64::MAX);

    format!(
        "You earned so much money that you broke the program! \
         We're not sure exactly how much you earned, but it's at least {}. Wow!",
        largest.trim_start_matches('~')
    )
}

/// Render the report block for one checkpoint.
///
/// `age` is the investor's current age; 0 leaves the age clause out.
pub fn format_result(result: &ProjectionResult, age: u32) -> String {
    if result.overflowed {
        return overflow_message();
    }

    let age_str = if age > 0 {
        format!(" (age {})", u64::from(age) + u64::from(result.years))
    } else {
        String::new()
    };

    format!(
        "After {} years{} you would have {}.\n\
         \tYour total principal investment is {}.\n\
         \tYour profit is {}.\n\
         \tYour annual return is {} ({} after tax).",
        result.years,
        age_str,
        format_num(result.total_value),
        format_num(result.principal),
        format_num(result.profit),
        format_num(result.annual_return),
        format_num(result.annual_return_after_tax),
    )
}

/// Render every checkpoint, one block per line group, ending at the first overflow
pub fn render_report(results: &[ProjectionResult], age: u32) -> String {
    let mut report = String::new();

    for result in results {
        report.push_str(&format_result(result, age));
        report.push('\n');

        if result.overflowed {
            break;
        }
    }

    report
}
