use std::fmt;

use crate::tracepoint::Tracepoint;

/// Writes the two-line-per-tracepoint rendering of a traceback:
///
/// ```text
/// 0: <kind> thrown at <file>:<line> in <function>
/// 0: Message: <message>
/// 1: Rethrown at <file>:<line> in <function>
/// 1: Message: <message>
/// ```
///
/// An empty traceback writes nothing.
pub fn write_traceback<W>(sink: &mut W, kind: &str, traceback: &[Tracepoint]) -> fmt::Result
where
    W: fmt::Write + ?Sized,
{
    let Some((origin, rethrows)) = traceback.split_first() else {
        return Ok(());
    };

    writeln!(sink, "0: {kind} thrown at {origin}")?;
    writeln!(sink, "0: Message: {}", origin.message())?;
    for (idx, point) in rethrows.iter().enumerate() {
        let idx = idx + 1;
        writeln!(sink, "{idx}: Rethrown at {point}")?;
        writeln!(sink, "{idx}: Message: {}", point.message())?;
    }
    Ok(())
}
