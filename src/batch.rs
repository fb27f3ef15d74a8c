use std::io::{BufRead, Write};

use log::{debug, info, o};

use crate::analyzer::VideoQualityAnalyzer;
use crate::errors::BatchError;
use crate::evaluation::Evaluator;
use crate::submission::{ScoredSubmission, SubmissionRecord};

/// Counts of what a batch run did with its input.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BatchSummary {
    pub scored: usize,
    pub rejected: usize,
}

/// Scores one [`SubmissionRecord`] per line of `reader`, writing one
/// [`ScoredSubmission`] per line to `writer`.
///
/// Lines are read as raw bytes, so input that is not UTF-8 surfaces as a
/// decode error naming its line. Blank lines are skipped. Submissions the
/// evaluator rejects are logged and counted but not written. A line that
/// does not parse stops the run.
pub fn score_lines<R, W, A>(
    mut reader: R,
    mut writer: W,
    evaluator: &Evaluator<A>,
) -> Result<BatchSummary, BatchError>
where
    R: BufRead,
    W: Write,
    A: VideoQualityAnalyzer,
{
    let mut summary = BatchSummary::default();
    let mut line = Vec::new();
    let mut number = 0;

    loop {
        line.clear();
        number += 1;

        let read = reader
            .read_until(b'\n', &mut line)
            .map_err(|source| BatchError::Read { line: number, source })?;

        if read == 0 {
            break;
        }

        if line.iter().all(u8::is_ascii_whitespace) {
            continue;
        }

        let record: SubmissionRecord = serde_json::from_slice(&line)
            .map_err(|source| BatchError::Decode { line: number, source })?;

        let logger = evaluator
            .logger()
            .new(o!("id" => record.id.clone(), "line" => number));

        match evaluator.evaluate(&record.input) {
            Ok(result) => {
                debug!(logger, "Writing assessment...");

                let scored = ScoredSubmission::new(record.id, &result);
                serde_json::to_writer(&mut writer, &scored).map_err(BatchError::Encode)?;
                writer.write_all(b"\n").map_err(BatchError::Write)?;

                summary.scored += 1;
            }
            Err(error) => {
                info!(logger, "Skipping submission"; "reason" => error.to_string());
                summary.rejected += 1;
            }
        }
    }

    writer.flush().map_err(BatchError::Write)?;

    Ok(summary)
}
