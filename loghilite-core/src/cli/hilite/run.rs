use crate::cli::hilite::options::{InputMode, RunOptions};
use crate::cli::hilite::output::LineOutput;
use crate::cli::hilite::types::{FollowEvent, RunSummary};
use crate::error::HiliteError;
use crate::highlight::{AlignmentState, Highlighter};
use crate::source::{FollowOptions, FollowReader, LineSource, StaticSource};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::mpsc::{self, Sender};
use std::thread;

/// Entry point for the command line: stdin in, stdout out.
pub fn run_hilite(options: &RunOptions) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    match run(options, stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(summary) => {
            tracing::debug!(
                sources = summary.sources,
                lines = summary.lines,
                "input exhausted"
            );
            Ok(())
        }
        Err(e) if e.is_broken_pipe() => {
            tracing::debug!("output closed by reader");
            Ok(())
        }
        Err(e) => Err(e).with_context(|| format!("failed to highlight {}", describe(&options.mode))),
    }
}

/// Highlights `options.mode`'s input into `out` using the built-in rule
/// table. `stdin` is only read in [`InputMode::Stdin`].
pub fn run<R: BufRead, W: Write>(
    options: &RunOptions,
    stdin: R,
    out: W,
) -> Result<RunSummary, HiliteError> {
    let state = Arc::new(AlignmentState::new());
    let highlighter = Arc::new(Highlighter::with_default_rules(state)?);

    run_with(highlighter, options, stdin, out)
}

pub fn run_with<R: BufRead, W: Write>(
    highlighter: Arc<Highlighter>,
    options: &RunOptions,
    stdin: R,
    out: W,
) -> Result<RunSummary, HiliteError> {
    let mut out = LineOutput::new(out, options.flush_each_line());

    let sources = match &options.mode {
        InputMode::Stdin => {
            let mut source = StaticSource::new(stdin);
            highlight_stream(&highlighter, &mut source, "stdin", &mut out)?;
            1
        }
        InputMode::Files(paths) => {
            run_files(&highlighter, paths, &mut out)?;
            paths.len()
        }
        InputMode::Follow(paths) => {
            run_follow(&highlighter, paths, &options.follow, &mut out)?;
            paths.len()
        }
    };

    let lines = out.lines();
    out.finish()?;

    Ok(RunSummary { sources, lines })
}

/// Copies every line of `source` to `out`, highlighted. Returns the number
/// of lines written.
pub fn highlight_stream<S: LineSource, W: Write>(
    highlighter: &Highlighter,
    source: &mut S,
    name: &str,
    out: &mut LineOutput<W>,
) -> Result<u64, HiliteError> {
    let mut count = 0;

    while let Some(line) = source.next_line().map_err(|source| HiliteError::Read {
        name: name.to_string(),
        source,
    })? {
        out.write_line(&highlighter.highlight(&line))?;
        count += 1;
    }

    Ok(count)
}

/// Files are read strictly one after another. The first file that cannot
/// be opened stops the run.
fn run_files<W: Write>(
    highlighter: &Highlighter,
    paths: &[PathBuf],
    out: &mut LineOutput<W>,
) -> Result<(), HiliteError> {
    for path in paths {
        let file = File::open(path).map_err(|source| HiliteError::Open {
            path: path.clone(),
            source,
        })?;

        let name = path.display().to_string();
        let mut source = StaticSource::new(BufReader::new(file));
        let lines = highlight_stream(highlighter, &mut source, &name, out)?;

        tracing::debug!(file = %name, lines, "file done");
    }

    Ok(())
}

/// One follower thread per file, all feeding a single writer.
///
/// Returns once every follower has ended. A follower that fails does not
/// stop the others; failures are reported after all of them are done.
fn run_follow<W: Write>(
    highlighter: &Arc<Highlighter>,
    paths: &[PathBuf],
    options: &FollowOptions,
    out: &mut LineOutput<W>,
) -> Result<(), HiliteError> {
    let (tx, rx) = mpsc::channel::<FollowEvent>();

    let handles: Vec<_> = paths
        .iter()
        .map(|path| {
            let tx = tx.clone();
            let path = path.clone();
            let options = options.clone();
            let highlighter = Arc::clone(highlighter);

            thread::spawn(move || follow_file(&path, &options, &highlighter, &tx))
        })
        .collect();

    // Only the followers hold senders now; the loop ends when all are gone.
    drop(tx);

    let mut failed = 0;

    for event in rx {
        match event {
            FollowEvent::Line(line) => out.write_line(&line)?,
            FollowEvent::Finished { label } => {
                tracing::debug!(file = %label, "follower finished");
            }
            FollowEvent::Failed { label, error } => {
                tracing::error!(file = %label, error = %error, "follower failed");
                failed += 1;
            }
        }
    }

    for handle in handles {
        if handle.join().is_err() {
            tracing::error!("follower panicked");
            failed += 1;
        }
    }

    if failed > 0 {
        return Err(HiliteError::FollowFailed {
            failed,
            total: paths.len(),
        });
    }

    Ok(())
}

fn follow_file(
    path: &Path,
    options: &FollowOptions,
    highlighter: &Highlighter,
    tx: &Sender<FollowEvent>,
) {
    let label = path.display().to_string();

    let result = FollowReader::open(path, options).and_then(|mut reader| {
        while let Some(line) = reader.next_line().map_err(|source| HiliteError::Read {
            name: label.clone(),
            source,
        })? {
            // Receiver gone: the writer stopped, nothing left to do.
            if tx.send(FollowEvent::Line(label_line(&label, highlighter, &line))).is_err() {
                break;
            }
        }
        Ok(())
    });

    let event = match result {
        Ok(()) => FollowEvent::Finished { label },
        Err(error) => FollowEvent::Failed { label, error },
    };
    let _ = tx.send(event);
}

/// `"<label>: <highlighted line>"`, always newline-terminated.
pub(crate) fn label_line(label: &str, highlighter: &Highlighter, line: &[u8]) -> Vec<u8> {
    let highlighted = highlighter.highlight(line);

    let mut out = Vec::with_capacity(label.len() + 2 + highlighted.len() + 1);
    out.extend_from_slice(label.as_bytes());
    out.extend_from_slice(b": ");
    out.extend_from_slice(&highlighted);
    if out.last() != Some(&b'\n') {
        out.push(b'\n');
    }
    out
}

fn describe(mode: &InputMode) -> String {
    match mode {
        InputMode::Stdin => "stdin".to_string(),
        InputMode::Files(paths) => format!("{} file(s)", paths.len()),
        InputMode::Follow(paths) => format!("{} followed file(s)", paths.len()),
    }
}
