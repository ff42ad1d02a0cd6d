use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc::Sender;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::events::{Key, PageCommand};
use crate::grid::ThumbId;

/// Parse one line of the interactive command surface.
pub fn parse_command(line: &str) -> Option<PageCommand> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        // A bare Enter toggles pause like the space bar.
        return Some(PageCommand::Key(Key::Space));
    };
    let word = word.to_ascii_lowercase();
    let mut number = || words.next()?.parse::<usize>().ok();

    let cmd = match word.as_str() {
        "right" | "n" | "next" => PageCommand::Key(Key::ArrowRight),
        "left" | "p" | "prev" => PageCommand::Key(Key::ArrowLeft),
        "space" | "pause" => PageCommand::Key(Key::Space),
        "esc" | "escape" => PageCommand::Key(Key::Escape),
        "start" => PageCommand::StartSlideshow,
        "stop" => PageCommand::StopSlideshow,
        "open" => PageCommand::OpenSelected,
        "backdrop" => PageCommand::BackdropClick,
        "unhover" => PageCommand::Unhover,
        "expand" => PageCommand::ExpandRow(number()?),
        "select" | "show" | "loaded" | "hover" => {
            let row = number()?;
            let column = number()?;
            let index = number().unwrap_or(0);
            let id = ThumbId::new(row, column, index);
            match word.as_str() {
                "select" => PageCommand::ToggleSelect(id),
                "show" => PageCommand::Intersect(vec![id]),
                "loaded" => PageCommand::ImageLoaded(id),
                _ => PageCommand::Hover(id),
            }
        }
        _ => return None,
    };
    Some(cmd)
}

/// Forward parsed lines from `input` to the page on a detached thread.
///
/// Blocking reads stay off the tokio runtime, so shutting the runtime down
/// never waits for a pending line. End of input or a read error cancels the
/// pipeline; a closed page channel or a cancelled token stops forwarding.
pub fn spawn_reader<R>(
    input: R,
    to_page: Sender<PageCommand>,
    cancel: CancellationToken,
) -> io::Result<thread::JoinHandle<()>>
where
    R: BufRead + Send + 'static,
{
    thread::Builder::new()
        .name("keyboard".into())
        .spawn(move || forward_lines(input, &to_page, &cancel))
}

fn forward_lines<R: BufRead>(input: R, to_page: &Sender<PageCommand>, cancel: &CancellationToken) {
    for line in input.lines() {
        if cancel.is_cancelled() {
            return;
        }
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                warn!("input read failed: {err}; initiating shutdown");
                cancel.cancel();
                return;
            }
        };
        match parse_command(&line) {
            Some(cmd) => {
                if to_page.blocking_send(cmd).is_err() {
                    warn!("page channel closed");
                    return;
                }
            }
            None => debug!(line = %line.trim(), "unrecognised command"),
        }
    }
    info!("input closed; initiating shutdown");
    cancel.cancel();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_keys_and_commands() {
        assert_eq!(parse_command("right"), Some(PageCommand::Key(Key::ArrowRight)));
        assert_eq!(parse_command(" P "), Some(PageCommand::Key(Key::ArrowLeft)));
        assert_eq!(parse_command(""), Some(PageCommand::Key(Key::Space)));
        assert_eq!(parse_command("esc"), Some(PageCommand::Key(Key::Escape)));
        assert_eq!(parse_command("start"), Some(PageCommand::StartSlideshow));
        assert_eq!(parse_command("expand 3"), Some(PageCommand::ExpandRow(3)));
        assert_eq!(
            parse_command("select 1 2"),
            Some(PageCommand::ToggleSelect(ThumbId::new(1, 2, 0)))
        );
        assert_eq!(
            parse_command("show 0 1 4"),
            Some(PageCommand::Intersect(vec![ThumbId::new(0, 1, 4)]))
        );
    }

    #[test]
    fn rejects_unknown_or_incomplete_lines() {
        assert_eq!(parse_command("dance"), None);
        assert_eq!(parse_command("select 1"), None);
        assert_eq!(parse_command("expand x"), None);
    }

    struct FailingInput;

    impl io::Read for FailingInput {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("device gone"))
        }
    }

    #[test]
    fn read_error_cancels_the_pipeline() {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<PageCommand>(4);
        let cancel = CancellationToken::new();
        let input = io::BufReader::new(FailingInput);
        spawn_reader(input, tx, cancel.clone())
            .unwrap()
            .join()
            .unwrap();
        assert!(cancel.is_cancelled());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn lines_after_cancel_are_not_forwarded() {
        let (tx, mut rx) = tokio::sync::mpsc::channel::<PageCommand>(4);
        let cancel = CancellationToken::new();
        cancel.cancel();
        let input: &'static [u8] = b"start\n";
        spawn_reader(input, tx, cancel).unwrap().join().unwrap();
        assert!(rx.try_recv().is_err());
    }
}
